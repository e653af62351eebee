use crate::motion_state::MotionState;

/// One constant-acceleration segment of a profile.
#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub struct MotionPhase {
    pub start: MotionState,
    pub duration: f64,
}

impl MotionPhase {
    /// Creates a new MotionPhase.
    pub fn new(start: MotionState, duration: f64) -> Self {
        Self { start, duration }
    }

    /// State `dt` seconds after the phase began.
    pub fn at(&self, dt: f64) -> MotionState {
        self.start.calculate(dt)
    }

    pub fn end_state(&self) -> MotionState {
        self.at(self.duration)
    }

    /// Unsigned distance covered by the whole phase.
    pub fn displacement(&self) -> f64 {
        self.start.integrate(self.duration)
    }
}
