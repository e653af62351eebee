use tracing::trace;

use crate::buffer_fifo::BufferFIFO;
use crate::motion_profile::MotionProfile;
use crate::motion_state::MotionState;

/// Plays queued profiles back one tick at a time, for a fixed-rate control loop.
pub struct ProfileExecutor<const N: usize> {
    /// Profiles waiting to run
    buffer: BufferFIFO<MotionProfile, N>,

    /// The profile currently being played
    active: MotionProfile,

    /// The current reference state
    inst: MotionState,

    /// Update frequency in Hz
    freq: f64,

    /// Ticks elapsed in the active profile
    time: u64,

    /// Length of the active profile in ticks
    duration: u64,

    /// False until the first profile is loaded
    loaded: bool,
}

impl<const N: usize> ProfileExecutor<N> {
    /// Creates a new executor ticking at `freq` Hz.
    pub fn new(freq: u16) -> Self {
        Self {
            buffer: BufferFIFO::new(),
            active: MotionProfile::default(),
            inst: MotionState::default(),
            freq: f64::from(freq.max(1)),
            time: 0,
            duration: 0,
            loaded: false,
        }
    }

    /// Queues a profile. When the queue is full the oldest waiting profile is dropped.
    pub fn add_profile(&mut self, profile: MotionProfile) {
        self.buffer.push(profile);
    }

    /// Loads the next queued profile with a non-zero duration.
    fn get_next(&mut self) -> bool {
        while let Some(profile) = self.buffer.pop() {
            if profile.duration() > 0.0 {
                self.active = profile;
                self.inst = profile.get(0.0);
                self.duration = (profile.duration() * self.freq).ceil() as u64;
                self.time = 0;
                self.loaded = true;
                trace!(
                    "Loaded profile: {:.4}s, {} ticks",
                    profile.duration(),
                    self.duration
                );
                return true;
            }
            trace!("Skipping zero-duration profile");
        }
        false
    }

    /// Advances one tick, moving on to the next profile when the active one is done.
    pub fn tick(&mut self) {
        if (!self.loaded || self.time >= self.duration) && !self.get_next() {
            return;
        }
        self.time += 1;
        self.inst = self.active.get(self.time as f64 / self.freq);
    }

    /// Sets a new frequency in Hz, keeping the elapsed time of the active profile.
    pub fn set_freq(&mut self, freq: u16) {
        let freq = f64::from(freq.max(1));
        let elapsed = self.time as f64 / self.freq;
        self.freq = freq;
        self.time = (elapsed * freq).round() as u64;
        self.duration = (self.active.duration() * freq).ceil() as u64;
    }

    pub fn state(&self) -> MotionState {
        self.inst
    }

    /// Returns the current acceleration.
    pub fn get_acc(&self) -> f64 {
        self.inst.a
    }

    /// Returns the current velocity.
    pub fn get_vel(&self) -> f64 {
        self.inst.v
    }

    /// Returns the current position.
    pub fn get_pos(&self) -> f64 {
        self.inst.x
    }

    /// Number of profiles waiting behind the active one.
    pub fn queued(&self) -> usize {
        self.buffer.len()
    }

    /// Checks if the queue is full.
    pub fn is_full(&self) -> bool {
        self.buffer.is_full()
    }

    /// True when the active profile has finished and nothing is queued.
    pub fn is_idle(&self) -> bool {
        self.buffer.is_empty() && (!self.loaded || self.time >= self.duration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MotionConstraints;
    use float_cmp::approx_eq;

    fn profile(from: f64, to: f64) -> MotionProfile {
        let c = MotionConstraints::new(40.0, 16.0, 16.0);
        MotionProfile::new(
            MotionState::new(from, 0.0, 0.0),
            MotionState::new(to, 0.0, 0.0),
            c,
        )
        .unwrap()
    }

    #[test]
    fn idle_executor_holds_default_state() {
        let mut exec = ProfileExecutor::<4>::new(100);
        assert!(exec.is_idle());
        exec.tick();
        assert_eq!(exec.state(), MotionState::default());
    }

    #[test]
    fn runs_profile_to_its_end() {
        let mut exec = ProfileExecutor::<4>::new(100);
        exec.add_profile(profile(0.0, 200.0));

        // 7.5s at 100Hz
        for _ in 0..750 {
            exec.tick();
        }
        assert!(exec.is_idle());
        assert!(approx_eq!(f64, exec.get_pos(), 200.0, epsilon = 1e-6));
        assert!(approx_eq!(f64, exec.get_vel(), 0.0, epsilon = 1e-6));

        exec.tick();
        assert!(approx_eq!(f64, exec.get_pos(), 200.0, epsilon = 1e-6));
    }

    #[test]
    fn chains_queued_profiles() {
        let mut exec = ProfileExecutor::<4>::new(100);
        exec.add_profile(profile(0.0, 200.0));
        exec.add_profile(MotionProfile::default());
        exec.add_profile(profile(200.0, 400.0));
        assert_eq!(exec.queued(), 3);

        for _ in 0..1500 {
            exec.tick();
        }
        assert!(exec.is_idle());
        assert!(approx_eq!(f64, exec.get_pos(), 400.0, epsilon = 1e-6));
    }

    #[test]
    fn frequency_change_keeps_elapsed_time() {
        let mut exec = ProfileExecutor::<2>::new(10);
        exec.add_profile(profile(0.0, 200.0));
        for _ in 0..10 {
            exec.tick();
        }
        exec.set_freq(100);
        exec.tick();
        // 1.01s into the accel phase
        assert!(approx_eq!(f64, exec.get_vel(), 16.0 * 1.01, epsilon = 1e-9));
    }

    #[test]
    fn first_tick_starts_motion() {
        let mut exec = ProfileExecutor::<1>::new(10);
        exec.add_profile(profile(0.0, 200.0));
        assert!(exec.is_full());
        exec.tick();
        assert!(!exec.is_idle());
        assert!(approx_eq!(f64, exec.get_acc(), 16.0, epsilon = 1e-12));
        assert!(approx_eq!(f64, exec.get_vel(), 1.6, epsilon = 1e-12));
    }
}
