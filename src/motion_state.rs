use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ProfileError;

/// Position, velocity and acceleration of a single axis at one instant.
///
/// The acceleration is held constant whenever the state is combined with a
/// duration.
#[derive(Default, Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionState {
    pub x: f64,
    pub v: f64,
    pub a: f64,
}

impl MotionState {
    /// Creates a new MotionState.
    pub fn new(x: f64, v: f64, a: f64) -> Self {
        Self { x, v, a }
    }

    /// Returns the state reached after `dt` seconds of constant acceleration.
    ///
    /// A negative `dt` projects the state backward in time.
    pub fn calculate(&self, dt: f64) -> MotionState {
        MotionState {
            // x(t) = x0 + v0*t + a*t^2/2
            x: self.x + self.v * dt + 0.5 * self.a * dt * dt,
            v: self.v + self.a * dt,
            a: self.a,
        }
    }

    /// Unsigned distance covered over `dt`.
    pub fn integrate(&self, dt: f64) -> f64 {
        (self.v * dt + 0.5 * self.a * dt * dt).abs()
    }

    /// Same position and velocity with a different acceleration.
    pub fn with_acceleration(self, a: f64) -> Self {
        Self { a, ..self }
    }

    pub(crate) fn validate(&self, which: Endpoint) -> Result<(), ProfileError> {
        let fields = [(which.x_name(), self.x), (which.v_name(), self.v)];
        for (name, value) in fields {
            if !value.is_finite() {
                return Err(ProfileError::InvalidState { name, value });
            }
        }
        Ok(())
    }
}

impl fmt::Display for MotionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x: {}, v: {}, a: {}", self.x, self.v, self.a)
    }
}

/// Which boundary of a profile a state describes, for error reporting.
#[derive(Clone, Copy)]
pub(crate) enum Endpoint {
    Start,
    End,
}

impl Endpoint {
    fn x_name(self) -> &'static str {
        match self {
            Endpoint::Start => "start.x",
            Endpoint::End => "end.x",
        }
    }

    fn v_name(self) -> &'static str {
        match self {
            Endpoint::Start => "start.v",
            Endpoint::End => "end.v",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::approx_eq;

    #[test]
    fn calculate_applies_constant_acceleration() {
        let s = MotionState::new(1.0, 2.0, 4.0).calculate(0.5);
        assert!(approx_eq!(f64, s.x, 1.0 + 1.0 + 0.5, epsilon = 1e-12));
        assert!(approx_eq!(f64, s.v, 4.0, epsilon = 1e-12));
        assert_eq!(s.a, 4.0);
    }

    #[test]
    fn negative_dt_reverses_a_forward_projection() {
        let start = MotionState::new(3.0, 10.0, -2.0);
        let back = start.calculate(1.5).calculate(-1.5);
        assert!(approx_eq!(f64, back.x, start.x, epsilon = 1e-12));
        assert!(approx_eq!(f64, back.v, start.v, epsilon = 1e-12));
    }

    #[test]
    fn integrate_discards_sign() {
        let s = MotionState::new(0.0, -4.0, 0.0);
        assert!(approx_eq!(f64, s.integrate(2.0), 8.0, epsilon = 1e-12));
        assert!(approx_eq!(f64, s.calculate(2.0).x, -8.0, epsilon = 1e-12));
    }

    #[test]
    fn non_finite_fields_are_rejected() {
        let err = MotionState::new(f64::NAN, 0.0, 0.0)
            .validate(Endpoint::End)
            .unwrap_err();
        assert!(matches!(err, ProfileError::InvalidState { name: "end.x", .. }));
    }
}
