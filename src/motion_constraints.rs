use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ProfileError;

/// Kinematic limits a [`MotionProfile`](crate::MotionProfile) must obey.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MotionConstraints {
    /// Cruise velocity.
    pub v_max: f64,

    /// Acceleration magnitude.
    pub a_max: f64,

    /// Deceleration magnitude.
    pub d_max: f64,

    /// Shortest allowed cruise phase. Zero means no minimum is enforced.
    #[serde(default)]
    pub min_cruise_time: f64,
}

impl MotionConstraints {
    /// Creates constraints with no minimum cruise time.
    pub fn new(v_max: f64, a_max: f64, d_max: f64) -> Self {
        Self {
            v_max,
            a_max,
            d_max,
            min_cruise_time: 0.0,
        }
    }

    /// Deceleration equal to acceleration.
    pub fn symmetric(v_max: f64, accel: f64) -> Self {
        Self::new(v_max, accel, accel)
    }

    pub fn with_min_cruise_time(self, min_cruise_time: f64) -> Self {
        Self {
            min_cruise_time,
            ..self
        }
    }

    /// Checks that every cap is finite and strictly positive and that the
    /// minimum cruise time is finite and non-negative.
    pub fn validate(&self) -> Result<(), ProfileError> {
        let caps = [
            ("v_max", self.v_max),
            ("a_max", self.a_max),
            ("d_max", self.d_max),
        ];
        for (name, value) in caps {
            if !value.is_finite() || value <= 0.0 {
                return Err(ProfileError::InvalidConstraint { name, value });
            }
        }
        if !self.min_cruise_time.is_finite() || self.min_cruise_time < 0.0 {
            return Err(ProfileError::InvalidConstraint {
                name: "min_cruise_time",
                value: self.min_cruise_time,
            });
        }
        Ok(())
    }

    /// Copy with acceleration and deceleration both set to the larger magnitude.
    pub fn equalized(&self) -> Self {
        let accel = self.a_max.abs().max(self.d_max.abs());
        Self {
            a_max: accel,
            d_max: accel,
            ..*self
        }
    }
}

impl fmt::Display for MotionConstraints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "v_max: {}, a_max: {}, d_max: {}, min_cruise_time: {}",
            self.v_max, self.a_max, self.d_max, self.min_cruise_time
        )
    }
}
