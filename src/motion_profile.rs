use tracing::debug;

use crate::error::ProfileError;
use crate::motion_constraints::MotionConstraints;
use crate::motion_phase::MotionPhase;
use crate::motion_state::{Endpoint, MotionState};

/// Phase of a profile that a given instant falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfilePhase {
    /// Ramping from the start velocity toward cruise velocity.
    Accelerating,
    /// Constant velocity.
    Cruising,
    /// Ramping from cruise velocity toward the end velocity.
    Decelerating,
    /// Past the end of the profile.
    Complete,
}

/// Asymmetric trapezoidal motion profile between two states.
///
/// All phase math happens once in [`MotionProfile::new`]; afterwards the profile is
/// an immutable, closed-form function of elapsed time.
#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub struct MotionProfile {
    accel: MotionPhase,
    cruise: MotionPhase,
    decel: MotionPhase,

    /// accel + cruise + decel durations
    duration: f64,

    /// Sum of the unsigned phase displacements. Diagnostic only.
    total_integral: f64,

    /// State at `duration`, returned for any later query.
    end_state: MotionState,

    /// Set when the minimum cruise time forced the symmetric fallback.
    corrected: bool,
}

impl MotionProfile {
    /// Builds the profile from `start` to `end` under `constraints`.
    ///
    /// # Detailed explanation of the logic:
    ///
    /// 1. **Ramp durations**: accel takes `|v_max - start.v| / a_max`, decel takes
    ///    `|end.v - v_max| / d_max`.
    ///
    /// 2. **Accel phase** starts at `start` with acceleration `+a_max`.
    ///
    /// 3. **Decel phase** start is recovered by taking `end` with acceleration `-d_max`
    ///    and projecting it backward by the decel duration, so running the phase forward
    ///    lands exactly on `end`.
    ///
    /// 4. **Cruise phase** starts at the end of the accel phase with zero acceleration.
    ///
    /// 5. **Cruise duration** is whatever distance the ramps leave over, covered at `v_max`.
    ///
    /// 6. **Minimum cruise correction**: if the cruise duration comes out below
    ///    `min_cruise_time`, cruise is forced to that minimum, both ramps use the larger of
    ///    the two acceleration caps, and each ramp lasts `sqrt(|end.x| / accel)`. The
    ///    phases are rebuilt forward from `start` so the seams stay continuous. This
    ///    approximation only lands on `end` for rest-to-rest moves from the origin with no
    ///    enforced cruise.
    ///
    /// The caller's `constraints` are never modified.
    pub fn new(
        start: MotionState,
        end: MotionState,
        constraints: MotionConstraints,
    ) -> Result<Self, ProfileError> {
        constraints.validate()?;
        start.validate(Endpoint::Start)?;
        end.validate(Endpoint::End)?;

        let MotionConstraints {
            v_max,
            a_max,
            d_max,
            min_cruise_time,
        } = constraints;

        // 1) Ramp durations
        let accel_time = (v_max - start.v).abs() / a_max;
        let decel_time = (end.v - v_max).abs() / d_max;

        // 2) + 3) Ramp phases
        let mut accel = MotionPhase::new(start.with_acceleration(a_max), accel_time);
        let mut decel = MotionPhase::new(
            end.with_acceleration(-d_max).calculate(-decel_time),
            decel_time,
        );

        // 4) + 5) Cruise covers the leftover distance
        let leftover = (end.x - start.x) - accel.displacement() - decel.displacement();
        let mut cruise = MotionPhase::new(
            accel.end_state().with_acceleration(0.0),
            leftover / v_max,
        );

        // 6) Cruise too short => symmetric fallback
        let corrected = cruise.duration < min_cruise_time;
        if corrected {
            debug!(
                "Cruise time {:.4}s below minimum {:.4}s, equalizing ramps",
                cruise.duration, min_cruise_time
            );
            if end.x == 0.0 {
                return Err(ProfileError::DivisionByZero {
                    context: "minimum cruise correction needs a non-zero end position",
                });
            }
            let symmetric = constraints.equalized();
            let ramp_time = (end.x.abs() / symmetric.a_max).sqrt();

            accel = MotionPhase::new(start.with_acceleration(symmetric.a_max), ramp_time);
            cruise = MotionPhase::new(accel.end_state().with_acceleration(0.0), min_cruise_time);
            decel = MotionPhase::new(
                cruise.end_state().with_acceleration(-symmetric.d_max),
                ramp_time,
            );
        }

        // 7) Totals
        let duration = accel.duration + cruise.duration + decel.duration;
        let total_integral = accel.displacement() + cruise.displacement() + decel.displacement();

        debug!(
            "Planned profile: accel {:.4}s, cruise {:.4}s, decel {:.4}s, duration {:.4}s, integral {:.4}",
            accel.duration, cruise.duration, decel.duration, duration, total_integral
        );

        Ok(Self {
            accel,
            cruise,
            decel,
            duration,
            total_integral,
            end_state: decel.end_state(),
            corrected,
        })
    }

    /// State of the profile `t` seconds after it started.
    ///
    /// A time exactly on a phase boundary belongs to the earlier phase. Negative or NaN
    /// times give the start state; times past [`duration`](Self::duration) give the
    /// terminal state.
    pub fn get(&self, t: f64) -> MotionState {
        let cruise_begin = self.accel.duration;
        let decel_begin = cruise_begin + self.cruise.duration;

        if t.is_nan() || t <= 0.0 {
            self.accel.start
        } else if t <= cruise_begin {
            self.accel.at(t)
        } else if t <= decel_begin {
            self.cruise.at(t - cruise_begin)
        } else if t <= self.duration {
            self.decel.at(t - decel_begin)
        } else {
            self.end_state
        }
    }

    /// Which phase `t` falls into, using the same boundaries as [`get`](Self::get).
    pub fn phase_at(&self, t: f64) -> ProfilePhase {
        let cruise_begin = self.accel.duration;
        let decel_begin = cruise_begin + self.cruise.duration;

        if t.is_nan() || t <= cruise_begin {
            ProfilePhase::Accelerating
        } else if t <= decel_begin {
            ProfilePhase::Cruising
        } else if t <= self.duration {
            ProfilePhase::Decelerating
        } else {
            ProfilePhase::Complete
        }
    }

    /// Samples the profile every `step` seconds over `[0, duration)`.
    ///
    /// Yields nothing for a non-positive or non-finite step.
    pub fn samples(&self, step: f64) -> impl Iterator<Item = (f64, MotionState)> + '_ {
        let limit = if step.is_finite() && step > 0.0 {
            self.duration
        } else {
            0.0
        };
        (0u64..)
            .map(move |i| i as f64 * step)
            .take_while(move |t| *t < limit)
            .map(move |t| (t, self.get(t)))
    }

    // -----------------------------------------------------------------
    //  Getter methods for MotionProfile
    // -----------------------------------------------------------------

    /// Total profile duration; the valid query range is `[0, duration]`.
    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn accel_duration(&self) -> f64 {
        self.accel.duration
    }

    pub fn cruise_duration(&self) -> f64 {
        self.cruise.duration
    }

    pub fn decel_duration(&self) -> f64 {
        self.decel.duration
    }

    pub fn accel_phase(&self) -> MotionPhase {
        self.accel
    }

    pub fn cruise_phase(&self) -> MotionPhase {
        self.cruise
    }

    pub fn decel_phase(&self) -> MotionPhase {
        self.decel
    }

    /// Sum of the unsigned distance covered by each phase.
    pub fn total_integral(&self) -> f64 {
        self.total_integral
    }

    /// State at the end of the profile.
    pub fn end_state(&self) -> MotionState {
        self.end_state
    }

    /// True if the minimum cruise time forced the symmetric fallback.
    pub fn is_corrected(&self) -> bool {
        self.corrected
    }
}
