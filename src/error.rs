use thiserror::Error;

/// Errors raised while constructing a motion profile.
///
/// All validation happens eagerly in [`MotionProfile::new`](crate::MotionProfile::new);
/// evaluating an existing profile never fails.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ProfileError {
    #[error("invalid constraint: {name} = {value}")]
    InvalidConstraint { name: &'static str, value: f64 },
    #[error("invalid state: {name} = {value} is not finite")]
    InvalidState { name: &'static str, value: f64 },
    #[error("division by zero: {context}")]
    DivisionByZero { context: &'static str },
}
