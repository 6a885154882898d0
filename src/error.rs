use thiserror::Error;

/// Programmer-error signals from the planner core. Nothing else in this
/// crate returns an `Err` — route validation and analytics always produce a
/// result value, never fail.
#[derive(Debug, Error, PartialEq)]
pub enum PlannerError {
    /// A polygon handed to the planner violates the obstacle invariants:
    /// fewer than three vertices, or two cyclically-consecutive vertices
    /// that coincide.
    #[error("obstacle {index} is invalid: {reason}")]
    InvalidObstacle { index: usize, reason: String },
}
