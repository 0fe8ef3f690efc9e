//! Error types for field and group operations.

use thiserror::Error;

/// Errors that can occur while building curves or combining points.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CurveError {
    /// A scalar supplied to scalar multiplication has a fractional part
    /// or is not finite.
    ///
    /// Only reachable through the floating-point `Scalar` impls; integer
    /// scalars cannot express this case.
    #[error("Scalar is not an integer.")]
    ScalarNotInteger,
    /// A scalar supplied to scalar multiplication is below zero.
    #[error("Scalar is negative.")]
    ScalarNegative,
    /// The coordinates are out of range or do not satisfy the curve equation.
    #[error("point is not on the curve")]
    PointNotOnCurve,
    /// The operation combined points that belong to different groups.
    #[error("points belong to different groups")]
    GroupMismatch,
    /// Inversion of the zero field element was requested.
    ///
    /// The group law avoids this through its case analysis, so seeing it
    /// means an internal invariant was broken.
    #[error("attempted to invert zero")]
    DivisionByZero,
    #[error("invalid curve parameters: {0}")]
    InvalidCurveParameters(String),
    #[error("unequal slice lengths: {0} and {1}")]
    InvalidInputLengths(usize, usize),
}
