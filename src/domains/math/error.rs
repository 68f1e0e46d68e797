//! Math-specific error types.

use thiserror::Error;

/// Result type for operation library calls.
pub type MathResult<T> = Result<T, MathError>;

/// Errors raised by the arithmetic operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MathError {
    /// The input lies outside the operation's domain.
    #[error("{0}")]
    InvalidArgument(String),

    /// A zero divisor was supplied.
    #[error("{0}")]
    DivisionByZero(String),

    /// The input or the result exceeds a supported limit.
    #[error("{0}")]
    LimitExceeded(String),
}

impl MathError {
    /// Create a new "invalid argument" error.
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Create a new "division by zero" error.
    pub fn division_by_zero(msg: impl Into<String>) -> Self {
        Self::DivisionByZero(msg.into())
    }

    /// Create a new "limit exceeded" error.
    pub fn limit_exceeded(msg: impl Into<String>) -> Self {
        Self::LimitExceeded(msg.into())
    }

    /// Integer overflow in a reduction.
    pub(crate) fn overflow(operation: &str) -> Self {
        Self::LimitExceeded(format!(
            "{} result exceeds the 64-bit integer range",
            operation
        ))
    }
}
