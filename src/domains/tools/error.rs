//! Tool-specific error types.

use thiserror::Error;

use crate::domains::math::MathError;

/// Result type for tool dispatch.
pub type ToolResult<T> = Result<T, ToolError>;

/// Errors that can occur while dispatching a function call.
///
/// Every variant is recovered by the dispatcher and reported to the caller
/// as an error envelope; none of them reaches the transport.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ToolError {
    /// No accepted alias for a required parameter was present.
    #[error(
        "Missing {parameter} argument. Expected: {}. Received: {}",
        format_expected(expected),
        format_received(received)
    )]
    MissingArgument {
        parameter: String,
        expected: Vec<String>,
        received: Vec<String>,
    },

    /// The requested function is not in the catalogue.
    #[error("Unknown function: {0}")]
    UnknownOperation(String),

    /// A list argument could not be coerced to a list of integers.
    #[error("Invalid list format")]
    MalformedList,

    /// The request payload could not be decoded.
    #[error("Invalid request format")]
    MalformedRequest,

    /// A scalar argument could not be coerced to the required type.
    #[error("Invalid value for '{parameter}': expected {expected}, got {actual}")]
    InvalidArgument {
        parameter: String,
        expected: String,
        actual: String,
    },

    /// The operation itself rejected its input.
    #[error(transparent)]
    Operation(#[from] MathError),
}

/// Flat view of the error taxonomy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidArgument,
    DivisionByZero,
    LimitExceeded,
    MissingArgument,
    UnknownOperation,
    MalformedList,
    MalformedRequest,
}

impl ToolError {
    /// Create a new "missing argument" error.
    pub fn missing_argument<'a>(
        parameter: impl Into<String>,
        expected: &[&str],
        received: impl IntoIterator<Item = &'a String>,
    ) -> Self {
        Self::MissingArgument {
            parameter: parameter.into(),
            expected: expected.iter().map(|s| s.to_string()).collect(),
            received: received.into_iter().cloned().collect(),
        }
    }

    /// Create a new "unknown operation" error.
    pub fn unknown_operation(name: impl Into<String>) -> Self {
        Self::UnknownOperation(name.into())
    }

    /// Create a new "invalid argument" error for a scalar coercion failure.
    pub fn invalid_argument(
        parameter: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self::InvalidArgument {
            parameter: parameter.into(),
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingArgument { .. } => ErrorKind::MissingArgument,
            Self::UnknownOperation(_) => ErrorKind::UnknownOperation,
            Self::MalformedList => ErrorKind::MalformedList,
            Self::MalformedRequest => ErrorKind::MalformedRequest,
            Self::InvalidArgument { .. } => ErrorKind::InvalidArgument,
            Self::Operation(MathError::InvalidArgument(_)) => ErrorKind::InvalidArgument,
            Self::Operation(MathError::DivisionByZero(_)) => ErrorKind::DivisionByZero,
            Self::Operation(MathError::LimitExceeded(_)) => ErrorKind::LimitExceeded,
        }
    }
}

fn format_expected(expected: &[String]) -> String {
    let quoted: Vec<String> = expected.iter().map(|s| format!("'{}'", s)).collect();
    match quoted.as_slice() {
        [] => String::new(),
        [only] => only.clone(),
        [init @ .., last] => format!("{}, or {}", init.join(", "), last),
    }
}

fn format_received(received: &[String]) -> String {
    if received.is_empty() {
        "(none)".to_string()
    } else {
        received.join(", ")
    }
}
