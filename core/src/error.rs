//! Error type for reading the wrong side of a [`Result`](crate::Result).

use std::fmt::Display;
use thiserror::Error;

/// Raised when a [`Result`](crate::Result) is read as the variant it does not hold.
///
/// Produced by `try_unwrap` on an `Err`, `try_unwrap_err` on an `Ok`,
/// `expect`/`expect_err` on the mismatched side, and `coerce_err` on an `Ok`.
/// The message is either the caller's text or the stringified payload of
/// the side that was actually present.
#[derive(Error, Debug, Clone, PartialEq, Eq, Hash)]
#[error("{message}")]
pub struct InvariantViolation {
    message: String,
}

impl InvariantViolation {
    /// Create a violation with the given message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Create a violation whose message is the `Display` rendering of a payload.
    #[must_use]
    pub fn from_payload<T: Display + ?Sized>(payload: &T) -> Self {
        Self::new(payload.to_string())
    }

    /// The message carried by this violation.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}
