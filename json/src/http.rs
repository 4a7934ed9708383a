//! Result carrier for HTTP response bodies.
//!
//! Unlike the envelope, this shape pairs the two payload slots with a status
//! code so a client can branch on the status before touching the body.
//!
//! ```json
//! {"okResultMaybe":null,"errResultMaybe":"not found","httpStatusCode":404}
//! ```

use algebra_core::{InvariantViolation, Result};
use serde::{Deserialize, Serialize};

const DEFAULT_STATUS: u16 = 200;
const DEFAULT_ERROR_STATUS: u16 = 500;

const fn default_status() -> u16 {
    DEFAULT_STATUS
}

/// A Result paired with an HTTP status code.
///
/// Exactly one of the two payload slots is set. Wrappers built through
/// [`HttpResultWrapper::ok`], [`HttpResultWrapper::err`] or `From<Result>`
/// uphold this; deserialized ones should be checked with
/// [`HttpResultWrapper::validate`] or [`HttpResultWrapper::into_result`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HttpResultWrapper<T, E> {
    ok_result_maybe: Option<T>,
    err_result_maybe: Option<E>,
    #[serde(default = "default_status")]
    http_status_code: u16,
}

impl<T, E> HttpResultWrapper<T, E> {
    /// A success with status 200.
    #[must_use]
    pub const fn ok(value: T) -> Self {
        Self {
            ok_result_maybe: Some(value),
            err_result_maybe: None,
            http_status_code: DEFAULT_STATUS,
        }
    }

    /// An error with an explicit status.
    #[must_use]
    pub const fn err(error: E, http_status_code: u16) -> Self {
        Self {
            ok_result_maybe: None,
            err_result_maybe: Some(error),
            http_status_code,
        }
    }

    /// The success payload, if any.
    #[must_use]
    pub const fn ok_result_maybe(&self) -> Option<&T> {
        self.ok_result_maybe.as_ref()
    }

    /// The error payload, if any.
    #[must_use]
    pub const fn err_result_maybe(&self) -> Option<&E> {
        self.err_result_maybe.as_ref()
    }

    /// The status code.
    #[must_use]
    pub const fn http_status_code(&self) -> u16 {
        self.http_status_code
    }

    /// Check that exactly one payload slot is set.
    ///
    /// # Errors
    ///
    /// Returns [`InvariantViolation`] when both or neither slot is set.
    pub fn validate(&self) -> std::result::Result<(), InvariantViolation> {
        if self.ok_result_maybe.is_some() == self.err_result_maybe.is_some() {
            return Err(exactly_one());
        }
        Ok(())
    }

    /// Convert back into a Result, dropping the status code.
    ///
    /// # Errors
    ///
    /// Returns [`InvariantViolation`] when both or neither slot is set.
    pub fn into_result(self) -> std::result::Result<Result<T, E>, InvariantViolation> {
        match (self.ok_result_maybe, self.err_result_maybe) {
            (Some(value), None) => Ok(Result::Ok(value)),
            (None, Some(error)) => Ok(Result::Err(error)),
            (ok, _) => {
                tracing::debug!(
                    both = ok.is_some(),
                    status = self.http_status_code,
                    "Rejected HTTP result wrapper"
                );
                Err(exactly_one())
            },
        }
    }
}

fn exactly_one() -> InvariantViolation {
    InvariantViolation::new("Exactly one of ok/err must be present")
}

impl<T, E> From<Result<T, E>> for HttpResultWrapper<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Result::Ok(value) => Self::ok(value),
            Result::Err(error) => Self::err(error, DEFAULT_ERROR_STATUS),
        }
    }
}
