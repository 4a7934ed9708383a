//! Error-side projection of a [`Result`].
//!
//! [`Result::error`] hands out an [`ErrorProjection`]: a view that only
//! exposes combinators for the error payload. Mapping through the projection
//! never touches an `Ok`; it just carries it along until the caller leaves the
//! view with [`ErrorProjection::into_result`].
//!
//! ```
//! use algebra_core::Result;
//!
//! let failed: Result<u32, &str> = Result::err("timeout");
//! let projection = failed.error().map(str::len);
//!
//! assert!(projection.exists(|len| *len == 7));
//! assert_eq!(projection.to_option(), Some(7));
//! ```

use crate::result::Result;

/// A read-only view of a [`Result`] focused on its error side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[must_use]
pub struct ErrorProjection<S, E> {
    result: Result<S, E>,
}

impl<S, E> ErrorProjection<S, E> {
    pub(crate) const fn new(result: Result<S, E>) -> Self {
        Self { result }
    }

    /// Transform the error payload, yielding a new projection.
    pub fn map<G, F>(self, mapper: F) -> ErrorProjection<S, G>
    where
        F: FnOnce(E) -> G,
    {
        ErrorProjection::new(self.result.map_err(mapper))
    }

    /// Replace the error payload with the error side of another Result.
    ///
    /// If `mapper` returns an `Ok`, the projection now wraps that success.
    pub fn flat_map<G, F>(self, mapper: F) -> ErrorProjection<S, G>
    where
        F: FnOnce(E) -> Result<S, G>,
    {
        ErrorProjection::new(self.result.flat_map_err(mapper))
    }

    /// The error payload when the underlying Result is an `Err`.
    #[must_use]
    pub fn to_option(self) -> Option<E> {
        self.result.into_err()
    }

    /// `true` only for an `Err` whose payload satisfies `predicate`.
    #[must_use]
    pub fn exists<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&E) -> bool,
    {
        self.result.get_err().is_some_and(predicate)
    }

    /// Leave the view.
    pub fn into_result(self) -> Result<S, E> {
        self.result
    }
}

impl<S, E> From<ErrorProjection<S, E>> for Result<S, E> {
    fn from(projection: ErrorProjection<S, E>) -> Self {
        projection.into_result()
    }
}
