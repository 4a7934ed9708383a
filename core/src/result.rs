//! The two-variant success-or-error value.
//!
//! [`Result`] holds exactly one of a success payload (`Ok`) or an error
//! payload (`Err`). It is a plain value: equality, ordering and hashing are
//! structural, and nothing mutates it after construction.
//!
//! Unlike the standard library's `Result`, reading the wrong side never
//! panics. Every extraction that can fail returns a
//! `std::result::Result` whose error is either an [`InvariantViolation`] or a
//! failure built by the caller.
//!
//! # Example
//!
//! ```
//! use algebra_core::Result;
//!
//! let parsed: Result<i32, String> = Result::ok(21);
//! let doubled = parsed.map(|n| n * 2);
//!
//! assert!(doubled.is_ok());
//! assert_eq!(doubled.to_string(), "Ok[42]");
//! assert_eq!(doubled.try_unwrap(), Ok(42));
//! ```

use crate::combinator::{self, Combined};
use crate::error::InvariantViolation;
use crate::null_value::NullValue;
use crate::projection::ErrorProjection;
use std::fmt;

type StdResult<T, E> = std::result::Result<T, E>;

/// A success value of type `S` or an error value of type `E`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[must_use = "this `Result` may be an `Err` variant, which should be handled"]
pub enum Result<S, E> {
    /// Success payload
    Ok(S),
    /// Error payload
    Err(E),
}

impl<S, E> Result<S, E> {
    /// Construct a success.
    pub const fn ok(value: S) -> Self {
        Self::Ok(value)
    }

    /// Construct an error.
    pub const fn err(error: E) -> Self {
        Self::Err(error)
    }

    /// Returns `true` if this is an `Ok`.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    /// Returns `true` if this is an `Err`.
    #[must_use]
    pub const fn is_err(&self) -> bool {
        matches!(self, Self::Err(_))
    }

    /// Borrow both sides.
    pub const fn as_ref(&self) -> Result<&S, &E> {
        match self {
            Self::Ok(value) => Result::Ok(value),
            Self::Err(error) => Result::Err(error),
        }
    }

    /// The success payload, if any.
    #[must_use]
    pub const fn get_ok(&self) -> Option<&S> {
        match self {
            Self::Ok(value) => Some(value),
            Self::Err(_) => None,
        }
    }

    /// The error payload, if any.
    #[must_use]
    pub const fn get_err(&self) -> Option<&E> {
        match self {
            Self::Ok(_) => None,
            Self::Err(error) => Some(error),
        }
    }

    /// Consume into the success payload, discarding an error.
    #[must_use]
    pub fn into_ok(self) -> Option<S> {
        match self {
            Self::Ok(value) => Some(value),
            Self::Err(_) => None,
        }
    }

    /// Consume into the error payload, discarding a success.
    #[must_use]
    pub fn into_err(self) -> Option<E> {
        match self {
            Self::Ok(_) => None,
            Self::Err(error) => Some(error),
        }
    }

    /// Convert into the standard library's `Result`.
    ///
    /// # Errors
    ///
    /// Returns the error payload when this is an `Err`.
    pub fn into_std(self) -> StdResult<S, E> {
        match self {
            Self::Ok(value) => Ok(value),
            Self::Err(error) => Err(error),
        }
    }

    /// Run `consumer` on the success payload; no-op for an `Err`.
    pub fn if_ok<F>(&self, consumer: F)
    where
        F: FnOnce(&S),
    {
        if let Self::Ok(value) = self {
            consumer(value);
        }
    }

    /// Run `consumer` on the error payload; no-op for an `Ok`.
    pub fn if_err<F>(&self, consumer: F)
    where
        F: FnOnce(&E),
    {
        if let Self::Err(error) = self {
            consumer(error);
        }
    }

    /// Run exactly one of the two callbacks, depending on the variant.
    pub fn consume<FE, FO>(&self, on_err: FE, on_ok: FO)
    where
        FE: FnOnce(&E),
        FO: FnOnce(&S),
    {
        match self {
            Self::Ok(value) => on_ok(value),
            Self::Err(error) => on_err(error),
        }
    }

    /// Collapse both sides into a single value.
    pub fn fold<R, FE, FO>(self, on_err: FE, on_ok: FO) -> R
    where
        FE: FnOnce(E) -> R,
        FO: FnOnce(S) -> R,
    {
        match self {
            Self::Ok(value) => on_ok(value),
            Self::Err(error) => on_err(error),
        }
    }

    /// Transform the success payload. An `Err` passes through untouched.
    pub fn map<T, F>(self, mapper: F) -> Result<T, E>
    where
        F: FnOnce(S) -> T,
    {
        match self {
            Self::Ok(value) => Result::Ok(mapper(value)),
            Self::Err(error) => Result::Err(error),
        }
    }

    /// Transform the error payload. An `Ok` passes through untouched.
    pub fn map_err<G, F>(self, mapper: F) -> Result<S, G>
    where
        F: FnOnce(E) -> G,
    {
        match self {
            Self::Ok(value) => Result::Ok(value),
            Self::Err(error) => Result::Err(mapper(error)),
        }
    }

    /// Chain a fallible step on the success payload.
    ///
    /// An `Err` short-circuits without calling `mapper`.
    pub fn flat_map<T, F>(self, mapper: F) -> Result<T, E>
    where
        F: FnOnce(S) -> Result<T, E>,
    {
        match self {
            Self::Ok(value) => mapper(value),
            Self::Err(error) => Result::Err(error),
        }
    }

    /// Chain a recovery step on the error payload.
    ///
    /// An `Ok` short-circuits without calling `mapper`.
    pub fn flat_map_err<G, F>(self, mapper: F) -> Result<S, G>
    where
        F: FnOnce(E) -> Result<S, G>,
    {
        match self {
            Self::Ok(value) => Result::Ok(value),
            Self::Err(error) => mapper(error),
        }
    }

    /// The success payload, or the failure built by `supplier`.
    ///
    /// # Errors
    ///
    /// Returns `supplier()` when this is an `Err`.
    pub fn ok_or_else<X, F>(self, supplier: F) -> StdResult<S, X>
    where
        F: FnOnce() -> X,
    {
        match self {
            Self::Ok(value) => Ok(value),
            Self::Err(_) => Err(supplier()),
        }
    }

    /// The success payload, or a failure derived from the error payload.
    ///
    /// # Errors
    ///
    /// Returns `mapper(error)` when this is an `Err`.
    pub fn ok_or_map<X, F>(self, mapper: F) -> StdResult<S, X>
    where
        F: FnOnce(E) -> X,
    {
        match self {
            Self::Ok(value) => Ok(value),
            Self::Err(error) => Err(mapper(error)),
        }
    }

    /// The success payload, or an [`InvariantViolation`] carrying `message`.
    ///
    /// # Errors
    ///
    /// Returns an [`InvariantViolation`] when this is an `Err`.
    pub fn expect(self, message: &str) -> StdResult<S, InvariantViolation> {
        self.ok_or_else(|| InvariantViolation::new(message))
    }

    /// The error payload, or the failure built by `supplier`.
    ///
    /// # Errors
    ///
    /// Returns `supplier()` when this is an `Ok`.
    pub fn err_or_else<X, F>(self, supplier: F) -> StdResult<E, X>
    where
        F: FnOnce() -> X,
    {
        match self {
            Self::Ok(_) => Err(supplier()),
            Self::Err(error) => Ok(error),
        }
    }

    /// The error payload, or a failure derived from the success payload.
    ///
    /// # Errors
    ///
    /// Returns `mapper(value)` when this is an `Ok`.
    pub fn err_or_map<X, F>(self, mapper: F) -> StdResult<E, X>
    where
        F: FnOnce(S) -> X,
    {
        match self {
            Self::Ok(value) => Err(mapper(value)),
            Self::Err(error) => Ok(error),
        }
    }

    /// The error payload, or an [`InvariantViolation`] carrying `message`.
    ///
    /// # Errors
    ///
    /// Returns an [`InvariantViolation`] when this is an `Ok`.
    pub fn expect_err(self, message: &str) -> StdResult<E, InvariantViolation> {
        self.err_or_else(|| InvariantViolation::new(message))
    }

    /// A read-only view focused on the error side.
    pub const fn error(self) -> ErrorProjection<S, E> {
        ErrorProjection::new(self)
    }

    /// Re-type the success side of an `Err`, keeping its error payload.
    ///
    /// # Errors
    ///
    /// Returns an [`InvariantViolation`] when this is an `Ok`: there is no
    /// error payload to carry over.
    pub fn coerce_err<T>(self) -> StdResult<Result<T, E>, InvariantViolation> {
        match self {
            Self::Ok(_) => Err(InvariantViolation::new(
                "coerce_err called on an Ok result",
            )),
            Self::Err(error) => Ok(Result::Err(error)),
        }
    }

    /// Start accumulating Results that share this error type.
    ///
    /// See [`Combined`] for the chaining rules.
    pub fn combine(self) -> Combined<(S,), E> {
        combinator::combine(self)
    }
}

impl<S, E: fmt::Display> Result<S, E> {
    /// The success payload, or an [`InvariantViolation`] whose message is the
    /// error payload's `Display` form, so `err("x")` fails with `x`.
    ///
    /// # Errors
    ///
    /// Returns an [`InvariantViolation`] when this is an `Err`.
    pub fn try_unwrap(self) -> StdResult<S, InvariantViolation> {
        self.ok_or_map(|error| InvariantViolation::from_payload(&error))
    }
}

impl<S: fmt::Display, E> Result<S, E> {
    /// The error payload, or an [`InvariantViolation`] whose message is the
    /// success payload's `Display` form.
    ///
    /// # Errors
    ///
    /// Returns an [`InvariantViolation`] when this is an `Ok`.
    pub fn try_unwrap_err(self) -> StdResult<E, InvariantViolation> {
        self.err_or_map(|value| InvariantViolation::from_payload(&value))
    }
}

impl<E> Result<NullValue, E> {
    /// A success with no meaningful value.
    pub const fn null_ok() -> Self {
        Self::Ok(NullValue)
    }
}

impl<S> Result<S, NullValue> {
    /// An error with no meaningful value.
    pub const fn null_err() -> Self {
        Self::Err(NullValue)
    }
}

impl<S, E> Result<Vec<S>, Vec<E>> {
    /// Aggregate many Results into one.
    ///
    /// If any input is an `Err`, the output is an `Err` holding every error
    /// payload in input order and the successes are dropped. Otherwise the
    /// output is an `Ok` holding every success payload in input order.
    ///
    /// ```
    /// use algebra_core::Result;
    ///
    /// let all_ok: Result<Vec<i32>, Vec<&str>> =
    ///     Result::all([Result::ok(1), Result::ok(2), Result::ok(3)]);
    /// assert_eq!(all_ok, Result::ok(vec![1, 2, 3]));
    ///
    /// let some_err: Result<Vec<i32>, Vec<&str>> =
    ///     Result::all([Result::ok(1), Result::err("x"), Result::err("y")]);
    /// assert_eq!(some_err, Result::err(vec!["x", "y"]));
    /// ```
    pub fn all<I>(results: I) -> Self
    where
        I: IntoIterator<Item = Result<S, E>>,
    {
        let mut successes = Vec::new();
        let mut errors = Vec::new();
        for result in results {
            match result {
                Result::Ok(value) if errors.is_empty() => successes.push(value),
                Result::Ok(_) => {},
                Result::Err(error) => errors.push(error),
            }
        }

        if errors.is_empty() {
            Self::Ok(successes)
        } else {
            Self::Err(errors)
        }
    }
}

impl<S, E> FromIterator<Result<S, E>> for Result<Vec<S>, Vec<E>> {
    fn from_iter<I: IntoIterator<Item = Result<S, E>>>(iter: I) -> Self {
        Self::all(iter)
    }
}

impl<S, E> From<StdResult<S, E>> for Result<S, E> {
    fn from(result: StdResult<S, E>) -> Self {
        match result {
            Ok(value) => Self::Ok(value),
            Err(error) => Self::Err(error),
        }
    }
}

impl<S, E> From<Result<S, E>> for StdResult<S, E> {
    fn from(result: Result<S, E>) -> Self {
        result.into_std()
    }
}

impl<S: fmt::Display, E: fmt::Display> fmt::Display for Result<S, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ok(value) => write!(f, "Ok[{value}]"),
            Self::Err(error) => write!(f, "Err[{error}]"),
        }
    }
}
