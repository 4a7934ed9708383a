//! # Algebra Core
//!
//! A two-variant success-or-error value and the small algebra built around it.
//!
//! - [`Result`]: exactly one of `Ok(S)` or `Err(E)`, with per-side mapping,
//!   flat-mapping and non-panicking extraction
//! - [`ErrorProjection`]: a view exposing error-side combinators only
//! - [`Combined`]: an accumulator joining up to nine Results that share an
//!   error type, latching the first error
//! - [`Result::all`]: aggregation of many Results into all successes or all
//!   errors
//! - [`NullValue`]: the payload for a side that carries nothing
//!
//! The JSON envelope for these values lives in the `algebra-json` crate.
//!
//! ## Example
//!
//! ```
//! use algebra_core::{combine, Result};
//!
//! fn parse(input: &str) -> Result<i32, String> {
//!     input.parse::<i32>().map_err(|e| e.to_string()).into()
//! }
//!
//! let sum = combine(parse("40"))
//!     .and(parse("2"))
//!     .map(|a, b| a + b);
//! assert_eq!(sum, Result::ok(42));
//!
//! let failed = combine(parse("40"))
//!     .and(parse("two"))
//!     .map(|a, b| a + b);
//! assert!(failed.is_err());
//! ```

pub mod combinator;
pub mod error;
pub mod null_value;
pub mod projection;
pub mod result;

pub use combinator::{Combined, combine};
pub use error::InvariantViolation;
pub use null_value::NullValue;
pub use projection::ErrorProjection;
pub use result::Result;

/// Aggregate many Results into all of their successes or all of their errors.
///
/// Shorthand for [`Result::all`].
pub fn all<S, E, I>(results: I) -> Result<Vec<S>, Vec<E>>
where
    I: IntoIterator<Item = Result<S, E>>,
{
    Result::<Vec<S>, Vec<E>>::all(results)
}
