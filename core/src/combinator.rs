//! Combining several Results that share one error type.
//!
//! [`combine`] seeds an accumulator with one [`Result`]; each
//! [`and`](Combined::and) adds another, growing the tuple of collected
//! success values by one; the terminal [`map`](Combined::map) applies an
//! N-ary function to all of them.
//!
//! The first `Err` encountered is latched. From then on every `and` is a
//! pass-through: later Results are dropped without being inspected, so a
//! later `Err` never replaces the first one. Use [`Result::all`] instead when
//! every error should be collected.
//!
//! `map` is available for one through nine accumulated values.
//!
//! # Examples
//!
//! ```
//! use algebra_core::{combine, Result};
//!
//! let name: Result<&str, String> = Result::ok("a");
//! let count: Result<i32, String> = Result::ok(1);
//!
//! let joined = combine(name).and(count).map(|s, n| format!("{s}{n}"));
//! assert_eq!(joined, Result::ok("a1".to_string()));
//! ```
//!
//! ```
//! use algebra_core::{combine, Result};
//!
//! let joined = combine(Result::<&str, &str>::ok("a"))
//!     .and(Result::<i32, &str>::err("E1"))
//!     .and(Result::<bool, &str>::err("E2"))
//!     .map(|s, n, b| format!("{s}{n}{b}"));
//!
//! assert_eq!(joined, Result::err("E1"));
//! ```

use crate::result::Result;

/// Start accumulating Results that share the error type `E`.
pub fn combine<A, E>(first: Result<A, E>) -> Combined<(A,), E> {
    match first {
        Result::Ok(value) => Combined::values((value,)),
        Result::Err(error) => Combined::failed(error),
    }
}

/// Accumulated success values `T` (a tuple), or the first error seen.
///
/// Each chained call consumes the accumulator and returns a new one, so a
/// partial accumulation can be dropped at any point without cleanup.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "a combination does nothing until it is mapped"]
pub struct Combined<T, E> {
    state: Accumulated<T, E>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Accumulated<T, E> {
    Values(T),
    Failed(E),
}

impl<T, E> Combined<T, E> {
    const fn values(values: T) -> Self {
        Self {
            state: Accumulated::Values(values),
        }
    }

    const fn failed(error: E) -> Self {
        Self {
            state: Accumulated::Failed(error),
        }
    }

    /// Returns `true` once an error has been latched.
    #[must_use]
    pub const fn is_failed(&self) -> bool {
        matches!(self.state, Accumulated::Failed(_))
    }

    /// The latched error, if any.
    #[must_use]
    pub const fn error(&self) -> Option<&E> {
        match &self.state {
            Accumulated::Values(_) => None,
            Accumulated::Failed(error) => Some(error),
        }
    }

    /// Collapse the accumulator into a Result over the whole tuple.
    pub fn into_result(self) -> Result<T, E> {
        match self.state {
            Accumulated::Values(values) => Result::Ok(values),
            Accumulated::Failed(error) => Result::Err(error),
        }
    }
}

/// Generates `and` / `and_then` for an accumulator of the listed arity.
macro_rules! impl_and {
    ($( $ty:ident => $val:ident ),+ ; $next:ident) => {
        impl<$($ty,)+ E> Combined<($($ty,)+), E> {
            /// Add the next Result.
            ///
            /// If an error is already latched, `next` is dropped uninspected.
            pub fn and<$next>(self, next: Result<$next, E>) -> Combined<($($ty,)+ $next,), E> {
                match self.state {
                    Accumulated::Failed(error) => Combined::failed(error),
                    Accumulated::Values(($($val,)+)) => match next {
                        Result::Ok(value) => Combined::values(($($val,)+ value,)),
                        Result::Err(error) => Combined::failed(error),
                    },
                }
            }

            /// Add the next Result, computing it only if no error is latched.
            pub fn and_then<$next, F>(self, next: F) -> Combined<($($ty,)+ $next,), E>
            where
                F: FnOnce() -> Result<$next, E>,
            {
                match self.state {
                    Accumulated::Failed(error) => Combined::failed(error),
                    Accumulated::Values(values) => Self::values(values).and(next()),
                }
            }
        }
    };
}

/// Generates the terminal `map` for an accumulator of the listed arity.
macro_rules! impl_map {
    ($( $ty:ident => $val:ident ),+) => {
        impl<$($ty,)+ E> Combined<($($ty,)+), E> {
            /// Apply `mapper` to every accumulated value, in order.
            ///
            /// Returns the latched error instead when there is one.
            pub fn map<R, F>(self, mapper: F) -> Result<R, E>
            where
                F: FnOnce($($ty),+) -> R,
            {
                match self.state {
                    Accumulated::Values(($($val,)+)) => Result::Ok(mapper($($val),+)),
                    Accumulated::Failed(error) => Result::Err(error),
                }
            }
        }
    };
}

impl_and!(T1 => v1; T2);
impl_and!(T1 => v1, T2 => v2; T3);
impl_and!(T1 => v1, T2 => v2, T3 => v3; T4);
impl_and!(T1 => v1, T2 => v2, T3 => v3, T4 => v4; T5);
impl_and!(T1 => v1, T2 => v2, T3 => v3, T4 => v4, T5 => v5; T6);
impl_and!(T1 => v1, T2 => v2, T3 => v3, T4 => v4, T5 => v5, T6 => v6; T7);
impl_and!(T1 => v1, T2 => v2, T3 => v3, T4 => v4, T5 => v5, T6 => v6, T7 => v7; T8);
impl_and!(T1 => v1, T2 => v2, T3 => v3, T4 => v4, T5 => v5, T6 => v6, T7 => v7, T8 => v8; T9);

impl_map!(T1 => v1);
impl_map!(T1 => v1, T2 => v2);
impl_map!(T1 => v1, T2 => v2, T3 => v3);
impl_map!(T1 => v1, T2 => v2, T3 => v3, T4 => v4);
impl_map!(T1 => v1, T2 => v2, T3 => v3, T4 => v4, T5 => v5);
impl_map!(T1 => v1, T2 => v2, T3 => v3, T4 => v4, T5 => v5, T6 => v6);
impl_map!(T1 => v1, T2 => v2, T3 => v3, T4 => v4, T5 => v5, T6 => v6, T7 => v7);
impl_map!(T1 => v1, T2 => v2, T3 => v3, T4 => v4, T5 => v5, T6 => v6, T7 => v7, T8 => v8);
impl_map!(T1 => v1, T2 => v2, T3 => v3, T4 => v4, T5 => v5, T6 => v6, T7 => v7, T8 => v8, T9 => v9);
