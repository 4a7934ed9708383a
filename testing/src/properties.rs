//! Property-based testing utilities using proptest.
//!
//! # Example
//!
//! ```
//! use algebra_testing::properties::arb_result;
//! use proptest::prelude::*;
//!
//! proptest!(|(result in arb_result(any::<u8>(), "[a-z]{1,8}"))| {
//!     prop_assert_eq!(result.is_ok(), !result.is_err());
//! });
//! ```

use algebra_core::{NullValue, Result};
use proptest::prelude::*;
use std::fmt::Debug;

/// Results that are Ok or Err with equal weight.
pub fn arb_result<S, E>(
    ok: impl Strategy<Value = S>,
    err: impl Strategy<Value = E>,
) -> impl Strategy<Value = Result<S, E>>
where
    S: Debug,
    E: Debug,
{
    prop_oneof![arb_ok(ok), arb_err(err)]
}

/// Ok Results only.
pub fn arb_ok<S, E>(ok: impl Strategy<Value = S>) -> impl Strategy<Value = Result<S, E>>
where
    S: Debug,
    E: Debug,
{
    ok.prop_map(Result::<S, E>::Ok)
}

/// Err Results only.
pub fn arb_err<S, E>(err: impl Strategy<Value = E>) -> impl Strategy<Value = Result<S, E>>
where
    S: Debug,
    E: Debug,
{
    err.prop_map(Result::<S, E>::Err)
}

/// Results whose success side carries nothing.
pub fn arb_null_result<E>(
    err: impl Strategy<Value = E>,
) -> impl Strategy<Value = Result<NullValue, E>>
where
    E: Debug,
{
    arb_result(Just(NullValue), err)
}
