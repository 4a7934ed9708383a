//! # Algebra Testing
//!
//! Testing utilities for code built on `algebra-core`.
//!
//! This crate provides:
//! - Fluent assertions on Results ([`assert_that`])
//! - proptest strategies for Results ([`properties`])
//! - A tracing subscriber for tests ([`init_test_tracing`])
//!
//! ## Example
//!
//! ```
//! use algebra_core::Result;
//! use algebra_testing::assert_that;
//!
//! let parsed: Result<u16, String> = Result::ok(8080);
//! assert_that(&parsed).is_ok().contains_ok(&8080_u16);
//!
//! let port = assert_that(&parsed).extracting_ok();
//! assert_eq!(*port, 8080);
//! ```

pub mod properties;
pub mod result_assert;

pub use result_assert::{ResultAssert, assert_that};

use tracing_subscriber::EnvFilter;

const DEFAULT_TEST_FILTER: &str = "algebra_core=debug,algebra_json=trace";

/// Install a fmt subscriber that writes through the test harness.
///
/// The filter comes from `RUST_LOG` when set. Calling this more than once
/// is harmless: later calls leave the first subscriber in place.
pub fn init_test_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_TEST_FILTER));

    if tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init()
        .is_ok()
    {
        tracing::debug!("Test tracing initialized");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_tracing_is_idempotent() {
        init_test_tracing();
        init_test_tracing();
    }
}
