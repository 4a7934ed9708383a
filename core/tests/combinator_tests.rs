//! Tests for multi-value combination and aggregation

#![allow(clippy::unwrap_used)] // Tests can unwrap
#![allow(clippy::expect_used)] // Tests can expect

use algebra_core::{all, combine, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SampleError {
    TestError,
    TestErrorTwo,
}

#[test]
fn test_combines_two_ok_results() {
    let combined = Result::combine(Result::<&str, SampleError>::ok("Hello"))
        .and(Result::ok(42))
        .map(|s, n| format!("{s} {n}"));

    assert_eq!(combined.into_ok().unwrap(), "Hello 42");
}

#[test]
fn test_combines_ok_and_err_results() {
    let combined = combine(Result::<&str, _>::ok("Hello"))
        .and(Result::<i32, _>::err(SampleError::TestError))
        .map(|s, n| format!("{s} {n}"));

    assert_eq!(combined, Result::err(SampleError::TestError));
}

#[test]
fn test_combines_two_err_results() {
    let combined = combine(Result::<&str, _>::err(SampleError::TestError))
        .and(Result::<i32, _>::err(SampleError::TestErrorTwo))
        .map(|s, n| format!("{s} {n}"));

    assert_eq!(combined, Result::err(SampleError::TestError));
}

#[test]
fn test_later_values_are_ignored_after_an_error() {
    let combined = combine(Result::<&str, _>::ok("a"))
        .and(Result::<i32, _>::err(SampleError::TestError))
        .and(Result::<bool, _>::ok(true))
        .and(Result::<char, _>::err(SampleError::TestErrorTwo))
        .map(|s, n, b, c| format!("{s}{n}{b}{c}"));

    assert_eq!(combined, Result::err(SampleError::TestError));
}

#[test]
fn test_combines_five_ok_results() {
    let combined = combine(Result::<&str, SampleError>::ok("Hello"))
        .and(Result::ok(42))
        .and(Result::ok(3.25))
        .and(Result::ok(true))
        .and(Result::ok('A'))
        .map(|s, n, d, b, c| format!("{s} {n} {d} {b} {c}"));

    assert_eq!(combined, Result::ok("Hello 42 3.25 true A".to_string()));
}

#[test]
fn test_combines_five_results_with_an_err() {
    let combined = combine(Result::<&str, SampleError>::ok("Hello"))
        .and(Result::<i32, _>::err(SampleError::TestError))
        .and(Result::ok(3.25))
        .and(Result::ok(true))
        .and(Result::ok('A'))
        .map(|s, n, d, b, c| format!("{s} {n} {d} {b} {c}"));

    assert_eq!(combined, Result::err(SampleError::TestError));
}

#[test]
fn test_combines_nine_ok_results() {
    let combined = combine(Result::<&str, SampleError>::ok("Hello"))
        .and(Result::ok(42_i32))
        .and(Result::ok(3.25_f64))
        .and(Result::ok(true))
        .and(Result::ok('A'))
        .and(Result::ok(123_i64))
        .and(Result::ok(1.125_f32))
        .and(Result::ok(7_i16))
        .and(Result::ok(1_i8))
        .map(|s, n, d, b, c, l, f, h, y| {
            format!("{s} {n} {d:.2} {b} {c} {l} {f:.3} {h} {y}")
        });

    assert_eq!(
        combined,
        Result::ok("Hello 42 3.25 true A 123 1.125 7 1".to_string())
    );
}

#[test]
fn test_combines_nine_results_with_an_err() {
    let combined = combine(Result::<&str, SampleError>::ok("Hello"))
        .and(Result::ok(42_i32))
        .and(Result::ok(3.25_f64))
        .and(Result::<bool, _>::err(SampleError::TestError))
        .and(Result::ok('A'))
        .and(Result::ok(123_i64))
        .and(Result::ok(1.125_f32))
        .and(Result::ok(7_i16))
        .and(Result::<i8, _>::err(SampleError::TestErrorTwo))
        .map(|s, n, d, b, c, l, f, h, y| {
            format!("{s} {n} {d:.2} {b} {c} {l} {f:.3} {h} {y}")
        });

    assert_eq!(combined, Result::err(SampleError::TestError));
}

#[test]
fn test_all_collects_successes_in_order() {
    let collected = all(vec![
        Result::<i32, &str>::ok(1),
        Result::ok(2),
        Result::ok(3),
    ]);

    assert_eq!(collected, Result::ok(vec![1, 2, 3]));
}

#[test]
fn test_all_collects_every_error_in_order() {
    let collected = all(vec![
        Result::<i32, &str>::ok(1),
        Result::err("x"),
        Result::ok(3),
        Result::err("y"),
    ]);

    assert_eq!(collected, Result::err(vec!["x", "y"]));
}

#[test]
fn test_all_differs_from_combine_on_multiple_errors() {
    let inputs = [
        Result::<i32, SampleError>::err(SampleError::TestError),
        Result::err(SampleError::TestErrorTwo),
    ];

    let combined = combine(inputs[0]).and(inputs[1]).map(|a, b| a + b);
    let aggregated = all(inputs);

    assert_eq!(combined, Result::err(SampleError::TestError));
    assert_eq!(
        aggregated,
        Result::err(vec![SampleError::TestError, SampleError::TestErrorTwo])
    );
}
