//! Fluent assertions for [`Result`].
//!
//! Payloads are rendered with `Debug` between angle brackets, so strings
//! show up quoted: `Expecting Result to be Err but was Ok containing <"Ok">`.

use algebra_core::Result;
use std::fmt::Debug;

/// Start an assertion chain on `actual`.
#[must_use]
pub const fn assert_that<S, E>(actual: &Result<S, E>) -> ResultAssert<'_, S, E> {
    ResultAssert { actual }
}

/// Assertion chain over a borrowed Result.
///
/// Every check panics with a descriptive message on failure and returns the
/// chain on success.
#[derive(Debug)]
pub struct ResultAssert<'a, S, E> {
    actual: &'a Result<S, E>,
}

impl<S, E> Clone for ResultAssert<'_, S, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S, E> Copy for ResultAssert<'_, S, E> {}

impl<'a, S, E> ResultAssert<'a, S, E>
where
    S: Debug,
    E: Debug,
{
    /// Assert the Result is Ok.
    ///
    /// # Panics
    ///
    /// Panics if the Result is Err.
    #[track_caller]
    #[allow(clippy::panic)] // Test assertion
    pub fn is_ok(self) -> Self {
        if let Result::Err(error) = self.actual {
            panic!("{}", should_be_ok(error));
        }
        self
    }

    /// Assert the Result is Err.
    ///
    /// # Panics
    ///
    /// Panics if the Result is Ok.
    #[track_caller]
    #[allow(clippy::panic)] // Test assertion
    pub fn is_err(self) -> Self {
        if let Result::Ok(value) = self.actual {
            panic!("{}", should_be_err(value));
        }
        self
    }

    /// Assert the Result is Ok and holds `expected`.
    ///
    /// # Panics
    ///
    /// Panics if the Result is Err or holds a different value.
    #[track_caller]
    #[allow(clippy::panic)] // Test assertion
    pub fn contains_ok<T>(self, expected: &T) -> Self
    where
        S: PartialEq<T>,
        T: Debug + ?Sized,
    {
        match self.actual {
            Result::Ok(value) if value == expected => {},
            Result::Ok(value) => panic!("{}", should_contain("Ok", expected, value)),
            Result::Err(error) => {
                panic!("{}", should_contain_but_was("Ok", expected, "Err", error))
            },
        }
        self
    }

    /// Assert the Result is Err and holds `expected`.
    ///
    /// # Panics
    ///
    /// Panics if the Result is Ok or holds a different error.
    #[track_caller]
    #[allow(clippy::panic)] // Test assertion
    pub fn contains_err<T>(self, expected: &T) -> Self
    where
        E: PartialEq<T>,
        T: Debug + ?Sized,
    {
        match self.actual {
            Result::Err(error) if error == expected => {},
            Result::Err(error) => panic!("{}", should_contain("Err", expected, error)),
            Result::Ok(value) => {
                panic!("{}", should_contain_but_was("Err", expected, "Ok", value))
            },
        }
        self
    }

    /// Assert the Result is Ok and hand back its value for further checks.
    ///
    /// # Panics
    ///
    /// Panics if the Result is Err.
    #[track_caller]
    #[allow(clippy::panic)] // Test assertion
    pub fn extracting_ok(self) -> &'a S {
        match self.actual {
            Result::Ok(value) => value,
            Result::Err(error) => panic!("{}", should_be_ok(error)),
        }
    }

    /// Assert the Result is Err and hand back its error for further checks.
    ///
    /// # Panics
    ///
    /// Panics if the Result is Ok.
    #[track_caller]
    #[allow(clippy::panic)] // Test assertion
    pub fn extracting_err(self) -> &'a E {
        match self.actual {
            Result::Err(error) => error,
            Result::Ok(value) => panic!("{}", should_be_err(value)),
        }
    }
}

fn should_be_ok(error: &impl Debug) -> String {
    format!("Expecting Result to be Ok but was Err containing <{error:?}>")
}

fn should_be_err(value: &impl Debug) -> String {
    format!("Expecting Result to be Err but was Ok containing <{value:?}>")
}

fn should_contain<T, A>(side: &str, expected: &T, actual: &A) -> String
where
    T: Debug + ?Sized,
    A: Debug + ?Sized,
{
    format!(
        "Expecting Result to be {side} containing <{expected:?}> but contained <{actual:?}>. \
         expected:<{expected:?}> but was:<{actual:?}>"
    )
}

fn should_contain_but_was<T, A>(side: &str, expected: &T, other: &str, actual: &A) -> String
where
    T: Debug + ?Sized,
    A: Debug + ?Sized,
{
    format!(
        "Expecting Result to be {side} containing <{expected:?}> but was {other} containing \
         <{actual:?}>"
    )
}
