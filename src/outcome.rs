//! Fallible computations as an explicit success/failure sum type.
//!
//! [`Outcome`] mirrors the combinator shape of [`crate::maybe::Maybe`]
//! with an error payload replacing absence: `map` and `bind` touch the
//! success side only, `map_error` the failure side only, and a `bind`
//! chain stops at the first `Err` it meets. The error type is fixed
//! across a chain; callers widen it explicitly with
//! [`Outcome::map_error`] before binding, never implicitly.
//!
//! ```
//! use tailwalk::outcome::{ok, err, Outcome};
//!
//! let parsed: Outcome<i32, String> = ok(5);
//! assert_eq!(parsed.map(|v| v + 1).unwrap(), 6);
//!
//! let failed: Outcome<i32, String> = err("boom".to_string());
//! assert_eq!(failed.unwrap_error(), "boom");
//! ```

use thiserror::Error;

use crate::maybe::Maybe;

/// Raised by [`Outcome::unwrap`] and [`Outcome::try_unwrap`] when the
/// container holds an error.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("unwrapped the success side of an `Outcome` holding an error")]
pub struct UnwrapOnErrorError;

/// Raised by [`Outcome::unwrap_error`] and
/// [`Outcome::try_unwrap_error`] when the container holds a success
/// value.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("unwrapped the error side of an `Outcome` holding a success value")]
pub struct UnwrapErrorOnOkError;

/// A computation result: success carrying `T` or failure carrying `E`.
///
/// Exactly one variant is active; immutable once built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome<T, E> {
    Err(E),
    Ok(T),
}

/// Wraps a success value.
pub fn ok<T, E>(value: T) -> Outcome<T, E> {
    Outcome::Ok(value)
}

/// Wraps an error value.
pub fn err<T, E>(error: E) -> Outcome<T, E> {
    Outcome::Err(error)
}

impl<T, E> Outcome<T, E> {
    /// True when holding a success value.
    pub fn is_ok(&self) -> bool {
        matches!(self, Outcome::Ok(_))
    }

    /// True when holding an error.
    pub fn is_err(&self) -> bool {
        matches!(self, Outcome::Err(_))
    }

    /// Returns the success value.
    ///
    /// # Panics
    /// Panics with the [`UnwrapOnErrorError`] message on `Err`. Use
    /// [`Outcome::try_unwrap`] or [`Outcome::unwrap_or`] when failure
    /// has not been ruled out.
    pub fn unwrap(self) -> T {
        match self {
            Outcome::Ok(value) => value,
            Outcome::Err(_) => panic!("{}", UnwrapOnErrorError),
        }
    }

    /// Checked form of [`Outcome::unwrap`].
    pub fn try_unwrap(self) -> Result<T, UnwrapOnErrorError> {
        match self {
            Outcome::Ok(value) => Ok(value),
            Outcome::Err(_) => Err(UnwrapOnErrorError),
        }
    }

    /// Returns the error value.
    ///
    /// # Panics
    /// Panics with the [`UnwrapErrorOnOkError`] message on `Ok`.
    pub fn unwrap_error(self) -> E {
        match self {
            Outcome::Err(error) => error,
            Outcome::Ok(_) => panic!("{}", UnwrapErrorOnOkError),
        }
    }

    /// Checked form of [`Outcome::unwrap_error`].
    pub fn try_unwrap_error(self) -> Result<E, UnwrapErrorOnOkError> {
        match self {
            Outcome::Err(error) => Ok(error),
            Outcome::Ok(_) => Err(UnwrapErrorOnOkError),
        }
    }

    /// Returns the success value, or `default` on `Err`.
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Outcome::Ok(value) => value,
            Outcome::Err(_) => default,
        }
    }

    /// Returns the error value, or `default` on `Ok`.
    pub fn unwrap_error_or(self, default: E) -> E {
        match self {
            Outcome::Err(error) => error,
            Outcome::Ok(_) => default,
        }
    }

    /// Left-biased fallback: `self` when `Ok`, else `other`.
    pub fn or(self, other: Outcome<T, E>) -> Outcome<T, E> {
        match self {
            Outcome::Ok(_) => self,
            Outcome::Err(_) => other,
        }
    }

    /// Transforms the success value; an error passes through with its
    /// type unchanged.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U, E> {
        match self {
            Outcome::Ok(value) => Outcome::Ok(f(value)),
            Outcome::Err(error) => Outcome::Err(error),
        }
    }

    /// Transforms the error value; a success passes through with its
    /// type unchanged.
    pub fn map_error<F>(self, f: impl FnOnce(E) -> F) -> Outcome<T, F> {
        match self {
            Outcome::Ok(value) => Outcome::Ok(value),
            Outcome::Err(error) => Outcome::Err(f(error)),
        }
    }

    /// Chains a dependent fallible computation sharing the error type.
    /// Short-circuits on `Err`: `f` is never invoked after a failure.
    ///
    /// The error type is deliberately fixed across the chain; widen it
    /// with [`Outcome::map_error`] beforehand when two computations
    /// disagree.
    pub fn bind<U>(self, f: impl FnOnce(T) -> Outcome<U, E>) -> Outcome<U, E> {
        match self {
            Outcome::Ok(value) => f(value),
            Outcome::Err(error) => Outcome::Err(error),
        }
    }

    /// Sequences two dependent fallible computations and combines both
    /// success values; the first error wins.
    pub fn select_many<U, V>(
        self,
        selector: impl FnOnce(&T) -> Outcome<U, E>,
        projector: impl FnOnce(T, U) -> V,
    ) -> Outcome<V, E> {
        match self {
            Outcome::Ok(value) => match selector(&value) {
                Outcome::Ok(selected) => Outcome::Ok(projector(value, selected)),
                Outcome::Err(error) => Outcome::Err(error),
            },
            Outcome::Err(error) => Outcome::Err(error),
        }
    }

    /// Discards error detail: `Ok(v)` becomes `Some(v)`, any `Err`
    /// becomes `None`. One-directional and lossy; an escape hatch for
    /// callers that no longer care why a computation failed.
    pub fn change_option(self) -> Maybe<T> {
        match self {
            Outcome::Ok(value) => Maybe::Some(value),
            Outcome::Err(_) => Maybe::None,
        }
    }

    /// Runs `action` on the success value when `Ok`.
    pub fn do_ok(&self, action: impl FnOnce(&T)) {
        if let Outcome::Ok(value) = self {
            action(value);
        }
    }

    /// Runs `action` on the error value when `Err`.
    pub fn do_error(&self, action: impl FnOnce(&E)) {
        if let Outcome::Err(error) = self {
            action(error);
        }
    }

    /// Borrowing view of the container.
    pub fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Outcome::Ok(value) => Outcome::Ok(value),
            Outcome::Err(error) => Outcome::Err(error),
        }
    }

    /// Lowers into the native fallible type.
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Outcome::Ok(value) => Ok(value),
            Outcome::Err(error) => Err(error),
        }
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(value: Result<T, E>) -> Self {
        match value {
            Ok(value) => Outcome::Ok(value),
            Err(error) => Outcome::Err(error),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    fn from(value: Outcome<T, E>) -> Self {
        value.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn failure() -> Outcome<i32, &'static str> {
        err("e")
    }

    #[test]
    fn ok_unwraps_to_its_value() {
        assert_eq!(ok::<_, &str>(5).unwrap(), 5);
    }

    #[test]
    #[should_panic(expected = "holding an error")]
    fn err_panics_on_unwrap() {
        failure().unwrap();
    }

    #[test]
    #[should_panic(expected = "holding a success value")]
    fn ok_panics_on_unwrap_error() {
        ok::<_, &str>(5).unwrap_error();
    }

    #[test]
    fn try_unwrap_reports_misuse_as_values() {
        assert_eq!(ok::<_, &str>(5).try_unwrap(), Ok(5));
        assert_eq!(failure().try_unwrap(), Err(UnwrapOnErrorError));
        assert_eq!(failure().try_unwrap_error(), Ok("e"));
        assert_eq!(ok::<_, &str>(5).try_unwrap_error(), Err(UnwrapErrorOnOkError));
    }

    #[test]
    fn defaulting_accessors_never_fail() {
        assert_eq!(failure().unwrap_or(9), 9);
        assert_eq!(ok::<_, &str>(5).unwrap_or(9), 5);
        assert_eq!(failure().unwrap_error_or("other"), "e");
        assert_eq!(ok::<_, &str>(5).unwrap_error_or("other"), "other");
    }

    #[test]
    fn or_is_left_biased() {
        assert_eq!(ok::<_, &str>(1).or(ok(2)), ok(1));
        assert_eq!(failure().or(ok(2)), ok(2));
        assert_eq!(failure().or(err("f")), err("f"));
    }

    #[test]
    fn map_touches_the_success_side_only() {
        assert_eq!(ok::<_, &str>(5).map(|v| v + 1).unwrap(), 6);
        assert_eq!(failure().map(|v| v + 1).unwrap_error(), "e");
    }

    #[test]
    fn map_error_touches_the_error_side_only() {
        assert_eq!(failure().map_error(|e| e.len()).unwrap_error(), 1);
        assert_eq!(ok::<_, &str>(5).map_error(|e| e.len()).unwrap(), 5);
    }

    #[test]
    fn bind_chains_and_short_circuits() {
        let chained = ok::<_, &str>(2).bind(|n| ok(n * 10)).bind(|n| ok(n + 1));
        assert_eq!(chained, ok(21));

        let stopped = failure().bind(|_| -> Outcome<i32, &str> {
            unreachable!("bind must not invoke its function on Err")
        });
        assert_eq!(stopped, err("e"));
    }

    #[test]
    fn select_many_combines_two_successes() {
        let sum = ok::<_, &str>(88).select_many(|_| ok(20), |a, b| a + b);
        assert_eq!(sum, ok(108));

        let first_error = failure().select_many(|_| ok(20), |a, b| a + b);
        assert_eq!(first_error, err("e"));

        let second_error = ok::<i32, &str>(88).select_many(|_| err::<i32, _>("f"), |a, b| a + b);
        assert_eq!(second_error, err("f"));
    }

    #[test]
    fn change_option_discards_error_detail() {
        assert_eq!(ok::<_, &str>(5).change_option().unwrap(), 5);
        assert!(failure().change_option().is_none());
    }

    #[test]
    fn do_ok_and_do_error_fire_on_the_right_tag() {
        let mut seen = None;
        ok::<_, &str>(7).do_ok(|n| seen = Some(*n));
        assert_eq!(seen, Some(7));

        let mut reported = None;
        failure().do_error(|e| reported = Some(*e));
        assert_eq!(reported, Some("e"));

        let mut wrong = false;
        failure().do_ok(|_| wrong = true);
        ok::<_, &str>(1).do_error(|_| wrong = true);
        assert!(!wrong);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_round_trip() {
        let encoded = serde_json::to_string(&ok::<i32, String>(5)).unwrap();
        let decoded: Outcome<i32, String> = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, ok(5));

        let encoded = serde_json::to_string(&err::<i32, String>("e".to_string())).unwrap();
        let decoded: Outcome<i32, String> = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, err("e".to_string()));
    }

    #[test]
    fn bridges_with_result() {
        assert_eq!(Outcome::from(Ok::<_, &str>(3)), ok(3));
        assert_eq!(Outcome::from(Err::<i32, _>("e")), failure());
        assert_eq!(Result::from(ok::<_, &str>(3)), Ok(3));
        assert_eq!(failure().into_result(), Err("e"));
    }
}
