//! Optional values as an explicit two-variant sum type.
//!
//! [`Maybe`] carries either nothing (`None`) or exactly one value
//! (`Some`). Every combinator consumes the container and rebuilds it,
//! so a pipeline never inspects the tag by hand:
//!
//! ```
//! use tailwalk::maybe::{some, none, Maybe};
//!
//! let doubled = some(21).map(|n| n * 2).unwrap_or(0);
//! assert_eq!(doubled, 42);
//!
//! let absent: Maybe<i32> = none();
//! assert_eq!(absent.map(|n| n * 2).unwrap_or(0), 0);
//! ```
//!
//! Lifting from the language's native absence marker goes through
//! `From`: `Maybe::from(Some(v))` is `Some(v)` and
//! `Maybe::from(None)` is `None`.

use thiserror::Error;

/// Raised by [`Maybe::unwrap`] and [`Maybe::try_unwrap`] when the
/// container holds no value.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("unwrapped a `Maybe` holding no value")]
pub struct EmptyValueError;

/// A value that may be absent.
///
/// Exactly one variant is active, enforced by construction; the
/// container is immutable once built. `Default` is `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Maybe<T> {
    None,
    Some(T),
}

/// Wraps a value in `Some`.
pub fn some<T>(value: T) -> Maybe<T> {
    Maybe::Some(value)
}

/// The empty container.
pub fn none<T>() -> Maybe<T> {
    Maybe::None
}

impl<T> Maybe<T> {
    /// True when no value is held.
    pub fn is_none(&self) -> bool {
        matches!(self, Maybe::None)
    }

    /// True when a value is held.
    pub fn is_some(&self) -> bool {
        matches!(self, Maybe::Some(_))
    }

    /// Returns the contained value.
    ///
    /// # Panics
    /// Panics with the [`EmptyValueError`] message on `None`. Callers
    /// that cannot rule absence out should use [`Maybe::try_unwrap`]
    /// or [`Maybe::unwrap_or`] instead.
    pub fn unwrap(self) -> T {
        match self {
            Maybe::Some(value) => value,
            Maybe::None => panic!("{}", EmptyValueError),
        }
    }

    /// Checked form of [`Maybe::unwrap`].
    pub fn try_unwrap(self) -> Result<T, EmptyValueError> {
        match self {
            Maybe::Some(value) => Ok(value),
            Maybe::None => Err(EmptyValueError),
        }
    }

    /// Returns the contained value, or `default` on `None`. Never
    /// fails.
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Maybe::Some(value) => value,
            Maybe::None => default,
        }
    }

    /// Left-biased fallback: `self` when `Some`, else `other`.
    pub fn or(self, other: Maybe<T>) -> Maybe<T> {
        match self {
            Maybe::Some(_) => self,
            Maybe::None => other,
        }
    }

    /// Keeps a `Some` value only if it satisfies the predicate.
    /// `None` stays `None`; the predicate is not consulted for it.
    pub fn filter(self, predicate: impl FnOnce(&T) -> bool) -> Maybe<T> {
        match self {
            Maybe::Some(value) => {
                if predicate(&value) {
                    Maybe::Some(value)
                } else {
                    Maybe::None
                }
            }
            Maybe::None => Maybe::None,
        }
    }

    /// Runs `action` on the value when `Some`. Observation only; the
    /// container is unchanged.
    pub fn do_some(&self, action: impl FnOnce(&T)) {
        if let Maybe::Some(value) = self {
            action(value);
        }
    }

    /// Runs `action` when `None`.
    pub fn do_none(&self, action: impl FnOnce()) {
        if let Maybe::None = self {
            action();
        }
    }

    /// Transforms the contained value; `None` propagates untouched.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Maybe<U> {
        match self {
            Maybe::Some(value) => Maybe::Some(f(value)),
            Maybe::None => Maybe::None,
        }
    }

    /// Chains a dependent optional computation. Short-circuits on
    /// `None`: `f` is never invoked for an empty container.
    pub fn bind<U>(self, f: impl FnOnce(T) -> Maybe<U>) -> Maybe<U> {
        match self {
            Maybe::Some(value) => f(value),
            Maybe::None => Maybe::None,
        }
    }

    /// Sequences two dependent optional computations and combines both
    /// results. Equivalent to
    /// `bind(|t| selector(&t).map(|u| projector(t, u)))`: the result is
    /// `Some` only when both the source and the selected container are.
    pub fn select_many<U, V>(
        self,
        selector: impl FnOnce(&T) -> Maybe<U>,
        projector: impl FnOnce(T, U) -> V,
    ) -> Maybe<V> {
        match self {
            Maybe::Some(value) => match selector(&value) {
                Maybe::Some(selected) => Maybe::Some(projector(value, selected)),
                Maybe::None => Maybe::None,
            },
            Maybe::None => Maybe::None,
        }
    }

    /// Borrowing view of the container.
    pub fn as_ref(&self) -> Maybe<&T> {
        match self {
            Maybe::Some(value) => Maybe::Some(value),
            Maybe::None => Maybe::None,
        }
    }

    /// Lowers back into the native optional type.
    pub fn into_option(self) -> Option<T> {
        match self {
            Maybe::Some(value) => Some(value),
            Maybe::None => None,
        }
    }
}

impl<T> Default for Maybe<T> {
    fn default() -> Self {
        Maybe::None
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Maybe::Some(value),
            None => Maybe::None,
        }
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    fn from(value: Maybe<T>) -> Self {
        value.into_option()
    }
}
