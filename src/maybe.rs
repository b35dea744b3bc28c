//! The `Some`/`None` sum type.
//!
//! Mirrors [`Outcome`](crate::Outcome) with `Some` in the `Ok` role and
//! `None` in the `Err` role. `None` has no payload and no trace.

use std::fmt::Debug;
use std::future::Future;

use crate::error::AssertError;
use crate::kind::{Tagged, Variant};
use crate::lift::IntoMaybe;
use crate::log::debug;
use crate::{AsyncMaybe, Outcome};

/// A value that is present or absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[must_use]
pub enum Maybe<T> {
    Some(T),
    None,
}

/// Construct a `Some`.
#[inline]
pub fn some<T>(value: T) -> Maybe<T> {
    Maybe::Some(value)
}

#[inline]
pub fn none<T>() -> Maybe<T> {
    Maybe::None
}

impl<T> Maybe<T> {
    #[inline]
    pub const fn is_some(&self) -> bool {
        matches!(self, Maybe::Some(_))
    }

    #[inline]
    pub const fn is_none(&self) -> bool {
        matches!(self, Maybe::None)
    }

    #[inline]
    pub fn value(&self) -> Option<&T> {
        match self {
            Maybe::Some(value) => Some(value),
            Maybe::None => None,
        }
    }

    #[inline]
    pub fn as_ref(&self) -> Maybe<&T> {
        match self {
            Maybe::Some(value) => Maybe::Some(value),
            Maybe::None => Maybe::None,
        }
    }

    /// Maps a `Some` value with `f`.
    ///
    /// ```rust
    /// use outcome::{none, some, Maybe};
    ///
    /// assert_eq!(some(3).map(|x| x + 1), some(4));
    /// assert_eq!(none::<i32>().map(|x| x + 1), Maybe::None);
    /// ```
    pub fn map<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Maybe::Some(value) => Maybe::Some(f(value)),
            Maybe::None => Maybe::None,
        }
    }

    /// Like [`map`](Self::map) for a callback producing a pending value.
    pub fn map_async<U, F, Fut>(self, f: F) -> AsyncMaybe<U>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U> + Send + 'static,
        U: Send + 'static,
    {
        match self {
            Maybe::Some(value) => {
                let pending = f(value);
                AsyncMaybe::from_future(async move { Maybe::Some(pending.await) })
            }
            Maybe::None => AsyncMaybe::none(),
        }
    }

    /// Returns `fallback` if this is `None`.
    pub fn or<R>(self, fallback: R) -> R::Lifted
    where
        R: IntoMaybe<Some = T>,
    {
        match self {
            Maybe::Some(value) => R::lift_maybe(Maybe::Some(value)),
            Maybe::None => fallback.lift(),
        }
    }

    /// Returns `f()` if this is `None`; `f` is not called on `Some`.
    ///
    /// `f` may produce a pending `Maybe`, which lifts the result.
    #[doc(alias = "recover")]
    pub fn lazy_or<R, F>(self, f: F) -> R::Lifted
    where
        F: FnOnce() -> R,
        R: IntoMaybe<Some = T>,
    {
        match self {
            Maybe::Some(value) => R::lift_maybe(Maybe::Some(value)),
            Maybe::None => f().lift(),
        }
    }

    /// Swaps a `Some` value for `value`.
    pub fn replace<U>(self, value: U) -> Maybe<U> {
        self.map(|_| value)
    }

    /// Calls `f` with the `Some` value and returns `self` unchanged.
    pub fn tap<F>(self, f: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Maybe::Some(value) = &self {
            f(value);
        }
        self
    }

    pub fn tap_none<F>(self, f: F) -> Self
    where
        F: FnOnce(),
    {
        if self.is_none() {
            f();
        }
        self
    }

    /// Returns the `Some` value, or `fallback`.
    ///
    /// ```rust
    /// use outcome::{none, some};
    ///
    /// assert_eq!(some(1).unwrap_or(0), 1);
    /// assert_eq!(none().unwrap_or(0), 0);
    /// ```
    pub fn unwrap_or(self, fallback: T) -> T {
        match self {
            Maybe::Some(value) => value,
            Maybe::None => fallback,
        }
    }

    pub fn unwrap_or_else<F>(self, f: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Maybe::Some(value) => value,
            Maybe::None => f(),
        }
    }

    /// # Panics
    ///
    /// Panics with an [`AssertError`] payload on `None`.
    #[track_caller]
    pub fn assert_some(self, message: Option<&str>) -> T {
        match self {
            Maybe::Some(value) => value,
            Maybe::None => {
                let message = message.unwrap_or("expected Some");
                debug!(reason = message, "assert_some on None");
                std::panic::panic_any(AssertError::new(message, "None"))
            }
        }
    }

    /// # Panics
    ///
    /// Panics with an [`AssertError`] payload on `Some`.
    #[track_caller]
    pub fn assert_none(self, message: Option<&str>)
    where
        T: Debug,
    {
        if let Maybe::Some(value) = self {
            let message = message.unwrap_or("expected None");
            debug!(reason = message, "assert_none on Some");
            std::panic::panic_any(AssertError::new(message, format!("Some({value:?})")))
        }
    }

    /// Chains a step that may produce nothing.
    ///
    /// ```rust
    /// use outcome::{some, Maybe};
    ///
    /// let halved = some(8).and_then(|x| if x % 2 == 0 { some(x / 2) } else { Maybe::None });
    /// assert_eq!(halved, some(4));
    /// ```
    #[doc(alias = "try")]
    pub fn and_then<R, F>(self, f: F) -> R::Lifted
    where
        F: FnOnce(T) -> R,
        R: IntoMaybe,
    {
        match self {
            Maybe::Some(value) => f(value).lift(),
            Maybe::None => R::lift_maybe(Maybe::None),
        }
    }

    /// Keeps a `Some` only if `predicate` holds for its value.
    ///
    /// ```rust
    /// use outcome::{some, Maybe};
    ///
    /// assert_eq!(some(4).filter(|x| x % 2 == 0), some(4));
    /// assert_eq!(some(3).filter(|x| x % 2 == 0), Maybe::None);
    /// ```
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Maybe::Some(value) if predicate(&value) => Maybe::Some(value),
            _ => Maybe::None,
        }
    }

    /// `Some(v)` becomes `Ok(v)`; `None` becomes `Err(fallback)`.
    pub fn to_outcome<E>(self, fallback: E) -> Outcome<T, E> {
        match self {
            Maybe::Some(value) => Outcome::Ok(value),
            Maybe::None => crate::err(fallback),
        }
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Maybe::Some(value) => Some(value),
            Maybe::None => None,
        }
    }

    pub fn into_async(self) -> AsyncMaybe<T>
    where
        T: Send + 'static,
    {
        AsyncMaybe::from_maybe(self)
    }
}

impl<R> Maybe<R>
where
    R: IntoMaybe,
{
    /// Collapses one level of nesting.
    pub fn flatten(self) -> R::Lifted {
        self.and_then(|inner| inner)
    }
}

impl<T> Default for Maybe<T> {
    fn default() -> Self {
        Maybe::None
    }
}

impl<T> Tagged for Maybe<T> {
    fn variant(&self) -> Variant {
        match self {
            Maybe::Some(_) => Variant::Some,
            Maybe::None => Variant::None,
        }
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(option: Option<T>) -> Self {
        match option {
            Some(value) => Maybe::Some(value),
            None => Maybe::None,
        }
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    fn from(maybe: Maybe<T>) -> Self {
        maybe.into_option()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ok;
    use std::cell::Cell;

    #[test]
    fn test_discriminants() {
        let present = some(1);
        let absent: Maybe<i32> = Maybe::None;

        assert!(present.is_some() && !present.is_none());
        assert!(absent.is_none() && !absent.is_some());
        assert_eq!(present.value(), Some(&1));
        assert_eq!(absent.value(), None);
        assert_eq!(none::<i32>(), Maybe::default());
    }

    #[test]
    fn test_map_short_circuits_on_none() {
        let calls = Cell::new(0);
        let absent: Maybe<i32> = Maybe::None;
        let mapped = absent.map(|x| {
            calls.set(calls.get() + 1);
            x + 1
        });
        assert_eq!(mapped, Maybe::None);
        assert_eq!(calls.get(), 0);
        assert_eq!(some(1).map(|x| x + 1), some(2));
    }

    #[test]
    fn test_or_and_lazy_or() {
        assert_eq!(some(1).or(some(2)), some(1));
        assert_eq!(none().or(some(2)), some(2));

        let calls = Cell::new(0);
        let kept = some(1).lazy_or(|| {
            calls.set(1);
            some(9)
        });
        assert_eq!(kept, some(1));
        assert_eq!(calls.get(), 0);
        assert_eq!(none::<i32>().lazy_or(|| some(9)), some(9));
    }

    #[test]
    fn test_replace_tap_unwrap() {
        let seen = Cell::new(0);
        let missing = Cell::new(false);

        let present = some(3).tap(|v| seen.set(*v)).tap_none(|| missing.set(true));
        assert_eq!(present.replace("x"), some("x"));
        assert_eq!((seen.get(), missing.get()), (3, false));

        let absent = none::<i32>().tap(|v| seen.set(*v)).tap_none(|| missing.set(true));
        assert_eq!(absent.unwrap_or(7), 7);
        assert_eq!((seen.get(), missing.get()), (3, true));
        assert_eq!(none::<i32>().unwrap_or_else(|| 8), 8);
    }

    #[test]
    fn test_assertions() {
        assert_eq!(some(1).assert_some(None), 1);
        none::<i32>().assert_none(None);

        let caught = std::panic::catch_unwind(|| none::<i32>().assert_some(None)).unwrap_err();
        assert_eq!(caught.downcast_ref::<AssertError>().unwrap().instance(), "None");

        let caught = std::panic::catch_unwind(|| some(5).assert_none(Some("must be empty")))
            .unwrap_err();
        let assert = caught.downcast_ref::<AssertError>().unwrap();
        assert_eq!(assert.message(), "must be empty");
        assert_eq!(assert.instance(), "Some(5)");
    }

    #[test]
    fn test_and_then_and_flatten() {
        assert_eq!(some(2).and_then(|x| some(x * 5)), some(10));
        assert_eq!(some(2).and_then(|_| none::<i32>()), Maybe::None);
        assert_eq!(none::<i32>().and_then(|x| some(x * 5)), Maybe::None);

        assert_eq!(some(some(1)).flatten(), some(1));
        assert_eq!(some(none::<i32>()).flatten(), Maybe::None);
        assert_eq!(none::<Maybe<i32>>().flatten(), Maybe::None);
    }

    #[test]
    fn test_conversions() {
        assert_eq!(some(1).to_outcome("missing"), ok(1));
        assert_eq!(none::<i32>().to_outcome("missing").error(), Some(&"missing"));
        assert_eq!(Maybe::from(Some(3)).into_option(), Some(3));
        assert_eq!(some(4).filter(|x| *x > 5), Maybe::None);
    }
}
