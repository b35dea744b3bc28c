//! The `Ok`/`Err` sum type and its synchronous combinators.
//!
//! Every combinator is defined per case: success-oriented combinators are
//! no-ops on `Err`, failure-oriented ones are no-ops on `Ok`. Combinators that
//! take a producer ([`and_then`](Outcome::and_then), [`recover`](Outcome::recover),
//! [`or`](Outcome::or), [`lazy_or`](Outcome::lazy_or)) return whatever the
//! producer's [`IntoOutcome::Lifted`] type is, so an asynchronous producer lifts
//! the chain into an [`AsyncOutcome`] while a synchronous one keeps it
//! synchronous.
//!
//! ```rust
//! use outcome::{err, ok, Outcome};
//!
//! let parsed: Outcome<i32, String> = ok(20);
//! let doubled = parsed
//!     .map(|x| x * 2)
//!     .and_then(|x| if x > 10 { ok(x) } else { err("too small".to_string()) });
//! assert_eq!(doubled, ok(40));
//!
//! let failed: Outcome<i32, &str> = err("boom");
//! assert_eq!(failed.clone().map(|x| x + 1), failed);
//! ```

use std::fmt::Debug;
use std::future::Future;

use either::Either;

use crate::error::AssertError;
use crate::kind::{Tagged, Variant};
use crate::lift::IntoOutcome;
use crate::log::{debug, trace};
use crate::trace::{Trace, TraceEntry};
use crate::{AsyncOutcome, Maybe};

/// The failure payload of an [`Outcome::Err`]: the error plus its trace.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fault<E> {
    pub error: E,
    pub trace: Trace,
}

impl<E> Fault<E> {
    /// A fault with an empty trace.
    pub fn new(error: E) -> Self {
        Self {
            error,
            trace: Trace::new(),
        }
    }

    pub fn with_trace(error: E, trace: Trace) -> Self {
        Self { error, trace }
    }

    /// Replaces the error, keeping the trace.
    pub fn map<E2, F>(self, f: F) -> Fault<E2>
    where
        F: FnOnce(E) -> E2,
    {
        Fault {
            error: f(self.error),
            trace: self.trace,
        }
    }

    /// Returns a fault with `tag` appended to the trace.
    #[must_use]
    pub fn traced(self, tag: impl Into<TraceEntry>) -> Self {
        Self {
            trace: self.trace.with(tag),
            error: self.error,
        }
    }

    /// Returns a fault whose trace is `prefix` followed by this trace.
    #[must_use]
    pub fn inherit(self, prefix: &Trace) -> Self {
        Self {
            trace: prefix.inherit(&self.trace),
            error: self.error,
        }
    }
}

/// Either a success value or a [`Fault`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[must_use = "this `Outcome` may be an `Err` variant, which should be handled"]
pub enum Outcome<T, E> {
    /// Success
    Ok(T),
    /// Failure, with its diagnostic trace
    Err(Fault<E>),
}

/// Construct an `Ok`.
#[inline]
pub fn ok<T, E>(value: T) -> Outcome<T, E> {
    Outcome::Ok(value)
}

/// Construct an `Err` with an empty trace.
#[inline]
pub fn err<T, E>(error: E) -> Outcome<T, E> {
    Outcome::Err(Fault::new(error))
}

/// An `Ok` carrying no payload.
#[inline]
pub fn ok_unit<E>() -> Outcome<(), E> {
    Outcome::Ok(())
}

/// An `Err` carrying no payload.
#[inline]
pub fn err_unit<T>() -> Outcome<T, ()> {
    err(())
}

impl<T, E> Outcome<T, E> {
    /// Returns `true` if the outcome is `Ok`.
    ///
    /// ```rust
    /// use outcome::{err, ok};
    ///
    /// assert!(ok::<i32, &str>(-3).is_ok());
    /// assert!(!err::<i32, &str>("nope").is_ok());
    /// ```
    #[inline]
    pub const fn is_ok(&self) -> bool {
        matches!(self, Outcome::Ok(_))
    }

    #[inline]
    pub const fn is_err(&self) -> bool {
        matches!(self, Outcome::Err(_))
    }

    /// The success payload, if any.
    #[inline]
    pub fn value(&self) -> Option<&T> {
        match self {
            Outcome::Ok(value) => Some(value),
            Outcome::Err(_) => None,
        }
    }

    /// The error payload, if any.
    #[inline]
    pub fn error(&self) -> Option<&E> {
        match self {
            Outcome::Ok(_) => None,
            Outcome::Err(fault) => Some(&fault.error),
        }
    }

    /// The error together with its trace, if any.
    #[inline]
    pub fn fault(&self) -> Option<&Fault<E>> {
        match self {
            Outcome::Ok(_) => None,
            Outcome::Err(fault) => Some(fault),
        }
    }

    #[inline]
    pub fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Outcome::Ok(value) => Outcome::Ok(value),
            Outcome::Err(fault) => Outcome::Err(Fault {
                error: &fault.error,
                trace: fault.trace.clone(),
            }),
        }
    }

    /// Maps an `Ok` value with `f`, leaving an `Err` (and its trace)
    /// untouched.
    ///
    /// ```rust
    /// use outcome::{err, ok};
    ///
    /// assert_eq!(ok::<i32, &str>(2).map(|x| x * 10), ok(20));
    /// assert_eq!(err::<i32, &str>("e").map(|x| x * 10), err("e"));
    /// ```
    pub fn map<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Outcome::Ok(value) => Outcome::Ok(f(value)),
            Outcome::Err(fault) => Outcome::Err(fault),
        }
    }

    /// Like [`map`](Self::map) for a callback that produces a pending value.
    ///
    /// The result is lifted into an [`AsyncOutcome`] that resolves once the
    /// callback's future does.
    pub fn map_async<U, F, Fut>(self, f: F) -> AsyncOutcome<U, E>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U> + Send + 'static,
        U: Send + 'static,
        E: Send + 'static,
    {
        match self {
            Outcome::Ok(value) => {
                let pending = f(value);
                AsyncOutcome::from_future(async move { Outcome::Ok(pending.await) })
            }
            Outcome::Err(fault) => AsyncOutcome::from_outcome(Outcome::Err(fault)),
        }
    }

    /// Maps the error, preserving the trace.
    pub fn map_err<E2, F>(self, f: F) -> Outcome<T, E2>
    where
        F: FnOnce(E) -> E2,
    {
        match self {
            Outcome::Ok(value) => Outcome::Ok(value),
            Outcome::Err(fault) => Outcome::Err(fault.map(f)),
        }
    }

    /// Returns `fallback` if this is an `Err`.
    pub fn or<R, E2>(self, fallback: R) -> R::Lifted
    where
        R: IntoOutcome<E2, Ok = T>,
    {
        match self {
            Outcome::Ok(value) => R::lift_outcome(Outcome::Ok(value)),
            Outcome::Err(_) => fallback.lift(),
        }
    }

    /// Returns `f()` if this is an `Err`; `f` is not called on `Ok`.
    pub fn lazy_or<R, E2, F>(self, f: F) -> R::Lifted
    where
        F: FnOnce() -> R,
        R: IntoOutcome<E2, Ok = T>,
    {
        match self {
            Outcome::Ok(value) => R::lift_outcome(Outcome::Ok(value)),
            Outcome::Err(_) => f().lift(),
        }
    }

    /// Swaps an `Ok` value for `value`.
    ///
    /// ```rust
    /// use outcome::{err, ok};
    ///
    /// assert_eq!(ok::<i32, &str>(1).replace("done"), ok("done"));
    /// assert_eq!(err::<i32, &str>("e").replace("done"), err("e"));
    /// ```
    pub fn replace<U>(self, value: U) -> Outcome<U, E> {
        self.map(|_| value)
    }

    /// Replaces the error, keeping the trace.
    pub fn replace_err<E2>(self, error: E2) -> Outcome<T, E2> {
        self.map_err(|_| error)
    }

    /// Calls `f` with the `Ok` value and returns the outcome unchanged.
    ///
    /// ```rust
    /// use outcome::ok;
    ///
    /// let mut seen = None;
    /// let same = ok::<i32, &str>(7).tap(|x| seen = Some(*x));
    /// assert_eq!((same, seen), (ok(7), Some(7)));
    /// ```
    pub fn tap<F>(self, f: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Outcome::Ok(value) = &self {
            f(value);
        }
        self
    }

    /// Calls `f` with the error of an `Err`.
    pub fn tap_err<F>(self, f: F) -> Self
    where
        F: FnOnce(&E),
    {
        if let Outcome::Err(fault) = &self {
            f(&fault.error);
        }
        self
    }

    /// Returns the `Ok` value, or `fallback` on `Err`.
    ///
    /// ```rust
    /// use outcome::{err, ok};
    ///
    /// assert_eq!(ok::<i32, &str>(5).unwrap_or(0), 5);
    /// assert_eq!(err::<i32, &str>("e").unwrap_or(0), 0);
    /// ```
    pub fn unwrap_or(self, fallback: T) -> T {
        match self {
            Outcome::Ok(value) => value,
            Outcome::Err(_) => fallback,
        }
    }

    /// Returns the `Ok` value, or computes one from the error.
    pub fn unwrap_or_else<F>(self, f: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Outcome::Ok(value) => value,
            Outcome::Err(fault) => f(fault.error),
        }
    }

    /// Returns the error, or `fallback` on `Ok`.
    pub fn unwrap_err_or(self, fallback: E) -> E {
        match self {
            Outcome::Ok(_) => fallback,
            Outcome::Err(fault) => fault.error,
        }
    }

    /// Returns the success value.
    ///
    /// # Panics
    ///
    /// Panics with an [`AssertError`] payload if this is an `Err`.
    #[track_caller]
    pub fn assert_ok(self, message: Option<&str>) -> T
    where
        E: Debug,
    {
        match self {
            Outcome::Ok(value) => value,
            Outcome::Err(fault) => {
                let message = message.unwrap_or("expected Ok");
                debug!(reason = message, "assert_ok on Err");
                std::panic::panic_any(AssertError::new(message, format!("Err({fault:?})")))
            }
        }
    }

    /// Returns the error value.
    ///
    /// # Panics
    ///
    /// Panics with an [`AssertError`] payload if this is an `Ok`.
    #[track_caller]
    pub fn assert_err(self, message: Option<&str>) -> E
    where
        T: Debug,
    {
        match self {
            Outcome::Ok(value) => {
                let message = message.unwrap_or("expected Err");
                debug!(reason = message, "assert_err on Ok");
                std::panic::panic_any(AssertError::new(message, format!("Ok({value:?})")))
            }
            Outcome::Err(fault) => fault.error,
        }
    }

    /// Chains a fallible step on `Ok`.
    ///
    /// `f` may return an [`Outcome`], an [`AsyncOutcome`], or a future of an
    /// `Outcome`; the return type follows it. On `Err`, `f` is never called.
    ///
    /// ```rust
    /// use futures_lite::future::block_on;
    /// use outcome::{ok, AsyncOutcome, Outcome};
    ///
    /// let sync: Outcome<i32, ()> = ok::<i32, ()>(7).and_then(|x| ok(x * 2));
    /// assert_eq!(sync, ok(14));
    ///
    /// let lifted: AsyncOutcome<i32, ()> =
    ///     ok::<i32, ()>(7).and_then(|x| async move { ok(x * 2) });
    /// assert_eq!(block_on(async { lifted.await }), ok(14));
    /// ```
    #[doc(alias = "try")]
    #[doc(alias = "bind")]
    pub fn and_then<R, F>(self, f: F) -> R::Lifted
    where
        F: FnOnce(T) -> R,
        R: IntoOutcome<E>,
    {
        match self {
            Outcome::Ok(value) => f(value).lift(),
            Outcome::Err(fault) => R::lift_outcome(Outcome::Err(fault)),
        }
    }

    /// Attempts to recover from `Err` with `f`.
    ///
    /// A new `Err` produced by `f` inherits this error's trace as a prefix.
    ///
    /// ```rust
    /// use outcome::{err, Outcome};
    ///
    /// let first: Outcome<i32, &str> = err::<i32, &str>("primary").trace("primary");
    /// let second: Outcome<i32, &str> = first.recover(|_| err::<i32, &str>("replica").trace("replica"));
    /// assert_eq!(second.fault().unwrap().trace.ids(), vec!["primary", "replica"]);
    /// ```
    #[doc(alias = "try_recover")]
    pub fn recover<R, E2, F>(self, f: F) -> R::Lifted
    where
        F: FnOnce(E) -> R,
        R: IntoOutcome<E2, Ok = T>,
    {
        match self {
            Outcome::Ok(value) => R::lift_outcome(Outcome::Ok(value)),
            Outcome::Err(fault) => {
                trace!(inherited = fault.trace.len(), "recovering from Err");
                f(fault.error).lift_traced(fault.trace)
            }
        }
    }

    /// Splits into `(value, error)`; exactly one side is `Some`.
    ///
    /// ```rust
    /// use outcome::{err, ok};
    ///
    /// assert_eq!(ok::<i32, &str>(1).to_pair(), (Some(1), None));
    /// assert_eq!(err::<i32, &str>("e").to_pair(), (None, Some("e")));
    /// ```
    pub fn to_pair(self) -> (Option<T>, Option<E>) {
        match self {
            Outcome::Ok(value) => (Some(value), None),
            Outcome::Err(fault) => (None, Some(fault.error)),
        }
    }

    /// Appends `tag` to the trace of an `Err`. No-op on `Ok`.
    pub fn trace(self, tag: impl Into<TraceEntry>) -> Self {
        match self {
            Outcome::Ok(value) => Outcome::Ok(value),
            Outcome::Err(fault) => {
                let fault = fault.traced(tag);
                trace!(trace = %fault.trace, "trace tag appended");
                Outcome::Err(fault)
            }
        }
    }

    /// Returns either payload, as an [`Either`].
    pub fn unwrap_either(self) -> Either<T, E> {
        match self {
            Outcome::Ok(value) => Either::Left(value),
            Outcome::Err(fault) => Either::Right(fault.error),
        }
    }

    /// Converts into a std `Result`, dropping the trace.
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Outcome::Ok(value) => Ok(value),
            Outcome::Err(fault) => Err(fault.error),
        }
    }

    /// `Ok(v)` becomes `Some(v)`; an `Err` becomes `None`.
    pub fn into_maybe(self) -> Maybe<T> {
        match self {
            Outcome::Ok(value) => Maybe::Some(value),
            Outcome::Err(_) => Maybe::None,
        }
    }

    pub fn err_maybe(self) -> Maybe<E> {
        match self {
            Outcome::Ok(_) => Maybe::None,
            Outcome::Err(fault) => Maybe::Some(fault.error),
        }
    }

    /// Moves this outcome into an already-resolved [`AsyncOutcome`].
    pub fn into_async(self) -> AsyncOutcome<T, E>
    where
        T: Send + 'static,
        E: Send + 'static,
    {
        AsyncOutcome::from_outcome(self)
    }
}

impl<T> Outcome<T, T> {
    /// Returns whichever payload is present.
    pub fn unwrap_both(self) -> T {
        match self {
            Outcome::Ok(value) => value,
            Outcome::Err(fault) => fault.error,
        }
    }
}

impl<R, E> Outcome<R, E>
where
    R: IntoOutcome<E>,
{
    /// Collapses one level of nesting.
    ///
    /// ```rust
    /// use outcome::{err, ok, Outcome};
    ///
    /// assert_eq!(ok::<Outcome<i32, &str>, &str>(ok(42)).flatten(), ok(42));
    /// assert_eq!(ok::<Outcome<i32, &str>, &str>(err("x")).flatten(), err("x"));
    /// assert_eq!(err::<Outcome<i32, &str>, &str>("y").flatten(), err("y"));
    /// ```
    pub fn flatten(self) -> R::Lifted {
        self.and_then(|inner| inner)
    }
}

impl<T, E> Tagged for Outcome<T, E> {
    fn variant(&self) -> Variant {
        match self {
            Outcome::Ok(_) => Variant::Ok,
            Outcome::Err(_) => Variant::Err,
        }
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Outcome::Ok(value),
            Err(error) => err(error),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    fn from(outcome: Outcome<T, E>) -> Self {
        outcome.into_result()
    }
}
