//! Deciding whether a chain stays synchronous or lifts to an async handle.
//!
//! A producer handed to `and_then`, `recover`, `or` and friends may return
//! one of three shapes, and the combinator's return type follows it:
//!
//! | producer returns | combinator returns |
//! |---|---|
//! | `Outcome<T, E>` | `Outcome<T, E>` |
//! | `Future<Output = Outcome<T, E>>` | `AsyncOutcome<T, E>` |
//! | `AsyncOutcome<T, E>` | the same handle, never re-wrapped |
//!
//! [`IntoMaybe`] does the same for [`Maybe`] and [`AsyncMaybe`].

use std::future::Future;

use crate::trace::Trace;
use crate::{AsyncMaybe, AsyncOutcome, Maybe, Outcome};

/// Anything that can stand where an [`Outcome`] is expected.
pub trait IntoOutcome<E>: Sized {
    /// Success payload type.
    type Ok;
    /// [`Outcome`] for synchronous values, [`AsyncOutcome`] otherwise.
    type Lifted;

    fn lift(self) -> Self::Lifted;

    /// Builds the lifted type from an already-known outcome.
    fn lift_outcome(outcome: Outcome<Self::Ok, E>) -> Self::Lifted;

    /// Like [`lift`](Self::lift), but an `Err` gets `prefix` prepended to its trace.
    fn lift_traced(self, prefix: Trace) -> Self::Lifted;

    fn into_async(self) -> AsyncOutcome<Self::Ok, E>
    where
        Self::Ok: Send + 'static,
        E: Send + 'static;
}

impl<T, E> IntoOutcome<E> for Outcome<T, E> {
    type Ok = T;
    type Lifted = Outcome<T, E>;

    #[inline]
    fn lift(self) -> Outcome<T, E> {
        self
    }

    #[inline]
    fn lift_outcome(outcome: Outcome<T, E>) -> Outcome<T, E> {
        outcome
    }

    fn lift_traced(self, prefix: Trace) -> Outcome<T, E> {
        match self {
            Outcome::Ok(value) => Outcome::Ok(value),
            Outcome::Err(fault) => Outcome::Err(fault.inherit(&prefix)),
        }
    }

    fn into_async(self) -> AsyncOutcome<T, E>
    where
        T: Send + 'static,
        E: Send + 'static,
    {
        AsyncOutcome::from_outcome(self)
    }
}

impl<T, E> IntoOutcome<E> for AsyncOutcome<T, E>
where
    T: Send + 'static,
    E: Send + 'static,
{
    type Ok = T;
    type Lifted = AsyncOutcome<T, E>;

    #[inline]
    fn lift(self) -> AsyncOutcome<T, E> {
        self
    }

    fn lift_outcome(outcome: Outcome<T, E>) -> AsyncOutcome<T, E> {
        AsyncOutcome::from_outcome(outcome)
    }

    fn lift_traced(self, prefix: Trace) -> AsyncOutcome<T, E> {
        AsyncOutcome::from_future(async move { self.await.lift_traced(prefix) })
    }

    #[inline]
    fn into_async(self) -> AsyncOutcome<T, E> {
        self
    }
}

impl<F, T, E> IntoOutcome<E> for F
where
    F: Future<Output = Outcome<T, E>> + Send + 'static,
    T: Send + 'static,
    E: Send + 'static,
{
    type Ok = T;
    type Lifted = AsyncOutcome<T, E>;

    fn lift(self) -> AsyncOutcome<T, E> {
        AsyncOutcome::from_future(self)
    }

    fn lift_outcome(outcome: Outcome<T, E>) -> AsyncOutcome<T, E> {
        AsyncOutcome::from_outcome(outcome)
    }

    fn lift_traced(self, prefix: Trace) -> AsyncOutcome<T, E> {
        AsyncOutcome::from_future(async move { self.await.lift_traced(prefix) })
    }

    fn into_async(self) -> AsyncOutcome<T, E> {
        AsyncOutcome::from_future(self)
    }
}

/// Anything that can stand where a [`Maybe`] is expected.
pub trait IntoMaybe: Sized {
    type Some;
    /// [`Maybe`] for synchronous values, [`AsyncMaybe`] otherwise.
    type Lifted;

    fn lift(self) -> Self::Lifted;

    fn lift_maybe(maybe: Maybe<Self::Some>) -> Self::Lifted;

    fn into_async(self) -> AsyncMaybe<Self::Some>
    where
        Self::Some: Send + 'static;
}

impl<T> IntoMaybe for Maybe<T> {
    type Some = T;
    type Lifted = Maybe<T>;

    #[inline]
    fn lift(self) -> Maybe<T> {
        self
    }

    #[inline]
    fn lift_maybe(maybe: Maybe<T>) -> Maybe<T> {
        maybe
    }

    fn into_async(self) -> AsyncMaybe<T>
    where
        T: Send + 'static,
    {
        AsyncMaybe::from_maybe(self)
    }
}

impl<T> IntoMaybe for AsyncMaybe<T>
where
    T: Send + 'static,
{
    type Some = T;
    type Lifted = AsyncMaybe<T>;

    #[inline]
    fn lift(self) -> AsyncMaybe<T> {
        self
    }

    fn lift_maybe(maybe: Maybe<T>) -> AsyncMaybe<T> {
        AsyncMaybe::from_maybe(maybe)
    }

    #[inline]
    fn into_async(self) -> AsyncMaybe<T> {
        self
    }
}

impl<F, T> IntoMaybe for F
where
    F: Future<Output = Maybe<T>> + Send + 'static,
    T: Send + 'static,
{
    type Some = T;
    type Lifted = AsyncMaybe<T>;

    fn lift(self) -> AsyncMaybe<T> {
        AsyncMaybe::from_future(self)
    }

    fn lift_maybe(maybe: Maybe<T>) -> AsyncMaybe<T> {
        AsyncMaybe::from_maybe(maybe)
    }

    fn into_async(self) -> AsyncMaybe<T> {
        AsyncMaybe::from_future(self)
    }
}
