//! Drivers for delegation scopes.
//!
//! A scope is a closure (or async block) that extracts payloads with
//! [`Delegate::delegate`] and `?`. The first `Err`/`None` it delegates halts
//! the scope; the driver turns that halt back into the scope's result, with
//! the fault's trace intact.

use std::future::Future;

use crate::delegate::{Delegate, Halt, MaybeFlow, OutcomeFlow};
use crate::log::debug;
use crate::{AsyncMaybe, AsyncOutcome, Fault, Maybe, Outcome};

impl<T, E> Outcome<T, E> {
    /// Runs a synchronous delegation scope.
    ///
    /// ```rust
    /// use outcome::{err, ok, Delegate, Outcome};
    ///
    /// let parsed: Outcome<i32, String> = Outcome::run(|| {
    ///     let raw = ok::<&str, String>("21").delegate()?;
    ///     let n = raw.parse::<i32>().map_err(|e| e.to_string()).delegate()?;
    ///     Ok(n * 2)
    /// });
    /// assert_eq!(parsed, ok(42));
    /// ```
    pub fn run<F>(body: F) -> Self
    where
        F: FnOnce() -> OutcomeFlow<T, E>,
    {
        settle_outcome(body())
    }
}

impl<T> Maybe<T> {
    /// Runs a synchronous delegation scope; a delegated `None` ends it with `None`.
    pub fn run<F>(body: F) -> Self
    where
        F: FnOnce() -> MaybeFlow<T>,
    {
        settle_maybe(body())
    }
}

impl<T, E> AsyncOutcome<T, E>
where
    T: Send + 'static,
    E: Send + 'static,
{
    /// Runs an asynchronous delegation scope.
    ///
    /// The scope may delegate both resolved outcomes and pending handles:
    ///
    /// ```rust
    /// use futures_lite::future::block_on;
    /// use outcome::{ok, AsyncOutcome, Delegate};
    ///
    /// let handle: AsyncOutcome<i32, ()> = AsyncOutcome::run(|| async {
    ///     let a = ok::<i32, ()>(1).delegate()?;
    ///     let b = AsyncOutcome::<i32, ()>::ok(2).delegate().await?;
    ///     Ok(a + b)
    /// });
    /// assert_eq!(block_on(async { handle.await }), ok(3));
    /// ```
    pub fn run<F, Fut>(body: F) -> Self
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = OutcomeFlow<T, E>> + Send + 'static,
    {
        let scope = body();
        AsyncOutcome::from_future(async move { settle_outcome(scope.await) })
    }

    /// Waits for the handle, then delegates the resolved outcome.
    pub async fn delegate(self) -> OutcomeFlow<T, E> {
        self.await.delegate()
    }
}

impl<T> AsyncMaybe<T>
where
    T: Send + 'static,
{
    /// Runs an asynchronous delegation scope over `Maybe` values.
    pub fn run<F, Fut>(body: F) -> Self
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = MaybeFlow<T>> + Send + 'static,
    {
        let scope = body();
        AsyncMaybe::from_future(async move { settle_maybe(scope.await) })
    }

    /// Waits for the handle, then delegates the resolved value.
    pub async fn delegate(self) -> MaybeFlow<T> {
        self.await.delegate()
    }
}

fn settle_outcome<T, E>(flow: OutcomeFlow<T, E>) -> Outcome<T, E> {
    match flow {
        Ok(value) => Outcome::Ok(value),
        Err(Halt(fault)) => {
            debug!(trace = %fault.trace, "delegation scope halted on Err");
            Outcome::Err(fault)
        }
    }
}

fn settle_maybe<T>(flow: MaybeFlow<T>) -> Maybe<T> {
    match flow {
        Ok(value) => Maybe::Some(value),
        Err(Halt(())) => {
            debug!("delegation scope halted on None");
            Maybe::None
        }
    }
}

impl<T, E> From<Halt<Fault<E>>> for Outcome<T, E> {
    fn from(halt: Halt<Fault<E>>) -> Self {
        Outcome::Err(halt.0)
    }
}
