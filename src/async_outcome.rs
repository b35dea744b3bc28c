//! A pending [`Outcome`] with the same combinator vocabulary.
//!
//! Each combinator awaits the source, applies the matching synchronous
//! combinator, and flattens a pending result so a handle never resolves to
//! another handle. Handles are consumed by value, so a chain is a single line
//! of continuations: steps run in declaration order, each exactly once.
//!
//! ```rust
//! use futures_lite::future::block_on;
//! use outcome::{ok, AsyncOutcome};
//!
//! let doubled = AsyncOutcome::<i32, &str>::ok(7).map(|x| x * 2);
//! assert_eq!(block_on(async { doubled.await }), ok(14));
//! ```

use std::fmt;
use std::fmt::Debug;
use std::future::{Future, IntoFuture};

use futures_lite::future::{self, Boxed};
use futures_lite::FutureExt;

use crate::lift::IntoOutcome;
use crate::trace::TraceEntry;
use crate::{AsyncMaybe, Outcome};

/// Handle to a computation that resolves to an [`Outcome<T, E>`].
///
/// Awaiting the handle yields the outcome.
#[must_use = "an `AsyncOutcome` does nothing unless awaited"]
pub struct AsyncOutcome<T, E> {
    future: Boxed<Outcome<T, E>>,
}

impl<T, E> fmt::Debug for AsyncOutcome<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AsyncOutcome").finish_non_exhaustive()
    }
}

impl<T, E> IntoFuture for AsyncOutcome<T, E> {
    type Output = Outcome<T, E>;
    type IntoFuture = Boxed<Outcome<T, E>>;

    fn into_future(self) -> Self::IntoFuture {
        self.future
    }
}

impl<T, E> From<Outcome<T, E>> for AsyncOutcome<T, E>
where
    T: Send + 'static,
    E: Send + 'static,
{
    fn from(outcome: Outcome<T, E>) -> Self {
        Self::from_outcome(outcome)
    }
}

impl<T, E> AsyncOutcome<T, E>
where
    T: Send + 'static,
    E: Send + 'static,
{
    /// A handle already resolved to `Ok(value)`.
    pub fn ok(value: T) -> Self {
        Self::from_outcome(Outcome::Ok(value))
    }

    pub fn err(error: E) -> Self {
        Self::from_outcome(crate::err(error))
    }

    /// An already-resolved handle.
    pub fn from_outcome(outcome: Outcome<T, E>) -> Self {
        Self {
            future: future::ready(outcome).boxed(),
        }
    }

    /// A handle that resolves when `future` does.
    pub fn from_future<F>(future: F) -> Self
    where
        F: Future<Output = Outcome<T, E>> + Send + 'static,
    {
        Self {
            future: future.boxed(),
        }
    }

    /// Builds a handle from a sync outcome, a future of one, or an existing
    /// handle. An existing handle is returned as is.
    pub fn new<R>(source: R) -> Self
    where
        R: IntoOutcome<E, Ok = T>,
    {
        source.into_async()
    }

    /// Applies a synchronous transformation to the resolved outcome.
    fn then<U, E2, F>(self, f: F) -> AsyncOutcome<U, E2>
    where
        F: FnOnce(Outcome<T, E>) -> Outcome<U, E2> + Send + 'static,
        U: Send + 'static,
        E2: Send + 'static,
    {
        AsyncOutcome::from_future(async move { f(self.await) })
    }

    /// Resolves the handle and reports whether it is `Ok`.
    ///
    /// ```rust
    /// use futures_lite::future::block_on;
    /// use outcome::AsyncOutcome;
    ///
    /// assert!(block_on(AsyncOutcome::<i32, &str>::ok(1).is_ok()));
    /// assert!(!block_on(AsyncOutcome::<i32, &str>::err("e").is_ok()));
    /// ```
    pub async fn is_ok(self) -> bool {
        self.await.is_ok()
    }

    pub async fn is_err(self) -> bool {
        self.await.is_err()
    }

    /// Maps the `Ok` value once the handle resolves.
    ///
    /// ```rust
    /// use futures_lite::future::block_on;
    /// use outcome::{ok, AsyncOutcome};
    ///
    /// let doubled = AsyncOutcome::<i32, &str>::ok(4).map(|x| x * 2);
    /// assert_eq!(block_on(async { doubled.await }), ok(8));
    /// ```
    pub fn map<U, F>(self, f: F) -> AsyncOutcome<U, E>
    where
        F: FnOnce(T) -> U + Send + 'static,
        U: Send + 'static,
    {
        self.then(move |outcome| outcome.map(f))
    }

    /// Maps `Ok` through a callback that produces a pending value.
    pub fn map_async<U, F, Fut>(self, f: F) -> AsyncOutcome<U, E>
    where
        F: FnOnce(T) -> Fut + Send + 'static,
        Fut: Future<Output = U> + Send + 'static,
        U: Send + 'static,
    {
        AsyncOutcome::from_future(async move { self.await.map_async(f).await })
    }

    /// Maps the error of an `Err`, keeping its trace.
    pub fn map_err<E2, F>(self, f: F) -> AsyncOutcome<T, E2>
    where
        F: FnOnce(E) -> E2 + Send + 'static,
        E2: Send + 'static,
    {
        self.then(move |outcome| outcome.map_err(f))
    }

    /// Resolves to `fallback` if this handle resolves to an `Err`.
    pub fn or<R, E2>(self, fallback: R) -> AsyncOutcome<T, E2>
    where
        R: IntoOutcome<E2, Ok = T> + Send + 'static,
        E2: Send + 'static,
    {
        AsyncOutcome::from_future(async move {
            match self.await {
                Outcome::Ok(value) => Outcome::Ok(value),
                Outcome::Err(_) => fallback.into_async().await,
            }
        })
    }

    /// Like [`or`](Self::or), but the fallback is only built on `Err`.
    pub fn lazy_or<R, E2, F>(self, f: F) -> AsyncOutcome<T, E2>
    where
        F: FnOnce() -> R + Send + 'static,
        R: IntoOutcome<E2, Ok = T>,
        E2: Send + 'static,
    {
        AsyncOutcome::from_future(async move {
            match self.await {
                Outcome::Ok(value) => Outcome::Ok(value),
                Outcome::Err(_) => f().into_async().await,
            }
        })
    }

    /// Swaps the `Ok` value for `value`.
    ///
    /// ```rust
    /// use futures_lite::future::block_on;
    /// use outcome::{err, AsyncOutcome};
    ///
    /// let failed = AsyncOutcome::<i32, &str>::err("e").replace("unused");
    /// assert_eq!(block_on(async { failed.await }), err("e"));
    /// ```
    pub fn replace<U>(self, value: U) -> AsyncOutcome<U, E>
    where
        U: Send + 'static,
    {
        self.then(move |outcome| outcome.replace(value))
    }

    pub fn replace_err<E2>(self, error: E2) -> AsyncOutcome<T, E2>
    where
        E2: Send + 'static,
    {
        self.then(move |outcome| outcome.replace_err(error))
    }

    /// Runs `f` on the success value once the handle resolves.
    ///
    /// ```rust
    /// use std::sync::atomic::{AtomicI32, Ordering};
    /// use std::sync::Arc;
    ///
    /// use futures_lite::future::block_on;
    /// use outcome::{ok, AsyncOutcome};
    ///
    /// let seen = Arc::new(AtomicI32::new(0));
    /// let spy = Arc::clone(&seen);
    /// let handle = AsyncOutcome::<i32, &str>::ok(9).tap(move |x| spy.store(*x, Ordering::SeqCst));
    ///
    /// assert_eq!(block_on(async { handle.await }), ok(9));
    /// assert_eq!(seen.load(Ordering::SeqCst), 9);
    /// ```
    pub fn tap<F>(self, f: F) -> Self
    where
        F: FnOnce(&T) + Send + 'static,
    {
        self.then(move |outcome| outcome.tap(f))
    }

    pub fn tap_err<F>(self, f: F) -> Self
    where
        F: FnOnce(&E) + Send + 'static,
    {
        self.then(move |outcome| outcome.tap_err(f))
    }

    /// Resolves to the `Ok` value, or `fallback`.
    ///
    /// ```rust
    /// use futures_lite::future::block_on;
    /// use outcome::AsyncOutcome;
    ///
    /// assert_eq!(block_on(AsyncOutcome::<i32, &str>::err("e").unwrap_or(0)), 0);
    /// ```
    pub async fn unwrap_or(self, fallback: T) -> T {
        self.await.unwrap_or(fallback)
    }

    pub async fn unwrap_err_or(self, fallback: E) -> E {
        self.await.unwrap_err_or(fallback)
    }

    /// # Panics
    ///
    /// The returned future panics with an [`AssertError`](crate::AssertError)
    /// payload if the outcome is an `Err`.
    pub async fn assert_ok(self, message: Option<&str>) -> T
    where
        E: Debug,
    {
        self.await.assert_ok(message)
    }

    /// # Panics
    ///
    /// The returned future panics with an [`AssertError`](crate::AssertError)
    /// payload if the outcome is an `Ok`.
    pub async fn assert_err(self, message: Option<&str>) -> E
    where
        T: Debug,
    {
        self.await.assert_err(message)
    }

    /// Chains a fallible step; `f` may return a sync or async outcome.
    ///
    /// ```rust
    /// use futures_lite::future::block_on;
    /// use outcome::{ok, AsyncOutcome, Outcome};
    ///
    /// let chained = AsyncOutcome::<i32, &str>::ok(2)
    ///     .and_then(|x| ok(x + 1))
    ///     .and_then(|x| async move { ok::<i32, &str>(x * 10) });
    /// assert_eq!(block_on(async { chained.await }), ok(30));
    /// ```
    #[doc(alias = "try")]
    pub fn and_then<R, F>(self, f: F) -> AsyncOutcome<R::Ok, E>
    where
        F: FnOnce(T) -> R + Send + 'static,
        R: IntoOutcome<E>,
        R::Ok: Send + 'static,
    {
        AsyncOutcome::from_future(async move {
            match self.await {
                Outcome::Ok(value) => f(value).into_async().await,
                Outcome::Err(fault) => Outcome::Err(fault),
            }
        })
    }

    /// Recovers from `Err`; a new `Err` inherits this error's trace.
    #[doc(alias = "try_recover")]
    pub fn recover<R, E2, F>(self, f: F) -> AsyncOutcome<T, E2>
    where
        F: FnOnce(E) -> R + Send + 'static,
        R: IntoOutcome<E2, Ok = T>,
        E2: Send + 'static,
    {
        AsyncOutcome::from_future(async move {
            match self.await {
                Outcome::Ok(value) => Outcome::Ok(value),
                Outcome::Err(fault) => {
                    let prefix = fault.trace;
                    f(fault.error).into_async().await.lift_traced(prefix)
                }
            }
        })
    }

    pub async fn to_pair(self) -> (Option<T>, Option<E>) {
        self.await.to_pair()
    }

    /// Appends `tag` to the trace if the handle resolves to an `Err`.
    pub fn trace(self, tag: impl Into<TraceEntry>) -> Self {
        let tag = tag.into();
        self.then(move |outcome| outcome.trace(tag))
    }

    /// `Ok(v)` becomes `Some(v)`, `Err` becomes `None`.
    pub fn into_maybe(self) -> AsyncMaybe<T> {
        AsyncMaybe::from_future(async move { self.await.into_maybe() })
    }

    pub async fn into_result(self) -> Result<T, E> {
        self.await.into_result()
    }
}

impl<R, E> AsyncOutcome<R, E>
where
    R: IntoOutcome<E> + Send + 'static,
    R::Ok: Send + 'static,
    E: Send + 'static,
{
    /// Collapses a handle whose success value is itself outcome-like.
    pub fn flatten(self) -> AsyncOutcome<R::Ok, E> {
        self.and_then(|inner| inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{err, ok, AssertError};
    use futures_lite::future::block_on;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    fn resolve<T, E>(handle: AsyncOutcome<T, E>) -> Outcome<T, E> {
        block_on(handle.into_future())
    }

    #[test]
    fn test_round_trip_from_sync() {
        let good: Outcome<i32, &str> = ok(1);
        let bad: Outcome<i32, &str> = err::<i32, &str>("e").trace("t");

        assert_eq!(resolve(AsyncOutcome::from(good.clone())), good);
        assert_eq!(resolve(AsyncOutcome::new(bad.clone())), bad);
    }

    #[test]
    fn test_new_is_idempotent_on_handles() {
        let handle = AsyncOutcome::<i32, ()>::ok(5);
        let again = AsyncOutcome::new(handle);
        assert_eq!(resolve(again), ok(5));
    }

    #[test]
    fn test_map_chain() {
        let handle = AsyncOutcome::<i32, &str>::ok(7).map(|x| x * 2);
        assert_eq!(resolve(handle), ok(14));

        let failed = AsyncOutcome::<i32, &str>::err("e").map(|x| x * 2);
        assert_eq!(resolve(failed), err("e"));
    }

    #[test]
    fn test_map_err_replace_and_trace() {
        let handle = AsyncOutcome::<i32, &str>::err("e")
            .trace("a")
            .map_err(|e| e.len())
            .replace_err(9_usize)
            .trace("b");
        let resolved = resolve(handle);
        assert_eq!(resolved.error(), Some(&9));
        assert_eq!(resolved.fault().unwrap().trace.ids(), vec!["a", "b"]);

        assert_eq!(resolve(AsyncOutcome::<i32, ()>::ok(1).replace("r")), ok("r"));
    }

    #[test]
    fn test_taps_run_in_declaration_order_once() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let handle = AsyncOutcome::<i32, &str>::ok(1)
            .tap({
                let log = Arc::clone(&log);
                move |v| log.lock().unwrap().push(format!("first {v}"))
            })
            .map(|x| x + 1)
            .tap({
                let log = Arc::clone(&log);
                move |v| log.lock().unwrap().push(format!("second {v}"))
            })
            .tap_err({
                let log = Arc::clone(&log);
                move |e| log.lock().unwrap().push(format!("err {e}"))
            });

        assert!(log.lock().unwrap().is_empty());
        assert_eq!(resolve(handle), ok(2));
        assert_eq!(*log.lock().unwrap(), vec!["first 1", "second 2"]);
    }

    #[test]
    fn test_and_then_never_calls_on_err() {
        let calls = Arc::new(AtomicUsize::new(0));
        let handle = AsyncOutcome::<i32, &str>::err("stop").and_then({
            let calls = Arc::clone(&calls);
            move |x| {
                calls.fetch_add(1, Ordering::SeqCst);
                ok::<i32, &str>(x)
            }
        });

        assert_eq!(resolve(handle), err("stop"));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_and_then_flattens_async_producers() {
        let handle = AsyncOutcome::<i32, &str>::ok(1)
            .and_then(|x| AsyncOutcome::<i32, &str>::ok(x + 1))
            .and_then(|x| async move { ok::<i32, &str>(x * 3) })
            .and_then(|x| if x > 5 { err("big") } else { ok(x) });
        assert_eq!(resolve(handle), err("big"));
    }

    #[test]
    fn test_or_and_lazy_or() {
        let kept = AsyncOutcome::<i32, &str>::ok(1).or(ok::<i32, ()>(2));
        assert_eq!(resolve(kept), ok(1));

        let swapped = AsyncOutcome::<i32, &str>::err("e").or(AsyncOutcome::<i32, ()>::ok(2));
        assert_eq!(resolve(swapped), ok(2));

        let lazy = AsyncOutcome::<i32, &str>::err("e").lazy_or(|| async { ok::<i32, ()>(3) });
        assert_eq!(resolve(lazy), ok(3));
    }

    #[test]
    fn test_recover_inherits_trace() {
        let handle = AsyncOutcome::<i32, &str>::err("first")
            .trace("a")
            .recover(|e| async move { err::<i32, String>(e.to_uppercase()).trace("b") });
        let resolved = resolve(handle);
        assert_eq!(resolved.error().map(String::as_str), Some("FIRST"));
        assert_eq!(resolved.fault().unwrap().trace.ids(), vec!["a", "b"]);
    }

    #[test]
    fn test_terminal_operations() {
        assert_eq!(block_on(AsyncOutcome::<i32, &str>::ok(1).unwrap_or(0)), 1);
        assert_eq!(block_on(AsyncOutcome::<i32, &str>::err("e").unwrap_or(0)), 0);
        assert_eq!(block_on(AsyncOutcome::<i32, &str>::err("e").unwrap_err_or("x")), "e");
        assert_eq!(block_on(AsyncOutcome::<i32, &str>::ok(1).to_pair()), (Some(1), None));
        assert!(block_on(AsyncOutcome::<i32, &str>::ok(1).is_ok()));
        assert!(block_on(AsyncOutcome::<i32, &str>::err("e").is_err()));
        assert_eq!(block_on(AsyncOutcome::<i32, &str>::ok(1).into_result()), Ok(1));
    }

    #[test]
    fn test_assert_ok_panics_when_resolved() {
        let caught = std::panic::catch_unwind(|| {
            block_on(AsyncOutcome::<i32, &str>::err("x").assert_ok(None))
        })
        .unwrap_err();
        assert!(caught.downcast_ref::<AssertError>().is_some());
        assert_eq!(block_on(AsyncOutcome::<i32, &str>::err("x").assert_err(None)), "x");
    }

    #[test]
    fn test_flatten_and_into_maybe() {
        let nested = AsyncOutcome::<Outcome<i32, &str>, &str>::ok(err("inner"));
        assert_eq!(resolve(nested.flatten()), err("inner"));

        let nested = AsyncOutcome::<AsyncOutcome<i32, &str>, &str>::ok(AsyncOutcome::ok(3));
        assert_eq!(resolve(nested.flatten()), ok(3));

        let present = AsyncOutcome::<i32, &str>::ok(3).into_maybe();
        assert_eq!(block_on(present.into_future()), crate::some(3));
    }

    #[test]
    fn test_map_async() {
        let handle = AsyncOutcome::<i32, &str>::ok(4).map_async(|x| async move { x + 1 });
        assert_eq!(resolve(handle), ok(5));

        let lifted = ok::<i32, &str>(4).map_async(|x| async move { x * 2 });
        assert_eq!(resolve(lifted), ok(8));
    }
}
