//! A pending [`Maybe`], mirroring [`AsyncOutcome`](crate::AsyncOutcome).

use std::fmt;
use std::fmt::Debug;
use std::future::{Future, IntoFuture};

use futures_lite::future::{self, Boxed};
use futures_lite::FutureExt;

use crate::lift::IntoMaybe;
use crate::{AsyncOutcome, Maybe};

/// Handle to a computation that resolves to a [`Maybe<T>`].
#[must_use = "an `AsyncMaybe` does nothing unless awaited"]
pub struct AsyncMaybe<T> {
    future: Boxed<Maybe<T>>,
}

impl<T> fmt::Debug for AsyncMaybe<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AsyncMaybe").finish_non_exhaustive()
    }
}

impl<T> IntoFuture for AsyncMaybe<T> {
    type Output = Maybe<T>;
    type IntoFuture = Boxed<Maybe<T>>;

    fn into_future(self) -> Self::IntoFuture {
        self.future
    }
}

impl<T: Send + 'static> From<Maybe<T>> for AsyncMaybe<T> {
    fn from(maybe: Maybe<T>) -> Self {
        Self::from_maybe(maybe)
    }
}

impl<T> AsyncMaybe<T>
where
    T: Send + 'static,
{
    /// A handle already resolved to `Some(value)`.
    pub fn some(value: T) -> Self {
        Self::from_maybe(Maybe::Some(value))
    }

    /// A handle already resolved to `None`.
    pub fn none() -> Self {
        Self::from_maybe(Maybe::None)
    }

    pub fn from_maybe(maybe: Maybe<T>) -> Self {
        Self {
            future: future::ready(maybe).boxed(),
        }
    }

    /// A handle that resolves when `future` does.
    pub fn from_future<F>(future: F) -> Self
    where
        F: Future<Output = Maybe<T>> + Send + 'static,
    {
        Self {
            future: future.boxed(),
        }
    }

    /// Idempotent on an existing handle.
    pub fn new<R>(source: R) -> Self
    where
        R: IntoMaybe<Some = T>,
    {
        source.into_async()
    }

    fn then<U, F>(self, f: F) -> AsyncMaybe<U>
    where
        F: FnOnce(Maybe<T>) -> Maybe<U> + Send + 'static,
        U: Send + 'static,
    {
        AsyncMaybe::from_future(async move { f(self.await) })
    }

    /// Resolves the handle and reports whether it is `Some`.
    pub async fn is_some(self) -> bool {
        self.await.is_some()
    }

    pub async fn is_none(self) -> bool {
        self.await.is_none()
    }

    /// Maps the `Some` value once the handle resolves.
    ///
    /// ```rust
    /// use futures_lite::future::block_on;
    /// use outcome::{some, AsyncMaybe};
    ///
    /// let length = AsyncMaybe::some("four").map(str::len);
    /// assert_eq!(block_on(async { length.await }), some(4));
    /// ```
    pub fn map<U, F>(self, f: F) -> AsyncMaybe<U>
    where
        F: FnOnce(T) -> U + Send + 'static,
        U: Send + 'static,
    {
        self.then(move |maybe| maybe.map(f))
    }

    /// Maps `Some` through a callback that produces a pending value.
    pub fn map_async<U, F, Fut>(self, f: F) -> AsyncMaybe<U>
    where
        F: FnOnce(T) -> Fut + Send + 'static,
        Fut: Future<Output = U> + Send + 'static,
        U: Send + 'static,
    {
        AsyncMaybe::from_future(async move { self.await.map_async(f).await })
    }

    /// Resolves to `fallback` if this handle resolves to `None`.
    ///
    /// ```rust
    /// use futures_lite::future::block_on;
    /// use outcome::{some, AsyncMaybe};
    ///
    /// let filled = AsyncMaybe::none().or(some(1));
    /// assert_eq!(block_on(async { filled.await }), some(1));
    /// ```
    pub fn or<R>(self, fallback: R) -> AsyncMaybe<T>
    where
        R: IntoMaybe<Some = T> + Send + 'static,
    {
        AsyncMaybe::from_future(async move {
            match self.await {
                Maybe::Some(value) => Maybe::Some(value),
                Maybe::None => fallback.into_async().await,
            }
        })
    }

    /// Builds the fallback only on `None`.
    pub fn lazy_or<R, F>(self, f: F) -> AsyncMaybe<T>
    where
        F: FnOnce() -> R + Send + 'static,
        R: IntoMaybe<Some = T>,
    {
        AsyncMaybe::from_future(async move {
            match self.await {
                Maybe::Some(value) => Maybe::Some(value),
                Maybe::None => f().into_async().await,
            }
        })
    }

    pub fn replace<U>(self, value: U) -> AsyncMaybe<U>
    where
        U: Send + 'static,
    {
        self.then(move |maybe| maybe.replace(value))
    }

    /// Runs `f` on the `Some` value once the handle resolves.
    pub fn tap<F>(self, f: F) -> Self
    where
        F: FnOnce(&T) + Send + 'static,
    {
        self.then(move |maybe| maybe.tap(f))
    }

    pub fn tap_none<F>(self, f: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        self.then(move |maybe| maybe.tap_none(f))
    }

    /// Keeps a `Some` only if `predicate` holds.
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool + Send + 'static,
    {
        self.then(move |maybe| maybe.filter(predicate))
    }

    /// Resolves to the `Some` value, or `fallback`.
    ///
    /// ```rust
    /// use futures_lite::future::block_on;
    /// use outcome::AsyncMaybe;
    ///
    /// assert_eq!(block_on(AsyncMaybe::<i32>::none().unwrap_or(7)), 7);
    /// ```
    pub async fn unwrap_or(self, fallback: T) -> T {
        self.await.unwrap_or(fallback)
    }

    /// # Panics
    ///
    /// The returned future panics with an [`AssertError`](crate::AssertError)
    /// payload on `None`.
    pub async fn assert_some(self, message: Option<&str>) -> T {
        self.await.assert_some(message)
    }

    /// # Panics
    ///
    /// The returned future panics with an [`AssertError`](crate::AssertError)
    /// payload on `Some`.
    pub async fn assert_none(self, message: Option<&str>)
    where
        T: Debug,
    {
        self.await.assert_none(message)
    }

    /// Chains a step that may produce nothing; `f` may return a sync or
    /// async maybe.
    #[doc(alias = "try")]
    pub fn and_then<R, F>(self, f: F) -> AsyncMaybe<R::Some>
    where
        F: FnOnce(T) -> R + Send + 'static,
        R: IntoMaybe,
        R::Some: Send + 'static,
    {
        AsyncMaybe::from_future(async move {
            match self.await {
                Maybe::Some(value) => f(value).into_async().await,
                Maybe::None => Maybe::None,
            }
        })
    }

    /// `Some(v)` becomes `Ok(v)`, `None` becomes `Err(fallback)`.
    pub fn to_outcome<E>(self, fallback: E) -> AsyncOutcome<T, E>
    where
        E: Send + 'static,
    {
        AsyncOutcome::from_future(async move { self.await.to_outcome(fallback) })
    }

    pub async fn into_option(self) -> Option<T> {
        self.await.into_option()
    }
}

impl<R> AsyncMaybe<R>
where
    R: IntoMaybe + Send + 'static,
    R::Some: Send + 'static,
{
    /// Collapses a handle whose value is itself maybe-like.
    pub fn flatten(self) -> AsyncMaybe<R::Some> {
        self.and_then(|inner| inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{none, ok, some, AssertError};
    use futures_lite::future::block_on;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn resolve<T>(handle: AsyncMaybe<T>) -> Maybe<T> {
        block_on(handle.into_future())
    }

    #[test]
    fn test_round_trip() {
        assert_eq!(resolve(AsyncMaybe::from(some(1))), some(1));
        assert_eq!(resolve(AsyncMaybe::new(none::<i32>())), Maybe::None);
        assert_eq!(resolve(AsyncMaybe::new(AsyncMaybe::some(2))), some(2));
    }

    #[test]
    fn test_map_and_and_then() {
        let handle = AsyncMaybe::some(3)
            .map(|x| x + 1)
            .and_then(|x| async move { some(x * 2) })
            .and_then(|x| if x > 100 { some(x) } else { Maybe::None });
        assert_eq!(resolve(handle), Maybe::None);

        let calls = Arc::new(AtomicUsize::new(0));
        let skipped = AsyncMaybe::<i32>::none().and_then({
            let calls = Arc::clone(&calls);
            move |x| {
                calls.fetch_add(1, Ordering::SeqCst);
                some(x)
            }
        });
        assert_eq!(resolve(skipped), Maybe::None);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_or_lazy_or_replace() {
        assert_eq!(resolve(AsyncMaybe::none().or(some(5))), some(5));
        assert_eq!(resolve(AsyncMaybe::some(1).or(AsyncMaybe::some(5))), some(1));
        assert_eq!(
            resolve(AsyncMaybe::none().lazy_or(|| async { some(6) })),
            some(6)
        );
        assert_eq!(resolve(AsyncMaybe::some(1).replace("r")), some("r"));
    }

    #[test]
    fn test_taps_and_filter() {
        let hits = Arc::new(AtomicUsize::new(0));
        let handle = AsyncMaybe::some(4)
            .tap({
                let hits = Arc::clone(&hits);
                move |v| {
                    hits.fetch_add(*v as usize, Ordering::SeqCst);
                }
            })
            .filter(|v| *v > 10)
            .tap_none({
                let hits = Arc::clone(&hits);
                move || {
                    hits.fetch_add(100, Ordering::SeqCst);
                }
            });
        assert_eq!(resolve(handle), Maybe::None);
        assert_eq!(hits.load(Ordering::SeqCst), 104);
    }

    #[test]
    fn test_terminal_operations() {
        assert_eq!(block_on(AsyncMaybe::<i32>::none().unwrap_or(3)), 3);
        assert!(block_on(AsyncMaybe::some(1).is_some()));
        assert!(block_on(AsyncMaybe::<i32>::none().is_none()));
        assert_eq!(block_on(AsyncMaybe::some(2).assert_some(None)), 2);
        assert_eq!(block_on(AsyncMaybe::some(2).into_option()), Some(2));
        block_on(AsyncMaybe::<i32>::none().assert_none(None));

        let caught =
            std::panic::catch_unwind(|| block_on(AsyncMaybe::<i32>::none().assert_some(None)))
                .unwrap_err();
        assert!(caught.downcast_ref::<AssertError>().is_some());
    }

    #[test]
    fn test_to_outcome_and_flatten() {
        let present = AsyncMaybe::some(1).to_outcome("missing");
        assert_eq!(block_on(present.into_future()), ok(1));

        let nested = AsyncMaybe::some(AsyncMaybe::some(7));
        assert_eq!(resolve(nested.flatten()), some(7));

        let mapped = AsyncMaybe::some(2).map_async(|x| async move { x * 10 });
        assert_eq!(resolve(mapped), some(20));
    }
}
