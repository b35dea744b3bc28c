//! Handles that several chains can build on.
//!
//! [`AsyncOutcome`] and [`AsyncMaybe`] are consumed by each combinator. To
//! branch, convert the handle with `shared()`: every [`handle`] taken from the
//! result observes the same resolution, and the source is polled to
//! completion once no matter how many chains wait on it.
//!
//! [`handle`]: SharedOutcome::handle

use std::fmt;
use std::future::{Future, IntoFuture};
use std::pin::Pin;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::task::{Context, Poll, Wake, Waker};

use futures_lite::future::Boxed;
use futures_lite::FutureExt;

use crate::lift::{IntoMaybe, IntoOutcome};
use crate::log::trace;
use crate::trace::Trace;
use crate::{AsyncMaybe, AsyncOutcome, Maybe, Outcome};

enum State<T> {
    Pending(Boxed<T>),
    Done(T),
}

// Every task waiting on the source, woken together.
struct Waiters {
    wakers: Mutex<Vec<Waker>>,
}

impl Waiters {
    fn register(&self, waker: &Waker) {
        let mut wakers = lock(&self.wakers);
        if !wakers.iter().any(|w| w.will_wake(waker)) {
            wakers.push(waker.clone());
        }
    }
}

impl Wake for Waiters {
    fn wake(self: Arc<Self>) {
        self.wake_by_ref();
    }

    fn wake_by_ref(self: &Arc<Self>) {
        let wakers = std::mem::take(&mut *lock(&self.wakers));
        for waker in wakers {
            waker.wake();
        }
    }
}

struct Inner<T> {
    state: Mutex<State<T>>,
    waiters: Arc<Waiters>,
}

/// Future over a source that is resolved once and cloned to every poller.
pub(crate) struct Shared<T> {
    inner: Arc<Inner<T>>,
}

impl<T> Shared<T> {
    fn new(source: Boxed<T>) -> Self {
        Self {
            inner: Arc::new(Inner {
                state: Mutex::new(State::Pending(source)),
                waiters: Arc::new(Waiters {
                    wakers: Mutex::new(Vec::new()),
                }),
            }),
        }
    }
}

impl<T> Clone for Shared<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: Clone> Future for Shared<T> {
    type Output = T;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<T> {
        let inner = &self.inner;
        let mut state = lock(&inner.state);

        let value = match &mut *state {
            State::Done(value) => return Poll::Ready(value.clone()),
            State::Pending(source) => {
                inner.waiters.register(cx.waker());
                let waker = Waker::from(Arc::clone(&inner.waiters));
                match source.as_mut().poll(&mut Context::from_waker(&waker)) {
                    Poll::Ready(value) => value,
                    Poll::Pending => return Poll::Pending,
                }
            }
        };

        *state = State::Done(value.clone());
        drop(state);
        trace!("shared source resolved");
        inner.waiters.wake_by_ref();
        Poll::Ready(value)
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// An [`AsyncOutcome`] that can be cloned and branched.
///
/// ```rust
/// use futures_lite::future::block_on;
/// use outcome::{ok, AsyncOutcome};
///
/// let source = AsyncOutcome::<i32, &str>::ok(2).shared();
/// let doubled = source.handle().map(|x| x * 2);
/// let negated = source.handle().map(|x| -x);
///
/// assert_eq!(block_on(async { doubled.await }), ok(4));
/// assert_eq!(block_on(async { negated.await }), ok(-2));
/// ```
pub struct SharedOutcome<T, E> {
    source: Shared<Outcome<T, E>>,
}

impl<T, E> Clone for SharedOutcome<T, E> {
    fn clone(&self) -> Self {
        Self {
            source: self.source.clone(),
        }
    }
}

impl<T, E> fmt::Debug for SharedOutcome<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedOutcome").finish_non_exhaustive()
    }
}

impl<T, E> AsyncOutcome<T, E>
where
    T: Clone + Send + 'static,
    E: Clone + Send + 'static,
{
    /// Turns the handle into one that any number of chains can branch off.
    pub fn shared(self) -> SharedOutcome<T, E> {
        SharedOutcome {
            source: Shared::new(self.into_future()),
        }
    }
}

impl<T, E> SharedOutcome<T, E>
where
    T: Clone + Send + 'static,
    E: Clone + Send + 'static,
{
    /// A fresh handle on the shared resolution, ready for its own chain.
    pub fn handle(&self) -> AsyncOutcome<T, E> {
        AsyncOutcome::from_future(self.source.clone())
    }
}

impl<T, E> IntoFuture for SharedOutcome<T, E>
where
    T: Clone + Send + 'static,
    E: Clone + Send + 'static,
{
    type Output = Outcome<T, E>;
    type IntoFuture = Boxed<Outcome<T, E>>;

    fn into_future(self) -> Self::IntoFuture {
        self.source.boxed()
    }
}

impl<T, E> IntoOutcome<E> for SharedOutcome<T, E>
where
    T: Clone + Send + 'static,
    E: Clone + Send + 'static,
{
    type Ok = T;
    type Lifted = AsyncOutcome<T, E>;

    fn lift(self) -> AsyncOutcome<T, E> {
        self.handle()
    }

    fn lift_outcome(outcome: Outcome<T, E>) -> AsyncOutcome<T, E> {
        AsyncOutcome::from_outcome(outcome)
    }

    fn lift_traced(self, prefix: Trace) -> AsyncOutcome<T, E> {
        self.handle().lift_traced(prefix)
    }

    fn into_async(self) -> AsyncOutcome<T, E> {
        self.handle()
    }
}

/// An [`AsyncMaybe`] that can be cloned and branched.
pub struct SharedMaybe<T> {
    source: Shared<Maybe<T>>,
}

impl<T> Clone for SharedMaybe<T> {
    fn clone(&self) -> Self {
        Self {
            source: self.source.clone(),
        }
    }
}

impl<T> fmt::Debug for SharedMaybe<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedMaybe").finish_non_exhaustive()
    }
}

impl<T> AsyncMaybe<T>
where
    T: Clone + Send + 'static,
{
    /// Turns the handle into one that any number of chains can branch off.
    pub fn shared(self) -> SharedMaybe<T> {
        SharedMaybe {
            source: Shared::new(self.into_future()),
        }
    }
}

impl<T> SharedMaybe<T>
where
    T: Clone + Send + 'static,
{
    /// A fresh handle on the shared resolution.
    pub fn handle(&self) -> AsyncMaybe<T> {
        AsyncMaybe::from_future(self.source.clone())
    }
}

impl<T> IntoFuture for SharedMaybe<T>
where
    T: Clone + Send + 'static,
{
    type Output = Maybe<T>;
    type IntoFuture = Boxed<Maybe<T>>;

    fn into_future(self) -> Self::IntoFuture {
        self.source.boxed()
    }
}

impl<T> IntoMaybe for SharedMaybe<T>
where
    T: Clone + Send + 'static,
{
    type Some = T;
    type Lifted = AsyncMaybe<T>;

    fn lift(self) -> AsyncMaybe<T> {
        self.handle()
    }

    fn lift_maybe(maybe: Maybe<T>) -> AsyncMaybe<T> {
        AsyncMaybe::from_maybe(maybe)
    }

    fn into_async(self) -> AsyncMaybe<T> {
        self.handle()
    }
}
