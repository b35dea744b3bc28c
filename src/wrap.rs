//! Boundary adapters for code that reports failure the std way.
//!
//! [`wrap`] and [`wrap_async`] turn a `std::result::Result` producer into an
//! [`Outcome`] / [`AsyncOutcome`]; [`proxy`] and [`proxy_async`] do the same
//! for every call of a reusable function. [`wrap_unwind`] and
//! [`wrap_unwind_async`] additionally catch panics.

use std::any::Any;
use std::future::Future;
use std::panic::{catch_unwind, resume_unwind, AssertUnwindSafe};

use futures_lite::FutureExt;

use crate::error::{AssertError, Panic, YieldError};
use crate::log::debug;
use crate::{AsyncOutcome, Outcome};

/// Runs `f` and maps its `Ok`/`Err` onto an [`Outcome`].
///
/// ```rust
/// use outcome::{err, ok, wrap};
///
/// assert_eq!(wrap(|| "1".parse::<i32>()), ok(1));
/// assert!(wrap(|| "one".parse::<i32>()).is_err());
/// assert_eq!(wrap(|| Err::<i32, _>("rejected")), err("rejected"));
/// ```
pub fn wrap<T, E, F>(f: F) -> Outcome<T, E>
where
    F: FnOnce() -> Result<T, E>,
{
    Outcome::from(f())
}

/// Runs `f` and defers the mapping until the returned future resolves.
///
/// ```rust
/// use futures_lite::future::block_on;
/// use outcome::{err, wrap_async};
///
/// let rejected = wrap_async(|| async { Err::<i32, _>("rejected") });
/// assert_eq!(block_on(async { rejected.await }), err("rejected"));
/// ```
pub fn wrap_async<T, E, F, Fut>(f: F) -> AsyncOutcome<T, E>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T, E>> + Send + 'static,
    T: Send + 'static,
    E: Send + 'static,
{
    let pending = f();
    AsyncOutcome::from_future(async move { Outcome::from(pending.await) })
}

/// Returns a function that applies [`wrap`] to every call of `f`.
pub fn proxy<A, T, E, F>(f: F) -> impl Fn(A) -> Outcome<T, E>
where
    F: Fn(A) -> Result<T, E>,
{
    move |arg| wrap(|| f(arg))
}

/// Returns a function that applies [`wrap_async`] to every call of `f`.
pub fn proxy_async<A, T, E, F, Fut>(f: F) -> impl Fn(A) -> AsyncOutcome<T, E>
where
    F: Fn(A) -> Fut,
    Fut: Future<Output = Result<T, E>> + Send + 'static,
    T: Send + 'static,
    E: Send + 'static,
{
    move |arg| wrap_async(|| f(arg))
}

/// Runs `f`, turning a panic into `Err(Panic)`.
///
/// Contract violations ([`AssertError`], [`YieldError`]) keep unwinding.
///
/// ```rust
/// use outcome::{ok, wrap_unwind};
///
/// assert_eq!(wrap_unwind(|| 2 + 2), ok(4));
///
/// let caught = wrap_unwind(|| -> i32 { panic!("kaboom") });
/// assert_eq!(caught.error().unwrap().message(), "kaboom");
/// ```
pub fn wrap_unwind<T, F>(f: F) -> Outcome<T, Panic>
where
    F: FnOnce() -> T,
{
    match catch_unwind(AssertUnwindSafe(f)) {
        Ok(value) => Outcome::Ok(value),
        Err(payload) => caught(payload),
    }
}

/// Async form of [`wrap_unwind`]: a panic in `f` or while polling the future
/// it returns becomes `Err(Panic)`.
pub fn wrap_unwind_async<T, F, Fut>(f: F) -> AsyncOutcome<T, Panic>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = T> + Send + 'static,
    T: Send + 'static,
{
    let pending = match catch_unwind(AssertUnwindSafe(f)) {
        Ok(pending) => AssertUnwindSafe(pending).catch_unwind(),
        Err(payload) => return AsyncOutcome::from_outcome(caught(payload)),
    };
    AsyncOutcome::from_future(async move {
        match pending.await {
            Ok(value) => Outcome::Ok(value),
            Err(payload) => caught(payload),
        }
    })
}

fn caught<T>(payload: Box<dyn Any + Send>) -> Outcome<T, Panic> {
    if payload.is::<AssertError>() || payload.is::<YieldError>() {
        resume_unwind(payload);
    }
    let panic = Panic::from_payload(payload);
    debug!(reason = panic.message(), "caught panic at unwind boundary");
    crate::err(panic)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{err, ok};
    use futures_lite::future::block_on;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_wrap_maps_std_results() {
        assert_eq!(wrap(|| Ok::<_, String>(1)), ok(1));
        assert_eq!(wrap(|| Err::<i32, _>("thrown")), err("thrown"));
    }

    #[test]
    fn test_wrap_async_defers_until_resolved() {
        let resolved = wrap_async(|| async { Ok::<_, &str>(5) });
        let rejected = wrap_async(|| async { Err::<i32, _>("x") });

        assert_eq!(block_on(async { resolved.await }), ok(5));
        assert_eq!(block_on(async { rejected.await }), err("x"));
    }

    #[test]
    fn test_proxy_wraps_every_call() {
        let calls = AtomicUsize::new(0);
        let parse = proxy(|raw: &str| {
            calls.fetch_add(1, Ordering::SeqCst);
            raw.parse::<u8>()
        });

        assert_eq!(parse("7"), ok(7));
        assert!(parse("300").is_err());
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_proxy_async() {
        let double = proxy_async(|x: i32| async move {
            if x < 0 {
                Err("negative")
            } else {
                Ok(x * 2)
            }
        });

        assert_eq!(block_on(async { double(4).await }), ok(8));
        assert_eq!(block_on(async { double(-1).await }), err("negative"));
    }

    #[test]
    fn test_wrap_unwind_catches_panics() {
        assert_eq!(wrap_unwind(|| "fine"), ok("fine"));

        let caught = wrap_unwind(|| -> u8 { panic!("bad state {}", 3) });
        assert_eq!(caught.error().map(Panic::message), Some("bad state 3"));
    }

    #[test]
    fn test_wrap_unwind_async_catches_panics() {
        let handle = wrap_unwind_async(|| async {
            if true {
                panic!("async failure");
            }
            1
        });
        let resolved = block_on(async { handle.await });
        assert_eq!(resolved.error().map(Panic::message), Some("async failure"));
    }

    #[test]
    fn test_wrap_unwind_async_catches_panicking_producer() {
        let handle = wrap_unwind_async(|| -> std::future::Ready<i32> { panic!("before future") });
        let resolved = block_on(async { handle.await });
        assert_eq!(resolved.error().map(Panic::message), Some("before future"));
    }

    #[test]
    fn test_contract_violations_keep_unwinding() {
        let escaped = catch_unwind(|| {
            wrap_unwind(|| err::<i32, &str>("e").assert_ok(None))
        })
        .unwrap_err();
        assert!(escaped.downcast_ref::<AssertError>().is_some());
    }
}
