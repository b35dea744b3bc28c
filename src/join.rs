//! Concurrent resolution of many pending values.
//!
//! [`JoinAll`] polls every pending future on each wake, round-robin from the
//! one after the last to finish, and completes with the outputs in their
//! original order once all of them are done.

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures_lite::future::Boxed;

/// Future returned by [`join_all`].
#[must_use = "futures do nothing unless polled"]
pub(crate) struct JoinAll<T> {
    pending: Vec<Option<Boxed<T>>>,
    returns: Vec<Option<T>>,
    last_index: usize,
    complete: usize,
}

/// Drives all `futures` concurrently.
pub(crate) fn join_all<T>(futures: Vec<Boxed<T>>) -> JoinAll<T> {
    let len = futures.len();
    JoinAll {
        pending: futures.into_iter().map(Some).collect(),
        returns: (0..len).map(|_| None).collect(),
        last_index: 0,
        complete: 0,
    }
}

// Outputs are never pinned; each pending future is pinned inside its box.
impl<T> Unpin for JoinAll<T> {}

impl<T> Future for JoinAll<T> {
    type Output = Vec<T>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Vec<T>> {
        let this = self.get_mut();
        let n = this.pending.len();
        let start = this.last_index;
        let mut last_ready = None;

        for i in 0..n {
            let idx = (start + 1 + i) % n;
            let Some(future) = this.pending[idx].as_mut() else {
                continue;
            };
            if let Poll::Ready(value) = future.as_mut().poll(cx) {
                this.pending[idx] = None;
                this.returns[idx] = Some(value);
                this.complete += 1;
                last_ready = Some(idx);
            }
        }

        if let Some(idx) = last_ready {
            this.last_index = idx;
        }

        if this.complete == n {
            Poll::Ready(this.returns.drain(..).flatten().collect())
        } else {
            Poll::Pending
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures_lite::future::{block_on, yield_now};
    use futures_lite::FutureExt;
    use std::sync::{mpsc, Arc, Mutex};
    use std::thread;
    use std::time::Duration;

    fn join_within<T: Send + 'static>(futures: Vec<Boxed<T>>) -> Option<Vec<T>> {
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            let _ = tx.send(block_on(join_all(futures)));
        });
        rx.recv_timeout(Duration::from_secs(5)).ok()
    }

    #[test]
    fn test_empty_join_is_ready() {
        let joined: Vec<i32> = block_on(join_all(Vec::new()));
        assert!(joined.is_empty());
    }

    #[test]
    fn test_outputs_keep_input_order() {
        let finished = Arc::new(Mutex::new(Vec::new()));
        let task = |id: usize, yields: usize| {
            let finished = Arc::clone(&finished);
            async move {
                for _ in 0..yields {
                    yield_now().await;
                }
                finished.lock().unwrap().push(id);
                id * 10
            }
            .boxed()
        };

        let joined = block_on(join_all(vec![task(0, 3), task(1, 0), task(2, 1)]));

        assert_eq!(joined, vec![0, 10, 20]);
        assert_eq!(*finished.lock().unwrap(), vec![1, 2, 0]);
    }

    #[test]
    fn test_ready_neighbours_are_not_skipped() {
        let joined = join_within(vec![
            async { 0 }.boxed(),
            async {
                yield_now().await;
                yield_now().await;
                1
            }
            .boxed(),
            async { 2 }.boxed(),
        ]);

        assert_eq!(joined, Some(vec![0, 1, 2]));
    }

    #[test]
    fn test_all_ready_completes_in_one_poll() {
        let joined = join_within((0..4).map(|i| async move { i }.boxed()).collect());
        assert_eq!(joined, Some(vec![0, 1, 2, 3]));
    }

    #[test]
    fn test_single_future() {
        let joined = join_within(vec![async {
            yield_now().await;
            7
        }
        .boxed()]);
        assert_eq!(joined, Some(vec![7]));
    }
}
