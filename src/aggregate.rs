//! Folds over collections of outcomes and maybes.
//!
//! The synchronous forms take resolved values. The asynchronous forms accept
//! anything liftable (resolved values, futures, handles), resolve every
//! element concurrently and then apply the synchronous rule to the results
//! in their original order.

use std::future::{Future, IntoFuture};

use crate::join::{join_all, JoinAll};
use crate::lift::{IntoMaybe, IntoOutcome};
use crate::{AsyncMaybe, AsyncOutcome, Maybe, Outcome};

impl<T, E> Outcome<T, E> {
    /// Collects every `Ok` payload, or returns the first `Err` in iteration
    /// order.
    ///
    /// ```rust
    /// use outcome::{err, ok, Outcome};
    ///
    /// let good = Outcome::all(vec![ok::<i32, &str>(1), ok(2)]);
    /// assert_eq!(good, ok(vec![1, 2]));
    ///
    /// let bad = Outcome::all(vec![ok(1), err("first"), ok(3), err("second")]);
    /// assert_eq!(bad, err("first"));
    /// ```
    pub fn all<I>(items: I) -> Outcome<Vec<T>, E>
    where
        I: IntoIterator<Item = Outcome<T, E>>,
    {
        let items = items.into_iter();
        let mut values = Vec::with_capacity(items.size_hint().0);
        for item in items {
            match item {
                Outcome::Ok(value) => values.push(value),
                Outcome::Err(fault) => return Outcome::Err(fault),
            }
        }
        Outcome::Ok(values)
    }

    /// Splits into `Ok` payloads and `Err` payloads, each in input order.
    pub fn partition<I>(items: I) -> (Vec<T>, Vec<E>)
    where
        I: IntoIterator<Item = Outcome<T, E>>,
    {
        let mut values = Vec::new();
        let mut errors = Vec::new();
        for item in items {
            match item {
                Outcome::Ok(value) => values.push(value),
                Outcome::Err(fault) => errors.push(fault.error),
            }
        }
        (values, errors)
    }

    pub fn values<I>(items: I) -> Vec<T>
    where
        I: IntoIterator<Item = Outcome<T, E>>,
    {
        items
            .into_iter()
            .filter_map(|item| match item {
                Outcome::Ok(value) => Some(value),
                Outcome::Err(_) => None,
            })
            .collect()
    }

    pub fn err_values<I>(items: I) -> Vec<E>
    where
        I: IntoIterator<Item = Outcome<T, E>>,
    {
        items
            .into_iter()
            .filter_map(|item| match item {
                Outcome::Ok(_) => None,
                Outcome::Err(fault) => Some(fault.error),
            })
            .collect()
    }
}

impl<T> Maybe<T> {
    /// Collects every `Some` payload, or `None` if any element is `None`.
    pub fn all<I>(items: I) -> Maybe<Vec<T>>
    where
        I: IntoIterator<Item = Maybe<T>>,
    {
        let mut values = Vec::new();
        for item in items {
            match item {
                Maybe::Some(value) => values.push(value),
                Maybe::None => return Maybe::None,
            }
        }
        Maybe::Some(values)
    }

    pub fn values<I>(items: I) -> Vec<T>
    where
        I: IntoIterator<Item = Maybe<T>>,
    {
        items.into_iter().filter_map(Maybe::into_option).collect()
    }
}

impl<T, E> AsyncOutcome<T, E>
where
    T: Send + 'static,
    E: Send + 'static,
{
    fn join<I, R>(items: I) -> JoinAll<Outcome<T, E>>
    where
        I: IntoIterator<Item = R>,
        R: IntoOutcome<E, Ok = T>,
    {
        join_all(
            items
                .into_iter()
                .map(|item| item.into_async().into_future())
                .collect(),
        )
    }

    /// Concurrent [`Outcome::all`].
    ///
    /// ```rust
    /// use futures_lite::future::block_on;
    /// use outcome::{err, ok, AsyncOutcome};
    ///
    /// let items = vec![
    ///     AsyncOutcome::ok(1),
    ///     AsyncOutcome::from(err("failure")),
    ///     AsyncOutcome::from_future(async { ok(3) }),
    /// ];
    /// let all = AsyncOutcome::<i32, &str>::all(items);
    /// assert_eq!(block_on(async { all.await }), err("failure"));
    /// ```
    pub fn all<I, R>(items: I) -> AsyncOutcome<Vec<T>, E>
    where
        I: IntoIterator<Item = R>,
        R: IntoOutcome<E, Ok = T>,
    {
        let joined = Self::join(items);
        AsyncOutcome::from_future(async move { Outcome::all(joined.await) })
    }

    pub fn partition<I, R>(items: I) -> impl Future<Output = (Vec<T>, Vec<E>)> + Send + 'static
    where
        I: IntoIterator<Item = R>,
        R: IntoOutcome<E, Ok = T>,
    {
        let joined = Self::join(items);
        async move { Outcome::partition(joined.await) }
    }

    pub fn values<I, R>(items: I) -> impl Future<Output = Vec<T>> + Send + 'static
    where
        I: IntoIterator<Item = R>,
        R: IntoOutcome<E, Ok = T>,
    {
        let joined = Self::join(items);
        async move { Outcome::values(joined.await) }
    }

    pub fn err_values<I, R>(items: I) -> impl Future<Output = Vec<E>> + Send + 'static
    where
        I: IntoIterator<Item = R>,
        R: IntoOutcome<E, Ok = T>,
    {
        let joined = Self::join(items);
        async move { Outcome::err_values(joined.await) }
    }
}

impl<T> AsyncMaybe<T>
where
    T: Send + 'static,
{
    fn join<I, R>(items: I) -> JoinAll<Maybe<T>>
    where
        I: IntoIterator<Item = R>,
        R: IntoMaybe<Some = T>,
    {
        join_all(
            items
                .into_iter()
                .map(|item| item.into_async().into_future())
                .collect(),
        )
    }

    pub fn all<I, R>(items: I) -> AsyncMaybe<Vec<T>>
    where
        I: IntoIterator<Item = R>,
        R: IntoMaybe<Some = T>,
    {
        let joined = Self::join(items);
        AsyncMaybe::from_future(async move { Maybe::all(joined.await) })
    }

    pub fn values<I, R>(items: I) -> impl Future<Output = Vec<T>> + Send + 'static
    where
        I: IntoIterator<Item = R>,
        R: IntoMaybe<Some = T>,
    {
        let joined = Self::join(items);
        async move { Maybe::values(joined.await) }
    }
}
