//! # Outcome: composable success/failure values
//!
//! Two sum types and their pending counterparts:
//!
//! - **[`Outcome<T, E>`]**: `Ok(T)` or `Err(Fault<E>)`, where a [`Fault`] carries
//!   the error together with a diagnostic [`Trace`]
//! - **[`Maybe<T>`]**: `Some(T)` or `None`
//! - **[`AsyncOutcome`]** / **[`AsyncMaybe`]**: handles to a computation that
//!   will resolve to one of the above, exposing the same combinators
//!
//! ## Key Features
//!
//! - **Short-circuit**: success combinators are no-ops on `Err`/`None` and
//!   vice versa
//! - **Lifting**: a callback returning a future turns a synchronous chain
//!   into an async handle; see [`IntoOutcome`] and [`IntoMaybe`]
//! - **Aggregates**: [`Outcome::all`], [`Outcome::partition`] and friends, with
//!   concurrent async forms
//! - **Branching**: `shared()` turns a handle into a [`SharedOutcome`] or
//!   [`SharedMaybe`] that several chains build on, resolving the source once
//! - **Delegation**: [`Outcome::run`] and [`Delegate::delegate`] let several
//!   fallible steps read as straight-line code with `?`
//! - **Boundaries**: [`wrap`], [`proxy`] and [`wrap_unwind`] adapt std
//!   `Result` code and panicking code
//!
//! ## Example
//!
//! ```
//! use futures_lite::future::block_on;
//! use outcome::*;
//!
//! // Stays synchronous while every step is synchronous
//! let parsed = ok::<&str, &str>("21")
//!     .and_then(|raw| wrap(|| raw.parse::<i32>()).map_err(|_| "not a number"))
//!     .map(|n| n * 2);
//! assert_eq!(parsed, ok(42));
//!
//! // An async step lifts the chain into a handle
//! let lifted = parsed.and_then(|n| async move { ok(n + 1) }).trace("lookup");
//! assert_eq!(block_on(async { lifted.await }), ok(43));
//! ```
//!
//! ## Features
//!
//! - `tracing` (default): emit `tracing` events for trace tags, recoveries,
//!   halted delegation scopes, failed assertions and caught panics

mod aggregate;
mod async_maybe;
mod async_outcome;
mod delegate;
mod drive;
mod error;
mod join;
mod kind;
mod lift;
mod log;
mod maybe;
mod outcome;
mod shared;
mod step;
mod trace;
mod wrap;

pub mod prelude;

pub use async_maybe::AsyncMaybe;
pub use async_outcome::AsyncOutcome;
pub use delegate::{Delegate, Delegated, Delegation, Halt, MaybeFlow, OutcomeFlow};
pub use error::{AssertError, Panic, YieldError};
pub use kind::{is_maybe, is_outcome, Family, Tagged, Variant};
pub use lift::{IntoMaybe, IntoOutcome};
pub use maybe::{none, some, Maybe};
pub use outcome::{err, err_unit, ok, ok_unit, Fault, Outcome};
pub use shared::{SharedMaybe, SharedOutcome};
pub use step::Step;
pub use trace::{Trace, TraceEntry};
pub use wrap::{proxy, proxy_async, wrap, wrap_async, wrap_unwind, wrap_unwind_async};

pub use either::Either;
