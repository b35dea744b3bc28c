//! Short-circuit extraction of payloads.
//!
//! A value that implements [`Delegate`] can be turned into a [`Delegation`]:
//! a one-shot resumable step that either completes with the payload
//! (`Ok`/`Some`) or suspends once with the value that must stop the caller
//! (`Err`/`None`). Drivers such as [`Outcome::run`] consume these through
//! [`Delegate::delegate`] and `?`, so the code after a suspension never runs.
//!
//! ```rust
//! use outcome::{err, ok, Delegate, Outcome};
//!
//! let total: Outcome<i32, &str> = Outcome::run(|| {
//!     let a = ok::<i32, &str>(1).delegate()?;
//!     let b = ok::<i32, &str>(2).delegate()?;
//!     Ok(a + b)
//! });
//! assert_eq!(total, ok(3));
//!
//! let stopped: Outcome<i32, &str> = Outcome::run(|| {
//!     let a = ok::<i32, &str>(1).delegate()?;
//!     let b = err::<i32, &str>("stop").delegate()?;
//!     Ok(a + b)
//! });
//! assert_eq!(stopped, err("stop"));
//! ```

use crate::error::YieldError;
use crate::step::Step;
use crate::{Fault, Maybe, Outcome};

/// The value a suspended delegation handed back to its driver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Halt<Y>(pub Y);

/// Body result for an [`Outcome`] delegation scope.
pub type OutcomeFlow<T, E> = Result<T, Halt<Fault<E>>>;

/// Body result for a [`Maybe`] delegation scope.
pub type MaybeFlow<T> = Result<T, Halt<()>>;

/// A resumable step that completes with a payload or suspends with a value.
pub trait Delegation {
    /// Value handed to the driver on suspension
    type Yield;
    /// Payload produced on completion
    type Return;

    /// Advance the delegation.
    ///
    /// # Panics
    ///
    /// Panics with [`YieldError`] if called after the delegation already
    /// completed or suspended.
    fn resume(&mut self) -> Step<Self::Yield, Self::Return>;
}

/// Values that can be delegated inside a `run` body.
pub trait Delegate: Sized {
    type Yield;
    type Return;
    type Delegation: Delegation<Yield = Self::Yield, Return = Self::Return>;

    fn delegation(self) -> Self::Delegation;

    /// Resumes the delegation once: the payload on completion, a [`Halt`]
    /// on suspension.
    fn delegate(self) -> Result<Self::Return, Halt<Self::Yield>> {
        self.delegation().resume().map_yielded(Halt).into_result()
    }
}

/// The [`Delegation`] of a single already-known step.
#[derive(Debug)]
pub struct Delegated<Y, D> {
    state: Option<Step<Y, D>>,
}

impl<Y, D> Delegated<Y, D> {
    pub fn new(step: Step<Y, D>) -> Self {
        Self { state: Some(step) }
    }

    /// Whether `resume` has already been called.
    pub fn is_exhausted(&self) -> bool {
        self.state.is_none()
    }
}

impl<Y, D> Delegation for Delegated<Y, D> {
    type Yield = Y;
    type Return = D;

    #[track_caller]
    fn resume(&mut self) -> Step<Y, D> {
        match self.state.take() {
            Some(step) => step,
            None => std::panic::panic_any(YieldError),
        }
    }
}

impl<T, E> Delegate for Outcome<T, E> {
    type Yield = Fault<E>;
    type Return = T;
    type Delegation = Delegated<Fault<E>, T>;

    fn delegation(self) -> Self::Delegation {
        Delegated::new(match self {
            Outcome::Ok(value) => Step::Complete(value),
            Outcome::Err(fault) => Step::Yielded(fault),
        })
    }
}

impl<T> Delegate for Maybe<T> {
    type Yield = ();
    type Return = T;
    type Delegation = Delegated<(), T>;

    fn delegation(self) -> Self::Delegation {
        Delegated::new(match self {
            Maybe::Some(value) => Step::Complete(value),
            Maybe::None => Step::Yielded(()),
        })
    }
}

impl<T, E> Delegate for Result<T, E> {
    type Yield = Fault<E>;
    type Return = T;
    type Delegation = Delegated<Fault<E>, T>;

    fn delegation(self) -> Self::Delegation {
        Outcome::from(self).delegation()
    }
}

impl<T> Delegate for Option<T> {
    type Yield = ();
    type Return = T;
    type Delegation = Delegated<(), T>;

    fn delegation(self) -> Self::Delegation {
        Maybe::from(self).delegation()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{err, ok, some};

    #[test]
    fn test_ok_completes_immediately() {
        let mut delegation = ok::<i32, &str>(5).delegation();
        assert_eq!(delegation.resume(), Step::Complete(5));
        assert!(delegation.is_exhausted());
    }

    #[test]
    fn test_err_suspends_with_fault() {
        let mut delegation = err::<i32, &str>("e").trace("t").delegation();
        let fault = delegation.resume().into_result().unwrap_err();
        assert_eq!(fault.error, "e");
        assert_eq!(fault.trace.ids(), vec!["t"]);
    }

    #[test]
    fn test_resuming_after_suspension_raises_yield_error() {
        let mut delegation = err::<i32, &str>("e").delegation();
        let _ = delegation.resume();

        let caught = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            delegation.resume();
        }))
        .unwrap_err();
        assert!(caught.downcast_ref::<YieldError>().is_some());
    }

    #[test]
    fn test_maybe_delegation() {
        assert_eq!(some(1).delegate(), Ok(1));
        assert_eq!(Maybe::<i32>::None.delegate(), Err(Halt(())));

        let caught = std::panic::catch_unwind(|| {
            let mut delegation = Maybe::<i32>::None.delegation();
            let _ = delegation.resume();
            delegation.resume()
        })
        .unwrap_err();
        assert!(caught.downcast_ref::<YieldError>().is_some());
    }

    #[test]
    fn test_std_values_delegate() {
        let good: Result<i32, &str> = Ok(1);
        let bad: Result<i32, &str> = Err("e");
        assert_eq!(good.delegate(), Ok(1));
        assert_eq!(bad.delegate().unwrap_err().0.error, "e");
        assert_eq!(Some(2).delegate(), Ok(2));
        assert_eq!(None::<i32>.delegate(), Err(Halt(())));
    }
}
