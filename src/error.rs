//! Contract violations.
//!
//! Domain failures travel inside [`Outcome::Err`](crate::Outcome::Err) and
//! [`Maybe::None`](crate::Maybe::None). The types here are different: they are
//! panic payloads raised with [`std::panic::panic_any`] when calling code
//! misuses the API, and are never returned as values.

use thiserror::Error;

/// Raised by `assert_ok`, `assert_err`, `assert_some` and `assert_none` when
/// the value is in the other case.
///
/// ```rust
/// use outcome::{err, AssertError, Outcome};
///
/// let caught = std::panic::catch_unwind(|| {
///     let failed: Outcome<i32, &str> = err("boom");
///     failed.assert_ok(None)
/// })
/// .unwrap_err();
///
/// let assert = caught.downcast_ref::<AssertError>().unwrap();
/// assert_eq!(assert.instance(), r#"Err(Fault { error: "boom", trace: Trace([]) })"#);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}: {instance}")]
pub struct AssertError {
    message: String,
    instance: String,
}

impl AssertError {
    pub(crate) fn new(message: impl Into<String>, instance: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            instance: instance.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Debug rendering of the value that failed the assertion.
    pub fn instance(&self) -> &str {
        &self.instance
    }
}

/// Raised when an `Err`/`None` delegation is resumed after it already
/// suspended. Drivers never do this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("delegation resumed after it suspended")]
pub struct YieldError;

/// A panic caught at an unwind boundary by [`wrap_unwind`](crate::wrap_unwind).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("panic: {message}")]
pub struct Panic {
    message: String,
}

impl Panic {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Builds a `Panic` from the payload handed back by `catch_unwind`.
    pub(crate) fn from_payload(payload: Box<dyn std::any::Any + Send>) -> Self {
        let message = if let Some(s) = payload.downcast_ref::<&'static str>() {
            (*s).to_string()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            "non-string panic payload".to_string()
        };
        Self { message }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assert_error_display() {
        let e = AssertError::new("expected Ok", "Err(1)");
        assert_eq!(e.to_string(), "expected Ok: Err(1)");
        assert_eq!(e.message(), "expected Ok");
    }

    #[test]
    fn test_panic_from_payload() {
        let caught = std::panic::catch_unwind(|| panic!("static message")).unwrap_err();
        assert_eq!(Panic::from_payload(caught).message(), "static message");

        let caught = std::panic::catch_unwind(|| panic!("formatted {}", 7)).unwrap_err();
        assert_eq!(Panic::from_payload(caught).message(), "formatted 7");

        let caught = std::panic::catch_unwind(|| std::panic::panic_any(3_u8)).unwrap_err();
        assert_eq!(Panic::from_payload(caught).to_string(), "panic: non-string panic payload");
    }
}
