//! Logging shim.
//!
//! Re-exports the `tracing` event macros when the `tracing` feature is enabled
//! and replaces them with no-ops otherwise, so call sites never need `cfg`.

#[cfg(feature = "tracing")]
pub(crate) use tracing::{debug, trace};

#[cfg(not(feature = "tracing"))]
mod noop {
    macro_rules! trace {
        ($($arg:tt)*) => {};
    }

    macro_rules! debug {
        ($($arg:tt)*) => {};
    }

    pub(crate) use {debug, trace};
}

#[cfg(not(feature = "tracing"))]
pub(crate) use noop::{debug, trace};
