//! Commonly used imports
//!
//! Use `use outcome::prelude::*;` for the types, constructors and traits most
//! chains need.

// Core types
pub use crate::{AsyncMaybe, AsyncOutcome, Fault, Maybe, Outcome};

// Constructors
pub use crate::{err, none, ok, some};

// Delegation
pub use crate::{Delegate, Halt};

// Lifting
pub use crate::{IntoMaybe, IntoOutcome};

// Boundaries
pub use crate::{proxy, wrap, wrap_async, wrap_unwind};
