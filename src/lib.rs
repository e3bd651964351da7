//! # effectual
//!
//! Lazy, re-runnable effects with explicit error-translation policies, plus
//! combinators over optional values.
//!
//! ## Overview
//!
//! - **Effect**: [`effect::Effect`] wraps a deferred computation that may
//!   fail. Building and composing an effect never runs it; each terminal
//!   runner (`run_unsafe`, `run_optional`, `attempt`) executes the whole
//!   chain from scratch and surfaces failures its own way.
//! - **Optional combinators**: `zip2`, `zip3`, `sequence`, `fold` and friends
//!   in [`optional`].
//! - **Composition**: [`compose::compose`] and the [`compose::Pipe`] trait.
//!
//! ## Feature Flags
//!
//! - `effect`: The effect system (pulls in `thiserror` and `tracing`)
//! - `optional`: Optional combinators
//! - `compose`: Function composition utilities
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use effectual::prelude::*;
//!
//! let lookup = |key: &'static str| {
//!     Effect::of(move || match key {
//!         "a" => Ok(Some(1)),
//!         "b" => Ok(Some(2)),
//!         "c" => Ok(None),
//!         _ => Err(Error::checked(format!("unknown key {key}"))),
//!     })
//! };
//!
//! let sum = lookup("a").map2(lookup("b"), |a, b| zip2(a, b, |x, y| x + y));
//! assert_eq!(sum.run_optional_flatten(), Some(3));
//!
//! assert_eq!(lookup("c").run_unsafe().unwrap(), None);
//! assert_eq!(lookup("c").run_optional_flatten(), None);
//! assert!(lookup("z").run_unsafe().unwrap_err().is_execution());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and functions.
///
/// # Usage
///
/// ```rust
/// use effectual::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "compose")]
    pub use crate::compose::*;

    #[cfg(feature = "optional")]
    pub use crate::optional::*;

    #[cfg(feature = "effect")]
    pub use crate::effect::*;
}

#[cfg(feature = "compose")]
pub mod compose;

#[cfg(feature = "optional")]
pub mod optional;

#[cfg(feature = "effect")]
pub mod effect;
