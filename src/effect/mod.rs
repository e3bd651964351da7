//! Effect system for lazy, re-runnable side effect handling.
//!
//! The [`Effect`] type wraps a deferred computation that may fail. Side
//! effects are deferred until one of the terminal runners is called, and each
//! runner decides how a failure surfaces to the caller.
//!
//! # Error Translation
//!
//! Failures are [`Error`] values tagged with an [`ErrorKind`]:
//!
//! - [`Effect::run_unsafe`] returns unchecked errors as-is and wraps checked
//!   errors in an execution error.
//! - [`Effect::run_optional`] swallows every failure into `None` after
//!   reporting it to a [`DiagnosticSink`].
//! - [`Effect::attempt`] reifies the failure as [`Outcome::Failure`].
//!
//! Composition (`map`, `flat_map`, ...) never intercepts a failure.
//!
//! # Examples
//!
//! ```rust
//! use effectual::effect::{Effect, Error, Outcome};
//!
//! let parse = |input: &'static str| {
//!     Effect::of(move || input.parse::<i32>().map_err(|e| Error::checked(e.to_string())))
//! };
//!
//! let total = parse("20").map2(parse("22"), |a, b| a + b);
//! assert_eq!(total.run_unsafe().unwrap(), 42);
//!
//! let broken = parse("twenty").map(|x| x * 2);
//! assert!(matches!(broken.attempt(), Outcome::Failure(_)));
//! assert_eq!(broken.run_optional(), None);
//! ```

// =============================================================================
// Errors and Outcomes
// =============================================================================

mod error;
mod outcome;

pub use error::{EXECUTION_FAILED_MESSAGE, Error, ErrorKind};
pub use outcome::Outcome;

// =============================================================================
// Diagnostics
// =============================================================================

mod diagnostic;

pub use diagnostic::{DiagnosticSink, TracingSink};

// =============================================================================
// Effect
// =============================================================================

mod deferred;

pub use deferred::Effect;
