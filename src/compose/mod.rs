//! Function composition utilities.
//!
//! Helpers for building pipelines out of plain functions, usable on their
//! own or inside `Effect::map` chains.
//!
//! - [`compose`]: right-to-left composition of two functions
//! - [`Pipe::pipe`]: method-call form of applying a value to a function
//! - [`apply`], [`identity`]: the trivial combinators
//!
//! # Examples
//!
//! ```
//! use effectual::compose::{Pipe, compose};
//!
//! fn add_one(x: i32) -> i32 { x + 1 }
//! fn double(x: i32) -> i32 { x * 2 }
//!
//! // compose(f, g)(x) = f(g(x))
//! let add_one_after_double = compose(add_one, double);
//! assert_eq!(add_one_after_double(5), 11);
//!
//! assert_eq!(5_i32.pipe(double).pipe(add_one), 11);
//! ```

mod functions;

pub use functions::{Pipe, apply, compose, identity};
