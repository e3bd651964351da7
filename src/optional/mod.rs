//! Combinators over optional values.
//!
//! Small, stateless functions for combining and consuming `Option`s that the
//! standard library does not provide directly:
//!
//! - [`zip2`], [`zip3`]: combine values only when every input is present
//! - [`zip2_with`], [`zip3_with`]: the same, forcing later inputs lazily
//! - [`sequence`], [`traverse`]: turn many optionals into one optional `Vec`
//! - [`fold`]: eliminate an optional into a value, running exactly one branch
//!
//! # Examples
//!
//! ```rust
//! use effectual::optional::{fold, sequence, zip2};
//!
//! assert_eq!(zip2(Some(2), Some(3), |a, b| a + b), Some(5));
//! assert_eq!(sequence(vec![Some(1), Some(2)]), Some(vec![1, 2]));
//!
//! let described = fold(None::<i32>, || "empty".to_string(), |x| format!("v:{x}"));
//! assert_eq!(described, "empty");
//! ```

mod fold;
mod sequence;
mod zip;

pub use fold::fold;
pub use sequence::{sequence, traverse};
pub use zip::{zip2, zip2_with, zip3, zip3_with};
