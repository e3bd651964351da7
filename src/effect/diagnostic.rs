//! Diagnostic reporting for swallowed failures.
//!
//! [`Effect::run_optional`](super::Effect::run_optional) turns failures into
//! `None`. The error is not lost: it is handed to a [`DiagnosticSink`] first.
//! The default sink, [`TracingSink`], emits a `tracing` event at `ERROR`
//! level; the library never installs a subscriber itself.

use super::error::Error;

/// A channel that receives failures discarded by a terminal runner.
///
/// # Examples
///
/// ```rust
/// use effectual::effect::{DiagnosticSink, Effect, Error};
/// use std::sync::Mutex;
///
/// #[derive(Default)]
/// struct Collect(Mutex<Vec<String>>);
///
/// impl DiagnosticSink for Collect {
///     fn report(&self, error: &Error) {
///         self.0.lock().unwrap().push(error.message().to_string());
///     }
/// }
///
/// let sink = Collect::default();
/// let value = Effect::<i32>::fail(Error::checked("offline")).run_optional_with(&sink);
///
/// assert_eq!(value, None);
/// assert_eq!(*sink.0.lock().unwrap(), vec!["offline".to_string()]);
/// ```
pub trait DiagnosticSink {
    /// Records a failure.
    fn report(&self, error: &Error);
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &S {
    fn report(&self, error: &Error) {
        (**self).report(error);
    }
}

/// Reports failures as `tracing` error events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&self, error: &Error) {
        tracing::error!(
            target: "effectual::effect",
            kind = %error.kind(),
            execution = error.is_execution(),
            "Effect error: {}",
            error.message()
        );
    }
}
