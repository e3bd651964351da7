//! Error types for the effect system.
//!
//! A thunk wrapped by [`Effect`](super::Effect) fails by returning an
//! [`Error`]. Every error carries an [`ErrorKind`] tag which the terminal
//! runners consult to decide how the failure is translated:
//!
//! - [`ErrorKind::Unchecked`] errors are propagated as-is by `run_unsafe`.
//! - [`ErrorKind::Checked`] errors are wrapped by `run_unsafe` in an execution
//!   error that records the original as its cause.
//!
//! `Error` is reference counted. Cloning it yields a handle to the same
//! underlying error, which is how the runners preserve identity; use
//! [`Error::ptr_eq`] to compare handles.
//!
//! # Examples
//!
//! ```rust
//! use effectual::effect::{Error, ErrorKind};
//!
//! let original = Error::checked("disk full");
//! let wrapped = Error::execution(original.clone());
//!
//! assert_eq!(wrapped.kind(), ErrorKind::Unchecked);
//! assert!(wrapped.is_execution());
//! assert!(Error::ptr_eq(wrapped.cause().unwrap(), &original));
//! ```

use std::any::Any;
use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;

/// Message used for errors produced by [`Error::execution`].
pub const EXECUTION_FAILED_MESSAGE: &str = "effect execution failed";

/// Classifies how a terminal runner translates a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Propagated unchanged by `run_unsafe`.
    Unchecked,
    /// Wrapped in an execution error by `run_unsafe`.
    Checked,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unchecked => formatter.write_str("unchecked"),
            Self::Checked => formatter.write_str("checked"),
        }
    }
}

/// The failure raised by an effect's thunk.
///
/// See the [module documentation](self) for the kind taxonomy.
#[derive(Debug, Clone, thiserror::Error)]
#[error(transparent)]
pub struct Error(Arc<ErrorRepr>);

#[derive(Debug)]
struct ErrorRepr {
    kind: ErrorKind,
    message: String,
    execution: bool,
    cause: Option<Arc<dyn StdError + Send + Sync>>,
}

impl fmt::Display for ErrorRepr {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.message)
    }
}

impl StdError for ErrorRepr {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.cause
            .as_deref()
            .map(|cause| cause as &(dyn StdError + 'static))
    }
}

impl Error {
    fn from_parts(
        kind: ErrorKind,
        message: String,
        execution: bool,
        cause: Option<Arc<dyn StdError + Send + Sync>>,
    ) -> Self {
        Self(Arc::new(ErrorRepr {
            kind,
            message,
            execution,
            cause,
        }))
    }

    /// Creates an unchecked error with the given message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effectual::effect::{Error, ErrorKind};
    ///
    /// let error = Error::unchecked("index out of range");
    /// assert_eq!(error.kind(), ErrorKind::Unchecked);
    /// assert_eq!(error.message(), "index out of range");
    /// ```
    pub fn unchecked(message: impl Into<String>) -> Self {
        Self::from_parts(ErrorKind::Unchecked, message.into(), false, None)
    }

    /// Creates a checked error with the given message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effectual::effect::{Error, ErrorKind};
    ///
    /// let error = Error::checked("file not found");
    /// assert_eq!(error.kind(), ErrorKind::Checked);
    /// ```
    pub fn checked(message: impl Into<String>) -> Self {
        Self::from_parts(ErrorKind::Checked, message.into(), false, None)
    }

    /// Adopts a foreign error, tagging it with `kind`.
    ///
    /// The message is the foreign error's `Display` output and the foreign
    /// error becomes the [`source`](StdError::source).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effectual::effect::{Error, ErrorKind};
    /// use std::error::Error as _;
    ///
    /// let io_error = std::io::Error::other("connection reset");
    /// let error = Error::wrap(ErrorKind::Checked, io_error);
    ///
    /// assert_eq!(error.message(), "connection reset");
    /// assert!(error.source().is_some());
    /// ```
    pub fn wrap<E>(kind: ErrorKind, source: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        let message = source.to_string();
        Self::from_parts(kind, message, false, Some(Arc::new(source)))
    }

    /// Wraps a failure in an unchecked execution error recording it as cause.
    ///
    /// This is the translation `run_unsafe` applies to checked errors.
    pub fn execution(cause: Self) -> Self {
        Self::from_parts(
            ErrorKind::Unchecked,
            EXECUTION_FAILED_MESSAGE.to_string(),
            true,
            Some(Arc::new(cause)),
        )
    }

    /// Builds an unchecked error from a captured panic payload.
    pub(crate) fn from_panic(payload: &(dyn Any + Send)) -> Self {
        let message = if let Some(string) = payload.downcast_ref::<&str>() {
            (*string).to_string()
        } else if let Some(string) = payload.downcast_ref::<String>() {
            string.clone()
        } else {
            "Unknown panic".to_string()
        };
        Self::unchecked(message)
    }

    /// Returns the kind tag.
    pub fn kind(&self) -> ErrorKind {
        self.0.kind
    }

    /// Returns the error message.
    pub fn message(&self) -> &str {
        &self.0.message
    }

    /// Returns `true` if this error is [`ErrorKind::Checked`].
    pub fn is_checked(&self) -> bool {
        self.0.kind == ErrorKind::Checked
    }

    /// Returns `true` if this error is [`ErrorKind::Unchecked`].
    pub fn is_unchecked(&self) -> bool {
        self.0.kind == ErrorKind::Unchecked
    }

    /// Returns `true` if this error was produced by [`Error::execution`].
    pub fn is_execution(&self) -> bool {
        self.0.execution
    }

    /// Returns the wrapped effect error of an execution error.
    ///
    /// Foreign sources adopted via [`Error::wrap`] are reachable through
    /// [`std::error::Error::source`] instead.
    pub fn cause(&self) -> Option<&Self> {
        if !self.0.execution {
            return None;
        }
        self.0.cause.as_deref()?.downcast_ref::<Self>()
    }

    /// Returns `true` if both handles refer to the same error instance.
    pub fn ptr_eq(left: &Self, right: &Self) -> bool {
        Arc::ptr_eq(&left.0, &right.0)
    }
}
