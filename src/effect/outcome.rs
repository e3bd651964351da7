//! The reified result of [`Effect::attempt`](super::Effect::attempt).

use super::error::Error;

/// The outcome of running an effect: either a value or the error raised.
///
/// `Outcome` is a plain data carrier. It is what `attempt` returns so that
/// callers can inspect a failure without it ever being raised.
///
/// # Examples
///
/// ```rust
/// use effectual::effect::{Effect, Error, Outcome};
///
/// let outcome = Effect::pure(42).attempt();
/// assert!(outcome.is_success());
/// assert_eq!(outcome.value(), Some(&42));
///
/// let outcome = Effect::<i32>::fail(Error::checked("nope")).attempt();
/// assert!(outcome.is_failure());
/// assert_eq!(outcome.value(), None);
/// ```
#[derive(Debug, Clone)]
pub enum Outcome<T> {
    /// The computation produced a value.
    Success(T),
    /// The computation raised an error.
    Failure(Error),
}

impl<T> Outcome<T> {
    /// Returns `true` if this is a `Success`.
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` if this is a `Failure`.
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Returns a reference to the value, or `None` for a `Failure`.
    pub const fn value(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Returns a reference to the error, or `None` for a `Success`.
    pub const fn error(&self) -> Option<&Error> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    /// Consumes the outcome, returning the value if present.
    pub fn into_value(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Consumes the outcome, returning the error if present.
    pub fn into_error(self) -> Option<Error> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    /// Converts into a standard `Result`.
    ///
    /// # Errors
    ///
    /// Returns the captured error if this is a `Failure`.
    pub fn into_result(self) -> Result<T, Error> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(error) => Err(error),
        }
    }
}

impl<T> From<Outcome<T>> for Result<T, Error> {
    fn from(outcome: Outcome<T>) -> Self {
        outcome.into_result()
    }
}

impl<T> From<Result<T, Error>> for Outcome<T> {
    fn from(result: Result<T, Error>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error),
        }
    }
}
