//! `Effect` - a lazy, re-runnable, possibly-failing computation.
//!
//! An [`Effect`] "describes" a computation but doesn't "execute" it.
//! Constructing and composing effects never runs anything. Execution happens
//! only in one of the terminal runners, each of which applies its own
//! error-translation policy:
//!
//! | Runner                                 | Success          | Failure                         |
//! |----------------------------------------|------------------|---------------------------------|
//! | [`run_unsafe`](Effect::run_unsafe)     | `Ok(value)`      | unchecked as-is, checked wrapped |
//! | [`run_optional`](Effect::run_optional) | `Some(value)`    | `None`, reported to the sink     |
//! | [`attempt`](Effect::attempt)           | `Success(value)` | `Failure(error)`, same instance |
//!
//! Runners borrow the effect. Every call re-executes the whole chain from
//! scratch; no outcome is ever cached.
//!
//! # Examples
//!
//! ```rust
//! use effectual::effect::Effect;
//!
//! let effect = Effect::pure(10)
//!     .map(|x| x * 2)
//!     .flat_map(|x| Effect::pure(x + 1));
//! assert_eq!(effect.run_unsafe().unwrap(), 21);
//! ```
//!
//! # Side Effect Deferral
//!
//! ```rust
//! use effectual::effect::Effect;
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicUsize, Ordering};
//!
//! let counter = Arc::new(AtomicUsize::new(0));
//! let counter_clone = counter.clone();
//!
//! let effect = Effect::new(move || counter_clone.fetch_add(1, Ordering::SeqCst) + 1)
//!     .map(|x| x * 10);
//!
//! // Not executed yet
//! assert_eq!(counter.load(Ordering::SeqCst), 0);
//!
//! // Executed on each run
//! assert_eq!(effect.run_unsafe().unwrap(), 10);
//! assert_eq!(effect.run_unsafe().unwrap(), 20);
//! assert_eq!(counter.load(Ordering::SeqCst), 2);
//! ```

use std::fmt;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::Arc;

use super::diagnostic::{DiagnosticSink, TracingSink};
use super::error::{Error, ErrorKind};
use super::outcome::Outcome;

type Thunk<T> = Arc<dyn Fn() -> Result<T, Error> + Send + Sync>;

/// A deferred computation producing `T` or raising an [`Error`].
///
/// `Effect` holds exactly one thunk and no other state. It is immutable,
/// cheap to clone, and `Send + Sync`, so it can be shared freely. Running a
/// shared effect from several threads executes the thunk once per call.
///
/// # Type Parameters
///
/// - `T`: The type of the value produced by the computation.
///
/// # Monad Laws
///
/// `Effect` satisfies the monad laws (observed through any runner):
///
/// 1. **Left Identity**: `Effect::pure(a).flat_map(f) == f(a)`
/// 2. **Right Identity**: `m.flat_map(Effect::pure) == m`
/// 3. **Associativity**: `m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))`
pub struct Effect<T> {
    thunk: Thunk<T>,
}

static_assertions::assert_impl_all!(Effect<i32>: Send, Sync, Clone);
static_assertions::assert_impl_all!(Effect<Option<String>>: Send, Sync, Clone);

impl<T> Clone for Effect<T> {
    fn clone(&self) -> Self {
        Self {
            thunk: Arc::clone(&self.thunk),
        }
    }
}

impl<T> fmt::Debug for Effect<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("Effect").finish_non_exhaustive()
    }
}

impl<T: 'static> Effect<T> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Wraps a fallible thunk without executing it.
    ///
    /// # Arguments
    ///
    /// * `thunk` - A closure producing the value or raising an [`Error`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effectual::effect::{Effect, Error};
    ///
    /// let effect = Effect::of(|| "42".parse::<i32>().map_err(|e| Error::checked(e.to_string())));
    /// assert_eq!(effect.run_unsafe().unwrap(), 42);
    /// ```
    pub fn of<F>(thunk: F) -> Self
    where
        F: Fn() -> Result<T, Error> + Send + Sync + 'static,
    {
        Self {
            thunk: Arc::new(thunk),
        }
    }

    /// Wraps an infallible thunk without executing it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effectual::effect::Effect;
    ///
    /// let effect = Effect::new(|| 10 + 20);
    /// assert_eq!(effect.run_unsafe().unwrap(), 30);
    /// ```
    pub fn new<F>(thunk: F) -> Self
    where
        F: Fn() -> T + Send + Sync + 'static,
    {
        Self::of(move || Ok(thunk()))
    }

    /// Wraps a pure value.
    ///
    /// The resulting effect never fails and returns a clone of `value` on
    /// every run.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effectual::effect::Effect;
    ///
    /// assert_eq!(Effect::pure(42).run_unsafe().unwrap(), 42);
    /// assert_eq!(Effect::pure(None::<i32>).run_unsafe().unwrap(), None);
    /// ```
    pub fn pure(value: T) -> Self
    where
        T: Clone + Send + Sync,
    {
        Self::of(move || Ok(value.clone()))
    }

    /// Creates an effect that always raises `error`.
    ///
    /// Each run raises a handle to the same error instance.
    pub fn fail(error: Error) -> Self {
        Self::of(move || Err(error.clone()))
    }

    /// Wraps a thunk returning any standard error, classified as checked.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effectual::effect::Effect;
    ///
    /// let effect = Effect::from_fallible(|| std::fs::read_to_string("/definitely/missing"));
    /// let error = effect.run_unsafe().unwrap_err();
    ///
    /// assert!(error.is_execution());
    /// assert!(error.cause().unwrap().is_checked());
    /// ```
    pub fn from_fallible<F, E>(thunk: F) -> Self
    where
        F: Fn() -> Result<T, E> + Send + Sync + 'static,
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::of(move || thunk().map_err(|error| Error::wrap(ErrorKind::Checked, error)))
    }

    fn execute(&self) -> Result<T, Error> {
        (self.thunk)()
    }

    fn execute_catching_panics(&self) -> Result<T, Error> {
        catch_unwind(AssertUnwindSafe(|| self.execute()))
            .unwrap_or_else(|payload| Err(Error::from_panic(&*payload)))
    }

    // =========================================================================
    // Composition
    // =========================================================================

    /// Transforms the produced value.
    ///
    /// If this effect fails, `function` is never invoked and the failure
    /// propagates unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effectual::effect::Effect;
    ///
    /// let effect = Effect::pure(21).map(|x| x * 2);
    /// assert_eq!(effect.run_unsafe().unwrap(), 42);
    /// ```
    pub fn map<R, F>(self, function: F) -> Effect<R>
    where
        F: Fn(T) -> R + Send + Sync + 'static,
        R: 'static,
    {
        let thunk = self.thunk;
        Effect::of(move || thunk().map(&function))
    }

    /// Transforms the produced value with a function that may itself raise.
    pub fn try_map<R, F>(self, function: F) -> Effect<R>
    where
        F: Fn(T) -> Result<R, Error> + Send + Sync + 'static,
        R: 'static,
    {
        let thunk = self.thunk;
        Effect::of(move || thunk().and_then(&function))
    }

    /// Chains effects, passing the produced value to a function that returns
    /// the next effect.
    ///
    /// A failure at any stage propagates unchanged and later stages do not run.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effectual::effect::Effect;
    ///
    /// let effect = Effect::pure(10).flat_map(|x| Effect::pure(x * 2));
    /// assert_eq!(effect.run_unsafe().unwrap(), 20);
    /// ```
    pub fn flat_map<R, F>(self, function: F) -> Effect<R>
    where
        F: Fn(T) -> Effect<R> + Send + Sync + 'static,
        R: 'static,
    {
        let thunk = self.thunk;
        Effect::of(move || function(thunk()?).execute())
    }

    /// Like [`flat_map`](Self::flat_map), but the callback may raise before
    /// producing the next effect.
    ///
    /// Errors raised by the callback are indistinguishable from errors raised
    /// by either thunk.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effectual::effect::{Effect, Error};
    ///
    /// let effect = Effect::pure(-1).try_flat_map(|x| {
    ///     if x < 0 {
    ///         Err(Error::unchecked("negative"))
    ///     } else {
    ///         Ok(Effect::pure(x))
    ///     }
    /// });
    /// assert_eq!(effect.run_unsafe().unwrap_err().message(), "negative");
    /// ```
    pub fn try_flat_map<R, F>(self, function: F) -> Effect<R>
    where
        F: Fn(T) -> Result<Effect<R>, Error> + Send + Sync + 'static,
        R: 'static,
    {
        let thunk = self.thunk;
        Effect::of(move || function(thunk()?)?.execute())
    }

    /// Alias for [`flat_map`](Self::flat_map).
    pub fn and_then<R, F>(self, function: F) -> Effect<R>
    where
        F: Fn(T) -> Effect<R> + Send + Sync + 'static,
        R: 'static,
    {
        self.flat_map(function)
    }

    /// Sequences two effects, discarding the value of the first.
    ///
    /// The first effect still runs, and its failure still propagates.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effectual::effect::Effect;
    ///
    /// let effect = Effect::pure(10).then(Effect::pure(20));
    /// assert_eq!(effect.run_unsafe().unwrap(), 20);
    /// ```
    pub fn then<R>(self, next: Effect<R>) -> Effect<R>
    where
        R: 'static,
    {
        self.flat_map(move |_| next.clone())
    }

    /// Combines two effects using a function, running `self` first.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effectual::effect::Effect;
    ///
    /// let effect = Effect::pure(10).map2(Effect::pure(20), |a, b| a + b);
    /// assert_eq!(effect.run_unsafe().unwrap(), 30);
    /// ```
    pub fn map2<B, C, F>(self, other: Effect<B>, function: F) -> Effect<C>
    where
        F: Fn(T, B) -> C + Send + Sync + 'static,
        B: 'static,
        C: 'static,
    {
        let first = self.thunk;
        let second = other.thunk;
        Effect::of(move || {
            let a = first()?;
            let b = second()?;
            Ok(function(a, b))
        })
    }

    /// Combines two effects into a tuple.
    pub fn product<B>(self, other: Effect<B>) -> Effect<(T, B)>
    where
        B: 'static,
    {
        self.map2(other, |a, b| (a, b))
    }

    // =========================================================================
    // Terminal Runners
    // =========================================================================

    /// Executes the composed chain now.
    ///
    /// Unchecked failures are returned unchanged. Checked failures are wrapped
    /// with [`Error::execution`], which is itself unchecked and records the
    /// original as its [`cause`](Error::cause). A panic inside the chain is not
    /// intercepted.
    ///
    /// # Errors
    ///
    /// Returns the translated failure if any stage of the chain fails.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effectual::effect::{Effect, Error};
    ///
    /// let unchecked = Error::unchecked("boom");
    /// let raised = Effect::<i32>::fail(unchecked.clone()).run_unsafe().unwrap_err();
    /// assert!(Error::ptr_eq(&raised, &unchecked));
    ///
    /// let checked = Error::checked("not found");
    /// let raised = Effect::<i32>::fail(checked.clone()).run_unsafe().unwrap_err();
    /// assert!(raised.is_execution());
    /// assert!(Error::ptr_eq(raised.cause().unwrap(), &checked));
    /// ```
    pub fn run_unsafe(&self) -> Result<T, Error> {
        self.execute().map_err(|error| match error.kind() {
            ErrorKind::Unchecked => error,
            ErrorKind::Checked => Error::execution(error),
        })
    }

    /// Executes the composed chain now, reporting failures to `sink`.
    ///
    /// Returns `None` on any failure, including a panic inside the chain.
    pub fn run_optional_with<S>(&self, sink: &S) -> Option<T>
    where
        S: DiagnosticSink + ?Sized,
    {
        match self.execute_catching_panics() {
            Ok(value) => Some(value),
            Err(error) => {
                sink.report(&error);
                None
            }
        }
    }

    /// Executes the composed chain now, reporting failures via `tracing`.
    ///
    /// Never raises. See [`TracingSink`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effectual::effect::{Effect, Error};
    ///
    /// assert_eq!(Effect::pure(1).run_optional(), Some(1));
    /// assert_eq!(Effect::<i32>::fail(Error::checked("x")).run_optional(), None);
    /// ```
    pub fn run_optional(&self) -> Option<T> {
        self.run_optional_with(&TracingSink)
    }

    /// Executes the composed chain now and reifies the outcome.
    ///
    /// A failure yields [`Outcome::Failure`] holding the error instance the
    /// chain raised, untranslated. A panic inside the chain becomes an
    /// unchecked error carrying the panic message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effectual::effect::{Effect, Error};
    ///
    /// let error = Error::checked("offline");
    /// let outcome = Effect::<i32>::fail(error.clone()).attempt();
    /// assert!(Error::ptr_eq(outcome.error().unwrap(), &error));
    /// ```
    pub fn attempt(&self) -> Outcome<T> {
        self.execute_catching_panics().into()
    }
}

impl<T: 'static> Effect<Option<T>> {
    /// Like [`run_optional`](Effect::run_optional), but a produced `None` is
    /// also collapsed into `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effectual::effect::Effect;
    ///
    /// assert_eq!(Effect::pure(Some(3)).run_optional_flatten(), Some(3));
    /// assert_eq!(Effect::pure(None::<i32>).run_optional_flatten(), None);
    /// ```
    pub fn run_optional_flatten(&self) -> Option<T> {
        self.run_optional().flatten()
    }

    /// Like [`run_optional_with`](Effect::run_optional_with), collapsing a
    /// produced `None`.
    pub fn run_optional_flatten_with<S>(&self, sink: &S) -> Option<T>
    where
        S: DiagnosticSink + ?Sized,
    {
        self.run_optional_with(sink).flatten()
    }
}
