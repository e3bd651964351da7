//! Plain-function forms of composition and application.

/// Returns the value unchanged.
///
/// The unit of [`compose`]: `compose(identity, f)` and `compose(f, identity)`
/// both behave like `f`.
///
/// ```
/// use effectual::compose::identity;
///
/// assert_eq!(identity(42), 42);
/// ```
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

/// Composes two functions, `compose(f, g)(x) == f(g(x))`.
///
/// # Examples
///
/// ```
/// use effectual::compose::compose;
///
/// let length_of_display = compose(|s: String| s.len(), |x: i32| x.to_string());
/// assert_eq!(length_of_display(-120), 4);
/// ```
#[inline]
pub fn compose<A, B, C, F, G>(outer: F, inner: G) -> impl Fn(A) -> C
where
    F: Fn(B) -> C,
    G: Fn(A) -> B,
{
    move |input| outer(inner(input))
}

/// Applies `function` to `value`.
///
/// ```
/// use effectual::compose::apply;
///
/// assert_eq!(apply(4, |x: i32| x * x), 16);
/// ```
#[inline]
pub fn apply<A, B, F>(value: A, function: F) -> B
where
    F: FnOnce(A) -> B,
{
    function(value)
}

/// Method-call form of [`apply`], available on every sized type.
///
/// ```
/// use effectual::compose::Pipe;
///
/// let shouted = "hello".pipe(str::to_uppercase).pipe(|s| s + "!");
/// assert_eq!(shouted, "HELLO!");
/// ```
pub trait Pipe: Sized {
    /// Passes `self` to `function` and returns its result.
    #[inline]
    fn pipe<B, F>(self, function: F) -> B
    where
        F: FnOnce(Self) -> B,
    {
        function(self)
    }
}

impl<T> Pipe for T {}
