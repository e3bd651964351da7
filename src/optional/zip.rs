//! Zipping optionals together.

/// Combines two optionals when both are present.
///
/// `first` is checked before `second`; `combine` runs only when both hold a
/// value.
///
/// # Examples
///
/// ```rust
/// use effectual::optional::zip2;
///
/// assert_eq!(zip2(Some(2), Some(3), |a, b| a + b), Some(5));
/// assert_eq!(zip2(Some(2), None::<i32>, |a, b| a + b), None);
/// ```
#[inline]
pub fn zip2<A, B, R, F>(first: Option<A>, second: Option<B>, combine: F) -> Option<R>
where
    F: FnOnce(A, B) -> R,
{
    let a = first?;
    let b = second?;
    Some(combine(a, b))
}

/// Combines three optionals when all are present, checked in order.
///
/// # Examples
///
/// ```rust
/// use effectual::optional::zip3;
///
/// assert_eq!(zip3(Some(1), Some(2), Some(3), |a, b, c| a + b + c), Some(6));
/// assert_eq!(zip3(Some(1), None::<i32>, Some(3), |a, b, c| a + b + c), None);
/// ```
#[inline]
pub fn zip3<A, B, C, R, F>(
    first: Option<A>,
    second: Option<B>,
    third: Option<C>,
    combine: F,
) -> Option<R>
where
    F: FnOnce(A, B, C) -> R,
{
    let a = first?;
    let b = second?;
    let c = third?;
    Some(combine(a, b, c))
}

/// Like [`zip2`], but `second` is only forced when `first` is present.
///
/// # Examples
///
/// ```rust
/// use effectual::optional::zip2_with;
///
/// let result = zip2_with(None::<i32>, || -> Option<i32> { unreachable!() }, |a, b| a + b);
/// assert_eq!(result, None);
/// ```
#[inline]
pub fn zip2_with<A, B, R, G, F>(first: Option<A>, second: G, combine: F) -> Option<R>
where
    G: FnOnce() -> Option<B>,
    F: FnOnce(A, B) -> R,
{
    let a = first?;
    let b = second()?;
    Some(combine(a, b))
}

/// Like [`zip3`], but each later input is only forced when every earlier one
/// is present.
#[inline]
pub fn zip3_with<A, B, C, R, G, H, F>(
    first: Option<A>,
    second: G,
    third: H,
    combine: F,
) -> Option<R>
where
    G: FnOnce() -> Option<B>,
    H: FnOnce() -> Option<C>,
    F: FnOnce(A, B, C) -> R,
{
    let a = first?;
    let b = second()?;
    let c = third()?;
    Some(combine(a, b, c))
}
