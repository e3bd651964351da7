//! Collecting many optionals into one.

/// Turns a sequence of optionals into an optional `Vec`.
///
/// The result is present only if every element is present, in the original
/// order. Iteration stops at the first `None`; later elements are never
/// pulled from the iterator. An empty input yields `Some(vec![])`.
///
/// # Examples
///
/// ```rust
/// use effectual::optional::sequence;
///
/// assert_eq!(sequence(vec![Some(1), Some(2), Some(3)]), Some(vec![1, 2, 3]));
/// assert_eq!(sequence(vec![Some(1), None, Some(3)]), None);
/// assert_eq!(sequence(Vec::<Option<i32>>::new()), Some(vec![]));
/// ```
pub fn sequence<T, I>(items: I) -> Option<Vec<T>>
where
    I: IntoIterator<Item = Option<T>>,
{
    let iterator = items.into_iter();
    let mut collected = Vec::with_capacity(iterator.size_hint().0);
    for item in iterator {
        collected.push(item?);
    }
    Some(collected)
}

/// Maps each element to an optional and sequences the results.
///
/// `function` is not called for elements after the first `None` it returns.
///
/// # Examples
///
/// ```rust
/// use effectual::optional::traverse;
///
/// let parsed = traverse(["1", "2", "3"], |s| s.parse::<i32>().ok());
/// assert_eq!(parsed, Some(vec![1, 2, 3]));
///
/// let parsed = traverse(["1", "x", "3"], |s| s.parse::<i32>().ok());
/// assert_eq!(parsed, None);
/// ```
pub fn traverse<A, B, I, F>(items: I, function: F) -> Option<Vec<B>>
where
    I: IntoIterator<Item = A>,
    F: FnMut(A) -> Option<B>,
{
    sequence(items.into_iter().map(function))
}
