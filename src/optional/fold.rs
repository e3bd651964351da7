//! Eliminating an optional into a value.

/// Runs `on_present` with the value if present, otherwise `on_absent`.
///
/// Exactly one branch is invoked; the other is never called.
///
/// # Examples
///
/// ```rust
/// use effectual::optional::fold;
///
/// let describe = |value: Option<i32>| fold(value, || "empty".to_string(), |x| format!("v:{x}"));
///
/// assert_eq!(describe(None), "empty");
/// assert_eq!(describe(Some(4)), "v:4");
/// ```
#[inline]
pub fn fold<T, R, E, P>(value: Option<T>, on_absent: E, on_present: P) -> R
where
    E: FnOnce() -> R,
    P: FnOnce(T) -> R,
{
    value.map_or_else(on_absent, on_present)
}
