/// Returns `true` if `items` is `None` or yields no items.
///
/// At most one item is pulled from the sequence.
///
/// # Examples
///
/// ```
/// use seqkit::iter::is_none_or_empty;
///
/// assert!(is_none_or_empty(None::<Vec<i32>>));
/// assert!(is_none_or_empty(Some(Vec::<i32>::new())));
/// assert!(!is_none_or_empty(Some([0])));
/// ```
#[inline]
pub fn is_none_or_empty<I: IntoIterator>(items: Option<I>) -> bool {
    items.is_none_or(|items| items.into_iter().next().is_none())
}
