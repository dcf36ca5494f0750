//! Helpers for picking a unique element out of a result set.
//!
//! Useful on the output of [`Repository::find`](crate::Repository::find) when
//! a lookup is expected to match exactly one entity.

/// Returns the only element of `items`.
///
/// Returns `None` if `items` is empty or has more than one element.
///
/// ```
/// use standout_query::select::single;
///
/// assert_eq!(single(&[10]), Some(&10));
/// assert_eq!(single(&[10, 20]), None);
/// assert_eq!(single::<i32>(&[]), None);
/// ```
pub fn single<T>(items: &[T]) -> Option<&T> {
    match items {
        [only] => Some(only),
        _ => None,
    }
}

/// Returns the only element of `items` matching `predicate`.
///
/// Returns `None` if no element or more than one element matches.
pub fn single_by<T, F>(items: &[T], mut predicate: F) -> Option<&T>
where
    F: FnMut(&T) -> bool,
{
    let mut matches = items.iter().filter(|item| predicate(item));
    match (matches.next(), matches.next()) {
        (Some(found), None) => Some(found),
        _ => None,
    }
}
