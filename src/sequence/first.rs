//! First-match search.

/// Returns the leftmost element satisfying `predicate`, or `None`.
///
/// The predicate is called exactly once per scanned element, in order, and the
/// scan stops at the first element for which it returns `true`.
///
/// # Arguments
///
/// * `sequence` - The elements to scan
/// * `predicate` - A function that returns true for the element to find
///
/// # Examples
///
/// ```rust
/// use seqops::sequence::find_first;
///
/// assert_eq!(find_first([1, 2, 3], |n| *n > 1), Some(2));
/// assert_eq!(find_first([1, 2, 3], |n| *n > 5), None);
/// ```
#[inline]
pub fn find_first<I, P>(sequence: I, predicate: P) -> Option<I::Item>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    sequence.into_iter().find(predicate)
}

/// Returns the leftmost element satisfying `predicate` paired with `true`.
///
/// When no element matches, including for an empty sequence, returns the
/// element type's default value paired with `false`. That default carries no
/// meaning and should be ignored by the caller. Prefer [`find_first`] when the
/// element type has no sensible default.
///
/// # Arguments
///
/// * `sequence` - The elements to scan
/// * `predicate` - A function that returns true for the element to find
///
/// # Examples
///
/// ```rust
/// use seqops::sequence::first;
///
/// assert_eq!(first([1, 2, 3], |n| *n > 1), (2, true));
/// assert_eq!(first([1, 2, 3], |n| *n > 5), (0, false));
/// assert_eq!(first(Vec::<String>::new(), |_| true), (String::new(), false));
/// ```
#[inline]
pub fn first<I, P>(sequence: I, predicate: P) -> (I::Item, bool)
where
    I: IntoIterator,
    I::Item: Default,
    P: FnMut(&I::Item) -> bool,
{
    find_first(sequence, predicate)
        .map_or_else(|| (Default::default(), false), |found| (found, true))
}

// =============================================================================
// Tests
// =============================================================================
