//! Membership testing.

use std::borrow::Borrow;

/// Returns `true` if any element of `sequence` equals `value`.
///
/// Elements are compared left to right with `PartialEq` and the scan stops at
/// the first match. An empty sequence never contains anything.
///
/// Elements only need to borrow as the value type. An owned `Vec<String>`
/// can be searched with a `&str` because `String` borrows as `str`, and
/// `&Vec<i32>` with `&i32`. A borrowed `&Vec<String>` yields `&String`, which
/// only borrows as `String`; map it through `String::as_str` or use
/// [`SequenceOps::contains_value`](super::SequenceOps::contains_value).
///
/// Floating point values follow IEEE equality, so `NaN` is never contained.
///
/// # Arguments
///
/// * `sequence` - The elements to scan
/// * `value` - The value to look for
///
/// # Examples
///
/// ```rust
/// use seqops::sequence::contains;
///
/// assert!(contains([1, 2, 3, 4, 5], &3));
/// assert!(!contains([1, 2, 3, 4, 5], &6));
/// assert!(!contains(Vec::<i32>::new(), &1));
///
/// let fruits = vec![String::from("apple"), String::from("banana")];
/// assert!(contains(fruits.iter().map(String::as_str), "banana"));
/// assert!(contains(fruits, "banana"));
/// ```
#[inline]
pub fn contains<I, T>(sequence: I, value: &T) -> bool
where
    I: IntoIterator,
    I::Item: Borrow<T>,
    T: PartialEq + ?Sized,
{
    sequence
        .into_iter()
        .any(|element| Borrow::<T>::borrow(&element) == value)
}

// =============================================================================
// Tests
// =============================================================================
