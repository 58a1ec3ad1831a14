//! Method-style access to the sequence functions.
//!
//! [`SequenceOps`] is implemented for slices, so `Vec<T>`, arrays and boxed
//! slices get it through deref. [`OptionalSequenceOps`] is implemented for
//! `Option<I>` where `I` is iterable, carrying the absent/empty distinction.

use std::borrow::Borrow;

use super::contains::contains;
use super::first::find_first;
use super::map::{map, try_map};

/// Borrowing sequence operations over slices.
///
/// # Examples
///
/// ```rust
/// use seqops::sequence::SequenceOps;
///
/// let values = vec![1, 2, 3, 4, 5];
/// assert!(values.contains_value(&3));
/// assert_eq!(values.first_where(|n| *n > 3), (4, true));
/// assert_eq!(values.find_first_where(|n| *n > 10), None);
/// assert_eq!(values.map_each(|n| n * 10), vec![10, 20, 30, 40, 50]);
/// ```
pub trait SequenceOps<T> {
    /// Returns `true` if any element equals `value`.
    ///
    /// See [`contains`](super::contains).
    fn contains_value<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: PartialEq + ?Sized;

    /// Returns a reference to the leftmost element satisfying `predicate`.
    fn find_first_where<P>(&self, predicate: P) -> Option<&T>
    where
        P: FnMut(&T) -> bool;

    /// Returns a clone of the leftmost element satisfying `predicate` paired
    /// with `true`, or `(T::default(), false)` if none does.
    ///
    /// See [`first`](super::first).
    fn first_where<P>(&self, predicate: P) -> (T, bool)
    where
        T: Clone + Default,
        P: FnMut(&T) -> bool;

    /// Applies `transform` to a reference of each element, collecting the
    /// results in order.
    fn map_each<B, F>(&self, transform: F) -> Vec<B>
    where
        F: FnMut(&T) -> B;
}

impl<T> SequenceOps<T> for [T] {
    #[inline]
    fn contains_value<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        contains(self.iter().map(<T as Borrow<Q>>::borrow), value)
    }

    #[inline]
    fn find_first_where<P>(&self, mut predicate: P) -> Option<&T>
    where
        P: FnMut(&T) -> bool,
    {
        find_first(self, |element: &&T| predicate(*element))
    }

    #[inline]
    fn first_where<P>(&self, predicate: P) -> (T, bool)
    where
        T: Clone + Default,
        P: FnMut(&T) -> bool,
    {
        self.find_first_where(predicate)
            .map_or_else(|| (T::default(), false), |found| (found.clone(), true))
    }

    #[inline]
    fn map_each<B, F>(&self, transform: F) -> Vec<B>
    where
        F: FnMut(&T) -> B,
    {
        self.iter().map(transform).collect()
    }
}

/// Consuming operations over a sequence that may be absent.
///
/// `None` is the absent sequence and is preserved by every operation.
///
/// # Examples
///
/// ```rust
/// use seqops::sequence::OptionalSequenceOps;
///
/// assert_eq!(Some(vec![1, 2, 3]).map_each(|n| n * 2), Some(vec![2, 4, 6]));
/// assert_eq!(None::<Vec<i32>>.map_each(|n| n * 2), None);
///
/// let parsed: Result<_, std::num::ParseIntError> =
///     Some(vec!["4", "2"]).try_map_each(str::parse::<u8>);
/// assert_eq!(parsed, Ok(Some(vec![4, 2])));
/// ```
pub trait OptionalSequenceOps {
    /// The element type of the underlying sequence.
    type Item;

    /// Transforms every element, keeping `None` as `None`.
    ///
    /// See [`map`](super::map).
    fn map_each<B, F>(self, transform: F) -> Option<Vec<B>>
    where
        F: FnMut(Self::Item) -> B;

    /// Transforms every element with a fallible function, keeping `None` as
    /// `None`.
    ///
    /// See [`try_map`](super::try_map).
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `transform`.
    fn try_map_each<B, E, F>(self, transform: F) -> Result<Option<Vec<B>>, E>
    where
        F: FnMut(Self::Item) -> Result<B, E>;
}

impl<I> OptionalSequenceOps for Option<I>
where
    I: IntoIterator,
{
    type Item = I::Item;

    #[inline]
    fn map_each<B, F>(self, transform: F) -> Option<Vec<B>>
    where
        F: FnMut(Self::Item) -> B,
    {
        map(self, transform)
    }

    #[inline]
    fn try_map_each<B, E, F>(self, transform: F) -> Result<Option<Vec<B>>, E>
    where
        F: FnMut(Self::Item) -> Result<B, E>,
    {
        try_map(self, transform)
    }
}

// =============================================================================
// Tests
// =============================================================================
