//! Pure functions over ordered sequences.
//!
//! This module provides three leaf-level operations and their companions:
//!
//! - [`contains`]: Membership test via equality
//! - [`first`] / [`find_first`]: Leftmost element satisfying a predicate
//! - [`map`] / [`try_map`]: Element-wise transformation of an optional sequence
//!
//! ## Absent vs Empty
//!
//! A sequence that was never provided is modelled as `None`, a sequence of
//! zero elements as `Some(empty)`. [`map`] keeps the two apart: `None` maps to
//! `None` without calling the transform, `Some(vec![])` maps to `Some(vec![])`.
//!
//! ## Reference Identity
//!
//! [`ByReference`] wraps a reference and compares by address. Wrapping it in
//! `Option` models a nullable reference, where two absent references are
//! equal.
//!
//! # Examples
//!
//! ```rust
//! use seqops::sequence::{ByReference, contains, first, map};
//!
//! assert!(!contains(Vec::<i32>::new(), &1));
//! assert_eq!(first([1, 2, 3], |n| *n > 5), (0, false));
//!
//! let empty: Option<Vec<i32>> = Some(Vec::new());
//! assert_eq!(map(empty, |n| n * 2), Some(Vec::new()));
//!
//! let absent: [Option<ByReference<'_, i32>>; 1] = [None];
//! assert!(contains(absent, &None::<ByReference<'_, i32>>));
//! ```
//!
//! ## Using the extension traits
//!
//! ```rust
//! use seqops::sequence::{OptionalSequenceOps, SequenceOps};
//!
//! let values = vec![1, 2, 3, 4, 5];
//! assert!(values.contains_value(&3));
//! assert_eq!(values.first_where(|n| *n > 3), (4, true));
//!
//! let doubled = Some(values).map_each(|n| n * 2);
//! assert_eq!(doubled, Some(vec![2, 4, 6, 8, 10]));
//! ```

mod by_reference;
mod contains;
mod first;
mod map;
mod ops;

pub use by_reference::ByReference;
pub use contains::contains;
pub use first::{find_first, first};
pub use map::{map, try_map};
pub use ops::{OptionalSequenceOps, SequenceOps};
