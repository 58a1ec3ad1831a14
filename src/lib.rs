//! # seqops
//!
//! Generic utilities over ordered sequences: membership testing, first-match
//! search, and element-wise transformation that keeps "no sequence" distinct
//! from "empty sequence".
//!
//! ## Overview
//!
//! - **Membership**: [`contains`](sequence::contains) scans for an equal element
//! - **Search**: [`first`](sequence::first) and [`find_first`](sequence::find_first)
//!   return the leftmost element satisfying a predicate
//! - **Transformation**: [`map`](sequence::map) and [`try_map`](sequence::try_map)
//!   transform every element of an optional sequence
//! - **Reference identity**: [`ByReference`](sequence::ByReference) compares
//!   elements by address instead of by value
//!
//! ## Feature Flags
//!
//! - `sequence`: Sequence functions and extension traits (enabled by default)
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use seqops::prelude::*;
//!
//! assert!(contains([1, 2, 3, 4, 5], &3));
//! assert_eq!(first([1, 2, 3], |n| *n > 1), (2, true));
//! assert_eq!(map(Some(vec![1, 2, 3]), |n| n * 2), Some(vec![2, 4, 6]));
//! assert_eq!(map(None::<Vec<i32>>, |n| n * 2), None);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used functions and traits.
///
/// # Usage
///
/// ```rust
/// use seqops::prelude::*;
/// ```
pub mod prelude {
    #[cfg(feature = "sequence")]
    pub use crate::sequence::*;
}

#[cfg(feature = "sequence")]
pub mod sequence;
