//! Absence-preserving element-wise transformation.

/// Transforms every element of an optional sequence.
///
/// - `None` (no sequence) maps to `None`; `transform` is never called.
/// - `Some` of an empty sequence maps to `Some(vec![])`, never to `None`.
/// - Otherwise the output has the input's length and element `i` is
///   `transform(input[i])`. `transform` runs once per element, left to right.
///
/// # Arguments
///
/// * `sequence` - The elements to transform, or `None` if absent
/// * `transform` - A function applied to each element
///
/// # Examples
///
/// ```rust
/// use seqops::sequence::map;
///
/// assert_eq!(map(Some(vec![1, 2, 3]), |n| n * 2), Some(vec![2, 4, 6]));
/// assert_eq!(map(Some(Vec::<i32>::new()), |n| n * 2), Some(Vec::new()));
/// assert_eq!(map(None::<Vec<i32>>, |n| n * 2), None);
/// ```
#[inline]
pub fn map<I, B, F>(sequence: Option<I>, transform: F) -> Option<Vec<B>>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> B,
{
    sequence.map(|elements| elements.into_iter().map(transform).collect())
}

/// Transforms every element of an optional sequence with a fallible function.
///
/// Follows the same rules as [`map`]. If `transform` fails, its error is
/// returned as-is and no later element is transformed.
///
/// # Arguments
///
/// * `sequence` - The elements to transform, or `None` if absent
/// * `transform` - A fallible function applied to each element
///
/// # Errors
///
/// Returns the first error produced by `transform`.
///
/// # Examples
///
/// ```rust
/// use seqops::sequence::try_map;
///
/// let parsed = try_map(Some(["1", "2", "3"]), str::parse::<i32>);
/// assert_eq!(parsed, Ok(Some(vec![1, 2, 3])));
///
/// let failed = try_map(Some(["1", "x", "3"]), str::parse::<i32>);
/// assert!(failed.is_err());
///
/// let absent = try_map(None::<Vec<&str>>, str::parse::<i32>);
/// assert_eq!(absent, Ok(None));
/// ```
#[inline]
pub fn try_map<I, B, E, F>(sequence: Option<I>, transform: F) -> Result<Option<Vec<B>>, E>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> Result<B, E>,
{
    sequence
        .map(|elements| elements.into_iter().map(transform).collect())
        .transpose()
}

// =============================================================================
// Tests
// =============================================================================
