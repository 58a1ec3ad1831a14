//! Reference-identity element wrapper.
//!
//! [`ByReference`] lets a sequence hold references that compare equal only
//! when they point to the same target, regardless of the values behind them.
//! A nullable reference is `Option<ByReference<'_, T>>`; because
//! `None == None`, a sequence holding an absent reference contains the absent
//! reference.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Deref;

/// A reference that compares by address rather than by value.
///
/// Two `ByReference` values are equal if and only if they refer to the same
/// target (`std::ptr::eq`). For slices and trait objects the pointer
/// metadata is part of the identity, so two sub-slices starting at the same
/// address but with different lengths are distinct.
///
/// Zero-sized targets may share an address, in which case distinct bindings
/// compare equal.
///
/// # Absent References
///
/// `Option<ByReference<'_, T>>` models a nullable reference. Two absent
/// references are equal, so a sequence holding `None` contains `None`. Callers
/// expecting SQL-style "null never equals null" semantics should filter
/// absent elements first.
///
/// # Examples
///
/// ```rust
/// use seqops::sequence::{ByReference, contains};
///
/// let first = 1;
/// let second = 1;
/// let elements = [ByReference::new(&first)];
///
/// assert!(contains(elements, &ByReference::new(&first)));
/// assert!(!contains(elements, &ByReference::new(&second)));
///
/// let nullable: [Option<ByReference<'_, i32>>; 1] = [None];
/// assert!(contains(nullable, &None::<ByReference<'_, i32>>));
/// ```
pub struct ByReference<'a, T: ?Sized>(&'a T);

impl<'a, T: ?Sized> ByReference<'a, T> {
    /// Wraps a reference.
    #[inline]
    #[must_use]
    pub const fn new(reference: &'a T) -> Self {
        Self(reference)
    }

    /// Returns the wrapped reference.
    #[inline]
    #[must_use]
    pub const fn get(self) -> &'a T {
        self.0
    }

    /// Returns the address used for identity comparison.
    #[inline]
    #[must_use]
    pub const fn as_ptr(self) -> *const T {
        self.0
    }
}

impl<T: ?Sized> Clone for ByReference<'_, T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for ByReference<'_, T> {}

impl<T: ?Sized> PartialEq for ByReference<'_, T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.0, other.0)
    }
}

impl<T: ?Sized> Eq for ByReference<'_, T> {}

impl<T: ?Sized> Hash for ByReference<'_, T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::ptr::hash(self.0, state);
    }
}

impl<T: ?Sized> Deref for ByReference<'_, T> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &Self::Target {
        self.0
    }
}

impl<'a, T: ?Sized> From<&'a T> for ByReference<'a, T> {
    #[inline]
    fn from(reference: &'a T) -> Self {
        Self(reference)
    }
}

impl<T: ?Sized + fmt::Debug> fmt::Debug for ByReference<'_, T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_tuple("ByReference")
            .field(&self.0)
            .finish()
    }
}

static_assertions::assert_impl_all!(ByReference<'static, i32>: Copy, Eq, Hash, Send, Sync);
static_assertions::assert_impl_all!(ByReference<'static, str>: Copy, Eq, Hash, Send, Sync);
static_assertions::assert_not_impl_any!(ByReference<'static, std::cell::Cell<i32>>: Send, Sync);

// =============================================================================
// Tests
// =============================================================================
