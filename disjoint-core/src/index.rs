//! Bounded element index types.
//!
//! A [`crate::DisjointSet`] stores one parent pointer per element using the
//! caller's chosen integer width, so the width caps how many elements the
//! structure may ever hold. The cap is checked explicitly on every size
//! change; nothing relies on integer wrap-around.

use std::{fmt, hash::Hash};

mod sealed {
    pub trait Sealed {}
}

/// An unsigned integer type usable as a dense element index.
///
/// Implemented for `u8`, `u16`, `u32`, `u64` and `usize`. The trait is sealed:
/// the capacity arithmetic assumes an unsigned, zero-based range.
///
/// # Examples
/// ```
/// use disjoint_core::ElementIndex;
///
/// assert_eq!(<u8 as ElementIndex>::MAX, 255);
/// assert_eq!(u8::capacity(), 256);
/// assert_eq!(u8::from_usize(255), Some(255));
/// assert_eq!(u8::from_usize(256), None);
/// ```
pub trait ElementIndex:
    Copy + Eq + Ord + Hash + fmt::Debug + fmt::Display + Send + Sync + 'static + sealed::Sealed
{
    /// Largest representable index.
    const MAX: Self;

    /// Widens the index to `usize`.
    ///
    /// Values that do not fit (a `u64` on a 32-bit target) saturate to
    /// `usize::MAX`, which every bounds check then rejects as out of range.
    fn to_usize(self) -> usize;

    /// Narrows `value` to this index type, or `None` when it does not fit.
    fn from_usize(value: usize) -> Option<Self>;

    /// Number of distinct indices, `MAX + 1`, saturating at `usize::MAX`.
    #[must_use]
    fn capacity() -> usize {
        Self::MAX.to_usize().saturating_add(1)
    }
}

macro_rules! impl_element_index {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl sealed::Sealed for $ty {}

            impl ElementIndex for $ty {
                const MAX: Self = <$ty>::MAX;

                #[inline]
                fn to_usize(self) -> usize {
                    usize::try_from(self).unwrap_or(usize::MAX)
                }

                #[inline]
                fn from_usize(value: usize) -> Option<Self> {
                    <$ty>::try_from(value).ok()
                }
            }
        )+
    };
}

impl_element_index!(u8, u16, u32, u64, usize);
