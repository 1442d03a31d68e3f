//! Builder for configuring [`DisjointSet`] construction.
//!
//! Collects the initial length and any extra storage to pre-allocate, and
//! validates both against the chosen index width when [`build`] is called.
//!
//! [`build`]: DisjointSetBuilder::build

use std::marker::PhantomData;

use crate::{DisjointSet, ElementIndex, Result};

/// Configures and constructs [`DisjointSet`] instances.
///
/// # Examples
/// ```
/// use disjoint_core::DisjointSetBuilder;
///
/// let set = DisjointSetBuilder::<u16>::new()
///     .with_len(10)
///     .with_reserve(90)
///     .build()
///     .expect("10 elements fit in u16");
/// assert_eq!(set.len(), 10);
/// assert_eq!(set.class_count(), 10);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct DisjointSetBuilder<I: ElementIndex = u32> {
    len: usize,
    reserve: usize,
    index: PhantomData<I>,
}

impl<I: ElementIndex> Default for DisjointSetBuilder<I> {
    fn default() -> Self {
        Self {
            len: 0,
            reserve: 0,
            index: PhantomData,
        }
    }
}

impl<I: ElementIndex> DisjointSetBuilder<I> {
    /// Creates a builder for an empty set with no reserved storage.
    ///
    /// # Examples
    /// ```
    /// use disjoint_core::DisjointSetBuilder;
    ///
    /// let builder = DisjointSetBuilder::<u8>::new();
    /// assert_eq!(builder.len(), 0);
    /// assert_eq!(builder.reserve(), 0);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of singleton elements the set starts with.
    #[must_use]
    pub fn with_len(mut self, len: usize) -> Self {
        self.len = len;
        self
    }

    /// Returns the configured initial length.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Sets how many elements beyond the initial length to pre-allocate.
    ///
    /// Useful when the caller expects to [`DisjointSet::grow`] later and wants
    /// to avoid reallocating. The reservation is a hint: it is clamped to the
    /// index capacity, and a request the allocator refuses is dropped rather
    /// than failing [`build`](Self::build).
    #[must_use]
    pub fn with_reserve(mut self, reserve: usize) -> Self {
        self.reserve = reserve;
        self
    }

    /// Returns the configured extra reservation.
    #[must_use]
    pub fn reserve(&self) -> usize {
        self.reserve
    }

    /// Validates the configuration and constructs the set.
    ///
    /// # Errors
    /// Returns [`crate::DisjointSetError::Capacity`] when the initial length
    /// exceeds the index capacity.
    ///
    /// # Examples
    /// ```
    /// use disjoint_core::{DisjointSetBuilder, DisjointSetErrorCode};
    ///
    /// let err = DisjointSetBuilder::<u8>::new()
    ///     .with_len(257)
    ///     .build()
    ///     .expect_err("u8 addresses at most 256 elements");
    /// assert_eq!(err.code(), DisjointSetErrorCode::Capacity);
    /// ```
    pub fn build(self) -> Result<DisjointSet<I>> {
        DisjointSet::with_reserve(self.len, self.reserve)
    }
}
