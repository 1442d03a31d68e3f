//! Union-find over a dense, bounded range of element indices.
//!
//! Elements are the integers `0..len`. Each element stores a parent pointer;
//! following parents always ends at a self-parented root, the representative
//! of the element's class. Roots also carry a rank, an upper bound on the
//! height of their tree, which keeps unions shallow. Lookups flatten the
//! visited path so later lookups are near-constant time.

use std::mem;

use tracing::debug;

use crate::{
    ElementIndex,
    error::{DisjointSetError, Result},
};

/// A growable partition of `0..len` into disjoint equivalence classes.
///
/// The type parameter picks the stored index width and therefore the largest
/// admissible length: a `DisjointSet<u8>` never holds more than 256 elements.
///
/// Mutation requires `&mut self`, so a set is single-writer by construction.
/// Independently built sets over the same universe can be reconciled with
/// [`DisjointSet::join`].
///
/// # Examples
/// ```
/// use disjoint_core::{DisjointSet, DisjointSetError};
///
/// let mut set = DisjointSet::<u8>::new(5)?;
/// set.merge(3, 4)?;
/// assert!(set.equiv(3, 4)?);
/// assert!(!set.equiv(2, 3)?);
///
/// set.grow(8)?;
/// assert_eq!(set.len(), 8);
/// assert!(!set.equiv(3, 7)?);
///
/// assert!(matches!(set.grow(270), Err(DisjointSetError::Capacity { .. })));
/// assert!(matches!(set.find(8), Err(DisjointSetError::IndexOutOfRange { .. })));
/// # Ok::<(), DisjointSetError>(())
/// ```
#[derive(Clone, Debug)]
pub struct DisjointSet<I: ElementIndex = u32> {
    parent: Vec<I>,
    rank: Vec<u8>,
    classes: usize,
}

impl<I: ElementIndex> Default for DisjointSet<I> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<I: ElementIndex> DisjointSet<I> {
    /// Creates a set with no elements.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            parent: Vec::new(),
            rank: Vec::new(),
            classes: 0,
        }
    }

    /// Creates a set of `len` singleton classes.
    ///
    /// # Errors
    /// Returns [`DisjointSetError::Capacity`] when `len` exceeds
    /// [`ElementIndex::capacity`] for `I`.
    pub fn new(len: usize) -> Result<Self> {
        Self::with_reserve(len, 0)
    }

    /// Creates a set of `len` singletons with storage for `reserve` more.
    ///
    /// The reservation is a hint: it is clamped to the index capacity, and
    /// an allocation the system refuses leaves the set at its exact length.
    pub(crate) fn with_reserve(len: usize, reserve: usize) -> Result<Self> {
        Self::ensure_capacity(len)?;
        let mut set = Self {
            parent: Vec::with_capacity(len),
            rank: Vec::with_capacity(len),
            classes: 0,
        };
        set.extend_to(len);
        let extra = reserve.min(I::capacity() - len);
        if extra > 0 {
            let reserved = set
                .parent
                .try_reserve_exact(extra)
                .and_then(|()| set.rank.try_reserve_exact(extra));
            if let Err(error) = reserved {
                debug!(len, extra, %error, "skipped storage reservation");
            }
        }
        Ok(set)
    }

    /// Number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Whether the set holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Largest length this set may grow to, `I::MAX + 1`.
    #[must_use]
    pub fn index_capacity(&self) -> usize {
        I::capacity()
    }

    /// Number of disjoint classes.
    #[must_use]
    pub fn class_count(&self) -> usize {
        self.classes
    }

    /// Extends the set to `new_len` elements.
    ///
    /// Appended elements are singletons; existing classes are untouched.
    /// Growing to the current length is a no-op.
    ///
    /// # Errors
    /// Returns [`DisjointSetError::Shrink`] when `new_len` is below the
    /// current length and [`DisjointSetError::Capacity`] when it exceeds the
    /// index capacity. The set is unchanged in both cases.
    pub fn grow(&mut self, new_len: usize) -> Result<()> {
        let len = self.len();
        if new_len < len {
            return Err(DisjointSetError::Shrink {
                requested: new_len,
                len,
            });
        }
        Self::ensure_capacity(new_len)?;
        self.extend_to(new_len);
        debug!(old_len = len, new_len, "grew disjoint set");
        Ok(())
    }

    /// Drops every element and all merge history, keeping the allocation.
    pub fn clear(&mut self) {
        let len = self.len();
        self.parent.clear();
        self.rank.clear();
        self.classes = 0;
        debug!(old_len = len, "cleared disjoint set");
    }

    /// Returns the representative of `element`'s class.
    ///
    /// Every node on the path from `element` to the root is re-pointed
    /// directly at the root.
    ///
    /// # Errors
    /// Returns [`DisjointSetError::IndexOutOfRange`] when `element >= len`.
    pub fn find(&mut self, element: I) -> Result<I> {
        let slot = self.slot(element)?;
        let root = self.compress(slot);
        Ok(self.parent[root])
    }

    /// Returns the representative of `element`'s class without touching the
    /// structure, for callers holding only a shared reference.
    ///
    /// # Errors
    /// Returns [`DisjointSetError::IndexOutOfRange`] when `element >= len`.
    pub fn find_without_compression(&self, element: I) -> Result<I> {
        let slot = self.slot(element)?;
        Ok(self.parent[self.root_of(slot)])
    }

    /// Whether `left` and `right` belong to the same class.
    ///
    /// # Errors
    /// Returns [`DisjointSetError::IndexOutOfRange`] when either element is
    /// out of range. Both are checked before any path is compressed.
    pub fn equiv(&mut self, left: I, right: I) -> Result<bool> {
        let left_slot = self.slot(left)?;
        let right_slot = self.slot(right)?;
        Ok(self.compress(left_slot) == self.compress(right_slot))
    }

    /// Merges the classes of `left` and `right` and returns the surviving
    /// root.
    ///
    /// The root of lower rank is attached beneath the root of higher rank.
    /// On a tie `right`'s root goes beneath `left`'s root, whose rank grows
    /// by one. Already equivalent elements leave the structure as it was.
    ///
    /// # Errors
    /// Returns [`DisjointSetError::IndexOutOfRange`] when either element is
    /// out of range. Both are checked before anything is modified.
    pub fn merge(&mut self, left: I, right: I) -> Result<I> {
        let left_slot = self.slot(left)?;
        let right_slot = self.slot(right)?;
        let mut survivor = self.compress(left_slot);
        let mut absorbed = self.compress(right_slot);
        if survivor == absorbed {
            return Ok(self.parent[survivor]);
        }

        // Ranks are read at the roots, never at the elements passed in.
        let left_rank = self.rank[survivor];
        let right_rank = self.rank[absorbed];
        if left_rank < right_rank {
            mem::swap(&mut survivor, &mut absorbed);
        }
        self.parent[absorbed] = self.parent[survivor];
        if left_rank == right_rank {
            self.rank[survivor] = left_rank.saturating_add(1);
        }
        self.classes -= 1;
        Ok(self.parent[survivor])
    }

    /// Whether `element` is the representative of its class.
    ///
    /// # Errors
    /// Returns [`DisjointSetError::IndexOutOfRange`] when `element >= len`.
    pub fn is_root(&self, element: I) -> Result<bool> {
        let slot = self.slot(element)?;
        Ok(self.parent[slot].to_usize() == slot)
    }

    /// Iterates over every element in ascending order.
    pub fn elements(&self) -> impl Iterator<Item = I> + '_ {
        (0..self.len()).filter_map(I::from_usize)
    }

    /// Iterates over class representatives in ascending order.
    pub fn roots(&self) -> impl Iterator<Item = I> + '_ {
        self.parent
            .iter()
            .enumerate()
            .filter(|&(slot, parent)| parent.to_usize() == slot)
            .map(|(_, &root)| root)
    }

    /// Materialises the partition.
    ///
    /// Classes are ordered by their smallest member and list members in
    /// ascending order, so the output does not depend on which element
    /// happens to be the root.
    #[must_use]
    pub fn classes(&self) -> Vec<Vec<I>> {
        let mut group_of_root: Vec<Option<usize>> = vec![None; self.len()];
        let mut groups: Vec<Vec<I>> = Vec::with_capacity(self.classes);
        for (slot, element) in self.elements().enumerate() {
            let root = self.root_of(slot);
            if let Some(group) = group_of_root[root] {
                groups[group].push(element);
            } else {
                group_of_root[root] = Some(groups.len());
                groups.push(vec![element]);
            }
        }
        groups
    }

    /// Whether both sets hold identical parent pointers, ranks and class
    /// counts. Stricter than `==`, which only compares the partitions.
    #[cfg(any(test, kani))]
    pub(crate) fn same_structure(&self, other: &Self) -> bool {
        self.parent == other.parent && self.rank == other.rank && self.classes == other.classes
    }

    #[cfg(test)]
    pub(crate) fn rank_of_root(&self, root: I) -> u8 {
        self.rank.get(root.to_usize()).copied().unwrap_or(0)
    }

    fn slot(&self, element: I) -> Result<usize> {
        let slot = element.to_usize();
        let len = self.len();
        if slot < len {
            Ok(slot)
        } else {
            Err(DisjointSetError::IndexOutOfRange { index: slot, len })
        }
    }

    fn ensure_capacity(requested: usize) -> Result<()> {
        let capacity = I::capacity();
        if requested > capacity {
            debug!(requested, capacity, "rejected length beyond index capacity");
            return Err(DisjointSetError::Capacity {
                requested,
                capacity,
            });
        }
        Ok(())
    }

    /// Appends singletons up to `new_len`; callers have checked capacity.
    fn extend_to(&mut self, new_len: usize) {
        let old_len = self.len();
        self.parent.extend((old_len..new_len).filter_map(I::from_usize));
        self.rank.resize(self.parent.len(), 0);
        self.classes += self.parent.len() - old_len;
    }

    fn root_of(&self, mut node: usize) -> usize {
        loop {
            let parent = self.parent[node].to_usize();
            if parent == node {
                return node;
            }
            node = parent;
        }
    }

    /// Two passes: locate the root, then point every node on the path at it.
    fn compress(&mut self, mut node: usize) -> usize {
        let root = self.root_of(node);
        let root_index = self.parent[root];
        while node != root {
            let next = self.parent[node].to_usize();
            self.parent[node] = root_index;
            node = next;
        }
        root
    }
}
