//! Joins and refinement comparisons between partitions of one universe.
//!
//! Partition `A` refines `B` when every class of `A` lies inside a class of
//! `B`. Refinement is a partial order; the join of `A` and `B` is the finest
//! partition that both refine. It is built by replaying every union recorded
//! in `B` on top of a copy of `A`.
//!
//! The comparison operators on [`DisjointSet`] follow the same order:
//! `a <= b` reads "`a` refines `b`", and `a == b` holds when both describe the
//! same partition regardless of tree shape or which element is the root.

use std::cmp::Ordering;

use tracing::{debug, instrument};

use crate::{
    DisjointSet, ElementIndex,
    error::{DisjointSetError, Result},
};

/// Computes the join of two partitions over the same universe.
///
/// # Errors
/// Returns [`DisjointSetError::UniverseMismatch`] when the inputs differ in
/// length.
///
/// # Examples
/// ```
/// use disjoint_core::{DisjointSet, DisjointSetError, join};
///
/// let mut a = DisjointSet::<u8>::new(5)?;
/// let mut b = DisjointSet::<u8>::new(5)?;
/// a.merge(2, 3)?;
/// b.merge(3, 4)?;
///
/// let mut c = join(&a, &b)?;
/// assert!(c.equiv(2, 4)?);
/// assert!(a <= c && b <= c);
/// assert!(!(c <= a));
/// # Ok::<(), DisjointSetError>(())
/// ```
#[instrument(
    name = "disjoint.join",
    level = "debug",
    err,
    skip_all,
    fields(len = left.len()),
)]
pub fn join<I: ElementIndex>(
    left: &DisjointSet<I>,
    right: &DisjointSet<I>,
) -> Result<DisjointSet<I>> {
    ensure_same_universe(left, right)?;
    let mut joined = left.clone();
    for element in right.elements() {
        let representative = right.find_without_compression(element)?;
        joined.merge(element, representative)?;
    }
    debug!(classes = joined.class_count(), "joined partitions");
    Ok(joined)
}

/// Whether `finer` refines `coarser`.
///
/// # Errors
/// Returns [`DisjointSetError::UniverseMismatch`] when the inputs differ in
/// length.
#[instrument(
    name = "disjoint.is_refinement_of",
    level = "debug",
    err,
    skip_all,
    fields(len = finer.len()),
)]
pub fn is_refinement_of<I: ElementIndex>(
    finer: &DisjointSet<I>,
    coarser: &DisjointSet<I>,
) -> Result<bool> {
    ensure_same_universe(finer, coarser)?;
    Ok(refines(finer, coarser))
}

impl<I: ElementIndex> DisjointSet<I> {
    /// Method form of [`join`].
    ///
    /// # Errors
    /// Returns [`DisjointSetError::UniverseMismatch`] when the inputs differ
    /// in length.
    pub fn join(&self, other: &Self) -> Result<Self> {
        join(self, other)
    }

    /// Method form of [`is_refinement_of`].
    ///
    /// # Errors
    /// Returns [`DisjointSetError::UniverseMismatch`] when the inputs differ
    /// in length.
    pub fn is_refinement_of(&self, other: &Self) -> Result<bool> {
        is_refinement_of(self, other)
    }
}

fn ensure_same_universe<I: ElementIndex>(
    left: &DisjointSet<I>,
    right: &DisjointSet<I>,
) -> Result<()> {
    if left.len() == right.len() {
        Ok(())
    } else {
        Err(DisjointSetError::UniverseMismatch {
            left: left.len(),
            right: right.len(),
        })
    }
}

/// Checks, per class of `finer`, that every member shares one root in
/// `coarser`. Callers guarantee equal lengths.
fn refines<I: ElementIndex>(finer: &DisjointSet<I>, coarser: &DisjointSet<I>) -> bool {
    if finer.class_count() < coarser.class_count() {
        return false;
    }
    let mut image: Vec<Option<I>> = vec![None; finer.len()];
    for element in finer.elements() {
        let (Ok(own_root), Ok(other_root)) = (
            finer.find_without_compression(element),
            coarser.find_without_compression(element),
        ) else {
            return false;
        };
        let Some(slot) = image.get_mut(own_root.to_usize()) else {
            return false;
        };
        match *slot {
            None => *slot = Some(other_root),
            Some(seen) if seen != other_root => return false,
            Some(_) => {}
        }
    }
    true
}

impl<I: ElementIndex> PartialEq for DisjointSet<I> {
    fn eq(&self, other: &Self) -> bool {
        self.partial_cmp(other) == Some(Ordering::Equal)
    }
}

impl<I: ElementIndex> Eq for DisjointSet<I> {}

impl<I: ElementIndex> PartialOrd for DisjointSet<I> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.len() != other.len() {
            return None;
        }
        match (refines(self, other), refines(other, self)) {
            (true, true) => Some(Ordering::Equal),
            (true, false) => Some(Ordering::Less),
            (false, true) => Some(Ordering::Greater),
            (false, false) => None,
        }
    }
}
