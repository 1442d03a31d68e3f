//! Bounded union-find with partition joins.
//!
//! [`DisjointSet`] partitions a dense range of element indices `0..len` into
//! equivalence classes and merges them as equalities are discovered. The
//! caller owns the mapping from its own entities to indices and chooses the
//! index width, which bounds how far the set may grow. Two sets built
//! independently over the same universe combine into their least common
//! coarsening with [`join`], and [`is_refinement_of`] (or `<=`) checks the
//! refinement order between them.
//!
//! ```
//! use disjoint_core::{DisjointSet, DisjointSetError};
//!
//! let mut sizes = DisjointSet::<u16>::new(4)?;
//! sizes.merge(0, 2)?;
//! let root = sizes.find(2)?;
//! assert_eq!(sizes.find(0)?, root);
//! assert_eq!(sizes.class_count(), 3);
//! # Ok::<(), DisjointSetError>(())
//! ```

mod builder;
mod disjoint_set;
mod error;
mod index;
mod partition;

#[cfg(kani)]
mod kani_proofs;
#[cfg(test)]
mod property;
#[cfg(test)]
mod test_utils;

pub use crate::{
    builder::DisjointSetBuilder,
    disjoint_set::DisjointSet,
    error::{DisjointSetError, DisjointSetErrorCode, Result},
    index::ElementIndex,
    partition::{is_refinement_of, join},
};
