//! Seeded merge workloads for union-find benchmarks.
//!
//! A workload is a fixed list of merge pairs over `0..element_count`,
//! generated deterministically from a seed so repeated runs measure the same
//! sequence of operations.

use std::fmt;

use disjoint_core::{DisjointSet, DisjointSetError, ElementIndex};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::error::BenchSetupError;

/// How merge endpoints are chosen.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MergePattern {
    /// Both endpoints drawn uniformly at random.
    Uniform,
    /// Consecutive elements are linked, producing the deepest trees.
    Chain,
    /// Every merge involves element `0`.
    Star,
}

impl fmt::Display for MergePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Uniform => "uniform",
            Self::Chain => "chain",
            Self::Star => "star",
        };
        f.write_str(label)
    }
}

/// Configuration for [`MergeWorkload::generate`].
#[derive(Clone, Copy, Debug)]
pub struct WorkloadConfig {
    /// Number of elements in the universe.
    pub element_count: usize,
    /// Number of merge pairs to generate.
    pub merge_count: usize,
    /// How merge endpoints are chosen.
    pub pattern: MergePattern,
    /// Seed for the pseudo-random generator.
    pub seed: u64,
}

/// A deterministic list of merges over a fixed universe.
#[derive(Clone, Debug)]
pub struct MergeWorkload {
    element_count: usize,
    pairs: Vec<(u32, u32)>,
}

impl MergeWorkload {
    /// Generates the merge pairs described by `config`.
    ///
    /// # Errors
    /// Returns [`BenchSetupError::ZeroValue`] for an empty universe and
    /// [`BenchSetupError::DisjointSet`] when the universe does not fit in
    /// `u32` indices.
    ///
    /// # Examples
    /// ```
    /// use disjoint_benches::workload::{MergePattern, MergeWorkload, WorkloadConfig};
    ///
    /// let workload = MergeWorkload::generate(WorkloadConfig {
    ///     element_count: 16,
    ///     merge_count: 8,
    ///     pattern: MergePattern::Chain,
    ///     seed: 42,
    /// })?;
    /// assert_eq!(workload.pairs().len(), 8);
    /// # Ok::<(), disjoint_benches::error::BenchSetupError>(())
    /// ```
    pub fn generate(config: WorkloadConfig) -> Result<Self, BenchSetupError> {
        if config.element_count == 0 {
            return Err(BenchSetupError::ZeroValue {
                context: "workload element_count",
            });
        }
        let bound = u32::try_from(config.element_count).map_err(|_| {
            DisjointSetError::Capacity {
                requested: config.element_count,
                capacity: u32::capacity(),
            }
        })?;
        let mut rng = SmallRng::seed_from_u64(config.seed);
        let pairs = (0..config.merge_count)
            .map(|step| endpoints(config.pattern, bound, step, &mut rng))
            .collect();
        Ok(Self {
            element_count: config.element_count,
            pairs,
        })
    }

    /// Number of elements in the universe.
    #[must_use]
    pub const fn element_count(&self) -> usize {
        self.element_count
    }

    /// The generated merge pairs in application order.
    #[must_use]
    pub const fn pairs(&self) -> &[(u32, u32)] {
        self.pairs.as_slice()
    }

    /// Builds a fresh set and applies every merge.
    ///
    /// # Errors
    /// Propagates any [`DisjointSetError`] raised while building.
    pub fn build(&self) -> Result<DisjointSet<u32>, DisjointSetError> {
        let mut set = DisjointSet::new(self.element_count)?;
        self.apply(&mut set)?;
        Ok(set)
    }

    /// Applies every merge to `set`.
    ///
    /// # Errors
    /// Returns [`DisjointSetError::IndexOutOfRange`] when `set` is smaller
    /// than the workload's universe.
    pub fn apply(&self, set: &mut DisjointSet<u32>) -> Result<(), DisjointSetError> {
        for &(left, right) in &self.pairs {
            set.merge(left, right)?;
        }
        Ok(())
    }
}

fn endpoints(pattern: MergePattern, bound: u32, step: usize, rng: &mut SmallRng) -> (u32, u32) {
    match pattern {
        MergePattern::Uniform => (rng.gen_range(0..bound), rng.gen_range(0..bound)),
        MergePattern::Chain => {
            let links = bound.saturating_sub(1).max(1);
            let offset = u32::try_from(step)
                .unwrap_or(u32::MAX)
                .checked_rem(links)
                .unwrap_or(0);
            (offset, offset.saturating_add(1).min(bound.saturating_sub(1)))
        }
        MergePattern::Star => (0, rng.gen_range(0..bound)),
    }
}
