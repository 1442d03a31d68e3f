//! Benchmark parameter types.
//!
//! Each type renders as a compact Criterion benchmark id.

use std::fmt;

use crate::workload::MergePattern;

/// Parameters for a merge/find benchmark run.
#[derive(Clone, Copy, Debug)]
pub struct MergeBenchParams {
    /// Number of elements in the universe.
    pub element_count: usize,
    /// How merge endpoints are chosen.
    pub pattern: MergePattern,
}

impl fmt::Display for MergeBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},{}", self.element_count, self.pattern)
    }
}

/// Parameters for a partition join benchmark run.
#[derive(Clone, Copy, Debug)]
pub struct JoinBenchParams {
    /// Number of elements in both partitions.
    pub element_count: usize,
    /// Merges applied to each input partition, per element.
    pub merges_per_element: usize,
}

impl fmt::Display for JoinBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "n={},merges={}x",
            self.element_count, self.merges_per_element
        )
    }
}
