//! Workload types for property-based tests.

use test_strategy::Arbitrary;

/// How generated merges pick their endpoints.
///
/// Each shape stresses a different tree layout before path compression gets
/// a chance to flatten it.
#[derive(Arbitrary, Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum MergeShape {
    /// Endpoints drawn uniformly from the current universe.
    Uniform,
    /// Consecutive elements are linked, building long chains.
    Chain,
    /// Every merge involves one hub element.
    Star,
    /// Elements merge only within small fixed-width blocks.
    Clustered,
}

/// A single step applied to both the structure under test and the oracle.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum Operation {
    /// Merge the classes of the two elements.
    Merge(u16, u16),
    /// Look up the representative of the element.
    Find(u16),
    /// Append this many singleton elements.
    Grow(u16),
}

/// A generated sequence of operations over an initial universe.
#[derive(Clone, Debug)]
pub(super) struct Workload {
    /// Elements present before the first operation.
    pub initial_len: usize,
    /// Operations in application order.
    pub operations: Vec<Operation>,
    /// Shape used to generate the merges, kept for failure diagnosis.
    pub shape: MergeShape,
}

impl Workload {
    /// Length of the universe after every `Grow` has been applied.
    pub(super) fn final_len(&self) -> usize {
        self.operations
            .iter()
            .fold(self.initial_len, |len, operation| match operation {
                Operation::Grow(extra) => len + usize::from(*extra),
                Operation::Merge(..) | Operation::Find(_) => len,
            })
    }
}
