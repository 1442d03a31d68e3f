//! Strategy builders for disjoint-set property tests.
//!
//! Workloads are generated from a seeded [`SmallRng`] so a failing case can
//! be replayed from its `(shape, seed)` pair alone.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::types::{MergeShape, Operation, Workload};

/// Largest universe a workload starts with.
const MAX_INITIAL_LEN: usize = 48;
/// Largest number of operations in one workload.
const MAX_OPERATIONS: usize = 96;
/// Largest single growth step.
const MAX_GROWTH: u16 = 8;
/// Width of the blocks used by [`MergeShape::Clustered`].
const CLUSTER_WIDTH: usize = 4;

/// Generates workloads covering every merge shape.
pub(super) fn workload_strategy() -> impl Strategy<Value = Workload> {
    (any::<MergeShape>(), any::<u64>()).prop_map(|(shape, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_workload(shape, &mut rng)
    })
}

/// Generates two workloads over the same final universe.
///
/// The second workload starts at the first one's final length and performs
/// no growth, so both describe partitions of identical size.
pub(super) fn workload_pair_strategy() -> impl Strategy<Value = (Workload, Workload)> {
    (any::<MergeShape>(), any::<MergeShape>(), any::<u64>()).prop_map(
        |(first_shape, second_shape, seed)| {
            let mut rng = SmallRng::seed_from_u64(seed);
            generate_pair(first_shape, second_shape, &mut rng)
        },
    )
}

/// Generates a workload for an explicit shape.
pub(super) fn generate_workload(shape: MergeShape, rng: &mut SmallRng) -> Workload {
    let initial_len = rng.gen_range(0..=MAX_INITIAL_LEN);
    let operation_count = rng.gen_range(0..=MAX_OPERATIONS);
    let mut len = initial_len;
    let mut operations = Vec::with_capacity(operation_count);
    for step in 0..operation_count {
        let roll: u8 = rng.gen_range(0..10);
        let operation = if len == 0 || roll == 0 {
            let extra = rng.gen_range(1..=MAX_GROWTH);
            len += usize::from(extra);
            Operation::Grow(extra)
        } else if roll <= 2 {
            Operation::Find(element(rng.gen_range(0..len)))
        } else {
            let (left, right) = merge_endpoints(shape, len, step, rng);
            Operation::Merge(element(left), element(right))
        };
        operations.push(operation);
    }
    Workload {
        initial_len,
        operations,
        shape,
    }
}

/// Generates two workloads whose final universes coincide.
pub(super) fn generate_pair(
    first_shape: MergeShape,
    second_shape: MergeShape,
    rng: &mut SmallRng,
) -> (Workload, Workload) {
    let first = generate_workload(first_shape, rng);
    let len = first.final_len();
    let merge_count = if len == 0 { 0 } else { rng.gen_range(0..=len) };
    let operations = (0..merge_count)
        .map(|step| {
            let (left, right) = merge_endpoints(second_shape, len, step, rng);
            Operation::Merge(element(left), element(right))
        })
        .collect();
    let second = Workload {
        initial_len: len,
        operations,
        shape: second_shape,
    };
    (first, second)
}

fn merge_endpoints(
    shape: MergeShape,
    len: usize,
    step: usize,
    rng: &mut SmallRng,
) -> (usize, usize) {
    match shape {
        MergeShape::Uniform => (rng.gen_range(0..len), rng.gen_range(0..len)),
        MergeShape::Chain => {
            let left = step % len;
            (left, (left + 1) % len)
        }
        MergeShape::Star => (0, rng.gen_range(0..len)),
        MergeShape::Clustered => {
            let left = rng.gen_range(0..len);
            let block_start = left - left % CLUSTER_WIDTH;
            let block_end = (block_start + CLUSTER_WIDTH).min(len);
            (left, rng.gen_range(block_start..block_end))
        }
    }
}

fn element(slot: usize) -> u16 {
    u16::try_from(slot).expect("generated universes stay far below u16::MAX")
}
