//! Benchmark support crate for disjoint.
//!
//! Provides seeded merge workloads and parameter types used by the Criterion
//! benchmarks for union-find merges, lookups, and partition joins.

pub mod error;
pub mod params;
pub mod workload;
