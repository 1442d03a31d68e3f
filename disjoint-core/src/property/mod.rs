//! Property-based tests for the disjoint set and partition joins.
//!
//! Runs randomised merge/grow/find workloads against a naive relabelling
//! oracle, checks the rank and class-count invariants after every workload,
//! and verifies the lattice laws of [`crate::join`].

mod oracle;
mod strategies;
mod types;
