//! Benchmark support for mstgraph.
//!
//! Seeded graph and session generators shared by the Criterion benchmarks
//! for spanning-tree construction and interactive session mutation.

pub mod params;
pub mod source;
