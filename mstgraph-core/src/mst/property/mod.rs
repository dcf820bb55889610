//! Property-based tests for Kruskal spanning-tree construction.
//!
//! Checks the builder against a brute-force enumeration of every spanning
//! tree for small graphs, validates structural invariants (edge count,
//! acyclicity, coverage) on larger ones, and confirms that rebuilding the
//! same graph is deterministic.

mod oracle;
mod strategies;
mod structural;
mod types;
