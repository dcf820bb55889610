//! Benchmark parameter types.

use std::fmt;

use mstgraph_core::Direction;

/// Parameters for one spanning-tree benchmark run.
#[derive(Clone, Copy, Debug)]
pub struct TreeBenchParams {
    /// Number of vertices in the complete graph.
    pub vertex_count: usize,
    /// Tree direction.
    pub direction: Direction,
}

impl fmt::Display for TreeBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},{}", self.vertex_count, self.direction)
    }
}
