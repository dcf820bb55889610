//! Seeded inputs for benchmarks.

use mstgraph_core::{
    CompleteGraph, GraphSession, Point, Result, SessionBuilder, VertexLabel,
};
use rand::{Rng, SeedableRng, rngs::SmallRng};

/// Side length of the square that random vertices are drawn from.
pub const EXTENT: f64 = 1_000.0;

/// Builds a complete graph over `vertex_count` points drawn uniformly from
/// `[0, EXTENT)²` with a fixed seed.
#[must_use]
pub fn seeded_graph(vertex_count: usize, seed: u64) -> CompleteGraph {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut graph = CompleteGraph::new();
    graph.add_vertices((1..=vertex_count).map(|label| {
        let x = rng.gen_range(0.0..EXTENT);
        let y = rng.gen_range(0.0..EXTENT);
        (VertexLabel::new(label), Point::new(x, y))
    }));
    graph
}

/// Builds a seeded session with `vertex_count` random vertices.
///
/// # Errors
/// Propagates [`mstgraph_core::GraphError`] from session construction.
pub fn seeded_session(vertex_count: usize, seed: u64) -> Result<GraphSession> {
    SessionBuilder::new()
        .with_canvas(EXTENT, EXTENT)
        .with_initial_vertices(vertex_count)
        .with_seed(seed)
        .build()
}
