//! Fixture types for spanning-tree property tests.

use crate::{CompleteGraph, Point, VertexId, VertexLabel};

/// How generated vertex positions are laid out.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum PointLayout {
    /// Coordinates drawn from a continuous range; ties are rare.
    Scattered,
    /// Coordinates snapped to a small integer grid, producing many equal
    /// weights and coincident vertices.
    Lattice,
}

/// A generated complete graph plus the layout that produced it.
#[derive(Clone, Debug)]
pub(super) struct GraphFixture {
    /// The generated graph.
    pub graph: CompleteGraph,
    /// Layout used during generation.
    pub layout: PointLayout,
}

impl GraphFixture {
    /// Builds a fixture from raw coordinates, labelling vertices `1..=N`.
    pub(super) fn from_points(points: &[(f64, f64)], layout: PointLayout) -> Self {
        let mut graph = CompleteGraph::new();
        graph.add_vertices(
            (1..)
                .zip(points)
                .map(|(label, &(x, y))| (VertexLabel::new(label), Point::new(x, y))),
        );
        Self { graph, layout }
    }

    /// Returns the vertex handles in storage order.
    pub(super) fn handles(&self) -> Vec<VertexId> {
        self.graph
            .vertices()
            .iter()
            .map(|vertex| vertex.id())
            .collect()
    }
}
