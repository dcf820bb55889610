//! Spanning-tree construction with Kruskal's algorithm.
//!
//! Edges are stably sorted by weight (ascending to minimise, descending to
//! maximise) so equal weights keep the graph's enumeration order, then
//! accepted whenever their endpoints still sit in different components of a
//! [`DisjointSet`]. The tree is always rebuilt from scratch.

mod disjoint_set;

use std::{cmp::Ordering, fmt};

use tracing::{field, instrument};

use crate::{CompleteGraph, Edge, Result, VertexId};

pub use self::disjoint_set::DisjointSet;

/// Whether a spanning tree minimises or maximises its total weight.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum Direction {
    /// Build a minimum spanning tree.
    #[default]
    Minimize,
    /// Build a maximum spanning tree.
    Maximize,
}

impl Direction {
    /// Returns the opposite direction.
    ///
    /// # Examples
    /// ```
    /// use mstgraph_core::Direction;
    ///
    /// assert_eq!(Direction::Minimize.toggled(), Direction::Maximize);
    /// assert_eq!(Direction::Maximize.toggled(), Direction::Minimize);
    /// ```
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Minimize => Self::Maximize,
            Self::Maximize => Self::Minimize,
        }
    }

    /// Returns the symbolic identifier used in logs and rendered output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Minimize => "minimize",
            Self::Maximize => "maximize",
        }
    }

    fn order(self, left: f64, right: f64) -> Ordering {
        match self {
            Self::Minimize => left.total_cmp(&right),
            Self::Maximize => right.total_cmp(&left),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The output of a spanning-tree build: accepted edges in acceptance order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SpanningTree {
    edges: Vec<Edge>,
    direction: Direction,
}

impl SpanningTree {
    /// Returns the tree edges in the order Kruskal accepted them.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[Edge] { &self.edges }

    /// Returns the direction the tree was built for.
    #[must_use]
    #[rustfmt::skip]
    pub const fn direction(&self) -> Direction { self.direction }

    /// Returns the number of tree edges.
    #[must_use]
    #[rustfmt::skip]
    pub fn len(&self) -> usize { self.edges.len() }

    /// Returns `true` when the tree has no edges.
    #[must_use]
    #[rustfmt::skip]
    pub fn is_empty(&self) -> bool { self.edges.is_empty() }

    /// Returns the sum of the tree's edge weights.
    #[must_use]
    pub fn total_weight(&self) -> f64 {
        self.edges.iter().map(Edge::weight).sum()
    }

    /// Returns `true` when the tree contains an edge joining `a` and `b`.
    #[must_use]
    pub fn contains(&self, a: VertexId, b: VertexId) -> bool {
        self.edges.iter().any(|edge| edge.connects(a, b))
    }
}

/// Runs Kruskal's algorithm in a fixed [`Direction`].
///
/// # Examples
/// ```
/// use mstgraph_core::{CompleteGraph, Direction, Point, SpanningTreeBuilder, VertexLabel};
///
/// let mut graph = CompleteGraph::new();
/// graph.add_vertex(VertexLabel::new(1), Point::new(0.0, 0.0));
/// graph.add_vertex(VertexLabel::new(2), Point::new(10.0, 0.0));
/// graph.add_vertex(VertexLabel::new(3), Point::new(10.0, 10.0));
///
/// let tree = SpanningTreeBuilder::new(Direction::Minimize).build(&graph)?;
/// assert_eq!(tree.len(), 2);
/// assert!((tree.total_weight() - 20.0).abs() < 1e-9);
/// # Ok::<(), mstgraph_core::GraphError>(())
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct SpanningTreeBuilder {
    direction: Direction,
}

impl SpanningTreeBuilder {
    /// Creates a builder for `direction`.
    #[must_use]
    pub const fn new(direction: Direction) -> Self {
        Self { direction }
    }

    /// Returns the configured direction.
    #[must_use]
    #[rustfmt::skip]
    pub const fn direction(&self) -> Direction { self.direction }

    /// Builds a spanning tree over `graph`.
    ///
    /// # Errors
    /// Propagates [`crate::GraphError::UnknownVertex`] from the disjoint set;
    /// a consistent [`CompleteGraph`] never triggers it.
    pub fn build(&self, graph: &CompleteGraph) -> Result<SpanningTree> {
        self.build_from_parts(
            graph.vertices().iter().map(|vertex| vertex.id()),
            graph.edges(),
        )
    }

    /// Builds a spanning tree (or forest, for disconnected inputs) from raw
    /// vertex handles and an edge list given in enumeration order.
    ///
    /// Construction stops once `V - 1` edges are accepted or the edge list is
    /// exhausted.
    ///
    /// # Errors
    /// Returns [`crate::GraphError::UnknownVertex`] when an edge references a
    /// handle missing from `vertices`.
    #[instrument(
        name = "mst.build",
        err,
        skip(self, vertices, edges),
        fields(
            direction = %self.direction,
            edges = edges.len(),
            vertices = field::Empty,
            tree_edges = field::Empty,
            total_weight = field::Empty,
        ),
    )]
    pub fn build_from_parts(
        &self,
        vertices: impl IntoIterator<Item = VertexId>,
        edges: &[Edge],
    ) -> Result<SpanningTree> {
        let mut components = DisjointSet::new(vertices);
        let span = tracing::Span::current();
        span.record("vertices", components.len());

        let target = components.len().saturating_sub(1);
        let mut ordered: Vec<&Edge> = edges.iter().collect();
        ordered.sort_by(|left, right| self.direction.order(left.weight(), right.weight()));

        let mut accepted = Vec::with_capacity(target);
        for edge in ordered {
            if accepted.len() == target {
                break;
            }
            if components.find(edge.source())? != components.find(edge.target())? {
                components.union(edge.source(), edge.target())?;
                accepted.push(*edge);
            }
        }

        let tree = SpanningTree {
            edges: accepted,
            direction: self.direction,
        };
        span.record("tree_edges", tree.len());
        span.record("total_weight", tree.total_weight());
        Ok(tree)
    }
}

#[cfg(test)]
mod property;
