//! Complete Euclidean graph over a small set of planar vertices.
//!
//! [`CompleteGraph`] owns every vertex and derives one edge per unordered
//! vertex pair, weighted by Euclidean distance. The edge set is never patched:
//! each structural or positional mutation replaces it wholesale by enumerating
//! pairs `(i, j)` with `i < j` over the current storage order. That order is
//! what spanning-tree construction uses to break weight ties.

mod types;

use tracing::trace;

use crate::{GraphError, Result};

pub use self::types::{Edge, Point, Vertex, VertexId, VertexLabel};

/// Authoritative vertex arena plus its derived complete edge set.
///
/// # Examples
/// ```
/// use mstgraph_core::{CompleteGraph, Point, VertexLabel};
///
/// let mut graph = CompleteGraph::new();
/// graph.add_vertex(VertexLabel::new(1), Point::new(0.0, 0.0));
/// graph.add_vertex(VertexLabel::new(2), Point::new(3.0, 4.0));
/// assert_eq!(graph.edges().len(), 1);
/// assert!((graph.edges()[0].weight() - 5.0).abs() < 1e-12);
/// ```
#[derive(Clone, Debug, Default)]
pub struct CompleteGraph {
    vertices: Vec<Vertex>,
    edges: Vec<Edge>,
    next_id: u64,
}

impl CompleteGraph {
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a vertex with a fresh handle and regenerates all edges.
    pub fn add_vertex(&mut self, label: VertexLabel, position: Point) -> VertexId {
        let id = self.push_vertex(label, position);
        self.regenerate_edges();
        id
    }

    /// Inserts several vertices, regenerating the edge set once afterwards.
    ///
    /// Handles are returned in insertion order.
    pub fn add_vertices(
        &mut self,
        vertices: impl IntoIterator<Item = (VertexLabel, Point)>,
    ) -> Vec<VertexId> {
        let ids = vertices
            .into_iter()
            .map(|(label, position)| self.push_vertex(label, position))
            .collect();
        self.regenerate_edges();
        ids
    }

    /// Replaces every vertex with `vertices`, regenerating the edge set once.
    ///
    /// Handles keep counting upwards, so handles issued before the call never
    /// resolve to the new vertices.
    pub fn replace_vertices(
        &mut self,
        vertices: impl IntoIterator<Item = (VertexLabel, Point)>,
    ) -> Vec<VertexId> {
        self.vertices.clear();
        self.add_vertices(vertices)
    }

    /// Removes the vertex identified by `handle` and every edge touching it.
    ///
    /// Absent handles are ignored: the graph is left untouched and `None` is
    /// returned.
    pub fn remove_vertex(&mut self, handle: VertexId) -> Option<Vertex> {
        let index = self.index_of(handle)?;
        let removed = self.vertices.remove(index);
        self.regenerate_edges();
        Some(removed)
    }

    /// Moves the vertex identified by `handle` to `position`.
    ///
    /// # Errors
    /// Returns [`GraphError::UnknownVertex`] when `handle` does not refer to a
    /// live vertex. The graph is unchanged in that case.
    pub fn move_vertex(&mut self, handle: VertexId, position: Point) -> Result<()> {
        let vertex = self
            .vertices
            .iter_mut()
            .find(|vertex| vertex.id == handle)
            .ok_or(GraphError::UnknownVertex { handle })?;
        vertex.position = position;
        self.regenerate_edges();
        Ok(())
    }

    /// Reassigns labels to `1..=N`, ordered by each vertex's current label.
    ///
    /// Vertices sharing a label keep their relative storage order. Storage is
    /// rewritten in the new label order, and handles are left untouched.
    ///
    /// # Examples
    /// ```
    /// use mstgraph_core::{CompleteGraph, Point, VertexLabel};
    ///
    /// let mut graph = CompleteGraph::new();
    /// let first = graph.add_vertex(VertexLabel::new(1), Point::new(0.0, 0.0));
    /// graph.add_vertex(VertexLabel::new(2), Point::new(1.0, 0.0));
    /// graph.add_vertex(VertexLabel::new(3), Point::new(2.0, 0.0));
    /// graph.remove_vertex(first);
    /// graph.renumber();
    ///
    /// let labels: Vec<usize> = graph.vertices().iter().map(|v| v.label().get()).collect();
    /// assert_eq!(labels, vec![1, 2]);
    /// ```
    pub fn renumber(&mut self) {
        self.vertices.sort_by_key(|vertex| vertex.label);
        for (label, vertex) in (1..).zip(self.vertices.iter_mut()) {
            vertex.label = VertexLabel::new(label);
        }
        self.regenerate_edges();
    }

    /// Drops every vertex and edge.
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.regenerate_edges();
    }

    /// Returns the vertices in storage order.
    #[must_use]
    #[rustfmt::skip]
    pub fn vertices(&self) -> &[Vertex] { &self.vertices }

    /// Returns the derived edges in enumeration order.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[Edge] { &self.edges }

    /// Looks up a vertex by handle.
    #[must_use]
    pub fn vertex(&self, handle: VertexId) -> Option<&Vertex> {
        self.vertices.iter().find(|vertex| vertex.id == handle)
    }

    /// Looks up the first vertex carrying `label`.
    #[must_use]
    pub fn vertex_by_label(&self, label: VertexLabel) -> Option<&Vertex> {
        self.vertices.iter().find(|vertex| vertex.label == label)
    }

    /// Returns `true` when `handle` refers to a live vertex.
    #[must_use]
    pub fn contains(&self, handle: VertexId) -> bool {
        self.index_of(handle).is_some()
    }

    /// Returns the first vertex, in storage order, strictly closer than
    /// `radius` to `point`.
    #[must_use]
    pub fn vertex_at(&self, point: Point, radius: f64) -> Option<&Vertex> {
        self.vertices
            .iter()
            .find(|vertex| vertex.position.distance(point) < radius)
    }

    /// Returns the number of vertices.
    #[must_use]
    #[rustfmt::skip]
    pub fn len(&self) -> usize { self.vertices.len() }

    /// Returns `true` when the graph holds no vertices.
    #[must_use]
    #[rustfmt::skip]
    pub fn is_empty(&self) -> bool { self.vertices.is_empty() }

    fn push_vertex(&mut self, label: VertexLabel, position: Point) -> VertexId {
        let id = VertexId::new(self.next_id);
        self.next_id = self.next_id.saturating_add(1);
        self.vertices.push(Vertex {
            id,
            label,
            position,
        });
        id
    }

    fn index_of(&self, handle: VertexId) -> Option<usize> {
        self.vertices.iter().position(|vertex| vertex.id == handle)
    }

    fn regenerate_edges(&mut self) {
        let mut edges = Vec::new();
        for (offset, left) in self.vertices.iter().enumerate() {
            for right in self.vertices.iter().skip(offset + 1) {
                edges.push(Edge::between(left, right));
            }
        }
        self.edges = edges;
        trace!(
            vertices = self.vertices.len(),
            edges = self.edges.len(),
            "regenerated complete edge set"
        );
    }
}
