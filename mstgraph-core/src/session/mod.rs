//! Interactive session orchestration.
//!
//! [`GraphSession`] is the single point of mutation. Every operation is
//! staged on a copy of the graph, the spanning tree is rebuilt from that copy,
//! and only then are graph, tree, and direction committed together. Callers
//! therefore never observe regenerated edges paired with a stale tree, and a
//! rejected mutation leaves the session exactly as it was.

use std::fmt;

use rand::{Rng, SeedableRng, rngs::SmallRng};
use tracing::{Span, debug, field, instrument};

use crate::{
    CompleteGraph, Direction, Edge, GraphError, Point, Result, SpanningTree, SpanningTreeBuilder,
    Vertex, VertexId, VertexLabel,
    builder::{Canvas, SessionConfig, ensure_vertex_count},
};

/// Smallest vertex count drawn by [`GraphSession::regenerate_random_count`].
pub const REROLL_MIN_VERTICES: usize = 2;
/// Exclusive upper bound of the count drawn by
/// [`GraphSession::regenerate_random_count`].
pub const REROLL_MAX_VERTICES: usize = 10;

/// Owned, read-only copy of a session's state for rendering.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphSnapshot {
    vertices: Vec<Vertex>,
    edges: Vec<Edge>,
    tree: SpanningTree,
}

impl GraphSnapshot {
    /// Returns the vertices in storage order.
    #[must_use]
    #[rustfmt::skip]
    pub fn vertices(&self) -> &[Vertex] { &self.vertices }

    /// Returns every edge of the complete graph.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[Edge] { &self.edges }

    /// Returns the spanning tree.
    #[must_use]
    #[rustfmt::skip]
    pub const fn spanning_tree(&self) -> &SpanningTree { &self.tree }

    /// Returns the direction the tree was built for.
    #[must_use]
    pub const fn direction(&self) -> Direction {
        self.tree.direction()
    }
}

/// A mutable geometric graph with an always-current spanning tree.
///
/// # Examples
/// ```
/// use mstgraph_core::{Direction, SessionBuilder};
///
/// let mut session = SessionBuilder::new().with_initial_vertices(0).build()?;
/// session.add_vertex(0.0, 0.0)?;
/// let corner = session.add_vertex(10.0, 0.0)?;
/// session.add_vertex(10.0, 10.0)?;
/// assert!((session.spanning_tree().total_weight() - 20.0).abs() < 1e-9);
///
/// session.toggle_direction()?;
/// assert_eq!(session.direction(), Direction::Maximize);
/// assert!((session.spanning_tree().total_weight() - 24.142).abs() < 1e-3);
///
/// session.remove_vertex(corner)?;
/// assert_eq!(session.spanning_tree().len(), 1);
/// # Ok::<(), mstgraph_core::GraphError>(())
/// ```
pub struct GraphSession {
    graph: CompleteGraph,
    tree: SpanningTree,
    direction: Direction,
    config: SessionConfig,
    rng: SmallRng,
}

impl fmt::Debug for GraphSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GraphSession")
            .field("graph", &self.graph)
            .field("tree", &self.tree)
            .field("direction", &self.direction)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl GraphSession {
    #[instrument(
        name = "session.new",
        err,
        skip(config),
        fields(
            initial_vertices = config.initial_vertices,
            direction = %config.initial_direction,
            seeded = config.seed.is_some(),
        ),
    )]
    pub(crate) fn new(config: SessionConfig) -> Result<Self> {
        let rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };
        let mut session = Self {
            graph: CompleteGraph::new(),
            tree: SpanningTree::default(),
            direction: config.initial_direction,
            config,
            rng,
        };
        let placements = session.random_placements(config.initial_vertices);
        session.commit(session.direction, |graph| {
            graph.replace_vertices(placements);
            Ok(())
        })?;
        Ok(session)
    }

    /// Adds a vertex at `(x, y)` labelled one past the current vertex count.
    ///
    /// # Errors
    /// Propagates spanning-tree rebuild failures; the session is unchanged
    /// when one occurs.
    #[instrument(name = "session.add_vertex", err, skip(self))]
    pub fn add_vertex(&mut self, x: f64, y: f64) -> Result<VertexId> {
        let label = VertexLabel::new(self.graph.len() + 1);
        self.commit(self.direction, |graph| {
            Ok(graph.add_vertex(label, Point::new(x, y)))
        })
    }

    /// Removes the vertex identified by `handle` and renumbers the survivors.
    ///
    /// Removing an absent handle is not an error: the graph is untouched and
    /// `None` is returned.
    ///
    /// # Errors
    /// Propagates spanning-tree rebuild failures; the session is unchanged
    /// when one occurs.
    #[instrument(name = "session.remove_vertex", err, skip(self))]
    pub fn remove_vertex(&mut self, handle: VertexId) -> Result<Option<Vertex>> {
        self.commit(self.direction, |graph| {
            let removed = graph.remove_vertex(handle);
            if removed.is_some() {
                graph.renumber();
            } else {
                debug!(%handle, "ignoring removal of absent vertex");
            }
            Ok(removed)
        })
    }

    /// Moves the vertex identified by `handle` to `(x, y)`.
    ///
    /// # Errors
    /// Returns [`GraphError::UnknownVertex`] when `handle` does not refer to a
    /// live vertex; the session is unchanged in that case.
    #[instrument(name = "session.move_vertex", err, skip(self))]
    pub fn move_vertex(&mut self, handle: VertexId, x: f64, y: f64) -> Result<()> {
        self.commit(self.direction, |graph| {
            graph.move_vertex(handle, Point::new(x, y))
        })
    }

    /// Removes every vertex.
    ///
    /// # Errors
    /// Propagates spanning-tree rebuild failures.
    #[instrument(name = "session.clear", err, skip(self))]
    pub fn clear(&mut self) -> Result<()> {
        self.commit(self.direction, |graph| {
            graph.clear();
            Ok(())
        })
    }

    /// Replaces every vertex with `count` randomly placed vertices labelled
    /// `1..=count`.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidConfiguration`] when `count` is zero or
    /// exceeds [`crate::MAX_RANDOM_VERTICES`]; the session is unchanged in
    /// that case.
    #[instrument(name = "session.regenerate_random", err, skip(self))]
    pub fn regenerate_random(&mut self, count: usize) -> Result<()> {
        if count == 0 {
            return Err(GraphError::InvalidConfiguration {
                parameter: "count",
                reason: "must be at least 1",
            });
        }
        ensure_vertex_count("count", count)?;
        let placements = self.random_placements(count);
        self.commit(self.direction, |graph| {
            graph.replace_vertices(placements);
            Ok(())
        })
    }

    /// Regenerates the graph with a random vertex count drawn from
    /// [`REROLL_MIN_VERTICES`]`..`[`REROLL_MAX_VERTICES`], returning the count.
    ///
    /// # Errors
    /// Propagates failures from [`Self::regenerate_random`].
    #[instrument(
        name = "session.regenerate_random_count",
        err,
        skip(self),
        fields(count = field::Empty),
    )]
    pub fn regenerate_random_count(&mut self) -> Result<usize> {
        let count = self
            .rng
            .gen_range(REROLL_MIN_VERTICES..REROLL_MAX_VERTICES);
        Span::current().record("count", count);
        self.regenerate_random(count)?;
        Ok(count)
    }

    /// Flips between minimum and maximum spanning trees and rebuilds.
    ///
    /// Returns the new direction.
    ///
    /// # Errors
    /// Propagates spanning-tree rebuild failures; the direction is unchanged
    /// when one occurs.
    #[instrument(name = "session.toggle_direction", err, skip(self))]
    pub fn toggle_direction(&mut self) -> Result<Direction> {
        let direction = self.direction.toggled();
        self.commit(direction, |_| Ok(()))?;
        Ok(direction)
    }

    /// Updates the canvas used for future random placement.
    ///
    /// Existing vertices keep their positions.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidConfiguration`] unless both dimensions are
    /// finite and positive.
    #[instrument(name = "session.resize", err, skip(self))]
    pub fn resize(&mut self, width: f64, height: f64) -> Result<()> {
        self.config.canvas = Canvas::new(width, height)?;
        debug!(width, height, "canvas resized");
        Ok(())
    }

    /// Returns the first vertex strictly within the pick radius of `(x, y)`.
    #[must_use]
    pub fn vertex_at(&self, x: f64, y: f64) -> Option<VertexId> {
        self.graph
            .vertex_at(Point::new(x, y), self.config.pick_radius)
            .map(Vertex::id)
    }

    /// Returns the vertex currently carrying `label`.
    #[must_use]
    pub fn vertex_by_label(&self, label: VertexLabel) -> Option<VertexId> {
        self.graph.vertex_by_label(label).map(Vertex::id)
    }

    /// Returns the vertices in storage order.
    #[must_use]
    pub fn vertices(&self) -> &[Vertex] {
        self.graph.vertices()
    }

    /// Returns every edge of the complete graph.
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        self.graph.edges()
    }

    /// Returns the current spanning tree.
    #[must_use]
    #[rustfmt::skip]
    pub const fn spanning_tree(&self) -> &SpanningTree { &self.tree }

    /// Returns the underlying graph.
    #[must_use]
    #[rustfmt::skip]
    pub const fn graph(&self) -> &CompleteGraph { &self.graph }

    /// Returns the current direction.
    #[must_use]
    #[rustfmt::skip]
    pub const fn direction(&self) -> Direction { self.direction }

    /// Returns the session configuration.
    #[must_use]
    #[rustfmt::skip]
    pub const fn config(&self) -> &SessionConfig { &self.config }

    /// Copies the current vertices, edges, and tree.
    #[must_use]
    pub fn snapshot(&self) -> GraphSnapshot {
        GraphSnapshot {
            vertices: self.graph.vertices().to_vec(),
            edges: self.graph.edges().to_vec(),
            tree: self.tree.clone(),
        }
    }

    fn random_placements(&mut self, count: usize) -> Vec<(VertexLabel, Point)> {
        let canvas = self.config.canvas;
        (1..=count)
            .map(|label| {
                let x = self.rng.gen_range(canvas.x_range());
                let y = self.rng.gen_range(canvas.y_range());
                (VertexLabel::new(label), Point::new(x, y))
            })
            .collect()
    }

    fn commit<T>(
        &mut self,
        direction: Direction,
        mutation: impl FnOnce(&mut CompleteGraph) -> Result<T>,
    ) -> Result<T> {
        let mut staged = self.graph.clone();
        let outcome = mutation(&mut staged)?;
        let tree = SpanningTreeBuilder::new(direction).build(&staged)?;
        debug!(
            vertices = staged.len(),
            tree_edges = tree.len(),
            total_weight = tree.total_weight(),
            %direction,
            "spanning tree rebuilt"
        );
        self.graph = staged;
        self.tree = tree;
        self.direction = direction;
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests;
