//! Value types shared by the graph, spanning-tree, and session layers.

use std::fmt;

/// Stable internal handle for a vertex.
///
/// Handles are allocated monotonically by [`crate::CompleteGraph`] and are never
/// reused, so a handle retained across a removal can only ever refer to the
/// vertex it was issued for.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct VertexId(u64);

impl VertexId {
    /// Wraps a raw handle value.
    ///
    /// # Examples
    /// ```
    /// use mstgraph_core::VertexId;
    ///
    /// assert_eq!(VertexId::new(7).get(), 7);
    /// ```
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw handle value.
    #[must_use]
    #[rustfmt::skip]
    pub const fn get(self) -> u64 { self.0 }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// User-visible vertex label.
///
/// Labels are positive integers rendered as decimal strings. Unlike
/// [`VertexId`], a label may change whenever the graph is renumbered.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct VertexLabel(usize);

impl VertexLabel {
    /// Wraps a numeric label.
    #[must_use]
    pub const fn new(value: usize) -> Self {
        Self(value)
    }

    /// Returns the numeric label.
    #[must_use]
    #[rustfmt::skip]
    pub const fn get(self) -> usize { self.0 }
}

impl fmt::Display for VertexLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A position on the plane.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl Point {
    /// Creates a point from its coordinates.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    ///
    /// # Examples
    /// ```
    /// use mstgraph_core::Point;
    ///
    /// let distance = Point::new(0.0, 0.0).distance(Point::new(3.0, 4.0));
    /// assert!((distance - 5.0).abs() < f64::EPSILON);
    /// ```
    #[must_use]
    pub fn distance(self, other: Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// A vertex owned by a [`crate::CompleteGraph`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vertex {
    pub(crate) id: VertexId,
    pub(crate) label: VertexLabel,
    pub(crate) position: Point,
}

impl Vertex {
    /// Returns the stable handle.
    #[must_use]
    #[rustfmt::skip]
    pub const fn id(&self) -> VertexId { self.id }

    /// Returns the current display label.
    #[must_use]
    #[rustfmt::skip]
    pub const fn label(&self) -> VertexLabel { self.label }

    /// Returns the current position.
    #[must_use]
    #[rustfmt::skip]
    pub const fn position(&self) -> Point { self.position }
}

/// An undirected weighted edge between two vertices.
///
/// `source` is the endpoint stored first in the graph's vertex ordering.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge {
    source: VertexId,
    target: VertexId,
    weight: f64,
}

impl Edge {
    /// Creates an edge from its endpoints and weight.
    #[must_use]
    pub const fn new(source: VertexId, target: VertexId, weight: f64) -> Self {
        Self {
            source,
            target,
            weight,
        }
    }

    pub(crate) fn between(left: &Vertex, right: &Vertex) -> Self {
        Self::new(left.id, right.id, left.position.distance(right.position))
    }

    /// Returns the first endpoint.
    #[must_use]
    #[rustfmt::skip]
    pub const fn source(&self) -> VertexId { self.source }

    /// Returns the second endpoint.
    #[must_use]
    #[rustfmt::skip]
    pub const fn target(&self) -> VertexId { self.target }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> f64 { self.weight }

    /// Returns `true` when the edge joins `a` and `b` in either orientation.
    #[must_use]
    pub fn connects(&self, a: VertexId, b: VertexId) -> bool {
        (self.source == a && self.target == b) || (self.source == b && self.target == a)
    }
}
