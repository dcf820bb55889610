//! mstgraph core library.
//!
//! Maintains a small planar graph whose vertices can be added, moved, and
//! removed interactively, and keeps a minimum (or maximum) spanning tree of
//! the complete Euclidean graph over those vertices current after every
//! mutation.
//!
//! The layers, leaves first:
//!
//! - [`DisjointSet`]: union-find over vertex handles with path compression
//!   and union by rank.
//! - [`CompleteGraph`]: vertex arena plus the derived complete edge set,
//!   regenerated wholesale on every mutation.
//! - [`SpanningTreeBuilder`]: Kruskal's algorithm with stable tie-breaking by
//!   edge enumeration order.
//! - [`GraphSession`]: the single point of mutation, rebuilding the tree
//!   before each call returns. [`SharedSession`] serialises access across
//!   threads.
//!
//! Vertex handles ([`VertexId`]) are stable for a vertex's lifetime; display
//! labels ([`VertexLabel`]) are renumbered to stay contiguous after removals.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod builder;
mod error;
mod graph;
mod mst;
mod session;
mod shared;
#[cfg(test)]
mod test_utils;

pub use crate::{
    builder::{
        Canvas, DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH, DEFAULT_INITIAL_VERTICES,
        DEFAULT_PICK_RADIUS, MAX_RANDOM_VERTICES, SessionBuilder, SessionConfig,
    },
    error::{GraphError, GraphErrorCode, Result},
    graph::{CompleteGraph, Edge, Point, Vertex, VertexId, VertexLabel},
    mst::{Direction, DisjointSet, SpanningTree, SpanningTreeBuilder},
    session::{GraphSession, GraphSnapshot, REROLL_MAX_VERTICES, REROLL_MIN_VERTICES},
    shared::SharedSession,
};
