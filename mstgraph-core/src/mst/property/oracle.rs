//! Exhaustive spanning-tree oracle.
//!
//! Enumerates every `(V - 1)`-edge subset of a small complete graph, keeps
//! the acyclic ones (which are exactly the spanning trees), and reports the
//! lightest and heaviest totals. Only usable for tiny graphs: `K6` already has
//! 5005 candidate subsets.

use crate::{CompleteGraph, Edge, VertexId};

/// Totals observed across every spanning tree of a graph.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(super) struct TreeBounds {
    /// Smallest total weight of any spanning tree.
    pub minimum: f64,
    /// Largest total weight of any spanning tree.
    pub maximum: f64,
    /// Number of distinct spanning trees.
    pub tree_count: usize,
}

/// Enumerates every spanning tree of `graph`.
pub(super) fn enumerate_spanning_trees(graph: &CompleteGraph) -> TreeBounds {
    let handles: Vec<VertexId> = graph.vertices().iter().map(|v| v.id()).collect();
    if handles.len() <= 1 {
        return TreeBounds {
            minimum: 0.0,
            maximum: 0.0,
            tree_count: 1,
        };
    }

    let edges = graph.edges();
    let size = handles.len() - 1;
    let mut bounds = TreeBounds {
        minimum: f64::INFINITY,
        maximum: f64::NEG_INFINITY,
        tree_count: 0,
    };

    for mask in 0_u32..(1_u32 << edges.len()) {
        if mask.count_ones() as usize != size {
            continue;
        }
        let chosen: Vec<&Edge> = edges
            .iter()
            .enumerate()
            .filter(|(bit, _)| mask & (1_u32 << bit) != 0)
            .map(|(_, edge)| edge)
            .collect();
        if !is_acyclic(&handles, &chosen) {
            continue;
        }
        let total: f64 = chosen.iter().map(|edge| edge.weight()).sum();
        bounds.minimum = bounds.minimum.min(total);
        bounds.maximum = bounds.maximum.max(total);
        bounds.tree_count += 1;
    }

    bounds
}

/// Plain union-find acyclicity check, independent of the crate's
/// [`crate::DisjointSet`].
pub(super) fn is_acyclic(handles: &[VertexId], edges: &[&Edge]) -> bool {
    let mut parent: Vec<usize> = (0..handles.len()).collect();
    for edge in edges {
        let (Some(source), Some(target)) = (
            handles.iter().position(|h| *h == edge.source()),
            handles.iter().position(|h| *h == edge.target()),
        ) else {
            return false;
        };
        let source_root = find_root(&mut parent, source);
        let target_root = find_root(&mut parent, target);
        if source_root == target_root {
            return false;
        }
        parent[target_root] = source_root;
    }
    true
}

fn find_root(parent: &mut [usize], mut node: usize) -> usize {
    while parent[node] != node {
        parent[node] = parent[parent[node]];
        node = parent[node];
    }
    node
}

/// Relative floating-point comparison for summed weights.
pub(super) fn approx_eq(left: f64, right: f64) -> bool {
    (left - right).abs() <= 1e-9 * (1.0 + left.abs().max(right.abs()))
}
