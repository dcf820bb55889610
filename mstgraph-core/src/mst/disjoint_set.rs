//! Union-find over vertex handles.
//!
//! Handles are mapped to dense slots on construction so the parent and rank
//! tables stay flat vectors. `find` compresses paths in two passes and
//! `union` merges by rank, keeping both operations near-constant amortised.

use std::collections::HashMap;

use crate::{GraphError, Result, VertexId};

/// Disjoint-set forest keyed by [`VertexId`].
///
/// # Examples
/// ```
/// use mstgraph_core::{DisjointSet, VertexId};
///
/// let (a, b, c) = (VertexId::new(0), VertexId::new(1), VertexId::new(2));
/// let mut set = DisjointSet::new([a, b, c]);
/// assert!(set.union(a, b)?);
/// assert!(set.same(a, b)?);
/// assert!(!set.same(a, c)?);
/// assert_eq!(set.component_count(), 2);
/// # Ok::<(), mstgraph_core::GraphError>(())
/// ```
#[derive(Clone, Debug)]
pub struct DisjointSet {
    slots: HashMap<VertexId, usize>,
    handles: Vec<VertexId>,
    parent: Vec<usize>,
    rank: Vec<u8>,
    components: usize,
}

impl DisjointSet {
    /// Creates a singleton component for each distinct handle.
    ///
    /// Repeated handles are registered once.
    pub fn new(handles: impl IntoIterator<Item = VertexId>) -> Self {
        let mut slots = HashMap::new();
        let mut registered = Vec::new();
        for handle in handles {
            slots.entry(handle).or_insert_with(|| {
                registered.push(handle);
                registered.len() - 1
            });
        }
        let count = registered.len();
        Self {
            slots,
            handles: registered,
            parent: (0..count).collect(),
            rank: vec![0; count],
            components: count,
        }
    }

    /// Returns the representative of the component containing `handle`.
    ///
    /// # Errors
    /// Returns [`GraphError::UnknownVertex`] if `handle` was never registered.
    pub fn find(&mut self, handle: VertexId) -> Result<VertexId> {
        let slot = self.slot(handle)?;
        let root = self.root(slot);
        Ok(self.handles[root])
    }

    /// Merges the components containing `left` and `right`.
    ///
    /// The lower-rank root is attached beneath the higher-rank root. When the
    /// ranks are equal the root of `right` becomes the new root and its rank
    /// grows by one. Returns `false` when both handles already share a
    /// component.
    ///
    /// # Errors
    /// Returns [`GraphError::UnknownVertex`] if either handle was never
    /// registered.
    pub fn union(&mut self, left: VertexId, right: VertexId) -> Result<bool> {
        let left_slot = self.slot(left)?;
        let right_slot = self.slot(right)?;
        let left_root = self.root(left_slot);
        let right_root = self.root(right_slot);
        if left_root == right_root {
            return Ok(false);
        }

        let left_rank = self.rank[left_root];
        let right_rank = self.rank[right_root];
        let (parent, child) = if left_rank > right_rank {
            (left_root, right_root)
        } else {
            (right_root, left_root)
        };
        self.parent[child] = parent;
        if left_rank == right_rank {
            self.rank[parent] = right_rank.saturating_add(1);
        }
        self.components -= 1;
        Ok(true)
    }

    /// Returns `true` when both handles share a component.
    ///
    /// # Errors
    /// Returns [`GraphError::UnknownVertex`] if either handle was never
    /// registered.
    pub fn same(&mut self, left: VertexId, right: VertexId) -> Result<bool> {
        Ok(self.find(left)? == self.find(right)?)
    }

    /// Returns the current number of disjoint components.
    #[must_use]
    #[rustfmt::skip]
    pub fn component_count(&self) -> usize { self.components }

    /// Returns the number of registered handles.
    #[must_use]
    #[rustfmt::skip]
    pub fn len(&self) -> usize { self.handles.len() }

    /// Returns `true` when no handles are registered.
    #[must_use]
    #[rustfmt::skip]
    pub fn is_empty(&self) -> bool { self.handles.is_empty() }

    #[cfg(test)]
    pub(crate) fn rank_of(&self, handle: VertexId) -> Option<u8> {
        self.slots.get(&handle).map(|&slot| self.rank[slot])
    }

    fn slot(&self, handle: VertexId) -> Result<usize> {
        self.slots
            .get(&handle)
            .copied()
            .ok_or(GraphError::UnknownVertex { handle })
    }

    fn root(&mut self, slot: usize) -> usize {
        let mut root = slot;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut node = slot;
        while self.parent[node] != node {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }

        root
    }
}
