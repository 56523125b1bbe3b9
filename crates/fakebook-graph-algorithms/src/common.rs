//! Shared utilities for graph algorithms
//!
//! Provides a read-only, dense view of an undirected graph for algorithm execution.

use std::collections::HashMap;

/// Node Identifier type (u64)
pub type NodeId = u64;

/// A dense, integer-indexed view of an undirected graph in Compressed Sparse Row (CSR) format.
///
/// Dense indices are assigned in ascending `NodeId` order, so comparing two
/// indices gives the same answer as comparing the ids behind them. Every
/// undirected edge is materialised in both rows.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GraphView {
    /// Number of nodes
    pub node_count: usize,
    /// Mapping from dense index (0..N) back to NodeId
    pub index_to_node: Vec<NodeId>,
    /// Mapping from NodeId to dense index
    pub node_to_index: HashMap<NodeId, usize>,
    /// Offsets into `neighbors`. Size = node_count + 1
    pub offsets: Vec<usize>,
    /// Contiguous array of neighbour indices, sorted within each row
    pub neighbors: Vec<usize>,
}

impl GraphView {
    /// Build a view over `nodes` from a list of undirected edges.
    ///
    /// Edges touching a node outside `nodes`, self-loops and repeated edges
    /// are ignored.
    pub fn from_edges<I>(nodes: I, edges: &[(NodeId, NodeId)]) -> Self
    where
        I: IntoIterator<Item = NodeId>,
    {
        let mut index_to_node: Vec<NodeId> = nodes.into_iter().collect();
        index_to_node.sort_unstable();
        index_to_node.dedup();

        let node_count = index_to_node.len();
        let node_to_index: HashMap<NodeId, usize> = index_to_node
            .iter()
            .enumerate()
            .map(|(idx, &node)| (node, idx))
            .collect();

        let mut adjacency: Vec<Vec<usize>> = vec![Vec::new(); node_count];
        for &(a, b) in edges {
            if let (Some(&u), Some(&v)) = (node_to_index.get(&a), node_to_index.get(&b)) {
                if u == v {
                    continue;
                }
                adjacency[u].push(v);
                adjacency[v].push(u);
            }
        }

        let mut offsets = Vec::with_capacity(node_count + 1);
        let mut neighbors = Vec::with_capacity(edges.len() * 2);

        // Flatten
        offsets.push(0);
        for mut row in adjacency {
            row.sort_unstable();
            row.dedup();
            neighbors.extend(row);
            offsets.push(neighbors.len());
        }

        GraphView {
            node_count,
            index_to_node,
            node_to_index,
            offsets,
            neighbors,
        }
    }

    /// Get the degree of a node (by index)
    pub fn degree(&self, idx: usize) -> usize {
        self.offsets[idx + 1] - self.offsets[idx]
    }

    /// Get the neighbours of a node, ascending by index
    pub fn neighbors(&self, idx: usize) -> &[usize] {
        let start = self.offsets[idx];
        let end = self.offsets[idx + 1];
        &self.neighbors[start..end]
    }

    pub fn index_of(&self, node: NodeId) -> Option<usize> {
        self.node_to_index.get(&node).copied()
    }

    pub fn node_at(&self, idx: usize) -> NodeId {
        self.index_to_node[idx]
    }

    /// Whether `u` and `v` share an edge (binary search on the sorted row)
    pub fn are_adjacent(&self, u: usize, v: usize) -> bool {
        self.neighbors(u).binary_search(&v).is_ok()
    }

    /// Number of undirected edges
    pub fn edge_count(&self) -> usize {
        self.neighbors.len() / 2
    }
}
