//! Degree-based structure of the graph
//!
//! Isolated-node detection and degree summary.

use super::common::{GraphView, NodeId};

/// Summary of the degree distribution
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DegreeStats {
    pub node_count: usize,
    pub edge_count: usize,
    pub isolated_count: usize,
    pub max_degree: usize,
    pub mean_degree: f64,
}

/// Nodes with no incident edge, ascending by NodeId.
pub fn isolated_nodes(view: &GraphView) -> Vec<NodeId> {
    (0..view.node_count)
        .filter(|&idx| view.degree(idx) == 0)
        .map(|idx| view.node_at(idx))
        .collect()
}

pub fn degree_stats(view: &GraphView) -> DegreeStats {
    let mut isolated_count = 0;
    let mut max_degree = 0;
    for idx in 0..view.node_count {
        let degree = view.degree(idx);
        if degree == 0 {
            isolated_count += 1;
        }
        max_degree = max_degree.max(degree);
    }

    let mean_degree = if view.node_count == 0 {
        0.0
    } else {
        view.neighbors.len() as f64 / view.node_count as f64
    };

    DegreeStats {
        node_count: view.node_count,
        edge_count: view.edge_count(),
        isolated_count,
        max_degree,
        mean_degree,
    }
}
