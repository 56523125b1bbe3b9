//! Graph topology analysis algorithms
//!
//! Common-neighbour enumeration over non-adjacent node pairs.

use super::common::{GraphView, NodeId};
use std::collections::HashMap;

/// A non-adjacent pair `(first, second)`, `first < second`, together with
/// every node adjacent to both.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CommonNeighbors {
    pub first: NodeId,
    pub second: NodeId,
    /// Shared neighbours, ascending
    pub shared: Vec<NodeId>,
}

/// Enumerate every non-adjacent pair with at least one common neighbour.
///
/// Works wedge by wedge: each node `w` contributes itself to every pair of
/// its own neighbours. Visiting `w` in ascending index order keeps each
/// `shared` list sorted without a final sort. Cost is the sum of squared
/// degrees. The returned pairs are in no particular order.
pub fn common_neighbor_pairs(view: &GraphView) -> Vec<CommonNeighbors> {
    let mut wedges: HashMap<(usize, usize), Vec<usize>> = HashMap::new();

    for w in 0..view.node_count {
        let row = view.neighbors(w);
        for (i, &u) in row.iter().enumerate() {
            for &v in &row[i + 1..] {
                // Rows are sorted, so u < v here
                wedges.entry((u, v)).or_default().push(w);
            }
        }
    }

    wedges
        .into_iter()
        .filter(|&((u, v), _)| !view.are_adjacent(u, v))
        .map(|((u, v), shared)| CommonNeighbors {
            first: view.node_at(u),
            second: view.node_at(v),
            shared: shared.into_iter().map(|idx| view.node_at(idx)).collect(),
        })
        .collect()
}
