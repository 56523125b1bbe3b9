pub mod common;
pub mod community;
pub mod ranking;
pub mod topology;

pub use common::{GraphView, NodeId};
pub use community::{degree_stats, isolated_nodes, DegreeStats};
pub use ranking::top_n;
pub use topology::{common_neighbor_pairs, CommonNeighbors};
