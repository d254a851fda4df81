//! Attack graph model.

pub mod attack_graph;
pub mod types;

pub use attack_graph::AttackGraph;
pub use types::{AttackNode, ExploitEdge};
