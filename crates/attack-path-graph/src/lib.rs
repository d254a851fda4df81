//! attack-path-graph: attack graph model and minimum attack path search.
//!
//! - Graph: states (nodes) joined by exploit transitions (directed edges)
//! - Path: breadth-first shortest attack path with deterministic tie-breaking
//! - Render: pure highlight-set adapter for visualization collaborators
//! - Scenario: TOML scenario files and the built-in demo network

pub mod graph;
pub mod path;
pub mod render;
pub mod scenario;

pub use graph::{AttackGraph, AttackNode, ExploitEdge};
pub use path::{
    shortest_path, shortest_path_to_critical, shortest_path_within, AttackPath, AttackStep,
    PathOutcome,
};
pub use render::{to_highlight_set, HighlightSet};
pub use scenario::Scenario;
