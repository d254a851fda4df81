//! Minimum attack path search.
//!
//! Answers: "What is the fewest number of exploits that takes an attacker
//! from this state to that asset?"

pub mod bfs;
pub mod types;

pub use bfs::{critical_target, shortest_path, shortest_path_to_critical, shortest_path_within};
pub use types::{AttackPath, AttackStep, PathOutcome};
