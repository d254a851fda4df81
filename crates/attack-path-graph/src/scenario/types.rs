//! Scenario file types.

use serde::{Deserialize, Serialize};

/// A network scenario: its states, its exploit steps, and optionally the
/// attacker's entry point.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Scenario {
    pub name: Option<String>,
    /// Attacker entry state.
    pub source: Option<String>,
    pub nodes: Vec<NodeSpec>,
    pub steps: Vec<StepSpec>,
}

/// A declared state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeSpec {
    pub id: String,
    #[serde(default)]
    pub critical: bool,
}

/// A declared exploit step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepSpec {
    pub source: String,
    pub target: String,
    #[serde(default)]
    pub exploit: Option<String>,
}
