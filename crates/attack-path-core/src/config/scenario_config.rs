//! Scenario loading configuration.

use serde::{Deserialize, Serialize};

/// Configuration for turning scenario files into attack graphs.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ScenarioConfig {
    /// Reject steps whose endpoints are not declared under `[[nodes]]`.
    /// Default: false (undeclared endpoints become plain states).
    pub strict_nodes: Option<bool>,
}

impl ScenarioConfig {
    pub fn effective_strict_nodes(&self) -> bool {
        self.strict_nodes.unwrap_or(false)
    }
}
