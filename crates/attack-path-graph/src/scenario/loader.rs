//! Scenario parsing and graph construction.

use std::path::Path;

use attack_path_core::config::ScenarioConfig;
use attack_path_core::errors::ScenarioError;

use crate::graph::AttackGraph;

use super::types::Scenario;

impl Scenario {
    /// Parse a scenario from TOML. `origin` names the source in errors.
    pub fn from_toml(toml_str: &str, origin: &str) -> Result<Self, ScenarioError> {
        toml::from_str(toml_str).map_err(|e| ScenarioError::ParseError {
            path: origin.to_string(),
            message: e.to_string(),
        })
    }

    /// Read and parse a scenario file.
    pub fn load(path: &Path) -> Result<Self, ScenarioError> {
        let content = std::fs::read_to_string(path).map_err(|source| ScenarioError::IoError {
            path: path.to_path_buf(),
            source,
        })?;
        let scenario = Self::from_toml(&content, &path.display().to_string())?;
        tracing::debug!(
            path = %path.display(),
            nodes = scenario.nodes.len(),
            steps = scenario.steps.len(),
            "scenario loaded"
        );
        Ok(scenario)
    }

    /// Build the attack graph described by this scenario.
    ///
    /// Declared nodes are added first, in order. Step endpoints that were not
    /// declared become plain (non-critical) states, unless strict mode is on,
    /// in which case they fail as unknown nodes.
    pub fn build(&self, config: &ScenarioConfig) -> Result<AttackGraph, ScenarioError> {
        let strict = config.effective_strict_nodes();
        let mut graph = AttackGraph::new();

        for node in &self.nodes {
            graph.add_node(node.id.as_str(), node.critical)?;
        }

        for step in &self.steps {
            if !strict {
                for endpoint in [&step.source, &step.target] {
                    if !graph.contains(endpoint) {
                        tracing::debug!(node = %endpoint, "declaring implicit state");
                        graph.add_node(endpoint.as_str(), false)?;
                    }
                }
            }
            match &step.exploit {
                Some(exploit) => graph.add_exploit(&step.source, &step.target, exploit.as_str())?,
                None => graph.add_edge(&step.source, &step.target)?,
            }
        }

        tracing::info!(
            scenario = self.name.as_deref().unwrap_or("<unnamed>"),
            states = graph.node_count(),
            exploits = graph.edge_count(),
            "attack graph built"
        );
        Ok(graph)
    }
}
