//! Top-level error for a full analysis run.

use super::error_code::AttackErrorCode;
use super::{ConfigError, GraphError, RenderError, ScenarioError};

/// Errors that can occur during an analysis run.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("Graph error: {0}")]
    Graph(#[from] GraphError),

    #[error("Scenario error: {0}")]
    Scenario(#[from] ScenarioError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Render error: {0}")]
    Render(#[from] RenderError),
}

impl AttackErrorCode for PipelineError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Graph(e) => e.error_code(),
            Self::Scenario(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
            Self::Render(e) => e.error_code(),
        }
    }
}
