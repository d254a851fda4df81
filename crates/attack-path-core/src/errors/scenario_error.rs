//! Scenario loading errors.

use std::path::PathBuf;

use super::error_code::{self, AttackErrorCode};
use super::GraphError;

/// Errors that can occur while reading a scenario file and building its graph.
#[derive(Debug, thiserror::Error)]
pub enum ScenarioError {
    #[error("IO error reading scenario {path}: {source}")]
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Scenario parse error in {path}: {message}")]
    ParseError { path: String, message: String },

    #[error("Invalid scenario graph: {0}")]
    Graph(#[from] GraphError),
}

impl AttackErrorCode for ScenarioError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Graph(e) => e.error_code(),
            _ => error_code::SCENARIO_ERROR,
        }
    }
}
