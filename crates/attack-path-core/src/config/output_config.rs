//! Output file configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

pub const DEFAULT_OUTPUT_PATH: &str = "attack_path.dot";
pub const DEFAULT_OUTPUT_FORMAT: &str = "dot";

/// Formats the CLI knows how to write.
pub const SUPPORTED_FORMATS: &[&str] = &["dot", "json"];

/// Where and how the rendered graph is written.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct OutputConfig {
    /// Output file path. Default: "attack_path.dot".
    pub path: Option<PathBuf>,
    /// "dot" | "json". Default: "dot".
    pub format: Option<String>,
}

impl OutputConfig {
    pub fn effective_path(&self) -> PathBuf {
        self.path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_PATH))
    }

    pub fn effective_format(&self) -> &str {
        self.format.as_deref().unwrap_or(DEFAULT_OUTPUT_FORMAT)
    }
}
