//! Top-level configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::output_config::SUPPORTED_FORMATS;
use super::{OutputConfig, RenderConfig, ScenarioConfig, SearchConfig};
use crate::errors::ConfigError;

/// Project-level config file name, looked up in the working root.
pub const PROJECT_CONFIG_FILE: &str = "attack-path.toml";

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`ATTACK_PATH_*`)
/// 3. Project config (`attack-path.toml` in project root)
/// 4. User config (`~/.attack-path/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AttackPathConfig {
    pub search: SearchConfig,
    pub scenario: ScenarioConfig,
    pub render: RenderConfig,
    pub output: OutputConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub source: Option<String>,
    pub output_path: Option<PathBuf>,
    pub output_format: Option<String>,
    pub strict_nodes: Option<bool>,
}

impl AttackPathConfig {
    /// Load configuration with layered resolution rooted at `root`.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Lowest priority: user config
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(e @ ConfigError::ParseError { .. }) => return Err(e),
                    Err(e) => {
                        tracing::warn!(
                            path = %user_config_path.display(),
                            error = %e,
                            "ignoring unreadable user config"
                        );
                    }
                }
            }
        }

        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        Self::apply_env_overrides(&mut config);

        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(config: &AttackPathConfig) -> Result<(), ConfigError> {
        if config.search.max_hops == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "search.max_hops".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if let Some(ref format) = config.output.format {
            if !SUPPORTED_FORMATS.contains(&format.as_str()) {
                return Err(ConfigError::ValidationFailed {
                    field: "output.format".to_string(),
                    message: format!("must be one of {SUPPORTED_FORMATS:?}, got {format:?}"),
                });
            }
        }
        let colors = [
            ("render.highlight_color", &config.render.highlight_color),
            ("render.node_color", &config.render.node_color),
            ("render.edge_color", &config.render.edge_color),
            ("render.label_color", &config.render.label_color),
        ];
        for (field, value) in colors {
            if value.as_deref().is_some_and(|c| c.trim().is_empty()) {
                return Err(ConfigError::ValidationFailed {
                    field: field.to_string(),
                    message: "must not be empty".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Returns the user config path: `~/.attack-path/config.toml`.
    fn user_config_path() -> Option<PathBuf> {
        home_dir().map(|h| h.join(".attack-path").join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored.
    fn merge_toml_file(config: &mut AttackPathConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: AttackPathConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        tracing::debug!(path = %path.display(), "merged config file");
        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; `other` wins only where it has a value.
    fn merge(base: &mut AttackPathConfig, other: &AttackPathConfig) {
        // Search
        if other.search.default_source.is_some() {
            base.search.default_source = other.search.default_source.clone();
        }
        if other.search.max_hops.is_some() {
            base.search.max_hops = other.search.max_hops;
        }

        // Scenario
        if other.scenario.strict_nodes.is_some() {
            base.scenario.strict_nodes = other.scenario.strict_nodes;
        }

        // Render
        if other.render.highlight_color.is_some() {
            base.render.highlight_color = other.render.highlight_color.clone();
        }
        if other.render.node_color.is_some() {
            base.render.node_color = other.render.node_color.clone();
        }
        if other.render.edge_color.is_some() {
            base.render.edge_color = other.render.edge_color.clone();
        }
        if other.render.label_color.is_some() {
            base.render.label_color = other.render.label_color.clone();
        }
        if other.render.title.is_some() {
            base.render.title = other.render.title.clone();
        }

        // Output
        if other.output.path.is_some() {
            base.output.path = other.output.path.clone();
        }
        if other.output.format.is_some() {
            base.output.format = other.output.format.clone();
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `ATTACK_PATH_SEARCH_MAX_HOPS`, `ATTACK_PATH_OUTPUT_FORMAT`, etc.
    fn apply_env_overrides(config: &mut AttackPathConfig) {
        if let Ok(val) = std::env::var("ATTACK_PATH_SEARCH_DEFAULT_SOURCE") {
            config.search.default_source = Some(val);
        }
        if let Ok(val) = std::env::var("ATTACK_PATH_SEARCH_MAX_HOPS") {
            if let Ok(v) = val.parse::<u32>() {
                config.search.max_hops = Some(v);
            }
        }
        if let Ok(val) = std::env::var("ATTACK_PATH_SCENARIO_STRICT_NODES") {
            if let Ok(v) = val.parse::<bool>() {
                config.scenario.strict_nodes = Some(v);
            }
        }
        if let Ok(val) = std::env::var("ATTACK_PATH_RENDER_HIGHLIGHT_COLOR") {
            config.render.highlight_color = Some(val);
        }
        if let Ok(val) = std::env::var("ATTACK_PATH_OUTPUT_PATH") {
            config.output.path = Some(PathBuf::from(val));
        }
        if let Ok(val) = std::env::var("ATTACK_PATH_OUTPUT_FORMAT") {
            config.output.format = Some(val);
        }
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut AttackPathConfig, cli: &CliOverrides) {
        if let Some(ref v) = cli.source {
            config.search.default_source = Some(v.clone());
        }
        if let Some(ref v) = cli.output_path {
            config.output.path = Some(v.clone());
        }
        if let Some(ref v) = cli.output_format {
            config.output.format = Some(v.clone());
        }
        if let Some(v) = cli.strict_nodes {
            config.scenario.strict_nodes = Some(v);
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
