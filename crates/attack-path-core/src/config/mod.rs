//! Configuration system for attack-path.
//! TOML-based, layered resolution: CLI > env > project > user > defaults.

pub mod attack_path_config;
pub mod output_config;
pub mod render_config;
pub mod scenario_config;
pub mod search_config;

pub use attack_path_config::{AttackPathConfig, CliOverrides};
pub use output_config::OutputConfig;
pub use render_config::RenderConfig;
pub use scenario_config::ScenarioConfig;
pub use search_config::SearchConfig;
