//! Error handling for attack-path.
//! One error enum per subsystem, `thiserror` only.

pub mod config_error;
pub mod error_code;
pub mod graph_error;
pub mod pipeline_error;
pub mod render_error;
pub mod scenario_error;

pub use config_error::ConfigError;
pub use error_code::AttackErrorCode;
pub use graph_error::GraphError;
pub use pipeline_error::PipelineError;
pub use render_error::RenderError;
pub use scenario_error::ScenarioError;
