//! Scenario files: declarative attack graph descriptions.

pub mod demo;
pub mod loader;
pub mod types;

pub use demo::demo_scenario;
pub use types::{NodeSpec, Scenario, StepSpec};
