//! attack-path-cli: presentation layer around the attack path core.
//!
//! - `pipeline`: config + scenario + search, producing an [`pipeline::Analysis`]
//! - `dot`: Graphviz DOT drawing with the attack path overlaid
//! - `report`: human-readable report and JSON export

pub mod dot;
pub mod pipeline;
pub mod report;
