//! Attack graph node and edge types.

use serde::{Deserialize, Serialize};

/// A security-relevant state or asset (e.g. "Internet", "Database_SQL").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttackNode {
    pub id: String,
    /// Marks the asset whose compromise defines attack success.
    pub is_critical: bool,
}

/// A single exploitable transition between two states.
/// Unweighted: every exploit costs one hop.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExploitEdge {
    /// Vulnerability or action used, e.g. "SQL_Injection". Display only.
    pub exploit: Option<String>,
}
