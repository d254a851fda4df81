//! Path search configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the shortest attack path search.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SearchConfig {
    /// Attacker entry state used when no `--source` is given.
    pub default_source: Option<String>,
    /// Longest attack path (in exploits) worth reporting. Default: unbounded.
    pub max_hops: Option<u32>,
}
