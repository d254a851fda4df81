//! Attack path types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One exploit transition on an attack path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttackStep {
    pub source: String,
    pub target: String,
    pub exploit: Option<String>,
}

/// Ordered sequence of states from an attacker's entry point to a target,
/// with the exploit steps joining consecutive states.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttackPath {
    pub nodes: Vec<String>,
    pub steps: Vec<AttackStep>,
}

impl AttackPath {
    /// Number of exploits chained along the path.
    pub fn hop_count(&self) -> usize {
        self.steps.len()
    }

    pub fn source(&self) -> &str {
        self.nodes.first().map(String::as_str).unwrap_or_default()
    }

    pub fn target(&self) -> &str {
        self.nodes.last().map(String::as_str).unwrap_or_default()
    }

    /// Consecutive `(source, target)` pairs along the path.
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.steps
            .iter()
            .map(|s| (s.source.as_str(), s.target.as_str()))
    }
}

impl fmt::Display for AttackPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.nodes.join(" -> "))
    }
}

/// Outcome of a path search. `NotFound` is a valid security finding,
/// not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PathOutcome {
    Found(AttackPath),
    NotFound,
}

impl PathOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    pub fn path(&self) -> Option<&AttackPath> {
        match self {
            Self::Found(path) => Some(path),
            Self::NotFound => None,
        }
    }

    pub fn into_path(self) -> Option<AttackPath> {
        match self {
            Self::Found(path) => Some(path),
            Self::NotFound => None,
        }
    }
}
