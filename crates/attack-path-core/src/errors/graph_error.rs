//! Attack graph construction and query errors.

use super::error_code::{self, AttackErrorCode};

/// Errors raised by the graph model and the path finder.
///
/// Every variant leaves the graph untouched: a failed `add_node` or
/// `add_edge` never partially mutates state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    #[error("Node already exists: {id}")]
    DuplicateNode { id: String },

    #[error("Unknown node: {id}")]
    UnknownNode { id: String },

    #[error("Self-loop rejected: {id} cannot exploit itself")]
    SelfLoop { id: String },

    #[error("No critical asset is marked in the graph")]
    NoCriticalAsset,

    #[error("More than one critical asset is marked: {ids:?}")]
    AmbiguousCriticalAsset { ids: Vec<String> },
}

impl GraphError {
    pub fn unknown(id: impl Into<String>) -> Self {
        Self::UnknownNode { id: id.into() }
    }
}

impl AttackErrorCode for GraphError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::DuplicateNode { .. } => error_code::DUPLICATE_NODE,
            Self::UnknownNode { .. } => error_code::UNKNOWN_NODE,
            Self::SelfLoop { .. } => error_code::SELF_LOOP,
            Self::NoCriticalAsset => error_code::NO_CRITICAL_ASSET,
            Self::AmbiguousCriticalAsset { .. } => error_code::AMBIGUOUS_CRITICAL_ASSET,
        }
    }
}
