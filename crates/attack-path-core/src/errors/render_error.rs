//! Output rendering errors.

use std::path::PathBuf;

use super::error_code::{self, AttackErrorCode};

/// Errors that can occur while writing a rendered graph or report.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("Failed to write {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Serialization failed: {0}")]
    Serialization(String),

    #[error("Unsupported output format: {0}")]
    UnsupportedFormat(String),
}

impl AttackErrorCode for RenderError {
    fn error_code(&self) -> &'static str {
        error_code::RENDER_ERROR
    }
}
