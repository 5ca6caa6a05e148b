use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EditorError {
    #[error("Cannot change editor area after an editor has already been created")]
    EditorAreaLocked,

    #[error("No editor area has been set")]
    NoEditorArea,

    #[error("No editor exists for {}", .0.display())]
    NoEditor(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Results with EditorError
pub type Result<T> = std::result::Result<T, EditorError>;
