use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum AfError {
    #[error("AlphaFold request failed: {0}")]
    Http(String),

    #[error("no model release found at any version tag")]
    Unavailable,

    #[error("failed to read identifier list at {0}")]
    IdListRead(PathBuf),

    #[error("filesystem error: {0}")]
    Filesystem(String),

    #[error("failed to start worker pool: {0}")]
    Pool(String),
}
