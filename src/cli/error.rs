//! CLI-level errors

use thiserror::Error;

/// Errors that end an interactive session. Tree-level rejections (duplicate
/// or missing keys) are reported to the user and never surface here.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode tree as JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type CliResult<T> = Result<T, CliError>;
