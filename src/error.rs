use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Why a component source yielded no template content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ExtractError {
    #[error("Invalid input: component source must be a non-empty string")]
    InvalidInput,
    #[error("No valid <template> tags found in the input string")]
    NoBlockFound,
    #[error("Template content is empty")]
    EmptyBlock,
}

#[derive(Debug, Error)]
pub enum PreviewError {
    #[error("component source not found: {0}")]
    FileNotFound(PathBuf),
    #[error("failed to parse JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
}
