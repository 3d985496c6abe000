// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jonathan D. A. Jewell <hyperpolymath>

//! Error types for cuesort

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for cuesort operations
pub type Result<T> = std::result::Result<T, CueSortError>;

/// cuesort error types
#[derive(Error, Debug)]
pub enum CueSortError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("File system error: {0}")]
    FileSystem(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Root directory not found: {0:?}")]
    RootNotFound(PathBuf),

    #[error("Root is not a directory: {0:?}")]
    NotADirectory(PathBuf),

    #[error("Failed to create directory {path:?}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to move {from:?} to {to:?}: {source}")]
    Move {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{failed} file(s) could not be sorted")]
    Batch { failed: usize },
}
