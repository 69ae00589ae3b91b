//! Error types for wikicat
//!
//! - `ConfigError`: rejected before a walk starts
//! - `LookupError`: the dump could not be opened or queried
//! - `WalkError`: anything that aborts a walk
//! - `Error`: top-level error for the CLI, adds output failures

use std::path::PathBuf;

use thiserror::Error;

use crate::dump::EdgeKind;

/// Top-level error type for the wikicat application
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Walk(#[from] WalkError),

    /// Writing results to stdout failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors that abort a traversal. There is no partial result.
#[derive(Error, Debug)]
pub enum WalkError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Lookup error: {0}")]
    Lookup(#[from] LookupError),
}

/// Invalid walk configuration
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("depth limit must be at least 1, got {0}")]
    InvalidDepthLimit(usize),

    #[error("a root category is required")]
    MissingRoot,
}

/// Edge lookup failures
#[derive(Error, Debug)]
pub enum LookupError {
    /// The dump file could not be opened
    #[error("Failed to open dump '{path}': {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// A children query could not be executed
    #[error("Failed to query {kind} children of '{parent}': {source}")]
    Query {
        parent: String,
        kind: EdgeKind,
        #[source]
        source: rusqlite::Error,
    },

    /// Failure from a non-SQLite lookup backend
    #[error("Lookup backend failed for '{parent}': {reason}")]
    Backend { parent: String, reason: String },
}

pub type Result<T> = std::result::Result<T, Error>;
pub type LookupResult<T> = std::result::Result<T, LookupError>;
