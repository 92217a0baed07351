//! Storage error handling

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading or writing snapshots
///
/// The store treats every one of these as non-fatal: write failures are
/// logged and absorbed, read failures degrade to seed data.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Failed to open the snapshot database
    #[error("Failed to open snapshot database at '{path}': {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// SQLite error during a read or write
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Snapshot bytes could not be encoded or decoded
    #[error("Snapshot codec error: {0}")]
    Codec(#[from] serde_json::Error),

    /// I/O error (data directory creation)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;
