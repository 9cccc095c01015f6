//! Crate-wide error taxonomy.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading rules, reaching the cookie database, or
/// deleting rows.
#[derive(Error, Debug)]
pub enum Error {
    /// Rule file does not exist
    #[error("Cannot locate rules CSV file at {0:?}")]
    RulesNotFound(PathBuf),

    /// Cookie database file does not exist
    #[error("Cannot locate cookie database file at {0:?}")]
    DatabaseNotFound(PathBuf),

    /// Rule line with no host field
    #[error("Malformed rule record at line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },

    /// Deletion guard: host keys must be at least 2 characters
    #[error("Host key too short to delete ({0:?})")]
    HostTooShort(String),

    /// No known cookie database location for this browser/OS pair
    #[error("Unsupported browser '{browser}' or operating system '{os}'")]
    UnsupportedPlatform { browser: String, os: String },

    /// SQLite open, query, or execute failure
    #[error("Cookie database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Rule file I/O failure
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
