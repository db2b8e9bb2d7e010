// src/error.rs

//! Error types for the recipe catalog

use thiserror::Error;

/// Errors produced by the store, serializer and catalog layers
#[derive(Error, Debug)]
pub enum Error {
    /// SQLite failure
    #[error("Database error: {0}")]
    DatabaseError(#[from] rusqlite::Error),

    /// Filesystem failure
    #[error("I/O error: {0}")]
    IoError(String),

    /// Database could not be initialized
    #[error("Initialization error: {0}")]
    InitError(String),

    /// Requested recipe or category does not exist
    #[error("{0} not found")]
    NotFound(String),

    /// Input file could not be parsed
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Input that cannot be clamped into something usable
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// A stored entity is missing a required field
    #[error("Data integrity error: {0}")]
    DataIntegrity(String),
}

impl Error {
    /// Whether this error means the requested data is absent
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound(_))
    }
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;
