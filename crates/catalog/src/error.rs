//! Error types for the catalog crate.
//!
//! Covers fixture loading, parsing, and catalog validation. All variants
//! carry enough context to name the offending file or entity.

use thiserror::Error;

/// Errors that can occur while loading or validating a catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Fixture file could not be found or opened
    #[error("Failed to open fixture: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading a fixture
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Fixture file couldn't be deserialized
    #[error("Parse error in {file}: {reason}")]
    ParseError { file: String, reason: String },

    /// A field had an invalid value
    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },

    /// Two entities of the same kind share an id
    #[error("Duplicate {entity} id: {id}")]
    DuplicateId { entity: String, id: String },

    /// Referenced entity doesn't exist (e.g., appointment with unknown provider)
    #[error("Missing reference: {entity} with id {id}")]
    MissingReference { entity: String, id: String },

    /// Catalog-level validation failed
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CatalogError>;
