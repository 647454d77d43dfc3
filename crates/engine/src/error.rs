//! Error types for the filter engine.
//!
//! Two failure classes, both programming-error faults raised before any
//! filtering work happens. An empty result list is never an error.

use thiserror::Error;

/// Errors the engine can raise for malformed input.
///
/// Neither variant is retryable: the engine is pure computation, so a
/// repeated call with the same bad input fails identically. Callers treat
/// these as development-time faults, not runtime conditions.
#[derive(Error, Debug)]
pub enum EngineError {
    /// Criteria are malformed for the entity kind (e.g. a facet name the
    /// kind does not recognize)
    #[error("Invalid filter criteria: {reason}")]
    InvalidInput { reason: String },

    /// Selection was given an entity without a resolvable id
    #[error("Invalid entity reference: {reason}")]
    InvalidReference { reason: String },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, EngineError>;
