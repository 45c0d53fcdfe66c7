//! Cross-cutting error types for protolab.
//!
//! Domain-specific errors (`DatabaseError`, `ConfigError`, `SubmissionError`)
//! live in their own crates. `CodecError` lives in [`crate::codec`].

use thiserror::Error;

/// Errors that can be raised by any protolab crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Entity lookup returned no result.
    #[error("Entity not found: {entity_type} {id}")]
    NotFound { entity_type: String, id: String },

    /// Data failed validation (bounds, uniqueness, required fields).
    #[error("Validation error: {}", .0.join("; "))]
    Validation(Vec<String>),
}
