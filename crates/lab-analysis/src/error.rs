//! Workflow error types, generic over the store's error type.

use lab_core::enums::StudyStatus;
use thiserror::Error;

use crate::validate::ValidationReport;

/// Why a response submission (or dry-run check) was refused.
#[derive(Debug, Error)]
pub enum SubmissionError<E> {
    #[error("Study not found: {0}")]
    StudyNotFound(String),

    #[error("Schema not found: {0}")]
    SchemaNotFound(String),

    /// Responses are only accepted while the study is `ACTIVE`.
    #[error("Study {id} is {status}; responses are only accepted while ACTIVE")]
    StudyNotActive { id: String, status: StudyStatus },

    /// The answers failed validation. Recoverable: the submitter fixes the input.
    #[error("Response failed validation: {}", .0.errors.join("; "))]
    Invalid(ValidationReport),

    #[error("Store error: {0}")]
    Store(#[source] E),
}

/// Why a statistics report could not be produced.
#[derive(Debug, Error)]
pub enum StatisticsError<E> {
    #[error("Study not found: {0}")]
    StudyNotFound(String),

    /// The study points at a schema that no longer exists.
    #[error("Schema {schema_id} referenced by study {study_id} not found")]
    SchemaNotFound { study_id: String, schema_id: String },

    #[error("Store error: {0}")]
    Store(#[source] E),
}
