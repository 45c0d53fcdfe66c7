//! Request-scoped workflows over the store traits.
//!
//! Each function loads what it needs through the store passed in, runs the
//! pure validator or aggregator, and (for submissions) writes back once.
//! Concurrent duplicate submissions are not deduplicated.

use lab_core::entities::{Answers, Response};
use lab_core::reports::StudyStatistics;
use lab_core::store::{ResponseStore, SchemaStore, StudyStore};
use tracing::{debug, info};

use crate::aggregate::{AggregateOptions, aggregate_with};
use crate::error::{StatisticsError, SubmissionError};
use crate::validate::{ValidationReport, validate};

/// Validate and persist a response for an `ACTIVE` study.
///
/// # Errors
///
/// - `StudyNotFound` / `SchemaNotFound` when a lookup comes back empty
/// - `StudyNotActive` when the study is not `ACTIVE`
/// - `Invalid` carrying the full report when any answer is rejected
/// - `Store` when the store itself fails
pub async fn submit_response<S, E>(
    store: &S,
    study_id: &str,
    answers: Answers,
) -> Result<Response, SubmissionError<E>>
where
    S: StudyStore<Error = E> + SchemaStore<Error = E> + ResponseStore<Error = E>,
{
    let study = store
        .find_study(study_id)
        .await
        .map_err(SubmissionError::Store)?
        .ok_or_else(|| SubmissionError::StudyNotFound(study_id.to_string()))?;

    if !study.status.accepts_responses() {
        return Err(SubmissionError::StudyNotActive {
            id: study.id,
            status: study.status,
        });
    }

    let schema = store
        .find_schema(&study.schema_id)
        .await
        .map_err(SubmissionError::Store)?
        .ok_or_else(|| SubmissionError::SchemaNotFound(study.schema_id.clone()))?;

    let report = validate(&schema.questions, &answers);
    if !report.valid {
        debug!(study_id, errors = report.errors.len(), "rejected response");
        return Err(SubmissionError::Invalid(report));
    }

    let response = store
        .insert_response(study_id, answers)
        .await
        .map_err(SubmissionError::Store)?;
    info!(study_id, response_id = %response.id, "response recorded");
    Ok(response)
}

/// Validate answers against a stored schema without persisting anything.
///
/// # Errors
///
/// `SchemaNotFound` when the schema does not exist, `Store` on store failure.
/// A failed validation is not an error: it is returned as an invalid report.
pub async fn check_answers<S, E>(
    store: &S,
    schema_id: &str,
    answers: &Answers,
) -> Result<ValidationReport, SubmissionError<E>>
where
    S: SchemaStore<Error = E>,
{
    let schema = store
        .find_schema(schema_id)
        .await
        .map_err(SubmissionError::Store)?
        .ok_or_else(|| SubmissionError::SchemaNotFound(schema_id.to_string()))?;
    Ok(validate(&schema.questions, answers))
}

/// Load a study's schema and responses and compute its statistics report.
///
/// # Errors
///
/// `StudyNotFound`, `SchemaNotFound` (dangling schema reference), or `Store`.
pub async fn study_statistics<S, E>(
    store: &S,
    study_id: &str,
    options: &AggregateOptions,
) -> Result<StudyStatistics, StatisticsError<E>>
where
    S: StudyStore<Error = E> + SchemaStore<Error = E> + ResponseStore<Error = E>,
{
    let study = store
        .find_study(study_id)
        .await
        .map_err(StatisticsError::Store)?
        .ok_or_else(|| StatisticsError::StudyNotFound(study_id.to_string()))?;

    let schema = store
        .find_schema(&study.schema_id)
        .await
        .map_err(StatisticsError::Store)?
        .ok_or_else(|| StatisticsError::SchemaNotFound {
            study_id: study.id.clone(),
            schema_id: study.schema_id.clone(),
        })?;

    let responses = store
        .responses_for_study(study_id)
        .await
        .map_err(StatisticsError::Store)?;

    Ok(aggregate_with(&schema.questions, &responses, options))
}
