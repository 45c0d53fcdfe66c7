//! # lab-analysis
//!
//! Response validation and statistics for protolab studies.
//!
//! The validator and the aggregator are pure functions over a schema's
//! question list and a set of answers/responses. The [`workflow`] module
//! wires them to the store traits from `lab-core`: submitting a response into
//! an active study, dry-run validation against a stored schema, and computing
//! a study's statistics report.

pub mod aggregate;
pub mod correlate;
pub mod error;
mod numeric;
pub mod validate;
pub mod workflow;

pub use aggregate::{AggregateOptions, aggregate, aggregate_with};
pub use error::{StatisticsError, SubmissionError};
pub use validate::{IssueKind, ValidationIssue, ValidationReport, validate};
pub use workflow::{check_answers, study_statistics, submit_response};
