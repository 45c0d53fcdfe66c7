use std::collections::HashSet;

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::question::{Question, QuestionKind};
use crate::errors::CoreError;

pub const MAX_SCHEMA_TITLE_CHARS: usize = 200;
pub const MAX_SCHEMA_DESCRIPTION_CHARS: usize = 1000;

/// An ordered, named collection of questions defining what a study collects.
///
/// Question order is display and step order. The list is only ever replaced
/// wholesale.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ResearchSchema {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub questions: Vec<Question>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ResearchSchema {
    /// Check the stored schema against the same rules applied on creation.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` listing every violated rule.
    pub fn check(&self) -> Result<(), CoreError> {
        check_schema_draft(&self.title, self.description.as_deref(), &self.questions)
    }
}

/// Validate the user-supplied parts of a schema before it is stored.
///
/// Rules: title 1–200 chars, description at most 1000 chars, at least one
/// question, every question has a non-empty id and title, ids are unique, and
/// choice questions declare at least one option.
///
/// # Errors
///
/// Returns `CoreError::Validation` with one reason per violation, in schema order.
pub fn check_schema_draft(
    title: &str,
    description: Option<&str>,
    questions: &[Question],
) -> Result<(), CoreError> {
    let mut reasons = Vec::new();

    let title_len = title.trim().chars().count();
    if title_len == 0 {
        reasons.push("schema title must not be empty".to_string());
    } else if title_len > MAX_SCHEMA_TITLE_CHARS {
        reasons.push(format!(
            "schema title must be at most {MAX_SCHEMA_TITLE_CHARS} characters"
        ));
    }

    if description.is_some_and(|d| d.chars().count() > MAX_SCHEMA_DESCRIPTION_CHARS) {
        reasons.push(format!(
            "schema description must be at most {MAX_SCHEMA_DESCRIPTION_CHARS} characters"
        ));
    }

    if questions.is_empty() {
        reasons.push("schema must contain at least one question".to_string());
    }

    let mut seen = HashSet::new();
    for (idx, question) in questions.iter().enumerate() {
        let position = idx + 1;
        if question.id.trim().is_empty() {
            reasons.push(format!("question {position} has an empty id"));
        } else if !seen.insert(question.id.as_str()) {
            reasons.push(format!("duplicate question id '{}'", question.id));
        }
        if question.title.trim().is_empty() {
            reasons.push(format!("question {position} has an empty title"));
        }
        if let QuestionKind::SingleChoice { options } | QuestionKind::MultipleChoice { options } =
            &question.kind
        {
            if options.is_empty() {
                reasons.push(format!("question '{}' declares no options", question.id));
            }
        }
    }

    if reasons.is_empty() {
        Ok(())
    } else {
        Err(CoreError::Validation(reasons))
    }
}
