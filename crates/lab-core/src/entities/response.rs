use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Submitted answers keyed by question id. Value shape depends on the question type.
pub type Answers = BTreeMap<String, Value>;

/// One submission of answers against a study's schema. Immutable once stored.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    pub id: String,
    pub study_id: String,
    pub answers: Answers,
    pub created_at: DateTime<Utc>,
}

impl Response {
    /// The answer to `question_id`, if one was given and it is not blank.
    ///
    /// An empty multiple-choice selection (`[]`) is blank, so it neither
    /// satisfies `required` nor counts toward `totalAnswers`.
    #[must_use]
    pub fn answer(&self, question_id: &str) -> Option<&Value> {
        self.answers.get(question_id).filter(|v| !is_blank(v))
    }
}

/// Whether a value counts as "no answer": null, empty string, or empty array.
#[must_use]
pub fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Bool(_) | Value::Number(_) | Value::Object(_) => false,
    }
}
