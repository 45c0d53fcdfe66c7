//! Response validation against a schema's question list.

use std::fmt;

use lab_core::entities::{Answers, Question, QuestionKind, is_blank};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::numeric::as_number;

/// Why a single answer was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IssueKind {
    /// A required question has no (or a blank) answer.
    Required,
    /// A `NUMBER` question's answer does not coerce to a finite number.
    NotNumeric,
}

/// One rejected answer, attributed to its question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ValidationIssue {
    pub question_id: String,
    pub question_title: String,
    pub kind: IssueKind,
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            IssueKind::Required => write!(f, "Question \"{}\" is required", self.question_title),
            IssueKind::NotNumeric => {
                write!(f, "Question \"{}\" must be a number", self.question_title)
            }
        }
    }
}

/// Outcome of validating one submission.
///
/// `errors` carries the human-readable reasons in schema order; `issues`
/// carries the same reasons in structured form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    pub valid: bool,
    pub errors: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    fn from_issues(issues: Vec<ValidationIssue>) -> Self {
        Self {
            valid: issues.is_empty(),
            errors: issues.iter().map(ToString::to_string).collect(),
            issues,
        }
    }

    /// Issues raised for one question.
    pub fn issues_for<'a>(&'a self, question_id: &'a str) -> impl Iterator<Item = &'a ValidationIssue> {
        self.issues.iter().filter(move |i| i.question_id == question_id)
    }
}

/// Check a submission against the schema's questions.
///
/// Walks the questions in schema order and accumulates every violation rather
/// than stopping at the first. Answers for unknown question ids are ignored.
/// Only `NUMBER` answers are type-checked; choice answers are not checked
/// against their declared options.
#[must_use]
pub fn validate(questions: &[Question], answers: &Answers) -> ValidationReport {
    let mut issues = Vec::new();

    for question in questions {
        let answer = answers.get(&question.id).filter(|v| !is_blank(v));

        let Some(answer) = answer else {
            if question.required {
                issues.push(issue(question, IssueKind::Required));
            }
            continue;
        };

        match &question.kind {
            QuestionKind::Number { .. } => {
                if as_number(answer).is_none() {
                    issues.push(issue(question, IssueKind::NotNumeric));
                }
            }
            QuestionKind::Text { .. }
            | QuestionKind::SingleChoice { .. }
            | QuestionKind::MultipleChoice { .. }
            | QuestionKind::Scale { .. }
            | QuestionKind::Date => {}
        }
    }

    ValidationReport::from_issues(issues)
}

fn issue(question: &Question, kind: IssueKind) -> ValidationIssue {
    ValidationIssue {
        question_id: question.id.clone(),
        question_title: question.title.clone(),
        kind,
    }
}
