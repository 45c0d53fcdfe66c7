use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::QuestionType;

/// One question of a research schema.
///
/// The common display fields live here; everything that depends on the
/// question type lives in [`QuestionKind`], which is flattened into the same
/// JSON object and discriminated by its `type` field.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    /// Unique within its schema, stable across edits.
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(flatten)]
    pub kind: QuestionKind,
}

/// Type-specific part of a question.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QuestionKind {
    Text {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        validation: Option<TextRules>,
    },
    Number {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        validation: Option<NumberRange>,
    },
    SingleChoice {
        #[serde(default)]
        options: Vec<String>,
    },
    MultipleChoice {
        #[serde(default)]
        options: Vec<String>,
    },
    Scale {
        /// Optional labels, one per scale point.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        options: Option<Vec<String>>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        validation: Option<ScaleRange>,
    },
    Date,
}

/// Free-text constraints.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TextRules {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
}

/// Numeric bounds shown next to a number input.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NumberRange {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
}

/// Scale end points and their labels.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScaleRange {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_label: Option<String>,
}

impl QuestionKind {
    #[must_use]
    pub const fn question_type(&self) -> QuestionType {
        match self {
            Self::Text { .. } => QuestionType::Text,
            Self::Number { .. } => QuestionType::Number,
            Self::SingleChoice { .. } => QuestionType::SingleChoice,
            Self::MultipleChoice { .. } => QuestionType::MultipleChoice,
            Self::Scale { .. } => QuestionType::Scale,
            Self::Date => QuestionType::Date,
        }
    }

    /// Declared options, or an empty slice for types without options.
    #[must_use]
    pub fn options(&self) -> &[String] {
        match self {
            Self::SingleChoice { options } | Self::MultipleChoice { options } => options,
            Self::Scale {
                options: Some(labels),
                ..
            } => labels,
            Self::Scale { options: None, .. }
            | Self::Text { .. }
            | Self::Number { .. }
            | Self::Date => &[],
        }
    }
}

impl Question {
    /// A new optional question with no display extras.
    pub fn new(id: impl Into<String>, title: impl Into<String>, kind: QuestionKind) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            required: false,
            description: None,
            instructions: None,
            placeholder: None,
            kind,
        }
    }

    pub fn text(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self::new(id, title, QuestionKind::Text { validation: None })
    }

    pub fn number(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self::new(id, title, QuestionKind::Number { validation: None })
    }

    pub fn single_choice<S: Into<String>>(
        id: impl Into<String>,
        title: impl Into<String>,
        options: impl IntoIterator<Item = S>,
    ) -> Self {
        Self::new(
            id,
            title,
            QuestionKind::SingleChoice {
                options: options.into_iter().map(Into::into).collect(),
            },
        )
    }

    pub fn multiple_choice<S: Into<String>>(
        id: impl Into<String>,
        title: impl Into<String>,
        options: impl IntoIterator<Item = S>,
    ) -> Self {
        Self::new(
            id,
            title,
            QuestionKind::MultipleChoice {
                options: options.into_iter().map(Into::into).collect(),
            },
        )
    }

    pub fn scale(id: impl Into<String>, title: impl Into<String>, min: f64, max: f64) -> Self {
        Self::new(
            id,
            title,
            QuestionKind::Scale {
                options: None,
                validation: Some(ScaleRange {
                    min: Some(min),
                    max: Some(max),
                    ..ScaleRange::default()
                }),
            },
        )
    }

    pub fn date(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self::new(id, title, QuestionKind::Date)
    }

    #[must_use]
    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub const fn question_type(&self) -> QuestionType {
        self.kind.question_type()
    }
}
