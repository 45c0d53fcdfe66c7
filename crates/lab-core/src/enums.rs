//! Status enums and type tags for protolab.
//!
//! All enums serialize as `SCREAMING_SNAKE_CASE`, matching the strings the UI
//! and the database store (`"SINGLE_CHOICE"`, `"ACTIVE"`, ...).

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// QuestionType
// ---------------------------------------------------------------------------

/// The variant tag of a question. Controls rendering and statistical reduction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QuestionType {
    Text,
    Number,
    SingleChoice,
    MultipleChoice,
    Scale,
    Date,
}

impl QuestionType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "TEXT",
            Self::Number => "NUMBER",
            Self::SingleChoice => "SINGLE_CHOICE",
            Self::MultipleChoice => "MULTIPLE_CHOICE",
            Self::Scale => "SCALE",
            Self::Date => "DATE",
        }
    }

    /// Whether answers of this type reduce to numbers (min/max/average).
    #[must_use]
    pub const fn is_numeric(self) -> bool {
        matches!(self, Self::Number | Self::Scale)
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// StudyStatus
// ---------------------------------------------------------------------------

/// Lifecycle status of a study.
///
/// Transitions are free-form: any status may follow any other through a
/// direct update. Only `Active` studies accept new responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StudyStatus {
    Draft,
    Active,
    Completed,
    Paused,
}

impl StudyStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "DRAFT",
            Self::Active => "ACTIVE",
            Self::Completed => "COMPLETED",
            Self::Paused => "PAUSED",
        }
    }

    #[must_use]
    pub const fn accepts_responses(self) -> bool {
        matches!(self, Self::Active)
    }
}

impl fmt::Display for StudyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// StandardBody
// ---------------------------------------------------------------------------

/// Standards organisation that publishes a test protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StandardBody {
    Iso,
    Astm,
    Other,
}

impl StandardBody {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Iso => "ISO",
            Self::Astm => "ASTM",
            Self::Other => "OTHER",
        }
    }
}

impl fmt::Display for StandardBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
