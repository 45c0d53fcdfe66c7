//! Statistics report types returned to the UI.
//!
//! The field names and the decimal-string formatting of `responseRate`,
//! `average`, and `averageLength` are part of the report contract. Reports
//! are derived on every request and never persisted.

use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::QuestionType;

/// Value (or option) → number of occurrences.
pub type Distribution = BTreeMap<String, u64>;

/// Statistics for a whole study.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StudyStatistics {
    pub total_responses: usize,
    /// Per-question statistics keyed by question id, in schema order.
    #[serde(with = "ordered_map")]
    #[schemars(with = "BTreeMap<String, QuestionStatistics>")]
    pub question_stats: Vec<(String, QuestionStatistics)>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub correlations: Vec<Correlation>,
}

impl StudyStatistics {
    #[must_use]
    pub fn question(&self, question_id: &str) -> Option<&QuestionStatistics> {
        self.question_stats
            .iter()
            .find(|(id, _)| id == question_id)
            .map(|(_, stats)| stats)
    }
}

/// Statistics for one question.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QuestionStatistics {
    pub title: String,
    pub total_answers: usize,
    /// Percentage of responses that answered, two decimals, or `"0"` with no responses.
    pub response_rate: String,
    #[serde(flatten)]
    pub breakdown: Breakdown,
}

impl QuestionStatistics {
    #[must_use]
    pub const fn question_type(&self) -> QuestionType {
        self.breakdown.question_type()
    }
}

/// Type-specific reduction, tagged by the question type.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Breakdown {
    Text {
        #[serde(rename = "averageLength")]
        average_length: String,
        #[serde(rename = "averageWordCount")]
        average_word_count: String,
    },
    Number(NumericSummary),
    SingleChoice {
        distribution: Distribution,
    },
    MultipleChoice {
        distribution: Distribution,
    },
    Scale(NumericSummary),
    Date,
}

impl Breakdown {
    #[must_use]
    pub const fn question_type(&self) -> QuestionType {
        match self {
            Self::Text { .. } => QuestionType::Text,
            Self::Number(_) => QuestionType::Number,
            Self::SingleChoice { .. } => QuestionType::SingleChoice,
            Self::MultipleChoice { .. } => QuestionType::MultipleChoice,
            Self::Scale(_) => QuestionType::Scale,
            Self::Date => QuestionType::Date,
        }
    }

    #[must_use]
    pub const fn distribution(&self) -> Option<&Distribution> {
        match self {
            Self::SingleChoice { distribution } | Self::MultipleChoice { distribution } => {
                Some(distribution)
            }
            Self::Text { .. } | Self::Number(_) | Self::Scale(_) | Self::Date => None,
        }
    }

    #[must_use]
    pub const fn numeric(&self) -> Option<&NumericSummary> {
        match self {
            Self::Number(summary) | Self::Scale(summary) => Some(summary),
            Self::Text { .. } | Self::SingleChoice { .. } | Self::MultipleChoice { .. } | Self::Date => {
                None
            }
        }
    }
}

/// min/max/average over the numeric answers of a question.
///
/// All three fields are present together or absent together; they are absent
/// when no answer coerced to a number.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct NumericSummary {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub average: Option<String>,
}

impl NumericSummary {
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            min: None,
            max: None,
            average: None,
        }
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.min.is_none()
    }
}

/// Pearson correlation estimate between two numeric questions.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Correlation {
    pub left: String,
    pub right: String,
    /// Number of responses where both questions had a numeric answer.
    pub pairs: usize,
    /// Coefficient in [-1, 1], two decimals.
    pub coefficient: String,
}

/// (De)serialize `Vec<(K, V)>` as a JSON object, keeping entry order.
mod ordered_map {
    use std::fmt;
    use std::marker::PhantomData;

    use serde::de::{MapAccess, Visitor};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    #[allow(clippy::ptr_arg)]
    pub fn serialize<K, V, S>(entries: &Vec<(K, V)>, serializer: S) -> Result<S::Ok, S::Error>
    where
        K: Serialize,
        V: Serialize,
        S: Serializer,
    {
        serializer.collect_map(entries.iter().map(|(k, v)| (k, v)))
    }

    pub fn deserialize<'de, K, V, D>(deserializer: D) -> Result<Vec<(K, V)>, D::Error>
    where
        K: Deserialize<'de>,
        V: Deserialize<'de>,
        D: Deserializer<'de>,
    {
        struct EntriesVisitor<K, V>(PhantomData<(K, V)>);

        impl<'de, K, V> Visitor<'de> for EntriesVisitor<K, V>
        where
            K: Deserialize<'de>,
            V: Deserialize<'de>,
        {
            type Value = Vec<(K, V)>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some(entry) = map.next_entry()? {
                    entries.push(entry);
                }
                Ok(entries)
            }
        }

        deserializer.deserialize_map(EntriesVisitor(PhantomData))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn sample() -> StudyStatistics {
        StudyStatistics {
            total_responses: 3,
            question_stats: vec![
                (
                    "z_last_alphabetically".into(),
                    QuestionStatistics {
                        title: "Load".into(),
                        total_answers: 3,
                        response_rate: "100.00".into(),
                        breakdown: Breakdown::Number(NumericSummary {
                            min: Some(10.0),
                            max: Some(20.0),
                            average: Some("15.00".into()),
                        }),
                    },
                ),
                (
                    "a_first_alphabetically".into(),
                    QuestionStatistics {
                        title: "Colour".into(),
                        total_answers: 2,
                        response_rate: "66.67".into(),
                        breakdown: Breakdown::SingleChoice {
                            distribution: Distribution::from([("red".into(), 2)]),
                        },
                    },
                ),
            ],
            correlations: Vec::new(),
        }
    }

    #[test]
    fn report_uses_contract_field_names() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(
            value,
            json!({
                "totalResponses": 3,
                "questionStats": {
                    "z_last_alphabetically": {
                        "title": "Load",
                        "type": "NUMBER",
                        "totalAnswers": 3,
                        "responseRate": "100.00",
                        "min": 10.0,
                        "max": 20.0,
                        "average": "15.00"
                    },
                    "a_first_alphabetically": {
                        "title": "Colour",
                        "type": "SINGLE_CHOICE",
                        "totalAnswers": 2,
                        "responseRate": "66.67",
                        "distribution": {"red": 2}
                    }
                }
            })
        );
    }

    #[test]
    fn question_stats_keep_schema_order_through_json() {
        let text = serde_json::to_string(&sample()).unwrap();
        let z = text.find("z_last_alphabetically").unwrap();
        let a = text.find("a_first_alphabetically").unwrap();
        assert!(z < a, "schema order must survive serialization: {text}");

        let back: StudyStatistics = serde_json::from_str(&text).unwrap();
        assert_eq!(back, sample());
    }

    #[test]
    fn empty_numeric_summary_omits_fields() {
        let stats = QuestionStatistics {
            title: "Rating".into(),
            total_answers: 1,
            response_rate: "50.00".into(),
            breakdown: Breakdown::Scale(NumericSummary::empty()),
        };
        let value = serde_json::to_value(&stats).unwrap();
        assert_eq!(
            value,
            json!({"title": "Rating", "type": "SCALE", "totalAnswers": 1, "responseRate": "50.00"})
        );
        assert_eq!(stats.question_type(), QuestionType::Scale);
    }

    #[test]
    fn text_breakdown_field_names() {
        let value = serde_json::to_value(Breakdown::Text {
            average_length: "4.50".into(),
            average_word_count: "1.00".into(),
        })
        .unwrap();
        assert_eq!(
            value,
            json!({"type": "TEXT", "averageLength": "4.50", "averageWordCount": "1.00"})
        );
    }
}
