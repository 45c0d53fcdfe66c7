//! String encoding for question lists and answer maps.
//!
//! Both are persisted as JSON text. The encoding is a wire contract with the
//! UI: a question list is a JSON array in schema order, an answer map is a
//! JSON object keyed by question id.
//!
//! Decoding is honest about failure. Callers that prefer to degrade to an
//! empty collection on corrupt data do so explicitly at their boundary.

use thiserror::Error;

use crate::entities::{Answers, Question};

/// Failure to encode or decode persisted question/answer text.
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("malformed {what} JSON: {source}")]
    Malformed {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode {what}: {source}")]
    Encode {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// Encode an ordered question list.
///
/// # Errors
///
/// Returns `CodecError::Encode` if serialization fails.
pub fn serialize_questions(questions: &[Question]) -> Result<String, CodecError> {
    serde_json::to_string(questions).map_err(|source| CodecError::Encode {
        what: "questions",
        source,
    })
}

/// Decode a question list, preserving array order.
///
/// # Errors
///
/// Returns `CodecError::Malformed` if the text is not a JSON array of questions.
pub fn deserialize_questions(text: &str) -> Result<Vec<Question>, CodecError> {
    serde_json::from_str(text).map_err(|source| CodecError::Malformed {
        what: "questions",
        source,
    })
}

/// Encode an answer map.
///
/// # Errors
///
/// Returns `CodecError::Encode` if serialization fails.
pub fn serialize_answers(answers: &Answers) -> Result<String, CodecError> {
    serde_json::to_string(answers).map_err(|source| CodecError::Encode {
        what: "answers",
        source,
    })
}

/// Decode an answer map.
///
/// # Errors
///
/// Returns `CodecError::Malformed` if the text is not a JSON object.
pub fn deserialize_answers(text: &str) -> Result<Answers, CodecError> {
    serde_json::from_str(text).map_err(|source| CodecError::Malformed {
        what: "answers",
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{NumberRange, QuestionKind, ScaleRange, TextRules};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn sample_questions() -> Vec<Question> {
        vec![
            Question::text("name", "Operator name")
                .required()
                .with_description("Full name as on the lab badge"),
            Question::new(
                "batch",
                "Batch code",
                QuestionKind::Text {
                    validation: Some(TextRules {
                        pattern: Some("^[A-Z]{2}-\\d{4}$".into()),
                    }),
                },
            ),
            Question::new(
                "load",
                "Peak load (N)",
                QuestionKind::Number {
                    validation: Some(NumberRange {
                        min: Some(0.0),
                        max: Some(5000.5),
                    }),
                },
            )
            .required(),
            Question::single_choice("grip", "Grip type", ["wedge", "pneumatic"]),
            Question::multiple_choice("defects", "Observed defects", ["void", "crack", "warp"]),
            Question::new(
                "confidence",
                "Confidence",
                QuestionKind::Scale {
                    options: Some(vec!["low".into(), "mid".into(), "high".into()]),
                    validation: Some(ScaleRange {
                        min: Some(1.0),
                        max: Some(3.0),
                        min_label: Some("unsure".into()),
                        max_label: Some("certain".into()),
                    }),
                },
            ),
            Question::date("tested_on", "Test date"),
        ]
    }

    #[test]
    fn questions_roundtrip_preserves_order_and_fields() {
        let questions = sample_questions();
        let text = serialize_questions(&questions).unwrap();
        let back = deserialize_questions(&text).unwrap();
        assert_eq!(back, questions);
    }

    #[test]
    fn empty_list_roundtrips() {
        let text = serialize_questions(&[]).unwrap();
        assert_eq!(text, "[]");
        assert!(deserialize_questions(&text).unwrap().is_empty());
    }

    #[test]
    fn malformed_questions_are_an_error() {
        let err = deserialize_questions("{not valid json").unwrap_err();
        assert!(matches!(err, CodecError::Malformed { what: "questions", .. }));
    }

    #[test]
    fn unknown_question_type_is_an_error() {
        let text = json!([{"id": "x", "title": "X", "type": "SLIDER"}]).to_string();
        assert!(deserialize_questions(&text).is_err());
    }

    #[test]
    fn answers_roundtrip() {
        let answers = Answers::from([
            ("load".to_string(), json!("1250")),
            ("defects".to_string(), json!(["void", "crack"])),
            ("confidence".to_string(), json!(3)),
        ]);
        let text = serialize_answers(&answers).unwrap();
        assert_eq!(deserialize_answers(&text).unwrap(), answers);
    }

    #[test]
    fn answers_must_be_an_object() {
        assert!(deserialize_answers("[1, 2]").is_err());
    }
}
