//! Per-question statistics over all responses of a study.
//!
//! Always recomputed from scratch; nothing is cached or updated incrementally.

use lab_core::entities::{Question, QuestionKind, Response, is_blank};
use lab_core::reports::{Breakdown, Distribution, NumericSummary, QuestionStatistics, StudyStatistics};
use serde_json::Value;
use tracing::debug;

use crate::correlate::correlations;
use crate::numeric::{as_number, as_text, decimal, mean_decimal, percentage};

/// Minimum number of paired numeric answers before a correlation is reported.
pub const DEFAULT_MIN_CORRELATION_PAIRS: usize = 3;

/// Knobs for the study-level extras computed next to the per-question stats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AggregateOptions {
    pub correlations: bool,
    pub min_correlation_pairs: usize,
}

impl Default for AggregateOptions {
    fn default() -> Self {
        Self {
            correlations: true,
            min_correlation_pairs: DEFAULT_MIN_CORRELATION_PAIRS,
        }
    }
}

/// Compute the statistics report with default options.
#[must_use]
pub fn aggregate(questions: &[Question], responses: &[Response]) -> StudyStatistics {
    aggregate_with(questions, responses, &AggregateOptions::default())
}

/// Compute the statistics report.
#[must_use]
pub fn aggregate_with(
    questions: &[Question],
    responses: &[Response],
    options: &AggregateOptions,
) -> StudyStatistics {
    debug!(
        questions = questions.len(),
        responses = responses.len(),
        "aggregating study statistics"
    );

    let question_stats = questions
        .iter()
        .map(|q| (q.id.clone(), question_statistics(q, responses)))
        .collect();

    let correlations = if options.correlations {
        correlations(questions, responses, options.min_correlation_pairs)
    } else {
        Vec::new()
    };

    StudyStatistics {
        total_responses: responses.len(),
        question_stats,
        correlations,
    }
}

fn question_statistics(question: &Question, responses: &[Response]) -> QuestionStatistics {
    let values: Vec<&Value> = responses
        .iter()
        .filter_map(|r| r.answer(&question.id))
        .collect();

    let breakdown = match &question.kind {
        QuestionKind::Text { .. } => text_breakdown(&values),
        QuestionKind::Number { .. } => Breakdown::Number(numeric_summary(&values)),
        QuestionKind::Scale { .. } => Breakdown::Scale(numeric_summary(&values)),
        QuestionKind::SingleChoice { .. } => Breakdown::SingleChoice {
            distribution: single_distribution(&values),
        },
        QuestionKind::MultipleChoice { .. } => Breakdown::MultipleChoice {
            distribution: multiple_distribution(&values),
        },
        QuestionKind::Date => Breakdown::Date,
    };

    QuestionStatistics {
        title: question.title.clone(),
        total_answers: values.len(),
        response_rate: percentage(values.len(), responses.len()),
        breakdown,
    }
}

fn text_breakdown(values: &[&Value]) -> Breakdown {
    let (lengths, word_counts): (Vec<usize>, Vec<usize>) = values
        .iter()
        .map(|v| {
            let text = as_text(v);
            (text.chars().count(), text.split_whitespace().count())
        })
        .unzip();

    Breakdown::Text {
        average_length: mean_decimal(&lengths),
        average_word_count: mean_decimal(&word_counts),
    }
}

/// Non-numeric answers are dropped here but still count as answered.
#[allow(clippy::cast_precision_loss)]
fn numeric_summary(values: &[&Value]) -> NumericSummary {
    let numbers: Vec<f64> = values.iter().filter_map(|v| as_number(v)).collect();
    if numbers.is_empty() {
        return NumericSummary::empty();
    }

    let min = numbers.iter().copied().fold(f64::INFINITY, f64::min);
    let max = numbers.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let mean = numbers.iter().sum::<f64>() / numbers.len() as f64;

    NumericSummary {
        min: Some(min),
        max: Some(max),
        average: Some(decimal(mean)),
    }
}

fn single_distribution(values: &[&Value]) -> Distribution {
    let mut distribution = Distribution::new();
    for value in values {
        *distribution.entry(as_text(value).into_owned()).or_default() += 1;
    }
    distribution
}

/// Flatten-then-count: an option listed twice in one answer counts twice.
/// Answers that are not arrays are skipped.
fn multiple_distribution(values: &[&Value]) -> Distribution {
    let mut distribution = Distribution::new();
    for value in values {
        let Value::Array(selected) = value else {
            debug!(answer = %value, "skipping non-array multiple-choice answer");
            continue;
        };
        for option in selected.iter().filter(|o| !is_blank(o)) {
            *distribution.entry(as_text(option).into_owned()).or_default() += 1;
        }
    }
    distribution
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use lab_core::entities::Answers;
    use lab_core::enums::QuestionType;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn responses(question_id: &str, values: &[Value]) -> Vec<Response> {
        values
            .iter()
            .enumerate()
            .map(|(i, v)| Response {
                id: format!("rsp-{i}"),
                study_id: "stu-1".into(),
                answers: Answers::from([(question_id.to_string(), v.clone())]),
                created_at: Utc::now(),
            })
            .collect()
    }

    fn stats_for<'a>(report: &'a StudyStatistics, id: &str) -> &'a QuestionStatistics {
        report.question(id).expect("question stats present")
    }

    #[test]
    fn zero_responses() {
        let questions = vec![
            Question::text("t", "Note"),
            Question::number("n", "Load"),
            Question::single_choice("s", "Grip", ["a"]),
            Question::multiple_choice("m", "Defects", ["a"]),
            Question::scale("c", "Confidence", 1.0, 5.0),
            Question::date("d", "Date"),
        ];
        let report = aggregate(&questions, &[]);

        assert_eq!(report.total_responses, 0);
        assert_eq!(report.question_stats.len(), 6);
        for (_, stats) in &report.question_stats {
            assert_eq!(stats.response_rate, "0");
            assert_eq!(stats.total_answers, 0);
        }
        assert_eq!(
            stats_for(&report, "t").breakdown,
            Breakdown::Text {
                average_length: "0".into(),
                average_word_count: "0".into(),
            }
        );
        assert!(stats_for(&report, "n").breakdown.numeric().unwrap().is_empty());
    }

    #[test]
    fn number_stats_skip_garbage() {
        let questions = vec![Question::number("n", "X")];
        let rs = responses("n", &[json!("10"), json!("20"), json!("abc")]);
        let report = aggregate(&questions, &rs);
        let stats = stats_for(&report, "n");

        assert_eq!(stats.total_answers, 3);
        assert_eq!(stats.response_rate, "100.00");
        assert_eq!(
            stats.breakdown,
            Breakdown::Number(NumericSummary {
                min: Some(10.0),
                max: Some(20.0),
                average: Some("15.00".into()),
            })
        );
    }

    #[test]
    fn all_garbage_omits_numeric_fields() {
        let questions = vec![Question::scale("c", "Confidence", 1.0, 5.0)];
        let rs = responses("c", &[json!("high"), json!(true)]);
        let report = aggregate(&questions, &rs);
        let stats = stats_for(&report, "c");
        assert_eq!(stats.total_answers, 2);
        assert_eq!(stats.breakdown, Breakdown::Scale(NumericSummary::empty()));
    }

    #[test]
    fn single_choice_distribution() {
        let questions = vec![Question::single_choice("s", "Colour", ["red", "blue"])];
        let rs = responses("s", &[json!("red"), json!("red"), json!("blue")]);
        let report = aggregate(&questions, &rs);
        assert_eq!(
            stats_for(&report, "s").breakdown.distribution(),
            Some(&Distribution::from([("red".into(), 2), ("blue".into(), 1)]))
        );
    }

    #[test]
    fn multiple_choice_distribution() {
        let questions = vec![Question::multiple_choice("m", "Defects", ["a", "b"])];
        let rs = responses("m", &[json!(["a", "b"]), json!(["a"])]);
        let report = aggregate(&questions, &rs);
        assert_eq!(
            stats_for(&report, "m").breakdown.distribution(),
            Some(&Distribution::from([("a".into(), 2), ("b".into(), 1)]))
        );
    }

    #[test]
    fn multiple_choice_non_array_is_skipped_but_counted() {
        let questions = vec![Question::multiple_choice("m", "Defects", ["a"])];
        let rs = responses("m", &[json!("a"), json!(["a"]), json!(7)]);
        let report = aggregate(&questions, &rs);
        let stats = stats_for(&report, "m");
        assert_eq!(stats.total_answers, 3);
        assert_eq!(
            stats.breakdown.distribution(),
            Some(&Distribution::from([("a".into(), 1)]))
        );
    }

    #[test]
    fn empty_selection_is_not_an_answer() {
        let questions = vec![Question::multiple_choice("m", "Defects", ["a"])];
        let rs = responses("m", &[json!([]), json!(["a"])]);
        let report = aggregate(&questions, &rs);
        let stats = stats_for(&report, "m");
        assert_eq!(stats.total_answers, 1);
        assert_eq!(stats.response_rate, "50.00");
    }

    #[test]
    fn tie_values_round_up_in_report() {
        let questions = vec![Question::text("t", "Note")];
        let mut values = vec![json!("ab"); 7];
        values.push(json!("abc"));
        let mut rs = responses("t", &values);
        rs.extend((0..24).map(|i| Response {
            id: format!("rsp-empty-{i}"),
            study_id: "stu-1".into(),
            answers: Answers::new(),
            created_at: Utc::now(),
        }));
        let report = aggregate(&questions, &rs);
        let stats = stats_for(&report, "t");
        assert_eq!(stats.response_rate, "25.00");
        match &stats.breakdown {
            Breakdown::Text { average_length, .. } => assert_eq!(average_length, "2.13"),
            other => panic!("unexpected breakdown {other:?}"),
        }
    }

    #[test]
    fn blank_values_are_not_answers() {
        let questions = vec![Question::text("t", "Note")];
        let mut rs = responses("t", &[json!(""), json!(null), json!("four"), json!("twelve chars")]);
        rs.push(Response {
            id: "rsp-missing".into(),
            study_id: "stu-1".into(),
            answers: Answers::new(),
            created_at: Utc::now(),
        });
        let report = aggregate(&questions, &rs);
        let stats = stats_for(&report, "t");

        assert_eq!(report.total_responses, 5);
        assert_eq!(stats.total_answers, 2);
        assert_eq!(stats.response_rate, "40.00");
        assert_eq!(
            stats.breakdown,
            Breakdown::Text {
                average_length: "8.00".into(),
                average_word_count: "1.50".into(),
            }
        );
    }

    #[test]
    fn text_length_counts_characters_not_bytes() {
        let questions = vec![Question::text("t", "Note")];
        let rs = responses("t", &[json!("héllo")]);
        let report = aggregate(&questions, &rs);
        match &stats_for(&report, "t").breakdown {
            Breakdown::Text { average_length, .. } => assert_eq!(average_length, "5.00"),
            other => panic!("unexpected breakdown {other:?}"),
        }
    }

    #[test]
    fn date_reports_count_and_rate_only() {
        let questions = vec![Question::date("d", "Test date")];
        let rs = responses("d", &[json!("2026-03-01"), json!("")]);
        let report = aggregate(&questions, &rs);
        let stats = stats_for(&report, "d");
        assert_eq!(stats.total_answers, 1);
        assert_eq!(stats.response_rate, "50.00");
        assert_eq!(stats.question_type(), QuestionType::Date);
        assert_eq!(stats.breakdown, Breakdown::Date);
    }

    #[test]
    fn stats_follow_schema_order() {
        let questions = vec![
            Question::text("zeta", "Z"),
            Question::text("alpha", "A"),
            Question::text("mid", "M"),
        ];
        let report = aggregate(&questions, &[]);
        let ids: Vec<&str> = report.question_stats.iter().map(|(id, _)| id.as_str()).collect();
        assert_eq!(ids, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn correlations_can_be_disabled() {
        let questions = vec![Question::number("x", "X"), Question::number("y", "Y")];
        let rs: Vec<Response> = (1..=4)
            .map(|i| Response {
                id: format!("rsp-{i}"),
                study_id: "stu-1".into(),
                answers: Answers::from([
                    ("x".to_string(), json!(i)),
                    ("y".to_string(), json!(i * 2)),
                ]),
                created_at: Utc::now(),
            })
            .collect();

        assert_eq!(aggregate(&questions, &rs).correlations.len(), 1);

        let off = AggregateOptions {
            correlations: false,
            ..AggregateOptions::default()
        };
        assert!(aggregate_with(&questions, &rs, &off).correlations.is_empty());
    }
}
