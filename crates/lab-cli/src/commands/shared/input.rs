//! JSON arguments given inline, as a file path, or on stdin.

use std::io::Read;

use anyhow::Context;
use lab_core::codec::{deserialize_answers, deserialize_questions};
use lab_core::entities::{Answers, Question};

/// Resolve `raw` to JSON text.
///
/// `-` reads stdin; text starting with `[` or `{` is taken as-is; anything
/// else is a file path.
pub fn read_json_arg(raw: &str, field: &str) -> anyhow::Result<String> {
    let trimmed = raw.trim_start();
    if raw == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .with_context(|| format!("failed to read {field} from stdin"))?;
        return Ok(text);
    }
    if trimmed.starts_with('[') || trimmed.starts_with('{') {
        return Ok(raw.to_string());
    }
    std::fs::read_to_string(raw).with_context(|| format!("failed to read {field} file '{raw}'"))
}

pub fn questions_arg(raw: &str) -> anyhow::Result<Vec<Question>> {
    let text = read_json_arg(raw, "questions")?;
    Ok(deserialize_questions(&text)?)
}

pub fn answers_arg(raw: &str) -> anyhow::Result<Answers> {
    let text = read_json_arg(raw, "answers")?;
    Ok(deserialize_answers(&text)?)
}
