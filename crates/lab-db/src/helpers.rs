//! Row-to-entity parsing helpers.
//!
//! Every repo converts `libsql::Row` (column-indexed) into typed entity
//! structs. These helpers isolate the parsing logic, the dual datetime format
//! (`SQLite`'s `datetime('now')` vs `to_rfc3339()`), and the lenient decoding
//! of stored question/answer JSON.

use chrono::{DateTime, Utc};
use lab_core::codec::{deserialize_answers, deserialize_questions};
use lab_core::entities::{Answers, Question};
use tracing::warn;

use crate::error::DatabaseError;

/// Parse a required TEXT column as `DateTime<Utc>`.
///
/// Handles both RFC 3339 (`"2026-02-09T14:30:00+00:00"`) and `SQLite`'s default
/// format (`"2026-02-09 14:30:00"`).
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the string cannot be parsed as either format.
pub fn parse_datetime(s: &str) -> Result<DateTime<Utc>, DatabaseError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .map(|naive| naive.and_utc())
        .map_err(|e| DatabaseError::Query(format!("Failed to parse datetime '{s}': {e}")))
}

/// Parse an optional TEXT column as `Option<DateTime<Utc>>`.
///
/// # Errors
///
/// Returns `DatabaseError::Query` if a non-empty string cannot be parsed.
pub fn parse_optional_datetime(s: Option<&str>) -> Result<Option<DateTime<Utc>>, DatabaseError> {
    match s {
        Some(s) if !s.is_empty() => Ok(Some(parse_datetime(s)?)),
        _ => Ok(None),
    }
}

/// Parse a TEXT column into a serde-deserializable enum.
///
/// Works with the lab-core enums, which serialize as `SCREAMING_SNAKE_CASE`.
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the string does not match any enum variant.
pub fn parse_enum<T: serde::de::DeserializeOwned>(s: &str) -> Result<T, DatabaseError> {
    serde_json::from_value(serde_json::Value::String(s.to_string()))
        .map_err(|e| DatabaseError::Query(format!("Failed to parse enum from '{s}': {e}")))
}

/// Read a nullable TEXT column. Returns `None` for both SQL NULL and empty string.
///
/// `row.get::<String>(idx)` on a NULL column returns an error, not `""`.
///
/// # Errors
///
/// Returns `DatabaseError` if the column read fails.
pub fn get_opt_string(row: &libsql::Row, idx: i32) -> Result<Option<String>, DatabaseError> {
    match row.get::<Option<String>>(idx)? {
        Some(s) if s.is_empty() => Ok(None),
        other => Ok(other),
    }
}

/// Decode a stored question list, falling back to an empty list.
///
/// A corrupt column must not make the whole schema unreadable, so the
/// failure is logged against the owning row and swallowed.
#[must_use]
pub fn questions_or_empty(text: &str, schema_id: &str) -> Vec<Question> {
    deserialize_questions(text).unwrap_or_else(|error| {
        warn!(schema_id, %error, "stored questions are malformed; treating as empty");
        Vec::new()
    })
}

/// Decode a stored answer map, falling back to an empty map.
#[must_use]
pub fn answers_or_empty(text: &str, response_id: &str) -> Answers {
    deserialize_answers(text).unwrap_or_else(|error| {
        warn!(response_id, %error, "stored answers are malformed; treating as empty");
        Answers::new()
    })
}

/// `%text%` for a case-insensitive `LIKE` match, with wildcards in `text` escaped.
#[must_use]
pub fn like_pattern(text: &str) -> String {
    let escaped = text
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{escaped}%")
}
