use chrono::{DateTime, NaiveDate, Utc};
use serde::de::DeserializeOwned;

/// Parse a `SCREAMING_SNAKE_CASE` enum value, accepting any case and `-` for `_`.
pub fn parse_enum<T>(raw: &str, field: &str) -> anyhow::Result<T>
where
    T: DeserializeOwned,
{
    let normalized = raw.trim().replace('-', "_").to_uppercase();
    serde_json::from_value(serde_json::Value::String(normalized))
        .map_err(|error| anyhow::anyhow!("invalid {field} '{raw}': {error}"))
}

/// Parse `YYYY-MM-DD` (midnight UTC) or a full RFC 3339 timestamp.
pub fn parse_date(raw: &str, field: &str) -> anyhow::Result<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .ok_or_else(|| anyhow::anyhow!("invalid {field} '{raw}': expected YYYY-MM-DD or RFC 3339"))
}

#[cfg(test)]
mod tests {
    use lab_core::enums::{StandardBody, StudyStatus};
    use pretty_assertions::assert_eq;

    use super::{parse_date, parse_enum};

    #[test]
    fn parses_lowercase_enum() {
        let status: StudyStatus = parse_enum("completed", "status").expect("status should parse");
        assert_eq!(status, StudyStatus::Completed);
        let body: StandardBody = parse_enum("Astm", "body").expect("body should parse");
        assert_eq!(body, StandardBody::Astm);
    }

    #[test]
    fn errors_on_invalid_enum() {
        let err = parse_enum::<StudyStatus>("done", "status").expect_err("should fail");
        assert!(err.to_string().contains("invalid status 'done'"));
    }

    #[test]
    fn parses_plain_and_rfc3339_dates() {
        assert_eq!(
            parse_date("2026-03-01", "start").unwrap().to_rfc3339(),
            "2026-03-01T00:00:00+00:00"
        );
        assert_eq!(
            parse_date("2026-03-01T10:00:00+02:00", "start")
                .unwrap()
                .to_rfc3339(),
            "2026-03-01T08:00:00+00:00"
        );
        assert!(parse_date("03/01/2026", "start").is_err());
    }
}
