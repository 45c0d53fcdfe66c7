//! Value coercion and the decimal-string formatting used in reports.

use std::borrow::Cow;

use serde_json::Value;

/// Coerce an answer to a finite number.
///
/// JSON numbers are taken as-is; strings are trimmed and parsed. Everything
/// else (booleans, arrays, objects, `NaN`/`inf` spellings) is not numeric.
pub fn as_number(value: &Value) -> Option<f64> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                None
            } else {
                trimmed.parse::<f64>().ok()
            }
        }
        Value::Null | Value::Bool(_) | Value::Array(_) | Value::Object(_) => None,
    };
    parsed.filter(|n| n.is_finite())
}

/// Text form of an answer: strings verbatim, anything else as compact JSON.
pub fn as_text(value: &Value) -> Cow<'_, str> {
    match value {
        Value::String(s) => Cow::Borrowed(s.as_str()),
        other => Cow::Owned(other.to_string()),
    }
}

/// Two-decimal fixed formatting, e.g. `15` → `"15.00"`.
///
/// Exact halfway values round away from zero (`0.125` → `"0.13"`), where
/// `format!` alone would round them to even. A finite `f64` lies exactly
/// halfway between two hundredths only when it is an odd multiple of 1/8.
#[allow(clippy::float_cmp)]
pub fn decimal(value: f64) -> String {
    let eighths = value * 8.0;
    if eighths.fract() == 0.0 && eighths.rem_euclid(2.0) == 1.0 {
        let hundredths = (value.abs() * 100.0).ceil().copysign(value);
        return format!("{:.2}", hundredths / 100.0);
    }
    format!("{value:.2}")
}

/// `part / whole * 100` as a two-decimal string, or `"0"` when `whole` is zero.
#[allow(clippy::cast_precision_loss)]
pub fn percentage(part: usize, whole: usize) -> String {
    if whole == 0 {
        return "0".to_string();
    }
    decimal(part as f64 / whole as f64 * 100.0)
}

/// Mean as a two-decimal string, or `"0"` for an empty input.
#[allow(clippy::cast_precision_loss)]
pub fn mean_decimal(values: &[usize]) -> String {
    if values.is_empty() {
        return "0".to_string();
    }
    let sum: usize = values.iter().sum();
    decimal(sum as f64 / values.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(json!(10), Some(10.0))]
    #[case(json!(2.5), Some(2.5))]
    #[case(json!("20"), Some(20.0))]
    #[case(json!("  -3.25 "), Some(-3.25))]
    #[case(json!("1e3"), Some(1000.0))]
    #[case(json!("abc"), None)]
    #[case(json!("NaN"), None)]
    #[case(json!("inf"), None)]
    #[case(json!(""), None)]
    #[case(json!(true), None)]
    #[case(json!(["1"]), None)]
    #[case(json!(null), None)]
    fn coercion(#[case] value: Value, #[case] expected: Option<f64>) {
        assert_eq!(as_number(&value), expected);
    }

    #[rstest]
    #[case(0.125, "0.13")]
    #[case(2.125, "2.13")]
    #[case(3.125, "3.13")]
    #[case(0.375, "0.38")]
    #[case(-0.125, "-0.13")]
    #[case(1.005, "1.00")]
    #[case(0.5, "0.50")]
    #[case(2.0 / 3.0, "0.67")]
    fn halfway_values_round_up(#[case] value: f64, #[case] expected: &str) {
        assert_eq!(decimal(value), expected);
    }

    #[test]
    fn percentage_formatting() {
        assert_eq!(percentage(0, 0), "0");
        assert_eq!(percentage(0, 4), "0.00");
        assert_eq!(percentage(2, 3), "66.67");
        assert_eq!(percentage(3, 3), "100.00");
        assert_eq!(percentage(1, 32), "3.13");
    }

    #[test]
    fn mean_formatting() {
        assert_eq!(mean_decimal(&[]), "0");
        assert_eq!(mean_decimal(&[3, 4]), "3.50");
        assert_eq!(mean_decimal(&[2, 2, 2, 2, 2, 2, 2, 3]), "2.13");
    }

    #[test]
    fn text_of_non_strings_is_json() {
        assert_eq!(as_text(&json!("red")), "red");
        assert_eq!(as_text(&json!(3)), "3");
        assert_eq!(as_text(&json!(true)), "true");
    }
}
