//! Checked, defaulting field lookups over untyped scraper JSON.
//!
//! Every accessor takes the raw object and a key and returns an `Option` (or
//! a default); none of them fail. A field of the wrong type is treated the
//! same as a missing field.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde_json::{Map, Value};

/// String value of `key`, only when it is a JSON string.
#[must_use]
pub fn string_field(obj: &Map<String, Value>, key: &str) -> Option<String> {
    obj.get(key).and_then(Value::as_str).map(str::to_owned)
}

/// String value of `key`, accepting numbers and booleans in their JSON text
/// form.
#[must_use]
pub fn string_like_field(obj: &Map<String, Value>, key: &str) -> Option<String> {
    match obj.get(key)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// `true` only for a JSON boolean `true`.
#[must_use]
pub fn strict_bool_field(obj: &Map<String, Value>, key: &str) -> bool {
    matches!(obj.get(key), Some(Value::Bool(true)))
}

/// Lenient boolean: JSON booleans, the strings `"true"`/`"false"` in any
/// case, and the integer `1`. Anything else is `false`.
#[must_use]
pub fn loose_bool_field(obj: &Map<String, Value>, key: &str) -> bool {
    match obj.get(key) {
        Some(Value::Bool(b)) => *b,
        Some(Value::String(s)) => s.trim().eq_ignore_ascii_case("true"),
        Some(Value::Number(n)) => n.as_i64() == Some(1),
        _ => false,
    }
}

/// `key` verbatim, treating JSON `null` as absent.
#[must_use]
pub fn raw_field(obj: &Map<String, Value>, key: &str) -> Option<Value> {
    obj.get(key).filter(|v| !v.is_null()).cloned()
}

/// Decimal value of `key`, from a JSON number or a numeric string.
#[must_use]
pub fn decimal_field(obj: &Map<String, Value>, key: &str) -> Option<Decimal> {
    match obj.get(key)? {
        Value::Number(n) => parse_decimal(&n.to_string()),
        Value::String(s) => parse_decimal(s),
        _ => None,
    }
}

/// Parses the longest numeric prefix of `raw`, ignoring leading whitespace.
///
/// Accepts an optional sign, digits with an optional `.` fraction (either side
/// may be empty but not both), and an optional `e`/`E` exponent. Trailing
/// text after the number is ignored, so `"129.99 EUR"` parses as `129.99`
/// while `"N/A"` and `"$129"` do not parse.
#[must_use]
pub fn parse_decimal(raw: &str) -> Option<Decimal> {
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let len = bytes.len();
    let mut i = 0usize;

    let negative = match bytes.first() {
        Some(b'-') => {
            i += 1;
            true
        }
        Some(b'+') => {
            i += 1;
            false
        }
        _ => false,
    };

    let int_start = i;
    while i < len && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let int_digits = &s[int_start..i];

    let mut frac_digits = "";
    if i < len && bytes[i] == b'.' {
        let frac_start = i + 1;
        let mut j = frac_start;
        while j < len && bytes[j].is_ascii_digit() {
            j += 1;
        }
        frac_digits = &s[frac_start..j];
        i = j;
    }

    if int_digits.is_empty() && frac_digits.is_empty() {
        return None;
    }

    let mut exponent = "";
    if i < len && (bytes[i] == b'e' || bytes[i] == b'E') {
        let mut j = i + 1;
        if matches!(bytes.get(j), Some(b'-' | b'+')) {
            j += 1;
        }
        let exp_start = j;
        while j < len && bytes[j].is_ascii_digit() {
            j += 1;
        }
        // A bare "e" is trailing text, not an exponent.
        if j > exp_start {
            exponent = &s[i + 1..j];
        }
    }

    let sign = if negative { "-" } else { "" };
    let int_digits = if int_digits.is_empty() { "0" } else { int_digits };
    let mantissa = if frac_digits.is_empty() {
        format!("{sign}{int_digits}")
    } else {
        format!("{sign}{int_digits}.{frac_digits}")
    };

    if exponent.is_empty() {
        Decimal::from_str(&mantissa).ok()
    } else {
        Decimal::from_scientific(&format!("{mantissa}e{exponent}")).ok()
    }
}

/// JSON type name for diagnostics.
#[must_use]
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
