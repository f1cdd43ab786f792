//! Lenient readers for loosely typed backend rows.
//!
//! Every reader is total: a missing, null or mistyped value yields the
//! documented default instead of an error.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde_json::{Number, Value};

use super::BackendRecord;
use crate::model::numeric::{coerce_count, coerce_number};
use crate::storage::RecordId;

/// Text value, or an empty string. Numbers and booleans are rendered.
pub fn text(row: &BackendRecord, key: &str) -> String {
    match row.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    }
}

/// Text value when present and non-empty.
pub fn optional_text(row: &BackendRecord, key: &str) -> Option<String> {
    Some(text(row, key)).filter(|s| !s.is_empty())
}

/// First non-empty text among `keys`.
pub fn first_text(row: &BackendRecord, keys: &[&str]) -> String {
    keys.iter()
        .find_map(|key| optional_text(row, key))
        .unwrap_or_default()
}

pub fn number(row: &BackendRecord, key: &str, fallback: f64) -> f64 {
    coerce_number(row.get(key), fallback)
}

pub fn count(row: &BackendRecord, key: &str, fallback: u32) -> u32 {
    coerce_count(row.get(key), fallback)
}

/// Record id from a bare number, a numeric string, or a lookup object
/// carrying `Id`.
pub fn lookup_id(value: Option<&Value>) -> Option<RecordId> {
    match value? {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f.trunc() as i64)),
        Value::String(s) => s.trim().parse().ok(),
        Value::Object(obj) => lookup_id(obj.get("Id")),
        _ => None,
    }
}

pub fn id(row: &BackendRecord, key: &str) -> Option<RecordId> {
    lookup_id(row.get(key))
}

/// Parse a backend timestamp. RFC 3339 is expected; a bare
/// `YYYY-MM-DDTHH:MM:SS` is read as UTC.
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .ok()
        .or_else(|| {
            NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
                .ok()
                .map(|naive| naive.and_utc())
        })
}

pub fn timestamp(row: &BackendRecord, key: &str) -> Option<DateTime<Utc>> {
    match row.get(key) {
        Some(Value::String(s)) => parse_timestamp(s),
        _ => None,
    }
}

/// First parseable timestamp among `keys`, or the Unix epoch.
pub fn first_timestamp(row: &BackendRecord, keys: &[&str]) -> DateTime<Utc> {
    keys.iter()
        .find_map(|key| timestamp(row, key))
        .unwrap_or(DateTime::UNIX_EPOCH)
}

/// JSON number for a float; non-finite values are written as `0`.
pub fn float_value(value: f64) -> Value {
    Number::from_f64(value).map_or_else(|| Value::from(0), Value::Number)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn row(value: Value) -> BackendRecord {
        match value {
            Value::Object(map) => map,
            _ => unreachable!("test rows are objects"),
        }
    }

    #[test]
    fn test_lookup_id_shapes() {
        assert_eq!(lookup_id(Some(&json!(7))), Some(7));
        assert_eq!(lookup_id(Some(&json!("12"))), Some(12));
        assert_eq!(lookup_id(Some(&json!({"Id": 3, "Name": "Acme"}))), Some(3));
        assert_eq!(lookup_id(Some(&json!(null))), None);
        assert_eq!(lookup_id(None), None);
    }

    #[test]
    fn test_first_timestamp_falls_back_in_order() {
        let r = row(json!({
            "created_at_c": "not a date",
            "CreatedOn": "2024-01-15T10:30:00"
        }));
        let ts = first_timestamp(&r, &["created_at_c", "CreatedOn"]);
        assert_eq!(ts.to_rfc3339(), "2024-01-15T10:30:00+00:00");

        let empty = BackendRecord::new();
        assert_eq!(first_timestamp(&empty, &["created_at_c"]), DateTime::UNIX_EPOCH);
    }

    #[test]
    fn test_text_renders_numbers() {
        let r = row(json!({"phone_c": 5551234, "email_c": null}));
        assert_eq!(text(&r, "phone_c"), "5551234");
        assert_eq!(text(&r, "email_c"), "");
        assert_eq!(optional_text(&r, "email_c"), None);
    }
}
