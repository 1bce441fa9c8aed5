//! Custom serde helpers for backend wire formats.

/// Deserializes an `f64` sent either as a JSON number or as a numeric string.
///
/// The chart endpoint serializes pandas frames, which may emit `"187.2"` as
/// easily as `187.2`.
pub mod number_or_string {
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<f64, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Raw::deserialize(deserializer)? {
            Raw::Number(n) => Ok(n),
            Raw::Text(s) => s
                .trim()
                .parse::<f64>()
                .map_err(|_| serde::de::Error::custom(format!("Invalid number: {:?}", s))),
        }
    }
}

/// Parse a session date as the backend formats it.
///
/// Accepts `2024-01-02`, `2024-01-02 00:00:00`, `2024-01-02T00:00:00` and
/// RFC 3339 timestamps; only the calendar date is kept.
pub fn parse_session_date(raw: &str) -> Option<chrono::NaiveDate> {
    use chrono::{DateTime, NaiveDate, NaiveDateTime};

    let raw = raw.trim();
    if let Ok(d) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(d);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    for format in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(dt.date());
        }
    }
    raw.get(..10)
        .and_then(|prefix| NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Value {
        #[serde(with = "number_or_string")]
        v: f64,
    }

    #[test]
    fn test_number_or_string_accepts_both() {
        let a: Value = serde_json::from_str(r#"{"v": 12.5}"#).unwrap();
        let b: Value = serde_json::from_str(r#"{"v": "12.5"}"#).unwrap();
        assert_eq!(a.v, 12.5);
        assert_eq!(b.v, 12.5);
    }

    #[test]
    fn test_number_or_string_rejects_garbage() {
        assert!(serde_json::from_str::<Value>(r#"{"v": "n/a"}"#).is_err());
    }

    #[test]
    fn test_parse_session_date_formats() {
        let expected = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        assert_eq!(parse_session_date("2024-01-02"), Some(expected));
        assert_eq!(parse_session_date("2024-01-02 00:00:00"), Some(expected));
        assert_eq!(parse_session_date("2024-01-02T00:00:00"), Some(expected));
        assert_eq!(parse_session_date("2024-01-02T00:00:00-05:00"), Some(expected));
        assert_eq!(parse_session_date("2024-01-02 00:00:00-05:00"), Some(expected));
        assert_eq!(parse_session_date("yesterday"), None);
    }
}
