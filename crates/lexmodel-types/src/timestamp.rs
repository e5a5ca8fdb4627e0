//! Timestamp wire encoding.
//!
//! The service encodes `createdDate` / `lastUpdatedDate` as epoch seconds,
//! optionally with a millisecond fraction (`1600000000.25`). Decoding accepts
//! integer and fractional numbers; encoding emits an integer when the value
//! has no sub-second part.

use chrono::{DateTime, Utc};

/// Convert fractional epoch seconds into a UTC timestamp (millisecond precision).
pub fn from_epoch_seconds(seconds: f64) -> Option<DateTime<Utc>> {
    if !seconds.is_finite() {
        return None;
    }
    let millis = (seconds * 1000.0).round();
    if millis < i64::MIN as f64 || millis > i64::MAX as f64 {
        return None;
    }
    DateTime::from_timestamp_millis(millis as i64)
}

/// serde adapter for `Option<DateTime<Utc>>` fields, used with `#[serde(with)]`.
pub mod epoch_seconds {
    use chrono::{DateTime, Utc};
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            None => serializer.serialize_none(),
            Some(ts) => {
                let millis = ts.timestamp_millis();
                if millis % 1000 == 0 {
                    serializer.serialize_i64(ts.timestamp())
                } else {
                    serializer.serialize_f64(millis as f64 / 1000.0)
                }
            }
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let Some(seconds) = Option::<f64>::deserialize(deserializer)? else {
            return Ok(None);
        };
        super::from_epoch_seconds(seconds)
            .map(Some)
            .ok_or_else(|| D::Error::custom(format!("timestamp out of range: {seconds}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, serde::Serialize, serde::Deserialize)]
    struct Stamped {
        #[serde(with = "epoch_seconds", default)]
        at: Option<DateTime<Utc>>,
    }

    #[test]
    fn test_integer_seconds_roundtrip() {
        let parsed: Stamped = serde_json::from_str(r#"{"at":1600000000}"#).unwrap();
        let at = parsed.at.unwrap();
        assert_eq!(at.timestamp(), 1_600_000_000);
        assert_eq!(serde_json::to_string(&parsed).unwrap(), r#"{"at":1600000000}"#);
    }

    #[test]
    fn test_fractional_seconds_keep_millis() {
        let parsed: Stamped = serde_json::from_str(r#"{"at":1600000000.25}"#).unwrap();
        assert_eq!(parsed.at.unwrap().timestamp_millis(), 1_600_000_000_250);
        assert_eq!(serde_json::to_string(&parsed).unwrap(), r#"{"at":1600000000.25}"#);
    }

    #[test]
    fn test_null_and_missing_are_unset() {
        let parsed: Stamped = serde_json::from_str(r#"{"at":null}"#).unwrap();
        assert!(parsed.at.is_none());
        let parsed: Stamped = serde_json::from_str("{}").unwrap();
        assert!(parsed.at.is_none());
    }

    #[test]
    fn test_non_finite_rejected() {
        assert!(from_epoch_seconds(f64::NAN).is_none());
        assert!(from_epoch_seconds(f64::INFINITY).is_none());
        assert!(from_epoch_seconds(1e300).is_none());
    }

    #[test]
    fn test_toml_integer_seconds() {
        let parsed: Stamped = toml::from_str("at = 1600000000").unwrap();
        assert_eq!(parsed.at.unwrap().timestamp(), 1_600_000_000);
    }
}
