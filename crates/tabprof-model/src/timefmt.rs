//! Serde helpers for the report's wire-level timestamp formats.
//!
//! The report contract uses `YYYY-MM-DD HH:MM:SS.ffffff` for the analysis
//! timestamp and `YYYY-MM-DD HH:MM:SS` for datetime extrema, not the
//! RFC 3339 form chrono serializes by default.

use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serializer};

const MICROS_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";
const SECONDS_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

fn parse_flexible(raw: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, SECONDS_FORMAT))
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f"))
        .ok()
}

/// `analysis_timestamp`: microsecond precision, always present.
pub mod datetime_micros {
    use super::{Deserialize, Deserializer, MICROS_FORMAT, NaiveDateTime, Serializer, parse_flexible};
    use serde::de::Error as _;

    pub fn serialize<S: Serializer>(
        value: &NaiveDateTime,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&value.format(MICROS_FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse_flexible(&raw)
            .ok_or_else(|| D::Error::custom(format!("invalid timestamp: {raw}")))
    }
}

/// Datetime extrema: second precision, nullable.
pub mod datetime_opt {
    use super::{Deserialize, Deserializer, NaiveDateTime, SECONDS_FORMAT, Serializer, parse_flexible};
    use serde::de::Error as _;

    pub fn serialize<S: Serializer>(
        value: &Option<NaiveDateTime>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(instant) => serializer.collect_str(&instant.format(SECONDS_FORMAT)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<NaiveDateTime>, D::Error> {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        match raw {
            None => Ok(None),
            Some(text) => parse_flexible(&text)
                .map(Some)
                .ok_or_else(|| D::Error::custom(format!("invalid datetime: {text}"))),
        }
    }
}
