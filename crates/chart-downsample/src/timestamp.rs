// File: crates/chart-downsample/src/timestamp.rs
// Summary: Host-facing timestamp values and their normalization to epoch milliseconds.
// Notes:
// - Hosts hand over numbers, date-times or text. Everything funnels through
//   `Timestamp::to_millis` before it reaches the reducer, which only sees i64.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::error::{DownsampleError, Result};

/// Naive (UTC) date-time layouts accepted for text timestamps, most specific first.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y/%m/%d %H:%M:%S",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d"];

#[derive(Clone, Debug, PartialEq)]
pub enum Timestamp {
    /// Epoch milliseconds.
    Millis(i64),
    DateTime(DateTime<Utc>),
    /// Unparsed text: integer epoch ms, RFC 3339, or one of the naive layouts above.
    Text(String),
}

impl Timestamp {
    /// Build from a floating-point epoch-ms value (fractional part truncated).
    pub fn from_millis_f64(ms: f64) -> Result<Self> {
        if !ms.is_finite() || ms < i64::MIN as f64 || ms > i64::MAX as f64 {
            return Err(DownsampleError::TimestampOutOfRange(ms.to_string()));
        }
        Ok(Timestamp::Millis(ms.trunc() as i64))
    }

    /// True for the empty-text sentinel hosts use to clear a time bound.
    pub fn is_empty_text(&self) -> bool {
        matches!(self, Timestamp::Text(s) if s.trim().is_empty())
    }

    /// Normalize to epoch milliseconds.
    pub fn to_millis(&self) -> Result<i64> {
        match self {
            Timestamp::Millis(ms) => Ok(*ms),
            Timestamp::DateTime(dt) => Ok(dt.timestamp_millis()),
            Timestamp::Text(s) => parse_text_millis(s),
        }
    }
}

fn parse_text_millis(raw: &str) -> Result<i64> {
    let s = raw.trim();
    if s.is_empty() {
        return Err(DownsampleError::InvalidTimestamp { value: raw.to_string() });
    }
    if let Ok(ms) = s.parse::<i64>() {
        return Ok(ms);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.timestamp_millis());
    }
    for fmt in DATETIME_FORMATS {
        if let Ok(ndt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Ok(ndt.and_utc().timestamp_millis());
        }
    }
    for fmt in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(s, fmt) {
            if let Some(ndt) = date.and_hms_opt(0, 0, 0) {
                return Ok(ndt.and_utc().timestamp_millis());
            }
        }
    }
    Err(DownsampleError::InvalidTimestamp { value: raw.to_string() })
}

impl From<i64> for Timestamp {
    fn from(ms: i64) -> Self { Timestamp::Millis(ms) }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(dt: DateTime<Utc>) -> Self { Timestamp::DateTime(dt) }
}

impl From<&str> for Timestamp {
    fn from(s: &str) -> Self { Timestamp::Text(s.to_string()) }
}

impl From<String> for Timestamp {
    fn from(s: String) -> Self { Timestamp::Text(s) }
}
