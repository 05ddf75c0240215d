//! The three-field payload posted to the endpoint.

use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};
use serde::Serialize;

use crate::error::ClientError;

/// A single log entry as transmitted.
///
/// Field names match the JSON keys expected by the ingestion endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Envelope {
    pub level: String,
    pub message: String,
    pub timestamp: String,
}

impl Envelope {
    /// Build an envelope stamped with the current instant.
    pub fn now(level: &str, message: &str) -> Self {
        Self::at(level, message, Utc::now())
    }

    /// Build an envelope stamped with `instant`, truncated to milliseconds.
    pub fn at(level: &str, message: &str, instant: DateTime<Utc>) -> Self {
        Self {
            level: level.to_owned(),
            message: message.to_owned(),
            timestamp: format_timestamp(instant),
        }
    }

    /// Encode as compact JSON.
    pub fn to_json(&self) -> Result<String, ClientError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Render `instant` as RFC 3339 UTC with exactly three fractional digits.
pub fn format_timestamp(instant: DateTime<Utc>) -> String {
    instant
        .trunc_subsecs(3)
        .to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Timelike};
    use rstest::{fixture, rstest};

    #[fixture]
    fn instant() -> DateTime<Utc> {
        NaiveDate::from_ymd_opt(2024, 1, 15)
            .and_then(|d| d.and_hms_nano_opt(10, 30, 0, 123_456_789))
            .expect("valid date")
            .and_utc()
    }

    #[rstest]
    fn timestamp_is_truncated_not_rounded(instant: DateTime<Utc>) {
        assert_eq!(format_timestamp(instant), "2024-01-15T10:30:00.123Z");
    }

    #[rstest]
    fn whole_seconds_keep_millisecond_digits(instant: DateTime<Utc>) {
        let whole = instant.with_nanosecond(0).expect("valid nanos");
        assert_eq!(format_timestamp(whole), "2024-01-15T10:30:00.000Z");
    }

    #[rstest]
    fn json_has_exactly_the_three_fields(instant: DateTime<Utc>) {
        let json = Envelope::at("info", "Hello \"World\"", instant)
            .to_json()
            .expect("serialise");
        assert_eq!(
            json,
            r#"{"level":"info","message":"Hello \"World\"","timestamp":"2024-01-15T10:30:00.123Z"}"#
        );
    }

    #[rstest]
    fn now_produces_parseable_millisecond_instant() {
        let envelope = Envelope::now("debug", "tick");
        let parsed = DateTime::parse_from_rfc3339(&envelope.timestamp).expect("rfc3339");
        assert_eq!(parsed.offset().local_minus_utc(), 0);
        assert_eq!(parsed.nanosecond() % 1_000_000, 0);
    }
}
