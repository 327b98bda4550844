//! Flight state record as handed over by the flight store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::TimestampError;

/// Current state of a scheduled flight.
///
/// Timestamps are kept as the stored ISO-8601 strings: message templates
/// render them verbatim, and they are only parsed when a comparison needs
/// them (see [`Flight::departure`]).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Flight {
    pub id: String,
    pub flight_number: String,
    /// Free-form status such as `"On-Time"`, `"Delayed"` or `"Wifi-Down"`.
    pub status: String,
    pub departure_time: String,
    pub arrival_time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl Flight {
    /// Parsed departure time in UTC.
    pub fn departure(&self) -> Result<DateTime<Utc>, TimestampError> {
        parse_timestamp(&self.departure_time)
    }
}

/// Parse an ISO-8601 timestamp (`Z` or offset-qualified) into UTC.
pub fn parse_timestamp(value: &str) -> Result<DateTime<Utc>, TimestampError> {
    DateTime::parse_from_rfc3339(value.trim())
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|source| TimestampError {
            value: value.to_string(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_flight() -> Flight {
        serde_json::from_str(
            r#"{
                "id": "f-1",
                "flightNumber": "LH123",
                "status": "Delayed",
                "departureTime": "2026-03-01T10:30:00+02:00",
                "arrivalTime": "2026-03-01T12:45:00Z",
                "createdAt": "2026-02-01T00:00:00Z",
                "updatedAt": "2026-02-02T00:00:00Z"
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn deserializes_camel_case_record() {
        let flight = sample_flight();
        assert_eq!(flight.flight_number, "LH123");
        assert_eq!(flight.status, "Delayed");
        assert_eq!(flight.created_at.as_deref(), Some("2026-02-01T00:00:00Z"));
    }

    #[test]
    fn audit_timestamps_are_optional() {
        let flight: Flight = serde_json::from_str(
            r#"{"id":"f-2","flightNumber":"BA9","status":"On-Time",
                "departureTime":"2026-03-01T10:00:00Z","arrivalTime":"2026-03-01T11:00:00Z"}"#,
        )
        .unwrap();
        assert!(flight.created_at.is_none());

        let json = serde_json::to_value(&flight).unwrap();
        assert!(json.get("createdAt").is_none());
        assert_eq!(json["departureTime"], "2026-03-01T10:00:00Z");
    }

    #[test]
    fn offset_timestamps_normalize_to_utc() {
        let flight = sample_flight();
        assert_eq!(
            flight.departure().unwrap(),
            Utc.with_ymd_and_hms(2026, 3, 1, 8, 30, 0).unwrap()
        );
    }

    #[test]
    fn fractional_seconds_are_accepted() {
        let ts = parse_timestamp("2026-03-01T10:00:00.250Z").unwrap();
        assert_eq!(ts.timestamp_subsec_millis(), 250);
    }

    #[test]
    fn malformed_timestamp_reports_value() {
        let err = parse_timestamp("tomorrow morning").unwrap_err();
        assert_eq!(err.value, "tomorrow morning");
        assert!(err.to_string().contains("tomorrow morning"));

        assert!(parse_timestamp("").is_err());
        assert!(parse_timestamp("2026-03-01 10:00").is_err());
    }
}
