//! Condition matching: status equality and the before-departure window.

use chrono::{DateTime, Utc};

use paxmsg_core::{Flight, TimestampError};

use crate::schema::RuleCondition;

const MILLIS_PER_MINUTE: f64 = 60_000.0;

impl RuleCondition {
    /// Check whether every present predicate holds for `flight` at `now`.
    ///
    /// An empty `status` counts as absent, as the rule editor writes `""` for "any".
    /// The departure timestamp is only parsed when a threshold is set.
    pub fn matches(&self, flight: &Flight, now: DateTime<Utc>) -> Result<bool, TimestampError> {
        if let Some(status) = self.status.as_deref().filter(|s| !s.is_empty()) {
            if status != flight.status {
                return Ok(false);
            }
        }

        if let Some(threshold) = self.before_departure_mins_threshold {
            // Negative once the flight has departed, so the window stays open.
            if minutes_until(flight.departure()?, now) > threshold {
                return Ok(false);
            }
        }

        Ok(true)
    }
}

/// Fractional minutes from `now` until `departure`.
fn minutes_until(departure: DateTime<Utc>, now: DateTime<Utc>) -> f64 {
    (departure - now).num_milliseconds() as f64 / MILLIS_PER_MINUTE
}
