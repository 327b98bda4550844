//! Trigger conditions attached to a rule.

use serde::{Deserialize, Serialize};

/// Conjunction of optional predicates over a flight's current state.
///
/// Every absent field means "don't care", so `{}` matches every flight.
/// Matching itself lives in [`crate::evaluator`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RuleCondition {
    /// Exact, case-sensitive flight status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Fire once departure is at most this many minutes away.
    #[serde(
        default,
        alias = "beforeDepartureMins",
        skip_serializing_if = "Option::is_none"
    )]
    pub before_departure_mins_threshold: Option<f64>,
}

impl RuleCondition {
    /// True when no predicate is set.
    pub fn is_unconditional(&self) -> bool {
        self.status.is_none() && self.before_departure_mins_threshold.is_none()
    }
}
