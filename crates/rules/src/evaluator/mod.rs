//! Rule evaluation against a single flight.
//!
//! Evaluation is a pure function of the flight, the full rule set and an
//! explicit `now`:
//! 1. inactive rules are dropped,
//! 2. each remaining rule's [`RuleCondition`](crate::schema::RuleCondition) is matched against the flight,
//! 3. every match renders its message template.
//!
//! All matching rules fire; results keep the input rule order.

mod condition;
mod error;

use chrono::{DateTime, Utc};
use tracing::debug;

use paxmsg_core::Flight;

use crate::schema::{EvaluationResult, Rule};
use crate::templates::render;

pub use error::EvaluationError;

// ── Rule evaluator ──────────────────────────────────────────────────

/// Evaluates automation rules against one flight.
pub struct RuleEvaluator;

impl RuleEvaluator {
    /// Evaluate `rules` against `flight` at time `now`.
    ///
    /// An empty result is a normal outcome. The only error is a data-integrity
    /// fault: a timestamp needed by some active rule's condition could not be
    /// parsed, which fails the whole call.
    pub fn evaluate(
        flight: &Flight,
        rules: &[Rule],
        now: DateTime<Utc>,
    ) -> Result<Vec<EvaluationResult>, EvaluationError> {
        let mut results = Vec::new();
        let mut active = 0usize;

        for rule in rules {
            if !rule.is_active {
                debug!(rule_id = %rule.id, "rule inactive, skipped");
                continue;
            }
            active += 1;

            let matched = rule
                .condition
                .matches(flight, now)
                .map_err(|source| EvaluationError::InvalidTimestamp {
                    rule_id: rule.id.clone(),
                    flight_id: flight.id.clone(),
                    field: "departureTime",
                    source,
                })?;

            if !matched {
                debug!(rule_id = %rule.id, flight_id = %flight.id, "rule did not match");
                continue;
            }

            debug!(
                rule_id = %rule.id,
                flight_id = %flight.id,
                unconditional = rule.condition.is_unconditional(),
                "rule matched"
            );
            results.push(EvaluationResult {
                rule_id: rule.id.clone(),
                message: render(&rule.message_template, flight),
            });
        }

        debug!(
            flight_id = %flight.id,
            rules = rules.len(),
            active,
            matched = results.len(),
            "evaluation complete"
        );
        Ok(results)
    }
}

// ── Tests ───────────────────────────────────────────────────────────
