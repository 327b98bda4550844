//! Data-integrity faults raised during evaluation.

use paxmsg_core::TimestampError;

/// Why an evaluation call could not produce a result.
///
/// Zero matches is not an error; this type only covers records the engine
/// cannot read.
#[derive(Debug, thiserror::Error)]
pub enum EvaluationError {
    /// A flight timestamp needed by a rule's condition is malformed.
    #[error("Rule '{rule_id}' cannot be evaluated: flight '{flight_id}' has an invalid {field}: {source}")]
    InvalidTimestamp {
        rule_id: String,
        flight_id: String,
        field: &'static str,
        #[source]
        source: TimestampError,
    },
}
