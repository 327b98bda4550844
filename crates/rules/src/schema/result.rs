use serde::{Deserialize, Serialize};

/// A rendered message for one matching rule. Never persisted by the engine.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationResult {
    pub rule_id: String,
    pub message: String,
}
