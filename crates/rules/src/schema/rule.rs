//! Stored automation rule.

use serde::{Deserialize, Serialize};

use super::condition::RuleCondition;
use super::flag;

/// A passenger-messaging automation: when `condition` holds for a flight,
/// `message_template` is rendered against it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Rule {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub condition: RuleCondition,
    pub message_template: String,
    /// Inactive rules are never evaluated. Defaults to `true` like the store column.
    #[serde(default = "flag::default_true", deserialize_with = "flag::deserialize")]
    pub is_active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}
