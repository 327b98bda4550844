//! Flight passenger-messaging rule engine.
//!
//! This crate provides:
//! - Serde types for automation rules and evaluation results
//! - Condition matching on flight status and time-to-departure
//! - `{{token}}` message template rendering
//! - A pure evaluator: one flight + all rules + `now` → rendered messages
//! - File-based rule and flight loading for the `paxmsg-eval` command

pub mod evaluator;
pub mod loader;
pub mod schema;
pub mod templates;

pub use evaluator::{EvaluationError, RuleEvaluator};
