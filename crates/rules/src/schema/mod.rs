//! Serde types for automation rules and evaluation output.
//!
//! Defines the records exchanged with the rule store and the caller:
//! - `Rule`: a stored automation pairing a trigger condition with a message template
//! - `RuleCondition`: optional, conjunctive predicates over a flight's state
//! - `EvaluationResult`: one rendered message for one matching rule

mod condition;
mod flag;
mod result;
mod rule;

pub use condition::*;
pub use result::*;
pub use rule::*;
