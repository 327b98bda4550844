//! File-based loading of rule sets and flight lists.
//!
//! Rules come from a single JSON/YAML file (one rule or a list) or from a
//! directory scanned recursively. Flights come from a single list file.
//! Ordering is deterministic: files in sorted path order, records in file order.

mod core;
mod error;
mod flights;
mod format;


pub use self::core::RuleLoader;
pub use self::error::{LoadError, Result};
pub use self::flights::{find_flight, load_flights};
pub use self::format::Format;
