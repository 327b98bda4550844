//! Lenient boolean decoding for flags persisted as integers.

use serde::de::{self, Deserializer, Unexpected};
use serde::Deserialize;

#[derive(Deserialize)]
#[serde(untagged)]
enum RawFlag {
    Bool(bool),
    Int(i64),
}

/// Accepts `true`/`false` as well as the `1`/`0` the rule store writes.
pub(crate) fn deserialize<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    match RawFlag::deserialize(deserializer)? {
        RawFlag::Bool(b) => Ok(b),
        RawFlag::Int(0) => Ok(false),
        RawFlag::Int(1) => Ok(true),
        RawFlag::Int(n) => Err(de::Error::invalid_value(
            Unexpected::Signed(n),
            &"a boolean or 0/1",
        )),
    }
}

pub(crate) fn default_true() -> bool {
    true
}
