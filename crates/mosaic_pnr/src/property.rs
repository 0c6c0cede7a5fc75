//! Cell parameter and attribute values.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A parameter value as handed over by the placer: an integer or a string.
///
/// Strings may themselves hold literals such as `0b1010`; interpreting them
/// is up to the consumer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Property {
    /// An integer value.
    Int(i64),
    /// A textual value.
    Str(String),
}

/// Strings pass through unchanged, integers are printed in decimal.
impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Property::Int(v) => write!(f, "{v}"),
            Property::Str(s) => f.write_str(s),
        }
    }
}

impl From<i64> for Property {
    fn from(v: i64) -> Self {
        Property::Int(v)
    }
}

impl From<&str> for Property {
    fn from(s: &str) -> Self {
        Property::Str(s.to_string())
    }
}

impl From<String> for Property {
    fn from(s: String) -> Self {
        Property::Str(s)
    }
}
