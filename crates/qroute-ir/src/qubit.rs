//! Logical qubit identifiers.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Name of a logical qubit as it appears in the source circuit.
///
/// The name is an opaque token. It is compared and hashed as a string and
/// never interpreted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QubitName(String);

impl QubitName {
    /// Create a qubit name from any string-like value.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for QubitName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for QubitName {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl From<String> for QubitName {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl Borrow<str> for QubitName {
    fn borrow(&self) -> &str {
        &self.0
    }
}
