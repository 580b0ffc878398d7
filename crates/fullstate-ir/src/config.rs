//! Circuit construction settings.

use serde::{Deserialize, Serialize};

/// Settings a [`Circuit`](crate::Circuit) is created with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CircuitConfig {
    /// Names handed out, in order, to registers created without one.
    pub register_names: Vec<String>,
    /// Prefix of the `{prefix}{k}` labels used once `register_names` runs out.
    pub fallback_prefix: String,
}

impl CircuitConfig {
    /// Replace the register name pool.
    #[must_use]
    pub fn with_register_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.register_names = names.into_iter().map(Into::into).collect();
        self
    }

    /// Set the fallback label prefix.
    #[must_use]
    pub fn with_fallback_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.fallback_prefix = prefix.into();
        self
    }
}

impl Default for CircuitConfig {
    fn default() -> Self {
        Self {
            register_names: ('a'..='z').map(String::from).collect(),
            fallback_prefix: "reg".into(),
        }
    }
}
