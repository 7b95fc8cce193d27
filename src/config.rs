use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::AttestationError;

/// Read-only option map handed to an attestation source when it is built.
///
/// Clones share the same underlying map. There are no mutating methods, so a
/// source can hold its configuration for its whole lifetime without copying.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Map<String, Value>", into = "Map<String, Value>")]
pub struct SourceConfig {
    entries: Arc<Map<String, Value>>,
}

impl SourceConfig {

    pub fn empty() -> Self {
        SourceConfig::default()
    }

    pub fn from_json(json: &str) -> Result<Self, AttestationError> {
        match serde_json::from_str::<Map<String, Value>>(json) {
            Ok(entries) => { Ok(SourceConfig::from(entries)) }
            Err(err) => { Err(AttestationError::Json(format!("Failed to parse source configuration. [{err}]"))) }
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Returns the option as a string slice, or `None` when it is absent or
    /// not a string.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.entries.get(key).and_then(Value::as_str)
    }

    /// Like [`SourceConfig::get`], falling back to `default` when the key is
    /// absent. A present value is returned as-is whatever its JSON type.
    pub fn get_or(&self, key: &str, default: &str) -> Value {
        match self.entries.get(key) {
            Some(value) => { value.clone() }
            None => { Value::String(default.to_string()) }
        }
    }

    pub fn get_str_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.get_str(key).unwrap_or(default)
    }

    /// Reads a string option that must be present.
    pub fn require_str(&self, key: &str) -> Result<&str, AttestationError> {
        match self.entries.get(key) {
            None => { Err(AttestationError::configuration(key, "option is required")) }
            Some(Value::String(value)) => { Ok(value) }
            Some(other) => { Err(AttestationError::configuration(key, format!("expected a string, found {other}"))) }
        }
    }

    pub fn get_bool_or(&self, key: &str, default: bool) -> Result<bool, AttestationError> {
        match self.entries.get(key) {
            None => { Ok(default) }
            Some(Value::Bool(value)) => { Ok(*value) }
            Some(other) => { Err(AttestationError::configuration(key, format!("expected a boolean, found {other}"))) }
        }
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.entries.iter()
    }
}

impl From<Map<String, Value>> for SourceConfig {
    fn from(entries: Map<String, Value>) -> Self {
        SourceConfig { entries: Arc::new(entries) }
    }
}

impl From<SourceConfig> for Map<String, Value> {
    fn from(config: SourceConfig) -> Self {
        Arc::unwrap_or_clone(config.entries)
    }
}

impl FromIterator<(String, Value)> for SourceConfig {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        SourceConfig::from(iter.into_iter().collect::<Map<String, Value>>())
    }
}
