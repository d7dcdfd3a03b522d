use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;

/// Reserved key carrying the host display name
pub const NAME_KEY: &str = "__name";
/// Reserved key carrying the source label
pub const SOURCE_KEY: &str = "__source";
/// Reserved key carrying the date line
pub const DATE_KEY: &str = "__date";

/// Raw per-host hit payload.
///
/// Keys containing the reserved `__` marker are metadata; every other key is
/// an opaque detail field. Key order is kept as received.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HitPayload(Map<String, Value>);

impl HitPayload {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn display_name(&self) -> String {
        self.reserved_text(NAME_KEY)
    }

    pub fn source(&self) -> String {
        self.reserved_text(SOURCE_KEY)
    }

    pub fn date(&self) -> String {
        self.reserved_text(DATE_KEY)
    }

    /// Reserved metadata as display text; strings verbatim, other values as
    /// JSON, missing or null as empty.
    fn reserved_text(&self, key: &str) -> String {
        match self.0.get(key) {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(text)) => text.clone(),
            Some(other) => other.to_string(),
        }
    }
}

impl From<Map<String, Value>> for HitPayload {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}

/// Number of matching hosts per rule id. Missing entries count as zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HitCountMap(HashMap<String, u64>);

impl HitCountMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count_for(&self, rule_id: &str) -> u64 {
        self.0.get(rule_id).copied().unwrap_or(0)
    }

    pub fn insert(&mut self, rule_id: impl Into<String>, count: u64) {
        self.0.insert(rule_id.into(), count);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, u64)> for HitCountMap {
    fn from_iter<I: IntoIterator<Item = (String, u64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
