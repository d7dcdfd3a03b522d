use crate::rule_preview::domain::HitPayload;
use serde_json::{Map, Value};

/// Marker flagging internal metadata keys in a hit payload
pub const RESERVED_MARKER: &str = "__";

/// Projects a hit payload onto its displayable detail fields.
pub struct HitProjector;

impl HitProjector {
    /// Drops every key containing the reserved marker anywhere in its name;
    /// the remaining values keep their JSON types and order.
    pub fn project(hit: &HitPayload) -> Map<String, Value> {
        hit.fields()
            .iter()
            .filter(|(key, _)| !key.contains(RESERVED_MARKER))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }
}
