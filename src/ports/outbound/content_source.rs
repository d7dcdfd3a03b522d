use crate::rule_preview::domain::{HitCountMap, HitPayload, Rule, RuleDetail};
use crate::shared::Result;

/// ContentSource port supplying already-fetched content to the views
///
/// This is a read-only input port: the views never fetch or mutate content
/// themselves, which keeps them testable without any network.
pub trait ContentSource {
    /// All rule records in their published order
    fn rules(&self) -> Result<Vec<Rule>>;

    /// Hit counts keyed by rule id
    fn hit_counts(&self) -> Result<HitCountMap>;

    /// Full content of one rule
    ///
    /// # Errors
    /// Returns an error if the rule is unknown or its content cannot be read
    fn detail(&self, rule_id: &str) -> Result<RuleDetail>;

    /// Per-host hit payloads for one rule; an unknown rule has no hits
    fn detail_hits(&self, rule_id: &str) -> Result<Vec<HitPayload>>;
}
