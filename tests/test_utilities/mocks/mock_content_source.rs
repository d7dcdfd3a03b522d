use content_preview::prelude::*;
use content_preview::shared::error::PreviewError;
use std::collections::HashMap;

/// Mock ContentSource for testing
#[derive(Default)]
pub struct MockContentSource {
    rules: Vec<Rule>,
    hit_counts: HitCountMap,
    details: HashMap<String, RuleDetail>,
    hits: HashMap<String, Vec<HitPayload>>,
    should_fail: bool,
}

impl MockContentSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            should_fail: true,
            ..Self::default()
        }
    }

    /// Adds a rule with the given plugin and error key; the rule id is
    /// `plugin|error_key` and the name is `<plugin> rule`
    pub fn with_rule(mut self, plugin: &str, error_key: &str, status: &str) -> Self {
        self.rules.push(Rule {
            rule_id: format!("{}|{}", plugin, error_key),
            name: format!("{} rule", plugin),
            plugin: plugin.to_string(),
            error_key: error_key.to_string(),
            status: status.to_string(),
            ..Rule::default()
        });
        self
    }

    pub fn with_hit_count(mut self, rule_id: &str, count: u64) -> Self {
        self.hit_counts.insert(rule_id, count);
        self
    }

    pub fn with_detail(mut self, detail: RuleDetail) -> Self {
        self.details.insert(detail.rule.rule_id.clone(), detail);
        self
    }

    pub fn with_hits(mut self, rule_id: &str, hits: Vec<HitPayload>) -> Self {
        self.hits.insert(rule_id.to_string(), hits);
        self
    }

    fn check(&self) -> Result<()> {
        if self.should_fail {
            anyhow::bail!("Mock content source failure");
        }
        Ok(())
    }
}

impl ContentSource for MockContentSource {
    fn rules(&self) -> Result<Vec<Rule>> {
        self.check()?;
        Ok(self.rules.clone())
    }

    fn hit_counts(&self) -> Result<HitCountMap> {
        self.check()?;
        Ok(self.hit_counts.clone())
    }

    fn detail(&self, rule_id: &str) -> Result<RuleDetail> {
        self.check()?;
        self.details.get(rule_id).cloned().ok_or_else(|| {
            PreviewError::RuleNotFound {
                rule_id: rule_id.to_string(),
            }
            .into()
        })
    }

    fn detail_hits(&self, rule_id: &str) -> Result<Vec<HitPayload>> {
        self.check()?;
        Ok(self.hits.get(rule_id).cloned().unwrap_or_default())
    }
}
