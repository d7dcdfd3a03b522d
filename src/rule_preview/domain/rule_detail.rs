use super::label::{Label, LabelColor};
use super::lenient;
use super::rule::Rule;
use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Base of the customer portal link built from a rule's node id
const NODE_LINK_BASE: &str = "https://access.redhat.com/node/";

/// Title shown while the rule detail has not arrived yet
pub const LOADING_TITLE: &str = "loading...";

/// Severity of a rule as published in its content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Severity {
    Error,
    Warn,
    Info,
    Other(String),
}

impl From<String> for Severity {
    fn from(value: String) -> Self {
        match value.as_str() {
            "ERROR" => Severity::Error,
            "WARN" => Severity::Warn,
            "INFO" => Severity::Info,
            _ => Severity::Other(value),
        }
    }
}

impl From<Severity> for String {
    fn from(value: Severity) -> Self {
        match value {
            Severity::Error => "ERROR".to_string(),
            Severity::Warn => "WARN".to_string(),
            Severity::Info => "INFO".to_string(),
            Severity::Other(raw) => raw,
        }
    }
}

impl Severity {
    pub fn label_color(&self) -> LabelColor {
        match self {
            Severity::Error => LabelColor::Red,
            Severity::Warn => LabelColor::Orange,
            Severity::Info => LabelColor::Purple,
            Severity::Other(_) => LabelColor::Blue,
        }
    }

    pub fn label(&self) -> Label {
        Label::new(String::from(self.clone()), self.label_color())
    }
}

/// Full rule content shown on the detail page.
///
/// Carries the table fields of [`Rule`] plus the free text, publication data
/// and any keys this model does not name, so the rule can be echoed back as
/// received.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleDetail {
    #[serde(flatten)]
    pub rule: Rule,
    pub description: Option<String>,
    pub generic: Option<String>,
    pub reason: Option<String>,
    pub more_info: Option<String>,
    pub resolution: Option<String>,
    pub summary: Option<String>,
    pub publish_date: Option<String>,
    #[serde(deserialize_with = "lenient::optional_id")]
    pub node_id: Option<String>,
    pub severity: Option<Severity>,
    pub reboot_required: Option<bool>,
    pub total_risk: Option<u8>,
    pub likelihood: Option<u8>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl RuleDetail {
    /// Page title: the rule id, or the loading placeholder
    pub fn title(&self) -> &str {
        if self.rule.rule_id.is_empty() {
            LOADING_TITLE
        } else {
            &self.rule.rule_id
        }
    }

    pub fn reboot_required(&self) -> bool {
        self.reboot_required.unwrap_or(false)
    }

    /// External reference id used for KBA enrichment, if any
    pub fn kba_id(&self) -> Option<&str> {
        self.node_id.as_deref().filter(|id| !id.trim().is_empty())
    }

    /// Portal link for the rule's knowledge-base node
    pub fn detail_href(&self) -> Option<String> {
        self.kba_id().map(|id| format!("{}{}", NODE_LINK_BASE, id))
    }

    /// Label shown when there is no node id to link to
    pub fn missing_node_label() -> Label {
        Label::new("No node_id present", LabelColor::Gray)
    }

    /// Publication date for display.
    ///
    /// RFC 3339 timestamps and plain dates are shown as `YYYY-MM-DD`; anything
    /// else is shown verbatim.
    pub fn publish_date_display(&self) -> Option<String> {
        let raw = self.publish_date.as_deref()?.trim();
        if raw.is_empty() {
            return None;
        }
        if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
            return Some(timestamp.format("%Y-%m-%d").to_string());
        }
        if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            return Some(date.format("%Y-%m-%d").to_string());
        }
        Some(raw.to_string())
    }
}
