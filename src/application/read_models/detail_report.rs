//! Detail page read model
//!
//! The report merges the rule content with at most one "details" payload.
//! Instead of spreading loosely typed objects over each other, the payload
//! source is explicit and a valid free-style override always wins over the
//! selected hit.

use crate::rule_preview::domain::{KbaDocument, Label, RuleDetail};
use crate::rule_preview::services::{FreeStyleValidation, ValidatedState};
use serde::Serialize;
use serde_json::{Map, Value};

/// Payload shown as the report's details
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(tag = "source", content = "payload", rename_all = "snake_case")]
pub enum ReportDetails {
    #[default]
    None,
    /// Projected fields of the selected hit
    SelectedHit(Map<String, Value>),
    /// Parsed free-style JSON override
    FreeStyle(Value),
}

impl ReportDetails {
    /// Picks the details payload: free-style override, then selected hit.
    pub fn resolve(selected_hit: Option<Map<String, Value>>, free_style: &FreeStyleValidation) -> Self {
        if let Some(value) = free_style.value() {
            return ReportDetails::FreeStyle(value.clone());
        }
        match selected_hit {
            Some(fields) => ReportDetails::SelectedHit(fields),
            None => ReportDetails::None,
        }
    }

    pub fn payload(&self) -> Option<Value> {
        match self {
            ReportDetails::None => None,
            ReportDetails::SelectedHit(fields) => Some(Value::Object(fields.clone())),
            ReportDetails::FreeStyle(value) => Some(value.clone()),
        }
    }
}

/// Rule text that may contain a restricted HTML/markdown subset.
///
/// Carried unrendered; consumers must sanitise before rendering it as rich
/// text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RichText {
    pub source: String,
    /// Generic rule text is styled differently from the description
    pub generic: bool,
}

impl RichText {
    /// `None` for missing or empty text
    pub fn from_field(text: Option<&str>, generic: bool) -> Option<Self> {
        text.filter(|t| !t.is_empty()).map(|t| Self {
            source: t.to_string(),
            generic,
        })
    }
}

/// One entry of the selectable hit list
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HitListEntry {
    /// 1-based list id; 0 is reserved for "no selection"
    pub id: usize,
    pub name: String,
    pub source: String,
    pub date: String,
    pub preview: Map<String, Value>,
    pub selected: bool,
}

/// State of the free-style JSON widget
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FreeStyleView {
    pub text: String,
    pub validated: ValidatedState,
    pub helper_text: &'static str,
}

/// State of the KBA enrichment
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct KbaView {
    pub loading: bool,
    pub detail: Option<KbaDocument>,
}

/// Everything a formatter needs to render the rule detail page
#[derive(Debug, Clone, Serialize)]
pub struct DetailReport {
    /// Route parameter the page was opened with
    pub rule_id: String,
    pub title: String,
    pub status_label: Option<Label>,
    pub severity_label: Option<Label>,
    pub reboot_required: bool,
    pub publish_date: Option<String>,
    pub detail_href: Option<String>,
    pub description: Option<RichText>,
    pub generic: Option<RichText>,
    pub expanded: bool,
    pub rule: RuleDetail,
    pub details: ReportDetails,
    pub resolution: Option<String>,
    pub hits: Vec<HitListEntry>,
    pub selected_hit: usize,
    pub free_style: FreeStyleView,
    pub kba: KbaView,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule_preview::services::JsonValidator;
    use serde_json::json;

    fn hit_fields() -> Map<String, Value> {
        match json!({"kernel": "4.18"}) {
            Value::Object(fields) => fields,
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_resolve_none() {
        let details = ReportDetails::resolve(None, &FreeStyleValidation::Empty);
        assert_eq!(details, ReportDetails::None);
        assert!(details.payload().is_none());
    }

    #[test]
    fn test_resolve_selected_hit() {
        let details = ReportDetails::resolve(Some(hit_fields()), &FreeStyleValidation::Empty);
        assert_eq!(details.payload(), Some(json!({"kernel": "4.18"})));
    }

    #[test]
    fn test_free_style_overrides_selected_hit() {
        let free_style = JsonValidator::validate(r#"{"override": true}"#);
        let details = ReportDetails::resolve(Some(hit_fields()), &free_style);
        assert_eq!(details, ReportDetails::FreeStyle(json!({"override": true})));
    }

    #[test]
    fn test_invalid_free_style_falls_back_to_selected_hit() {
        let free_style = JsonValidator::validate("{oops");
        let details = ReportDetails::resolve(Some(hit_fields()), &free_style);
        assert!(matches!(details, ReportDetails::SelectedHit(_)));
    }

    #[test]
    fn test_report_details_serialization_is_tagged() {
        let details = ReportDetails::FreeStyle(json!([1]));
        let value = serde_json::to_value(&details).unwrap();
        assert_eq!(value, json!({"source": "free_style", "payload": [1]}));
    }

    #[test]
    fn test_rich_text_skips_empty() {
        assert!(RichText::from_field(None, false).is_none());
        assert!(RichText::from_field(Some(""), true).is_none());
        let text = RichText::from_field(Some("<b>bold</b>"), true).unwrap();
        assert!(text.generic);
        assert_eq!(text.source, "<b>bold</b>");
    }
}
