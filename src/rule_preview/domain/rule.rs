use super::label::{Label, LabelColor};
use super::lenient;
use serde::{Deserialize, Serialize};

/// Status value marking a rule as active
pub const ACTIVE_STATUS: &str = "active";

/// A recommendation rule as listed in the content table.
///
/// Every field is optional on input. Missing and `null` values read as the
/// empty string and numbers as their text, so a partially populated record
/// still renders.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Rule {
    #[serde(deserialize_with = "lenient::text")]
    pub rule_id: String,
    #[serde(deserialize_with = "lenient::text")]
    pub name: String,
    #[serde(deserialize_with = "lenient::text")]
    pub plugin: String,
    #[serde(deserialize_with = "lenient::text")]
    pub error_key: String,
    #[serde(deserialize_with = "lenient::text")]
    pub product_code: String,
    #[serde(deserialize_with = "lenient::text")]
    pub role: String,
    #[serde(deserialize_with = "lenient::text")]
    pub category: String,
    #[serde(deserialize_with = "lenient::text")]
    pub status: String,
}

/// Active/inactive lifecycle status of a rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleStatus {
    Active,
    Inactive,
}

impl RuleStatus {
    pub fn from_status(status: &str) -> Self {
        if status == ACTIVE_STATUS {
            RuleStatus::Active
        } else {
            RuleStatus::Inactive
        }
    }

    /// Glyph shown in the Active column
    pub fn glyph(&self) -> &'static str {
        match self {
            RuleStatus::Active => "✔",
            RuleStatus::Inactive => "✘",
        }
    }

    pub fn color(&self) -> LabelColor {
        match self {
            RuleStatus::Active => LabelColor::Green,
            RuleStatus::Inactive => LabelColor::Red,
        }
    }
}

impl Rule {
    pub fn status(&self) -> RuleStatus {
        RuleStatus::from_status(&self.status)
    }

    pub fn is_active(&self) -> bool {
        self.status() == RuleStatus::Active
    }

    /// Route of the detail page for this rule
    pub fn detail_link(&self) -> String {
        format!("/preview/{}", self.rule_id)
    }

    /// Label with the capitalised raw status, coloured by lifecycle.
    ///
    /// `None` while the status is unknown.
    pub fn status_label(&self) -> Option<Label> {
        let mut chars = self.status.chars();
        let first = chars.next()?;
        let text: String = first.to_uppercase().chain(chars).collect();
        Some(Label::new(text, self.status().color()))
    }

    /// Case-insensitive match of an already lowercased query against
    /// name, plugin and error key. An empty query matches everything.
    pub fn matches_query(&self, lowered_query: &str) -> bool {
        lowered_query.is_empty()
            || self.name.to_lowercase().contains(lowered_query)
            || self.plugin.to_lowercase().contains(lowered_query)
            || self.error_key.to_lowercase().contains(lowered_query)
    }
}
