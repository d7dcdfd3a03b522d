use super::rule::Rule;
use crate::shared::error::PreviewError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Sortable columns of the content table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    Status,
    Plugin,
    ErrorKey,
    ProductCode,
    Role,
    Category,
}

impl SortKey {
    pub const ALL: [SortKey; 6] = [
        SortKey::Status,
        SortKey::Plugin,
        SortKey::ErrorKey,
        SortKey::ProductCode,
        SortKey::Role,
        SortKey::Category,
    ];

    /// Maps a table column index to its sort key.
    ///
    /// Column 0 is the blank leading column and column 7 (hits) is not
    /// sortable; both yield `None`.
    pub fn from_column(index: usize) -> Option<Self> {
        match index {
            1 => Some(SortKey::Status),
            2 => Some(SortKey::Plugin),
            3 => Some(SortKey::ErrorKey),
            4 => Some(SortKey::ProductCode),
            5 => Some(SortKey::Role),
            6 => Some(SortKey::Category),
            _ => None,
        }
    }

    pub fn column(&self) -> usize {
        match self {
            SortKey::Status => 1,
            SortKey::Plugin => 2,
            SortKey::ErrorKey => 3,
            SortKey::ProductCode => 4,
            SortKey::Role => 5,
            SortKey::Category => 6,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Status => "status",
            SortKey::Plugin => "plugin",
            SortKey::ErrorKey => "error_key",
            SortKey::ProductCode => "product_code",
            SortKey::Role => "role",
            SortKey::Category => "category",
        }
    }

    /// The rule field this key compares on
    pub fn field<'a>(&self, rule: &'a Rule) -> &'a str {
        match self {
            SortKey::Status => &rule.status,
            SortKey::Plugin => &rule.plugin,
            SortKey::ErrorKey => &rule.error_key,
            SortKey::ProductCode => &rule.product_code,
            SortKey::Role => &rule.role,
            SortKey::Category => &rule.category,
        }
    }
}

impl FromStr for SortKey {
    type Err = PreviewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('-', "_");
        match normalized.as_str() {
            "status" | "active" => Ok(SortKey::Status),
            "plugin" => Ok(SortKey::Plugin),
            "error_key" => Ok(SortKey::ErrorKey),
            "product_code" => Ok(SortKey::ProductCode),
            "role" => Ok(SortKey::Role),
            "category" => Ok(SortKey::Category),
            _ => Err(PreviewError::InvalidSortColumn {
                column: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl FromStr for SortDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortDirection::Asc),
            "desc" | "descending" => Ok(SortDirection::Desc),
            _ => Err(format!(
                "Invalid direction: {}. Please specify 'asc' or 'desc'",
                s
            )),
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortDirection::Asc => write!(f, "asc"),
            SortDirection::Desc => write!(f, "desc"),
        }
    }
}

/// Current sort column and direction of the table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SortState {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl SortState {
    pub fn new(key: SortKey, direction: SortDirection) -> Self {
        Self { key, direction }
    }
}

impl Default for SortState {
    /// Plugin ascending, the first real column after the status glyph
    fn default() -> Self {
        Self::new(SortKey::Plugin, SortDirection::Asc)
    }
}
