//! Table row structs for the content table read model

use crate::rule_preview::domain::{HitCountMap, Rule, RuleStatus, SortState};
use serde::Serialize;

/// Header of one table column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TableColumn {
    pub title: &'static str,
    pub sortable: bool,
}

/// Columns of the content table.
///
/// The blank first column keeps the status column from being the first
/// sortable column, which the table widget mishandles together with a text
/// filter.
pub const COLUMNS: [TableColumn; 8] = [
    TableColumn { title: "", sortable: false },
    TableColumn { title: "Active", sortable: true },
    TableColumn { title: "Plugin", sortable: true },
    TableColumn { title: "Error Key", sortable: true },
    TableColumn { title: "Product Code", sortable: true },
    TableColumn { title: "Role", sortable: true },
    TableColumn { title: "Category", sortable: true },
    TableColumn { title: "Hits", sortable: false },
];

/// One displayed row of the content table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableRow {
    pub rule_id: String,
    pub status: RuleStatus,
    pub glyph: &'static str,
    pub plugin: String,
    /// Detail route the plugin cell links to
    pub link: String,
    pub error_key: String,
    pub product_code: String,
    pub role: String,
    pub category: String,
    pub hits: u64,
}

impl TableRow {
    pub fn from_rule(rule: &Rule, hits: &HitCountMap) -> Self {
        let status = rule.status();
        Self {
            rule_id: rule.rule_id.clone(),
            status,
            glyph: status.glyph(),
            plugin: rule.plugin.clone(),
            link: rule.detail_link(),
            error_key: rule.error_key.clone(),
            product_code: rule.product_code.clone(),
            role: rule.role.clone(),
            category: rule.category.clone(),
            hits: hits.count_for(&rule.rule_id),
        }
    }
}

/// Everything a formatter needs to render the content table
#[derive(Debug, Clone, Serialize)]
pub struct TableReadModel {
    pub columns: Vec<TableColumn>,
    pub sort: SortState,
    /// Column index the sort indicator is drawn on
    pub sort_column: usize,
    pub query: String,
    pub total_rules: usize,
    pub rows: Vec<TableRow>,
}
