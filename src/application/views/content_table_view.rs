use crate::application::read_models::{TableReadModel, TableRow, COLUMNS};
use crate::rule_preview::domain::{HitCountMap, Rule, SortDirection, SortKey, SortState};
use crate::rule_preview::services::{Debouncer, TableEngine};
use crate::shared::error::PreviewError;
use crate::shared::Result;
use std::time::Duration;

/// ContentTableView - transient state of the content table
///
/// Holds the injected rules and hit counts, the sort state, the raw search
/// text and the debounced query. Rows are recomputed whenever the data, the
/// sort or the committed query changes, and each recomputation replaces the
/// previous rows entirely.
pub struct ContentTableView {
    data: Vec<Rule>,
    hits: HitCountMap,
    sort: SortState,
    search_text: String,
    search: Debouncer<String>,
    query: String,
    rows: Vec<TableRow>,
}

impl ContentTableView {
    pub fn new(debounce: Duration) -> Self {
        Self::with_sort(SortState::default(), debounce)
    }

    pub fn with_sort(sort: SortState, debounce: Duration) -> Self {
        Self {
            data: Vec::new(),
            hits: HitCountMap::new(),
            sort,
            search_text: String::new(),
            search: Debouncer::new(String::new(), debounce),
            query: String::new(),
            rows: Vec::new(),
        }
    }

    /// Replaces the data set and recomputes the rows
    pub fn set_data(&mut self, data: Vec<Rule>, hits: HitCountMap) {
        self.data = data;
        self.hits = hits;
        self.rebuild();
    }

    /// Sorts by a column index of the table header
    pub fn on_sort_column(&mut self, column: usize, direction: SortDirection) -> Result<()> {
        let key = SortKey::from_column(column).ok_or_else(|| PreviewError::InvalidSortColumn {
            column: column.to_string(),
        })?;
        self.on_sort(key, direction);
        Ok(())
    }

    pub fn on_sort(&mut self, key: SortKey, direction: SortDirection) {
        self.sort = SortState::new(key, direction);
        self.rebuild();
    }

    /// Records a keystroke in the search box.
    ///
    /// The query only takes effect once the debounce window passes without
    /// further input; see [`next_search_commit`](Self::next_search_commit).
    /// Must be called from within a tokio runtime.
    pub fn on_search_input(&mut self, text: impl Into<String>) {
        let text = text.into();
        self.search_text = text.clone();
        self.search.push(text);
    }

    /// Waits until the latest search text is committed and applies it.
    ///
    /// Values committed for earlier keystrokes are skipped while a newer one
    /// is still pending. Returns at once when no timer is running.
    pub async fn next_search_commit(&mut self) {
        let mut committed = self.search.subscribe();
        loop {
            let current = committed.borrow_and_update().clone();
            if current == self.search_text || !self.search.is_pending() {
                self.commit_query(current);
                return;
            }
            if committed.changed().await.is_err() {
                return;
            }
        }
    }

    /// Applies the debouncer's committed value if it differs from the
    /// current query. Returns whether rows were rebuilt.
    pub fn sync_search(&mut self) -> bool {
        let committed = self.search.committed();
        if committed == self.query {
            return false;
        }
        self.commit_query(committed);
        true
    }

    /// Commits a query immediately, bypassing the debounce window
    pub fn apply_search(&mut self, query: impl Into<String>) {
        let query = query.into();
        self.search_text = query.clone();
        self.search.flush(query.clone());
        self.commit_query(query);
    }

    fn commit_query(&mut self, query: String) {
        self.query = query;
        self.rebuild();
    }

    fn rebuild(&mut self) {
        let rows: Vec<TableRow> = TableEngine::visible(&self.data, self.sort, &self.query)
            .into_iter()
            .map(|rule| TableRow::from_rule(rule, &self.hits))
            .collect();
        tracing::debug!(
            sort = %self.sort.key,
            direction = %self.sort.direction,
            query = %self.query,
            rows = rows.len(),
            "rebuilt content table rows"
        );
        self.rows = rows;
    }

    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    pub fn sort(&self) -> SortState {
        self.sort
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn read_model(&self) -> TableReadModel {
        TableReadModel {
            columns: COLUMNS.to_vec(),
            sort: self.sort,
            sort_column: self.sort.key.column(),
            query: self.query.clone(),
            total_rules: self.data.len(),
            rows: self.rows.clone(),
        }
    }
}
