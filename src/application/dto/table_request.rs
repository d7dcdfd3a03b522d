use crate::rule_preview::domain::SortState;

/// TableRequest - request DTO for rendering the content table
#[derive(Debug, Clone, Default)]
pub struct TableRequest {
    /// Sort column and direction
    pub sort: SortState,
    /// Search query, applied without debounce
    pub query: String,
}

impl TableRequest {
    pub fn new(sort: SortState, query: impl Into<String>) -> Self {
        Self {
            sort,
            query: query.into(),
        }
    }
}
