use crate::application::dto::TableRequest;
use crate::application::read_models::TableReadModel;
use crate::application::views::ContentTableView;
use crate::ports::outbound::ContentSource;
use crate::rule_preview::services::debounce::DEFAULT_DEBOUNCE;
use crate::shared::Result;
use std::time::Duration;

/// PreviewTableUseCase - renders the content table from injected content
///
/// # Type Parameters
/// * `S` - ContentSource implementation
pub struct PreviewTableUseCase<S> {
    source: S,
    debounce: Duration,
}

impl<S> PreviewTableUseCase<S>
where
    S: ContentSource,
{
    pub fn new(source: S) -> Self {
        Self {
            source,
            debounce: DEFAULT_DEBOUNCE,
        }
    }

    /// Overrides the search debounce window of the table view
    pub fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }

    /// Loads rules and hit counts, then sorts and filters them.
    ///
    /// The request's query is final, so it is applied without debouncing.
    pub fn execute(&self, request: TableRequest) -> Result<TableReadModel> {
        let rules = self.source.rules()?;
        let hits = self.source.hit_counts()?;
        tracing::debug!(rules = rules.len(), counted = hits.len(), "loaded content");

        let mut view = ContentTableView::with_sort(request.sort, self.debounce);
        view.set_data(rules, hits);
        if !request.query.is_empty() {
            view.apply_search(request.query);
        }

        Ok(view.read_model())
    }
}
