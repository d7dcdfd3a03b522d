use crate::application::dto::DetailRequest;
use crate::application::read_models::DetailReport;
use crate::application::use_cases::kba_lookup::{lock_view, KbaLookup, SharedDetailView};
use crate::application::views::{DetailView, NO_SELECTION};
use crate::ports::outbound::{ContentSource, KbaRepository, ProgressReporter};
use crate::shared::security::validate_rule_id;
use crate::shared::Result;
use std::sync::{Arc, Mutex};

/// PreviewDetailUseCase - renders one rule's detail page
///
/// Loads the rule content and its hits from the injected source, applies the
/// requested selection and free-style override, and waits for the
/// best-effort KBA enrichment before producing the report.
///
/// # Type Parameters
/// * `S` - ContentSource implementation
/// * `K` - KbaRepository implementation
/// * `PR` - ProgressReporter implementation
pub struct PreviewDetailUseCase<S, K, PR> {
    source: S,
    kba_lookup: KbaLookup<K>,
    progress_reporter: PR,
}

impl<S, K, PR> PreviewDetailUseCase<S, K, PR>
where
    S: ContentSource,
    K: KbaRepository + 'static,
    PR: ProgressReporter,
{
    pub fn new(source: S, kba_repository: K, progress_reporter: PR) -> Self {
        Self {
            source,
            kba_lookup: KbaLookup::new(kba_repository),
            progress_reporter,
        }
    }

    pub async fn execute(&self, request: DetailRequest) -> Result<DetailReport> {
        validate_rule_id(&request.rule_id)?;

        let view = self.open_view(&request)?;
        self.enrich(&view, request.fetch_kba).await;

        let report = lock_view(&view).report();
        Ok(report)
    }

    /// Builds the view state from the source and the request's UI input
    fn open_view(&self, request: &DetailRequest) -> Result<SharedDetailView> {
        let detail = self.source.detail(&request.rule_id)?;
        let hits = self.source.detail_hits(&request.rule_id)?;

        let mut view = DetailView::new(request.rule_id.as_str());
        view.set_detail(detail);
        view.set_hits(hits);

        if request.select != NO_SELECTION {
            view.select_hit(request.select);
            if view.selected_index() == NO_SELECTION {
                tracing::warn!(
                    select = request.select,
                    hits = view.hits().len(),
                    "requested hit does not exist; nothing selected"
                );
            }
        }

        if let Some(free_style) = &request.free_style {
            view.on_free_style_change(free_style.as_str());
        }

        if request.collapsed {
            view.toggle_expanded();
        }

        Ok(Arc::new(Mutex::new(view)))
    }

    async fn enrich(&self, view: &SharedDetailView, fetch_kba: bool) {
        if !fetch_kba {
            lock_view(view).skip_kba();
            return;
        }

        let Some(handle) = self.kba_lookup.start(view) else {
            return;
        };

        self.progress_reporter
            .start_loading("🔎 Looking up knowledge-base article...");
        if let Err(e) = handle.await {
            tracing::error!(error = %e, "KBA lookup task did not complete");
            lock_view(view).skip_kba();
        }
        self.progress_reporter.finish_loading(None);

        if lock_view(view).kba_detail().is_none() {
            self.progress_reporter
                .report("ℹ️  No knowledge-base article available for this rule");
        }
    }
}
