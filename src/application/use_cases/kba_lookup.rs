use crate::application::views::{DetailView, KbaRequestId};
use crate::ports::outbound::KbaRepository;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
use tokio::task::JoinHandle;

/// A detail view shared with in-flight background lookups
pub type SharedDetailView = Arc<Mutex<DetailView>>;

/// Locks a shared detail view, recovering the guard from a poisoned lock.
pub fn lock_view(view: &Mutex<DetailView>) -> MutexGuard<'_, DetailView> {
    view.lock().unwrap_or_else(PoisonError::into_inner)
}

/// KbaLookup - best-effort knowledge-base enrichment of a detail view
///
/// The lookup runs on its own task and only holds a weak handle to the view:
/// once the view is dropped the result is discarded. Failures are logged and
/// settle the view with no article; they never reach the primary rendering.
pub struct KbaLookup<K> {
    repository: Arc<K>,
}

impl<K> KbaLookup<K>
where
    K: KbaRepository + 'static,
{
    pub fn new(repository: K) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    #[cfg(test)]
    pub(crate) fn repository(&self) -> &K {
        &self.repository
    }

    /// Starts the lookup for the view's current reference id.
    ///
    /// Returns `None` without issuing a request when the rule has no
    /// reference id; the view's loading flag is cleared in that case.
    pub fn start(&self, view: &SharedDetailView) -> Option<JoinHandle<()>> {
        let (kba_id, request) = {
            let mut guard = lock_view(view);
            match guard.kba_id() {
                Some(kba_id) => {
                    let request = guard.begin_kba();
                    (kba_id, request)
                }
                None => {
                    tracing::debug!(rule_id = guard.rule_id(), "no node_id; skipping KBA lookup");
                    guard.skip_kba();
                    return None;
                }
            }
        };

        let repository = Arc::clone(&self.repository);
        let view = Arc::downgrade(view);
        Some(tokio::spawn(Self::run(repository, kba_id, request, view)))
    }

    async fn run(
        repository: Arc<K>,
        kba_id: String,
        request: KbaRequestId,
        view: Weak<Mutex<DetailView>>,
    ) {
        let detail = match repository.fetch_kba(&kba_id).await {
            Ok(detail) => detail,
            Err(e) => {
                tracing::error!(kba_id = %kba_id, error = %e, "KBA fetch failed.");
                None
            }
        };

        match view.upgrade() {
            Some(view) => {
                lock_view(&view).finish_kba(request, detail);
            }
            None => {
                tracing::debug!(kba_id = %kba_id, "detail view closed; discarding KBA result");
            }
        }
    }
}
