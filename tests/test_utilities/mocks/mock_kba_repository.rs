use async_trait::async_trait;
use content_preview::prelude::*;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Mock KbaRepository for testing
///
/// Answers from a fixed map of reference id to article, or rejects every
/// lookup when built with [`MockKbaRepository::failing`].
#[derive(Default, Clone)]
pub struct MockKbaRepository {
    documents: HashMap<String, KbaDocument>,
    should_fail: bool,
    calls: Arc<AtomicUsize>,
}

impl MockKbaRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            should_fail: true,
            ..Self::default()
        }
    }

    pub fn with_article(mut self, kba_id: &str, title: &str) -> Self {
        self.documents.insert(
            kba_id.to_string(),
            KbaDocument {
                view_uri: Some(format!("https://access.redhat.com/solutions/{}", kba_id)),
                id: Some(kba_id.to_string()),
                published_title: Some(title.to_string()),
            },
        );
        self
    }

    /// Shared counter of lookups, usable after the mock is moved
    pub fn call_counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl KbaRepository for MockKbaRepository {
    async fn fetch_kba(&self, kba_id: &str) -> Result<Option<KbaDocument>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.should_fail {
            anyhow::bail!("Mock KBA search rejected the request");
        }
        Ok(self.documents.get(kba_id).cloned())
    }
}
