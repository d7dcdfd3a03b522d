use crate::ports::outbound::KbaRepository;
use crate::rule_preview::domain::KbaDocument;
use crate::shared::Result;
use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::Arc;

/// CachingKbaRepository wraps a KbaRepository and adds in-memory caching.
///
/// Both hits and "no article" answers are cached per reference id. Failed
/// lookups are not cached, so the next view of the rule tries again.
pub struct CachingKbaRepository<R: KbaRepository> {
    inner: R,
    cache: Arc<DashMap<String, Option<KbaDocument>>>,
}

impl<R: KbaRepository> CachingKbaRepository<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            cache: Arc::new(DashMap::new()),
        }
    }

    #[cfg(test)]
    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}

#[async_trait]
impl<R: KbaRepository> KbaRepository for CachingKbaRepository<R> {
    async fn fetch_kba(&self, kba_id: &str) -> Result<Option<KbaDocument>> {
        if let Some(cached) = self.cache.get(kba_id) {
            tracing::trace!(kba_id, "KBA cache hit");
            return Ok(cached.clone());
        }

        let document = self.inner.fetch_kba(kba_id).await?;
        self.cache.insert(kba_id.to_string(), document.clone());

        Ok(document)
    }
}
