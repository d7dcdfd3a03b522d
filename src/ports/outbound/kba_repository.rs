use crate::rule_preview::domain::KbaDocument;
use crate::shared::Result;
use async_trait::async_trait;

/// KbaRepository port for knowledge-base article enrichment
///
/// Implementations must be `Send + Sync` since lookups run on spawned tasks.
#[async_trait]
pub trait KbaRepository: Send + Sync {
    /// Looks up the article for an external reference id.
    ///
    /// # Returns
    /// The first matching document, or `None` when the search has no result
    ///
    /// # Errors
    /// Returns an error if the request fails or the response cannot be parsed
    async fn fetch_kba(&self, kba_id: &str) -> Result<Option<KbaDocument>>;
}
