use crate::ports::outbound::KbaRepository;
use crate::rule_preview::domain::KbaDocument;
use crate::shared::Result;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, COOKIE};
use serde::Deserialize;
use std::time::Duration;

/// Knowledge-base search endpoint used when no base URL is configured
pub const DEFAULT_KBA_BASE_URL: &str = "https://access.redhat.com/hydra/rest/search/kcs";

/// Client identifier reported to the search endpoint
pub const DEFAULT_KBA_CLIENT: &str = "$ADVISOR";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Deserialize)]
struct SearchResponse {
    response: SearchResult,
}

#[derive(Debug, Deserialize)]
struct SearchResult {
    #[serde(default)]
    docs: Vec<KbaDocument>,
}

/// Connection settings for [`HydraKbaClient`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KbaClientConfig {
    pub base_url: String,
    pub client_name: String,
    /// Sent verbatim as the `Cookie` header when present
    pub session_cookie: Option<String>,
}

impl Default for KbaClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_KBA_BASE_URL.to_string(),
            client_name: DEFAULT_KBA_CLIENT.to_string(),
            session_cookie: None,
        }
    }
}

/// HydraKbaClient adapter for the knowledge-base search API
///
/// Asks the search endpoint for exactly one document matching the rule's
/// external reference id and returns it, or `None` when nothing matches.
/// A single attempt is made per lookup.
pub struct HydraKbaClient {
    client: reqwest::Client,
    config: KbaClientConfig,
}

impl HydraKbaClient {
    pub fn new(config: KbaClientConfig) -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("content-preview/{}", version);

        let mut headers = HeaderMap::new();
        if let Some(cookie) = &config.session_cookie {
            let mut value = HeaderValue::from_str(cookie)
                .map_err(|e| anyhow::anyhow!("Invalid KBA session cookie: {}", e))?;
            value.set_sensitive(true);
            headers.insert(COOKIE, value);
        }

        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(user_agent)
            .default_headers(headers)
            .build()?;

        Ok(Self { client, config })
    }

    /// Search URL for one reference id
    fn build_url(&self, kba_id: &str) -> String {
        format!(
            "{}?q=id:({})&fl=view_uri,id,publishedTitle&rows=1&redhat_client={}",
            self.config.base_url.trim_end_matches('/'),
            urlencoding::encode(kba_id),
            self.config.client_name
        )
    }

    fn first_document(body: SearchResponse) -> Option<KbaDocument> {
        body.response.docs.into_iter().next()
    }
}

#[async_trait]
impl KbaRepository for HydraKbaClient {
    async fn fetch_kba(&self, kba_id: &str) -> Result<Option<KbaDocument>> {
        let url = self.build_url(kba_id);
        tracing::debug!(%url, "requesting KBA search");

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            anyhow::bail!("KBA search returned status code {}", response.status());
        }

        let body: SearchResponse = response.json().await?;
        Ok(Self::first_document(body))
    }
}
