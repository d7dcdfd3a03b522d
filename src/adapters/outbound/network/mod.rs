/// Network adapters for external API calls
mod caching_kba_client;
mod kba_client;

pub use caching_kba_client::CachingKbaRepository;
pub use kba_client::{HydraKbaClient, KbaClientConfig, DEFAULT_KBA_BASE_URL, DEFAULT_KBA_CLIENT};
