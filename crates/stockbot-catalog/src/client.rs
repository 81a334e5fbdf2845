use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

use stockbot_core::config::CatalogSettings;
use stockbot_core::error::Result;
use stockbot_core::traits::CatalogSource;
use stockbot_core::types::CatalogItem;

use crate::cache::{CatalogCache, Clock};
use crate::http::HttpCatalog;

/// Catalog facade used by the matcher.
///
/// Never fails: source errors are logged and surface as an empty listing.
/// Unscoped queries (empty term) go through the single-slot cache; scoped
/// queries always hit the source.
pub struct CatalogClient {
    source: Arc<dyn CatalogSource>,
    cache: CatalogCache,
}

impl CatalogClient {
    pub fn new(source: Arc<dyn CatalogSource>, cache: CatalogCache) -> Self {
        Self { source, cache }
    }

    pub fn with_clock(source: Arc<dyn CatalogSource>, ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        Self::new(source, CatalogCache::new(ttl, clock))
    }

    /// HTTP-backed client with the configured timeout and cache TTL.
    pub fn from_settings(settings: &CatalogSettings) -> Result<Self> {
        let source = HttpCatalog::from_settings(settings)?;
        let cache = CatalogCache::with_system_clock(Duration::from_secs(settings.cache_ttl_secs));
        Ok(Self::new(Arc::new(source), cache))
    }

    pub async fn fetch(&self, term: &str) -> Arc<Vec<CatalogItem>> {
        if !term.is_empty() {
            return Arc::new(self.fetch_remote(term).await.unwrap_or_default());
        }
        if let Some(items) = self.cache.get() {
            info!(count = items.len(), "serving catalog listing from cache");
            return items;
        }
        match self.fetch_remote(term).await {
            Some(items) => self.cache.put(items),
            None => Arc::new(Vec::new()),
        }
    }

    pub fn clear_cache(&self) {
        self.cache.clear();
        info!("catalog cache cleared");
    }

    async fn fetch_remote(&self, term: &str) -> Option<Vec<CatalogItem>> {
        info!(term, "catalog query issued");
        match self.source.query(term).await {
            Ok(items) => {
                info!(term, count = items.len(), "catalog query returned");
                Some(items)
            }
            Err(e) => {
                warn!(term, error = %e, "catalog query failed; treating as no results");
                None
            }
        }
    }
}
