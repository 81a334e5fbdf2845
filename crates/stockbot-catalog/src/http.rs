use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

use stockbot_core::config::CatalogSettings;
use stockbot_core::error::{Error, Result};
use stockbot_core::traits::CatalogSource;
use stockbot_core::types::CatalogItem;

use crate::wire;

/// Storefront catalog reached over HTTP.
///
/// Every query carries the fixed selection parameters the storefront expects
/// (default ordering, main branch, no promotions filter).
pub struct HttpCatalog {
    client: reqwest::Client,
    base_url: String,
}

impl HttpCatalog {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let base_url = base_url.into();
        if base_url.trim().is_empty() {
            return Err(Error::InvalidConfig("catalog.base_url is empty".to_string()));
        }
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::InvalidConfig(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self { client, base_url })
    }

    pub fn from_settings(settings: &CatalogSettings) -> Result<Self> {
        let base_url = settings
            .base_url
            .clone()
            .ok_or_else(|| Error::InvalidConfig("catalog.base_url is not set".to_string()))?;
        Self::new(base_url, Duration::from_secs(settings.timeout_secs))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl CatalogSource for HttpCatalog {
    async fn query(&self, term: &str) -> Result<Vec<CatalogItem>> {
        debug!(term, url = %self.base_url, "querying catalog");
        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("Producto", term),
                ("CategoriaId", "0"),
                ("MarcaId", "0"),
                ("OrdenId", "2"),
                ("SucursalId", "2"),
                ("Oferta", "false"),
            ])
            .send()
            .await
            .map_err(|e| Error::Transport(e.to_string()))?;

        if !response.status().is_success() {
            return Err(Error::Status(response.status().as_u16()));
        }

        let body = response.text().await.map_err(|e| Error::Transport(e.to_string()))?;
        wire::decode(&body)
    }
}
