use async_trait::async_trait;

use crate::error::Result;
use crate::types::CatalogItem;

/// A remote product inventory that can be searched by free-text term.
///
/// An empty `term` requests the unscoped (whole) catalog. Implementations
/// report failures as errors; callers decide how to degrade.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn query(&self, term: &str) -> Result<Vec<CatalogItem>>;
}
