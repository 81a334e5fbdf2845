use anyhow::Result;
use tracing::info;

use stockbot_catalog::CatalogClient;
use stockbot_core::config::{Config, MatchSettings};
use stockbot_core::types::{ExtractedQuery, ItemSummary, MatchResult, ProductMatch};
use stockbot_text::{normalize, Extractor};

use crate::filter;
use crate::search::{self, search_plan};
use crate::shape::shape;

/// Entry point of the matching engine.
///
/// Each call is an independent sequential workflow; the only state shared
/// between calls is the catalog client's unscoped-listing cache.
pub struct ProductMatcher {
    catalog: CatalogClient,
    extractor: Extractor,
    settings: MatchSettings,
}

impl ProductMatcher {
    pub fn new(catalog: CatalogClient, settings: MatchSettings) -> Self {
        let extractor = Extractor::new(settings.similarity_threshold);
        Self { catalog, extractor, settings }
    }

    /// HTTP-backed matcher built from the `catalog` and `matching` sections.
    pub fn from_config(config: &Config) -> Result<Self> {
        let catalog = CatalogClient::from_settings(&config.catalog()?)?;
        Ok(Self::new(catalog, config.matching()?))
    }

    pub fn settings(&self) -> &MatchSettings {
        &self.settings
    }

    pub fn analyze(&self, text: &str) -> ExtractedQuery {
        self.extractor.analyze(text)
    }

    /// Resolve a customer utterance to zero, one or several catalog items.
    pub async fn find(&self, text: &str) -> MatchResult {
        let normalized = normalize(text);
        let query = self.extractor.interpret(&normalized);
        info!(
            text,
            brand = ?query.brand,
            product_type = ?query.product_type,
            features = ?query.features,
            resolution = ?query.resolution,
            channels = ?query.channels,
            "interpreted customer request"
        );

        let plan = search_plan(&query, &normalized, self.settings.min_word_len, self.settings.fallback_words);
        let Some(outcome) = search::run(&self.catalog, &plan).await else {
            info!(text, "no products found");
            return MatchResult::NotFound { query: text.to_string() };
        };

        let ranked = filter::refine(outcome.candidates.to_vec(), &query);
        info!(term = %outcome.term, candidates = outcome.candidates.len(), remaining = ranked.len(), "match complete");
        shape(text, &outcome.term, &query, &ranked, self.settings.max_options)
    }

    /// Look a product up by name: the first listing whose name contains the
    /// requested name, otherwise the first listing the catalog returned.
    pub async fn check_stock(&self, product_name: &str) -> Option<ProductMatch> {
        let wanted = product_name.trim();
        if wanted.is_empty() {
            return None;
        }
        let items = self.catalog.fetch(wanted).await;
        let needle = wanted.to_lowercase();
        let found = items.iter().find(|item| item.name.to_lowercase().contains(&needle)).or_else(|| items.first());
        match found {
            Some(item) => {
                info!(product = wanted, name = %item.name, stock = item.stock_quantity, "stock check");
                Some(ProductMatch::from(item))
            }
            None => {
                info!(product = wanted, "stock check found nothing");
                None
            }
        }
    }

    /// In-stock items of the same category, preferring the same brand when
    /// any exist. Served from the unscoped (cached) listing.
    pub async fn find_alternatives(&self, category: &str, brand: Option<&str>) -> Vec<ItemSummary> {
        let listing = self.catalog.fetch("").await;
        let in_category: Vec<_> =
            listing.iter().filter(|item| item.category == category && item.is_available()).collect();

        let same_brand: Vec<_> = match brand {
            Some(brand) => in_category.iter().copied().filter(|item| item.brand == brand).collect(),
            None => Vec::new(),
        };
        let pool = if same_brand.is_empty() { in_category } else { same_brand };

        info!(category, brand = ?brand, found = pool.len(), "alternatives lookup");
        pool.into_iter().take(self.settings.max_alternatives).map(ItemSummary::from).collect()
    }

    pub fn clear_cache(&self) {
        self.catalog.clear_cache();
    }
}
