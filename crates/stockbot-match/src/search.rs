//! Fallback search: pick query terms from most to least specific and stop at
//! the first one the catalog answers with anything.

use std::sync::Arc;
use tracing::{debug, info};

use stockbot_catalog::CatalogClient;
use stockbot_core::types::{CatalogItem, ExtractedQuery};
use stockbot_text::normalize::words;

/// Terms that produced candidates, and the candidates themselves.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    pub term: String,
    pub candidates: Arc<Vec<CatalogItem>>,
}

/// The `width` longest distinct words of at least `min_len` characters,
/// longest first; ties keep their order of appearance.
pub fn keyword_candidates(normalized: &str, min_len: usize, width: usize) -> Vec<&str> {
    let mut found: Vec<&str> = Vec::new();
    for word in words(normalized) {
        if word.chars().count() >= min_len && !found.contains(&word) {
            found.push(word);
        }
    }
    found.sort_by_key(|w| std::cmp::Reverse(w.chars().count()));
    found.truncate(width);
    found
}

/// Ordered query terms: brand, then product type, then keywords.
pub fn search_plan(query: &ExtractedQuery, normalized: &str, min_len: usize, width: usize) -> Vec<String> {
    let mut plan: Vec<String> = Vec::new();
    if let Some(brand) = &query.brand {
        plan.push(brand.clone());
    }
    if let Some(kind) = query.product_type {
        if !plan.iter().any(|t| t == kind.as_str()) {
            plan.push(kind.as_str().to_string());
        }
    }
    for word in keyword_candidates(normalized, min_len, width) {
        if !plan.iter().any(|t| t == word) {
            plan.push(word.to_string());
        }
    }
    plan
}

/// Query the catalog with each planned term in turn until one returns items.
pub async fn run(catalog: &CatalogClient, plan: &[String]) -> Option<SearchOutcome> {
    for term in plan {
        let candidates = catalog.fetch(term).await;
        debug!(term = %term, count = candidates.len(), "search attempt");
        if !candidates.is_empty() {
            info!(term = %term, count = candidates.len(), "search term selected");
            return Some(SearchOutcome { term: term.clone(), candidates });
        }
    }
    info!(attempts = plan.len(), "no search term produced candidates");
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockbot_core::types::ProductType;

    #[test]
    fn longest_words_first() {
        let words = keyword_candidates("necesito una camara urgente", 4, 3);
        assert_eq!(words, vec!["necesito", "urgente", "camara"]);
    }

    #[test]
    fn short_words_are_excluded_and_width_caps() {
        assert!(keyword_candidates("hay una", 4, 3).is_empty());
        assert_eq!(keyword_candidates("hola", 4, 3), vec!["hola"]);
        assert_eq!(keyword_candidates("aaaa bbbbb cccccc dddddd", 4, 2), vec!["cccccc", "dddddd"]);
    }

    #[test]
    fn repeated_words_are_tried_once() {
        assert_eq!(keyword_candidates("sensor sensor puerta", 4, 3), vec!["sensor", "puerta"]);
    }

    #[test]
    fn plan_puts_brand_before_type_before_words() {
        let query = ExtractedQuery {
            brand: Some("ajax".to_string()),
            product_type: Some(ProductType::Alarm),
            ..Default::default()
        };
        let plan = search_plan(&query, "che querria una alarma ajax", 4, 3);
        assert_eq!(plan, vec!["ajax", "alarma", "querria"]);
    }

    #[test]
    fn plan_without_attributes_is_keywords_only() {
        let plan = search_plan(&ExtractedQuery::default(), "necesito sensores urgente", 4, 3);
        assert_eq!(plan, vec!["necesito", "sensores", "urgente"]);
    }
}
