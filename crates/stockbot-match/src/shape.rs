use stockbot_core::types::{CatalogItem, ExtractedQuery, ItemSummary, MatchResult, ProductMatch};

/// Turn a ranked candidate list into the caller-facing result.
///
/// More than one candidate yields the multi-option shape with at most
/// `max_options` entries; exactly one yields the single-match shape.
pub fn shape(
    query_text: &str,
    term: &str,
    interpretation: &ExtractedQuery,
    ranked: &[CatalogItem],
    max_options: usize,
) -> MatchResult {
    match ranked {
        [] => MatchResult::NotFound { query: query_text.to_string() },
        [only] => MatchResult::Single(ProductMatch::from(only)),
        many => MatchResult::Multiple {
            term: term.to_string(),
            interpretation: interpretation.clone(),
            total: many.len(),
            options: many.iter().take(max_options).map(ItemSummary::from).collect(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, stock: u32) -> CatalogItem {
        CatalogItem {
            name: name.to_string(),
            code: format!("{name}-code"),
            stock_quantity: stock,
            price_usd: 99.0,
            price_ars: 118_000.0,
            brand: "Hikvision".to_string(),
            category: "Grabadores".to_string(),
            description: Some("8 canales".to_string()),
            image: None,
        }
    }

    #[test]
    fn empty_is_not_found() {
        let result = shape("hola", "", &ExtractedQuery::default(), &[], 5);
        assert_eq!(result, MatchResult::NotFound { query: "hola".to_string() });
    }

    #[test]
    fn one_item_is_single_with_availability() {
        let result = shape("dvr", "dvr", &ExtractedQuery::default(), &[item("DVR 8ch", 0)], 5);
        match result {
            MatchResult::Single(found) => {
                assert_eq!(found.name, "DVR 8ch");
                assert_eq!(found.code, "DVR 8ch-code");
                assert_eq!(found.category, "Grabadores");
                assert!(!found.available);
            }
            other => panic!("expected single match, got {other:?}"),
        }
    }

    #[test]
    fn many_items_truncate_to_max_options() {
        let ranked: Vec<CatalogItem> = (0..7).map(|i| item(&format!("DVR {i}"), 1)).collect();
        let interpretation = ExtractedQuery { brand: Some("hikvision".to_string()), ..Default::default() };
        match shape("dvr hikvision", "hikvision", &interpretation, &ranked, 5) {
            MatchResult::Multiple { term, interpretation: used, total, options } => {
                assert_eq!(term, "hikvision");
                assert_eq!(used, interpretation);
                assert_eq!(total, 7);
                let names: Vec<&str> = options.iter().map(|o| o.name.as_str()).collect();
                assert_eq!(names, vec!["DVR 0", "DVR 1", "DVR 2", "DVR 3", "DVR 4"]);
            }
            other => panic!("expected multiple matches, got {other:?}"),
        }
    }
}
