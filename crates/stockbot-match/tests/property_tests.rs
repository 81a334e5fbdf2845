//! Invariants of narrowing and ranking over generated catalogs and queries.

use proptest::prelude::*;

use stockbot_core::types::{CatalogItem, ExtractedQuery, Feature, ProductType};
use stockbot_match::filter::{rank_by_availability, refine};
use stockbot_text::vocabulary::BRANDS;

const NAME_WORDS: &[&str] = &[
    "camara", "domo", "bullet", "ptz", "dvr", "nvr", "dahua", "hikvision", "ajax", "2mp", "4mp", "8 mp",
    "8ch", "16 canales", "exterior", "ip67", "wifi", "audio", "colorvu", "poe", "interior", "fuente",
];

const TYPES: &[ProductType] = &[
    ProductType::Camera,
    ProductType::BulletCamera,
    ProductType::DomeCamera,
    ProductType::PtzCamera,
    ProductType::Dvr,
    ProductType::Nvr,
    ProductType::Disk,
    ProductType::Alarm,
    ProductType::Switch,
    ProductType::PowerSupply,
];

const FEATURES: &[Feature] =
    &[Feature::Exterior, Feature::Interior, Feature::Wifi, Feature::Poe, Feature::Audio, Feature::Color];

fn arb_item() -> impl Strategy<Value = CatalogItem> {
    (
        prop::collection::vec(prop::sample::select(NAME_WORDS), 0..5),
        prop::sample::select(BRANDS),
        0u32..4,
    )
        .prop_map(|(words, brand, stock)| CatalogItem {
            name: words.join(" "),
            code: String::new(),
            stock_quantity: stock,
            price_usd: 10.0,
            price_ars: 12_000.0,
            brand: brand.to_string(),
            category: "Camaras".to_string(),
            description: None,
            image: None,
        })
}

fn arb_query() -> impl Strategy<Value = ExtractedQuery> {
    (
        prop::option::of(prop::sample::select(BRANDS)),
        prop::option::of(prop::sample::select(TYPES)),
        prop::collection::btree_set(prop::sample::select(FEATURES), 0..4),
        prop::option::of("[0-9]{1,2}"),
        prop::option::of("[0-9]{1,2}"),
    )
        .prop_map(|(brand, product_type, features, resolution, channels)| ExtractedQuery {
            brand: brand.map(str::to_string),
            product_type,
            features,
            resolution,
            channels,
        })
}

proptest! {
    #[test]
    fn refine_never_empties_a_non_empty_set(
        items in prop::collection::vec(arb_item(), 1..12),
        query in arb_query(),
    ) {
        let refined = refine(items.clone(), &query);
        prop_assert!(!refined.is_empty());
        prop_assert!(refined.len() <= items.len());
        prop_assert!(refined.iter().all(|kept| items.contains(kept)));
    }

    #[test]
    fn ranking_is_a_stable_availability_partition(stock in prop::collection::vec(0u32..3, 0..20)) {
        let items: Vec<CatalogItem> = stock
            .iter()
            .enumerate()
            .map(|(i, &qty)| CatalogItem {
                name: i.to_string(),
                code: i.to_string(),
                stock_quantity: qty,
                price_usd: 1.0,
                price_ars: 1.0,
                brand: String::new(),
                category: String::new(),
                description: None,
                image: None,
            })
            .collect();

        let expected: Vec<String> = items
            .iter()
            .filter(|item| item.is_available())
            .chain(items.iter().filter(|item| !item.is_available()))
            .map(|item| item.name.clone())
            .collect();
        let ranked: Vec<String> = rank_by_availability(items).into_iter().map(|item| item.name).collect();
        prop_assert_eq!(ranked, expected);
    }
}
