//! Invariants of the normalizer and the similarity scorer over generated input.

use proptest::prelude::*;

use stockbot_text::{normalize, similarity, Extractor};

proptest! {
    #[test]
    fn normalize_is_idempotent(raw in any::<String>()) {
        let once = normalize(&raw);
        prop_assert_eq!(normalize(&once), once);
    }

    #[test]
    fn normalized_text_has_no_edge_or_double_spaces(raw in any::<String>()) {
        let out = normalize(&raw);
        prop_assert!(!out.starts_with(' ') && !out.ends_with(' '));
        prop_assert!(!out.contains("  "));
    }

    #[test]
    fn similarity_is_symmetric_and_bounded(a in any::<String>(), b in any::<String>()) {
        let ab = similarity(&a, &b);
        prop_assert_eq!(ab, similarity(&b, &a));
        prop_assert!((0.0..=1.0).contains(&ab));
    }

    #[test]
    fn similarity_of_a_string_with_itself_is_one(a in ".{2,24}") {
        prop_assert_eq!(similarity(&a, &a), 1.0);
    }

    #[test]
    fn extracted_codes_are_ascii_digits(raw in any::<String>()) {
        let q = Extractor::default().analyze(&raw);
        for code in q.resolution.iter().chain(q.channels.iter()) {
            prop_assert!(!code.is_empty() && code.bytes().all(|b| b.is_ascii_digit()), "{:?}", code);
        }
    }
}
