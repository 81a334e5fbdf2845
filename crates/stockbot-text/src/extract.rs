use regex::Regex;
use std::sync::OnceLock;

use stockbot_core::types::{ExtractedQuery, Feature, ProductType};

use crate::normalize::{normalize, words};
use crate::similarity::similarity;
use crate::vocabulary::{correct_brand, BRANDS, FEATURES, PRODUCT_TYPES};

/// How a matched resolution pattern turns into a megapixel code.
enum ResolutionValue {
    /// The captured number is already megapixels.
    Captured,
    /// The captured number is a "K" figure: 4K → 8, 2K → 4, others as-is.
    KScaled,
    Fixed(&'static str),
}

struct ResolutionRule {
    pattern: Regex,
    value: ResolutionValue,
}

fn resolution_rules() -> &'static [ResolutionRule] {
    static RULES: OnceLock<Vec<ResolutionRule>> = OnceLock::new();
    RULES.get_or_init(|| {
        [
            (r"([0-9]+)\s*(?:mega|mp|megapixel|megapixeles|megas)", ResolutionValue::Captured),
            (r"([0-9]+)\s*k", ResolutionValue::KScaled),
            (r"1080p?", ResolutionValue::Fixed("2")),
            (r"2k", ResolutionValue::Fixed("4")),
            (r"4k", ResolutionValue::Fixed("8")),
            (r"full\s*hd", ResolutionValue::Fixed("2")),
        ]
        .into_iter()
        .filter_map(|(src, value)| Regex::new(src).ok().map(|pattern| ResolutionRule { pattern, value }))
        .collect()
    })
}

fn channel_rules() -> &'static [Regex] {
    static RULES: OnceLock<Vec<Regex>> = OnceLock::new();
    RULES.get_or_init(|| {
        [r"([0-9]+)\s*(?:canales|ch|channels)", r"([0-9]+)\s*camaras"]
            .into_iter()
            .filter_map(|src| Regex::new(src).ok())
            .collect()
    })
}

/// Detects brand, product type, features, resolution and channel count.
///
/// Every detector takes *normalized* text and is pure; [`Extractor::analyze`]
/// normalizes once and runs them all.
#[derive(Debug, Clone)]
pub struct Extractor {
    similarity_threshold: f64,
}

impl Default for Extractor {
    fn default() -> Self {
        Self { similarity_threshold: 0.7 }
    }
}

impl Extractor {
    pub fn new(similarity_threshold: f64) -> Self {
        Self { similarity_threshold }
    }

    pub fn analyze(&self, raw: &str) -> ExtractedQuery {
        self.interpret(&normalize(raw))
    }

    /// Run every detector over text that is already normalized.
    pub fn interpret(&self, text: &str) -> ExtractedQuery {
        ExtractedQuery {
            brand: self.brand(text).map(str::to_string),
            product_type: self.product_type(text),
            features: self.features(text).into_iter().collect(),
            resolution: self.resolution(text),
            channels: self.channels(text),
        }
    }

    /// First token that is a brand, a known misspelling of one, or close
    /// enough to one by bigram similarity.
    pub fn brand(&self, text: &str) -> Option<&'static str> {
        words(text).find_map(|token| {
            BRANDS
                .iter()
                .copied()
                .find(|brand| *brand == token)
                .or_else(|| correct_brand(token))
                .or_else(|| {
                    BRANDS
                        .iter()
                        .copied()
                        .find(|brand| similarity(token, brand) > self.similarity_threshold)
                })
        })
    }

    pub fn product_type(&self, text: &str) -> Option<ProductType> {
        PRODUCT_TYPES
            .iter()
            .find(|(_, synonyms)| synonyms.iter().any(|s| text.contains(s)))
            .map(|(kind, _)| *kind)
    }

    /// All requested features, in table order.
    pub fn features(&self, text: &str) -> Vec<Feature> {
        FEATURES
            .iter()
            .filter(|(_, synonyms)| synonyms.iter().any(|s| text.contains(s)))
            .map(|(feature, _)| *feature)
            .collect()
    }

    pub fn resolution(&self, text: &str) -> Option<String> {
        resolution_rules().iter().find_map(|rule| {
            let caps = rule.pattern.captures(text)?;
            let value = match rule.value {
                ResolutionValue::Fixed(v) => v.to_string(),
                ResolutionValue::Captured => caps.get(1)?.as_str().to_string(),
                ResolutionValue::KScaled => match caps.get(1)?.as_str() {
                    "4" => "8".to_string(),
                    "2" => "4".to_string(),
                    other => other.to_string(),
                },
            };
            Some(value)
        })
    }

    pub fn channels(&self, text: &str) -> Option<String> {
        channel_rules()
            .iter()
            .find_map(|pattern| pattern.captures(text)?.get(1).map(|m| m.as_str().to_string()))
    }
}
