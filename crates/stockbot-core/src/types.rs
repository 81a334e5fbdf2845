//! Domain types shared by the extractors, the catalog client and the matcher.

use serde::{Deserialize, Serialize, Serializer};
use std::collections::BTreeSet;
use std::fmt;

/// One product as reported by the remote catalog.
///
/// Items are ephemeral: fetched per request (or served from the short-lived
/// unscoped cache) and never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub name: String,
    pub code: String,
    pub stock_quantity: u32,
    pub price_usd: f64,
    pub price_ars: f64,
    pub brand: String,
    pub category: String,
    pub description: Option<String>,
    pub image: Option<String>,
}

impl CatalogItem {
    pub fn is_available(&self) -> bool {
        self.stock_quantity > 0
    }
}

/// Canonical product families. Declaration order is the detection priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ProductType {
    #[serde(rename = "camara")]
    Camera,
    #[serde(rename = "bullet")]
    BulletCamera,
    #[serde(rename = "domo")]
    DomeCamera,
    #[serde(rename = "ptz")]
    PtzCamera,
    #[serde(rename = "dvr")]
    Dvr,
    #[serde(rename = "nvr")]
    Nvr,
    #[serde(rename = "disco")]
    Disk,
    #[serde(rename = "alarma")]
    Alarm,
    #[serde(rename = "switch")]
    Switch,
    #[serde(rename = "fuente")]
    PowerSupply,
}

impl ProductType {
    /// The catalog-facing term, also used as a search query.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Camera => "camara",
            Self::BulletCamera => "bullet",
            Self::DomeCamera => "domo",
            Self::PtzCamera => "ptz",
            Self::Dvr => "dvr",
            Self::Nvr => "nvr",
            Self::Disk => "disco",
            Self::Alarm => "alarma",
            Self::Switch => "switch",
            Self::PowerSupply => "fuente",
        }
    }

    /// Camera form factors that are worth narrowing on by name.
    pub fn is_camera_subtype(self) -> bool {
        matches!(self, Self::BulletCamera | Self::DomeCamera | Self::PtzCamera)
    }
}

impl fmt::Display for ProductType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Feature tags a customer may ask for. `Ord` follows declaration order so a
/// `BTreeSet<Feature>` iterates in table order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Feature {
    Exterior,
    Interior,
    Wifi,
    Poe,
    Audio,
    Color,
}

impl Feature {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Exterior => "exterior",
            Self::Interior => "interior",
            Self::Wifi => "wifi",
            Self::Poe => "poe",
            Self::Audio => "audio",
            Self::Color => "color",
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structured interpretation of a customer utterance.
///
/// A `None` (or an empty feature set) means "not mentioned", never
/// "mentioned but unrecognized".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedQuery {
    pub brand: Option<String>,
    pub product_type: Option<ProductType>,
    pub features: BTreeSet<Feature>,
    /// Megapixel-equivalent digits, e.g. `"8"` for 4K.
    pub resolution: Option<String>,
    pub channels: Option<String>,
}

impl ExtractedQuery {
    pub fn is_empty(&self) -> bool {
        self.brand.is_none()
            && self.product_type.is_none()
            && self.features.is_empty()
            && self.resolution.is_none()
            && self.channels.is_none()
    }
}

/// Full detail of a single matched product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductMatch {
    pub name: String,
    pub code: String,
    pub stock_quantity: u32,
    pub price_usd: f64,
    pub price_ars: f64,
    pub brand: String,
    pub category: String,
    pub description: Option<String>,
    pub image: Option<String>,
    pub available: bool,
}

impl From<&CatalogItem> for ProductMatch {
    fn from(item: &CatalogItem) -> Self {
        Self {
            name: item.name.clone(),
            code: item.code.clone(),
            stock_quantity: item.stock_quantity,
            price_usd: item.price_usd,
            price_ars: item.price_ars,
            brand: item.brand.clone(),
            category: item.category.clone(),
            description: item.description.clone(),
            image: item.image.clone(),
            available: item.is_available(),
        }
    }
}

/// Compact listing entry used for multi-option answers and alternatives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemSummary {
    pub name: String,
    pub code: String,
    pub stock_quantity: u32,
    pub price_usd: f64,
    pub price_ars: f64,
    pub brand: String,
    pub available: bool,
}

impl From<&CatalogItem> for ItemSummary {
    fn from(item: &CatalogItem) -> Self {
        Self {
            name: item.name.clone(),
            code: item.code.clone(),
            stock_quantity: item.stock_quantity,
            price_usd: item.price_usd,
            price_ars: item.price_ars,
            brand: item.brand.clone(),
            available: item.is_available(),
        }
    }
}

/// Outcome of matching one utterance against the catalog.
///
/// Serialized with a `kind` tag plus `found` and `multiple` flags next to it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MatchResult {
    /// Nothing found; `query` is the customer's original text.
    NotFound { query: String },
    /// Exactly one candidate survived filtering.
    Single(ProductMatch),
    /// Several candidates survived; `options` holds the top-ranked ones.
    Multiple {
        term: String,
        interpretation: ExtractedQuery,
        total: usize,
        options: Vec<ItemSummary>,
    },
}

impl MatchResult {
    pub fn found(&self) -> bool {
        !matches!(self, Self::NotFound { .. })
    }

    pub fn is_multiple(&self) -> bool {
        matches!(self, Self::Multiple { .. })
    }
}

impl Serialize for MatchResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        #[serde(tag = "kind", rename_all = "snake_case")]
        enum Tagged<'a> {
            NotFound {
                query: &'a str,
            },
            Single(&'a ProductMatch),
            Multiple {
                term: &'a str,
                interpretation: &'a ExtractedQuery,
                total: usize,
                options: &'a [ItemSummary],
            },
        }

        #[derive(Serialize)]
        struct Flagged<'a> {
            found: bool,
            multiple: bool,
            #[serde(flatten)]
            result: Tagged<'a>,
        }

        let result = match self {
            Self::NotFound { query } => Tagged::NotFound { query },
            Self::Single(found) => Tagged::Single(found),
            Self::Multiple { term, interpretation, total, options } => {
                Tagged::Multiple { term, interpretation, total: *total, options }
            }
        };
        Flagged { found: self.found(), multiple: self.is_multiple(), result }.serialize(serializer)
    }
}
