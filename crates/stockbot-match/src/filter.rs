//! Progressive narrowing of the candidate set.
//!
//! Stages run in a fixed order. A stage exists only when its attribute was
//! extracted, and its result replaces the working set only when non-empty,
//! so a non-empty input can never be filtered down to nothing.

use tracing::debug;

use stockbot_core::types::{CatalogItem, ExtractedQuery};
use stockbot_text::vocabulary::{channel_markers, feature_markers, resolution_markers};

/// A named trial filter over lowercased product names (and, for brands, the
/// brand field).
pub struct Stage {
    pub label: String,
    keep: Box<dyn Fn(&CatalogItem, &str) -> bool + Send + Sync>,
}

impl Stage {
    fn new(label: impl Into<String>, keep: impl Fn(&CatalogItem, &str) -> bool + Send + Sync + 'static) -> Self {
        Self { label: label.into(), keep: Box::new(keep) }
    }

    fn name_contains_any(label: impl Into<String>, markers: Vec<String>) -> Self {
        Self::new(label, move |_, name| markers.iter().any(|m| name.contains(m.as_str())))
    }

    fn keeps(&self, item: &CatalogItem) -> bool {
        (self.keep)(item, &item.name.to_lowercase())
    }
}

/// Stages implied by an interpretation, in application order.
pub fn stages_for(query: &ExtractedQuery) -> Vec<Stage> {
    let mut stages = Vec::new();

    if let Some(brand) = query.brand.clone() {
        stages.push(Stage::new(format!("brand:{brand}"), move |item, name| {
            name.contains(&brand) || item.brand.to_lowercase().contains(&brand)
        }));
    }
    if let Some(resolution) = &query.resolution {
        stages.push(Stage::name_contains_any(
            format!("resolution:{resolution}mp"),
            resolution_markers(resolution).to_vec(),
        ));
    }
    if let Some(kind) = query.product_type.filter(|k| k.is_camera_subtype()) {
        stages.push(Stage::name_contains_any(format!("type:{kind}"), vec![kind.as_str().to_string()]));
    }
    for feature in &query.features {
        let markers = feature_markers(*feature).iter().map(|m| m.to_string()).collect();
        stages.push(Stage::name_contains_any(format!("feature:{feature}"), markers));
    }
    if let Some(channels) = &query.channels {
        stages.push(Stage::name_contains_any(format!("channels:{channels}"), channel_markers(channels).to_vec()));
    }

    stages
}

/// Apply `stages` in order, rolling back any stage that would empty the set.
pub fn narrow(candidates: Vec<CatalogItem>, stages: &[Stage]) -> Vec<CatalogItem> {
    stages.iter().fold(candidates, |working, stage| {
        let trial: Vec<CatalogItem> = working.iter().filter(|item| stage.keeps(item)).cloned().collect();
        if trial.is_empty() {
            debug!(stage = %stage.label, kept = working.len(), "filter stage skipped: would remove every candidate");
            working
        } else {
            debug!(stage = %stage.label, before = working.len(), after = trial.len(), "filter stage applied");
            trial
        }
    })
}

/// In-stock items first; relative order otherwise preserved.
pub fn rank_by_availability(mut items: Vec<CatalogItem>) -> Vec<CatalogItem> {
    items.sort_by_key(|item| !item.is_available());
    items
}

/// Narrow by every stage the interpretation implies, then rank.
pub fn refine(candidates: Vec<CatalogItem>, query: &ExtractedQuery) -> Vec<CatalogItem> {
    rank_by_availability(narrow(candidates, &stages_for(query)))
}
