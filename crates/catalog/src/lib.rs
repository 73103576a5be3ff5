//! Catalog — the in-memory component inventory.
//!
//! Loads a JSON array of items once at startup, validates every entry,
//! and serves structured search (component type + spec thresholds) plus
//! deterministic semantic search over free text.

pub mod semantic;

use quartermaster_core::error::CatalogError;
use quartermaster_core::item::CatalogItem;
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;
use tracing::info;

/// The component catalog. Immutable after construction.
#[derive(Debug)]
pub struct Catalog {
    items: Vec<CatalogItem>,
}

impl Catalog {
    /// Load and validate a catalog from a JSON file.
    ///
    /// Fails fast on unreadable files, malformed JSON, or corrupt entries —
    /// a bad catalog must never silently produce wrong scores.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| CatalogError::Read {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        let items: Vec<CatalogItem> =
            serde_json::from_str(&content).map_err(|e| CatalogError::Parse {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;

        let catalog = Self::from_items(items)?;
        info!(
            path = %path.display(),
            items = catalog.items.len(),
            "Catalog loaded"
        );
        Ok(catalog)
    }

    /// Build a catalog from already-parsed items, validating each entry.
    pub fn from_items(items: Vec<CatalogItem>) -> Result<Self, CatalogError> {
        for item in &items {
            validate_item(item)?;
        }
        Ok(Self { items })
    }

    /// All items, in catalog order.
    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    /// Number of items in the catalog.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Search by component type and optional spec thresholds.
    ///
    /// Component match is exact and case-sensitive. When `spec_filters` is
    /// given, an item passes only if every filter key is present in its specs
    /// with a value >= the threshold; items missing a key are excluded, not
    /// errored. Results keep catalog order.
    pub fn search(
        &self,
        component: &str,
        spec_filters: Option<&BTreeMap<String, f64>>,
    ) -> Vec<CatalogItem> {
        self.items
            .iter()
            .filter(|item| item.component == component)
            .filter(|item| match spec_filters {
                None => true,
                Some(filters) => filters.iter().all(|(key, min_value)| {
                    item.specs.get(key).is_some_and(|v| v >= min_value)
                }),
            })
            .cloned()
            .collect()
    }

    /// Look up an item by id.
    pub fn get(&self, item_id: &str) -> Option<&CatalogItem> {
        self.items.iter().find(|item| item.id == item_id)
    }

    /// Unique vendor names across the catalog.
    pub fn list_vendors(&self) -> BTreeSet<String> {
        self.items.iter().map(|i| i.vendor.clone()).collect()
    }

    /// Per-component item counts.
    pub fn components(&self) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for item in &self.items {
            *counts.entry(item.component.clone()).or_insert(0) += 1;
        }
        counts
    }

    /// Same-component items strictly cheaper than `item`, cheapest first.
    pub fn cheaper_alternatives(&self, item: &CatalogItem, top_k: usize) -> Vec<CatalogItem> {
        let mut alternatives: Vec<CatalogItem> = self
            .items
            .iter()
            .filter(|other| {
                other.component == item.component && other.id != item.id && other.price < item.price
            })
            .cloned()
            .collect();
        alternatives.sort_by(|a, b| a.price.total_cmp(&b.price));
        alternatives.truncate(top_k);
        alternatives
    }
}

fn validate_item(item: &CatalogItem) -> Result<(), CatalogError> {
    let fail = |reason: &str| CatalogError::InvalidItem {
        id: if item.id.is_empty() {
            "<empty>".into()
        } else {
            item.id.clone()
        },
        reason: reason.into(),
    };

    if item.id.is_empty() {
        return Err(fail("empty id"));
    }
    if item.component.is_empty() {
        return Err(fail("empty component type"));
    }
    if !item.price.is_finite() || item.price < 0.0 {
        return Err(fail("price must be a finite number >= 0"));
    }
    if !item.reliability.is_finite() || !(0.0..=1.0).contains(&item.reliability) {
        return Err(fail("reliability must be in [0, 1]"));
    }
    Ok(())
}


#[cfg(test)]
mod tests {
    use super::fixtures::sample_catalog;
    use super::*;

    #[test]
    fn search_without_filters_returns_all_of_component() {
        let catalog = sample_catalog();
        let panels = catalog.search("solar_panel", None);
        assert_eq!(panels.len(), 2);
        assert_eq!(panels[0].id, "SP-100");
        assert_eq!(panels[1].id, "SP-200");
    }

    #[test]
    fn search_with_spec_filters() {
        let catalog = sample_catalog();

        // Both panels have power_w >= 140
        let results = catalog.search("solar_panel", Some(&BTreeMap::from([("power_w".into(), 140.0)])));
        assert_eq!(results.len(), 2);

        // Only SP-200 reaches 180 W
        let results = catalog.search("solar_panel", Some(&BTreeMap::from([("power_w".into(), 180.0)])));
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, "SP-200");
    }

    #[test]
    fn search_missing_spec_key_excludes_item() {
        let catalog = sample_catalog();
        let results = catalog.search(
            "solar_panel",
            Some(&BTreeMap::from([("nonexistent_spec".into(), 1.0)])),
        );
        assert!(results.is_empty());
    }

    #[test]
    fn search_is_case_sensitive() {
        let catalog = sample_catalog();
        assert!(catalog.search("Solar_Panel", None).is_empty());
    }

    #[test]
    fn get_by_id() {
        let catalog = sample_catalog();
        let item = catalog.get("SP-100").unwrap();
        assert_eq!(item.id, "SP-100");
        assert!(catalog.get("INVALID").is_none());
    }

    #[test]
    fn list_vendors_deduplicates() {
        let catalog = sample_catalog();
        let vendors = catalog.list_vendors();
        // Helios Dynamics appears twice in the catalog but once here
        assert!(vendors.contains("Helios Dynamics"));
        assert!(vendors.len() < catalog.len());
    }

    #[test]
    fn components_counts() {
        let catalog = sample_catalog();
        let counts = catalog.components();
        assert_eq!(counts["solar_panel"], 2);
        assert_eq!(counts["battery"], 2);
        assert_eq!(counts["thruster"], 2);
        assert_eq!(counts["comm_module"], 2);
    }

    #[test]
    fn cheaper_alternatives_sorted_ascending() {
        let catalog = sample_catalog();
        let sp200 = catalog.get("SP-200").unwrap().clone();
        let alts = catalog.cheaper_alternatives(&sp200, 3);
        assert_eq!(alts.len(), 1);
        assert_eq!(alts[0].id, "SP-100");

        let sp100 = catalog.get("SP-100").unwrap().clone();
        assert!(catalog.cheaper_alternatives(&sp100, 3).is_empty());
    }

    #[test]
    fn invalid_reliability_rejected() {
        let mut items = sample_catalog().items().to_vec();
        items[0].reliability = 1.2;
        let err = Catalog::from_items(items).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidItem { .. }));
        assert!(err.to_string().contains("reliability"));
    }

    #[test]
    fn negative_price_rejected() {
        let mut items = sample_catalog().items().to_vec();
        items[2].price = -1.0;
        assert!(Catalog::from_items(items).is_err());
    }

    #[test]
    fn missing_file_errors() {
        let err = Catalog::load("/nonexistent/catalog.json").unwrap_err();
        assert!(matches!(err, CatalogError::Read { .. }));
    }
}
