//! Catalog item — one procurable hardware component.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single catalog entry. Immutable once loaded.
///
/// Matches the catalog JSON format: an array of objects with
/// `{id, component, vendor, price, lead_time_days, reliability, specs}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    /// Unique identifier (e.g. "SP-100").
    pub id: String,

    /// Component type, matched exactly and case-sensitively (e.g. "solar_panel").
    pub component: String,

    /// Vendor name (e.g. "Helios Dynamics").
    pub vendor: String,

    /// Unit price, >= 0.
    pub price: f64,

    /// Quoted lead time in days.
    pub lead_time_days: u32,

    /// Reliability in [0, 1].
    pub reliability: f64,

    /// Numeric specs (e.g. {"power_w": 150.0}). BTreeMap keeps
    /// serialization order stable.
    #[serde(default)]
    pub specs: BTreeMap<String, f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_catalog_json() {
        let json = r#"{
            "id": "SP-100",
            "component": "solar_panel",
            "vendor": "Helios Dynamics",
            "price": 4800,
            "lead_time_days": 21,
            "reliability": 0.985,
            "specs": {"power_w": 150, "mass_kg": 9.5}
        }"#;
        let item: CatalogItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.id, "SP-100");
        assert_eq!(item.lead_time_days, 21);
        assert_eq!(item.specs["power_w"], 150.0);
    }

    #[test]
    fn specs_default_to_empty() {
        let json = r#"{
            "id": "X-1",
            "component": "battery",
            "vendor": "VoltCore",
            "price": 100,
            "lead_time_days": 5,
            "reliability": 0.9
        }"#;
        let item: CatalogItem = serde_json::from_str(json).unwrap();
        assert!(item.specs.is_empty());
    }

    #[test]
    fn roundtrips_through_json() {
        let item = CatalogItem {
            id: "CM-10".into(),
            component: "comm_module".into(),
            vendor: "SignalPath".into(),
            price: 2400.0,
            lead_time_days: 12,
            reliability: 0.98,
            specs: BTreeMap::from([("bandwidth_mbps".into(), 150.0)]),
        };
        let json = serde_json::to_string(&item).unwrap();
        let back: CatalogItem = serde_json::from_str(&json).unwrap();
        assert_eq!(back, item);
    }
}
