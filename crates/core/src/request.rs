//! Procurement request types — what the caller wants and how to weigh it.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A procurement request, as constructed by the CLI or gateway from
/// user input.
///
/// `component` is optional at the type level so that a request missing it
/// deserializes fine and fails planning with a 400-style error instead of
/// a parse error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Request {
    /// Component type to procure (required for planning).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component: Option<String>,

    /// Minimum numeric spec thresholds; items missing a key are excluded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spec_filters: Option<BTreeMap<String, f64>>,

    /// Hard price ceiling, applied after search.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_cost: Option<f64>,

    /// Hard lead-time ceiling in days, applied after search.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latest_delivery_days: Option<u32>,

    /// Scoring weights; defaults to 0.4 / 0.3 / 0.3 when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weights: Option<Weights>,

    /// Optional vendor constraints (exclusions, preferences, floors).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vendor_constraints: Option<VendorConstraints>,
}

impl Request {
    /// The effective scoring weights: the request's, or the defaults.
    pub fn effective_weights(&self) -> Weights {
        self.weights.clone().unwrap_or_default()
    }
}

/// Scoring weights for the three criteria. Each in [0, 1]; they need not
/// sum to 1 but conventionally do.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Weights {
    #[serde(default = "default_price_weight")]
    pub price: f64,

    #[serde(default = "default_lead_time_weight")]
    pub lead_time: f64,

    #[serde(default = "default_reliability_weight")]
    pub reliability: f64,
}

fn default_price_weight() -> f64 {
    0.4
}
fn default_lead_time_weight() -> f64 {
    0.3
}
fn default_reliability_weight() -> f64 {
    0.3
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            price: default_price_weight(),
            lead_time: default_lead_time_weight(),
            reliability: default_reliability_weight(),
        }
    }
}

/// Vendor-level constraints applied to a candidate list after planning.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VendorConstraints {
    /// Vendors to drop outright.
    #[serde(default)]
    pub excluded_vendors: Vec<String>,

    /// Vendors moved to the front of the list (relative order preserved).
    #[serde(default)]
    pub preferred_vendors: Vec<String>,

    /// Minimum acceptable reliability.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_reliability: Option<f64>,

    /// Maximum acceptable lead time in days.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_lead_time: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_weights() {
        let w = Weights::default();
        assert!((w.price - 0.4).abs() < f64::EPSILON);
        assert!((w.lead_time - 0.3).abs() < f64::EPSILON);
        assert!((w.reliability - 0.3).abs() < f64::EPSILON);
    }

    #[test]
    fn partial_weights_fill_in_defaults() {
        let w: Weights = serde_json::from_str(r#"{"price": 0.9}"#).unwrap();
        assert!((w.price - 0.9).abs() < f64::EPSILON);
        assert!((w.lead_time - 0.3).abs() < f64::EPSILON);
        assert!((w.reliability - 0.3).abs() < f64::EPSILON);
    }

    #[test]
    fn request_without_component_deserializes() {
        let req: Request =
            serde_json::from_str(r#"{"max_cost": 5000, "latest_delivery_days": 30}"#).unwrap();
        assert!(req.component.is_none());
        assert_eq!(req.max_cost, Some(5000.0));
    }

    #[test]
    fn effective_weights_prefer_request() {
        let req: Request = serde_json::from_str(
            r#"{"component": "battery", "weights": {"price": 0.8, "lead_time": 0.1, "reliability": 0.1}}"#,
        )
        .unwrap();
        assert!((req.effective_weights().price - 0.8).abs() < f64::EPSILON);

        let bare = Request::default();
        assert_eq!(bare.effective_weights(), Weights::default());
    }

    #[test]
    fn vendor_constraints_defaults() {
        let vc: VendorConstraints =
            serde_json::from_str(r#"{"excluded_vendors": ["AstroVolt"]}"#).unwrap();
        assert_eq!(vc.excluded_vendors, vec!["AstroVolt".to_string()]);
        assert!(vc.preferred_vendors.is_empty());
        assert!(vc.min_reliability.is_none());
    }
}
