//! Plan result types — scored candidates, the audit trace, and the
//! assembled result returned to callers.

use quartermaster_core::item::CatalogItem;
use quartermaster_core::request::Request;
use quartermaster_telemetry::PlanMetrics;
use serde::{Deserialize, Serialize};

/// A catalog item that survived filtering, with its computed score and
/// any investigation findings attached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredCandidate {
    #[serde(flatten)]
    pub item: CatalogItem,

    /// Weighted score in [0, 1], relative to the current candidate set.
    pub score: f64,

    /// Tool findings, present only when investigation was requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tools: Option<ToolFindings>,
}

impl ScoredCandidate {
    pub fn new(item: CatalogItem, score: f64) -> Self {
        Self {
            item,
            score,
            tools: None,
        }
    }
}

/// Raw payloads from the two investigation tools.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolFindings {
    pub price_history: serde_json::Value,
    pub availability: serde_json::Value,
}

/// One step in the planning audit trace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceEntry {
    /// Step name (e.g. "catalog_search", "tool_call").
    pub step: String,

    /// Tool name, set only for "tool_call" entries.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool: Option<String>,

    /// Step input, where it aids auditability.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input: Option<serde_json::Value>,

    /// Short human-readable summary of what happened.
    pub summary: String,
}

impl TraceEntry {
    /// A plain pipeline step.
    pub fn step(step: impl Into<String>, summary: impl Into<String>) -> Self {
        Self {
            step: step.into(),
            tool: None,
            input: None,
            summary: summary.into(),
        }
    }

    /// A step with its input recorded.
    pub fn with_input(
        step: impl Into<String>,
        input: serde_json::Value,
        summary: impl Into<String>,
    ) -> Self {
        Self {
            step: step.into(),
            tool: None,
            input: Some(input),
            summary: summary.into(),
        }
    }

    /// A tool invocation entry.
    pub fn tool_call(
        tool: impl Into<String>,
        input: serde_json::Value,
        summary: impl Into<String>,
    ) -> Self {
        Self {
            step: "tool_call".into(),
            tool: Some(tool.into()),
            input: Some(input),
            summary: summary.into(),
        }
    }
}

/// The full result of one planning run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanResult {
    /// Echo of the request that was planned.
    pub request: Request,

    /// Top-k candidates, best first.
    pub candidates: Vec<ScoredCandidate>,

    /// The winning candidate — always `candidates[0]`.
    pub selected: ScoredCandidate,

    /// Templated justification for the selection.
    pub justification: String,

    /// Ordered audit log of pipeline steps.
    pub trace: Vec<TraceEntry>,

    /// Per-step latencies and counters.
    pub metrics: PlanMetrics,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn item() -> CatalogItem {
        CatalogItem {
            id: "SP-100".into(),
            component: "solar_panel".into(),
            vendor: "Helios Dynamics".into(),
            price: 4800.0,
            lead_time_days: 21,
            reliability: 0.985,
            specs: BTreeMap::new(),
        }
    }

    #[test]
    fn candidate_flattens_item_fields() {
        let cand = ScoredCandidate::new(item(), 0.6955);
        let json = serde_json::to_value(&cand).unwrap();
        assert_eq!(json["id"], "SP-100");
        assert_eq!(json["vendor"], "Helios Dynamics");
        assert!((json["score"].as_f64().unwrap() - 0.6955).abs() < 1e-9);
        // tools omitted entirely when not investigated
        assert!(json.get("tools").is_none());
    }

    #[test]
    fn candidate_roundtrips_through_json() {
        let cand = ScoredCandidate::new(item(), 0.5);
        let json = serde_json::to_string(&cand).unwrap();
        let back: ScoredCandidate = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cand);
    }

    #[test]
    fn trace_entry_serialization() {
        let entry = TraceEntry::step("scoring", "scored 2 candidates");
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["step"], "scoring");
        assert!(json.get("tool").is_none());
        assert!(json.get("input").is_none());

        let call = TraceEntry::tool_call(
            "price_history",
            serde_json::json!("SP-100"),
            "last price=5230; trend=stable",
        );
        let json = serde_json::to_value(&call).unwrap();
        assert_eq!(json["step"], "tool_call");
        assert_eq!(json["tool"], "price_history");
        assert_eq!(json["input"], "SP-100");
    }
}
