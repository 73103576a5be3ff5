//! Data model for plan metrics and usage records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::{Duration, Instant};
use uuid::Uuid;

// ── Per-plan metrics ──────────────────────────────────────────────────────

/// Latencies and counters for one planning run, attached to its result.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlanMetrics {
    /// Seconds spent in each named pipeline step.
    pub step_latencies: BTreeMap<String, f64>,

    /// Candidates found by the catalog search, before hard constraints.
    pub total_candidates: usize,

    /// Candidates remaining after constraint filtering.
    pub candidates_after_filtering: usize,

    /// Size of the returned top-k list.
    pub top_k_selected: usize,

    /// Number of tool invocations made during investigation.
    pub tools_called: usize,

    /// Wall-clock seconds for the whole run.
    pub total_latency: f64,
}

impl PlanMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the duration of a named step.
    pub fn record_step(&mut self, step: &str, elapsed: Duration) {
        self.step_latencies
            .insert(step.to_string(), elapsed.as_secs_f64());
    }
}

/// A started wall-clock timer for one step.
pub struct StepTimer {
    started: Instant,
}

impl StepTimer {
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}

// ── Usage records ─────────────────────────────────────────────────────────

/// Summary of one completed plan, kept by the engine for status reporting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanRecord {
    /// Unique record id.
    pub id: String,
    /// Component type that was planned.
    pub component: String,
    /// Id of the selected item.
    pub selected: String,
    /// Score of the selected item.
    pub score: f64,
    /// Wall-clock seconds for the run.
    pub total_latency: f64,
    /// When the plan completed.
    pub recorded_at: DateTime<Utc>,
}

impl PlanRecord {
    pub fn new(component: impl Into<String>, selected: impl Into<String>, score: f64, total_latency: f64) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            component: component.into(),
            selected: selected.into(),
            score,
            total_latency,
            recorded_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_step_stores_seconds() {
        let mut metrics = PlanMetrics::new();
        metrics.record_step("scoring", Duration::from_millis(1500));
        assert!((metrics.step_latencies["scoring"] - 1.5).abs() < 1e-9);
    }

    #[test]
    fn metrics_serialize_with_all_fields() {
        let mut metrics = PlanMetrics::new();
        metrics.total_candidates = 4;
        metrics.tools_called = 2;
        metrics.record_step("catalog_search", Duration::from_micros(80));

        let json = serde_json::to_value(&metrics).unwrap();
        assert_eq!(json["total_candidates"], 4);
        assert_eq!(json["tools_called"], 2);
        assert!(json["step_latencies"]["catalog_search"].as_f64().unwrap() > 0.0);
        assert!(json.get("total_latency").is_some());
    }

    #[test]
    fn step_timer_measures_elapsed() {
        let timer = StepTimer::start();
        std::thread::sleep(Duration::from_millis(5));
        assert!(timer.elapsed() >= Duration::from_millis(5));
    }

    #[test]
    fn plan_record_has_unique_ids() {
        let a = PlanRecord::new("solar_panel", "SP-100", 0.69, 0.001);
        let b = PlanRecord::new("solar_panel", "SP-100", 0.69, 0.001);
        assert_ne!(a.id, b.id);
    }
}
