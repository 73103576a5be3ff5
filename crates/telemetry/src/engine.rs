//! Thread-safe telemetry engine — aggregates plan outcomes and serves
//! usage reports.

use crate::model::{PlanMetrics, PlanRecord};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::RwLock;

/// Maximum number of recent plan records retained.
const MAX_RECENT: usize = 100;

/// The core telemetry engine.
///
/// Thread-safe via `RwLock`. Tracks running totals across all plans served
/// by this process plus a bounded window of recent plan summaries.
pub struct TelemetryEngine {
    started_at: DateTime<Utc>,
    totals: RwLock<RunningTotals>,
    recent: RwLock<Vec<PlanRecord>>,
}

/// Internal running totals.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
struct RunningTotals {
    plans_succeeded: u64,
    plans_failed: u64,
    tools_called: u64,
    llm_calls: u64,
}

/// A point-in-time usage report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsageReport {
    pub uptime_secs: i64,
    pub plans_succeeded: u64,
    pub plans_failed: u64,
    pub tools_called: u64,
    pub llm_calls: u64,
    pub recent: Vec<PlanRecord>,
}

impl TelemetryEngine {
    pub fn new() -> Self {
        Self {
            started_at: Utc::now(),
            totals: RwLock::new(RunningTotals::default()),
            recent: RwLock::new(Vec::new()),
        }
    }

    /// Record a completed plan.
    pub fn record_plan(&self, record: PlanRecord, metrics: &PlanMetrics) {
        {
            let mut totals = self.totals.write().unwrap();
            totals.plans_succeeded += 1;
            totals.tools_called += metrics.tools_called as u64;
            // one justification call per successful plan
            totals.llm_calls += 1;
        }

        let mut recent = self.recent.write().unwrap();
        recent.push(record);
        if recent.len() > MAX_RECENT {
            let excess = recent.len() - MAX_RECENT;
            recent.drain(..excess);
        }
    }

    /// Record a plan that failed before producing a result.
    pub fn record_failure(&self) {
        self.totals.write().unwrap().plans_failed += 1;
    }

    /// Build a usage report.
    pub fn report(&self) -> UsageReport {
        let totals = self.totals.read().unwrap().clone();
        let recent = self.recent.read().unwrap().clone();
        UsageReport {
            uptime_secs: Utc::now()
                .signed_duration_since(self.started_at)
                .num_seconds(),
            plans_succeeded: totals.plans_succeeded,
            plans_failed: totals.plans_failed,
            tools_called: totals.tools_called,
            llm_calls: totals.llm_calls,
            recent,
        }
    }
}

impl Default for TelemetryEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics_with_tools(tools_called: usize) -> PlanMetrics {
        PlanMetrics {
            tools_called,
            ..PlanMetrics::new()
        }
    }

    #[test]
    fn records_accumulate() {
        let engine = TelemetryEngine::new();
        engine.record_plan(
            PlanRecord::new("solar_panel", "SP-100", 0.69, 0.001),
            &metrics_with_tools(4),
        );
        engine.record_plan(
            PlanRecord::new("battery", "BAT-300", 0.72, 0.001),
            &metrics_with_tools(0),
        );
        engine.record_failure();

        let report = engine.report();
        assert_eq!(report.plans_succeeded, 2);
        assert_eq!(report.plans_failed, 1);
        assert_eq!(report.tools_called, 4);
        assert_eq!(report.llm_calls, 2);
        assert_eq!(report.recent.len(), 2);
        assert_eq!(report.recent[1].selected, "BAT-300");
    }

    #[test]
    fn recent_window_is_bounded() {
        let engine = TelemetryEngine::new();
        for i in 0..150 {
            engine.record_plan(
                PlanRecord::new("battery", format!("BAT-{i}"), 0.5, 0.001),
                &metrics_with_tools(0),
            );
        }
        let report = engine.report();
        assert_eq!(report.recent.len(), MAX_RECENT);
        // oldest evicted first
        assert_eq!(report.recent[0].selected, "BAT-50");
    }
}
