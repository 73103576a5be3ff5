//! Telemetry for Quartermaster — per-plan step metrics and process-wide
//! usage totals.
//!
//! [`PlanMetrics`] rides along inside every plan result; [`TelemetryEngine`]
//! aggregates across plans and serves the gateway status report.

pub mod engine;
pub mod model;

pub use engine::{TelemetryEngine, UsageReport};
pub use model::{PlanMetrics, PlanRecord, StepTimer};
