//! The planning pipeline — validate, search, filter, score, rank,
//! investigate, justify.

use quartermaster_catalog::Catalog;
use quartermaster_core::error::{Error, PlanError, Result};
use quartermaster_core::item::CatalogItem;
use quartermaster_core::llm::LlmAdapter;
use quartermaster_core::request::Request;
use quartermaster_core::tool::{ToolCall, ToolRegistry};
use quartermaster_telemetry::{PlanMetrics, StepTimer};
use serde_json::json;
use std::sync::Arc;
use tracing::{debug, info};

use crate::result::{PlanResult, ScoredCandidate, ToolFindings, TraceEntry};
use crate::score::{Bounds, compute_score};

/// Knobs for one planning run.
#[derive(Debug, Clone)]
pub struct PlanOptions {
    /// Number of top candidates to return (clamped to >= 1).
    pub top_k: usize,

    /// Whether to call the investigation tools on the shortlist.
    pub investigate: bool,
}

impl Default for PlanOptions {
    fn default() -> Self {
        Self {
            top_k: 3,
            investigate: false,
        }
    }
}

/// The procurement planner.
///
/// Holds the catalog (loaded once at startup), the configured LLM adapter,
/// and the tool registry. One `plan()` call is one linear pipeline; the
/// planner itself keeps no per-request state.
pub struct Planner {
    catalog: Arc<Catalog>,
    llm: Arc<dyn LlmAdapter>,
    tools: Arc<ToolRegistry>,
}

impl Planner {
    /// Create a planner with the default tool registry.
    pub fn new(catalog: Arc<Catalog>, llm: Arc<dyn LlmAdapter>) -> Self {
        Self {
            catalog,
            llm,
            tools: Arc::new(quartermaster_tools::default_registry()),
        }
    }

    /// Replace the tool registry.
    pub fn with_tools(mut self, tools: Arc<ToolRegistry>) -> Self {
        self.tools = tools;
        self
    }

    /// Run the full planning pipeline for one request.
    pub async fn plan(&self, request: &Request, options: &PlanOptions) -> Result<PlanResult> {
        let run_timer = StepTimer::start();
        let mut metrics = PlanMetrics::new();
        let mut trace = Vec::new();

        // ── Catalog ready ──
        let step = StepTimer::start();
        trace.push(TraceEntry::step(
            "catalog_load",
            format!("catalog ready ({} items)", self.catalog.len()),
        ));
        metrics.record_step("catalog_load", step.elapsed());

        // ── Validate request shape ──
        let component = request
            .component
            .as_deref()
            .filter(|c| !c.is_empty())
            .ok_or(PlanError::MissingComponent)?;

        // ── Search ──
        let step = StepTimer::start();
        let found = self.catalog.search(component, request.spec_filters.as_ref());
        metrics.record_step("catalog_search", step.elapsed());
        metrics.total_candidates = found.len();

        debug!(component, candidates = found.len(), "Catalog search complete");
        trace.push(TraceEntry::with_input(
            "catalog_search",
            json!({"component": component, "spec_filters": request.spec_filters}),
            format!("found {} candidates", found.len()),
        ));

        // ── Hard constraints ──
        let initial_count = found.len();
        let mut candidates = found;
        if let Some(max_cost) = request.max_cost {
            candidates.retain(|c| c.price <= max_cost);
        }
        if let Some(latest) = request.latest_delivery_days {
            candidates.retain(|c| c.lead_time_days <= latest);
        }
        if candidates.len() < initial_count {
            trace.push(TraceEntry::with_input(
                "constraint_filtering",
                json!({
                    "max_cost": request.max_cost,
                    "latest_delivery_days": request.latest_delivery_days,
                }),
                format!(
                    "filtered from {initial_count} to {} candidates",
                    candidates.len()
                ),
            ));
        }

        if candidates.is_empty() {
            return Err(PlanError::NoCandidates.into());
        }

        // ── Bounds ──
        let bounds = Bounds::from_candidates(&candidates)
            .ok_or_else(|| Error::Internal("bounds over empty candidate set".into()))?;
        trace.push(TraceEntry::step(
            "compute_bounds",
            format!(
                "price: [{}, {}], lead_time: [{}, {}]",
                bounds.price_min, bounds.price_max, bounds.lead_min, bounds.lead_max
            ),
        ));

        // ── Scoring ──
        let step = StepTimer::start();
        let weights = request.effective_weights();
        let mut scored: Vec<ScoredCandidate> = candidates
            .into_iter()
            .map(|item| {
                let score = compute_score(&item, &weights, &bounds);
                ScoredCandidate::new(item, score)
            })
            .collect();
        metrics.record_step("scoring", step.elapsed());
        metrics.candidates_after_filtering = scored.len();
        trace.push(TraceEntry::step(
            "scoring",
            format!("scored {} candidates", scored.len()),
        ));

        // ── Ranking ──
        // Stable sort: ties keep catalog order
        scored.sort_by(|a, b| b.score.total_cmp(&a.score));
        scored.truncate(options.top_k.max(1));
        metrics.top_k_selected = scored.len();
        trace.push(TraceEntry::step(
            "ranking",
            format!("selected top {} candidates", scored.len()),
        ));

        // ── Investigation ──
        if options.investigate {
            let step = StepTimer::start();
            for candidate in &mut scored {
                self.investigate(candidate, &mut metrics, &mut trace).await?;
            }
            metrics.record_step("investigation", step.elapsed());
            trace.push(TraceEntry::step(
                "investigation",
                format!("called tools for {} candidates", scored.len()),
            ));
        }

        // ── Selection ──
        let selected = scored.first().cloned().ok_or(PlanError::EmptyRanking)?;

        // ── Justification ──
        let step = StepTimer::start();
        let prompt = justification_prompt(&selected.item, request);
        let justification = self.llm.generate(&prompt, 150).await?;
        metrics.record_step("llm_justification", step.elapsed());
        trace.push(TraceEntry::step("llm_justification", "generated justification"));

        metrics.total_latency = run_timer.elapsed().as_secs_f64();

        info!(
            component,
            selected = %selected.item.id,
            score = selected.score,
            candidates = metrics.top_k_selected,
            "Plan complete"
        );

        Ok(PlanResult {
            request: request.clone(),
            candidates: scored,
            selected,
            justification,
            trace,
            metrics,
        })
    }

    /// Call both tools for one candidate and attach the findings.
    async fn investigate(
        &self,
        candidate: &mut ScoredCandidate,
        metrics: &mut PlanMetrics,
        trace: &mut Vec<TraceEntry>,
    ) -> Result<()> {
        let price_history = self
            .tools
            .execute(&ToolCall {
                name: "price_history".into(),
                arguments: json!({"item_id": candidate.item.id}),
            })
            .await?
            .data
            .ok_or_else(|| Error::Internal("price_history returned no payload".into()))?;
        metrics.tools_called += 1;

        let last_price = price_history["history"]
            .as_array()
            .and_then(|h| h.last())
            .and_then(|p| p["price"].as_i64())
            .unwrap_or(0);
        trace.push(TraceEntry::tool_call(
            "price_history",
            json!(candidate.item.id),
            format!("last price={last_price}; trend=stable"),
        ));

        let availability = self
            .tools
            .execute(&ToolCall {
                name: "availability".into(),
                arguments: json!({"vendor": candidate.item.vendor}),
            })
            .await?
            .data
            .ok_or_else(|| Error::Internal("availability returned no payload".into()))?;
        metrics.tools_called += 1;

        trace.push(TraceEntry::tool_call(
            "availability",
            json!(candidate.item.vendor),
            format!(
                "avg_lead={} days; in_stock={}",
                availability["avg_lead_time_days"], availability["in_stock"]
            ),
        ));

        candidate.tools = Some(ToolFindings {
            price_history,
            availability,
        });
        Ok(())
    }
}

/// The fixed justification prompt sent to the LLM adapter.
fn justification_prompt(item: &CatalogItem, request: &Request) -> String {
    let max_cost = request
        .max_cost
        .map_or_else(|| "N/A".to_string(), |v| v.to_string());
    let latest_delivery = request
        .latest_delivery_days
        .map_or_else(|| "N/A".to_string(), |v| v.to_string());

    format!(
        "Selected item details:\n\
         ID: {id}\n\
         Vendor: {vendor}\n\
         Price: {price}\n\
         Lead Time: {lead} days\n\
         Reliability: {reliability}\n\
         \n\
         Request constraints:\n\
         Max Cost: {max_cost}\n\
         Latest Delivery: {latest_delivery} days\n\
         \n\
         Please provide a brief justification (2-3 sentences) for why this item is the best choice.\n",
        id = item.id,
        vendor = item.vendor,
        price = item.price,
        lead = item.lead_time_days,
        reliability = item.reliability,
    )
}
