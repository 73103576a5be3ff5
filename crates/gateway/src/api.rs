//! HTTP API v1 — REST endpoints for the procurement planner.
//!
//! Endpoints:
//!
//! - `POST /v1/plan`                           — Run the planning pipeline
//! - `POST /v1/negotiate`                      — Plan, then simulate negotiation
//! - `POST /v1/constraints`                    — Apply vendor constraints to candidates
//! - `GET  /v1/constraints/{request_id}`       — Recall cached constraints
//! - `GET  /v1/catalog/components`             — Per-component item counts
//! - `GET  /v1/catalog/vendors`                — Unique vendor names
//! - `GET  /v1/catalog/items/{id}`             — One catalog item
//! - `GET  /v1/catalog/items/{id}/alternatives`— Cheaper same-component items
//! - `POST /v1/search/semantic`                — Free-text catalog search
//! - `GET  /v1/tools`                          — List investigation tools
//! - `GET  /v1/status`                         — Health and usage report

use axum::{
    Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use tracing::warn;

use quartermaster_core::error::Error;
use quartermaster_core::item::CatalogItem;
use quartermaster_core::request::{Request, VendorConstraints};
use quartermaster_planner::{
    Negotiation, PlanOptions, PlanResult, ScoredCandidate, apply_vendor_constraints, negotiate,
};
use quartermaster_telemetry::PlanRecord;

use crate::SharedState;

// ── Router ────────────────────────────────────────────────────────────────

/// Build the v1 API router. Nest this under "/v1" in the main router.
pub fn v1_router(state: SharedState) -> Router {
    Router::new()
        .route("/plan", post(plan_handler))
        .route("/negotiate", post(negotiate_handler))
        .route("/constraints", post(apply_constraints_handler))
        .route("/constraints/{request_id}", get(get_constraints_handler))
        .route("/catalog/components", get(components_handler))
        .route("/catalog/vendors", get(vendors_handler))
        .route("/catalog/items/{id}", get(get_item_handler))
        .route("/catalog/items/{id}/alternatives", get(alternatives_handler))
        .route("/search/semantic", post(semantic_search_handler))
        .route("/tools", get(list_tools_handler))
        .route("/status", get(status_handler))
        .with_state(state)
}

// ── Errors ────────────────────────────────────────────────────────────────

/// A JSON-serializable API error with its HTTP status.
pub struct ApiError {
    status: u16,
    message: String,
}

impl ApiError {
    fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: 404,
            message: message.into(),
        }
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        Self {
            status: err.status_code(),
            message: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let body = Json(serde_json::json!({
            "error": self.message,
            "status": self.status,
        }));
        (status, body).into_response()
    }
}

// ── Request / Response types ──────────────────────────────────────────────

#[derive(Deserialize)]
struct PlanApiRequest {
    #[serde(flatten)]
    request: Request,

    /// Overrides the server's default top-k.
    #[serde(default)]
    top_k: Option<usize>,

    /// Whether to run the investigation tools on the shortlist.
    #[serde(default)]
    investigate: bool,
}

#[derive(Serialize)]
struct NegotiateResponse {
    negotiation: Negotiation,
    plan: PlanResult,
}

#[derive(Deserialize)]
struct ConstraintsRequest {
    request_id: String,
    candidates: Vec<ScoredCandidate>,
    constraints: VendorConstraints,
}

#[derive(Serialize)]
struct ConstraintsResponse {
    status: &'static str,
    request_id: String,
    candidates_before: usize,
    candidates_after: usize,
    candidates: Vec<ScoredCandidate>,
    constraints_applied: VendorConstraints,
}

#[derive(Deserialize)]
struct SemanticSearchRequest {
    query: String,
    #[serde(default = "default_search_top_k")]
    top_k: usize,
}

fn default_search_top_k() -> usize {
    5
}

#[derive(Deserialize)]
struct AlternativesQuery {
    #[serde(default = "default_alternatives_top_k")]
    top_k: usize,
}

fn default_alternatives_top_k() -> usize {
    3
}

// ── Handlers ──────────────────────────────────────────────────────────────

async fn plan_handler(
    State(state): State<SharedState>,
    Json(body): Json<PlanApiRequest>,
) -> Result<Json<PlanResult>, ApiError> {
    let options = PlanOptions {
        top_k: body.top_k.unwrap_or(state.default_top_k),
        investigate: body.investigate,
    };

    match state.planner.plan(&body.request, &options).await {
        Ok(result) => {
            state.telemetry.record_plan(
                PlanRecord::new(
                    result.selected.item.component.clone(),
                    result.selected.item.id.clone(),
                    result.selected.score,
                    result.metrics.total_latency,
                ),
                &result.metrics,
            );
            Ok(Json(result))
        }
        Err(err) => {
            warn!(error = %err, "Plan failed");
            state.telemetry.record_failure();
            Err(err.into())
        }
    }
}

async fn negotiate_handler(
    State(state): State<SharedState>,
    Json(body): Json<PlanApiRequest>,
) -> Result<Json<NegotiateResponse>, ApiError> {
    let options = PlanOptions {
        top_k: body.top_k.unwrap_or(state.default_top_k),
        investigate: body.investigate,
    };

    let plan = match state.planner.plan(&body.request, &options).await {
        Ok(plan) => plan,
        Err(err) => {
            state.telemetry.record_failure();
            return Err(err.into());
        }
    };
    state.telemetry.record_plan(
        PlanRecord::new(
            plan.selected.item.component.clone(),
            plan.selected.item.id.clone(),
            plan.selected.score,
            plan.metrics.total_latency,
        ),
        &plan.metrics,
    );

    let negotiation = negotiate(&plan.selected, &body.request);
    Ok(Json(NegotiateResponse { negotiation, plan }))
}

async fn apply_constraints_handler(
    State(state): State<SharedState>,
    Json(body): Json<ConstraintsRequest>,
) -> Json<ConstraintsResponse> {
    let candidates_before = body.candidates.len();
    let candidates = apply_vendor_constraints(body.candidates, &body.constraints);

    state
        .constraint_cache
        .write()
        .await
        .insert(body.request_id.clone(), body.constraints.clone());

    Json(ConstraintsResponse {
        status: "success",
        request_id: body.request_id,
        candidates_before,
        candidates_after: candidates.len(),
        candidates,
        constraints_applied: body.constraints,
    })
}

async fn get_constraints_handler(
    State(state): State<SharedState>,
    Path(request_id): Path<String>,
) -> Result<Json<VendorConstraints>, ApiError> {
    state
        .constraint_cache
        .read()
        .await
        .get(&request_id)
        .cloned()
        .map(Json)
        .ok_or_else(|| ApiError::not_found(format!("no constraints recorded for '{request_id}'")))
}

async fn components_handler(State(state): State<SharedState>) -> Json<serde_json::Value> {
    Json(serde_json::json!(state.catalog.components()))
}

async fn vendors_handler(State(state): State<SharedState>) -> Json<serde_json::Value> {
    Json(serde_json::json!(state.catalog.list_vendors()))
}

async fn get_item_handler(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<CatalogItem>, ApiError> {
    state
        .catalog
        .get(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| ApiError::not_found(format!("no catalog item '{id}'")))
}

async fn alternatives_handler(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    Query(query): Query<AlternativesQuery>,
) -> Result<Json<Vec<CatalogItem>>, ApiError> {
    let item = state
        .catalog
        .get(&id)
        .ok_or_else(|| ApiError::not_found(format!("no catalog item '{id}'")))?;
    Ok(Json(state.catalog.cheaper_alternatives(item, query.top_k)))
}

async fn semantic_search_handler(
    State(state): State<SharedState>,
    Json(body): Json<SemanticSearchRequest>,
) -> Json<Vec<CatalogItem>> {
    Json(state.catalog.search_semantic(&body.query, body.top_k))
}

async fn list_tools_handler(State(state): State<SharedState>) -> Json<serde_json::Value> {
    Json(serde_json::json!(state.tools.definitions()))
}

async fn status_handler(State(state): State<SharedState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "catalog_items": state.catalog.len(),
        "usage": state.telemetry.report(),
    }))
}

// ── Tests ─────────────────────────────────────────────────────────────────
