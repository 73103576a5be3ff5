//! HTTP API gateway for Quartermaster.
//!
//! Wraps the planner, the catalog read model, and the vendor-constraint
//! endpoint behind an axum router. All domain errors surface as
//! `{ "error": <message>, "status": <code> }` with the matching HTTP status.

pub mod api;

use quartermaster_catalog::Catalog;
use quartermaster_core::llm::LlmAdapter;
use quartermaster_core::request::VendorConstraints;
use quartermaster_core::tool::ToolRegistry;
use quartermaster_planner::Planner;
use quartermaster_telemetry::TelemetryEngine;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Shared state for the gateway.
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub planner: Planner,
    pub tools: Arc<ToolRegistry>,
    pub telemetry: Arc<TelemetryEngine>,
    /// Top-k used when a request does not specify one.
    pub default_top_k: usize,
    /// Vendor constraints cached per request id.
    pub constraint_cache: RwLock<HashMap<String, VendorConstraints>>,
}

pub type SharedState = Arc<AppState>;

impl AppState {
    /// Assemble gateway state from its parts.
    pub fn new(
        catalog: Arc<Catalog>,
        llm: Arc<dyn LlmAdapter>,
        tools: Arc<ToolRegistry>,
        default_top_k: usize,
    ) -> SharedState {
        let planner = Planner::new(catalog.clone(), llm).with_tools(tools.clone());
        Arc::new(Self {
            catalog,
            planner,
            tools,
            telemetry: Arc::new(TelemetryEngine::new()),
            default_top_k,
            constraint_cache: RwLock::new(HashMap::new()),
        })
    }
}

/// Build the full router with tracing and CORS layers.
pub fn router(state: SharedState) -> axum::Router {
    axum::Router::new()
        .nest("/v1", api::v1_router(state))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// Bind and serve the gateway until the process exits.
pub async fn serve(state: SharedState, host: &str, port: u16) -> std::io::Result<()> {
    let app = router(state);
    let listener = tokio::net::TcpListener::bind((host, port)).await?;
    info!(addr = %listener.local_addr()?, "Gateway listening");
    axum::serve(listener, app).await
}
