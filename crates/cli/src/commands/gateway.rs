//! `quartermaster gateway` — start the HTTP API server.

use quartermaster_config::AppConfig;
use quartermaster_gateway::AppState;
use std::sync::Arc;

pub async fn run(port: Option<u16>) -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load().map_err(|e| format!("Failed to load config: {e}"))?;

    let catalog = super::load_catalog(&config)?;
    let llm = quartermaster_llm::select_adapter(&config.llm)?;
    let tools = Arc::new(quartermaster_tools::default_registry());

    let state = AppState::new(catalog, llm, tools, config.default_top_k);

    let port = port.unwrap_or(config.gateway.port);
    println!();
    println!("  Quartermaster gateway");
    println!("  Catalog:  {} ({} items)", config.catalog_path, state.catalog.len());
    println!("  LLM:      {}", config.llm.provider);
    println!("  Address:  http://{}:{port}/v1", config.gateway.host);
    println!();

    quartermaster_gateway::serve(state, &config.gateway.host, port).await?;
    Ok(())
}
