pub mod catalog;
pub mod gateway;
pub mod plan;
pub mod search;

use quartermaster_catalog::Catalog;
use quartermaster_config::AppConfig;
use std::sync::Arc;

/// Load the configured catalog, with a friendly error on failure.
pub fn load_catalog(config: &AppConfig) -> Result<Arc<Catalog>, Box<dyn std::error::Error>> {
    let catalog = Catalog::load(&config.catalog_path)
        .map_err(|e| format!("failed to load catalog: {e}"))?;
    Ok(Arc::new(catalog))
}
