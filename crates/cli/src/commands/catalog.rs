//! `quartermaster catalog` — catalog summary listings.

use quartermaster_config::AppConfig;

pub async fn run(vendors: bool) -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load().map_err(|e| format!("Failed to load config: {e}"))?;
    let catalog = super::load_catalog(&config)?;

    println!();
    if vendors {
        println!("Vendors ({} items total):", catalog.len());
        for vendor in catalog.list_vendors() {
            println!("  - {vendor}");
        }
    } else {
        println!("Components ({} items total):", catalog.len());
        for (component, count) in catalog.components() {
            println!("  {component}: {count}");
        }
    }
    println!();
    Ok(())
}
