//! `quartermaster search` — free-text semantic search over the catalog.

use quartermaster_config::AppConfig;

pub async fn run(query: &str, top_k: usize) -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load().map_err(|e| format!("Failed to load config: {e}"))?;
    let catalog = super::load_catalog(&config)?;

    let results = catalog.search_semantic(query, top_k);
    if results.is_empty() {
        println!("No matches for '{query}'.");
        return Ok(());
    }

    println!();
    println!("Top {} matches for '{query}':", results.len());
    println!();
    for (i, item) in results.iter().enumerate() {
        println!(
            "  {}. {} ({}) - {} — ${}, {} days, reliability {}",
            i + 1,
            item.id,
            item.component,
            item.vendor,
            item.price,
            item.lead_time_days,
            item.reliability
        );
    }
    println!();
    Ok(())
}
