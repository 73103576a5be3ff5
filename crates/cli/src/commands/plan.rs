//! `quartermaster plan` — run the planning pipeline on a request file.

use quartermaster_config::AppConfig;
use quartermaster_core::request::{Request, VendorConstraints};
use quartermaster_planner::{
    PlanOptions, PlanResult, Planner, ScoredCandidate, apply_vendor_constraints, negotiate,
};
use std::path::PathBuf;

pub struct PlanArgs {
    pub request_file: PathBuf,
    pub investigate: bool,
    pub top_k: usize,
    pub llm_provider: Option<String>,
    pub negotiate: bool,
    pub metrics: bool,
    pub constraints_file: Option<PathBuf>,
}

pub async fn run(args: PlanArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = AppConfig::load().map_err(|e| format!("Failed to load config: {e}"))?;
    if let Some(provider) = &args.llm_provider {
        config.llm.provider = provider.clone();
    }

    // --- Load the request ---
    let content = std::fs::read_to_string(&args.request_file)
        .map_err(|e| format!("Error: File '{}' not found: {e}", args.request_file.display()))?;
    let request: Request = serde_json::from_str(&content).map_err(|e| {
        format!(
            "Error: Invalid JSON in '{}': {e}",
            args.request_file.display()
        )
    })?;

    // Constraints file overrides any constraints embedded in the request
    let vendor_constraints: Option<VendorConstraints> = match &args.constraints_file {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .map_err(|e| format!("Error: Constraints file '{}' not found: {e}", path.display()))?;
            Some(serde_json::from_str(&content).map_err(|e| {
                format!("Error: Invalid JSON in '{}': {e}", path.display())
            })?)
        }
        None => request.vendor_constraints.clone(),
    };

    // --- Build the planner ---
    let catalog = super::load_catalog(&config)?;
    let llm = quartermaster_llm::select_adapter(&config.llm)?;
    let planner = Planner::new(catalog, llm);

    println!();
    println!("{}", "=".repeat(60));
    println!("Running Procurement Agent");
    println!("{}", "=".repeat(60));
    println!();

    let options = PlanOptions {
        top_k: args.top_k,
        investigate: args.investigate,
    };
    let result = planner
        .plan(&request, &options)
        .await
        .map_err(|e| format!("ERROR: {e}"))?;

    print_result(&result, vendor_constraints.as_ref());

    if args.metrics {
        print_metrics(&result);
    }

    if args.negotiate {
        println!("{}", "=".repeat(60));
        println!("Procurement Negotiation");
        println!("{}", "=".repeat(60));
        println!();
        let negotiation = negotiate(&result.selected, &request);
        println!("Negotiation Transcript:");
        for message in &negotiation.transcript {
            println!("  {message}");
        }
        println!();
        println!("Negotiation Verdict: {}", negotiation.verdict);
        println!();
    }

    print_trace(&result);
    Ok(())
}

fn print_result(result: &PlanResult, vendor_constraints: Option<&VendorConstraints>) {
    let request = &result.request;

    println!("Request:");
    println!(
        "  Component: {}",
        request.component.as_deref().unwrap_or("None")
    );
    println!(
        "  Spec Filters: {}",
        request
            .spec_filters
            .as_ref()
            .map_or_else(|| "None".to_string(), |f| serde_json::json!(f).to_string())
    );
    println!(
        "  Max Cost: {}",
        request
            .max_cost
            .map_or_else(|| "None".to_string(), |v| v.to_string())
    );
    println!(
        "  Latest Delivery: {} days",
        request
            .latest_delivery_days
            .map_or_else(|| "None".to_string(), |v| v.to_string())
    );
    println!();

    println!(
        "Candidates Found (before constraints): {}\n",
        result.candidates.len()
    );
    for (i, candidate) in result.candidates.iter().enumerate() {
        println!(
            "  {}. {} - {} (reliability: {}, lead_time: {}d)",
            i + 1,
            candidate.item.id,
            candidate.item.vendor,
            candidate.item.reliability,
            candidate.item.lead_time_days
        );
    }
    println!();

    let candidates: Vec<ScoredCandidate> = match vendor_constraints {
        Some(constraints) => {
            println!("Applying Vendor Constraints:");
            println!("  {}", serde_json::json!(constraints));
            let filtered = apply_vendor_constraints(result.candidates.clone(), constraints);
            println!("Candidates after filtering: {}\n", filtered.len());
            filtered
        }
        None => {
            println!("Candidates to select from: {}\n", result.candidates.len());
            result.candidates.clone()
        }
    };

    for (i, candidate) in candidates.iter().enumerate() {
        println!("Candidate {}: {}", i + 1, candidate.item.id);
        println!("  Vendor: {}", candidate.item.vendor);
        println!("  Price: ${}", candidate.item.price);
        println!("  Lead Time: {} days", candidate.item.lead_time_days);
        println!("  Reliability: {}", candidate.item.reliability);
        println!("  Score: {:.4}", candidate.score);

        if let Some(tools) = &candidate.tools {
            println!("  Tools Data:");
            if let Some(last) = tools.price_history["history"]
                .as_array()
                .and_then(|h| h.last())
            {
                println!("    Price History: Last price = ${}", last["price"]);
            }
            println!(
                "    Availability: Avg lead time = {} days, In stock = {}",
                tools.availability["avg_lead_time_days"], tools.availability["in_stock"]
            );
        }
        println!();
    }

    println!("{}", "=".repeat(60));
    println!("SELECTED: {}", result.selected.item.id);
    println!("{}", "=".repeat(60));
    println!();

    println!("Justification:");
    println!("{}", result.justification);
    println!();
}

fn print_metrics(result: &PlanResult) {
    let metrics = &result.metrics;
    println!("{}", "=".repeat(60));
    println!("Performance Metrics");
    println!("{}", "=".repeat(60));
    println!("Total Latency: {:.4}s", metrics.total_latency);
    println!("Total Candidates: {}", metrics.total_candidates);
    println!(
        "Candidates After Filtering: {}",
        metrics.candidates_after_filtering
    );
    println!("Top K Selected: {}", metrics.top_k_selected);
    println!("Tools Called: {}", metrics.tools_called);
    println!();
    println!("Step Latencies:");
    for (step, latency) in &metrics.step_latencies {
        println!("  {step}: {latency:.4}s");
    }
    println!();
}

fn print_trace(result: &PlanResult) {
    println!("Trace ({} steps):", result.trace.len());
    for entry in &result.trace {
        match &entry.tool {
            Some(tool) => println!("  - {tool}: {}", entry.summary),
            None => println!("  - {}: {}", entry.step, entry.summary),
        }
    }
    println!();
}
