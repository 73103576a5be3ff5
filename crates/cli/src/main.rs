//! Quartermaster CLI — the main entry point.
//!
//! Commands:
//! - `plan`     — Run the planning pipeline on a request file
//! - `search`   — Free-text semantic search over the catalog
//! - `catalog`  — Show catalog summary
//! - `gateway`  — Start the HTTP API server

use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;

#[derive(Parser)]
#[command(
    name = "quartermaster",
    about = "Quartermaster — Procurement Planning Agent",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Plan a procurement from a request JSON file
    Plan {
        /// Path to the request JSON file
        request_file: PathBuf,

        /// Enable tool investigation of the shortlist
        #[arg(long)]
        investigate: bool,

        /// Number of top candidates (default: 3)
        #[arg(long, default_value_t = 3)]
        top_k: usize,

        /// LLM provider override (mock, openai)
        #[arg(long)]
        llm_provider: Option<String>,

        /// Run the deterministic negotiation after planning
        #[arg(long)]
        negotiate: bool,

        /// Display performance metrics
        #[arg(long)]
        metrics: bool,

        /// Path to a vendor constraints JSON file
        #[arg(long)]
        constraints_file: Option<PathBuf>,
    },

    /// Free-text semantic search over the catalog
    Search {
        /// The search query
        query: String,

        /// Number of results (default: 5)
        #[arg(long, default_value_t = 5)]
        top_k: usize,
    },

    /// Show the catalog summary
    Catalog {
        /// List vendors instead of component counts
        #[arg(long)]
        vendors: bool,
    },

    /// Start the HTTP gateway server
    Gateway {
        /// Override the port
        #[arg(short, long)]
        port: Option<u16>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();

    match cli.command {
        Commands::Plan {
            request_file,
            investigate,
            top_k,
            llm_provider,
            negotiate,
            metrics,
            constraints_file,
        } => {
            commands::plan::run(commands::plan::PlanArgs {
                request_file,
                investigate,
                top_k,
                llm_provider,
                negotiate,
                metrics,
                constraints_file,
            })
            .await?
        }
        Commands::Search { query, top_k } => commands::search::run(&query, top_k).await?,
        Commands::Catalog { vendors } => commands::catalog::run(vendors).await?,
        Commands::Gateway { port } => commands::gateway::run(port).await?,
    }

    Ok(())
}
