use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use reddit_leads::collector::Collector;
use reddit_leads::config::{self, CollectorConfig};
use reddit_leads::scrapers::ListingClient;

/// Fetch reddit posts from the past 14 days into a scored CSV.
#[derive(Parser, Debug)]
#[command(name = "reddit_leads", version)]
struct Cli {
    /// Output csv path (optional)
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let out_path = cli
        .out
        .unwrap_or_else(|| PathBuf::from(config::DEFAULT_OUTPUT_CSV));

    let config = CollectorConfig::default();

    // Fallback capability is probed once here and never re-checked mid-run.
    let listing = match config::credentials_from_env() {
        Some(creds) => match ListingClient::new(&creds, &config.user_agent) {
            Ok(client) => {
                info!("listing fallback available");
                Some(client)
            }
            Err(e) => {
                warn!(error = %e, "listing fallback init failed, continuing without it");
                None
            }
        },
        None => {
            info!("no listing credentials configured, fallback disabled");
            None
        }
    };

    let summary = Collector::new(config, listing).run(&out_path)?;

    if summary.wrote_file {
        info!(
            "wrote {} unique records to {}",
            summary.total_unique,
            out_path.display()
        );
    } else {
        info!("no records found in the window with the configured queries");
    }

    Ok(())
}
