//! Terminal viewer for the collected leads table.
//!
//! Reads the CSV the collector writes and prints every row as an aligned
//! table. `--refresh` spawns a fresh collection run without waiting for it;
//! re-open the viewer afterwards to see the new data.

use std::path::PathBuf;
use std::process::Command;

use anyhow::Result;
use clap::Parser;

use reddit_leads::config::DEFAULT_OUTPUT_CSV;
use reddit_leads::storage;

#[derive(Parser, Debug)]
#[command(name = "leads_viewer", version)]
struct Cli {
    /// Leads csv to display
    #[arg(long, default_value = DEFAULT_OUTPUT_CSV)]
    file: PathBuf,

    /// Spawn a fresh collection run (fire-and-forget) before displaying
    #[arg(long)]
    refresh: bool,

    /// Max characters of title to show per row
    #[arg(long, default_value_t = 60)]
    title_width: usize,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.refresh {
        spawn_collector();
    }

    if !cli.file.exists() {
        println!(
            "File '{}' not found. Run the collector first.",
            cli.file.display()
        );
        return Ok(());
    }

    let records = storage::load_leads(&cli.file)?;
    println!("Loaded {} leads from {}\n", records.len(), cli.file.display());

    println!(
        "{:<10} {:<19} {:<18} {:<width$} {:>5}  {:<30} {:<15}",
        "id",
        "created_utc",
        "subreddit",
        "title",
        "score",
        "emails",
        "phones",
        width = cli.title_width
    );

    for record in &records {
        println!(
            "{:<10} {:<19} {:<18} {:<width$} {:>5}  {:<30} {:<15}",
            shorten(&record.id, 10),
            shorten(&record.created_utc, 19),
            shorten(&record.subreddit, 18),
            shorten(&record.title, cli.title_width),
            record.score,
            shorten(&record.emails, 30),
            shorten(&record.phones, 15),
            width = cli.title_width
        );
    }

    if let Some(first) = records.first() {
        println!("\nBatch written at: {}", first.saved_at);
    }

    Ok(())
}

/// Launch the collector as an independent process. No completion contract:
/// the run finishes (or fails) on its own and the viewer never observes it.
fn spawn_collector() {
    let collector = std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(|d| d.join("reddit_leads")))
        .filter(|p| p.exists())
        .unwrap_or_else(|| PathBuf::from("reddit_leads"));

    match Command::new(&collector).spawn() {
        Ok(child) => println!("Started collector (pid {}).", child.id()),
        Err(e) => eprintln!("Could not start collector {:?}: {}", collector, e),
    }
}

fn shorten(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let cut: String = text.chars().take(max.saturating_sub(3)).collect();
    format!("{}...", cut)
}
