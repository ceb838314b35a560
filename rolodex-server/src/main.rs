//! Rolodex record store server.
//!
//! Serves the customer record set over REST with the duplicate-guard
//! middleware ahead of persistence. Optionally seeds the store from a
//! JSON file carrying initial customers and option lists.
//!
//! Usage:
//!   rolodex-server --port 4000 --seed db.json

use anyhow::{Context, Result};
use clap::Parser;
use rolodex_server::{build_router, AppState};
use rolodex_store::{MemoryStore, RecordStore};
use rolodex_types::CustomerDraft;
use rolodex_validate::{CustomerValidator, ValidatorConfig};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::{fs, sync::Arc};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "rolodex-server")]
#[command(about = "Customer directory record store server")]
struct Args {
    /// Port to listen on
    #[arg(short, long, default_value = "4000")]
    port: u16,

    /// Records per listing page
    #[arg(long, default_value = "10")]
    page_size: usize,

    /// Path to a JSON seed file (customers, titles, countries)
    #[arg(short, long)]
    seed: Option<PathBuf>,

    /// Enable verbose debug logging
    #[arg(short, long)]
    verbose: bool,
}

/// Seed file shape: initial drafts plus optional option-list overrides.
#[derive(Debug, Default, Deserialize)]
struct SeedFile {
    #[serde(default)]
    customers: Vec<CustomerDraft>,
    #[serde(default)]
    titles: Vec<String>,
    #[serde(default)]
    countries: Vec<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let log_level = if args.verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .compact()
        .init();

    info!("Rolodex server starting...");

    let seed = match &args.seed {
        Some(path) => load_seed(path)?,
        None => SeedFile::default(),
    };

    let store = if seed.titles.is_empty() && seed.countries.is_empty() {
        MemoryStore::new()
    } else {
        MemoryStore::with_options(seed.titles, seed.countries)
    };
    let store = Arc::new(store.with_page_size(args.page_size));

    if !seed.customers.is_empty() {
        let inserted = store.seed(seed.customers).await;
        info!(inserted, "seeded customer records");
    }

    let validator = Arc::new(CustomerValidator::new(ValidatorConfig {
        titles: store.titles().await?,
        countries: store.countries().await?,
    }));

    let app = build_router(AppState {
        store,
        validator,
    });

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", args.port))
        .await
        .context("Failed to bind HTTP port")?;

    println!("\n========================================");
    println!("  Rolodex Server Running");
    println!("========================================");
    println!("  Port:      {}", args.port);
    println!("  Page size: {}", args.page_size);
    println!("========================================\n");

    info!(port = args.port, "listening");
    axum::serve(listener, app).await.context("HTTP server failed")?;
    Ok(())
}

fn load_seed(path: &Path) -> Result<SeedFile> {
    info!("Loading seed data from {:?}", path);
    let bytes = fs::read(path).context("Failed to read seed file")?;
    serde_json::from_slice(&bytes).context("Failed to parse seed file")
}
