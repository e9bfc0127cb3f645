mod categorize;
mod config;
mod db;
mod models;
mod parse;
mod run;
mod service;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Loads .env first so RUST_LOG can come from it
    let settings = config::Settings::from_env()?;
    init_tracing();
    let args: Vec<String> = std::env::args().collect();
    tracing::debug!(
        timezone = %settings.timezone,
        db = %settings.db_path.display(),
        "loaded settings"
    );
    run::as_cli(&args, &settings)
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
