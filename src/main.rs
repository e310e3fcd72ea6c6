//! Job Radar — Binary Entrypoint
//! One-shot batch run: load config, poll every configured source, score and
//! rank, deliver the new matches to Telegram, persist the seen set.

use anyhow::Result;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use job_radar::config::Config;
use job_radar::engine::run_once;
use job_radar::ingest::{build_sources, http_client};
use job_radar::notify::telegram::TelegramNotifier;
use job_radar::seen::SeenStore;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact())
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env in local/dev; no-op in CI where secrets come from the runner.
    let _ = dotenvy::dotenv();
    init_tracing();

    let cfg = Config::load_default()?;
    let seen_store = SeenStore::new(cfg.seen_file.clone());
    let sources = build_sources(&cfg.sources, &http_client());
    let notifier = TelegramNotifier::from_env()?;

    run_once(&cfg, &sources, &seen_store, &notifier).await?;
    Ok(())
}
