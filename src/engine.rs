// src/engine.rs
//! One full radar run: fetch → dedupe → score → select → deliver → persist.
//!
//! The seen set and company universe are read-only while scoring runs; the
//! seen set is mutated only after delivery succeeds, so a failed delivery
//! never marks queued postings as seen.

use anyhow::{Context, Result};
use tracing::info;

use crate::companies::{load_company_universe, CompanyUniverse};
use crate::config::Config;
use crate::ingest::types::JobSource;
use crate::ingest::{fetch_all, http_client};
use crate::notify::{format_message, Notifier};
use crate::pipeline::{dedupe, score_all, select_new};
use crate::seen::SeenStore;

/// Counts for the mandatory single-line run summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub fetched: usize,
    pub scored: usize,
    pub delivered: usize,
}

/// Execute one run against the given sources and delivery sink.
///
/// Per-source failures are absorbed inside `fetch_all`; an unreadable seen
/// store starts empty; only delivery failure aborts the run.
pub async fn run_once(
    cfg: &Config,
    sources: &[Box<dyn JobSource>],
    seen_store: &SeenStore,
    notifier: &dyn Notifier,
) -> Result<RunSummary> {
    let mut seen = seen_store.load();

    let client = http_client();
    let universe: CompanyUniverse = load_company_universe(&client, &cfg.company_universe).await;

    let fetched = fetch_all(sources).await;
    let fetched_count = fetched.len();

    let postings = dedupe(fetched);
    let scored = score_all(postings, cfg, &universe);
    let scored_count = scored.len();

    let new_jobs = select_new(scored, &seen, cfg.min_score_to_send, cfg.max_items_per_run);

    let today = chrono::Utc::now().format("%Y-%m-%d").to_string();
    let message = format_message(&today, &new_jobs);
    notifier
        .send(&message)
        .await
        .with_context(|| format!("delivering run message via {}", notifier.name()))?;

    // Only delivered postings become seen; sub-threshold ones stay eligible
    // for re-evaluation after tuning.
    for sp in &new_jobs {
        let url = sp.posting.apply_url.trim();
        if !url.is_empty() {
            seen.insert(url.to_string());
        }
    }
    seen_store.save(&seen)?;

    let summary = RunSummary {
        fetched: fetched_count,
        scored: scored_count,
        delivered: new_jobs.len(),
    };
    info!(
        fetched = summary.fetched,
        scored = summary.scored,
        delivered = summary.delivered,
        "run complete"
    );
    info!(
        global = universe.global.len(),
        regional = universe.regional.len(),
        extra = universe.extra.len(),
        "company universe loaded"
    );

    Ok(summary)
}
