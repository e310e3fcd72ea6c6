// src/ingest/mod.rs
pub mod providers;
pub mod types;

use std::time::Duration;

use serde::de::DeserializeOwned;
use tracing::warn;

use crate::config::SourcesConfig;
use crate::ingest::types::{JobSource, Posting};

const USER_AGENT: &str = "job-radar/2.0";
const FETCH_TIMEOUT: Duration = Duration::from_secs(45);

/// Shared client for every outbound call: bounded timeout, stable UA.
pub fn http_client() -> reqwest::Client {
    reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(FETCH_TIMEOUT)
        .build()
        .unwrap_or_default()
}

/// GET a body as text; any network error or non-success status yields None.
/// Sources treat a None as "unavailable this run" and move on.
pub async fn get_text(client: &reqwest::Client, url: &str) -> Option<String> {
    let resp = match client.get(url).send().await {
        Ok(r) => r,
        Err(e) => {
            warn!(error = %e, url, "http get failed");
            return None;
        }
    };
    if !resp.status().is_success() {
        warn!(status = %resp.status(), url, "http get returned non-success");
        return None;
    }
    resp.text().await.ok()
}

/// GET and deserialize JSON; malformed payloads are treated like outages.
pub async fn get_json<T: DeserializeOwned>(client: &reqwest::Client, url: &str) -> Option<T> {
    let body = get_text(client, url).await?;
    match serde_json::from_str(&body) {
        Ok(v) => Some(v),
        Err(e) => {
            warn!(error = %e, url, "malformed json payload");
            None
        }
    }
}

/// Fetch every source in order. A failing source logs a warning and
/// contributes zero postings; a single outage never aborts the run.
/// Record order within each source is preserved for deterministic dedup
/// tie-breaks.
pub async fn fetch_all(sources: &[Box<dyn JobSource>]) -> Vec<Posting> {
    let mut out = Vec::new();
    for s in sources {
        match s.fetch().await {
            Ok(mut v) => out.append(&mut v),
            Err(e) => {
                warn!(error = ?e, source = s.name(), "source error, skipping");
            }
        }
    }
    out
}

/// Wire up the configured sources in the fixed fetch order (adzuna, then the
/// remote boards, then the ATS watchlists) so runs are reproducible.
pub fn build_sources(cfg: &SourcesConfig, client: &reqwest::Client) -> Vec<Box<dyn JobSource>> {
    let mut sources: Vec<Box<dyn JobSource>> = Vec::new();

    if !cfg.adzuna.queries.is_empty() {
        sources.push(Box::new(providers::adzuna::AdzunaSource::new(
            client.clone(),
            cfg.adzuna.clone(),
        )));
    }
    if !cfg.remotive.is_empty() {
        sources.push(Box::new(providers::remotive::RemotiveSource::new(
            client.clone(),
            cfg.remotive.clone(),
        )));
    }
    if !cfg.remoteok.is_empty() {
        sources.push(Box::new(providers::remoteok::RemoteOkSource::new(
            client.clone(),
            cfg.remoteok.clone(),
        )));
    }
    if !cfg.weworkremotely_rss.is_empty() {
        sources.push(Box::new(providers::wwr::WwrRssSource::new(
            client.clone(),
            cfg.weworkremotely_rss.clone(),
        )));
    }
    if !cfg.greenhouse_boards.is_empty() {
        sources.push(Box::new(providers::greenhouse::GreenhouseSource::new(
            client.clone(),
            cfg.greenhouse_boards.clone(),
        )));
    }
    if !cfg.lever_companies.is_empty() {
        sources.push(Box::new(providers::lever::LeverSource::new(
            client.clone(),
            cfg.lever_companies.clone(),
        )));
    }

    sources
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::{anyhow, Result};

    struct OkSource(Vec<Posting>);
    struct FailingSource;

    #[async_trait::async_trait]
    impl JobSource for OkSource {
        async fn fetch(&self) -> Result<Vec<Posting>> {
            Ok(self.0.clone())
        }
        fn name(&self) -> &'static str {
            "ok"
        }
    }

    #[async_trait::async_trait]
    impl JobSource for FailingSource {
        async fn fetch(&self) -> Result<Vec<Posting>> {
            Err(anyhow!("boom"))
        }
        fn name(&self) -> &'static str {
            "failing"
        }
    }

    #[tokio::test]
    async fn a_failing_source_never_aborts_the_run() {
        let p = Posting {
            apply_url: "https://x/1".into(),
            ..Default::default()
        };
        let sources: Vec<Box<dyn JobSource>> = vec![
            Box::new(FailingSource),
            Box::new(OkSource(vec![p.clone()])),
        ];
        let out = fetch_all(&sources).await;
        assert_eq!(out, vec![p]);
    }

    #[test]
    fn only_configured_sources_are_built() {
        let cfg = SourcesConfig {
            greenhouse_boards: vec!["acme".into()],
            ..Default::default()
        };
        let sources = build_sources(&cfg, &http_client());
        assert_eq!(sources.len(), 1);
        assert_eq!(sources[0].name(), "greenhouse");
    }
}
