// src/ingest/providers/adzuna.rs
//! Adzuna search API. Credentials come from the environment
//! (ADZUNA_APP_ID / ADZUNA_APP_KEY); when they are missing the source simply
//! contributes nothing, matching the skip-and-continue fetch policy.

use anyhow::Result;
use async_trait::async_trait;
use serde::Deserialize;
use tracing::warn;

use crate::config::AdzunaConfig;
use crate::ingest::types::{JobSource, Posting};

pub const ENV_APP_ID: &str = "ADZUNA_APP_ID";
pub const ENV_APP_KEY: &str = "ADZUNA_APP_KEY";

#[derive(Debug, Deserialize)]
struct Envelope {
    #[serde(default)]
    results: Vec<Job>,
}

#[derive(Debug, Deserialize)]
struct Job {
    #[serde(default)]
    title: String,
    company: Option<Company>,
    location: Option<Location>,
    #[serde(default)]
    redirect_url: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    created: String,
}

#[derive(Debug, Deserialize)]
struct Company {
    #[serde(default)]
    display_name: String,
}

#[derive(Debug, Deserialize)]
struct Location {
    #[serde(default)]
    display_name: String,
}

pub struct AdzunaSource {
    client: reqwest::Client,
    cfg: AdzunaConfig,
}

impl AdzunaSource {
    pub fn new(client: reqwest::Client, cfg: AdzunaConfig) -> Self {
        Self { client, cfg }
    }

    fn postings_from_envelope(country: &str, env: Envelope) -> Vec<Posting> {
        env.results
            .into_iter()
            .map(|j| Posting {
                title: j.title,
                company: j.company.map(|c| c.display_name).unwrap_or_default(),
                location: j.location.map(|l| l.display_name).unwrap_or_default(),
                apply_url: j.redirect_url,
                description: j.description,
                source: format!("adzuna:{country}"),
                date_posted: j.created,
            })
            .collect()
    }
}

#[async_trait]
impl JobSource for AdzunaSource {
    async fn fetch(&self) -> Result<Vec<Posting>> {
        let (Ok(app_id), Ok(app_key)) = (std::env::var(ENV_APP_ID), std::env::var(ENV_APP_KEY))
        else {
            warn!("adzuna credentials not set, skipping source");
            return Ok(Vec::new());
        };

        let mut out = Vec::new();
        for q in &self.cfg.queries {
            let country = q.country.trim().to_lowercase();
            for page in 1..=self.cfg.pages_per_query {
                let url =
                    format!("https://api.adzuna.com/v1/api/jobs/{country}/search/{page}");
                let mut req = self.client.get(&url).query(&[
                    ("app_id", app_id.as_str()),
                    ("app_key", app_key.as_str()),
                    ("results_per_page", &self.cfg.results_per_page.to_string()),
                    ("what", q.what.as_str()),
                    ("content-type", "application/json"),
                ]);
                if !q.where_.is_empty() {
                    req = req.query(&[("where", q.where_.as_str())]);
                }

                let env: Envelope = match req.send().await {
                    Ok(resp) if resp.status().is_success() => match resp.json().await {
                        Ok(v) => v,
                        Err(e) => {
                            warn!(error = %e, url, "malformed adzuna payload");
                            continue;
                        }
                    },
                    Ok(resp) => {
                        warn!(status = %resp.status(), url, "adzuna returned non-success");
                        continue;
                    }
                    Err(e) => {
                        warn!(error = %e, url, "adzuna request failed");
                        continue;
                    }
                };
                out.extend(Self::postings_from_envelope(&country, env));
            }
        }
        Ok(out)
    }

    fn name(&self) -> &'static str {
        "adzuna"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_nested_company_and_location() {
        let env: Envelope = serde_json::from_str(
            r#"{"results":[{"title":"Finance Director",
                "company":{"display_name":"Acme"},
                "location":{"display_name":"São Paulo, Brazil"},
                "redirect_url":"https://adzuna.com/land/1",
                "description":"d","created":"2026-08-02T00:00:00Z"}]}"#,
        )
        .unwrap();
        let out = AdzunaSource::postings_from_envelope("br", env);
        assert_eq!(out[0].company, "Acme");
        assert_eq!(out[0].location, "São Paulo, Brazil");
        assert_eq!(out[0].source, "adzuna:br");
    }

    #[test]
    fn null_company_becomes_empty() {
        let env: Envelope = serde_json::from_str(
            r#"{"results":[{"title":"CFO","company":null,"redirect_url":"u"}]}"#,
        )
        .unwrap();
        let out = AdzunaSource::postings_from_envelope("br", env);
        assert_eq!(out[0].company, "");
    }
}
