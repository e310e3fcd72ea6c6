// src/ingest/providers/greenhouse.rs
//! Greenhouse boards API, one call per configured board token. The board
//! token doubles as the company name since the API does not repeat it.

use anyhow::Result;
use async_trait::async_trait;
use serde::Deserialize;

use crate::ingest::get_json;
use crate::ingest::types::{JobSource, Posting};

#[derive(Debug, Deserialize)]
struct Envelope {
    #[serde(default)]
    jobs: Vec<Job>,
}

#[derive(Debug, Deserialize)]
struct Job {
    #[serde(default)]
    title: String,
    location: Option<Location>,
    #[serde(default)]
    absolute_url: String,
    #[serde(default)]
    content: String,
    updated_at: Option<String>,
    created_at: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Location {
    #[serde(default)]
    name: String,
}

pub struct GreenhouseSource {
    client: reqwest::Client,
    boards: Vec<String>,
}

impl GreenhouseSource {
    pub fn new(client: reqwest::Client, boards: Vec<String>) -> Self {
        Self { client, boards }
    }

    fn postings_from_envelope(board: &str, env: Envelope) -> Vec<Posting> {
        env.jobs
            .into_iter()
            .map(|j| Posting {
                title: j.title,
                company: board.to_string(),
                location: j.location.map(|l| l.name).unwrap_or_default(),
                apply_url: j.absolute_url,
                description: j.content,
                source: format!("greenhouse:{board}"),
                date_posted: j.updated_at.or(j.created_at).unwrap_or_default(),
            })
            .collect()
    }
}

#[async_trait]
impl JobSource for GreenhouseSource {
    async fn fetch(&self) -> Result<Vec<Posting>> {
        let mut out = Vec::new();
        for board in &self.boards {
            let board = board.trim();
            if board.is_empty() {
                continue;
            }
            let url =
                format!("https://boards-api.greenhouse.io/v1/boards/{board}/jobs?content=true");
            let Some(env) = get_json::<Envelope>(&self.client, &url).await else {
                continue;
            };
            out.extend(Self::postings_from_envelope(board, env));
        }
        Ok(out)
    }

    fn name(&self) -> &'static str {
        "greenhouse"
    }
}
