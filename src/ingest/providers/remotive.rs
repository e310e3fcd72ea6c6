// src/ingest/providers/remotive.rs
//! Remotive public API: JSON envelope with a `jobs` array.

use anyhow::Result;
use async_trait::async_trait;
use serde::Deserialize;

use crate::ingest::types::{JobSource, Posting};
use crate::ingest::get_json;

#[derive(Debug, Deserialize)]
struct Envelope {
    #[serde(default)]
    jobs: Vec<Job>,
}

#[derive(Debug, Deserialize)]
struct Job {
    #[serde(default)]
    title: String,
    #[serde(default)]
    company_name: String,
    #[serde(default)]
    candidate_required_location: String,
    #[serde(default)]
    url: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    publication_date: String,
}

pub struct RemotiveSource {
    client: reqwest::Client,
    urls: Vec<String>,
}

impl RemotiveSource {
    pub fn new(client: reqwest::Client, urls: Vec<String>) -> Self {
        Self { client, urls }
    }

    fn postings_from_envelope(env: Envelope) -> Vec<Posting> {
        env.jobs
            .into_iter()
            .map(|j| Posting {
                title: j.title,
                company: j.company_name,
                location: j.candidate_required_location,
                apply_url: j.url,
                description: j.description,
                source: "remotive".to_string(),
                date_posted: j.publication_date,
            })
            .collect()
    }
}

#[async_trait]
impl JobSource for RemotiveSource {
    async fn fetch(&self) -> Result<Vec<Posting>> {
        let mut out = Vec::new();
        for url in &self.urls {
            let Some(env) = get_json::<Envelope>(&self.client, url).await else {
                continue;
            };
            out.extend(Self::postings_from_envelope(env));
        }
        Ok(out)
    }

    fn name(&self) -> &'static str {
        "remotive"
    }
}
