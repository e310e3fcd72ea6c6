// src/ingest/providers/lever.rs
//! Lever postings API, one call per configured company slug.

use anyhow::Result;
use async_trait::async_trait;
use serde::Deserialize;

use crate::ingest::get_json;
use crate::ingest::types::{JobSource, Posting};

#[derive(Debug, Deserialize)]
struct Job {
    #[serde(default)]
    text: String,
    #[serde(default)]
    categories: Categories,
    #[serde(rename = "hostedUrl")]
    hosted_url: Option<String>,
    #[serde(rename = "applyUrl")]
    apply_url: Option<String>,
    #[serde(default)]
    description: String,
    #[serde(rename = "createdAt")]
    created_at: Option<i64>,
}

#[derive(Debug, Deserialize, Default)]
struct Categories {
    #[serde(default)]
    location: String,
}

pub struct LeverSource {
    client: reqwest::Client,
    companies: Vec<String>,
}

impl LeverSource {
    pub fn new(client: reqwest::Client, companies: Vec<String>) -> Self {
        Self { client, companies }
    }

    fn postings_from_jobs(company: &str, jobs: Vec<Job>) -> Vec<Posting> {
        jobs.into_iter()
            .map(|j| Posting {
                title: j.text,
                company: company.to_string(),
                location: j.categories.location,
                // hostedUrl is the canonical listing page; applyUrl backstops it
                apply_url: j.hosted_url.or(j.apply_url).unwrap_or_default(),
                description: j.description,
                source: format!("lever:{company}"),
                date_posted: j.created_at.map(|t| t.to_string()).unwrap_or_default(),
            })
            .collect()
    }
}

#[async_trait]
impl JobSource for LeverSource {
    async fn fetch(&self) -> Result<Vec<Posting>> {
        let mut out = Vec::new();
        for company in &self.companies {
            let company = company.trim();
            if company.is_empty() {
                continue;
            }
            let url = format!("https://api.lever.co/v0/postings/{company}?mode=json");
            let Some(jobs) = get_json::<Vec<Job>>(&self.client, &url).await else {
                continue;
            };
            out.extend(Self::postings_from_jobs(company, jobs));
        }
        Ok(out)
    }

    fn name(&self) -> &'static str {
        "lever"
    }
}
