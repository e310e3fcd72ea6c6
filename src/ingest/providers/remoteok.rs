// src/ingest/providers/remoteok.rs
//! RemoteOK API: a heterogeneous JSON array whose first element is a legal
//! notice. Entries without an `id` are skipped, which filters the notice.

use anyhow::Result;
use async_trait::async_trait;

use crate::ingest::get_json;
use crate::ingest::types::{JobSource, Posting};

pub struct RemoteOkSource {
    client: reqwest::Client,
    urls: Vec<String>,
}

impl RemoteOkSource {
    pub fn new(client: reqwest::Client, urls: Vec<String>) -> Self {
        Self { client, urls }
    }

    fn postings_from_array(items: Vec<serde_json::Value>) -> Vec<Posting> {
        items
            .into_iter()
            .filter(|v| v.is_object() && !v["id"].is_null())
            .map(|v| Posting {
                title: str_field(&v, "position"),
                company: str_field(&v, "company"),
                location: str_field(&v, "location"),
                apply_url: str_field(&v, "url"),
                description: str_field(&v, "description"),
                source: "remoteok".to_string(),
                date_posted: str_field(&v, "date"),
            })
            .collect()
    }
}

fn str_field(v: &serde_json::Value, key: &str) -> String {
    v[key].as_str().unwrap_or_default().to_string()
}

#[async_trait]
impl JobSource for RemoteOkSource {
    async fn fetch(&self) -> Result<Vec<Posting>> {
        let mut out = Vec::new();
        for url in &self.urls {
            let Some(items) = get_json::<Vec<serde_json::Value>>(&self.client, url).await else {
                continue;
            };
            out.extend(Self::postings_from_array(items));
        }
        Ok(out)
    }

    fn name(&self) -> &'static str {
        "remoteok"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legal_notice_entry_without_id_is_skipped() {
        let items: Vec<serde_json::Value> = serde_json::from_str(
            r#"[{"legal":"API terms apply"},
                {"id":"123","position":"Finance Director","company":"Acme",
                 "location":"Worldwide","url":"https://remoteok.com/l/123",
                 "description":"d","date":"2026-08-02"}]"#,
        )
        .unwrap();
        let out = RemoteOkSource::postings_from_array(items);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].title, "Finance Director");
        assert_eq!(out[0].source, "remoteok");
    }

    #[test]
    fn numeric_ids_also_count() {
        let items: Vec<serde_json::Value> =
            serde_json::from_str(r#"[{"id":42,"position":"CFO","url":"https://r/42"}]"#).unwrap();
        let out = RemoteOkSource::postings_from_array(items);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].apply_url, "https://r/42");
    }
}
