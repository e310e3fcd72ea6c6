// src/ingest/providers/wwr.rs
//! WeWorkRemotely RSS feed, deserialized with quick-xml. The feed carries no
//! company or location fields; remote-ness is implied by the source itself.

use anyhow::{Context, Result};
use async_trait::async_trait;
use quick_xml::de::from_str;
use serde::Deserialize;

use crate::ingest::get_text;
use crate::ingest::types::{JobSource, Posting};

#[derive(Debug, Deserialize)]
struct Rss {
    channel: Channel,
}

#[derive(Debug, Deserialize)]
struct Channel {
    #[serde(rename = "item", default)]
    item: Vec<Item>,
}

#[derive(Debug, Deserialize)]
struct Item {
    title: Option<String>,
    link: Option<String>,
    #[serde(rename = "pubDate")]
    pub_date: Option<String>,
    description: Option<String>,
}

pub struct WwrRssSource {
    client: reqwest::Client,
    urls: Vec<String>,
}

impl WwrRssSource {
    pub fn new(client: reqwest::Client, urls: Vec<String>) -> Self {
        Self { client, urls }
    }

    fn parse_feed(xml: &str) -> Result<Vec<Posting>> {
        let xml_clean = scrub_html_entities_for_xml(xml);
        let rss: Rss = from_str(&xml_clean).context("parsing weworkremotely rss xml")?;

        let out = rss
            .channel
            .item
            .into_iter()
            .map(|it| Posting {
                title: it.title.unwrap_or_default(),
                company: String::new(),
                location: String::new(),
                apply_url: it.link.unwrap_or_default(),
                description: it.description.unwrap_or_default(),
                source: "weworkremotely".to_string(),
                date_posted: it.pub_date.unwrap_or_default(),
            })
            .collect();
        Ok(out)
    }
}

#[async_trait]
impl JobSource for WwrRssSource {
    async fn fetch(&self) -> Result<Vec<Posting>> {
        let mut out = Vec::new();
        for url in &self.urls {
            let Some(body) = get_text(&self.client, url).await else {
                continue;
            };
            match Self::parse_feed(&body) {
                Ok(mut v) => out.append(&mut v),
                Err(e) => tracing::warn!(error = ?e, url, "bad rss payload, skipping feed"),
            }
        }
        Ok(out)
    }

    fn name(&self) -> &'static str {
        "weworkremotely"
    }
}

// Feeds sprinkle HTML entities into otherwise-valid XML; replace the common
// ones before the XML parser sees them.
fn scrub_html_entities_for_xml(s: &str) -> String {
    s.replace("&nbsp;", " ")
        .replace("&ndash;", "-")
        .replace("&mdash;", "-")
        .replace("&ldquo;", "\"")
        .replace("&rdquo;", "\"")
        .replace("&lsquo;", "'")
        .replace("&rsquo;", "'")
}
