// src/ingest/types.rs
use anyhow::Result;

/// One job listing in the common shape every source adapter produces.
///
/// `apply_url` is the sole identity key: deduplication and the seen set both
/// key on it, and postings without one are dropped before scoring.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
pub struct Posting {
    pub title: String,
    pub company: String,  // may be empty
    pub location: String, // may be empty
    pub apply_url: String,
    pub description: String, // raw text, possibly HTML
    pub source: String,      // e.g. "remotive", "greenhouse:<board>"
    pub date_posted: String, // source-defined format, never parsed
}

/// A posting plus its score in [0, 100]. Assigned once by the scorer.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
pub struct ScoredPosting {
    pub posting: Posting,
    pub score: i32,
}

#[async_trait::async_trait]
pub trait JobSource: Send + Sync {
    /// Fetch the source's current postings, preserving the source's own order.
    /// Returning an empty list is a legitimate "unavailable this run".
    async fn fetch(&self) -> Result<Vec<Posting>>;
    fn name(&self) -> &'static str;
}
