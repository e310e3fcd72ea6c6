// src/seen.rs
//! Persisted seen set: the apply URLs of every posting already delivered.
//! Stored as a sorted JSON array. The set only ever grows; unbounded growth
//! is an accepted trade-off.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct SeenStore {
    path: PathBuf,
}

impl SeenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the set; an absent or unreadable store is an empty set, never an
    /// error. A corrupt store is logged and discarded the same way.
    pub fn load(&self) -> HashSet<String> {
        let Ok(content) = std::fs::read_to_string(&self.path) else {
            return HashSet::new();
        };
        match serde_json::from_str::<Vec<String>>(&content) {
            Ok(urls) => urls.into_iter().collect(),
            Err(e) => {
                tracing::warn!(error = %e, path = %self.path.display(), "seen store unreadable, starting empty");
                HashSet::new()
            }
        }
    }

    /// Persist the full set as a sorted list. Idempotent: saving the same
    /// set twice produces identical bytes.
    pub fn save(&self, seen: &HashSet<String>) -> Result<()> {
        let mut urls: Vec<&String> = seen.iter().collect();
        urls.sort();
        let body = serde_json::to_string_pretty(&urls).context("serializing seen set")?;
        std::fs::write(&self.path, body)
            .with_context(|| format!("writing seen store to {}", self.path.display()))
    }
}
