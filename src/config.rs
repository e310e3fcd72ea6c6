// src/config.rs
//! Run configuration: keyword lists, numeric thresholds, policy flags, and
//! per-source settings, loaded from TOML.
//!
//! Every key has a default, so a missing key is never a fatal error: keyword
//! lists default to empty and numeric knobs to the documented values. Path
//! resolution follows RADAR_CONFIG_PATH, then `config/radar.toml`.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_PATH: &str = "config/radar.toml";
pub const ENV_CONFIG_PATH: &str = "RADAR_CONFIG_PATH";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Target titles, scanned in order; an exact substring hit wins outright.
    pub target_title_keywords: Vec<String>,
    /// Unwanted seniority/function levels ("intern", "analyst", ...).
    pub exclude_title_keywords: Vec<String>,
    /// Domain gate: title must contain one of these (unless it names a CFO).
    pub must_contain_any_of: Vec<String>,
    /// Nice-to-have description terms, each worth a small additive bonus.
    pub nice_keywords_desc: Vec<String>,
    /// Remote-work indicators searched across location, title, description.
    pub remote_keywords: Vec<String>,
    /// Region indicators searched in the location field.
    pub region_location_keywords: Vec<String>,

    /// Veto postings that are neither regional nor remote.
    pub require_remote_outside_region: bool,
    pub min_score_to_send: i32,
    pub max_items_per_run: usize,

    /// Where the seen set persists between runs.
    pub seen_file: PathBuf,

    pub scoring: ScoringConfig,
    pub company_universe: CompanyUniverseConfig,
    pub sources: SourcesConfig,
}

/// All scoring constants are configuration, not law; these defaults are the
/// canonical staircase the tests are written against.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Base score for a verbatim target-keyword hit in the title.
    pub exact_title_score: i32,
    /// Descending (min_similarity, score) staircase for fuzzy-only matches.
    /// Below the lowest threshold the posting is rejected outright.
    pub fuzzy_tiers: Vec<FuzzyTier>,
    pub desc_bonus_per_keyword: i32,
    pub desc_bonus_cap: i32,
    pub regional_bonus: i32,
    pub remote_bonus: i32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FuzzyTier {
    pub min_similarity: i32,
    pub score: i32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CompanyUniverseConfig {
    pub enabled: bool,
    pub global_top_n: usize,
    pub regional_top_n: usize,
    /// Page-template URLs with a `{page}` placeholder, tried in order.
    pub global_url_templates: Vec<String>,
    pub regional_url_templates: Vec<String>,
    /// Explicit watch list, always honored regardless of the ranked lists.
    pub extra_companies: Vec<String>,
    pub bonus_extra: i32,
    pub bonus_global: i32,
    pub bonus_regional: i32,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct SourcesConfig {
    pub remotive: Vec<String>,
    pub remoteok: Vec<String>,
    pub weworkremotely_rss: Vec<String>,
    pub greenhouse_boards: Vec<String>,
    pub lever_companies: Vec<String>,
    pub adzuna: AdzunaConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AdzunaConfig {
    pub queries: Vec<AdzunaQuery>,
    pub pages_per_query: u32,
    pub results_per_page: u32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AdzunaQuery {
    pub country: String,
    pub what: String,
    #[serde(rename = "where")]
    pub where_: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            target_title_keywords: Vec::new(),
            exclude_title_keywords: Vec::new(),
            must_contain_any_of: Vec::new(),
            nice_keywords_desc: Vec::new(),
            remote_keywords: Vec::new(),
            region_location_keywords: Vec::new(),
            require_remote_outside_region: true,
            min_score_to_send: 74,
            max_items_per_run: 20,
            seen_file: PathBuf::from("seen.json"),
            scoring: ScoringConfig::default(),
            company_universe: CompanyUniverseConfig::default(),
            sources: SourcesConfig::default(),
        }
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            exact_title_score: 78,
            fuzzy_tiers: vec![
                FuzzyTier { min_similarity: 92, score: 68 },
                FuzzyTier { min_similarity: 88, score: 58 },
                FuzzyTier { min_similarity: 84, score: 48 },
            ],
            desc_bonus_per_keyword: 3,
            desc_bonus_cap: 24,
            regional_bonus: 6,
            remote_bonus: 6,
        }
    }
}

impl Default for CompanyUniverseConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            global_top_n: 1000,
            regional_top_n: 100,
            global_url_templates: Vec::new(),
            regional_url_templates: Vec::new(),
            extra_companies: Vec::new(),
            bonus_extra: 14,
            bonus_global: 10,
            bonus_regional: 8,
        }
    }
}

impl Default for AdzunaConfig {
    fn default() -> Self {
        Self {
            queries: Vec::new(),
            pages_per_query: 1,
            results_per_page: 50,
        }
    }
}

impl Default for AdzunaQuery {
    fn default() -> Self {
        Self {
            country: "br".to_string(),
            what: String::new(),
            where_: String::new(),
        }
    }
}

impl Config {
    /// Load from an explicit TOML file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading config from {}", path.display()))?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(s: &str) -> Result<Self> {
        toml::from_str(s).context("parsing radar config TOML")
    }

    /// Resolve via $RADAR_CONFIG_PATH, then `config/radar.toml`; if neither
    /// exists the all-defaults config is returned.
    pub fn load_default() -> Result<Self> {
        if let Ok(p) = std::env::var(ENV_CONFIG_PATH) {
            return Self::from_path(&PathBuf::from(p));
        }
        let default = PathBuf::from(DEFAULT_CONFIG_PATH);
        if default.exists() {
            return Self::from_path(&default);
        }
        Ok(Self::default())
    }
}
