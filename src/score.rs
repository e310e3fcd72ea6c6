// src/score.rs
//! Multi-factor posting scorer. Pure and deterministic: `(posting, config,
//! universe)` in, integer score in [0, 100] out, no I/O.
//!
//! Vetoes run before any bonus so a bonus can never rescue an irrelevant
//! posting: excluded title → domain gate → remote-or-regional policy →
//! base-title-score floor. Only postings past all four gates collect
//! description, company, and locale bonuses.

use crate::classify::{is_excluded_title, is_regional, is_remote, matches_domain};
use crate::companies::CompanyUniverse;
use crate::config::{Config, ScoringConfig};
use crate::fuzzy::partial_similarity;
use crate::ingest::types::Posting;
use crate::text::{canonicalize_org_name, normalize, strip_markup};

/// Title contribution before bonuses.
///
/// A verbatim keyword hit takes the fixed tier-1 score no matter which
/// keyword matched. Otherwise the best fuzzy similarity across all keywords
/// is mapped through the descending staircase; below the lowest tier the
/// posting is rejected (0), which is a veto, not a floor.
pub fn title_match_score(title: &str, keywords: &[String], scoring: &ScoringConfig) -> i32 {
    let t = normalize(title);

    for k in keywords {
        let k = normalize(k);
        if !k.is_empty() && t.contains(&k) {
            return scoring.exact_title_score;
        }
    }

    let mut best = 0;
    for k in keywords {
        let k = normalize(k);
        if !k.is_empty() {
            best = best.max(partial_similarity(&k, &t));
        }
    }

    for tier in &scoring.fuzzy_tiers {
        if best >= tier.min_similarity {
            return tier.score;
        }
    }
    0
}

/// Reputation bonus from the company universe. The regional set only pays
/// out for regional postings; all three sets are independently additive.
pub fn company_bonus(company: &str, regional: bool, universe: &CompanyUniverse, cfg: &Config) -> i32 {
    let cu = &cfg.company_universe;
    if !cu.enabled {
        return 0;
    }

    let c = canonicalize_org_name(company);
    let mut bonus = 0;

    if universe.extra.contains(&c) {
        bonus += cu.bonus_extra;
    }
    if universe.global.contains(&c) {
        bonus += cu.bonus_global;
    }
    if regional && universe.regional.contains(&c) {
        bonus += cu.bonus_regional;
    }
    bonus
}

pub fn score_posting(posting: &Posting, cfg: &Config, universe: &CompanyUniverse) -> i32 {
    if is_excluded_title(&posting.title, &cfg.exclude_title_keywords) {
        return 0;
    }
    if !matches_domain(&posting.title, &cfg.must_contain_any_of) {
        return 0;
    }

    let regional = is_regional(&posting.location, &cfg.region_location_keywords);
    let remote = is_remote(posting, &cfg.remote_keywords);

    if cfg.require_remote_outside_region && !regional && !remote {
        return 0;
    }

    let mut score = title_match_score(&posting.title, &cfg.target_title_keywords, &cfg.scoring);
    if score == 0 {
        return 0;
    }

    let desc = normalize(&strip_markup(&posting.description));
    let mut kw_bonus = 0;
    for k in &cfg.nice_keywords_desc {
        let k = normalize(k);
        if !k.is_empty() && desc.contains(&k) {
            kw_bonus += cfg.scoring.desc_bonus_per_keyword;
        }
    }
    score += kw_bonus.min(cfg.scoring.desc_bonus_cap);

    score += company_bonus(&posting.company, regional, universe, cfg);

    if regional {
        score += cfg.scoring.regional_bonus;
    }
    if remote {
        score += cfg.scoring.remote_bonus;
    }

    score.clamp(0, 100)
}
