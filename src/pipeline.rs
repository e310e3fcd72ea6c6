// src/pipeline.rs
//! Pure pipeline stages between fetch and delivery: deduplication, scoring
//! over a batch, and ranked selection of previously-unseen postings.

use std::collections::HashSet;

use crate::companies::CompanyUniverse;
use crate::config::Config;
use crate::ingest::types::{Posting, ScoredPosting};
use crate::score::score_posting;

/// Collapse postings sharing an apply URL, keeping the first occurrence in
/// input order (fetch order is the tie-break; no quality comparison).
/// Postings without an apply URL are unusable and dropped here.
pub fn dedupe(postings: Vec<Posting>) -> Vec<Posting> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut out = Vec::with_capacity(postings.len());
    for p in postings {
        let url = p.apply_url.trim();
        if url.is_empty() {
            continue;
        }
        if seen.insert(url.to_string()) {
            out.push(p);
        }
    }
    out
}

/// Score every posting and keep the ones that pass the scorer's gates.
pub fn score_all(
    postings: Vec<Posting>,
    cfg: &Config,
    universe: &CompanyUniverse,
) -> Vec<ScoredPosting> {
    postings
        .into_iter()
        .filter_map(|p| {
            let score = score_posting(&p, cfg, universe);
            (score > 0).then_some(ScoredPosting { posting: p, score })
        })
        .collect()
}

/// Rank by score descending (stable, so ties keep input order), then drop
/// already-seen and sub-threshold postings, then truncate. Seen filtering
/// happens before truncation so stale high scorers can't crowd out fresh
/// ones.
pub fn select_new(
    mut scored: Vec<ScoredPosting>,
    seen: &HashSet<String>,
    min_score: i32,
    max_items: usize,
) -> Vec<ScoredPosting> {
    scored.sort_by(|a, b| b.score.cmp(&a.score));

    let mut out = Vec::new();
    for sp in scored {
        if out.len() >= max_items {
            break;
        }
        let url = sp.posting.apply_url.trim();
        if url.is_empty() || seen.contains(url) {
            continue;
        }
        if sp.score < min_score {
            continue;
        }
        out.push(sp);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn posting(url: &str, title: &str) -> Posting {
        Posting {
            title: title.into(),
            apply_url: url.into(),
            ..Default::default()
        }
    }

    fn scored(url: &str, score: i32) -> ScoredPosting {
        ScoredPosting {
            posting: posting(url, "x"),
            score,
        }
    }

    #[test]
    fn dedupe_keeps_first_occurrence_and_drops_empty_urls() {
        let input = vec![
            posting("https://x/1", "first"),
            posting("", "no url"),
            posting("https://x/2", "second"),
            posting("https://x/1", "duplicate"),
        ];
        let out = dedupe(input);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].title, "first");
        assert_eq!(out[1].title, "second");
    }

    #[test]
    fn dedupe_is_idempotent() {
        let input = vec![
            posting("https://x/1", "a"),
            posting("https://x/1", "b"),
            posting("https://x/2", "c"),
        ];
        let once = dedupe(input);
        let twice = dedupe(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn selection_sorts_desc_and_keeps_tie_order() {
        let seen = HashSet::new();
        let out = select_new(
            vec![scored("u1", 80), scored("u2", 90), scored("u3", 80)],
            &seen,
            0,
            10,
        );
        let urls: Vec<_> = out.iter().map(|s| s.posting.apply_url.as_str()).collect();
        assert_eq!(urls, vec!["u2", "u1", "u3"]);
    }

    #[test]
    fn seen_filter_applies_before_truncation() {
        let seen: HashSet<String> = ["u1".to_string()].into_iter().collect();
        // u1 is the top scorer but already seen; with max_items=1 the fresh
        // u2 must still make the cut.
        let out = select_new(vec![scored("u1", 95), scored("u2", 80)], &seen, 0, 1);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].posting.apply_url, "u2");
    }

    #[test]
    fn threshold_and_cap_apply() {
        let seen = HashSet::new();
        let out = select_new(
            vec![scored("u1", 90), scored("u2", 80), scored("u3", 70), scored("u4", 50)],
            &seen,
            60,
            2,
        );
        let urls: Vec<_> = out.iter().map(|s| s.posting.apply_url.as_str()).collect();
        assert_eq!(urls, vec!["u1", "u2"]);
    }
}
