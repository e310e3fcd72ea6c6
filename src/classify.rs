// src/classify.rs
//! Independent boolean predicates over a posting. Each one is a substring
//! heuristic over normalized text; `is_regional` in particular is pluggable
//! on purpose so a structured geo-match can replace it later.

use crate::ingest::types::Posting;
use crate::text::{normalize, strip_markup};

/// Sources that list remote work only; their postings pass `is_remote` by
/// construction, regardless of location or description wording.
const REMOTE_ONLY_SOURCES: [&str; 3] = ["remotive", "remoteok", "weworkremotely"];

/// True iff any exclude keyword is a substring of the normalized title.
/// The keywords carry unwanted seniority/function levels ("intern",
/// "analyst", ...) and come from config, never from code.
pub fn is_excluded_title(title: &str, exclude_keywords: &[String]) -> bool {
    let t = normalize(title);
    exclude_keywords.iter().any(|k| {
        let k = normalize(k);
        !k.is_empty() && t.contains(&k)
    })
}

/// Domain-relevance gate on the title.
///
/// "cfo" and its spelled-out form always pass. Otherwise the title must
/// contain at least one of the configured terms; an empty list admits
/// everything.
pub fn matches_domain(title: &str, must_contain_any_of: &[String]) -> bool {
    let t = normalize(title);
    if t.contains("cfo") || t.contains("chief financial officer") {
        return true;
    }
    if must_contain_any_of.is_empty() {
        return true;
    }
    must_contain_any_of.iter().any(|k| {
        let k = normalize(k);
        !k.is_empty() && t.contains(&k)
    })
}

/// True iff any region keyword is a substring of the normalized location.
pub fn is_regional(location: &str, region_keywords: &[String]) -> bool {
    let loc = normalize(location);
    region_keywords.iter().any(|k| {
        let k = normalize(k);
        !k.is_empty() && loc.contains(&k)
    })
}

/// True if the posting's source is remote-only by construction, or any
/// remote keyword appears in its location, title, or markup-stripped
/// description.
pub fn is_remote(posting: &Posting, remote_keywords: &[String]) -> bool {
    let src = posting.source.to_lowercase();
    if REMOTE_ONLY_SOURCES.contains(&src.as_str()) {
        return true;
    }

    let text = format!(
        "{} {} {}",
        normalize(&posting.location),
        normalize(&posting.title),
        normalize(&strip_markup(&posting.description)),
    );
    remote_keywords.iter().any(|k| {
        let k = normalize(k);
        !k.is_empty() && text.contains(&k)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kw(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn excluded_title_matches_substring_case_insensitively() {
        let excl = kw(&["intern", "coordinator"]);
        assert!(is_excluded_title("Finance INTERN", &excl));
        assert!(is_excluded_title("Billing Coordinator, LATAM", &excl));
        assert!(!is_excluded_title("Finance Director", &excl));
    }

    #[test]
    fn cfo_always_matches_domain() {
        assert!(matches_domain("Regional CFO", &kw(&["controller"])));
        assert!(matches_domain("Chief Financial Officer", &[]));
    }

    #[test]
    fn empty_must_list_admits_everything() {
        assert!(matches_domain("Head of Growth", &[]));
        assert!(!matches_domain("Head of Growth", &kw(&["finance"])));
    }

    #[test]
    fn regional_is_a_location_substring_check() {
        let region = kw(&["brazil", "brasil", "são paulo"]);
        assert!(is_regional("São Paulo, Brazil", &region));
        assert!(!is_regional("Chicago, IL", &region));
    }

    #[test]
    fn remote_only_sources_pass_unconditionally() {
        let p = Posting {
            title: "Finance Director".into(),
            location: "Anywhere".into(),
            source: "remotive".into(),
            ..Default::default()
        };
        assert!(is_remote(&p, &[]));
    }

    #[test]
    fn remote_keyword_is_searched_across_location_title_and_description() {
        let remote = kw(&["remote"]);
        let p = Posting {
            title: "Finance Director".into(),
            location: "Chicago, IL".into(),
            description: "<p>Fully <b>remote</b> team</p>".into(),
            source: "greenhouse:acme".into(),
            ..Default::default()
        };
        assert!(is_remote(&p, &remote));

        let q = Posting {
            title: "Finance Director".into(),
            location: "Chicago, IL".into(),
            description: "On-site only".into(),
            source: "greenhouse:acme".into(),
            ..Default::default()
        };
        assert!(!is_remote(&q, &remote));
    }
}
