// src/text.rs
//! Text normalization primitives shared by the classifier and scorer.

use once_cell::sync::OnceCell;
use regex::Regex;

/// Trim + lowercase. Total function; empty input yields an empty string.
pub fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}

/// Strip tag-like markup and collapse whitespace.
/// Descriptions arrive as raw HTML from several boards, so this runs before
/// any keyword scan over description text.
pub fn strip_markup(s: &str) -> String {
    // 1) HTML entity decode
    let decoded = html_escape::decode_html_entities(s);

    // 2) Strip anything shaped like a tag
    static RE_TAGS: OnceCell<Regex> = OnceCell::new();
    let re_tags = RE_TAGS.get_or_init(|| Regex::new(r"(?is)</?[^>]+>").unwrap());
    let out = re_tags.replace_all(&decoded, " ");

    // 3) Collapse whitespace
    static RE_WS: OnceCell<Regex> = OnceCell::new();
    let re_ws = RE_WS.get_or_init(|| Regex::new(r"\s+").unwrap());
    re_ws.replace_all(&out, " ").trim().to_string()
}

/// Reduce an organization name to a comparison-stable canonical form:
/// lowercase, `&` spelled out, punctuation stripped, legal-entity suffixes
/// removed as whole words, whitespace collapsed.
///
/// Two names denote the same entity iff their canonical forms are identical.
/// The suffix vocabulary is deliberately conservative: variants it does not
/// cover stay distinct rather than risking a false merge.
pub fn canonicalize_org_name(s: &str) -> String {
    let lowered = s.to_lowercase().replace('&', " and ");

    static RE_PUNCT: OnceCell<Regex> = OnceCell::new();
    let re_punct = RE_PUNCT.get_or_init(|| Regex::new(r"[^\w\s]").unwrap());
    let depunct = re_punct.replace_all(&lowered, " ");

    static RE_SUFFIX: OnceCell<Regex> = OnceCell::new();
    let re_suffix = RE_SUFFIX.get_or_init(|| {
        Regex::new(
            r"\b(inc|ltd|llc|plc|gmbh|ag|sa|nv|bv|spa|pte|co|company|corp|corporation|holdings|holding)\b",
        )
        .unwrap()
    });
    let stripped = re_suffix.replace_all(&depunct, " ");

    static RE_WS: OnceCell<Regex> = OnceCell::new();
    let re_ws = RE_WS.get_or_init(|| Regex::new(r"\s+").unwrap());
    re_ws.replace_all(&stripped, " ").trim().to_string()
}
