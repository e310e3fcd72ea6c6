// src/companies.rs
//! Company universe: ranked sets of canonical organization names that feed
//! the scorer's reputation bonuses. Rebuilt in full every run from ranked
//! CSV endpoints; never persisted.

use std::collections::HashSet;

use tracing::warn;

use crate::config::CompanyUniverseConfig;
use crate::ingest::get_text;
use crate::text::canonicalize_org_name;

/// Three independently additive bonus sets. An all-empty universe (feature
/// disabled, or every list endpoint down) is valid and simply contributes
/// no bonus.
#[derive(Debug, Clone, Default)]
pub struct CompanyUniverse {
    pub global: HashSet<String>,
    pub regional: HashSet<String>,
    pub extra: HashSet<String>,
}

impl CompanyUniverse {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.global.is_empty() && self.regional.is_empty() && self.extra.is_empty()
    }

    fn from_names(
        global_names: Vec<String>,
        regional_names: Vec<String>,
        extra_names: &[String],
    ) -> Self {
        Self {
            global: canonical_set(global_names.iter()),
            regional: canonical_set(regional_names.iter()),
            extra: canonical_set(extra_names.iter()),
        }
    }
}

fn canonical_set<'a>(names: impl Iterator<Item = &'a String>) -> HashSet<String> {
    names
        .map(|n| canonicalize_org_name(n))
        .filter(|n| !n.is_empty())
        .collect()
}

/// Parse a CompaniesMarketCap-shaped CSV export: a header row containing a
/// `Name` column, one company per row. Anything else yields an empty list.
pub fn parse_ranked_csv(csv_text: &str) -> Vec<String> {
    let csv_text = csv_text.trim();
    if csv_text.is_empty() {
        return Vec::new();
    }
    // Cheap shape check before handing the payload to the CSV reader.
    match csv_text.lines().next() {
        Some(header) if header.contains("Name") => {}
        _ => return Vec::new(),
    }

    let mut reader = csv::Reader::from_reader(csv_text.as_bytes());
    let name_idx = match reader
        .headers()
        .ok()
        .and_then(|h| h.iter().position(|c| c.trim() == "Name"))
    {
        Some(idx) => idx,
        None => return Vec::new(),
    };

    let mut out = Vec::new();
    for record in reader.records().flatten() {
        if let Some(name) = record.get(name_idx) {
            let name = name.trim();
            if !name.is_empty() {
                out.push(name.to_string());
            }
        }
    }
    out
}

/// Expand `{page}` templates and collect names across pages. A failing page
/// or template is skipped; the run never aborts over a ranked-list outage.
async fn fetch_from_templates(
    client: &reqwest::Client,
    templates: &[String],
    pages: usize,
) -> Vec<String> {
    let mut names = Vec::new();
    for page in 1..=pages {
        let mut page_ok = false;
        for tpl in templates {
            let url = tpl.replace("{page}", &page.to_string());
            let Some(txt) = get_text(client, &url).await else {
                continue;
            };
            let parsed = parse_ranked_csv(&txt);
            if !parsed.is_empty() {
                names.extend(parsed);
                page_ok = true;
                break;
            }
        }
        if !page_ok {
            warn!(page, "company list page unavailable, continuing");
        }
    }
    names
}

/// Build the universe for this run. Each ranked CSV page carries ~100 rows,
/// so the global list needs ceil(top_n / 100) pages; regional lists fit one.
pub async fn load_company_universe(
    client: &reqwest::Client,
    cfg: &CompanyUniverseConfig,
) -> CompanyUniverse {
    if !cfg.enabled {
        return CompanyUniverse::empty();
    }

    let global_pages = cfg.global_top_n.div_ceil(100).max(1);
    let mut global_names =
        fetch_from_templates(client, &cfg.global_url_templates, global_pages).await;
    global_names.truncate(cfg.global_top_n);

    let mut regional_names = fetch_from_templates(client, &cfg.regional_url_templates, 1).await;
    regional_names.truncate(cfg.regional_top_n);

    CompanyUniverse::from_names(global_names, regional_names, &cfg.extra_companies)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_name_column_from_ranked_csv() {
        let csv = "Rank,Name,Market Cap\n1,Apple Inc.,3T\n2,Microsoft Corporation,3T\n3,,x\n";
        assert_eq!(parse_ranked_csv(csv), vec!["Apple Inc.", "Microsoft Corporation"]);
    }

    #[test]
    fn rejects_payloads_that_are_not_the_expected_csv() {
        assert!(parse_ranked_csv("").is_empty());
        assert!(parse_ranked_csv("<!doctype html><html>busy</html>").is_empty());
        assert!(parse_ranked_csv("rank,company\n1,Apple").is_empty());
    }

    #[test]
    fn universe_sets_hold_canonical_names() {
        let u = CompanyUniverse::from_names(
            vec!["Apple Inc.".into(), "Procter & Gamble Co.".into()],
            vec!["Petrobras S.A.".into()],
            &["Nubank".to_string()],
        );
        assert!(u.global.contains("apple"));
        assert!(u.global.contains("procter and gamble"));
        assert!(u.regional.contains("petrobras s a") || u.regional.contains("petrobras"));
        assert!(u.extra.contains("nubank"));
    }

    #[test]
    fn empty_universe_is_valid() {
        let u = CompanyUniverse::empty();
        assert!(u.is_empty());
    }
}
