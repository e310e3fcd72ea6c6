// src/notify/mod.rs
pub mod telegram;

use anyhow::Result;

use crate::ingest::types::ScoredPosting;

/// Delivery sink for one pre-formatted text block per run. Delivery failure
/// is fatal to the run; the seen set is persisted only afterwards.
#[async_trait::async_trait]
pub trait Notifier: Send + Sync {
    async fn send(&self, text: &str) -> Result<()>;
    fn name(&self) -> &'static str;
}

/// Render the run's message: a date-stamped header, then one block per
/// posting with score, title, company, location, source tag, and URL.
pub fn format_message(date: &str, new_jobs: &[ScoredPosting]) -> String {
    if new_jobs.is_empty() {
        return format!("🛰️ Job Radar ({date}): nothing new above the filter today.");
    }

    let mut lines = vec![format!(
        "🛰️ Job Radar ({date}) — {} new posting(s):\n",
        new_jobs.len()
    )];
    for sp in new_jobs {
        let p = &sp.posting;
        let mut header = format!("• [{}] {}", sp.score, p.title.trim());
        if !p.company.trim().is_empty() {
            header.push_str(&format!(" — {}", p.company.trim()));
        }
        if !p.location.trim().is_empty() {
            header.push_str(&format!(" ({})", p.location.trim()));
        }
        if !p.source.trim().is_empty() {
            header.push_str(&format!(" [{}]", p.source.trim()));
        }
        lines.push(header);
        lines.push(p.apply_url.trim().to_string());
        lines.push(String::new());
    }

    lines.join("\n").trim().to_string()
}
