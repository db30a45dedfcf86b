//! Figure caption and table title format.

use lazy_static::lazy_static;
use regex::Regex;
use shared_types::{Issue, Severity};

use crate::config::NormocontrolConfig;
use crate::policy::CheckPolicy;

lazy_static! {
    /// "Рисунок 1 — Название" or "Рисунок 2.1 — Название"; em dash,
    /// en dash and hyphen all occur in the wild.
    static ref FIGURE_CAPTION_RE: Regex =
        Regex::new(r"(?i)^рисунок\s+\d+(?:\.\d+)?\s*[—–-]\s+.+$").unwrap();

    /// "Таблица 1 — Название", same dash variants.
    static ref TABLE_CAPTION_RE: Regex =
        Regex::new(r"(?i)^таблица\s+\d+(?:\.\d+)?\s*[—–-]\s+.+$").unwrap();
}

pub fn check_captions(
    doc_name: &str,
    texts: &[String],
    _config: &NormocontrolConfig,
    _policy: &CheckPolicy,
) -> Vec<Issue> {
    let mut bad_figures = 0usize;
    let mut bad_tables = 0usize;

    for text in texts {
        let line = text.trim();
        if line.is_empty() {
            continue;
        }
        let lower = line.to_lowercase();

        if lower.starts_with("рисунок")
            && (!FIGURE_CAPTION_RE.is_match(line) || line.ends_with('.'))
        {
            bad_figures += 1;
        }

        if lower.starts_with("таблица")
            && (!TABLE_CAPTION_RE.is_match(line) || line.ends_with('.'))
        {
            bad_tables += 1;
        }
    }

    let mut issues = Vec::new();

    if bad_figures > 0 {
        issues.push(Issue {
            document: doc_name.to_string(),
            category: "figures".to_string(),
            severity: Severity::Warning,
            description: "Найдены подписи рисунков с нарушением формата".to_string(),
            expected: "Рисунок N – Название (без точки в конце)".to_string(),
            actual: format!("проблемных подписей: {bad_figures}"),
            location: String::new(),
        });
    }

    if bad_tables > 0 {
        issues.push(Issue {
            document: doc_name.to_string(),
            category: "tables".to_string(),
            severity: Severity::Warning,
            description: "Найдены названия таблиц с нарушением формата".to_string(),
            expected: "Таблица N – Название (без точки в конце)".to_string(),
            actual: format!("проблемных названий: {bad_tables}"),
            location: String::new(),
        });
    }

    issues
}
