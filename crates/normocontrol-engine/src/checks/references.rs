//! Bracketed citations and the sources section.
//!
//! Entirely text-level heuristics. The chain stops at the first finding:
//! each later step only means something if the previous one passed.

use lazy_static::lazy_static;
use regex::Regex;
use shared_types::{Issue, Severity};

use crate::config::NormocontrolConfig;
use crate::policy::CheckPolicy;

const CATEGORY: &str = "references";

/// Paragraph lines inspected after the sources heading.
const SOURCES_WINDOW: usize = 80;

lazy_static! {
    /// "[8]" anywhere in running text.
    static ref CITATION_RE: Regex = Regex::new(r"\[(\d+)\]").unwrap();

    /// "1 Иванов И.И. ..." source entries, numbered without a dot.
    static ref NUMBERED_LINE_RE: Regex = Regex::new(r"^\d+\s+").unwrap();
}

pub fn check_references(
    doc_name: &str,
    texts: &[String],
    _config: &NormocontrolConfig,
    _policy: &CheckPolicy,
) -> Vec<Issue> {
    let text = texts.join("\n");

    // Numbers too large for u64 are still larger than any source list.
    let max_citation = CITATION_RE
        .captures_iter(&text)
        .map(|c| c[1].parse::<u64>().unwrap_or(u64::MAX))
        .max();

    let Some(max_citation) = max_citation else {
        return vec![issue(
            doc_name,
            Severity::Warning,
            "Не найдены ссылки вида [N] в тексте",
            "Ссылки в квадратных скобках (например: [8])",
            "не найдено",
        )];
    };

    let lines: Vec<&str> = texts
        .iter()
        .map(|t| t.trim())
        .filter(|t| !t.is_empty())
        .collect();

    let Some(sources_index) = lines
        .iter()
        .position(|line| line.to_lowercase() == "список использованных источников")
    else {
        return vec![issue(
            doc_name,
            Severity::Error,
            "Есть ссылки [N], но не найден раздел 'Список использованных источников'",
            "Раздел со списком источников",
            "не найден",
        )];
    };

    let window_end = (sources_index + 1 + SOURCES_WINDOW).min(lines.len());
    let numbered = lines[sources_index + 1..window_end]
        .iter()
        .filter(|line| NUMBERED_LINE_RE.is_match(line))
        .count();

    if numbered == 0 {
        return vec![issue(
            doc_name,
            Severity::Warning,
            "В разделе источников не найдены строки, начинающиеся с номера",
            "Нумерация арабскими цифрами без точки (например: 1 ...)",
            "не найдено",
        )];
    }

    if max_citation > numbered as u64 {
        return vec![Issue {
            document: doc_name.to_string(),
            category: CATEGORY.to_string(),
            severity: Severity::Warning,
            description: "Максимальный номер ссылки больше числа найденных источников".to_string(),
            expected: format!("Источников ≥ {max_citation}"),
            actual: format!("Найдено источников (эвристика): {numbered}"),
            location: String::new(),
        }];
    }

    Vec::new()
}

fn issue(
    doc_name: &str,
    severity: Severity,
    description: &str,
    expected: &str,
    actual: &str,
) -> Issue {
    Issue {
        document: doc_name.to_string(),
        category: CATEGORY.to_string(),
        severity,
        description: description.to_string(),
        expected: expected.to_string(),
        actual: actual.to_string(),
        location: String::new(),
    }
}
