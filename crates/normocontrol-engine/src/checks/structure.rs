//! Required sections and their order.

use shared_types::{Issue, Severity};

use crate::config::NormocontrolConfig;
use crate::policy::CheckPolicy;

const CATEGORY: &str = "structure";

/// Case-insensitive substring search over the joined document text. Order
/// is judged by first occurrence, and only once every section was found;
/// reporting half the list as misordered while the other half is missing
/// helps nobody.
pub fn check_structure(
    doc_name: &str,
    texts: &[String],
    config: &NormocontrolConfig,
    policy: &CheckPolicy,
) -> Vec<Issue> {
    if policy.skip_structure_for_attachments && doc_name.to_uppercase().contains("ПРИЛОЖЕНИЕ") {
        return Vec::new();
    }

    let text = texts.join("\n").to_lowercase();

    let mut positions: Vec<(&str, usize)> = Vec::new();
    let mut missing: Vec<&str> = Vec::new();

    for title in &config.required_sections_in_order {
        match text.find(&title.to_lowercase()) {
            Some(index) => positions.push((title, index)),
            None => missing.push(title),
        }
    }

    if !missing.is_empty() {
        return vec![Issue {
            document: doc_name.to_string(),
            category: CATEGORY.to_string(),
            severity: Severity::Error,
            description: "Не найдены обязательные разделы".to_string(),
            expected: config.required_sections_in_order.join(", "),
            actual: missing.join(", "),
            location: String::new(),
        }];
    }

    positions.sort_by_key(|(_, index)| *index);
    let found_order: Vec<&str> = positions.iter().map(|(title, _)| *title).collect();
    let required_order: Vec<&str> = config
        .required_sections_in_order
        .iter()
        .map(String::as_str)
        .collect();

    if found_order != required_order {
        return vec![Issue {
            document: doc_name.to_string(),
            category: CATEGORY.to_string(),
            severity: Severity::Warning,
            description: "Порядок разделов отличается от рекомендуемого".to_string(),
            expected: required_order.join(" → "),
            actual: found_order.join(" → "),
            location: String::new(),
        }];
    }

    Vec::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::testutil::it_config;
    use pretty_assertions::assert_eq;

    fn texts(lines: &[&str]) -> Vec<String> {
        lines.iter().map(|l| l.to_string()).collect()
    }

    fn full_document() -> Vec<String> {
        texts(&[
            "ЗАДАНИЕ на курсовую работу",
            "РЕФЕРАТ",
            "Оглавление",
            "Введение",
            "Основная часть",
            "Заключение",
            "Список использованных источников",
            "Приложения",
        ])
    }

    #[test]
    fn test_complete_structure_passes() {
        let issues = check_structure(
            "ПЗ.docx",
            &full_document(),
            &it_config(),
            &CheckPolicy::strict(),
        );
        assert_eq!(issues, vec![]);
    }

    #[test]
    fn test_missing_sections_reported_together() {
        let body = texts(&["Задание", "Реферат", "Введение", "Заключение"]);
        let issues = check_structure("ПЗ.docx", &body, &it_config(), &CheckPolicy::strict());

        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Error);
        assert_eq!(issues[0].description, "Не найдены обязательные разделы");
        assert_eq!(
            issues[0].actual,
            "Оглавление, Список использованных источников, Приложения"
        );
    }

    #[test]
    fn test_missing_sections_suppress_order_check() {
        // Misordered AND incomplete: only the missing-sections error fires
        let body = texts(&["Заключение", "Введение", "Задание", "Реферат", "Оглавление"]);
        let issues = check_structure("ПЗ.docx", &body, &it_config(), &CheckPolicy::strict());

        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].description, "Не найдены обязательные разделы");
    }

    #[test]
    fn test_wrong_order_is_a_warning() {
        let body = texts(&[
            "Реферат",
            "Задание",
            "Оглавление",
            "Введение",
            "Заключение",
            "Список использованных источников",
            "Приложения",
        ]);
        let issues = check_structure("ПЗ.docx", &body, &it_config(), &CheckPolicy::strict());

        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Warning);
        assert_eq!(
            issues[0].description,
            "Порядок разделов отличается от рекомендуемого"
        );
        assert!(issues[0].actual.starts_with("Реферат → Задание → Оглавление"));
    }

    #[test]
    fn test_attachment_documents_skipped_in_lenient_mode() {
        let body = texts(&["Только текст приложения"]);

        let lenient = check_structure(
            "ПРИЛОЖЕНИЕ_А.docx",
            &body,
            &it_config(),
            &CheckPolicy::lenient(),
        );
        assert_eq!(lenient, vec![]);

        let strict = check_structure(
            "ПРИЛОЖЕНИЕ_А.docx",
            &body,
            &it_config(),
            &CheckPolicy::strict(),
        );
        assert_eq!(strict.len(), 1);
    }

    #[test]
    fn test_attachment_name_match_is_case_insensitive() {
        let body = texts(&["Текст"]);
        let issues = check_structure(
            "приложение_б.docx",
            &body,
            &it_config(),
            &CheckPolicy::lenient(),
        );
        assert_eq!(issues, vec![]);
    }

    #[test]
    fn test_section_match_ignores_case() {
        let body = texts(&[
            "задание",
            "реферат",
            "оглавление",
            "введение",
            "заключение",
            "список использованных источников",
            "приложения",
        ]);
        let issues = check_structure("ПЗ.docx", &body, &it_config(), &CheckPolicy::strict());
        assert_eq!(issues, vec![]);
    }
}
