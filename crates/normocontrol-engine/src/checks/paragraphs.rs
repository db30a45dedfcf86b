//! First-line indents and explicit line spacing.
//!
//! Both checks aggregate: one issue per dimension however many paragraphs
//! violate it, since a wrong style cascades over whole documents.

use roxmltree::{Document, Node};
use shared_ooxml::document::{paragraph_properties, paragraph_text, paragraphs};
use shared_ooxml::units::{cm_to_twips, twips_to_cm};
use shared_types::{Issue, Severity};

use crate::checks::text_preview;
use crate::config::NormocontrolConfig;
use crate::policy::CheckPolicy;

const CATEGORY: &str = "paragraphs";

/// Violation examples collected per issue.
const MAX_EXAMPLES: usize = 10;
/// Example values rendered in the issue text.
const SHOWN_EXAMPLES: usize = 5;
/// Locations rendered before the "и ещё N" suffix.
const SHOWN_LOCATIONS: usize = 3;
const PREVIEW_CHARS: usize = 40;

pub fn check_paragraph_formatting(
    doc_name: &str,
    doc: &Document,
    config: &NormocontrolConfig,
    policy: &CheckPolicy,
) -> Vec<Issue> {
    let nodes = paragraphs(doc);
    let mut issues = Vec::new();

    issues.extend(check_first_line_indents(doc_name, &nodes, config, policy));
    issues.extend(check_line_spacing(doc_name, &nodes, config, policy));

    issues
}

/// Only paragraphs with an explicit `w:ind w:firstLine` participate; an
/// explicit zero counts as set and gets flagged.
fn check_first_line_indents(
    doc_name: &str,
    nodes: &[Node],
    config: &NormocontrolConfig,
    policy: &CheckPolicy,
) -> Vec<Issue> {
    let tolerance = cm_to_twips(policy.indent_tolerance_cm);
    let mut accepted = vec![cm_to_twips(config.first_line_indent_cm)];
    accepted.extend(policy.extra_indents_cm.iter().map(|cm| cm_to_twips(*cm)));

    let mut total = 0usize;
    let mut examples: Vec<String> = Vec::new();
    let mut locations: Vec<String> = Vec::new();

    for (idx, paragraph) in nodes.iter().enumerate() {
        let Some(first_line) = paragraph_properties(*paragraph)
            .indent
            .and_then(|ind| ind.first_line)
        else {
            continue;
        };

        let acceptable = accepted
            .iter()
            .any(|expected| (first_line - expected).abs() <= tolerance);
        if acceptable {
            continue;
        }

        total += 1;
        if examples.len() < MAX_EXAMPLES {
            examples.push(format!("{:.2} см", twips_to_cm(first_line)));
            locations.push(format!(
                "Параграф {}: '{}'",
                idx + 1,
                text_preview(&paragraph_text(*paragraph), PREVIEW_CHARS)
            ));
        }
    }

    if total == 0 {
        return Vec::new();
    }

    let mut expected = format!("{:.2} см", config.first_line_indent_cm);
    for extra in &policy.extra_indents_cm {
        expected.push_str(&format!(" или {extra:.2} см"));
    }

    let location = if policy.detailed_locations {
        let mut joined = locations[..locations.len().min(SHOWN_LOCATIONS)].join("; ");
        if locations.len() > SHOWN_LOCATIONS {
            joined.push_str(&format!(" (и ещё {})", locations.len() - SHOWN_LOCATIONS));
        }
        joined
    } else {
        String::new()
    };

    vec![Issue {
        document: doc_name.to_string(),
        category: CATEGORY.to_string(),
        severity: Severity::Warning,
        description: format!("Найдены некорректные отступы первой строки ({total} шт.)"),
        expected,
        actual: examples[..examples.len().min(SHOWN_EXAMPLES)].join(", "),
        location,
    }]
}

/// Denominator: paragraphs carrying any explicit `w:spacing`. Numerator:
/// those whose auto-rule `w:line` falls outside the accepted band. Values
/// under other line rules are exact twip heights, not multipliers, so they
/// only count toward the denominator.
fn check_line_spacing(
    doc_name: &str,
    nodes: &[Node],
    config: &NormocontrolConfig,
    policy: &CheckPolicy,
) -> Vec<Issue> {
    let band = policy.spacing_band(config.line_spacing_expected);

    let mut with_spacing = 0usize;
    let mut invalid = 0usize;
    let mut first_offender: Option<usize> = None;

    for (idx, paragraph) in nodes.iter().enumerate() {
        let Some(spacing) = paragraph_properties(*paragraph).spacing else {
            continue;
        };
        with_spacing += 1;

        let Some(line) = spacing.line else { continue };
        if spacing.line_rule.as_deref() != Some("auto") {
            continue;
        }

        if !band.contains(&line) {
            invalid += 1;
            if first_offender.is_none() {
                first_offender = Some(idx + 1);
            }
        }
    }

    if with_spacing == 0 {
        return Vec::new();
    }
    let ratio = invalid as f64 / with_spacing as f64;
    if ratio <= policy.spacing_ratio_threshold {
        return Vec::new();
    }

    let location = if policy.detailed_locations {
        match first_offender {
            Some(n) => format!("Начиная с параграфа {n}"),
            None => "Весь документ".to_string(),
        }
    } else {
        String::new()
    };

    vec![Issue {
        document: doc_name.to_string(),
        category: CATEGORY.to_string(),
        severity: Severity::Warning,
        description: "Много параграфов с явно заданным некорректным интервалом".to_string(),
        expected: spacing_label(config.line_spacing_expected),
        actual: format!("{invalid} из {with_spacing}"),
        location,
    }]
}

fn spacing_label(multiplier: f64) -> String {
    if (multiplier - 1.0).abs() < f64::EPSILON {
        "1.0 (одинарный)".to_string()
    } else if (multiplier - 1.5).abs() < f64::EPSILON {
        "1.5 (полуторный)".to_string()
    } else {
        format!("{multiplier:.1}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::testutil::{document_xml, it_config};
    use pretty_assertions::assert_eq;

    fn parse(xml: &str) -> Document<'_> {
        Document::parse(xml).unwrap()
    }

    fn indent_paragraph(first_line: &str, text: &str) -> String {
        format!(
            "<w:p><w:pPr><w:ind w:firstLine=\"{first_line}\"/></w:pPr>\
             <w:r><w:t>{text}</w:t></w:r></w:p>"
        )
    }

    fn spacing_paragraph(line: &str, rule: &str) -> String {
        format!("<w:p><w:pPr><w:spacing w:line=\"{line}\" w:lineRule=\"{rule}\"/></w:pPr></w:p>")
    }

    #[test]
    fn test_correct_indents_pass() {
        let body = indent_paragraph("709", "Первый абзац").repeat(4);
        let xml = document_xml(&body);
        let issues =
            check_paragraph_formatting("ПЗ.docx", &parse(&xml), &it_config(), &CheckPolicy::strict());
        assert_eq!(issues, vec![]);
    }

    #[test]
    fn test_wrong_indents_aggregate_into_one_warning() {
        let body = format!(
            "{}{}{}",
            indent_paragraph("425", "Короткий"),
            indent_paragraph("709", "Нормальный"),
            indent_paragraph("425", "Ещё один"),
        );
        let xml = document_xml(&body);
        let issues =
            check_paragraph_formatting("ПЗ.docx", &parse(&xml), &it_config(), &CheckPolicy::strict());

        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Warning);
        assert_eq!(
            issues[0].description,
            "Найдены некорректные отступы первой строки (2 шт.)"
        );
        assert_eq!(issues[0].expected, "1.25 см");
        assert_eq!(issues[0].actual, "0.75 см, 0.75 см");
        assert_eq!(issues[0].location, "");
    }

    #[test]
    fn test_explicit_zero_indent_is_flagged() {
        let xml = document_xml(&indent_paragraph("0", "Без отступа"));
        let issues =
            check_paragraph_formatting("ПЗ.docx", &parse(&xml), &it_config(), &CheckPolicy::strict());

        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].actual, "0.00 см");
    }

    #[test]
    fn test_indent_tolerance_boundary() {
        // 57 twips = 0.1 cm tolerance around the expected 709
        let inside = document_xml(&indent_paragraph("766", "На границе"));
        let issues = check_paragraph_formatting(
            "ПЗ.docx",
            &parse(&inside),
            &it_config(),
            &CheckPolicy::strict(),
        );
        assert_eq!(issues, vec![]);

        let outside = document_xml(&indent_paragraph("767", "За границей"));
        let issues = check_paragraph_formatting(
            "ПЗ.docx",
            &parse(&outside),
            &it_config(),
            &CheckPolicy::strict(),
        );
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].actual, "1.35 см");
    }

    #[test]
    fn test_lenient_accepts_alternate_indent() {
        // 1.5 cm
        let xml = document_xml(&indent_paragraph("851", "Абзац"));

        let strict = check_paragraph_formatting(
            "ПЗ.docx",
            &parse(&xml),
            &it_config(),
            &CheckPolicy::strict(),
        );
        assert_eq!(strict.len(), 1);
        assert_eq!(strict[0].expected, "1.25 см");

        let lenient = check_paragraph_formatting(
            "ПЗ.docx",
            &parse(&xml),
            &it_config(),
            &CheckPolicy::lenient(),
        );
        assert_eq!(lenient, vec![]);
    }

    #[test]
    fn test_lenient_indent_issue_lists_locations() {
        let body: String = (1..=5)
            .map(|i| indent_paragraph("142", &format!("Абзац номер {i}")))
            .collect();
        let xml = document_xml(&body);
        let issues = check_paragraph_formatting(
            "ПЗ.docx",
            &parse(&xml),
            &it_config(),
            &CheckPolicy::lenient(),
        );

        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].expected, "1.25 см или 1.50 см");
        assert_eq!(
            issues[0].location,
            "Параграф 1: 'Абзац номер 1'; Параграф 2: 'Абзац номер 2'; \
             Параграф 3: 'Абзац номер 3' (и ещё 2)"
        );
    }

    #[test]
    fn test_pervasive_wrong_spacing_warns() {
        let body = spacing_paragraph("480", "auto").repeat(10);
        let xml = document_xml(&body);
        let issues =
            check_paragraph_formatting("ПЗ.docx", &parse(&xml), &it_config(), &CheckPolicy::strict());

        assert_eq!(issues.len(), 1);
        assert_eq!(
            issues[0].description,
            "Много параграфов с явно заданным некорректным интервалом"
        );
        assert_eq!(issues[0].expected, "1.0 (одинарный)");
        assert_eq!(issues[0].actual, "10 из 10");
        assert_eq!(issues[0].location, "");
    }

    #[test]
    fn test_spacing_ratio_threshold_is_strict_inequality() {
        // 8 of 10 wrong: exactly the 0.8 threshold, not past it
        let body = format!(
            "{}{}",
            spacing_paragraph("480", "auto").repeat(8),
            spacing_paragraph("240", "auto").repeat(2),
        );
        let xml = document_xml(&body);
        let issues =
            check_paragraph_formatting("ПЗ.docx", &parse(&xml), &it_config(), &CheckPolicy::strict());
        assert_eq!(issues, vec![]);

        let body = format!(
            "{}{}",
            spacing_paragraph("480", "auto").repeat(9),
            spacing_paragraph("240", "auto"),
        );
        let xml = document_xml(&body);
        let issues =
            check_paragraph_formatting("ПЗ.docx", &parse(&xml), &it_config(), &CheckPolicy::strict());
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].actual, "9 из 10");
    }

    #[test]
    fn test_exact_rule_spacing_only_counts_toward_denominator() {
        // Exact heights are not multiplier violations however odd the value
        let body = format!(
            "{}{}",
            spacing_paragraph("480", "auto").repeat(2),
            spacing_paragraph("9999", "exact"),
        );
        let xml = document_xml(&body);
        let issues =
            check_paragraph_formatting("ПЗ.docx", &parse(&xml), &it_config(), &CheckPolicy::strict());

        // 2 invalid of 3 with spacing, ratio 0.67
        assert_eq!(issues, vec![]);
    }

    #[test]
    fn test_lenient_spacing_location_names_first_offender() {
        let body = format!(
            "{}{}",
            spacing_paragraph("240", "auto"),
            spacing_paragraph("480", "auto").repeat(9),
        );
        let xml = document_xml(&body);
        let issues = check_paragraph_formatting(
            "ПЗ.docx",
            &parse(&xml),
            &it_config(),
            &CheckPolicy::lenient(),
        );

        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].location, "Начиная с параграфа 2");
    }

    #[test]
    fn test_document_without_explicit_formatting_passes() {
        let xml = document_xml("<w:p><w:r><w:t>Обычный текст</w:t></w:r></w:p>");
        let issues =
            check_paragraph_formatting("ПЗ.docx", &parse(&xml), &it_config(), &CheckPolicy::strict());
        assert_eq!(issues, vec![]);
    }
}
