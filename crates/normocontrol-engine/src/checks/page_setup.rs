//! Page margins and page size against the configured profile.

use roxmltree::Document;
use shared_ooxml::document::{page_margins, page_size};
use shared_ooxml::units::{mm_to_twips, twips_to_mm};
use shared_ooxml::MarginSide;
use shared_types::{Issue, Severity};

use crate::config::NormocontrolConfig;
use crate::policy::CheckPolicy;

const CATEGORY: &str = "page_setup";

pub fn check_page_setup(
    doc_name: &str,
    doc: &Document,
    config: &NormocontrolConfig,
    policy: &CheckPolicy,
) -> Vec<Issue> {
    let mut issues = Vec::new();

    issues.extend(check_margins(doc_name, doc, config, policy));
    issues.extend(check_page_size(doc_name, doc, config, policy));

    issues
}

/// One issue per missing or out-of-tolerance side. A document without a
/// `w:pgMar` at all yields a single error instead.
fn check_margins(
    doc_name: &str,
    doc: &Document,
    config: &NormocontrolConfig,
    policy: &CheckPolicy,
) -> Vec<Issue> {
    let mut issues = Vec::new();

    let Some(margins) = page_margins(doc) else {
        issues.push(Issue {
            document: doc_name.to_string(),
            category: CATEGORY.to_string(),
            severity: Severity::Error,
            description: "Поля страницы не найдены".to_string(),
            expected: "Поля должны быть заданы".to_string(),
            actual: "Поля отсутствуют".to_string(),
            location: "Разметка страницы → Поля".to_string(),
        });
        return issues;
    };

    let tolerance_twips = mm_to_twips(policy.margin_tolerance_mm);

    for side in MarginSide::ALL {
        let expected_mm = expected_margin_mm(config, side);

        let Some(actual_twips) = margins.side(side) else {
            issues.push(Issue {
                document: doc_name.to_string(),
                category: CATEGORY.to_string(),
                severity: Severity::Error,
                description: format!("Поле '{}' не задано", side.as_str()),
                expected: format!("{expected_mm} мм"),
                actual: "не задано".to_string(),
                location: "Разметка страницы → Поля".to_string(),
            });
            continue;
        };

        let diff_twips = (actual_twips - mm_to_twips(expected_mm)).abs();
        if diff_twips > tolerance_twips {
            issues.push(Issue {
                document: doc_name.to_string(),
                category: CATEGORY.to_string(),
                severity: policy.margin_severity(diff_twips, tolerance_twips),
                description: format!("Некорректное поле '{}'", side.as_str()),
                expected: format!("{expected_mm} мм"),
                actual: format!("{:.1} мм", twips_to_mm(actual_twips)),
                location: "Разметка страницы → Поля → Настраиваемые поля".to_string(),
            });
        }
    }

    issues
}

fn expected_margin_mm(config: &NormocontrolConfig, side: MarginSide) -> f64 {
    match side {
        MarginSide::Left => config.margins_left_mm,
        MarginSide::Right => config.margins_right_mm,
        MarginSide::Top => config.margins_top_mm,
        MarginSide::Bottom => config.margins_bottom_mm,
    }
}

/// A4 conformance. Size problems never fail a run, only warn.
fn check_page_size(
    doc_name: &str,
    doc: &Document,
    config: &NormocontrolConfig,
    policy: &CheckPolicy,
) -> Vec<Issue> {
    let mut issues = Vec::new();

    let Some(size) = page_size(doc) else {
        issues.push(Issue {
            document: doc_name.to_string(),
            category: CATEGORY.to_string(),
            severity: Severity::Warning,
            description: "Размер страницы не найден".to_string(),
            expected: format!(
                "A4 ({:.0}×{:.0} мм)",
                config.page_width_mm, config.page_height_mm
            ),
            actual: "не найден".to_string(),
            location: String::new(),
        });
        return issues;
    };

    let tolerance = mm_to_twips(policy.page_size_tolerance_mm);
    let width_diff = (size.width - mm_to_twips(config.page_width_mm)).abs();
    let height_diff = (size.height - mm_to_twips(config.page_height_mm)).abs();

    if width_diff > tolerance || height_diff > tolerance {
        issues.push(Issue {
            document: doc_name.to_string(),
            category: CATEGORY.to_string(),
            severity: Severity::Warning,
            description: "Размер страницы не соответствует A4".to_string(),
            expected: format!("{:.0}×{:.0} мм", config.page_width_mm, config.page_height_mm),
            actual: format!(
                "{:.0}×{:.0} мм",
                twips_to_mm(size.width),
                twips_to_mm(size.height)
            ),
            location: String::new(),
        });
    }

    issues
}
