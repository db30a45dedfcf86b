//! Explicit run fonts and sizes.
//!
//! Only explicit `w:rPr` values are visible here; text inheriting fonts
//! from styles is out of reach without resolving the style tree, so the
//! check samples the first runs and reasons about shares, not totals.

use std::collections::BTreeSet;

use roxmltree::Document;
use shared_ooxml::document::{run_properties, runs};
use shared_ooxml::units::pt_to_half_points;
use shared_types::Issue;

use crate::checks::truncate_chars;
use crate::config::NormocontrolConfig;
use crate::policy::CheckPolicy;

const CATEGORY: &str = "fonts";

/// Font names listed in one issue before the cap cuts the tail.
const MAX_FONT_LIST_CHARS: usize = 200;
/// Size examples rendered in the issue text.
const SHOWN_SIZES: usize = 5;

pub fn check_fonts(
    doc_name: &str,
    doc: &Document,
    config: &NormocontrolConfig,
    policy: &CheckPolicy,
) -> Vec<Issue> {
    let mut fonts_used: BTreeSet<String> = BTreeSet::new();
    let mut sizes: Vec<i64> = Vec::new();

    for run in runs(doc).into_iter().take(policy.font_run_scan_limit) {
        let props = run_properties(run);

        if let Some(fonts) = &props.fonts {
            fonts_used.extend(fonts.names().map(str::to_string));
        }
        if let Some(size) = props.size {
            sizes.push(size);
        }
    }

    let mut issues = Vec::new();
    issues.extend(font_name_issue(doc_name, &fonts_used, config, policy));
    issues.extend(font_size_issue(doc_name, &sizes, config, policy));
    issues
}

fn font_name_issue(
    doc_name: &str,
    fonts_used: &BTreeSet<String>,
    config: &NormocontrolConfig,
    policy: &CheckPolicy,
) -> Vec<Issue> {
    if fonts_used.is_empty() || fonts_used.contains(&config.main_font_name) {
        return Vec::new();
    }

    let listed = fonts_used
        .iter()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");

    vec![Issue {
        document: doc_name.to_string(),
        category: CATEGORY.to_string(),
        severity: policy.font_name_severity,
        description: format!(
            "{} не найден среди явно заданных шрифтов",
            config.main_font_name
        ),
        expected: config.main_font_name.clone(),
        actual: truncate_chars(&listed, MAX_FONT_LIST_CHARS),
        location: String::new(),
    }]
}

/// Sizes come as raw half-points; the examples shown stay in that unit.
fn font_size_issue(
    doc_name: &str,
    sizes: &[i64],
    config: &NormocontrolConfig,
    policy: &CheckPolicy,
) -> Vec<Issue> {
    if sizes.is_empty() {
        return Vec::new();
    }

    let main = pt_to_half_points(config.main_font_size_pt);
    let inline = pt_to_half_points(config.inline_objects_font_size_pt);

    let nonstandard: Vec<i64> = sizes
        .iter()
        .copied()
        .filter(|size| *size != main && *size != inline)
        .collect();

    let ratio = nonstandard.len() as f64 / sizes.len() as f64;
    if ratio <= policy.font_size_nonstandard_threshold {
        return Vec::new();
    }

    vec![Issue {
        document: doc_name.to_string(),
        category: CATEGORY.to_string(),
        severity: policy.font_size_severity,
        description: "Много runs с нестандартным явно заданным размером шрифта".to_string(),
        expected: format!(
            "{:.0}pt (основной) или {:.0}pt (таблицы/подписи/рисунки)",
            config.main_font_size_pt, config.inline_objects_font_size_pt
        ),
        actual: format!(
            "{} из {} (пример: {:?})",
            nonstandard.len(),
            sizes.len(),
            &nonstandard[..nonstandard.len().min(SHOWN_SIZES)]
        ),
        location: String::new(),
    }]
}
