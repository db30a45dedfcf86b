//! Body text must be justified.

use roxmltree::Document;
use shared_ooxml::document::{paragraph_properties, paragraphs};
use shared_types::Issue;

use crate::config::NormocontrolConfig;
use crate::policy::CheckPolicy;

const CATEGORY: &str = "alignment";

/// Among paragraphs with any explicit `w:jc`, the `both` share must reach
/// the policy minimum. Paragraphs relying on style-inherited alignment
/// stay out of the sample entirely.
pub fn check_alignment(
    doc_name: &str,
    doc: &Document,
    _config: &NormocontrolConfig,
    policy: &CheckPolicy,
) -> Vec<Issue> {
    let mut justified = 0usize;
    let mut with_alignment = 0usize;

    for paragraph in paragraphs(doc) {
        let Some(jc) = paragraph_properties(paragraph).justification else {
            continue;
        };
        with_alignment += 1;
        if jc == "both" {
            justified += 1;
        }
    }

    if with_alignment == 0 {
        return Vec::new();
    }

    let ratio = justified as f64 / with_alignment as f64;
    if ratio >= policy.justified_min_ratio {
        return Vec::new();
    }

    vec![Issue {
        document: doc_name.to_string(),
        category: CATEGORY.to_string(),
        severity: policy.alignment_severity,
        description: "Недостаточно параграфов с выравниванием по ширине".to_string(),
        expected: "Большинство параграфов по ширине".to_string(),
        actual: format!("{justified} из {with_alignment} ({:.0}%)", ratio * 100.0),
        location: String::new(),
    }]
}
