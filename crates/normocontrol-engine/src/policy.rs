//! Threshold and severity profiles for the check procedures.
//!
//! Historically the project ran two near-identical checkers: a strict
//! single-document gate and a lenient corpus collector, each with its own
//! tolerances. Both now share one check library; everything that differed
//! between them lives here.

use std::ops::RangeInclusive;

use shared_types::Severity;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckMode {
    /// Single-document gate: errors fail the run.
    Strict,
    /// Corpus collection: softer severities, more context in locations.
    Lenient,
}

#[derive(Debug, Clone)]
pub struct CheckPolicy {
    pub mode: CheckMode,

    pub margin_tolerance_mm: f64,
    /// `None`: any out-of-tolerance margin is an error. `Some(f)`: a
    /// deviation within `f × tolerance` is a warning, beyond it an error.
    pub margin_escalation_factor: Option<f64>,
    pub page_size_tolerance_mm: f64,

    pub indent_tolerance_cm: f64,
    /// Indent values accepted besides the configured one.
    pub extra_indents_cm: Vec<f64>,
    pub spacing_ratio_threshold: f64,

    pub justified_min_ratio: f64,
    pub alignment_severity: Severity,

    pub font_run_scan_limit: usize,
    pub font_name_severity: Severity,
    pub font_size_nonstandard_threshold: f64,
    pub font_size_severity: Severity,

    /// Include paragraph indices and text previews in issue locations.
    pub detailed_locations: bool,
    /// Skip the structure check for attachment documents
    /// (file name contains "ПРИЛОЖЕНИЕ").
    pub skip_structure_for_attachments: bool,
}

impl CheckPolicy {
    pub fn strict() -> Self {
        Self {
            mode: CheckMode::Strict,
            margin_tolerance_mm: 1.5,
            margin_escalation_factor: None,
            page_size_tolerance_mm: 5.0,
            indent_tolerance_cm: 0.1,
            extra_indents_cm: Vec::new(),
            spacing_ratio_threshold: 0.8,
            justified_min_ratio: 0.5,
            alignment_severity: Severity::Error,
            font_run_scan_limit: 250,
            font_name_severity: Severity::Error,
            font_size_nonstandard_threshold: 0.5,
            font_size_severity: Severity::Warning,
            detailed_locations: false,
            skip_structure_for_attachments: false,
        }
    }

    pub fn lenient() -> Self {
        Self {
            mode: CheckMode::Lenient,
            margin_tolerance_mm: 2.0,
            margin_escalation_factor: Some(2.0),
            page_size_tolerance_mm: 5.0,
            indent_tolerance_cm: 0.1,
            extra_indents_cm: vec![1.5],
            spacing_ratio_threshold: 0.8,
            justified_min_ratio: 0.5,
            alignment_severity: Severity::Warning,
            font_run_scan_limit: 100,
            font_name_severity: Severity::Info,
            font_size_nonstandard_threshold: 0.8,
            font_size_severity: Severity::Info,
            detailed_locations: true,
            skip_structure_for_attachments: true,
        }
    }

    pub fn for_mode(mode: CheckMode) -> Self {
        match mode {
            CheckMode::Strict => Self::strict(),
            CheckMode::Lenient => Self::lenient(),
        }
    }

    /// Severity of one out-of-tolerance margin deviation.
    pub fn margin_severity(&self, diff_twips: i64, tolerance_twips: i64) -> Severity {
        match self.margin_escalation_factor {
            Some(factor) if (diff_twips as f64) <= (tolerance_twips as f64) * factor => {
                Severity::Warning
            }
            _ => Severity::Error,
        }
    }

    /// Accepted `w:line` band for explicit auto-rule spacing, derived from
    /// the configured multiplier (240 twips = single spacing): 1.0 gives
    /// 220..=260, 1.5 gives 340..=380.
    pub fn spacing_band(&self, multiplier: f64) -> RangeInclusive<i64> {
        let expected = (240.0 * multiplier).round() as i64;
        (expected - 20)..=(expected + 20)
    }
}

impl Default for CheckPolicy {
    fn default() -> Self {
        Self::strict()
    }
}
