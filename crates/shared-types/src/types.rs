//! Core domain types for normocontrol findings.

use serde::{Deserialize, Serialize};

/// Severity of a finding, ordered error > warning > info.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Info,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "info",
        }
    }
}

/// A single formatting finding in a checked document.
///
/// `expected`, `actual` and `location` are optional hints; an empty string
/// means "not provided" and is preserved as-is in serialized output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    pub document: String,
    /// One of the fixed category tags: page_setup, paragraphs, alignment,
    /// fonts, pagination, structure, references, figures, tables.
    pub category: String,
    pub severity: Severity,
    pub description: String,
    pub expected: String,
    pub actual: String,
    pub location: String,
}
