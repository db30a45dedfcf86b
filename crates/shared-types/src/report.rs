//! Accumulating report for normocontrol check runs.

use std::collections::BTreeMap;

use chrono::Local;
use serde::{Deserialize, Serialize};

use crate::types::{Issue, Severity};

/// Summary statistics over a report, recomputed on demand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportSummary {
    pub total_documents: usize,
    pub total_issues: usize,
    pub errors: usize,
    pub warnings: usize,
    pub info: usize,
    pub by_category: BTreeMap<String, usize>,
    pub by_document: BTreeMap<String, usize>,
}

/// Collects findings across one or more checked documents.
///
/// Issues are append-only and document registration is idempotent, so the
/// same report instance can accumulate a whole corpus run. Aggregations
/// never cache: adding an issue between two `summary()` calls is reflected
/// in the second call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NormocontrolReport {
    pub issues: Vec<Issue>,
    pub documents_checked: Vec<String>,
    pub timestamp: String,
}

impl NormocontrolReport {
    pub fn new() -> Self {
        Self {
            issues: Vec::new(),
            documents_checked: Vec::new(),
            timestamp: Local::now().to_rfc3339(),
        }
    }

    pub fn add_issue(&mut self, issue: Issue) {
        self.issues.push(issue);
    }

    /// Register a checked document. A repeated name is a no-op; insertion
    /// order is preserved for rendering.
    pub fn add_document(&mut self, document: &str) {
        if !self.documents_checked.iter().any(|d| d == document) {
            self.documents_checked.push(document.to_string());
        }
    }

    pub fn issues_for_document(&self, document: &str) -> Vec<&Issue> {
        self.issues.iter().filter(|i| i.document == document).collect()
    }

    pub fn issues_by_severity(&self, severity: Severity) -> Vec<&Issue> {
        self.issues.iter().filter(|i| i.severity == severity).collect()
    }

    pub fn issues_by_category(&self, category: &str) -> Vec<&Issue> {
        self.issues.iter().filter(|i| i.category == category).collect()
    }

    pub fn has_errors(&self) -> bool {
        self.issues.iter().any(|i| i.severity == Severity::Error)
    }

    pub fn summary(&self) -> ReportSummary {
        let mut by_category: BTreeMap<String, usize> = BTreeMap::new();
        let mut by_document: BTreeMap<String, usize> = BTreeMap::new();
        for issue in &self.issues {
            *by_category.entry(issue.category.clone()).or_insert(0) += 1;
            *by_document.entry(issue.document.clone()).or_insert(0) += 1;
        }

        ReportSummary {
            total_documents: self.documents_checked.len(),
            total_issues: self.issues.len(),
            errors: self.issues_by_severity(Severity::Error).len(),
            warnings: self.issues_by_severity(Severity::Warning).len(),
            info: self.issues_by_severity(Severity::Info).len(),
            by_category,
            by_document,
        }
    }
}

impl Default for NormocontrolReport {
    fn default() -> Self {
        Self::new()
    }
}
