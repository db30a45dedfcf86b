//! JSON report rendering

use anyhow::Result;
use serde::Serialize;
use shared_types::{Issue, NormocontrolReport, ReportSummary};

/// The serialized layout: summary first, flat issue list last.
#[derive(Serialize)]
struct JsonPayload<'a> {
    timestamp: &'a str,
    summary: ReportSummary,
    documents: &'a [String],
    issues: &'a [Issue],
}

/// JSON format reporter
pub struct JsonReporter;

impl JsonReporter {
    /// Format a report as JSON, pretty-printed with two-space indent when
    /// `pretty` is set.
    pub fn format(report: &NormocontrolReport, pretty: bool) -> Result<String> {
        let payload = JsonPayload {
            timestamp: &report.timestamp,
            summary: report.summary(),
            documents: &report.documents_checked,
            issues: &report.issues,
        };

        let output = if pretty {
            serde_json::to_string_pretty(&payload)?
        } else {
            serde_json::to_string(&payload)?
        };
        Ok(output)
    }
}
