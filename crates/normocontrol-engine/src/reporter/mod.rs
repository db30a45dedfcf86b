//! Report rendering
//!
//! This module handles formatting and outputting normocontrol reports in
//! the formats the surrounding tooling consumes.
//!
//! # Output Formats
//!
//! - **Markdown**: the report artifact committed next to checked documents
//! - **JSON**: machine-readable format for CI integration
//! - **Text**: plain console dump for quick local runs
//!
//! # Example
//!
//! ```no_run
//! use normocontrol_engine::reporter::{OutputFormat, Reporter};
//! use shared_types::NormocontrolReport;
//!
//! # fn example(report: NormocontrolReport) -> anyhow::Result<()> {
//! let reporter = Reporter::new(OutputFormat::Text);
//! reporter.report(&report)?;
//!
//! // Or write to a file
//! Reporter::new(OutputFormat::Markdown)
//!     .write_to_file(&report, "normocontrol_report.md")?;
//! # Ok(())
//! # }
//! ```

mod json;
mod markdown;
mod text;

use anyhow::Result;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

use shared_types::NormocontrolReport;

pub use json::JsonReporter;
pub use markdown::MarkdownReporter;
pub use text::TextReporter;

/// Output format for normocontrol reports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Markdown format for report artifacts
    Markdown,
    /// Pretty-printed JSON for machine parsing
    Json,
    /// Plain text console output
    Text,
}

impl Default for OutputFormat {
    fn default() -> Self {
        OutputFormat::Markdown
    }
}

/// Reporter for normocontrol results
pub struct Reporter {
    format: OutputFormat,
}

impl Reporter {
    /// Create a new reporter with the specified output format
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Report results to stdout
    pub fn report(&self, report: &NormocontrolReport) -> Result<()> {
        let output = self.format_report(report)?;
        print!("{}", output);
        io::stdout().flush()?;
        Ok(())
    }

    /// Write results to a file
    pub fn write_to_file<P: AsRef<Path>>(
        &self,
        report: &NormocontrolReport,
        path: P,
    ) -> Result<()> {
        let output = self.format_report(report)?;
        fs::write(path, output)?;
        Ok(())
    }

    /// Format results as a string
    pub fn format_report(&self, report: &NormocontrolReport) -> Result<String> {
        match self.format {
            OutputFormat::Markdown => MarkdownReporter::format(report),
            OutputFormat::Json => JsonReporter::format(report, true),
            OutputFormat::Text => TextReporter::format(report),
        }
    }
}

impl Default for Reporter {
    fn default() -> Self {
        Self::new(OutputFormat::default())
    }
}
