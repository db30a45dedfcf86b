//! Document formatting checks for the IT normocontrol checklist.
//!
//! The engine opens .docx containers through `shared_ooxml`, runs every
//! check procedure over the extracted formatting facts and accumulates
//! `shared_types::Issue`s into a report. What counts as a violation comes
//! from two places: the checklist markdown (`config`) supplies the
//! measurable requirements, the `policy` profile supplies tolerances and
//! severities.

pub mod checks;
pub mod config;
pub mod error;
pub mod policy;
pub mod reporter;

use std::path::Path;

use shared_ooxml::document::paragraph_texts;
use shared_ooxml::DocxPackage;
use shared_types::NormocontrolReport;
use tracing::{debug, info};

pub use config::{ConfigError, NormocontrolConfig};
pub use error::EngineError;
pub use policy::{CheckMode, CheckPolicy};
pub use reporter::{OutputFormat, Reporter};

/// Entry point: one engine, any number of documents.
pub struct NormocontrolEngine {
    config: NormocontrolConfig,
    policy: CheckPolicy,
}

impl NormocontrolEngine {
    pub fn new(config: NormocontrolConfig, policy: CheckPolicy) -> Self {
        Self { config, policy }
    }

    pub fn config(&self) -> &NormocontrolConfig {
        &self.config
    }

    pub fn policy(&self) -> &CheckPolicy {
        &self.policy
    }

    /// Check a single file and return a fresh report.
    pub fn check_document(&self, path: &Path) -> Result<NormocontrolReport, EngineError> {
        let mut report = NormocontrolReport::new();
        self.check_into(path, &mut report)?;
        Ok(report)
    }

    /// Check a file into an existing report, for multi-document runs.
    pub fn check_into(
        &self,
        path: &Path,
        report: &mut NormocontrolReport,
    ) -> Result<(), EngineError> {
        if !path.is_file() {
            return Err(EngineError::DocumentNotFound(path.display().to_string()));
        }
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        if extension.as_deref() != Some("docx") {
            return Err(EngineError::NotDocx(path.display().to_string()));
        }

        let doc_name = match path.file_name() {
            Some(name) => name.to_string_lossy().into_owned(),
            None => path.display().to_string(),
        };

        let package = DocxPackage::open(path)?;
        self.check_package(&doc_name, &package, report)
    }

    /// Run every check over an already loaded package.
    pub fn check_package(
        &self,
        doc_name: &str,
        package: &DocxPackage,
        report: &mut NormocontrolReport,
    ) -> Result<(), EngineError> {
        info!("Checking {}", doc_name);
        report.add_document(doc_name);

        let doc = package.document()?;
        let texts = paragraph_texts(&doc);

        let mut issues = Vec::new();
        issues.extend(checks::page_setup::check_page_setup(
            doc_name,
            &doc,
            &self.config,
            &self.policy,
        ));
        issues.extend(checks::paragraphs::check_paragraph_formatting(
            doc_name,
            &doc,
            &self.config,
            &self.policy,
        ));
        issues.extend(checks::alignment::check_alignment(
            doc_name,
            &doc,
            &self.config,
            &self.policy,
        ));
        issues.extend(checks::fonts::check_fonts(
            doc_name,
            &doc,
            &self.config,
            &self.policy,
        ));
        issues.extend(checks::pagination::check_pagination(
            doc_name,
            &package.headers,
            &self.config,
            &self.policy,
        ));
        issues.extend(checks::structure::check_structure(
            doc_name,
            &texts,
            &self.config,
            &self.policy,
        ));
        issues.extend(checks::references::check_references(
            doc_name,
            &texts,
            &self.config,
            &self.policy,
        ));
        issues.extend(checks::captions::check_captions(
            doc_name,
            &texts,
            &self.config,
            &self.policy,
        ));

        debug!("{} issue(s) in {}", issues.len(), doc_name);
        for issue in issues {
            report.add_issue(issue);
        }

        Ok(())
    }
}
