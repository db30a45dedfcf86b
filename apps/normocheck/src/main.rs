//! Strict normocontrol gate for a single explanatory note.
//!
//! Usage: `normocheck [path/to/document.docx]`
//!
//! Loads the checklist from `checklists/it_short.md`, checks the document
//! with the strict policy and writes a timestamped markdown report into
//! `normocontrol_reports/`. Exits with code 1 as soon as the report
//! contains at least one error-severity issue.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use anyhow::{Context, Result};
use chrono::Local;
use tracing::info;

use normocontrol_engine::{
    CheckPolicy, NormocontrolConfig, NormocontrolEngine, OutputFormat, Reporter,
};

const DEFAULT_DOCUMENT: &str = "tests/ПЗ.docx";
const CHECKLIST_PATH: &str = "checklists/it_short.md";
const REPORTS_DIR: &str = "normocontrol_reports";

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = env::args().collect();
    let docx_path = if args.len() > 1 {
        PathBuf::from(&args[1])
    } else {
        PathBuf::from(DEFAULT_DOCUMENT)
    };

    if !docx_path.is_file() {
        eprintln!("ERROR: File not found: {}", docx_path.display());
        process::exit(1);
    }
    let suffix = docx_path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_lowercase);
    if suffix.as_deref() != Some("docx") {
        eprintln!("ERROR: Expected .docx file: {}", docx_path.display());
        process::exit(1);
    }

    let config = NormocontrolConfig::from_file(Path::new(CHECKLIST_PATH))
        .with_context(|| format!("Failed to load checklist {CHECKLIST_PATH}"))?;
    info!("Loaded checklist from {}", CHECKLIST_PATH);

    let engine = NormocontrolEngine::new(config, CheckPolicy::strict());
    let report = engine.check_document(&docx_path)?;

    fs::create_dir_all(REPORTS_DIR)
        .with_context(|| format!("Failed to create report directory {REPORTS_DIR}"))?;
    let report_path = PathBuf::from(REPORTS_DIR).join(format!(
        "it_normocontrol_report_{}.md",
        Local::now().format("%Y%m%d_%H%M%S")
    ));
    Reporter::new(OutputFormat::Markdown).write_to_file(&report, &report_path)?;

    let summary = report.summary();
    println!("✓ Report: {}", report_path.display());
    println!("Checked: {} document(s)", summary.total_documents);
    println!(
        "Issues: {} (errors={}, warnings={})",
        summary.total_issues, summary.errors, summary.warnings
    );

    if report.has_errors() {
        process::exit(1);
    }
    Ok(())
}
