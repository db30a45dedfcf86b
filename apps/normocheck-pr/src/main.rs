//! PR-side normocontrol runner for task_03.
//!
//! Usage: `normocheck-pr <github-login> [repo-root]`
//!
//! Resolves the PR author to a student directory via
//! `students/students.csv`, checks the expected
//! `<dir>/task_03/Пояснительная_записка.docx` with the strict policy and
//! writes two workflow artifacts under `.github/`: a ready-to-post comment
//! body and a machine-readable result JSON. The comment/label posting
//! itself stays in the workflow.

mod comment;
mod roster;

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{info, warn};

use normocontrol_engine::{
    CheckPolicy, NormocontrolConfig, NormocontrolEngine, OutputFormat, Reporter,
};

const CHECKLIST_PATH: &str = "checklists/it_short.md";
const TARGET_TASK: &str = "task_03";
const TARGET_DOCUMENT: &str = "Пояснительная_записка.docx";
const COMMENT_ARTIFACT: &str = ".github/it_normocontrol_comment.md";
const RESULT_ARTIFACT: &str = ".github/it_normocontrol_result.json";

#[derive(Serialize)]
struct RunResult<'a> {
    login: &'a str,
    directory: Option<&'a str>,
    document: Option<&'a str>,
    exit_code: i32,
    errors: usize,
    warnings: usize,
    info: usize,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: normocheck-pr <github-login> [repo-root]");
        process::exit(1);
    }
    let login = args[1].as_str();
    let root = if args.len() > 2 {
        PathBuf::from(&args[2])
    } else {
        PathBuf::from(".")
    };

    let roster_path = root.join("students").join("students.csv");
    let Some(directory) = roster::student_directory(&roster_path, login)? else {
        warn!("Login {} not found in {}", login, roster_path.display());
        finish(
            &root,
            &comment::roster_miss_body(login),
            RunResult {
                login,
                directory: None,
                document: None,
                exit_code: 1,
                errors: 0,
                warnings: 0,
                info: 0,
            },
        )
    };

    let document_rel = format!("{directory}/{TARGET_TASK}/{TARGET_DOCUMENT}");
    let target = root.join(&directory).join(TARGET_TASK).join(TARGET_DOCUMENT);
    if !target.is_file() {
        warn!("Document missing in checkout: {}", target.display());
        finish(
            &root,
            &comment::missing_document_body(&document_rel),
            RunResult {
                login,
                directory: Some(directory.as_str()),
                document: Some(document_rel.as_str()),
                exit_code: 1,
                errors: 0,
                warnings: 0,
                info: 0,
            },
        )
    }

    let config = NormocontrolConfig::from_file(&root.join(CHECKLIST_PATH))
        .with_context(|| format!("Failed to load checklist {CHECKLIST_PATH}"))?;
    let engine = NormocontrolEngine::new(config, CheckPolicy::strict());

    info!("Checking {}", document_rel);
    let (body, result) = match engine.check_document(&target) {
        Ok(report) => {
            let markdown = Reporter::new(OutputFormat::Markdown).format_report(&report)?;
            let summary = report.summary();
            let exit_code = i32::from(report.has_errors());
            (
                comment::check_body(&document_rel, exit_code == 0, &markdown),
                RunResult {
                    login,
                    directory: Some(directory.as_str()),
                    document: Some(document_rel.as_str()),
                    exit_code,
                    errors: summary.errors,
                    warnings: summary.warnings,
                    info: summary.info,
                },
            )
        }
        // A broken upload still deserves a comment, not a tool crash.
        Err(err) => {
            warn!("Check failed for {}: {}", document_rel, err);
            (
                comment::check_body(&document_rel, false, ""),
                RunResult {
                    login,
                    directory: Some(directory.as_str()),
                    document: Some(document_rel.as_str()),
                    exit_code: 1,
                    errors: 0,
                    warnings: 0,
                    info: 0,
                },
            )
        }
    };
    finish(&root, &body, result)
}

/// Write both artifacts, echo the workflow interface lines and exit.
fn finish(root: &Path, body: &str, result: RunResult<'_>) -> ! {
    if let Err(err) = write_artifacts(root, body, &result) {
        eprintln!("ERROR: Failed to write artifacts: {err:#}");
        process::exit(1);
    }
    println!("comment_body_path={COMMENT_ARTIFACT}");
    println!("exit_code={}", result.exit_code);
    process::exit(result.exit_code);
}

fn write_artifacts(root: &Path, body: &str, result: &RunResult<'_>) -> Result<()> {
    let github_dir = root.join(".github");
    fs::create_dir_all(&github_dir).with_context(|| {
        format!("Failed to create artifact directory {}", github_dir.display())
    })?;
    fs::write(root.join(COMMENT_ARTIFACT), body)?;
    fs::write(root.join(RESULT_ARTIFACT), serde_json::to_string_pretty(result)?)?;
    Ok(())
}
