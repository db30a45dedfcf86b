//! Plain text report rendering

use std::fmt::Write;

use anyhow::Result;
use shared_types::{NormocontrolReport, Severity};

const BANNER_WIDTH: usize = 80;

/// Console text reporter
pub struct TextReporter;

impl TextReporter {
    pub fn format(report: &NormocontrolReport) -> Result<String> {
        let mut output = String::new();
        let banner = "=".repeat(BANNER_WIDTH);
        let divider = "-".repeat(BANNER_WIDTH);

        writeln!(output, "{banner}")?;
        writeln!(output, "ОТЧЁТ ПРОВЕРКИ НОРМОКОНТРОЛЯ")?;
        writeln!(output, "{banner}")?;
        writeln!(output, "Дата: {}", report.timestamp)?;
        writeln!(output)?;

        let summary = report.summary();
        writeln!(output, "СВОДКА:")?;
        writeln!(output, "  Проверено документов: {}", summary.total_documents)?;
        writeln!(output, "  Всего проблем: {}", summary.total_issues)?;
        writeln!(output, "    - Ошибки: {}", summary.errors)?;
        writeln!(output, "    - Предупреждения: {}", summary.warnings)?;
        writeln!(output, "    - Информация: {}", summary.info)?;
        writeln!(output)?;

        for doc in &report.documents_checked {
            let doc_issues = report.issues_for_document(doc);

            writeln!(output, "{divider}")?;
            writeln!(output, "ДОКУМЕНТ: {doc}")?;
            writeln!(output, "{divider}")?;

            if doc_issues.is_empty() {
                writeln!(output, "  ✓ Проблем не обнаружено")?;
                writeln!(output)?;
                continue;
            }

            writeln!(output, "  Найдено проблем: {}", doc_issues.len())?;
            writeln!(output)?;

            for (i, issue) in doc_issues.iter().enumerate() {
                writeln!(
                    output,
                    "  {}. [{}] {}",
                    i + 1,
                    severity_label(issue.severity),
                    issue.category.to_uppercase()
                )?;
                writeln!(output, "     {}", issue.description)?;

                if !issue.expected.is_empty() {
                    writeln!(output, "     Ожидается: {}", issue.expected)?;
                }
                if !issue.actual.is_empty() {
                    writeln!(output, "     Фактически: {}", issue.actual)?;
                }
                if !issue.location.is_empty() {
                    writeln!(output, "     Расположение: {}", issue.location)?;
                }
                writeln!(output)?;
            }
        }

        writeln!(output, "{banner}")?;
        Ok(output)
    }
}

fn severity_label(severity: Severity) -> &'static str {
    match severity {
        Severity::Error => "ОШИБКА",
        Severity::Warning => "ПРЕДУПРЕЖДЕНИЕ",
        Severity::Info => "ИНФОРМАЦИЯ",
    }
}
