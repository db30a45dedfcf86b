//! Markdown report rendering
//!
//! Layout: header, summary block, per-category totals, then one section
//! per checked document with its issues grouped by category.

use std::collections::BTreeMap;
use std::fmt::Write;

use anyhow::Result;
use shared_types::{Issue, NormocontrolReport, Severity};

/// Markdown format reporter
pub struct MarkdownReporter;

impl MarkdownReporter {
    pub fn format(report: &NormocontrolReport) -> Result<String> {
        let mut output = String::new();

        writeln!(output, "# Отчёт проверки нормоконтроля")?;
        writeln!(output)?;
        writeln!(output, "**Дата проверки:** {}", report.timestamp)?;
        writeln!(output)?;

        let summary = report.summary();
        writeln!(output, "## Сводка")?;
        writeln!(output)?;
        writeln!(output, "- **Проверено документов:** {}", summary.total_documents)?;
        writeln!(output, "- **Всего проблем:** {}", summary.total_issues)?;
        writeln!(output, "  - ❌ Ошибки: {}", summary.errors)?;
        writeln!(output, "  - ⚠️ Предупреждения: {}", summary.warnings)?;
        writeln!(output, "  - ℹ️ Информация: {}", summary.info)?;
        writeln!(output)?;

        if !summary.by_category.is_empty() {
            writeln!(output, "### По категориям")?;
            writeln!(output)?;
            for (category, count) in &summary.by_category {
                writeln!(output, "- **{category}:** {count}")?;
            }
            writeln!(output)?;
        }

        for doc in &report.documents_checked {
            let doc_issues = report.issues_for_document(doc);

            writeln!(output, "## {doc}")?;
            writeln!(output)?;

            if doc_issues.is_empty() {
                writeln!(output, "✅ Проблем не обнаружено")?;
                writeln!(output)?;
                continue;
            }

            writeln!(output, "**Найдено проблем:** {}", doc_issues.len())?;
            writeln!(output)?;

            let mut by_category: BTreeMap<&str, Vec<&Issue>> = BTreeMap::new();
            for issue in doc_issues {
                by_category
                    .entry(issue.category.as_str())
                    .or_default()
                    .push(issue);
            }

            for (category, issues) in by_category {
                writeln!(output, "### {}", title_case(category))?;
                writeln!(output)?;

                for issue in issues {
                    writeln!(
                        output,
                        "{} **{}**",
                        severity_icon(issue.severity),
                        issue.description
                    )?;
                    if !issue.expected.is_empty() {
                        writeln!(output, "  - Ожидается: `{}`", issue.expected)?;
                    }
                    if !issue.actual.is_empty() {
                        writeln!(output, "  - Фактически: `{}`", issue.actual)?;
                    }
                    if !issue.location.is_empty() {
                        writeln!(output, "  - Расположение: {}", issue.location)?;
                    }
                    writeln!(output)?;
                }
            }
        }

        Ok(output)
    }
}

fn severity_icon(severity: Severity) -> &'static str {
    match severity {
        Severity::Error => "❌",
        Severity::Warning => "⚠️",
        Severity::Info => "ℹ️",
    }
}

/// "page_setup" renders as "Page_Setup" in section headings.
fn title_case(category: &str) -> String {
    let mut out = String::with_capacity(category.len());
    let mut at_word_start = true;
    for ch in category.chars() {
        if ch.is_alphabetic() {
            if at_word_start {
                out.extend(ch.to_uppercase());
                at_word_start = false;
            } else {
                out.extend(ch.to_lowercase());
            }
        } else {
            out.push(ch);
            at_word_start = true;
        }
    }
    out
}
