//! PR comment assembly for the normocontrol workflow.
//!
//! The body always starts with [`COMMENT_MARKER`] so the posting step can
//! find and update its own previous comment instead of stacking new ones.

/// Idempotency key for comment upserts.
pub const COMMENT_MARKER: &str = "<!-- it-normocontrol-task03 -->";

/// GitHub rejects comment bodies over 65536 characters; stay under with headroom.
pub const MAX_COMMENT_LEN: usize = 64000;

/// Per-document report snippet cap inside the `<details>` block.
const REPORT_SNIPPET_LIMIT: usize = 20000;

const HEADLINE: &str = "### IT Normocontrol · task_03 (Пояснительная записка)";
const SHORT_HEADLINE: &str = "### IT Normocontrol · task_03";
const MISSING_REPORT: &str = "(Отчёт не найден — см. stdout/stderr workflow.)";
const TRUNCATION_NOTICE: &str =
    "\n\n_(Содержимое отчёта было сокращено — полный отчёт доступен в артефактах workflow.)_\n";

/// Body for a completed check run over one document.
pub fn check_body(document: &str, passed: bool, report_markdown: &str) -> String {
    let status = if passed { "✅" } else { "❌" };
    let report = report_markdown.trim();
    let report = if report.is_empty() { MISSING_REPORT } else { report };
    let report = truncate_for_comment(report, REPORT_SNIPPET_LIMIT);

    let lines = [
        COMMENT_MARKER.to_string(),
        HEADLINE.to_string(),
        String::new(),
        format!("- {status} `{document}`"),
        String::new(),
        format!("<details><summary>Report: {document}</summary>\n"),
        "```markdown".to_string(),
        report,
        "```".to_string(),
        "</details>".to_string(),
        String::new(),
    ];
    truncate_for_comment(lines.join("\n").trim(), MAX_COMMENT_LEN)
}

/// Body for a login that is absent from the roster.
pub fn roster_miss_body(login: &str) -> String {
    [
        COMMENT_MARKER.to_string(),
        SHORT_HEADLINE.to_string(),
        format!(
            "❌ Пользователь `{login}` не найден в `students/students.csv` \
             (невозможно определить папку студента)."
        ),
    ]
    .join("\n")
}

/// Body for a roster entry whose expected document is missing.
pub fn missing_document_body(document: &str) -> String {
    [
        COMMENT_MARKER.to_string(),
        SHORT_HEADLINE.to_string(),
        format!("❌ Файл не найден в checkout: `{document}`."),
        String::new(),
        "Ожидаемый путь:".to_string(),
        format!("- `{document}`"),
    ]
    .join("\n")
}

/// Trim `text` to at most roughly `limit` characters, cutting at a line
/// boundary and appending a truncation notice. Text within the limit is
/// returned unchanged.
pub fn truncate_for_comment(text: &str, limit: usize) -> String {
    if text.chars().count() <= limit {
        return text.to_string();
    }
    let cut: String = text.chars().take(limit.saturating_sub(200)).collect();
    let cut = match cut.rfind('\n') {
        Some(pos) => &cut[..pos],
        None => cut.as_str(),
    };
    format!("{cut}{TRUNCATION_NOTICE}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_body_starts_with_marker() {
        let body = check_body("students/JohnDoe/task_03/Пояснительная_записка.docx", true, "# Отчёт");
        assert!(body.starts_with(COMMENT_MARKER));
        assert!(body.contains("- ✅ `students/JohnDoe/task_03/Пояснительная_записка.docx`"));
        assert!(body.contains("```markdown"));
        assert!(body.contains("# Отчёт"));
    }

    #[test]
    fn failed_check_renders_cross_status() {
        let body = check_body("students/JohnDoe/task_03/Пояснительная_записка.docx", false, "# Отчёт");
        assert!(body.contains("- ❌ `students/JohnDoe/task_03/Пояснительная_записка.docx`"));
    }

    #[test]
    fn empty_report_falls_back_to_placeholder() {
        let body = check_body("doc.docx", false, "   \n");
        assert!(body.contains(MISSING_REPORT));
    }

    #[test]
    fn roster_miss_body_names_login() {
        let body = roster_miss_body("stranger");
        assert!(body.starts_with(COMMENT_MARKER));
        assert!(body.contains("`stranger` не найден"));
    }

    #[test]
    fn missing_document_body_names_path() {
        let body = missing_document_body("students/JohnDoe/task_03/Пояснительная_записка.docx");
        assert!(body.starts_with(COMMENT_MARKER));
        assert!(body.contains("Файл не найден в checkout"));
        assert!(body.contains("Ожидаемый путь:"));
    }

    #[test]
    fn short_text_is_not_truncated() {
        let text = "строка один\nстрока два";
        assert_eq!(truncate_for_comment(text, 1000), text);
    }

    #[test]
    fn long_text_is_cut_at_line_boundary_with_notice() {
        let text = "строка наполнения\n".repeat(100);
        let result = truncate_for_comment(&text, 500);
        assert!(result.chars().count() < text.chars().count());
        assert!(result.ends_with(TRUNCATION_NOTICE));
        // The cut lands on a line boundary, never mid-line.
        let kept = result.strip_suffix(TRUNCATION_NOTICE).unwrap();
        assert!(kept.ends_with("строка наполнения"));
    }

    #[test]
    fn oversized_comment_body_is_capped() {
        let report = "очень длинная строка отчёта\n".repeat(4000);
        let body = check_body("doc.docx", false, &report);
        assert!(body.chars().count() <= MAX_COMMENT_LEN);
        assert!(body.contains(TRUNCATION_NOTICE.trim()));
    }
}
