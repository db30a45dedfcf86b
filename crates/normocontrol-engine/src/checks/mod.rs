//! Check procedures, one module per formatting dimension.
//!
//! Every check is a free function taking the document name, the data it
//! inspects, the rule configuration and the policy, and returning its own
//! issue list; the engine concatenates them. Checks never abort a
//! document: absence of data either becomes an issue or excludes the
//! element from the check.

pub mod alignment;
pub mod captions;
pub mod fonts;
pub mod page_setup;
pub mod pagination;
pub mod paragraphs;
pub mod references;
pub mod structure;

/// Character-safe prefix, since issue text is sliced mid-sentence.
pub(crate) fn truncate_chars(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

/// Short paragraph preview for issue locations.
pub(crate) fn text_preview(text: &str, max_chars: usize) -> String {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return "(пустой параграф)".to_string();
    }
    if trimmed.chars().count() > max_chars {
        format!("{}...", truncate_chars(trimmed, max_chars))
    } else {
        trimmed.to_string()
    }
}
