//! Page-number field presence in headers.
//!
//! Without rendering there is no page counter to inspect, so the check
//! settles for the PAGE field instruction anywhere in the header parts.
//! Header XML is scanned as raw bytes; `w:instrText` content is where the
//! field name actually lives.

use shared_ooxml::HeaderPart;
use shared_types::{Issue, Severity};

use crate::config::NormocontrolConfig;
use crate::policy::CheckPolicy;

const CATEGORY: &str = "pagination";

pub fn check_pagination(
    doc_name: &str,
    headers: &[HeaderPart],
    _config: &NormocontrolConfig,
    _policy: &CheckPolicy,
) -> Vec<Issue> {
    if headers.is_empty() {
        return vec![Issue {
            document: doc_name.to_string(),
            category: CATEGORY.to_string(),
            severity: Severity::Warning,
            description: "Колонтитулы не найдены (header*.xml отсутствуют) — не удалось проверить нумерацию страниц".to_string(),
            expected: String::new(),
            actual: String::new(),
            location: String::new(),
        }];
    }

    let has_page_field = headers
        .iter()
        .any(|header| contains_page_field(&header.bytes));

    if has_page_field {
        return Vec::new();
    }

    vec![Issue {
        document: doc_name.to_string(),
        category: CATEGORY.to_string(),
        severity: Severity::Warning,
        description: "Не найдено поле PAGE в колонтитулах (не удалось подтвердить нумерацию страниц)"
            .to_string(),
        expected: "Поле PAGE в правом верхнем углу".to_string(),
        actual: "PAGE не найден".to_string(),
        location: String::new(),
    }]
}

fn contains_page_field(bytes: &[u8]) -> bool {
    bytes.windows(4).any(|w| w.eq_ignore_ascii_case(b"PAGE"))
}
