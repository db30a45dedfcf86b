use shared_ooxml::OoxmlError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Document not found: {0}")]
    DocumentNotFound(String),

    #[error("Not a .docx document: {0}")]
    NotDocx(String),

    #[error("Failed to read document: {0}")]
    Ooxml(#[from] OoxmlError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_document() {
        let err = EngineError::DocumentNotFound("tests/ПЗ.docx".to_string());
        assert_eq!(err.to_string(), "Document not found: tests/ПЗ.docx");

        let err = EngineError::NotDocx("notes.txt".to_string());
        assert_eq!(err.to_string(), "Not a .docx document: notes.txt");
    }

    #[test]
    fn test_ooxml_errors_convert() {
        let source = OoxmlError::PartNotFound("word/document.xml".to_string());
        let err = EngineError::from(source);
        assert!(err.to_string().contains("word/document.xml"));
    }
}
