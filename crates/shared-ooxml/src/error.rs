use thiserror::Error;

#[derive(Error, Debug)]
pub enum OoxmlError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to read archive: {0}")]
    Archive(String),

    #[error("Part not found in archive: {0}")]
    PartNotFound(String),

    #[error("Malformed XML in {0}: {1}")]
    MalformedXml(String, String),
}
