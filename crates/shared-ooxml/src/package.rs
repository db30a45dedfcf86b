//! ZIP container access for .docx documents.
//!
//! A `DocxPackage` reads the parts the checks need fully into memory and
//! drops the archive handle before returning, so no file handle is held
//! while check logic runs.

use std::fs::File;
use std::io::{Read, Seek};
use std::path::Path;

use zip::result::ZipError;
use zip::ZipArchive;

use crate::error::OoxmlError;

pub const DOCUMENT_PART: &str = "word/document.xml";
pub const STYLES_PART: &str = "word/styles.xml";

/// Raw bytes of one `word/header*.xml` entry.
#[derive(Debug, Clone)]
pub struct HeaderPart {
    pub name: String,
    pub bytes: Vec<u8>,
}

/// In-memory snapshot of the parts of one .docx container.
#[derive(Debug, Clone)]
pub struct DocxPackage {
    pub document_xml: String,
    pub styles_xml: Option<String>,
    pub headers: Vec<HeaderPart>,
}

impl DocxPackage {
    pub fn open(path: &Path) -> Result<Self, OoxmlError> {
        let file = File::open(path)?;
        Self::read_from(file)
    }

    /// Read a package from any seekable byte source.
    ///
    /// `word/document.xml` is mandatory; styles and headers are optional.
    pub fn read_from<R: Read + Seek>(reader: R) -> Result<Self, OoxmlError> {
        let mut archive =
            ZipArchive::new(reader).map_err(|e| OoxmlError::Archive(e.to_string()))?;

        let document_xml = read_text_part(&mut archive, DOCUMENT_PART)?;
        let styles_xml = match read_text_part(&mut archive, STYLES_PART) {
            Ok(text) => Some(text),
            Err(OoxmlError::PartNotFound(_)) => None,
            Err(e) => return Err(e),
        };

        // Entry-name iteration order is unspecified; sort for determinism.
        let mut header_names: Vec<String> = archive
            .file_names()
            .filter(|name| name.starts_with("word/header") && name.ends_with(".xml"))
            .map(|name| name.to_string())
            .collect();
        header_names.sort();

        let mut headers = Vec::with_capacity(header_names.len());
        for name in header_names {
            let mut entry = archive
                .by_name(&name)
                .map_err(|e| OoxmlError::Archive(e.to_string()))?;
            let mut bytes = Vec::new();
            entry.read_to_end(&mut bytes)?;
            headers.push(HeaderPart { name, bytes });
        }

        Ok(Self {
            document_xml,
            styles_xml,
            headers,
        })
    }

    /// Parse the main document part into a navigable tree.
    pub fn document(&self) -> Result<roxmltree::Document<'_>, OoxmlError> {
        parse_part(&self.document_xml, DOCUMENT_PART)
    }

    /// Parse the styles part, if the container carries one.
    pub fn styles(&self) -> Result<Option<roxmltree::Document<'_>>, OoxmlError> {
        match &self.styles_xml {
            Some(xml) => Ok(Some(parse_part(xml, STYLES_PART)?)),
            None => Ok(None),
        }
    }
}

/// Parse one XML part, naming the part in the error on failure.
pub fn parse_part<'a>(xml: &'a str, part: &str) -> Result<roxmltree::Document<'a>, OoxmlError> {
    roxmltree::Document::parse(xml)
        .map_err(|e| OoxmlError::MalformedXml(part.to_string(), e.to_string()))
}

fn read_text_part<R: Read + Seek>(
    archive: &mut ZipArchive<R>,
    name: &str,
) -> Result<String, OoxmlError> {
    let mut entry = match archive.by_name(name) {
        Ok(entry) => entry,
        Err(ZipError::FileNotFound) => return Err(OoxmlError::PartNotFound(name.to_string())),
        Err(e) => return Err(OoxmlError::Archive(e.to_string())),
    };

    let mut text = String::new();
    entry.read_to_string(&mut text)?;
    Ok(text)
}
