//! Read-only access to WordprocessingML (.docx) containers
//!
//! This crate covers the low-level half of normocontrol checking:
//! - `units`: conversions between physical units and OOXML internal units
//! - `package`: ZIP container access, parts read fully into memory
//! - `document`: typed accessors over the parsed `word/document.xml` tree
//!
//! No rendering and no editing, only the formatting facts the checks
//! consume.

pub mod document;
pub mod error;
pub mod package;
pub mod units;

pub use document::{
    Indentation, LineSpacing, MarginSide, Orientation, PageMargins, PageSize,
    ParagraphProperties, RunFonts, RunProperties, W_NS,
};
pub use error::OoxmlError;
pub use package::{DocxPackage, HeaderPart, DOCUMENT_PART, STYLES_PART};
