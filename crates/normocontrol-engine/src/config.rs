//! Rule configuration parsed from the course checklist.
//!
//! The checklist is a human-written markdown file; the values the checks
//! need are extracted by pattern matching on its fixed Russian labels.
//! Every extraction is mandatory: a checklist that lost one of the lines
//! cannot be checked against, so loading fails instead of guessing.

use std::fs;
use std::path::Path;

use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read checklist: {0}")]
    Io(#[from] std::io::Error),

    #[error("Checklist has no parsable margins line (\"Поля (мм): левое .., правое .., верхнее .., нижнее ..\")")]
    Margins,

    #[error("Checklist has no parsable font line (\"Шрифт: <name> <size> pt; межстрочный интервал <value>\")")]
    Font,

    #[error("Checklist has no parsable inline-objects size line (\"Внутри таблиц/подрисуночных подписей/на рисунках: <size> pt\")")]
    InlineObjectsSize,

    #[error("Checklist has no parsable paragraph indent line (\"Абзац: <size> мм\")")]
    ParagraphIndent,

    #[error("Checklist has no structure block (\"## 2) Структура пояснительной записки\")")]
    StructureBlock,

    #[error("Checklist structure block lists no numbered sections")]
    StructureSections,
}

lazy_static! {
    /// "Поля (мм): левое 30, правое 10, верхнее 20, нижнее 20."
    static ref MARGINS_RE: Regex = Regex::new(
        r"(?i)Поля\s*\(мм\)\s*:\s*левое\s*(\d+(?:[\.,]\d+)?)\s*,\s*правое\s*(\d+(?:[\.,]\d+)?)\s*,\s*верхнее\s*(\d+(?:[\.,]\d+)?)\s*,\s*нижнее\s*(\d+(?:[\.,]\d+)?)"
    ).unwrap();

    /// "Шрифт: Times New Roman 14 pt; межстрочный интервал 1.0."
    static ref FONT_RE: Regex = Regex::new(
        r"(?i)Шрифт\s*:\s*([A-Za-z ]+?)\s*(\d+(?:[\.,]\d+)?)\s*pt\s*;\s*межстрочный\s+интервал\s*(\d+(?:[\.,]\d+)?)"
    ).unwrap();

    /// "Внутри таблиц/подрисуночных подписей/на рисунках: 12 pt."
    static ref INLINE_OBJECTS_RE: Regex = Regex::new(
        r"(?i)Внутри\s+таблиц/подрисуночных\s+подписей/на\s+рисунках\s*:\s*(\d+(?:[\.,]\d+)?)\s*pt"
    ).unwrap();

    /// "Абзац: 12,5 мм."
    static ref INDENT_RE: Regex = Regex::new(
        r"(?i)Абзац\s*:\s*(\d+(?:[\.,]\d+)?)\s*мм"
    ).unwrap();

    /// The numbered-structure block, up to the next "## " heading.
    static ref STRUCTURE_BLOCK_RE: Regex = Regex::new(
        r"(?is)##\s*2\)\s*Структура\s+пояснительной\s+записки(.*?)(?:\n##\s|\z)"
    ).unwrap();

    /// "3) Оглавление"
    static ref STRUCTURE_ITEM_RE: Regex = Regex::new(r"^\s*\d+\)\s*(.+?)\s*$").unwrap();
}

/// Formatting requirements for one document profile.
#[derive(Debug, Clone, PartialEq)]
pub struct NormocontrolConfig {
    pub margins_left_mm: f64,
    pub margins_right_mm: f64,
    pub margins_top_mm: f64,
    pub margins_bottom_mm: f64,

    pub page_width_mm: f64,
    pub page_height_mm: f64,

    pub main_font_name: String,
    pub main_font_size_pt: f64,
    pub inline_objects_font_size_pt: f64,

    pub first_line_indent_cm: f64,
    pub line_spacing_expected: f64,

    /// Section titles in the order the document must present them.
    pub required_sections_in_order: Vec<String>,
}

impl NormocontrolConfig {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_str(&text)
    }

    /// Parse the checklist text. First match wins for every label; numbers
    /// accept either comma or dot as the decimal separator.
    pub fn from_str(text: &str) -> Result<Self, ConfigError> {
        let margins = MARGINS_RE.captures(text).ok_or(ConfigError::Margins)?;
        let margins_left_mm = parse_float_ru(&margins[1]);
        let margins_right_mm = parse_float_ru(&margins[2]);
        let margins_top_mm = parse_float_ru(&margins[3]);
        let margins_bottom_mm = parse_float_ru(&margins[4]);

        let font = FONT_RE.captures(text).ok_or(ConfigError::Font)?;
        let main_font_name = font[1].trim().to_string();
        let main_font_size_pt = parse_float_ru(&font[2]);
        let line_spacing_expected = parse_float_ru(&font[3]);

        let inline = INLINE_OBJECTS_RE
            .captures(text)
            .ok_or(ConfigError::InlineObjectsSize)?;
        let inline_objects_font_size_pt = parse_float_ru(&inline[1]);

        let indent = INDENT_RE.captures(text).ok_or(ConfigError::ParagraphIndent)?;
        // The checklist states the indent in millimeters; checks use cm.
        let first_line_indent_cm = parse_float_ru(&indent[1]) / 10.0;

        let block = STRUCTURE_BLOCK_RE
            .captures(text)
            .ok_or(ConfigError::StructureBlock)?;
        let mut required_sections_in_order = Vec::new();
        for line in block[1].lines() {
            if let Some(item) = STRUCTURE_ITEM_RE.captures(line) {
                required_sections_in_order.push(item[1].trim().to_string());
            }
        }
        if required_sections_in_order.is_empty() {
            return Err(ConfigError::StructureSections);
        }

        // Page size is implied by "Формат: A4"; kept explicit for checks.
        Ok(Self {
            margins_left_mm,
            margins_right_mm,
            margins_top_mm,
            margins_bottom_mm,
            page_width_mm: 210.0,
            page_height_mm: 297.0,
            main_font_name,
            main_font_size_pt,
            inline_objects_font_size_pt,
            first_line_indent_cm,
            line_spacing_expected,
            required_sections_in_order,
        })
    }
}

fn parse_float_ru(value: &str) -> f64 {
    // The capture groups only admit digits with one [.,] separator, so the
    // parse cannot fail after the replace.
    value.trim().replace(',', ".").parse().unwrap_or(0.0)
}
