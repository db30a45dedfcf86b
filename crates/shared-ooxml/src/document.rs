//! Typed accessors over the parsed `word/document.xml` tree.
//!
//! Every extractor returns an explicit optional-field record: absence of a
//! sub-element or attribute is a value, never an error. Calls re-traverse
//! the tree; nothing is cached.

use roxmltree::{Document, Node};

/// WordprocessingML main namespace.
pub const W_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarginSide {
    Left,
    Right,
    Top,
    Bottom,
}

impl MarginSide {
    /// The four checked sides, in reporting order.
    pub const ALL: [MarginSide; 4] = [
        MarginSide::Left,
        MarginSide::Right,
        MarginSide::Top,
        MarginSide::Bottom,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MarginSide::Left => "left",
            MarginSide::Right => "right",
            MarginSide::Top => "top",
            MarginSide::Bottom => "bottom",
        }
    }
}

/// Page margins in twips, per `w:pgMar`. Any side may be absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageMargins {
    pub top: Option<i64>,
    pub bottom: Option<i64>,
    pub left: Option<i64>,
    pub right: Option<i64>,
    pub header: Option<i64>,
    pub footer: Option<i64>,
    pub gutter: Option<i64>,
}

impl PageMargins {
    pub fn side(&self, side: MarginSide) -> Option<i64> {
        match side {
            MarginSide::Left => self.left,
            MarginSide::Right => self.right,
            MarginSide::Top => self.top,
            MarginSide::Bottom => self.bottom,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Portrait,
    Landscape,
}

/// Page size in twips, per `w:pgSz`.
#[derive(Debug, Clone, PartialEq)]
pub struct PageSize {
    pub width: i64,
    pub height: i64,
    pub orientation: Orientation,
}

/// `w:spacing` values in twips; `line_rule` is the raw keyword.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LineSpacing {
    pub line: Option<i64>,
    pub line_rule: Option<String>,
    pub before: Option<i64>,
    pub after: Option<i64>,
}

/// `w:ind` values in twips.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Indentation {
    pub left: Option<i64>,
    pub right: Option<i64>,
    pub first_line: Option<i64>,
    pub hanging: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParagraphProperties {
    pub spacing: Option<LineSpacing>,
    pub indent: Option<Indentation>,
    pub justification: Option<String>,
    pub style: Option<String>,
}

/// Explicit font names per usage slot, per `w:rFonts`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunFonts {
    pub ascii: Option<String>,
    pub h_ansi: Option<String>,
    pub cs: Option<String>,
}

impl RunFonts {
    /// All explicitly named fonts across the slots.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        [&self.ascii, &self.h_ansi, &self.cs]
            .into_iter()
            .filter_map(|slot| slot.as_deref())
    }
}

/// Explicit run formatting, per `w:rPr`. `size` is in half-points.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunProperties {
    pub size: Option<i64>,
    pub fonts: Option<RunFonts>,
    pub bold: bool,
    pub italic: bool,
}

/// The last `w:sectPr` in document order; the final section's geometry
/// governs the layout of a single-section report document.
pub fn section_properties<'a, 'input>(
    doc: &'a Document<'input>,
) -> Option<Node<'a, 'input>> {
    doc.descendants()
        .filter(|n| n.has_tag_name((W_NS, "sectPr")))
        .last()
}

pub fn page_margins(doc: &Document) -> Option<PageMargins> {
    let sect = section_properties(doc)?;
    let pg_mar = sect.children().find(|n| n.has_tag_name((W_NS, "pgMar")))?;

    Some(PageMargins {
        top: attr_measure(pg_mar, "top"),
        bottom: attr_measure(pg_mar, "bottom"),
        left: attr_measure(pg_mar, "left"),
        right: attr_measure(pg_mar, "right"),
        header: attr_measure(pg_mar, "header"),
        footer: attr_measure(pg_mar, "footer"),
        gutter: attr_measure(pg_mar, "gutter"),
    })
}

pub fn page_size(doc: &Document) -> Option<PageSize> {
    let sect = section_properties(doc)?;
    let pg_sz = sect.children().find(|n| n.has_tag_name((W_NS, "pgSz")))?;

    let orientation = match pg_sz.attribute((W_NS, "orient")) {
        Some("landscape") => Orientation::Landscape,
        _ => Orientation::Portrait,
    };

    Some(PageSize {
        width: attr_measure(pg_sz, "w")?,
        height: attr_measure(pg_sz, "h")?,
        orientation,
    })
}

/// All `w:p` nodes in document order.
pub fn paragraphs<'a, 'input>(doc: &'a Document<'input>) -> Vec<Node<'a, 'input>> {
    doc.descendants()
        .filter(|n| n.has_tag_name((W_NS, "p")))
        .collect()
}

/// All `w:r` nodes in document order.
pub fn runs<'a, 'input>(doc: &'a Document<'input>) -> Vec<Node<'a, 'input>> {
    doc.descendants()
        .filter(|n| n.has_tag_name((W_NS, "r")))
        .collect()
}

pub fn paragraph_properties(paragraph: Node) -> ParagraphProperties {
    let mut props = ParagraphProperties::default();

    if let Some(p_pr) = paragraph
        .children()
        .find(|n| n.has_tag_name((W_NS, "pPr")))
    {
        for child in p_pr.children() {
            match child.tag_name().name() {
                "spacing" => {
                    props.spacing = Some(LineSpacing {
                        line: attr_measure(child, "line"),
                        line_rule: attr_string(child, "lineRule"),
                        before: attr_measure(child, "before"),
                        after: attr_measure(child, "after"),
                    });
                }
                "ind" => {
                    props.indent = Some(Indentation {
                        left: attr_measure(child, "left"),
                        right: attr_measure(child, "right"),
                        first_line: attr_measure(child, "firstLine"),
                        hanging: attr_measure(child, "hanging"),
                    });
                }
                "jc" => props.justification = attr_string(child, "val"),
                "pStyle" => props.style = attr_string(child, "val"),
                _ => {}
            }
        }
    }

    props
}

pub fn run_properties(run: Node) -> RunProperties {
    let mut props = RunProperties::default();

    if let Some(r_pr) = run.children().find(|n| n.has_tag_name((W_NS, "rPr"))) {
        for child in r_pr.children() {
            match child.tag_name().name() {
                "sz" => props.size = attr_measure(child, "val"),
                "rFonts" => {
                    props.fonts = Some(RunFonts {
                        ascii: attr_string(child, "ascii"),
                        h_ansi: attr_string(child, "hAnsi"),
                        cs: attr_string(child, "cs"),
                    });
                }
                // Presence of the toggle element is what documents set in
                // practice; w:val variants are rare enough to ignore here.
                "b" => props.bold = true,
                "i" => props.italic = true,
                _ => {}
            }
        }
    }

    props
}

/// Concatenated text of all `w:t` descendants of one paragraph.
pub fn paragraph_text(paragraph: Node) -> String {
    paragraph
        .descendants()
        .filter(|n| n.has_tag_name((W_NS, "t")))
        .filter_map(|n| n.text())
        .collect()
}

/// Paragraph-aligned text of the whole document.
pub fn paragraph_texts(doc: &Document) -> Vec<String> {
    paragraphs(doc).into_iter().map(paragraph_text).collect()
}

/// Parse a measure attribute float-tolerantly and round to integer units,
/// so values like "708.66" survive.
fn attr_measure(node: Node, name: &str) -> Option<i64> {
    node.attribute((W_NS, name))
        .and_then(|raw| raw.trim().parse::<f64>().ok())
        .map(|v| v.round() as i64)
}

fn attr_string(node: Node, name: &str) -> Option<String> {
    node.attribute((W_NS, name)).map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn wrap_body(body: &str) -> String {
        format!(
            "<w:document xmlns:w=\"{W_NS}\"><w:body>{body}</w:body></w:document>"
        )
    }

    #[test]
    fn test_page_margins_from_last_section() {
        let xml = wrap_body(
            r#"<w:p/>
               <w:sectPr><w:pgMar w:top="999" w:left="999"/></w:sectPr>
               <w:sectPr>
                 <w:pgMar w:top="1134" w:bottom="1134" w:left="1701" w:right="567"
                          w:header="709" w:footer="709" w:gutter="0"/>
               </w:sectPr>"#,
        );
        let doc = Document::parse(&xml).unwrap();

        let margins = page_margins(&doc).unwrap();
        assert_eq!(margins.top, Some(1134));
        assert_eq!(margins.bottom, Some(1134));
        assert_eq!(margins.left, Some(1701));
        assert_eq!(margins.right, Some(567));
        assert_eq!(margins.header, Some(709));
        assert_eq!(margins.gutter, Some(0));
        assert_eq!(margins.side(MarginSide::Left), Some(1701));
    }

    #[test]
    fn test_page_margins_absent_without_section() {
        let xml = wrap_body("<w:p/>");
        let doc = Document::parse(&xml).unwrap();
        assert_eq!(page_margins(&doc), None);
    }

    #[test]
    fn test_partial_margins_keep_missing_sides_none() {
        let xml = wrap_body(r#"<w:sectPr><w:pgMar w:top="1134"/></w:sectPr>"#);
        let doc = Document::parse(&xml).unwrap();
        let margins = page_margins(&doc).unwrap();
        assert_eq!(margins.top, Some(1134));
        assert_eq!(margins.left, None);
    }

    #[test]
    fn test_page_size_and_orientation() {
        let xml = wrap_body(
            r#"<w:sectPr><w:pgSz w:w="11907" w:h="16840" w:orient="landscape"/></w:sectPr>"#,
        );
        let doc = Document::parse(&xml).unwrap();
        let size = page_size(&doc).unwrap();
        assert_eq!(size.width, 11907);
        assert_eq!(size.height, 16840);
        assert_eq!(size.orientation, Orientation::Landscape);
    }

    #[test]
    fn test_page_size_defaults_to_portrait() {
        let xml = wrap_body(r#"<w:sectPr><w:pgSz w:w="11907" w:h="16840"/></w:sectPr>"#);
        let doc = Document::parse(&xml).unwrap();
        assert_eq!(page_size(&doc).unwrap().orientation, Orientation::Portrait);
    }

    #[test]
    fn test_paragraph_properties_all_fields() {
        let xml = wrap_body(
            r#"<w:p>
                 <w:pPr>
                   <w:pStyle w:val="Heading1"/>
                   <w:spacing w:line="240" w:lineRule="auto" w:before="120" w:after="120"/>
                   <w:ind w:firstLine="709" w:left="0"/>
                   <w:jc w:val="both"/>
                 </w:pPr>
                 <w:r><w:t>текст</w:t></w:r>
               </w:p>"#,
        );
        let doc = Document::parse(&xml).unwrap();
        let paragraph = paragraphs(&doc)[0];
        let props = paragraph_properties(paragraph);

        let spacing = props.spacing.unwrap();
        assert_eq!(spacing.line, Some(240));
        assert_eq!(spacing.line_rule.as_deref(), Some("auto"));
        assert_eq!(spacing.before, Some(120));

        let indent = props.indent.unwrap();
        assert_eq!(indent.first_line, Some(709));
        assert_eq!(indent.left, Some(0));
        assert_eq!(indent.hanging, None);

        assert_eq!(props.justification.as_deref(), Some("both"));
        assert_eq!(props.style.as_deref(), Some("Heading1"));
    }

    #[test]
    fn test_paragraph_without_ppr_is_all_default() {
        let xml = wrap_body("<w:p><w:r><w:t>x</w:t></w:r></w:p>");
        let doc = Document::parse(&xml).unwrap();
        let props = paragraph_properties(paragraphs(&doc)[0]);
        assert_eq!(props, ParagraphProperties::default());
    }

    #[test]
    fn test_fractional_measure_rounds() {
        let xml = wrap_body(r#"<w:p><w:pPr><w:ind w:firstLine="708.66"/></w:pPr></w:p>"#);
        let doc = Document::parse(&xml).unwrap();
        let props = paragraph_properties(paragraphs(&doc)[0]);
        assert_eq!(props.indent.unwrap().first_line, Some(709));
    }

    #[test]
    fn test_run_properties() {
        let xml = wrap_body(
            r#"<w:p><w:r>
                 <w:rPr>
                   <w:rFonts w:ascii="Times New Roman" w:hAnsi="Times New Roman" w:cs="Arial"/>
                   <w:sz w:val="28"/>
                   <w:b/>
                 </w:rPr>
                 <w:t>жирный</w:t>
               </w:r></w:p>"#,
        );
        let doc = Document::parse(&xml).unwrap();
        let props = run_properties(runs(&doc)[0]);

        assert_eq!(props.size, Some(28));
        assert!(props.bold);
        assert!(!props.italic);

        let fonts = props.fonts.unwrap();
        assert_eq!(fonts.ascii.as_deref(), Some("Times New Roman"));
        assert_eq!(fonts.cs.as_deref(), Some("Arial"));
        let names: Vec<&str> = fonts.names().collect();
        assert_eq!(names, vec!["Times New Roman", "Times New Roman", "Arial"]);
    }

    #[test]
    fn test_paragraph_text_concatenates_runs() {
        let xml = wrap_body(
            r#"<w:p><w:r><w:t>Рисунок 1 </w:t></w:r><w:r><w:t>— Схема</w:t></w:r></w:p>
               <w:p><w:r><w:t>Введение</w:t></w:r></w:p>"#,
        );
        let doc = Document::parse(&xml).unwrap();
        let texts = paragraph_texts(&doc);
        assert_eq!(texts, vec!["Рисунок 1 — Схема".to_string(), "Введение".to_string()]);
    }
}
