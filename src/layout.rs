//! Page geometry and paragraph formatting for generated documents.
//!
//! One fixed layout: the margin set applied to the document's single
//! section, and the formatting profile applied to body paragraphs.

use crate::docx::{Document, LineSpacing, Paragraph, ParagraphAlignment};

/// Top margin, 2.0 cm.
const MARGIN_TOP_IN: f64 = 0.79;
/// Bottom margin, 2.0 cm.
const MARGIN_BOTTOM_IN: f64 = 0.79;
/// Left margin, 3.0 cm.
const MARGIN_LEFT_IN: f64 = 1.18;
/// Right margin, 1.5 cm.
const MARGIN_RIGHT_IN: f64 = 0.59;

/// First-line indent, 1.25 cm.
const FIRST_LINE_INDENT_IN: f64 = 0.49;
/// Body font family.
const BODY_FONT: &str = "Times New Roman";
/// Body font size in half-points (14pt).
const BODY_FONT_SIZE: u32 = 28;

/// Apply the fixed page margins to the document's section.
///
/// Side effect only; calling twice yields the same margins.
pub fn configure_page(document: &mut Document) {
    document.section_mut().set_margins(
        MARGIN_TOP_IN,
        MARGIN_BOTTOM_IN,
        MARGIN_LEFT_IN,
        MARGIN_RIGHT_IN,
    );
}

/// Apply the body formatting profile to a paragraph: 1.5 line spacing,
/// justified alignment, first-line indent, and Times New Roman 14pt on
/// every run already present.
///
/// Runs added after this call do not receive the font attributes, so it
/// must be called once all text has been added.
pub fn format_paragraph(paragraph: &mut Paragraph) {
    paragraph.set_line_spacing(LineSpacing::OneAndHalf);
    paragraph.set_alignment(ParagraphAlignment::Justify);
    paragraph.set_indent_first_line(FIRST_LINE_INDENT_IN);
    for run in paragraph.runs_mut() {
        run.font_name(BODY_FONT).font_size(BODY_FONT_SIZE);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configure_page_sets_fixed_margins() {
        let mut doc = Document::new();
        configure_page(&mut doc);

        let section = doc.section();
        assert_eq!(section.margin_top, 1137);
        assert_eq!(section.margin_bottom, 1137);
        assert_eq!(section.margin_left, 1699);
        assert_eq!(section.margin_right, 849);
    }

    #[test]
    fn test_configure_page_is_idempotent() {
        let mut doc = Document::new();
        configure_page(&mut doc);
        let first = doc.section().clone();
        configure_page(&mut doc);
        assert_eq!(*doc.section(), first);
    }

    #[test]
    fn test_format_paragraph_sets_profile() {
        let mut doc = Document::new();
        let para = doc.add_paragraph_with_text("Введение должно содержать обоснование.");
        format_paragraph(para);

        assert_eq!(para.properties.alignment, Some(ParagraphAlignment::Justify));
        assert_eq!(para.properties.line_spacing, Some(LineSpacing::OneAndHalf));
        assert_eq!(para.properties.indent_first_line, Some(705));
        for run in para.runs() {
            assert_eq!(run.properties.font_name.as_deref(), Some("Times New Roman"));
            assert_eq!(run.properties.font_size, Some(28));
        }
    }

    #[test]
    fn test_format_paragraph_without_runs_sets_paragraph_properties_only() {
        let mut doc = Document::new();
        let para = doc.add_paragraph();
        format_paragraph(para);

        assert!(para.runs().is_empty());
        assert_eq!(para.properties.alignment, Some(ParagraphAlignment::Justify));
        assert_eq!(para.properties.line_spacing, Some(LineSpacing::OneAndHalf));
        assert_eq!(para.properties.indent_first_line, Some(705));
    }

    #[test]
    fn test_runs_added_after_formatting_keep_default_font() {
        let mut doc = Document::new();
        let para = doc.add_paragraph_with_text("first");
        format_paragraph(para);
        para.add_run_with_text("second");

        assert_eq!(
            para.runs()[0].properties.font_name.as_deref(),
            Some("Times New Roman")
        );
        assert!(para.runs()[1].properties.font_name.is_none());
        assert!(para.runs()[1].properties.font_size.is_none());
    }
}
