/// Document writer implementation.
use crate::error::{DocxError, Result};
use std::fmt::Write as FmtWrite;

use super::paragraph::Paragraph;
use super::section::SectionProperties;

/// A Word document under construction.
///
/// Provides methods to append paragraphs, headings, and page breaks, and
/// owns the page-geometry section the body is laid out on. Instances are
/// built per request, serialized once, and discarded.
pub struct Document {
    /// Body paragraphs in document order
    body: Vec<Paragraph>,
    /// Section properties (page setup, margins)
    section: SectionProperties,
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self {
            body: Vec::new(),
            section: SectionProperties::default(),
        }
    }

    /// Get a mutable reference to the section properties.
    pub fn section_mut(&mut self) -> &mut SectionProperties {
        &mut self.section
    }

    /// Get a reference to the section properties.
    pub fn section(&self) -> &SectionProperties {
        &self.section
    }

    /// Add a new paragraph to the end of the document.
    pub fn add_paragraph(&mut self) -> &mut Paragraph {
        self.body.push(Paragraph::new());
        self.body.last_mut().unwrap()
    }

    /// Add a paragraph with text.
    pub fn add_paragraph_with_text(&mut self, text: &str) -> &mut Paragraph {
        let para = self.add_paragraph();
        para.add_run_with_text(text);
        para
    }

    /// Add a heading paragraph.
    ///
    /// Level 0 is the document title; levels 1-9 map to the corresponding
    /// heading styles.
    pub fn add_heading(&mut self, text: &str, level: u8) -> Result<&mut Paragraph> {
        if level > 9 {
            return Err(DocxError::InvalidFormat(
                "Heading level must be 0-9".to_string(),
            ));
        }
        let style = if level == 0 {
            "Title".to_string()
        } else {
            format!("Heading{}", level)
        };
        let para = self.add_paragraph();
        para.set_style(&style);
        para.add_run_with_text(text);
        Ok(para)
    }

    /// Add a page break.
    pub fn add_page_break(&mut self) -> &mut Paragraph {
        let para = self.add_paragraph();
        para.add_run().add_page_break();
        para
    }

    /// Add a paragraph holding a dynamic table-of-contents field.
    ///
    /// The raw field markers never leak to callers; the instruction string
    /// is the only parameter.
    pub fn add_toc_paragraph(&mut self, instruction: &str) -> &mut Paragraph {
        let para = self.add_paragraph();
        para.add_field(instruction);
        para
    }

    /// Get the paragraphs of this document.
    pub fn paragraphs(&self) -> &[Paragraph] {
        &self.body
    }

    /// Get the number of paragraphs in the document.
    pub fn paragraph_count(&self) -> usize {
        self.body.len()
    }

    /// Serialize the document to XML.
    ///
    /// The sectPr must be the last element in the body.
    pub fn to_xml(&self) -> Result<String> {
        let mut xml = String::with_capacity(4096);
        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push_str(r#"<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">"#);
        xml.push_str("<w:body>");

        for para in &self.body {
            para.to_xml(&mut xml)?;
        }

        self.write_section_properties(&mut xml)?;

        xml.push_str("</w:body>");
        xml.push_str("</w:document>");
        Ok(xml)
    }

    /// Generate section properties XML (page size and margins).
    fn write_section_properties(&self, xml: &mut String) -> Result<()> {
        xml.push_str("<w:sectPr>");

        write!(
            xml,
            r#"<w:pgSz w:w="{}" w:h="{}"/>"#,
            self.section.page_width, self.section.page_height
        )?;

        write!(
            xml,
            r#"<w:pgMar w:top="{}" w:right="{}" w:bottom="{}" w:left="{}" w:header="{}" w:footer="{}"/>"#,
            self.section.margin_top,
            self.section.margin_right,
            self.section.margin_bottom,
            self.section.margin_left,
            self.section.header_distance,
            self.section.footer_distance
        )?;

        xml.push_str("</w:sectPr>");
        Ok(())
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}
