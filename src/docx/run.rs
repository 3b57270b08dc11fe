/// Run types and serialization for generated documents.
use crate::error::Result;
use std::fmt::Write as FmtWrite;

/// Escape XML special characters.
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

/// Run content type.
#[derive(Debug, Clone)]
pub enum RunContent {
    /// Plain text
    Text(String),
    /// Page break
    PageBreak,
    /// Dynamic field evaluated by the word processor on open/refresh.
    ///
    /// Serialized as a field-begin marker, the instruction text, and a
    /// field-end marker inside this single run.
    Field {
        /// Field instruction (e.g. `TOC \o "1-3" \h \z \u`)
        instruction: String,
    },
}

/// A run of text with character formatting.
#[derive(Debug)]
pub struct Run {
    /// Run content
    pub(crate) content: RunContent,
    /// Run properties
    pub(crate) properties: RunProperties,
}

impl Run {
    pub(crate) fn new() -> Self {
        Self {
            content: RunContent::Text(String::new()),
            properties: RunProperties::default(),
        }
    }

    /// Set the text content.
    pub fn set_text(&mut self, text: &str) {
        self.content = RunContent::Text(text.to_string());
    }

    /// Get the text content. Non-text runs yield an empty string.
    pub fn text(&self) -> &str {
        match &self.content {
            RunContent::Text(s) => s,
            _ => "",
        }
    }

    /// Get the run content.
    pub fn content(&self) -> &RunContent {
        &self.content
    }

    /// Set font name.
    pub fn font_name(&mut self, name: &str) -> &mut Self {
        self.properties.font_name = Some(name.to_string());
        self
    }

    /// Set font size in half-points (e.g., 28 = 14pt).
    pub fn font_size(&mut self, size: u32) -> &mut Self {
        self.properties.font_size = Some(size);
        self
    }

    /// Turn this run into a page break.
    pub fn add_page_break(&mut self) -> &mut Self {
        self.content = RunContent::PageBreak;
        self
    }

    /// Turn this run into a dynamic field with the given instruction.
    pub fn set_field(&mut self, instruction: &str) -> &mut Self {
        self.content = RunContent::Field {
            instruction: instruction.to_string(),
        };
        self
    }

    pub(crate) fn to_xml(&self, xml: &mut String) -> Result<()> {
        xml.push_str("<w:r>");

        // Write run properties
        if self.properties.has_properties() {
            xml.push_str("<w:rPr>");

            if let Some(ref font_name) = self.properties.font_name {
                write!(
                    xml,
                    "<w:rFonts w:ascii=\"{}\" w:hAnsi=\"{}\"/>",
                    escape_xml(font_name),
                    escape_xml(font_name)
                )?;
            }

            if let Some(size) = self.properties.font_size {
                write!(xml, "<w:sz w:val=\"{}\"/>", size)?;
                write!(xml, "<w:szCs w:val=\"{}\"/>", size)?;
            }

            xml.push_str("</w:rPr>");
        }

        // Write content based on type
        match &self.content {
            RunContent::Text(text) if !text.is_empty() => {
                write!(
                    xml,
                    "<w:t xml:space=\"preserve\">{}</w:t>",
                    escape_xml(text)
                )?;
            },
            RunContent::PageBreak => {
                xml.push_str("<w:br w:type=\"page\"/>");
            },
            RunContent::Field { instruction } => {
                // The begin/instruction/end markers are interleaved within
                // this one run; the field result is produced by the word
                // processor, not written here.
                xml.push_str("<w:fldChar w:fldCharType=\"begin\"/>");
                write!(
                    xml,
                    "<w:instrText xml:space=\"preserve\">{}</w:instrText>",
                    escape_xml(instruction)
                )?;
                xml.push_str("<w:fldChar w:fldCharType=\"end\"/>");
            },
            _ => {},
        }

        xml.push_str("</w:r>");

        Ok(())
    }
}

/// Run properties.
#[derive(Debug, Default)]
pub(crate) struct RunProperties {
    pub(crate) font_name: Option<String>,
    pub(crate) font_size: Option<u32>,
}

impl RunProperties {
    pub(crate) fn has_properties(&self) -> bool {
        self.font_name.is_some() || self.font_size.is_some()
    }
}
