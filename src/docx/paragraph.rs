/// Paragraph types and serialization for generated documents.
use crate::error::Result;
use std::fmt::Write as FmtWrite;

use super::run::Run;

/// Escape XML special characters.
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

/// Line spacing options for paragraphs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LineSpacing {
    /// Single line spacing
    Single,
    /// 1.5 line spacing
    OneAndHalf,
    /// Double line spacing
    Double,
    /// Multiple line spacing (e.g., 1.15)
    Multiple(f64),
}

impl LineSpacing {
    /// Line height in 240ths of a line (the `w:line` attribute value).
    pub(crate) fn line_value(&self) -> u32 {
        match self {
            Self::Single => 240,
            Self::OneAndHalf => 360,
            Self::Double => 480,
            Self::Multiple(factor) => (factor * 240.0) as u32,
        }
    }
}

/// Paragraph alignment options.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParagraphAlignment {
    Left,
    Center,
    Right,
    Justify,
}

impl ParagraphAlignment {
    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
            Self::Justify => "both",
        }
    }
}

/// A paragraph in a document.
#[derive(Debug)]
pub struct Paragraph {
    /// Runs in this paragraph
    pub(crate) runs: Vec<Run>,
    /// Paragraph style ID
    pub(crate) style: Option<String>,
    /// Paragraph properties
    pub(crate) properties: ParagraphProperties,
}

impl Paragraph {
    pub(crate) fn new() -> Self {
        Self {
            runs: Vec::new(),
            style: None,
            properties: ParagraphProperties::default(),
        }
    }

    /// Add a new run to the paragraph.
    pub fn add_run(&mut self) -> &mut Run {
        self.runs.push(Run::new());
        self.runs.last_mut().unwrap()
    }

    /// Add a run with text.
    pub fn add_run_with_text(&mut self, text: &str) -> &mut Run {
        let run = self.add_run();
        run.set_text(text);
        run
    }

    /// Add a run holding a dynamic field with the given instruction.
    pub fn add_field(&mut self, instruction: &str) -> &mut Run {
        let run = self.add_run();
        run.set_field(instruction);
        run
    }

    /// Set the paragraph style.
    pub fn set_style(&mut self, style_id: &str) {
        self.style = Some(style_id.to_string());
    }

    /// Get the paragraph style ID, if any.
    pub fn style(&self) -> Option<&str> {
        self.style.as_deref()
    }

    /// Set paragraph alignment.
    pub fn set_alignment(&mut self, alignment: ParagraphAlignment) {
        self.properties.alignment = Some(alignment);
    }

    /// Set line spacing for this paragraph.
    pub fn set_line_spacing(&mut self, spacing: LineSpacing) {
        self.properties.line_spacing = Some(spacing);
    }

    /// Set first line indentation (in inches).
    pub fn set_indent_first_line(&mut self, inches: f64) {
        self.properties.indent_first_line = Some((inches * 1440.0) as i32);
    }

    /// Get the runs of this paragraph.
    pub fn runs(&self) -> &[Run] {
        &self.runs
    }

    /// Get mutable access to the runs of this paragraph.
    pub fn runs_mut(&mut self) -> &mut [Run] {
        &mut self.runs
    }

    /// Concatenated text of all text runs.
    pub fn text(&self) -> String {
        self.runs.iter().map(Run::text).collect()
    }

    pub(crate) fn to_xml(&self, xml: &mut String) -> Result<()> {
        xml.push_str("<w:p>");

        // Write paragraph properties
        if self.style.is_some() || self.properties.has_properties() {
            xml.push_str("<w:pPr>");

            if let Some(ref style) = self.style {
                write!(xml, "<w:pStyle w:val=\"{}\"/>", escape_xml(style))?;
            }

            if let Some(alignment) = self.properties.alignment {
                write!(xml, "<w:jc w:val=\"{}\"/>", alignment.as_str())?;
            }

            if let Some(ref line_spacing) = self.properties.line_spacing {
                write!(
                    xml,
                    "<w:spacing w:line=\"{}\" w:lineRule=\"auto\"/>",
                    line_spacing.line_value()
                )?;
            }

            if let Some(first_line) = self.properties.indent_first_line {
                if first_line >= 0 {
                    write!(xml, "<w:ind w:firstLine=\"{}\"/>", first_line)?;
                } else {
                    write!(xml, "<w:ind w:hanging=\"{}\"/>", -first_line)?;
                }
            }

            xml.push_str("</w:pPr>");
        }

        for run in &self.runs {
            run.to_xml(xml)?;
        }

        xml.push_str("</w:p>");
        Ok(())
    }
}

/// Paragraph properties.
#[derive(Debug, Default)]
pub(crate) struct ParagraphProperties {
    pub(crate) alignment: Option<ParagraphAlignment>,
    pub(crate) line_spacing: Option<LineSpacing>,
    pub(crate) indent_first_line: Option<i32>,
}

impl ParagraphProperties {
    pub(crate) fn has_properties(&self) -> bool {
        self.alignment.is_some() || self.line_spacing.is_some() || self.indent_first_line.is_some()
    }
}
