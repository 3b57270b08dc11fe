/// Style definitions for generated documents.
///
/// Only paragraph styles are needed here: the base style, the document
/// title, and the heading levels the table of contents collects.
use crate::error::Result;
use std::fmt::Write as FmtWrite;

/// A paragraph style definition.
#[derive(Debug, Clone)]
pub struct Style {
    /// Style identifier (e.g., "Heading1")
    style_id: String,
    /// UI-visible name (e.g., "heading 1")
    name: String,
    /// Whether this is the default paragraph style
    is_default: bool,
    /// ID of the style this is based on
    based_on: Option<String>,
    /// UI priority for display ordering (lower = higher priority)
    priority: Option<i32>,
    /// Whether to show in the quick style gallery
    quick_style: bool,
    /// Font family name
    font_name: Option<String>,
    /// Font size in half-points (e.g., 28 = 14pt)
    font_size: Option<u32>,
    /// Font color (RGB hex, e.g., "2F5496")
    color: Option<String>,
    /// Space before paragraph in twips
    space_before: Option<u32>,
    /// Space after paragraph in twips
    space_after: Option<u32>,
}

impl Style {
    /// Create a new paragraph style with the given ID and name.
    pub fn new(style_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            style_id: style_id.into(),
            name: name.into(),
            is_default: false,
            based_on: None,
            priority: None,
            quick_style: false,
            font_name: None,
            font_size: None,
            color: None,
            space_before: None,
            space_after: None,
        }
    }

    /// Get the style identifier.
    #[inline]
    pub fn style_id(&self) -> &str {
        &self.style_id
    }

    /// Generate XML for this style.
    pub(crate) fn to_xml(&self) -> Result<String> {
        let mut xml = String::with_capacity(512);

        write!(
            &mut xml,
            r#"<w:style w:type="paragraph" w:styleId="{}""#,
            escape_xml(&self.style_id)
        )?;
        if self.is_default {
            xml.push_str(r#" w:default="1""#);
        }
        xml.push('>');

        write!(&mut xml, r#"<w:name w:val="{}"/>"#, escape_xml(&self.name))?;

        if let Some(ref based_on) = self.based_on {
            write!(&mut xml, r#"<w:basedOn w:val="{}"/>"#, escape_xml(based_on))?;
        }

        if let Some(priority) = self.priority {
            write!(&mut xml, r#"<w:uiPriority w:val="{}"/>"#, priority)?;
        }

        if self.quick_style {
            xml.push_str("<w:qFormat/>");
        }

        if self.space_before.is_some() || self.space_after.is_some() {
            xml.push_str("<w:pPr><w:spacing");
            if let Some(before) = self.space_before {
                write!(&mut xml, r#" w:before="{}""#, before)?;
            }
            if let Some(after) = self.space_after {
                write!(&mut xml, r#" w:after="{}""#, after)?;
            }
            xml.push_str("/></w:pPr>");
        }

        let has_run_props =
            self.font_name.is_some() || self.font_size.is_some() || self.color.is_some();

        if has_run_props {
            xml.push_str("<w:rPr>");

            if let Some(ref font_name) = self.font_name {
                write!(
                    &mut xml,
                    r#"<w:rFonts w:ascii="{}" w:hAnsi="{}" w:cs="{}"/>"#,
                    escape_xml(font_name),
                    escape_xml(font_name),
                    escape_xml(font_name)
                )?;
            }

            if let Some(size) = self.font_size {
                write!(&mut xml, r#"<w:sz w:val="{}"/>"#, size)?;
                write!(&mut xml, r#"<w:szCs w:val="{}"/>"#, size)?;
            }

            if let Some(ref color) = self.color {
                write!(&mut xml, r#"<w:color w:val="{}"/>"#, escape_xml(color))?;
            }

            xml.push_str("</w:rPr>");
        }

        xml.push_str("</w:style>");

        Ok(xml)
    }

    /// Create the "Normal" paragraph style (base style).
    pub fn normal() -> Self {
        let mut style = Self::new("Normal", "Normal");
        style.is_default = true;
        style.font_name = Some("Calibri".to_string());
        style.font_size = Some(22); // 11pt
        style
    }

    /// Create the "Title" style.
    pub fn title() -> Self {
        let mut style = Self::new("Title", "Title");
        style.based_on = Some("Normal".to_string());
        style.font_name = Some("Calibri Light".to_string());
        style.font_size = Some(56); // 28pt
        style.space_after = Some(0);
        style.priority = Some(10);
        style.quick_style = true;
        style
    }

    /// Create the "Heading 1" style.
    pub fn heading_1() -> Self {
        let mut style = Self::new("Heading1", "heading 1");
        style.based_on = Some("Normal".to_string());
        style.font_name = Some("Calibri Light".to_string());
        style.font_size = Some(32); // 16pt
        style.color = Some("2F5496".to_string());
        style.space_before = Some(240); // 12pt before
        style.space_after = Some(0);
        style.priority = Some(9);
        style.quick_style = true;
        style
    }

    /// Create the "Heading 2" style.
    pub fn heading_2() -> Self {
        let mut style = Self::new("Heading2", "heading 2");
        style.based_on = Some("Normal".to_string());
        style.font_name = Some("Calibri Light".to_string());
        style.font_size = Some(26); // 13pt
        style.color = Some("2F5496".to_string());
        style.space_before = Some(40); // 2pt before
        style.space_after = Some(0);
        style.priority = Some(9);
        style.quick_style = true;
        style
    }

    /// Create the "Heading 3" style.
    pub fn heading_3() -> Self {
        let mut style = Self::new("Heading3", "heading 3");
        style.based_on = Some("Normal".to_string());
        style.font_name = Some("Calibri Light".to_string());
        style.font_size = Some(24); // 12pt
        style.color = Some("1F3763".to_string());
        style.space_before = Some(40);
        style.space_after = Some(0);
        style.priority = Some(9);
        style.quick_style = true;
        style
    }
}

/// Escape XML special characters.
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

/// Generate a complete styles.xml document from a list of styles.
pub fn generate_styles_xml(styles: &[Style]) -> Result<String> {
    let mut xml = String::with_capacity(4096);

    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    xml.push_str(
        r#"<w:styles xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main" "#,
    );
    xml.push_str(
        r#"xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">"#,
    );

    xml.push_str("<w:docDefaults>");
    xml.push_str("<w:rPrDefault><w:rPr>");
    xml.push_str(r#"<w:rFonts w:ascii="Calibri" w:hAnsi="Calibri" w:cs="Calibri"/>"#);
    xml.push_str(r#"<w:sz w:val="22"/>"#);
    xml.push_str(r#"<w:szCs w:val="22"/>"#);
    xml.push_str("</w:rPr></w:rPrDefault>");
    xml.push_str("<w:pPrDefault/>");
    xml.push_str("</w:docDefaults>");

    for style in styles {
        let style_xml = style.to_xml()?;
        xml.push_str(&style_xml);
    }

    xml.push_str("</w:styles>");

    Ok(xml)
}

/// The style set shipped with every generated document: the base style,
/// the title, and the heading levels the TOC field collects (1-3).
pub fn default_styles() -> Vec<Style> {
    vec![
        Style::normal(),
        Style::title(),
        Style::heading_1(),
        Style::heading_2(),
        Style::heading_3(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normal_style_is_default() {
        let xml = Style::normal().to_xml().unwrap();
        assert!(xml.contains(r#"w:styleId="Normal""#));
        assert!(xml.contains(r#"w:default="1""#));
    }

    #[test]
    fn test_heading_style_xml() {
        let xml = Style::heading_1().to_xml().unwrap();
        assert!(xml.contains(r#"w:styleId="Heading1""#));
        assert!(xml.contains(r#"<w:basedOn w:val="Normal"/>"#));
        assert!(xml.contains(r#"<w:sz w:val="32"/>"#));
        assert!(xml.contains(r#"<w:color w:val="2F5496"/>"#));
        assert!(xml.contains("<w:qFormat/>"));
    }

    #[test]
    fn test_generate_styles_xml() {
        let xml = generate_styles_xml(&default_styles()).unwrap();
        assert!(xml.contains("<?xml version"));
        assert!(xml.contains("<w:docDefaults>"));
        assert!(xml.contains("Normal"));
        assert!(xml.contains("Title"));
        assert!(xml.contains("Heading1"));
        assert!(xml.contains("Heading3"));
        assert!(xml.contains("</w:styles>"));
    }

    #[test]
    fn test_xml_escaping() {
        let xml = Style::new("Test<>&", "Name\"'").to_xml().unwrap();
        assert!(xml.contains("&lt;"));
        assert!(xml.contains("&amp;"));
        assert!(xml.contains("&quot;"));
    }
}
