//! OPC package writer for generated documents.
//!
//! Serializes a [`Document`] into the .docx container: the ZIP archive
//! holding `[Content_Types].xml`, the package relationships, the main
//! document part, and the styles part.

use crate::docx::Document;
use crate::docx::style::{default_styles, generate_styles_xml};
use crate::error::Result;
use std::io::{Cursor, Write};
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

/// Content type of the main document part.
pub const WML_DOCUMENT_MAIN: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml";
/// Content type of the styles part.
const WML_STYLES: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.styles+xml";
/// Content type of OPC relationship parts.
const OPC_RELATIONSHIPS: &str = "application/vnd.openxmlformats-package.relationships+xml";
/// Content type of plain XML parts.
const XML: &str = "application/xml";

const OFFICE_DOCUMENT_RELTYPE: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument";
const STYLES_RELTYPE: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles";

/// Serialize a document to .docx bytes.
pub fn to_bytes(document: &Document) -> Result<Vec<u8>> {
    let document_xml = document.to_xml()?;
    let styles_xml = generate_styles_xml(&default_styles())?;

    let mut zip_data = Vec::new();
    {
        let cursor = Cursor::new(&mut zip_data);
        let mut writer = ZipWriter::new(cursor);
        let options = SimpleFileOptions::default();

        writer.start_file("[Content_Types].xml", options)?;
        writer.write_all(content_types_xml().as_bytes())?;

        writer.start_file("_rels/.rels", options)?;
        writer.write_all(package_rels_xml().as_bytes())?;

        writer.start_file("word/document.xml", options)?;
        writer.write_all(document_xml.as_bytes())?;

        writer.start_file("word/_rels/document.xml.rels", options)?;
        writer.write_all(document_rels_xml().as_bytes())?;

        writer.start_file("word/styles.xml", options)?;
        writer.write_all(styles_xml.as_bytes())?;

        writer.finish()?;
    }
    Ok(zip_data)
}

/// Generate the `[Content_Types].xml` part.
///
/// Extensions with a standard mapping go through Default elements; the
/// document-specific parts are declared as Overrides.
fn content_types_xml() -> String {
    let mut xml = String::with_capacity(1024);

    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    xml.push('\n');
    xml.push_str(r#"<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">"#);
    xml.push('\n');
    xml.push_str(&format!(
        r#"  <Default Extension="rels" ContentType="{}"/>"#,
        OPC_RELATIONSHIPS
    ));
    xml.push('\n');
    xml.push_str(&format!(r#"  <Default Extension="xml" ContentType="{}"/>"#, XML));
    xml.push('\n');
    xml.push_str(&format!(
        r#"  <Override PartName="/word/document.xml" ContentType="{}"/>"#,
        WML_DOCUMENT_MAIN
    ));
    xml.push('\n');
    xml.push_str(&format!(
        r#"  <Override PartName="/word/styles.xml" ContentType="{}"/>"#,
        WML_STYLES
    ));
    xml.push('\n');
    xml.push_str("</Types>");

    xml
}

/// Generate the package-level relationships (`_rels/.rels`).
fn package_rels_xml() -> String {
    rels_xml(OFFICE_DOCUMENT_RELTYPE, "word/document.xml")
}

/// Generate the main part relationships (`word/_rels/document.xml.rels`).
fn document_rels_xml() -> String {
    rels_xml(STYLES_RELTYPE, "styles.xml")
}

/// Generate a single-relationship rels part.
fn rels_xml(reltype: &str, target: &str) -> String {
    let mut xml = String::with_capacity(512);

    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    xml.push('\n');
    xml.push_str(
        r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#,
    );
    xml.push('\n');
    xml.push_str(&format!(
        r#"  <Relationship Id="rId1" Type="{}" Target="{}"/>"#,
        reltype, target
    ));
    xml.push('\n');
    xml.push_str("</Relationships>");

    xml
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    fn sample_document() -> Document {
        let mut doc = Document::new();
        doc.add_heading("Итоговый проект", 0).unwrap();
        doc.add_paragraph_with_text("Год: 2023");
        doc
    }

    #[test]
    fn test_package_is_a_zip_archive() {
        let bytes = to_bytes(&sample_document()).unwrap();
        assert!(bytes.starts_with(b"PK"));
    }

    #[test]
    fn test_package_contains_expected_parts() {
        let bytes = to_bytes(&sample_document()).unwrap();
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();

        for name in [
            "[Content_Types].xml",
            "_rels/.rels",
            "word/document.xml",
            "word/_rels/document.xml.rels",
            "word/styles.xml",
        ] {
            assert!(archive.by_name(name).is_ok(), "missing part: {name}");
        }
    }

    #[test]
    fn test_document_part_holds_body_content() {
        let bytes = to_bytes(&sample_document()).unwrap();
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();

        let mut document_xml = String::new();
        archive
            .by_name("word/document.xml")
            .unwrap()
            .read_to_string(&mut document_xml)
            .unwrap();
        assert!(document_xml.contains("Итоговый проект"));
        assert!(document_xml.contains("<w:sectPr>"));
    }

    #[test]
    fn test_content_types_declare_main_and_styles() {
        let xml = content_types_xml();
        assert!(xml.contains(r#"<Override PartName="/word/document.xml""#));
        assert!(xml.contains(r#"<Override PartName="/word/styles.xml""#));
        assert!(xml.contains(WML_DOCUMENT_MAIN));
    }
}
