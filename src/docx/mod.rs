//! In-memory WordprocessingML document model and OOXML serialization.
//!
//! This module provides the writer API for building Word documents: a
//! body of paragraphs with runs, one page-geometry section, heading
//! styles, and dynamic fields such as the table of contents.

pub mod doc;
pub mod package;
pub mod paragraph;
pub mod run;
pub mod section;
pub mod style;
pub mod toc;

// Re-export main document type
pub use doc::Document;

// Re-export paragraph types
pub use paragraph::{LineSpacing, Paragraph, ParagraphAlignment};

// Re-export run types
pub use run::{Run, RunContent};

// Re-export section types
pub use section::SectionProperties;

// Re-export style types
pub use style::{Style, generate_styles_xml};

// Re-export TOC types
pub use toc::TableOfContents;
