//! Proektgen - an HTTP service that assembles formatted school project
//! documents (.docx) from a topic string.
//!
//! The document is built in memory from a fixed structure - title page,
//! auto-updating table of contents, and five standard sections - then
//! serialized into the OOXML container and streamed back to the caller
//! as a download.
//!
//! # Example - building a document
//!
//! ```no_run
//! use proektgen::assembler;
//! use proektgen::docx::package;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let document = assembler::build("Экология города", None)?;
//! let bytes = package::to_bytes(&document)?;
//! std::fs::write("project.docx", bytes)?;
//! # Ok(())
//! # }
//! ```

/// Document assembly: the fixed element sequence for a topic
pub mod assembler;

/// Environment-driven configuration
pub mod config;

/// WordprocessingML document model and OOXML serialization
pub mod docx;

/// Error types for document generation
pub mod error;

/// Page geometry and the body paragraph formatting profile
pub mod layout;

/// HTTP boundary (router, handlers, error mapping)
pub mod server;

// Re-export commonly used types for convenience
pub use error::{DocxError, Result};
