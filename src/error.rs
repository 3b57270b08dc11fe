/// Error types for document generation.
use thiserror::Error;

/// Result type for document generation operations.
pub type Result<T> = std::result::Result<T, DocxError>;

/// Error types for document generation.
#[derive(Error, Debug)]
pub enum DocxError {
    /// XML serialization error
    #[error("XML error: {0}")]
    Xml(String),

    /// Invalid format
    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    /// ZIP packaging error
    #[error("ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<std::fmt::Error> for DocxError {
    fn from(err: std::fmt::Error) -> Self {
        DocxError::Xml(err.to_string())
    }
}
