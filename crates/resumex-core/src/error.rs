//! Error types for the resumex-core library.

use thiserror::Error;

/// Errors raised at the document intake boundary.
///
/// Extraction itself never fails; fields it cannot resolve are absent in the
/// profile. Only a document that arrives broken or in an unsupported
/// container is rejected, before any extraction runs.
#[derive(Error, Debug)]
pub enum DocumentError {
    /// Upstream text extraction reported a failure for this document.
    #[error("text extraction failed: {reason}")]
    DecodeFailed { reason: String },

    /// The reported document type is outside the supported set.
    #[error("unsupported document format: {reported}")]
    UnsupportedFormat { reported: String },
}

/// Result type for the resumex library.
pub type Result<T> = std::result::Result<T, DocumentError>;
