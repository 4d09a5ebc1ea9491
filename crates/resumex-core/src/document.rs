//! Intake contract with the upstream document decoder.
//!
//! Binary containers (PDF, DOCX) are decoded to plain text by an external
//! service. This module models what that service hands over: the container
//! format it reported and either a text blob or an explicit decode failure.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::DocumentError;

/// Container format a resume arrived in, as reported by the upload layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceFormat {
    Pdf,
    Docx,
    /// Anything outside the supported set; carries the reported label.
    Other(String),
}

impl SourceFormat {
    /// Map a MIME type reported by the upload layer.
    pub fn from_mime(mime: &str) -> Self {
        match mime {
            "application/pdf" => SourceFormat::Pdf,
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document" => {
                SourceFormat::Docx
            }
            other => SourceFormat::Other(other.to_string()),
        }
    }

    /// Map a file extension (without the dot, any case).
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "pdf" => SourceFormat::Pdf,
            "docx" => SourceFormat::Docx,
            other => SourceFormat::Other(other.to_string()),
        }
    }

    /// Whether the toolkit accepts text decoded from this format.
    pub fn is_supported(&self) -> bool {
        !matches!(self, SourceFormat::Other(_))
    }

    /// Short label for display and reports.
    pub fn label(&self) -> &str {
        match self {
            SourceFormat::Pdf => "pdf",
            SourceFormat::Docx => "docx",
            SourceFormat::Other(label) => label,
        }
    }
}

impl fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// What the decoder produced for one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeOutcome {
    /// The decoder recovered a text blob.
    Text(String),
    /// The decoder ran and failed; no text exists for this document.
    Failed { reason: String },
}

/// One decoded document handed to the extraction engine.
#[derive(Debug, Clone)]
pub struct DecodedDocument {
    /// Reported container format.
    pub source: SourceFormat,
    /// Decoder outcome.
    pub outcome: DecodeOutcome,
}

impl DecodedDocument {
    /// A successfully decoded document.
    pub fn text(source: SourceFormat, body: impl Into<String>) -> Self {
        Self {
            source,
            outcome: DecodeOutcome::Text(body.into()),
        }
    }

    /// A document whose decoding failed upstream.
    pub fn failed(source: SourceFormat, reason: impl Into<String>) -> Self {
        Self {
            source,
            outcome: DecodeOutcome::Failed {
                reason: reason.into(),
            },
        }
    }

    /// Admit the document for extraction and return its text.
    ///
    /// The format gate runs first: an unsupported container is rejected even
    /// if the decoder happened to produce text for it. A failed decode is
    /// rejected second, so extraction never runs over a sentinel string.
    pub fn text_for_extraction(&self) -> Result<&str, DocumentError> {
        if let SourceFormat::Other(label) = &self.source {
            return Err(DocumentError::UnsupportedFormat {
                reported: label.clone(),
            });
        }
        match &self.outcome {
            DecodeOutcome::Text(body) => Ok(body),
            DecodeOutcome::Failed { reason } => Err(DocumentError::DecodeFailed {
                reason: reason.clone(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_source_format_from_mime() {
        assert_eq!(SourceFormat::from_mime("application/pdf"), SourceFormat::Pdf);
        assert_eq!(
            SourceFormat::from_mime(
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            ),
            SourceFormat::Docx
        );
        assert_eq!(
            SourceFormat::from_mime("text/html"),
            SourceFormat::Other("text/html".to_string())
        );
    }

    #[test]
    fn test_source_format_from_extension() {
        assert_eq!(SourceFormat::from_extension("PDF"), SourceFormat::Pdf);
        assert_eq!(SourceFormat::from_extension("docx"), SourceFormat::Docx);
        assert!(!SourceFormat::from_extension("rtf").is_supported());
    }

    #[test]
    fn test_text_document_is_admitted() {
        let doc = DecodedDocument::text(SourceFormat::Pdf, "John Doe");
        assert_eq!(doc.text_for_extraction().unwrap(), "John Doe");
    }

    #[test]
    fn test_failed_decode_is_rejected() {
        let doc = DecodedDocument::failed(SourceFormat::Docx, "corrupt archive");
        let err = doc.text_for_extraction().unwrap_err();
        assert!(matches!(err, DocumentError::DecodeFailed { .. }));
        assert!(err.to_string().contains("corrupt archive"));
    }

    #[test]
    fn test_unsupported_format_is_rejected_before_outcome() {
        // Even a successful decode is rejected when the container is not
        // in the supported set.
        let doc = DecodedDocument::text(SourceFormat::Other("rtf".to_string()), "text body");
        let err = doc.text_for_extraction().unwrap_err();
        assert!(matches!(err, DocumentError::UnsupportedFormat { .. }));
    }

    #[test]
    fn test_serialized_label() {
        assert_eq!(serde_json::to_string(&SourceFormat::Pdf).unwrap(), "\"pdf\"");
        assert_eq!(SourceFormat::Docx.to_string(), "docx");
    }
}
