//! Resume field extraction module.

pub mod normalize;
mod parser;
pub mod rules;

pub use normalize::{normalize, NormalizedText};
pub use parser::HeuristicResumeParser;

use crate::document::DecodedDocument;
use crate::error::DocumentError;
use crate::models::profile::CandidateProfile;

/// Trait for resume parsers.
///
/// Extraction is total: `parse` always yields a profile, with unresolved
/// fields absent. Failures exist only at the document intake boundary.
pub trait ResumeParser {
    /// Extract contact details from decoded resume text.
    fn parse(&self, text: &str) -> CandidateProfile;

    /// Gate a decoder report, then run extraction on its text.
    ///
    /// Unsupported container formats and failed decodes are rejected before
    /// any extraction work happens.
    fn parse_document(
        &self,
        document: &DecodedDocument,
    ) -> Result<CandidateProfile, DocumentError> {
        let text = document.text_for_extraction()?;
        Ok(self.parse(text))
    }
}
