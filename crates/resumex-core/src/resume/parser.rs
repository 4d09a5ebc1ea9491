//! Heuristic resume parser combining normalization and ordered strategies.

use tracing::{debug, info};

use crate::models::profile::CandidateProfile;

use super::normalize::normalize;
use super::rules::{extract_email, extract_name, extract_phone};
use super::ResumeParser;

/// Rule-based resume parser.
///
/// Stateless and cheap to construct; one instance can serve any number of
/// concurrent extractions.
#[derive(Debug, Clone, Copy)]
pub struct HeuristicResumeParser {
    /// Whether the email local part may serve as a name fallback.
    email_name_fallback: bool,
}

impl HeuristicResumeParser {
    /// Create a parser with default settings.
    pub fn new() -> Self {
        Self {
            email_name_fallback: true,
        }
    }

    /// Set whether a name may be derived from the email local part.
    pub fn with_email_name_fallback(mut self, enabled: bool) -> Self {
        self.email_name_fallback = enabled;
        self
    }
}

impl Default for HeuristicResumeParser {
    fn default() -> Self {
        Self::new()
    }
}

impl ResumeParser for HeuristicResumeParser {
    fn parse(&self, text: &str) -> CandidateProfile {
        info!("Parsing resume from {} characters of text", text.len());

        let normalized = normalize(text);

        // Email resolves first: the name chain may fall back to its local
        // part.
        let email = extract_email(&normalized.flat);
        let name_seed = if self.email_name_fallback {
            email.as_deref()
        } else {
            None
        };
        let name = extract_name(&normalized, name_seed);
        let phone = extract_phone(&normalized.flat);

        debug!(
            "Extraction finished: name={}, email={}, phone={}",
            name.is_some(),
            email.is_some(),
            phone.is_some()
        );

        CandidateProfile {
            name,
            email,
            phone,
            raw_text: normalized.flat,
        }
    }
}
