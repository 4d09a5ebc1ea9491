//! Candidate profile extracted from resume text.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Contact details recovered from one resume.
///
/// Every field is present only when a strategy positively matched it; an
/// unresolved field is `None`, never an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateProfile {
    /// Candidate's full name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Email address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Phone number, canonicalized when it could be normalized to 10 digits.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// Flattened normalized text the fields were extracted from, retained
    /// for downstream storage and display.
    pub raw_text: String,
}

impl CandidateProfile {
    /// Fields that could not be resolved, in declaration order.
    pub fn missing_fields(&self) -> Vec<ProfileField> {
        ProfileField::ALL
            .into_iter()
            .filter(|field| self.get(*field).is_none())
            .collect()
    }

    /// True when all three contact fields resolved.
    pub fn is_complete(&self) -> bool {
        self.name.is_some() && self.email.is_some() && self.phone.is_some()
    }

    /// Value of one field slot.
    pub fn get(&self, field: ProfileField) -> Option<&str> {
        match field {
            ProfileField::Name => self.name.as_deref(),
            ProfileField::Email => self.email.as_deref(),
            ProfileField::Phone => self.phone.as_deref(),
        }
    }
}

/// One of the three contact field slots extraction tries to fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileField {
    Name,
    Email,
    Phone,
}

impl ProfileField {
    /// All fields, in the order they appear on the profile.
    pub const ALL: [ProfileField; 3] = [
        ProfileField::Name,
        ProfileField::Email,
        ProfileField::Phone,
    ];

    /// Lowercase field name, matching the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProfileField::Name => "name",
            ProfileField::Email => "email",
            ProfileField::Phone => "phone",
        }
    }
}

impl fmt::Display for ProfileField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_missing_fields_empty_profile() {
        let profile = CandidateProfile::default();
        assert_eq!(
            profile.missing_fields(),
            vec![ProfileField::Name, ProfileField::Email, ProfileField::Phone]
        );
        assert!(!profile.is_complete());
    }

    #[test]
    fn test_missing_fields_partial_profile() {
        let profile = CandidateProfile {
            name: Some("John Doe".to_string()),
            email: Some("john.doe@email.com".to_string()),
            phone: None,
            raw_text: String::new(),
        };
        assert_eq!(profile.missing_fields(), vec![ProfileField::Phone]);
        assert!(!profile.is_complete());
    }

    #[test]
    fn test_complete_profile() {
        let profile = CandidateProfile {
            name: Some("John Doe".to_string()),
            email: Some("john.doe@email.com".to_string()),
            phone: Some("(123) 456-7890".to_string()),
            raw_text: String::new(),
        };
        assert!(profile.missing_fields().is_empty());
        assert!(profile.is_complete());
    }

    #[test]
    fn test_absent_fields_skipped_in_json() {
        let profile = CandidateProfile {
            name: Some("John Doe".to_string()),
            email: None,
            phone: None,
            raw_text: "John Doe".to_string(),
        };
        let json = serde_json::to_string(&profile).unwrap();
        assert!(json.contains("\"name\""));
        assert!(!json.contains("\"email\""));
        assert!(!json.contains("\"phone\""));
    }

    #[test]
    fn test_field_names_match_serialized_form() {
        for field in ProfileField::ALL {
            let json = serde_json::to_string(&field).unwrap();
            assert_eq!(json, format!("\"{}\"", field.as_str()));
        }
    }
}
