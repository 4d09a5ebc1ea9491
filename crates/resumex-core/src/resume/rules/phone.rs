//! Phone extraction with canonical reformatting.

use regex::Regex;

use super::patterns::{
    CONTACT_LABEL, MOBILE_LABEL, PHONE_BARE_DIGITS, PHONE_DASHED, PHONE_INTERNATIONAL,
    PHONE_LABEL, PHONE_PARENTHESIZED, TEL_LABEL,
};

/// Extract a phone number from the flattened text.
///
/// Four pattern families are tried in order; the first family with a match
/// wins and its first match is canonicalized. When no family matches, the
/// labeled fallback returns the rest of the line after a contact label.
pub fn extract_phone(flat: &str) -> Option<String> {
    let families: [&Regex; 4] = [
        &PHONE_INTERNATIONAL,
        &PHONE_PARENTHESIZED,
        &PHONE_DASHED,
        &PHONE_BARE_DIGITS,
    ];

    for family in families {
        if let Some(m) = family.find(flat) {
            return Some(canonicalize(m.as_str()));
        }
    }

    labeled_phone(flat)
}

/// Strip separators and apply the canonical `(XXX) XXX-XXXX` format.
///
/// 11 digits with a leading 1 lose the country code first; any digit count
/// other than 10 is returned as the bare digit string.
fn canonicalize(raw: &str) -> String {
    let mut digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();

    if digits.len() == 11 && digits.starts_with('1') {
        digits.remove(0);
    }

    if digits.len() == 10 {
        format!("({}) {}-{}", &digits[0..3], &digits[3..6], &digits[6..10])
    } else {
        digits
    }
}

/// Labeled fallback: the trimmed remainder after "Phone", "Tel", "Mobile"
/// or "Contact", verbatim. This path applies no digit normalization.
fn labeled_phone(flat: &str) -> Option<String> {
    let labels: [&Regex; 4] = [&PHONE_LABEL, &TEL_LABEL, &MOBILE_LABEL, &CONTACT_LABEL];

    for label in labels {
        if let Some(m) = label.captures(flat).and_then(|c| c.get(1)) {
            let value = m.as_str().trim();
            if !value.is_empty() {
                return Some(value.to_string());
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_parenthesized_number_canonicalized() {
        assert_eq!(
            extract_phone("John Doe (123) 456-7890 Developer"),
            Some("(123) 456-7890".to_string())
        );
    }

    #[test]
    fn test_dashed_number_canonicalized() {
        assert_eq!(
            extract_phone("Phone: 555-987-6543"),
            Some("(555) 987-6543".to_string())
        );
    }

    #[test]
    fn test_dotted_and_spaced_separators() {
        assert_eq!(
            extract_phone("call 555.987.6543 today"),
            Some("(555) 987-6543".to_string())
        );
        assert_eq!(
            extract_phone("call 555 987 6543 today"),
            Some("(555) 987-6543".to_string())
        );
    }

    #[test]
    fn test_bare_ten_digits_canonicalized() {
        assert_eq!(
            extract_phone("id 5551234567 on file"),
            Some("(555) 123-4567".to_string())
        );
    }

    #[test]
    fn test_international_number_loses_country_code() {
        assert_eq!(
            extract_phone("+1-555-123-4567"),
            Some("(555) 123-4567".to_string())
        );
    }

    #[test]
    fn test_long_digit_run_passes_through_unformatted() {
        // 12 digits: no canonical form applies, digits are kept as-is.
        assert_eq!(
            extract_phone("ref 123456789012"),
            Some("123456789012".to_string())
        );
    }

    #[test]
    fn test_labeled_fallback_is_verbatim() {
        // No family matches, so the label path returns the remainder with
        // its separators untouched.
        assert_eq!(
            extract_phone("Mobile: 555.12 ext"),
            Some("555.12 ext".to_string())
        );
    }

    #[test]
    fn test_label_priority_order() {
        assert_eq!(
            extract_phone("Tel: alpha Phone: beta"),
            Some("beta".to_string())
        );
    }

    #[test]
    fn test_label_with_no_remainder() {
        assert_eq!(extract_phone("Phone:"), None);
    }

    #[test]
    fn test_no_phone_evidence() {
        assert_eq!(extract_phone("John Doe Software Developer"), None);
        assert_eq!(extract_phone(""), None);
    }
}
