//! Email extraction from flattened resume text.

use super::patterns::EMAIL_PATTERN;

/// Extract the best email candidate from the flattened text.
///
/// All matches are collected in text order. The first one that does not
/// contain "example" or "test" and contains a dot wins; when every match
/// fails that preference, the first raw match is kept.
pub fn extract_email(flat: &str) -> Option<String> {
    let candidates: Vec<&str> = EMAIL_PATTERN.find_iter(flat).map(|m| m.as_str()).collect();

    candidates
        .iter()
        .find(|c| !c.contains("example") && !c.contains("test") && c.contains('.'))
        .or_else(|| candidates.first())
        .map(|c| (*c).to_string())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_no_email_like_substring() {
        assert_eq!(extract_email("John Doe Software Developer"), None);
        assert_eq!(extract_email(""), None);
        assert_eq!(extract_email("reach me at john at doe dot com"), None);
    }

    #[test]
    fn test_single_well_formed_email_unchanged() {
        assert_eq!(
            extract_email("Contact: john.doe@email.com Phone: 123"),
            Some("john.doe@email.com".to_string())
        );
    }

    #[test]
    fn test_placeholder_addresses_deprioritized() {
        let text = "template@example.com test.user@mail.com sarah.j@company.com";
        assert_eq!(extract_email(text), Some("sarah.j@company.com".to_string()));
    }

    #[test]
    fn test_falls_back_to_first_raw_match() {
        let text = "only contact is admin@test.com here";
        assert_eq!(extract_email(text), Some("admin@test.com".to_string()));
    }

    #[test]
    fn test_first_acceptable_match_wins() {
        let text = "a.early@first.com b.late@second.com";
        assert_eq!(extract_email(text), Some("a.early@first.com".to_string()));
    }
}
