//! Text normalization producing the two derived forms extraction runs on.
//!
//! Decoded resume text arrives with mixed line endings, stray blank lines
//! and irregular spacing. Normalization is done once, up front, and yields
//! two views of the same text: a line-preserving form for strategies that
//! need line boundaries and a flattened form for strategies that scan one
//! buffer.

/// The two normalized forms derived from one raw text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedText {
    /// Line-preserving form: line endings unified, blank lines removed,
    /// every line trimmed.
    pub lines: Vec<String>,
    /// Flattened form: all whitespace runs collapsed to single spaces,
    /// leading and trailing whitespace trimmed.
    pub flat: String,
}

/// Normalize raw decoded text.
///
/// Steps: unify CRLF and CR to LF, drop blank lines and trim the rest for
/// the line form, collapse every whitespace run to one space for the flat
/// form. Both forms are fixpoints: normalizing either of them again changes
/// nothing.
pub fn normalize(raw: &str) -> NormalizedText {
    let unified = raw.replace("\r\n", "\n").replace('\r', "\n");

    let lines: Vec<String> = unified
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();

    let flat = unified.split_whitespace().collect::<Vec<_>>().join(" ");

    NormalizedText { lines, flat }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_unifies_line_endings() {
        let text = normalize("John Doe\r\nDeveloper\rjohn@x.com");
        assert_eq!(text.lines, vec!["John Doe", "Developer", "john@x.com"]);
        assert_eq!(text.flat, "John Doe Developer john@x.com");
    }

    #[test]
    fn test_drops_blank_lines_and_trims() {
        let text = normalize("  John Doe  \n\n\n   \nDeveloper\t\n");
        assert_eq!(text.lines, vec!["John Doe", "Developer"]);
    }

    #[test]
    fn test_flattens_whitespace_runs() {
        let text = normalize("John\t\tDoe \n\n  Developer");
        assert_eq!(text.flat, "John Doe Developer");
    }

    #[test]
    fn test_empty_and_whitespace_only_input() {
        assert_eq!(normalize("").flat, "");
        assert!(normalize("").lines.is_empty());
        assert_eq!(normalize(" \r\n \t \n ").flat, "");
        assert!(normalize(" \r\n \t \n ").lines.is_empty());
    }

    #[test]
    fn test_flat_form_is_a_fixpoint() {
        let raw = "  John Doe\r\n\r\nSoftware   Developer\rjohn.doe@email.com  ";
        let once = normalize(raw);
        let twice = normalize(&once.flat);
        assert_eq!(twice.flat, once.flat);
    }

    #[test]
    fn test_line_form_is_a_fixpoint() {
        let raw = "  John Doe \r\n\n  Software Developer\n\n";
        let once = normalize(raw);
        let again = normalize(&once.lines.join("\n"));
        assert_eq!(again.lines, once.lines);
        assert_eq!(again.flat, once.flat);
    }

    #[test]
    fn test_unicode_whitespace_collapses() {
        // Non-breaking space counts as whitespace like in the upstream
        // decoder output.
        let text = normalize("John\u{a0}Doe");
        assert_eq!(text.flat, "John Doe");
    }
}
