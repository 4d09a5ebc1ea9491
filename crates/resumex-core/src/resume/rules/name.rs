//! Name extraction strategies, tried in fixed order.

use regex::Regex;

use crate::resume::normalize::NormalizedText;

use super::patterns::{
    NAME_AFTER_CV_LABEL, NAME_AFTER_RESUME_LABEL, NAME_AT_TEXT_START, NAME_CAPITALIZED_LINE,
    NAME_OWN_LINE,
};

/// Header lines scanned by the line-based strategies.
const HEADER_LINES: usize = 5;

type Strategy = fn(&NormalizedText) -> Option<String>;

/// Extract a candidate name.
///
/// Line-based strategies run over the first header lines, indicator patterns
/// over the flattened text, and the email local part is the last resort.
/// First success wins; there is no scoring across strategies.
pub fn extract_name(text: &NormalizedText, email: Option<&str>) -> Option<String> {
    const STRATEGIES: [Strategy; 3] = [capitalized_line, all_caps_header, indicator_pattern];

    STRATEGIES
        .into_iter()
        .find_map(|strategy| strategy(text))
        .or_else(|| email.and_then(email_local_part))
}

/// A header line made of 2-4 capitalized words, longer than 4 characters.
fn capitalized_line(text: &NormalizedText) -> Option<String> {
    for line in text.lines.iter().take(HEADER_LINES) {
        if let Some(m) = NAME_CAPITALIZED_LINE.captures(line).and_then(|c| c.get(1)) {
            if m.as_str().len() > 4 {
                return Some(m.as_str().to_string());
            }
        }
    }
    None
}

/// An entirely uppercase header line of 2-4 words, returned in proper case.
fn all_caps_header(text: &NormalizedText) -> Option<String> {
    for line in text.lines.iter().take(HEADER_LINES) {
        let words: Vec<&str> = line.split_whitespace().collect();
        if (2..=4).contains(&words.len()) && *line == line.to_uppercase() {
            let name = words
                .iter()
                .map(|word| proper_case(word))
                .collect::<Vec<_>>()
                .join(" ");
            return Some(name);
        }
    }
    None
}

/// Indicator patterns over the flattened text, in priority order.
fn indicator_pattern(text: &NormalizedText) -> Option<String> {
    let patterns: [&Regex; 4] = [
        &NAME_OWN_LINE,
        &NAME_AFTER_RESUME_LABEL,
        &NAME_AFTER_CV_LABEL,
        &NAME_AT_TEXT_START,
    ];

    for pattern in patterns {
        if let Some(m) = pattern.captures(&text.flat).and_then(|c| c.get(1)) {
            return Some(m.as_str().to_string());
        }
    }
    None
}

/// Derive a name from the email local part: split on `.`/`_`, title-case
/// each piece. Accepted only when longer than 3 characters.
fn email_local_part(email: &str) -> Option<String> {
    let (local, _) = email.split_once('@')?;
    let name = local
        .split(['.', '_'])
        .map(title_case)
        .collect::<Vec<_>>()
        .join(" ");

    (name.len() > 3).then_some(name)
}

/// First character kept as-is, the rest lowered.
fn proper_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => format!("{}{}", first, chars.as_str().to_lowercase()),
        None => String::new(),
    }
}

/// First character raised, the rest lowered.
fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => format!("{}{}", first.to_uppercase(), chars.as_str().to_lowercase()),
        None => String::new(),
    }
}
