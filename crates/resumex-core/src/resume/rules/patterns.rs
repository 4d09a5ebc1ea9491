//! Common regex patterns for resume field extraction.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Name patterns
    pub static ref NAME_CAPITALIZED_LINE: Regex = Regex::new(
        r"^([A-Z][a-z]+(?:\s+[A-Z][a-z]+){1,3})$"
    ).unwrap();

    // Indicator patterns over the flattened text, tried in order. The label
    // match is case-insensitive but the captured name is not, so "resume:
    // jane doe" never yields a name.
    pub static ref NAME_OWN_LINE: Regex = Regex::new(
        r"(?:^|\n)([A-Z][a-z]+ [A-Z][a-z]+)(?:\n|$)"
    ).unwrap();

    pub static ref NAME_AFTER_RESUME_LABEL: Regex = Regex::new(
        r"(?i:resume)[:\s-]*([A-Z][a-z]+ [A-Z][a-z]+)"
    ).unwrap();

    pub static ref NAME_AFTER_CV_LABEL: Regex = Regex::new(
        r"(?i:cv)[:\s-]*([A-Z][a-z]+ [A-Z][a-z]+)"
    ).unwrap();

    pub static ref NAME_AT_TEXT_START: Regex = Regex::new(
        r"(?m)^([A-Z][a-z]+ [A-Z][a-z]+)"
    ).unwrap();

    // Email pattern
    pub static ref EMAIL_PATTERN: Regex = Regex::new(
        r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}"
    ).unwrap();

    // Phone number families, tried in order
    pub static ref PHONE_INTERNATIONAL: Regex = Regex::new(
        r"(\+?\d{1,3}[-.\s]?)?\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}"
    ).unwrap();

    pub static ref PHONE_PARENTHESIZED: Regex = Regex::new(
        r"\(\d{3}\)\s?\d{3}[-.\s]?\d{4}"
    ).unwrap();

    pub static ref PHONE_DASHED: Regex = Regex::new(
        r"\d{3}[-.\s]?\d{3}[-.\s]?\d{4}"
    ).unwrap();

    pub static ref PHONE_BARE_DIGITS: Regex = Regex::new(
        r"\d{10}"
    ).unwrap();

    // Labeled phone fallback, one pattern per label, tried in order
    pub static ref PHONE_LABEL: Regex = Regex::new(
        r"(?i)phone[:\s]+([^\n]+)"
    ).unwrap();

    pub static ref TEL_LABEL: Regex = Regex::new(
        r"(?i)tel[:\s]+([^\n]+)"
    ).unwrap();

    pub static ref MOBILE_LABEL: Regex = Regex::new(
        r"(?i)mobile[:\s]+([^\n]+)"
    ).unwrap();

    pub static ref CONTACT_LABEL: Regex = Regex::new(
        r"(?i)contact[:\s]+([^\n]+)"
    ).unwrap();
}
