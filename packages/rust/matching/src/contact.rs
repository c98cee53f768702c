//! Email and phone extraction. Shape matching only, first match wins.

use std::sync::LazyLock;

use regex::Regex;

use screener_shared::ContactInfo;

/// First email-shaped substring of `text`.
pub fn extract_email(text: &str) -> Option<String> {
    static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
        Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}").expect("valid regex")
    });

    EMAIL_RE.find(text).map(|m| m.as_str().to_string())
}

/// First phone-shaped substring of `text`: optional `+`, then at least nine
/// digits, spaces, or hyphens, starting and ending on a digit.
pub fn extract_phone(text: &str) -> Option<String> {
    static PHONE_RE: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"\+?\d[\d\s-]{7,}\d").expect("valid regex"));

    PHONE_RE.find(text).map(|m| m.as_str().to_string())
}

/// Extract both contact fields.
pub fn extract_contact(text: &str) -> ContactInfo {
    ContactInfo {
        email: extract_email(text),
        phone: extract_phone(text),
    }
}
