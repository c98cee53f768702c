//! Word-boundary term patterns shared by the scorer and the highlighter.

use regex::{Regex, RegexBuilder};

use screener_shared::{Result, ScreenerError};

/// Compile `\b<term>\b`, case-insensitive, with `term` matched literally.
pub fn term_pattern(term: &str) -> Result<Regex> {
    RegexBuilder::new(&format!(r"\b{}\b", regex::escape(term)))
        .case_insensitive(true)
        .build()
        .map_err(|e| ScreenerError::Pattern(format!("term {term:?}: {e}")))
}
