//! Resume text matching: skill scoring, highlighting, and contact extraction.
//!
//! All matching is literal: a term matches where it occurs case-insensitively
//! between word boundaries. No stemming, fuzzy, or semantic matching.

pub mod contact;
pub mod highlight;
mod pattern;
pub mod scorer;

pub use contact::{extract_contact, extract_email, extract_phone};
pub use highlight::{Highlighter, MarkerStyle, escape_html};
pub use pattern::term_pattern;
pub use scorer::{SkillMatcher, match_skills};
