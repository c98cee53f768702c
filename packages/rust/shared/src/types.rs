//! Core domain types for a single screening request.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScreenerError};

/// Sentinel shown and logged for a contact field that could not be extracted.
pub const NOT_FOUND: &str = "Not found";

// ---------------------------------------------------------------------------
// DocumentFormat / ResumeDocument
// ---------------------------------------------------------------------------

/// Supported resume document formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentFormat {
    Pdf,
    Docx,
}

impl DocumentFormat {
    /// Select the format from the file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);

        match ext.as_deref() {
            Some("pdf") => Ok(Self::Pdf),
            Some("docx") => Ok(Self::Docx),
            Some(other) => Err(ScreenerError::read(
                path,
                format!("unsupported document format '.{other}' (expected .pdf or .docx)"),
            )),
            None => Err(ScreenerError::read(
                path,
                "missing file extension (expected .pdf or .docx)",
            )),
        }
    }
}

impl std::fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pdf => write!(f, "pdf"),
            Self::Docx => write!(f, "docx"),
        }
    }
}

/// Plain text extracted from an uploaded resume. Immutable once read.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeDocument {
    /// File name (no directory) of the source document.
    pub filename: String,
    /// Path the document was read from.
    pub path: PathBuf,
    /// Extracted text content.
    pub text: String,
    /// Format the text was extracted as.
    pub format: DocumentFormat,
}

// ---------------------------------------------------------------------------
// SkillSet
// ---------------------------------------------------------------------------

/// A set of lowercase skill terms.
///
/// Iteration is lexicographic so output is stable between runs; nothing
/// downstream depends on the order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SkillSet(BTreeSet<String>);

impl SkillSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a term, trimmed and lowercased. Empty terms are ignored.
    /// Returns `true` if the term was not already present.
    pub fn insert(&mut self, term: impl AsRef<str>) -> bool {
        let term = term.as_ref().trim();
        if term.is_empty() {
            return false;
        }
        self.0.insert(term.to_lowercase())
    }

    pub fn contains(&self, term: &str) -> bool {
        self.0.contains(term)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// `true` if every term of `self` is also in `other`.
    pub fn is_subset(&self, other: &SkillSet) -> bool {
        self.0.is_subset(&other.0)
    }

    /// Join all terms with `sep`.
    pub fn join(&self, sep: &str) -> String {
        self.iter().collect::<Vec<_>>().join(sep)
    }
}

impl<S: AsRef<str>> FromIterator<S> for SkillSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<S: AsRef<str>> Extend<S> for SkillSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for term in iter {
            self.insert(term);
        }
    }
}

impl<'a> IntoIterator for &'a SkillSet {
    type Item = &'a String;
    type IntoIter = std::collections::btree_set::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

// ---------------------------------------------------------------------------
// MatchResult
// ---------------------------------------------------------------------------

/// Skills found in a resume, and the resulting percentage score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Subset of the skill set found in the resume text.
    pub matched: SkillSet,
    /// Size of the skill set matched against.
    pub total: usize,
    /// `matched / total * 100`, or `0.0` when `total == 0`.
    pub score: f64,
}

impl MatchResult {
    pub fn new(matched: SkillSet, total: usize) -> Self {
        let score = if total == 0 {
            0.0
        } else {
            matched.len() as f64 / total as f64 * 100.0
        };
        Self {
            matched,
            total,
            score,
        }
    }

    pub fn matched_count(&self) -> usize {
        self.matched.len()
    }

    /// Score rounded to two decimal places, as logged.
    pub fn rounded_score(&self) -> f64 {
        (self.score * 100.0).round() / 100.0
    }
}

// ---------------------------------------------------------------------------
// ContactInfo
// ---------------------------------------------------------------------------

/// Contact fields pulled from resume text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl ContactInfo {
    /// Email address, or [`NOT_FOUND`].
    pub fn email_or_sentinel(&self) -> &str {
        self.email.as_deref().unwrap_or(NOT_FOUND)
    }

    /// Phone number, or [`NOT_FOUND`].
    pub fn phone_or_sentinel(&self) -> &str {
        self.phone.as_deref().unwrap_or(NOT_FOUND)
    }
}
