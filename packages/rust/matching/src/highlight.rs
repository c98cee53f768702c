//! Resume highlighting.
//!
//! Matches are computed once over the input as non-overlapping spans. Terms
//! are tried longest first, and a match only claims its span if no longer
//! term already claimed an overlapping one, so a short term never splits a
//! longer phrase that contains it. A term already wrapped in this style's
//! markers is left alone, which makes highlighting idempotent. Marker pairs
//! around anything other than a single term match are ordinary text.

use std::ops::Range;

use regex::Regex;
use tracing::debug;

use screener_shared::{Result, ScreenerError};

use crate::pattern::term_pattern;

const HTML_OPEN: &str =
    "<mark style='background:#fee2e2; padding:0.1rem 0.2rem; border-radius:0.2rem;'>";
const HTML_CLOSE: &str = "</mark>";
const ANSI_OPEN: &str = "\x1b[1;30;103m";
const ANSI_CLOSE: &str = "\x1b[0m";

/// How highlighted spans are wrapped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkerStyle {
    /// Inline-styled `<mark>` element.
    Html,
    /// Terminal colour escape sequences.
    Ansi,
    /// Markdown bold (`**term**`).
    Markdown,
    /// No markers; text is returned unchanged.
    Plain,
    /// Caller-supplied markers.
    Custom { open: String, close: String },
}

impl MarkerStyle {
    /// Parse a style name: `html`, `ansi`, `markdown`, or `none`.
    pub fn from_name(name: &str) -> Result<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "html" => Ok(Self::Html),
            "ansi" => Ok(Self::Ansi),
            "markdown" | "md" => Ok(Self::Markdown),
            "none" | "plain" => Ok(Self::Plain),
            other => Err(ScreenerError::validation(format!(
                "unknown highlight style '{other}': expected html, ansi, markdown, or none"
            ))),
        }
    }

    pub fn open(&self) -> &str {
        match self {
            Self::Html => HTML_OPEN,
            Self::Ansi => ANSI_OPEN,
            Self::Markdown => "**",
            Self::Plain => "",
            Self::Custom { open, .. } => open,
        }
    }

    pub fn close(&self) -> &str {
        match self {
            Self::Html => HTML_CLOSE,
            Self::Ansi => ANSI_CLOSE,
            Self::Markdown => "**",
            Self::Plain => "",
            Self::Custom { close, .. } => close,
        }
    }
}

/// Wraps term occurrences in markers.
#[derive(Debug, Clone)]
pub struct Highlighter {
    style: MarkerStyle,
}

impl Highlighter {
    pub fn new(style: MarkerStyle) -> Self {
        Self { style }
    }

    /// Wrap every case-insensitive, whole-word occurrence of each term.
    pub fn highlight<I, S>(&self, text: &str, terms: I) -> Result<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.highlight_escaped(text, terms, |segment| segment.to_string())
    }

    /// Like [`highlight`](Self::highlight), but passes every piece of source
    /// text through `escape` before output. Markers are never escaped.
    ///
    /// Spans are matched against the raw text, so `text` should not already
    /// contain markers of this style.
    pub fn highlight_escaped<I, S, F>(&self, text: &str, terms: I, escape: F) -> Result<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        F: Fn(&str) -> String,
    {
        if self.style.open().is_empty() && self.style.close().is_empty() {
            return Ok(escape(text));
        }

        let spans = self.spans(text, terms)?;
        debug!(spans = spans.len(), "highlight spans resolved");
        Ok(self.render(text, &spans, escape))
    }

    /// Resolve non-overlapping match spans, longest term first.
    fn spans<I, S>(&self, text: &str, terms: I) -> Result<Vec<Range<usize>>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut terms: Vec<String> = terms
            .into_iter()
            .map(|t| t.as_ref().trim().to_lowercase())
            .filter(|t| !t.is_empty())
            .collect();
        terms.sort_by(|a, b| {
            b.chars()
                .count()
                .cmp(&a.chars().count())
                .then_with(|| a.cmp(b))
        });
        terms.dedup();

        let patterns = terms
            .iter()
            .map(|t| term_pattern(t))
            .collect::<Result<Vec<_>>>()?;

        let mut claimed = self.marked_regions(text, &patterns);
        let mut spans = Vec::new();

        for re in &patterns {
            for m in re.find_iter(text) {
                let span = m.range();
                if claimed.iter().any(|c| overlaps(c, &span)) {
                    continue;
                }
                claimed.push(span.clone());
                spans.push(span);
            }
        }

        spans.sort_by_key(|s| s.start);
        Ok(spans)
    }

    /// Byte ranges where exactly one term match is already wrapped in this
    /// style's markers (markers included).
    fn marked_regions(&self, text: &str, patterns: &[Regex]) -> Vec<Range<usize>> {
        let (open, close) = (self.style.open(), self.style.close());
        let mut regions = Vec::new();
        if open.is_empty() || close.is_empty() {
            return regions;
        }

        let mut pos = 0;
        while let Some(found) = text[pos..].find(open) {
            let start = pos + found;
            let inner = start + open.len();
            let Some(close_at) = text[inner..].find(close) else {
                break;
            };
            let body = &text[inner..inner + close_at];
            let whole_term = patterns.iter().any(|re| {
                re.find(body)
                    .is_some_and(|m| m.start() == 0 && m.end() == body.len())
            });
            if whole_term {
                let end = inner + close_at + close.len();
                regions.push(start..end);
                pos = end;
            } else {
                // Stray marker text; its closer may still open a real region.
                pos = inner;
            }
        }
        regions
    }

    fn render<F>(&self, text: &str, spans: &[Range<usize>], escape: F) -> String
    where
        F: Fn(&str) -> String,
    {
        let (open, close) = (self.style.open(), self.style.close());
        let mut out = String::with_capacity(text.len() + spans.len() * (open.len() + close.len()));
        let mut pos = 0;

        for span in spans {
            out.push_str(&escape(&text[pos..span.start]));
            out.push_str(open);
            out.push_str(&escape(&text[span.clone()]));
            out.push_str(close);
            pos = span.end;
        }
        out.push_str(&escape(&text[pos..]));
        out
    }
}

fn overlaps(a: &Range<usize>, b: &Range<usize>) -> bool {
    a.start < b.end && b.start < a.end
}

/// Escape text for inclusion in an HTML document.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
