//! Skill extraction from job descriptions.
//!
//! A job description is run through a [`PhraseAnnotator`] (noun-phrase
//! chunking + part-of-speech tagging). Every noun chunk and every noun or
//! proper-noun token longer than one character becomes a candidate skill,
//! lowercased and deduplicated. This is a heuristic, not a skill taxonomy: it
//! keeps non-skill nouns and follows the job description's phrasing.
//!
//! The annotator is pluggable; [`LexiconTagger`] is the built-in
//! dictionary-based implementation.

mod lexicon;
pub mod tagger;

use serde::Serialize;
use tracing::{debug, instrument};

use screener_shared::SkillSet;

pub use tagger::LexiconTagger;

// ---------------------------------------------------------------------------
// Annotation model
// ---------------------------------------------------------------------------

/// Coarse part-of-speech tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PartOfSpeech {
    ProperNoun,
    Noun,
    Verb,
    Adjective,
    Adverb,
    Determiner,
    Pronoun,
    Adposition,
    Conjunction,
    Numeral,
    Punctuation,
    Other,
}

impl PartOfSpeech {
    /// `true` for tags whose tokens are kept as candidate skills.
    pub fn is_noun(self) -> bool {
        matches!(self, Self::ProperNoun | Self::Noun)
    }
}

/// A tagged token, as it appears in the source text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub text: String,
    pub pos: PartOfSpeech,
}

/// Output of a linguistic annotation pass.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Annotation {
    /// Noun-phrase chunk texts, in document order.
    pub noun_chunks: Vec<String>,
    /// All tokens, in document order.
    pub tokens: Vec<Token>,
}

/// Linguistic annotation capability: text in, noun chunks and tagged tokens out.
pub trait PhraseAnnotator: Send + Sync {
    /// Annotate `text`.
    fn annotate(&self, text: &str) -> Annotation;

    /// Human-readable annotator name for tracing.
    fn name(&self) -> &str;
}

// ---------------------------------------------------------------------------
// Extractor
// ---------------------------------------------------------------------------

/// Turns free text into a [`SkillSet`] using an annotator. Build once, reuse.
pub struct SkillExtractor {
    annotator: Box<dyn PhraseAnnotator>,
}

impl SkillExtractor {
    pub fn new(annotator: impl PhraseAnnotator + 'static) -> Self {
        Self {
            annotator: Box::new(annotator),
        }
    }

    /// Name of the underlying annotator.
    pub fn annotator_name(&self) -> &str {
        self.annotator.name()
    }

    /// Extract the candidate skill set from `text`.
    #[instrument(skip_all, fields(annotator = self.annotator.name(), len = text.len()))]
    pub fn extract(&self, text: &str) -> SkillSet {
        let annotation = self.annotator.annotate(text);

        let chunks = annotation
            .noun_chunks
            .iter()
            .map(String::as_str)
            .filter(|chunk| longer_than_one_char(chunk));

        let nouns = annotation
            .tokens
            .iter()
            .filter(|tok| tok.pos.is_noun() && longer_than_one_char(&tok.text))
            .map(|tok| tok.text.as_str());

        let skills: SkillSet = chunks.chain(nouns).collect();

        debug!(
            chunks = annotation.noun_chunks.len(),
            tokens = annotation.tokens.len(),
            skills = skills.len(),
            "skills extracted"
        );

        skills
    }
}

impl Default for SkillExtractor {
    fn default() -> Self {
        Self::new(LexiconTagger::new())
    }
}

fn longer_than_one_char(s: &str) -> bool {
    s.chars().nth(1).is_some()
}
