//! Dictionary-based part-of-speech tagger and noun-phrase chunker.
//!
//! Tagging is a lexicon lookup followed by a few suffix rules; whatever is
//! left is a noun (a proper noun if it carries an uppercase letter). Noun
//! chunks follow the shape `[det] (adj|num|noun)* noun`, cut at punctuation,
//! line breaks, and any other tag.

use std::collections::HashSet;
use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

use crate::lexicon::{LEXICON, NOUN_EXCEPTIONS};
use crate::{Annotation, PartOfSpeech, PhraseAnnotator, Token};

const ADJECTIVE_SUFFIXES: &[&str] = &["ous", "ful", "able", "ible", "less"];

/// Lexicon tagger with optional extra stop words.
#[derive(Debug, Clone, Default)]
pub struct LexiconTagger {
    stop_words: HashSet<String>,
}

impl LexiconTagger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add words that must always be tagged [`PartOfSpeech::Other`].
    pub fn with_stop_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.stop_words
            .extend(words.into_iter().map(|w| w.as_ref().trim().to_lowercase()));
        self
    }

    /// Tokenize and tag `text`, returning byte ranges into `text`.
    fn tag_text(&self, text: &str) -> Vec<(Range<usize>, PartOfSpeech)> {
        static TOKEN_RE: LazyLock<Regex> = LazyLock::new(|| {
            // Words keep inner symbols so c++, c#, node.js, ci/cd, r&d survive;
            // any other non-space character is its own token.
            Regex::new(r"[\p{L}\p{N}](?:[\p{L}\p{N}'’+#./&-]*[\p{L}\p{N}+#])?|[^\s\p{L}\p{N}]")
                .expect("valid regex")
        });

        let mut tagged = Vec::new();
        for m in TOKEN_RE.find_iter(text) {
            let word = m.as_str();
            match possessive_split(word) {
                Some(base_len) => {
                    let split = m.start() + base_len;
                    tagged.push((m.start()..split, self.tag(&text[m.start()..split])));
                    tagged.push((split..m.end(), PartOfSpeech::Other));
                }
                None => tagged.push((m.range(), self.tag(word))),
            }
        }
        tagged
    }

    fn tag(&self, word: &str) -> PartOfSpeech {
        if !word.chars().any(char::is_alphanumeric) {
            return PartOfSpeech::Punctuation;
        }

        let lower = word.to_lowercase();
        if self.stop_words.contains(&lower) {
            return PartOfSpeech::Other;
        }
        if let Some(pos) = LEXICON.get(lower.as_str()) {
            return *pos;
        }
        if !word.chars().any(char::is_alphabetic) {
            return PartOfSpeech::Numeral;
        }

        if !NOUN_EXCEPTIONS.contains(&lower.as_str()) {
            let len = lower.chars().count();
            if len > 4 && lower.ends_with("ly") {
                return PartOfSpeech::Adverb;
            }
            if len > 5 && ADJECTIVE_SUFFIXES.iter().any(|s| lower.ends_with(s)) {
                return PartOfSpeech::Adjective;
            }
            if len > 4 && lower.ends_with("ed") && !lower.ends_with("eed") {
                return PartOfSpeech::Verb;
            }
        }

        if word.chars().any(char::is_uppercase) {
            PartOfSpeech::ProperNoun
        } else {
            PartOfSpeech::Noun
        }
    }
}

impl PhraseAnnotator for LexiconTagger {
    fn annotate(&self, text: &str) -> Annotation {
        let tagged = self.tag_text(text);

        let noun_chunks = chunk_spans(text, &tagged)
            .into_iter()
            .map(|span| text[span].to_string())
            .collect();

        let tokens = tagged
            .into_iter()
            .map(|(span, pos)| Token {
                text: text[span].to_string(),
                pos,
            })
            .collect();

        Annotation {
            noun_chunks,
            tokens,
        }
    }

    fn name(&self) -> &str {
        "lexicon"
    }
}

/// Byte length of the stem when `word` ends in a possessive `'s`.
fn possessive_split(word: &str) -> Option<usize> {
    ["'s", "'S", "’s", "’S"]
        .iter()
        .find(|suffix| word.len() > suffix.len() && word.ends_with(**suffix))
        .map(|suffix| word.len() - suffix.len())
}

/// Compute noun-chunk byte spans over tagged tokens.
fn chunk_spans(text: &str, tagged: &[(Range<usize>, PartOfSpeech)]) -> Vec<Range<usize>> {
    let mut spans = Vec::new();
    let mut start: Option<usize> = None;
    let mut last_noun: Option<usize> = None;
    let mut prev_end = 0;

    let mut flush = |start: &mut Option<usize>, last_noun: &mut Option<usize>| {
        if let (Some(s), Some(e)) = (start.take(), last_noun.take()) {
            spans.push(s..e);
        }
    };

    for (span, pos) in tagged {
        if text[prev_end..span.start].contains('\n') {
            flush(&mut start, &mut last_noun);
        }
        prev_end = span.end;

        match pos {
            PartOfSpeech::Determiner => {
                flush(&mut start, &mut last_noun);
                start = Some(span.start);
            }
            PartOfSpeech::Adjective | PartOfSpeech::Numeral => {
                if last_noun.is_some() {
                    flush(&mut start, &mut last_noun);
                }
                start.get_or_insert(span.start);
            }
            PartOfSpeech::Noun | PartOfSpeech::ProperNoun => {
                start.get_or_insert(span.start);
                last_noun = Some(span.end);
            }
            _ => flush(&mut start, &mut last_noun),
        }
    }
    flush(&mut start, &mut last_noun);

    spans
}
