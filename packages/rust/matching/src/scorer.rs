//! Skill matching and percentage scoring.

use regex::Regex;
use tracing::debug;

use screener_shared::{MatchResult, Result, SkillSet};

use crate::pattern::term_pattern;

/// Compiled matcher for one skill set. Each skill is tested independently.
#[derive(Debug, Clone)]
pub struct SkillMatcher {
    patterns: Vec<(String, Regex)>,
}

impl SkillMatcher {
    pub fn new(skills: &SkillSet) -> Result<Self> {
        let patterns = skills
            .iter()
            .map(|skill| Ok((skill.to_string(), term_pattern(skill)?)))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { patterns })
    }

    /// Number of skills being matched.
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Find which skills occur in `text` and score the overlap.
    pub fn match_text(&self, text: &str) -> MatchResult {
        let matched: SkillSet = self
            .patterns
            .iter()
            .filter(|(_, re)| re.is_match(text))
            .map(|(skill, _)| skill.as_str())
            .collect();

        let result = MatchResult::new(matched, self.patterns.len());
        debug!(
            matched = result.matched_count(),
            total = result.total,
            score = result.score,
            "skills matched"
        );
        result
    }
}

/// One-shot form of [`SkillMatcher::match_text`].
pub fn match_skills(text: &str, skills: &SkillSet) -> Result<MatchResult> {
    Ok(SkillMatcher::new(skills)?.match_text(text))
}
