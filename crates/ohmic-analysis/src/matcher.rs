// SPDX-FileCopyrightText: 2026 Ohmic Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Compiled keyword matchers.
//!
//! All keyword-density scoring in the engine goes through [`KeywordSet`]:
//! one case-insensitive whole-word alternation regex per category,
//! compiled once at startup. Complexity indicators use [`IndicatorSet`],
//! which does plain substring containment (no word boundaries) -- the two
//! deliberately differ and both are validated at construction so pattern
//! matching cannot fail at runtime.

use ohmic_core::OhmicError;
use regex::Regex;

/// A validated, compiled set of whole-word keywords.
pub struct KeywordSet {
    regex: Regex,
    len: usize,
}

impl KeywordSet {
    /// Compile a keyword list into a single case-insensitive
    /// `\b(kw1|kw2|…)\b` alternation.
    ///
    /// Fails fast on an empty list, empty keywords, or duplicates after
    /// lowercasing -- a broken table must stop startup, not degrade
    /// matching silently.
    pub fn compile(keywords: &[&str]) -> Result<Self, OhmicError> {
        if keywords.is_empty() {
            return Err(OhmicError::Config("keyword set must not be empty".into()));
        }

        let mut seen = std::collections::HashSet::new();
        for kw in keywords {
            if kw.trim().is_empty() {
                return Err(OhmicError::Config("keyword must not be blank".into()));
            }
            if !seen.insert(kw.to_lowercase()) {
                return Err(OhmicError::Config(format!("duplicate keyword `{kw}`")));
            }
        }

        let alternation = keywords
            .iter()
            .map(|kw| regex::escape(kw))
            .collect::<Vec<_>>()
            .join("|");
        let pattern = format!(r"(?i)\b(?:{alternation})\b");
        let regex = Regex::new(&pattern)
            .map_err(|e| OhmicError::Config(format!("keyword pattern failed to compile: {e}")))?;

        Ok(Self {
            regex,
            len: keywords.len(),
        })
    }

    /// Count non-overlapping whole-word keyword occurrences in `text`.
    pub fn match_count(&self, text: &str) -> usize {
        self.regex.find_iter(text).count()
    }

    /// Whether at least one keyword occurs in `text`.
    pub fn matches(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }

    /// Number of keywords in the set.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the set is empty (never true for a compiled set).
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// A validated set of case-insensitive substring indicators.
///
/// Unlike [`KeywordSet`], containment is substring-based: "asil" matches
/// "ASIL-D" and "grade 0" matches mid-word contexts. The indicator list
/// may be empty (domains carry none).
pub struct IndicatorSet {
    lowered: Vec<String>,
}

impl IndicatorSet {
    /// Validate and lower an indicator list. Duplicates and blank
    /// entries are configuration errors.
    pub fn compile(indicators: &[&str]) -> Result<Self, OhmicError> {
        let mut seen = std::collections::HashSet::new();
        let mut lowered = Vec::with_capacity(indicators.len());
        for ind in indicators {
            if ind.trim().is_empty() {
                return Err(OhmicError::Config("indicator must not be blank".into()));
            }
            let low = ind.to_lowercase();
            if !seen.insert(low.clone()) {
                return Err(OhmicError::Config(format!("duplicate indicator `{ind}`")));
            }
            lowered.push(low);
        }
        Ok(Self { lowered })
    }

    /// Count how many indicators are present in `text`.
    pub fn present_count(&self, text: &str) -> usize {
        let lower = text.to_lowercase();
        self.lowered.iter().filter(|i| lower.contains(i.as_str())).count()
    }

    /// Number of indicators in the set.
    pub fn len(&self) -> usize {
        self.lowered.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.lowered.is_empty()
    }
}
