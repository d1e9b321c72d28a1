// SPDX-FileCopyrightText: 2026 Ohmic Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Intent classification across the twelve hardware-engineering categories.
//!
//! Classification is a total function: any text input, including the
//! empty string, produces a valid result. When nothing matches, the
//! documented fallback is `educational_content` at a fixed 0.3 -- a
//! policy decision, not an error.

use std::sync::Arc;

use ohmic_core::IntentKind;

use crate::scorer::{primary, score_all};
use crate::taxonomy::Taxonomy;

/// Fallback intent when no category scores above zero.
pub const DEFAULT_INTENT: IntentKind = IntentKind::EducationalContent;

/// Fixed confidence reported with the fallback intent.
pub const DEFAULT_INTENT_CONFIDENCE: f64 = 0.3;

/// Scores queries against the intent category table.
pub struct IntentClassifier {
    taxonomy: Arc<Taxonomy>,
}

impl IntentClassifier {
    /// Create a classifier over a compiled taxonomy.
    pub fn new(taxonomy: Arc<Taxonomy>) -> Self {
        Self { taxonomy }
    }

    /// Confidence for every category, in table (tie-break) order.
    pub fn classify(&self, query: &str) -> Vec<(IntentKind, f64)> {
        score_all(&self.taxonomy.intents, query)
    }

    /// The highest-confidence intent, falling back to
    /// [`DEFAULT_INTENT`] when every category scores zero.
    pub fn primary(&self, query: &str) -> (IntentKind, f64) {
        primary(&self.classify(query)).unwrap_or((DEFAULT_INTENT, DEFAULT_INTENT_CONFIDENCE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classifier() -> IntentClassifier {
        IntentClassifier::new(Arc::new(Taxonomy::builtin().unwrap()))
    }

    #[test]
    fn scores_every_category() {
        let c = classifier();
        let scores = c.classify("compare microcontrollers");
        assert_eq!(scores.len(), 12);
        assert!(scores.iter().all(|(_, s)| (0.0..=1.0).contains(s)));
    }

    #[test]
    fn compliance_query_classifies_as_compliance_checking() {
        let c = classifier();
        let (intent, confidence) =
            c.primary("Verify AEC-Q100 qualification and EMC compliance for this part");
        assert_eq!(intent, IntentKind::ComplianceChecking);
        assert!(confidence > 0.3);
    }

    #[test]
    fn selection_query_classifies_as_component_selection() {
        let c = classifier();
        let (intent, _) =
            c.primary("Recommend an alternative microcontroller part for this design");
        assert_eq!(intent, IntentKind::ComponentSelection);
    }

    #[test]
    fn pinout_question_is_educational() {
        let c = classifier();
        let (intent, _) = c.primary("What is the pinout of 555 timer IC?");
        assert_eq!(intent, IntentKind::EducationalContent);
    }

    #[test]
    fn zero_match_query_falls_back_to_default() {
        let c = classifier();
        let (intent, confidence) = c.primary("zzz qqq xxx");
        assert_eq!(intent, DEFAULT_INTENT);
        assert_eq!(confidence, DEFAULT_INTENT_CONFIDENCE);
    }

    #[test]
    fn empty_and_whitespace_queries_never_panic() {
        let c = classifier();
        assert_eq!(c.primary(""), (DEFAULT_INTENT, DEFAULT_INTENT_CONFIDENCE));
        assert_eq!(c.primary("   \t\n"), (DEFAULT_INTENT, DEFAULT_INTENT_CONFIDENCE));
    }

    #[test]
    fn complexity_indicators_boost_confidence() {
        let c = classifier();
        let plain: f64 = c
            .classify("verify the design")
            .iter()
            .find(|(k, _)| *k == IntentKind::DesignValidation)
            .unwrap()
            .1;
        let boosted: f64 = c
            .classify("verify the safety-critical design with fault tolerance")
            .iter()
            .find(|(k, _)| *k == IntentKind::DesignValidation)
            .unwrap()
            .1;
        assert!(boosted > plain);
    }
}
