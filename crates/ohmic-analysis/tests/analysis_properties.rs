// SPDX-FileCopyrightText: 2026 Ohmic Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Property tests for the numeric invariants of query analysis.

use std::sync::Arc;

use ohmic_analysis::{AnalyzeOptions, ComplexityScorer, IntentClassifier, QueryAnalyzer, Taxonomy};
use ohmic_config::OhmicConfig;
use proptest::prelude::*;

fn taxonomy() -> Arc<Taxonomy> {
    Arc::new(Taxonomy::builtin().expect("builtin taxonomy compiles"))
}

proptest! {
    #[test]
    fn classification_never_panics_and_stays_in_unit_interval(query in ".{0,400}") {
        let classifier = IntentClassifier::new(taxonomy());
        for (_, confidence) in classifier.classify(&query) {
            prop_assert!((0.0..=1.0).contains(&confidence));
        }
        let (_, primary) = classifier.primary(&query);
        prop_assert!(primary > 0.0);
    }

    #[test]
    fn complexity_stays_in_unit_interval(query in ".{0,400}") {
        let scorer = ComplexityScorer::new(taxonomy());
        let breakdown = scorer.score(&query, None);
        prop_assert!((0.0..=1.0).contains(&breakdown.final_score));
        for factor in breakdown.factor_scores.as_array() {
            prop_assert!((0.0..=1.0).contains(&factor));
        }
        // Without a domain, the specificity floor always contributes.
        prop_assert!(breakdown.final_score >= 0.3 * 0.225 - 1e-12);
    }

    #[test]
    fn analyze_is_idempotent(query in "[ -~]{0,200}") {
        let analyzer = QueryAnalyzer::new(taxonomy(), &OhmicConfig::default());
        let options = AnalyzeOptions { enable_multi_intent: true, ..Default::default() };
        let first = serde_json::to_string(&analyzer.analyze(&query, &options).unwrap()).unwrap();
        let second = serde_json::to_string(&analyzer.analyze(&query, &options).unwrap()).unwrap();
        prop_assert_eq!(first, second);
    }
}
