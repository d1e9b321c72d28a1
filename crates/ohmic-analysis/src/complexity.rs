// SPDX-FileCopyrightText: 2026 Ohmic Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Complexity scoring across six weighted technical factors.
//!
//! Each factor saturates independently, then the weighted sum picks up a
//! word-count length bonus before the final clamp to [0, 1]. A query
//! with zero keyword matches still scores the domain-specificity floor
//! (0.3 × its weight) plus any length bonus; downstream routing
//! thresholds assume this floor exists.

use std::sync::Arc;

use ohmic_core::DomainKind;
use serde::Serialize;

use crate::taxonomy::{HIGH_SPECIFICITY_DOMAINS, Taxonomy};

/// Per-match steps for the keyword-counting factors.
const TECHNICAL_STEP: f64 = 0.2;
const CONSTRAINT_STEP: f64 = 0.25;
const CALCULATION_STEP: f64 = 0.3;
const STANDARDS_STEP: f64 = 0.4;
const INTEGRATION_STEP: f64 = 0.5;

/// Domain-specificity values: high-specificity domain / any domain / none.
const DOMAIN_HIGH: f64 = 0.8;
const DOMAIN_KNOWN: f64 = 0.5;
const DOMAIN_FLOOR: f64 = 0.3;

/// Word-count divisor and cap for the length bonus.
const LENGTH_DIVISOR: f64 = 50.0;
const LENGTH_CAP: f64 = 0.1;

/// Per-factor scores, each in [0, 1], in the fixed reporting order.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct FactorScores {
    pub technical_keywords_density: f64,
    pub design_constraint_count: f64,
    pub domain_specificity: f64,
    pub calculation_complexity: f64,
    pub standards_involvement: f64,
    pub multi_domain_integration: f64,
}

impl FactorScores {
    /// Factor values in [`crate::taxonomy::FACTOR_NAMES`] order.
    pub fn as_array(&self) -> [f64; 6] {
        [
            self.technical_keywords_density,
            self.design_constraint_count,
            self.domain_specificity,
            self.calculation_complexity,
            self.standards_involvement,
            self.multi_domain_integration,
        ]
    }
}

/// Full scoring breakdown for one query.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ComplexityBreakdown {
    pub factor_scores: FactorScores,
    pub final_score: f64,
    pub word_count: usize,
    pub length_bonus: f64,
}

/// Scores queries against the six weighted complexity factors.
pub struct ComplexityScorer {
    taxonomy: Arc<Taxonomy>,
}

impl ComplexityScorer {
    /// Create a scorer over a compiled taxonomy.
    pub fn new(taxonomy: Arc<Taxonomy>) -> Self {
        Self { taxonomy }
    }

    /// Score a query, optionally informed by the detected domain.
    ///
    /// `domain` is `None` when detection fell back to `general`; the
    /// fallback must not count as a known domain.
    pub fn score(&self, query: &str, domain: Option<DomainKind>) -> ComplexityBreakdown {
        let factors = &self.taxonomy.factors;

        let factor_scores = FactorScores {
            technical_keywords_density: saturating(
                factors.technical.match_count(query),
                TECHNICAL_STEP,
            ),
            design_constraint_count: saturating(
                factors.constraints.match_count(query),
                CONSTRAINT_STEP,
            ),
            domain_specificity: domain_specificity(domain),
            calculation_complexity: saturating(
                factors.calculations.match_count(query),
                CALCULATION_STEP,
            ),
            standards_involvement: saturating(factors.standards.match_count(query), STANDARDS_STEP),
            multi_domain_integration: saturating(
                factors.integration.match_count(query),
                INTEGRATION_STEP,
            ),
        };

        let weighted: f64 = factor_scores
            .as_array()
            .iter()
            .zip(factors.weights.iter())
            .map(|(score, weight)| score * weight)
            .sum();

        let word_count = query.split_whitespace().count();
        let length_bonus = (word_count as f64 / LENGTH_DIVISOR).min(LENGTH_CAP);

        ComplexityBreakdown {
            factor_scores,
            final_score: (weighted + length_bonus).clamp(0.0, 1.0),
            word_count,
            length_bonus,
        }
    }
}

fn saturating(count: usize, step: f64) -> f64 {
    (count as f64 * step).min(1.0)
}

fn domain_specificity(domain: Option<DomainKind>) -> f64 {
    match domain {
        Some(d) if HIGH_SPECIFICITY_DOMAINS.contains(&d) => DOMAIN_HIGH,
        Some(_) => DOMAIN_KNOWN,
        None => DOMAIN_FLOOR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scorer() -> ComplexityScorer {
        ComplexityScorer::new(Arc::new(Taxonomy::builtin().unwrap()))
    }

    #[test]
    fn empty_query_scores_only_the_domain_floor() {
        let breakdown = scorer().score("", None);
        assert_eq!(breakdown.word_count, 0);
        assert_eq!(breakdown.length_bonus, 0.0);
        assert_eq!(breakdown.factor_scores.domain_specificity, DOMAIN_FLOOR);
        // 0.3 floor x 0.225 domain-specificity weight, nothing else.
        assert!((breakdown.final_score - DOMAIN_FLOOR * 0.225).abs() < 1e-9);
    }

    #[test]
    fn floor_is_never_lost_without_a_domain() {
        let breakdown = scorer().score("completely unrelated words here", None);
        assert!(breakdown.final_score >= DOMAIN_FLOOR * 0.225);
    }

    #[test]
    fn high_specificity_domain_scores_high() {
        let s = scorer();
        assert_eq!(
            s.score("x", Some(DomainKind::Automotive)).factor_scores.domain_specificity,
            DOMAIN_HIGH
        );
        assert_eq!(
            s.score("x", Some(DomainKind::Consumer)).factor_scores.domain_specificity,
            DOMAIN_KNOWN
        );
        assert_eq!(s.score("x", None).factor_scores.domain_specificity, DOMAIN_FLOOR);
    }

    #[test]
    fn length_bonus_caps_at_a_tenth() {
        let long_query = "word ".repeat(200);
        let breakdown = scorer().score(&long_query, None);
        assert_eq!(breakdown.word_count, 200);
        assert_eq!(breakdown.length_bonus, LENGTH_CAP);
    }

    #[test]
    fn final_score_stays_in_unit_interval() {
        let loaded = "optimization analysis simulation modeling calculation algorithm \
                      requirement constraint limit tolerance range minimum maximum \
                      calculate formula equation derive compute efficiency \
                      aec-q100 iso 26262 compliance certification qualification emc emi safety \
                      system integration interface communication protocol";
        let breakdown = scorer().score(loaded, Some(DomainKind::Automotive));
        assert!(breakdown.final_score <= 1.0);
        assert!(breakdown.final_score > 0.8);
    }

    #[test]
    fn automotive_design_scenario_scores_above_highest_threshold() {
        let query = "Design automotive buck converter with thermal analysis, EMI optimization, \
                     efficiency calculation, AEC-Q100 qualified";
        let breakdown = scorer().score(query, Some(DomainKind::Automotive));
        assert!(
            breakdown.final_score >= 0.8,
            "expected >= 0.8, got {}",
            breakdown.final_score
        );
    }

    #[test]
    fn simple_pinout_scenario_scores_below_mid_threshold() {
        let breakdown = scorer().score("What is the pinout of 555 timer IC?", None);
        assert!(
            breakdown.final_score < 0.35,
            "expected well below 0.4, got {}",
            breakdown.final_score
        );
    }

    #[test]
    fn factor_breakdown_is_reported_per_factor() {
        let breakdown = scorer().score(
            "calculate the transfer function with tolerance requirements",
            None,
        );
        assert!(breakdown.factor_scores.calculation_complexity > 0.0);
        assert!(breakdown.factor_scores.design_constraint_count > 0.0);
        assert_eq!(breakdown.factor_scores.multi_domain_integration, 0.0);
    }
}
