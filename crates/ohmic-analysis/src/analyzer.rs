// SPDX-FileCopyrightText: 2026 Ohmic Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Query analysis orchestration.
//!
//! Composes intent classification, domain detection, complexity scoring,
//! and model routing into one result. The orchestration is side-effect
//! free and deterministic: the same query against the same taxonomy and
//! configuration yields bit-identical results.

use std::sync::Arc;

use ohmic_config::OhmicConfig;
use ohmic_core::{DomainKind, ExpertiseLevel, IntentKind, OhmicError};
use ohmic_router::{ModelRouter, RoutingDecision};
use serde::Serialize;
use strum::Display;
use tracing::debug;

use crate::complexity::{ComplexityBreakdown, ComplexityScorer};
use crate::intent::IntentClassifier;
use crate::scorer::{primary, score_all};
use crate::taxonomy::Taxonomy;

/// Fallback domain when no domain keywords match.
pub const DEFAULT_DOMAIN: DomainKind = DomainKind::General;

/// Fixed confidence reported with the fallback domain.
pub const DEFAULT_DOMAIN_CONFIDENCE: f64 = 0.3;

/// Confidence assigned to a caller-supplied preferred domain, which
/// short-circuits keyword detection.
const PREFERRED_DOMAIN_CONFIDENCE: f64 = 0.9;

/// Caller options for one analysis call.
#[derive(Debug, Clone, Default)]
pub struct AnalyzeOptions {
    /// Report secondary intents and the combination label.
    pub enable_multi_intent: bool,
    /// Caller-asserted domain; overrides keyword detection.
    pub preferred_domain: Option<DomainKind>,
    /// Self-reported user expertise, carried into the result metadata
    /// and the retrieval context (not used for scoring).
    pub expertise: ExpertiseLevel,
}

/// One scored intent.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct IntentScore {
    pub intent: IntentKind,
    pub confidence: f64,
}

/// One scored domain.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DomainScore {
    pub domain: DomainKind,
    pub confidence: f64,
}

/// Classification section of an analysis result.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Classification {
    pub primary_intent: IntentScore,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub secondary_intents: Vec<IntentScore>,
    pub primary_domain: DomainScore,
}

/// How many clear intents the query carried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum IntentCombination {
    SingleIntent,
    MultiIntent,
    CompositeIntent,
}

/// Metadata about the analysis itself.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AnalysisMetadata {
    pub intent_combination: IntentCombination,
    pub user_expertise: ExpertiseLevel,
}

/// Complete analysis of one query.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisResult {
    pub classification: Classification,
    pub complexity: ComplexityBreakdown,
    pub routing: RoutingDecision,
    pub analysis_metadata: AnalysisMetadata,
}

/// The orchestrator composing classifier, scorer, and router.
///
/// Constructed explicitly once at startup and shared read-only across
/// callers; there is no lazy global instance.
pub struct QueryAnalyzer {
    taxonomy: Arc<Taxonomy>,
    intent: IntentClassifier,
    complexity: ComplexityScorer,
    router: ModelRouter,
    multi_intent_ratio: f64,
}

impl QueryAnalyzer {
    /// Build an analyzer from a compiled taxonomy and validated config.
    pub fn new(taxonomy: Arc<Taxonomy>, config: &OhmicConfig) -> Self {
        Self {
            intent: IntentClassifier::new(Arc::clone(&taxonomy)),
            complexity: ComplexityScorer::new(Arc::clone(&taxonomy)),
            router: ModelRouter::new(config.routing.clone()),
            multi_intent_ratio: config.analysis.multi_intent_ratio,
            taxonomy,
        }
    }

    /// Analyze a query end to end.
    ///
    /// Classification and scoring are total; the only failure path is a
    /// misconfigured `force_model` surfacing from routing.
    pub fn analyze(&self, query: &str, options: &AnalyzeOptions) -> Result<AnalysisResult, OhmicError> {
        let intent_scores = self.intent.classify(query);
        let (primary_intent, intent_confidence) = primary(&intent_scores).unwrap_or((
            crate::intent::DEFAULT_INTENT,
            crate::intent::DEFAULT_INTENT_CONFIDENCE,
        ));

        let (primary_domain, domain_confidence) = match options.preferred_domain {
            Some(domain) => (domain, PREFERRED_DOMAIN_CONFIDENCE),
            None => self.detect_domain(query),
        };

        // The general fallback is not a known domain; the scorer floor
        // depends on that distinction.
        let domain_hint = (!primary_domain.is_general()).then_some(primary_domain);
        let complexity = self.complexity.score(query, domain_hint);

        let routing = self.router.route(
            complexity.final_score,
            Some(primary_intent),
            domain_hint,
        )?;

        let secondary_intents = if options.enable_multi_intent {
            self.secondary_intents(&intent_scores, primary_intent, intent_confidence)
        } else {
            Vec::new()
        };
        let intent_combination = match secondary_intents.len() {
            0 => IntentCombination::SingleIntent,
            1 | 2 => IntentCombination::MultiIntent,
            _ => IntentCombination::CompositeIntent,
        };

        debug!(
            intent = %primary_intent,
            domain = %primary_domain,
            complexity = complexity.final_score,
            model = routing.selected_model.as_str(),
            "query analyzed"
        );

        Ok(AnalysisResult {
            classification: Classification {
                primary_intent: IntentScore {
                    intent: primary_intent,
                    confidence: intent_confidence,
                },
                secondary_intents,
                primary_domain: DomainScore {
                    domain: primary_domain,
                    confidence: domain_confidence,
                },
            },
            complexity,
            routing,
            analysis_metadata: AnalysisMetadata {
                intent_combination,
                user_expertise: options.expertise,
            },
        })
    }

    /// Keyword-density domain detection; same mechanism as intent
    /// classification, different table.
    pub fn detect_domain(&self, query: &str) -> (DomainKind, f64) {
        let scores = score_all(&self.taxonomy.domains, query);
        primary(&scores).unwrap_or((DEFAULT_DOMAIN, DEFAULT_DOMAIN_CONFIDENCE))
    }

    /// The taxonomy this analyzer scores against.
    pub fn taxonomy(&self) -> &Taxonomy {
        &self.taxonomy
    }

    /// The underlying router, for callers that need tier resolution.
    pub fn router(&self) -> &ModelRouter {
        &self.router
    }

    fn secondary_intents(
        &self,
        scores: &[(IntentKind, f64)],
        primary_intent: IntentKind,
        primary_confidence: f64,
    ) -> Vec<IntentScore> {
        let threshold = self.multi_intent_ratio * primary_confidence;
        let mut secondary: Vec<IntentScore> = scores
            .iter()
            .filter(|(kind, confidence)| {
                *kind != primary_intent && *confidence > 0.0 && *confidence >= threshold
            })
            .map(|&(intent, confidence)| IntentScore { intent, confidence })
            .collect();
        secondary.sort_by(|a, b| {
            b.confidence
                .partial_cmp(&a.confidence)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        secondary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ohmic_core::ModelTier;

    fn analyzer() -> QueryAnalyzer {
        QueryAnalyzer::new(
            Arc::new(Taxonomy::builtin().unwrap()),
            &OhmicConfig::default(),
        )
    }

    #[test]
    fn automotive_design_query_routes_to_highest_tier() {
        let a = analyzer();
        let result = a
            .analyze(
                "Design automotive buck converter with thermal analysis, EMI optimization, \
                 efficiency calculation, AEC-Q100 qualified",
                &AnalyzeOptions {
                    expertise: ExpertiseLevel::Expert,
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(result.classification.primary_domain.domain, DomainKind::Automotive);
        assert!(result.complexity.final_score >= 0.8);
        assert_eq!(result.routing.tier, ModelTier::Highest);
        assert_eq!(result.routing.selected_model, "claude_sonnet_4");
    }

    #[test]
    fn pinout_question_routes_to_lightweight_tier() {
        let a = analyzer();
        let result = a
            .analyze("What is the pinout of 555 timer IC?", &AnalyzeOptions::default())
            .unwrap();
        assert!(result.complexity.final_score < 0.4);
        assert_eq!(result.routing.tier, ModelTier::Lightweight);
        assert_eq!(result.routing.selected_model, "gpt_4o_mini");
    }

    #[test]
    fn empty_query_yields_defaults_without_error() {
        let a = analyzer();
        let result = a.analyze("", &AnalyzeOptions::default()).unwrap();
        assert_eq!(
            result.classification.primary_intent.intent,
            IntentKind::EducationalContent
        );
        assert_eq!(result.classification.primary_intent.confidence, 0.3);
        assert_eq!(result.classification.primary_domain.domain, DomainKind::General);
        // Only the domain-specificity floor contributes.
        assert!((result.complexity.final_score - 0.3 * 0.225).abs() < 1e-9);
        assert_eq!(result.complexity.length_bonus, 0.0);
    }

    #[test]
    fn analysis_is_deterministic() {
        let a = analyzer();
        let options = AnalyzeOptions {
            enable_multi_intent: true,
            ..Default::default()
        };
        let query = "Compare automotive buck converters AND verify AEC-Q100 compliance requirements";
        let first = serde_json::to_string(&a.analyze(query, &options).unwrap()).unwrap();
        let second = serde_json::to_string(&a.analyze(query, &options).unwrap()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn multi_intent_reports_secondaries_above_threshold() {
        let a = analyzer();
        let result = a
            .analyze(
                "Compare automotive buck converters AND verify AEC-Q100 compliance requirements",
                &AnalyzeOptions {
                    enable_multi_intent: true,
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(
            result.classification.primary_intent.intent,
            IntentKind::ComplianceChecking
        );
        assert!(!result.classification.secondary_intents.is_empty());
        for secondary in &result.classification.secondary_intents {
            assert!(
                secondary.confidence
                    >= 0.5 * result.classification.primary_intent.confidence
            );
            assert_ne!(secondary.intent, result.classification.primary_intent.intent);
        }
        assert_ne!(
            result.analysis_metadata.intent_combination,
            IntentCombination::SingleIntent
        );
    }

    #[test]
    fn multi_intent_disabled_reports_single_label() {
        let a = analyzer();
        let result = a
            .analyze(
                "Compare automotive buck converters AND verify AEC-Q100 compliance requirements",
                &AnalyzeOptions::default(),
            )
            .unwrap();
        assert!(result.classification.secondary_intents.is_empty());
        assert_eq!(
            result.analysis_metadata.intent_combination,
            IntentCombination::SingleIntent
        );
    }

    #[test]
    fn preferred_domain_overrides_detection() {
        let a = analyzer();
        let result = a
            .analyze(
                "What is the pinout of 555 timer IC?",
                &AnalyzeOptions {
                    preferred_domain: Some(DomainKind::Medical),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(result.classification.primary_domain.domain, DomainKind::Medical);
        // A known high-specificity domain lifts the specificity factor.
        assert_eq!(result.complexity.factor_scores.domain_specificity, 0.8);
    }

    #[test]
    fn tie_between_domains_resolves_in_table_order() {
        // "automotive" and "converter" score one match each; automotive
        // precedes power_electronics in the table and wins the tie.
        let a = analyzer();
        let (domain, _) = a.detect_domain("automotive converter");
        assert_eq!(domain, DomainKind::Automotive);
    }
}
