// SPDX-FileCopyrightText: 2026 Ohmic Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Multi-strategy knowledge retrieval.
//!
//! Three component strategies (semantic, intent-based, domain-specific)
//! run independently; their concatenated candidates are deduplicated by
//! component id and ranked with method-specific boosts. A strategy that
//! fails is logged and skipped -- retrieval returns whatever the
//! remaining strategies produced rather than failing the call.
//!
//! Known quirk, preserved deliberately: dedup keeps the FIRST occurrence
//! of a component id regardless of which strategy scored it higher.

use std::collections::HashSet;

use ohmic_config::KnowledgeConfig;
use ohmic_core::{DomainKind, IntentKind, OhmicError};
use tracing::{debug, info, warn};

use crate::catalog::{ComponentCatalog, StandardsCatalog};
use crate::constraints::{ConstraintExtractor, infer_categories};
use crate::domains::domain_context;
use crate::semantic::SemanticIndex;
use crate::types::{ComplianceTag, ComponentMatch, KnowledgeResult, RetrievalContext,
    RetrievalMethod, RetrievalSummary, StandardMatch};

/// Fixed relevance scores per strategy, from the reference ranking model.
const SCORE_INTENT_BASED: f64 = 0.7;
const SCORE_COMPLIANCE_BASED: f64 = 0.8;
const SCORE_DOMAIN_SPECIFIC: f64 = 0.75;
const SCORE_STANDARD_DOMAIN: f64 = 0.9;
const SCORE_STANDARD_QUERY: f64 = 0.95;

/// Ranking boosts: strictly descending by method strength.
const BOOST_SEMANTIC: f64 = 0.10;
const BOOST_COMPLIANCE: f64 = 0.08;
const BOOST_DOMAIN: f64 = 0.06;
const BOOST_INTENT: f64 = 0.04;
const BOOST_DOMAIN_ALIGNMENT: f64 = 0.05;

/// Retrieval confidence model: base plus capped count boosts.
const CONFIDENCE_BASE: f64 = 0.6;
const CONFIDENCE_PER_COMPONENT: f64 = 0.05;
const CONFIDENCE_COMPONENT_CAP: f64 = 0.3;
const CONFIDENCE_PER_STANDARD: f64 = 0.08;
const CONFIDENCE_STANDARD_CAP: f64 = 0.2;
const CONFIDENCE_SEMANTIC_BONUS: f64 = 0.1;

/// Standard codes recognized in query text; presence triggers the
/// requirement-level search.
const KNOWN_STANDARD_CODES: &[&str] =
    &["aec-q100", "iso 26262", "iec 60601", "cispr 25", "iec 61508"];

/// Maximum requirement hits attached per retrieval call.
const REQUIREMENT_HIT_LIMIT: usize = 3;

/// Orchestrates knowledge retrieval over the reference catalogs.
pub struct RetrievalEngine {
    components: ComponentCatalog,
    standards: StandardsCatalog,
    config: KnowledgeConfig,
    extractor: ConstraintExtractor,
    semantic: Option<SemanticIndex>,
}

impl RetrievalEngine {
    /// Build an engine over the supplied read-only catalogs.
    ///
    /// Semantic search availability is decided here, once: the index is
    /// built when the config enables it and the catalog supports it.
    /// Unavailability is logged and recorded as a flag -- never an error.
    pub fn new(
        components: ComponentCatalog,
        standards: StandardsCatalog,
        config: KnowledgeConfig,
    ) -> Result<Self, OhmicError> {
        let extractor = ConstraintExtractor::new()?;

        let semantic = if config.semantic_search {
            match SemanticIndex::build(&components) {
                Some(index) => {
                    info!(components = components.len(), "semantic index built");
                    Some(index)
                }
                None => {
                    warn!("semantic index unavailable, retrieval degrades to keyword strategies");
                    None
                }
            }
        } else {
            debug!("semantic search disabled by configuration");
            None
        };

        Ok(Self {
            components,
            standards,
            config,
            extractor,
            semantic,
        })
    }

    /// Whether the semantic strategy is available for this engine.
    pub fn semantic_available(&self) -> bool {
        self.semantic.is_some()
    }

    /// Retrieve knowledge relevant to an analyzed query.
    ///
    /// Never fails: each strategy is caught independently and the result
    /// is the best effort of whatever succeeded.
    pub fn retrieve(&self, context: &RetrievalContext) -> KnowledgeResult {
        debug!(
            intent = %context.primary_intent,
            domain = %context.primary_domain,
            "retrieving knowledge"
        );

        let strategies: Vec<(&'static str, Result<Vec<ComponentMatch>, OhmicError>)> = vec![
            ("semantic", self.semantic_strategy(context)),
            ("intent", self.intent_strategy(context)),
            ("domain", self.domain_strategy(context)),
        ];
        let candidates = collect_strategy_results(strategies);

        let unique = dedup_components(candidates);
        let mut ranked = rank_components(unique, context.primary_domain);
        ranked.truncate(self.config.component_limit);

        let standards = self.retrieve_standards(context);
        let confidence = self.retrieval_confidence(ranked.len(), standards.len());

        KnowledgeResult {
            retrieval_summary: RetrievalSummary {
                total_components: ranked.len(),
                total_standards: standards.len(),
                retrieval_methods: self.methods_for(context),
                confidence,
            },
            domain_context: domain_context(context.primary_domain),
            components: ranked,
            standards,
        }
    }

    // --- Component strategies ---

    /// Semantic similarity over descriptions, constraint-filtered when
    /// the query carries extractable constraints. Returns nothing when
    /// the index is unavailable.
    fn semantic_strategy(
        &self,
        context: &RetrievalContext,
    ) -> Result<Vec<ComponentMatch>, OhmicError> {
        let Some(index) = self.semantic.as_ref() else {
            return Ok(Vec::new());
        };

        let constraints = self.extractor.extract(&context.query);
        let hits = if constraints.is_empty() {
            index.search(
                &context.query,
                self.config.semantic_top_n,
                self.config.similarity_threshold,
            )
        } else {
            index.search_with_constraints(
                &context.query,
                &constraints,
                &self.components,
                self.config.semantic_top_n,
                self.config.similarity_threshold,
            )
        };

        let matches = hits
            .into_iter()
            .filter_map(|(id, similarity)| {
                self.components.get(&id).map(|component| ComponentMatch {
                    component: component.clone(),
                    similarity_score: similarity,
                    retrieval_method: RetrievalMethod::SemanticSearch,
                    relevance_factors: vec![
                        "semantic_similarity".to_string(),
                        "domain_match".to_string(),
                    ],
                })
            })
            .collect();
        Ok(matches)
    }

    /// Intent-driven retrieval: category pulls for selection queries,
    /// compliance-tag filtering for compliance queries.
    fn intent_strategy(
        &self,
        context: &RetrievalContext,
    ) -> Result<Vec<ComponentMatch>, OhmicError> {
        let mut matches = Vec::new();

        match context.primary_intent {
            IntentKind::ComponentSelection => {
                for category in infer_categories(&context.query) {
                    for component in self
                        .components
                        .by_category(category)
                        .into_iter()
                        .take(self.config.intent_per_category)
                    {
                        matches.push(ComponentMatch {
                            component: component.clone(),
                            similarity_score: SCORE_INTENT_BASED,
                            retrieval_method: RetrievalMethod::IntentBased,
                            relevance_factors: vec![
                                "category_match".to_string(),
                                "intent_alignment".to_string(),
                            ],
                        });
                    }
                }
            }
            IntentKind::ComplianceChecking => {
                let constraints = self.extractor.extract(&context.query);
                if !constraints.compliance.is_empty() {
                    for component in self
                        .components
                        .with_any_compliance(&constraints.compliance)
                        .into_iter()
                        .take(self.config.compliance_limit)
                    {
                        matches.push(ComponentMatch {
                            component: component.clone(),
                            similarity_score: SCORE_COMPLIANCE_BASED,
                            retrieval_method: RetrievalMethod::ComplianceBased,
                            relevance_factors: vec![
                                "compliance_match".to_string(),
                                "standards_alignment".to_string(),
                            ],
                        });
                    }
                }
            }
            _ => {}
        }

        Ok(matches)
    }

    /// Hard-coded per-domain rules: qualification-tag pulls for the
    /// domains with dedicated compliance regimes.
    fn domain_strategy(
        &self,
        context: &RetrievalContext,
    ) -> Result<Vec<ComponentMatch>, OhmicError> {
        let (tag, factors): (ComplianceTag, [&str; 2]) = match context.primary_domain {
            DomainKind::Automotive => (
                ComplianceTag::AecQ100,
                ["automotive_qualified", "domain_expertise"],
            ),
            DomainKind::Medical => (
                ComplianceTag::Iec60601,
                ["medical_qualified", "safety_compliance"],
            ),
            _ => return Ok(Vec::new()),
        };

        let matches = self
            .components
            .with_compliance(tag)
            .into_iter()
            .take(self.config.domain_limit)
            .map(|component| ComponentMatch {
                component: component.clone(),
                similarity_score: SCORE_DOMAIN_SPECIFIC,
                retrieval_method: RetrievalMethod::DomainSpecific,
                relevance_factors: factors.iter().map(|f| f.to_string()).collect(),
            })
            .collect();
        Ok(matches)
    }

    // --- Standards retrieval ---

    /// Domain-tagged standards plus requirement-level hits for queries
    /// that mention a known standard code. Dedup by standard id, first
    /// occurrence wins.
    fn retrieve_standards(&self, context: &RetrievalContext) -> Vec<StandardMatch> {
        let mut matches = Vec::new();
        let mut seen: HashSet<String> = HashSet::new();

        for standard in self.standards.by_domain(context.primary_domain) {
            if seen.insert(standard.id.clone()) {
                matches.push(StandardMatch {
                    standard: standard.clone(),
                    specific_requirement: None,
                    relevance_score: SCORE_STANDARD_DOMAIN,
                    retrieval_method: RetrievalMethod::DomainBased,
                });
            }
        }

        let query_lower = context.query.to_lowercase();
        if KNOWN_STANDARD_CODES.iter().any(|code| query_lower.contains(code)) {
            for (standard, requirement) in self
                .standards
                .search_requirements(&context.query)
                .into_iter()
                .take(REQUIREMENT_HIT_LIMIT)
            {
                if seen.insert(standard.id.clone()) {
                    matches.push(StandardMatch {
                        standard: standard.clone(),
                        specific_requirement: Some(requirement.clone()),
                        relevance_score: SCORE_STANDARD_QUERY,
                        retrieval_method: RetrievalMethod::QueryBased,
                    });
                }
            }
        }

        matches
    }

    // --- Summary ---

    fn methods_for(&self, context: &RetrievalContext) -> Vec<RetrievalMethod> {
        let mut methods = vec![RetrievalMethod::IntentBased, RetrievalMethod::DomainSpecific];
        if self.semantic_available() {
            methods.push(RetrievalMethod::SemanticSearch);
        }
        if context.primary_intent == IntentKind::ComplianceChecking {
            methods.push(RetrievalMethod::ComplianceBased);
        }
        methods
    }

    fn retrieval_confidence(&self, component_count: usize, standard_count: usize) -> f64 {
        let mut confidence = CONFIDENCE_BASE;
        confidence +=
            (component_count as f64 * CONFIDENCE_PER_COMPONENT).min(CONFIDENCE_COMPONENT_CAP);
        confidence += (standard_count as f64 * CONFIDENCE_PER_STANDARD).min(CONFIDENCE_STANDARD_CAP);
        if self.semantic_available() {
            confidence += CONFIDENCE_SEMANTIC_BONUS;
        }
        confidence.clamp(0.0, 1.0)
    }
}

/// Flatten strategy results, logging and skipping failures.
///
/// A failing strategy must not abort the others; the caller gets the
/// union of whatever succeeded.
pub fn collect_strategy_results(
    strategies: Vec<(&'static str, Result<Vec<ComponentMatch>, OhmicError>)>,
) -> Vec<ComponentMatch> {
    let mut candidates = Vec::new();
    for (name, result) in strategies {
        match result {
            Ok(mut matches) => candidates.append(&mut matches),
            Err(error) => {
                warn!(strategy = name, %error, "retrieval strategy failed, skipping");
            }
        }
    }
    candidates
}

/// Dedup by component id; first occurrence wins.
///
/// A later, higher-scored duplicate is dropped. This mirrors the
/// reference behavior and is pinned by tests -- do not "fix" it to
/// score-max dedup without a product decision.
pub fn dedup_components(candidates: Vec<ComponentMatch>) -> Vec<ComponentMatch> {
    let mut seen: HashSet<String> = HashSet::new();
    candidates
        .into_iter()
        .filter(|candidate| seen.insert(candidate.component.id.clone()))
        .collect()
}

/// Rank candidates: base similarity plus a method boost plus a domain
/// alignment bonus when a relevance factor mentions the detected domain.
pub fn rank_components(
    mut candidates: Vec<ComponentMatch>,
    domain: DomainKind,
) -> Vec<ComponentMatch> {
    let domain_label = domain.to_string();
    let ranking_score = |candidate: &ComponentMatch| {
        let method_boost = match candidate.retrieval_method {
            RetrievalMethod::SemanticSearch => BOOST_SEMANTIC,
            RetrievalMethod::ComplianceBased => BOOST_COMPLIANCE,
            RetrievalMethod::DomainSpecific => BOOST_DOMAIN,
            RetrievalMethod::IntentBased => BOOST_INTENT,
            _ => 0.0,
        };
        let alignment = if candidate
            .relevance_factors
            .iter()
            .any(|factor| factor.contains(&domain_label))
        {
            BOOST_DOMAIN_ALIGNMENT
        } else {
            0.0
        };
        candidate.similarity_score + method_boost + alignment
    };

    candidates.sort_by(|a, b| {
        ranking_score(b)
            .partial_cmp(&ranking_score(a))
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtin::{builtin_components, builtin_standards};
    use crate::types::{ComponentCategory, ComponentRecord};
    use ohmic_core::ExpertiseLevel;

    fn engine() -> RetrievalEngine {
        RetrievalEngine::new(
            ComponentCatalog::new(builtin_components()).unwrap(),
            StandardsCatalog::new(builtin_standards()).unwrap(),
            KnowledgeConfig::default(),
        )
        .unwrap()
    }

    fn engine_without_semantic() -> RetrievalEngine {
        let mut config = KnowledgeConfig::default();
        config.semantic_search = false;
        RetrievalEngine::new(
            ComponentCatalog::new(builtin_components()).unwrap(),
            StandardsCatalog::new(builtin_standards()).unwrap(),
            config,
        )
        .unwrap()
    }

    fn context(query: &str, intent: IntentKind, domain: DomainKind) -> RetrievalContext {
        RetrievalContext {
            query: query.to_string(),
            primary_intent: intent,
            primary_domain: domain,
            complexity_score: 0.5,
            user_expertise: ExpertiseLevel::Intermediate,
        }
    }

    fn fake_match(id: &str, score: f64, method: RetrievalMethod) -> ComponentMatch {
        ComponentMatch {
            component: ComponentRecord {
                id: id.to_string(),
                part_number: id.to_uppercase(),
                name: "part".to_string(),
                manufacturer: "Acme".to_string(),
                category: ComponentCategory::Discrete,
                description: "a part".to_string(),
                voltage_range: None,
                temp_range: None,
                compliance: vec![],
            },
            similarity_score: score,
            retrieval_method: method,
            relevance_factors: vec![],
        }
    }

    #[test]
    fn retrieval_is_bounded_to_component_limit() {
        let e = engine();
        let result = e.retrieve(&context(
            "recommend a power regulator with temperature sensor and op-amp amplifier \
             for a microcontroller board",
            IntentKind::ComponentSelection,
            DomainKind::PowerElectronics,
        ));
        assert!(result.components.len() <= 10);
        assert_eq!(result.retrieval_summary.total_components, result.components.len());
    }

    #[test]
    fn no_two_results_share_a_component_id() {
        let e = engine();
        let result = e.retrieve(&context(
            "AEC-Q100 qualified automotive CAN transceiver",
            IntentKind::ComplianceChecking,
            DomainKind::Automotive,
        ));
        let mut ids: Vec<&str> =
            result.components.iter().map(|c| c.component.id.as_str()).collect();
        let before = ids.len();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), before);
    }

    #[test]
    fn first_occurrence_wins_dedup_even_when_later_scores_higher() {
        let candidates = vec![
            fake_match("cmp-a", 0.5, RetrievalMethod::IntentBased),
            fake_match("cmp-a", 0.9, RetrievalMethod::SemanticSearch),
            fake_match("cmp-b", 0.7, RetrievalMethod::DomainSpecific),
        ];
        let unique = dedup_components(candidates);
        assert_eq!(unique.len(), 2);
        assert_eq!(unique[0].component.id, "cmp-a");
        // The lower-scored first occurrence survives; the 0.9 duplicate is gone.
        assert_eq!(unique[0].similarity_score, 0.5);
        assert_eq!(unique[0].retrieval_method, RetrievalMethod::IntentBased);
    }

    #[test]
    fn ranking_boosts_methods_in_documented_order() {
        let candidates = vec![
            fake_match("cmp-intent", 0.7, RetrievalMethod::IntentBased),
            fake_match("cmp-semantic", 0.7, RetrievalMethod::SemanticSearch),
            fake_match("cmp-domain", 0.7, RetrievalMethod::DomainSpecific),
            fake_match("cmp-compliance", 0.7, RetrievalMethod::ComplianceBased),
        ];
        let ranked = rank_components(candidates, DomainKind::General);
        let order: Vec<&str> = ranked.iter().map(|c| c.component.id.as_str()).collect();
        assert_eq!(
            order,
            vec!["cmp-semantic", "cmp-compliance", "cmp-domain", "cmp-intent"]
        );
    }

    #[test]
    fn domain_alignment_bonus_lifts_matching_candidates() {
        let mut aligned = fake_match("cmp-aligned", 0.7, RetrievalMethod::IntentBased);
        aligned.relevance_factors = vec!["automotive_qualified".to_string()];
        let plain = fake_match("cmp-plain", 0.7, RetrievalMethod::IntentBased);
        let ranked = rank_components(vec![plain, aligned], DomainKind::Automotive);
        assert_eq!(ranked[0].component.id, "cmp-aligned");
    }

    #[test]
    fn failed_strategy_is_skipped_not_fatal() {
        let strategies = vec![
            (
                "broken",
                Err(OhmicError::Retrieval {
                    strategy: "broken",
                    message: "poisoned mapping".to_string(),
                }),
            ),
            ("working", Ok(vec![fake_match("cmp-ok", 0.7, RetrievalMethod::IntentBased)])),
        ];
        let collected = collect_strategy_results(strategies);
        assert_eq!(collected.len(), 1);
        assert_eq!(collected[0].component.id, "cmp-ok");
    }

    #[test]
    fn automotive_domain_pulls_aec_q100_components() {
        let e = engine_without_semantic();
        let result = e.retrieve(&context(
            "thermal layout review",
            IntentKind::ThermalAnalysis,
            DomainKind::Automotive,
        ));
        assert!(!result.components.is_empty());
        for candidate in &result.components {
            assert!(candidate.component.has_compliance(ComplianceTag::AecQ100));
            assert_eq!(candidate.retrieval_method, RetrievalMethod::DomainSpecific);
        }
    }

    #[test]
    fn medical_domain_pulls_iec_60601_components() {
        let e = engine_without_semantic();
        let result = e.retrieve(&context(
            "patient monitor front end",
            IntentKind::CircuitAnalysis,
            DomainKind::Medical,
        ));
        assert!(!result.components.is_empty());
        for candidate in &result.components {
            assert!(candidate.component.has_compliance(ComplianceTag::Iec60601));
        }
    }

    #[test]
    fn standards_include_domain_and_query_hits_without_duplicates() {
        let e = engine();
        let result = e.retrieve(&context(
            "Verify AEC-Q100 temperature cycling and IEC 60601 patient leakage current limits",
            IntentKind::ComplianceChecking,
            DomainKind::Automotive,
        ));
        // Automotive domain standards appear, plus the medical standard
        // via the requirement search; nothing twice.
        let mut ids: Vec<&str> =
            result.standards.iter().map(|s| s.standard.id.as_str()).collect();
        let before = ids.len();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), before);
        assert!(result.standards.iter().any(|s| s.standard.id == "std-iec60601"));
        assert!(result.standards.iter().any(|s| s.standard.id == "std-aecq100"));
        // The automotive parent came from the domain pull, so its entry
        // carries no specific requirement; the medical one does.
        let medical = result
            .standards
            .iter()
            .find(|s| s.standard.id == "std-iec60601")
            .unwrap();
        assert_eq!(medical.retrieval_method, RetrievalMethod::QueryBased);
        assert!(medical.specific_requirement.is_some());
        assert_eq!(medical.relevance_score, SCORE_STANDARD_QUERY);
    }

    #[test]
    fn query_without_standard_codes_skips_requirement_search() {
        let e = engine();
        let result = e.retrieve(&context(
            "buck converter layout",
            IntentKind::CircuitAnalysis,
            DomainKind::PowerElectronics,
        ));
        assert!(result
            .standards
            .iter()
            .all(|s| s.retrieval_method == RetrievalMethod::DomainBased));
    }

    #[test]
    fn confidence_reflects_results_and_semantic_availability() {
        let with_semantic = engine();
        let without_semantic = engine_without_semantic();
        let ctx = context(
            "recommend a microcontroller",
            IntentKind::ComponentSelection,
            DomainKind::EmbeddedHardware,
        );
        let rich = with_semantic.retrieve(&ctx);
        let degraded = without_semantic.retrieve(&ctx);
        assert!(rich.retrieval_summary.confidence > degraded.retrieval_summary.confidence);
        assert!((0.0..=1.0).contains(&rich.retrieval_summary.confidence));
        // Degraded engines do not advertise the semantic method.
        assert!(!degraded
            .retrieval_summary
            .retrieval_methods
            .contains(&RetrievalMethod::SemanticSearch));
    }

    #[test]
    fn empty_catalogs_yield_empty_best_effort_results() {
        let engine = RetrievalEngine::new(
            ComponentCatalog::new(Vec::new()).unwrap(),
            StandardsCatalog::new(Vec::new()).unwrap(),
            KnowledgeConfig::default(),
        )
        .unwrap();
        assert!(!engine.semantic_available());
        let result = engine.retrieve(&context(
            "anything at all",
            IntentKind::ComponentSelection,
            DomainKind::General,
        ));
        assert!(result.components.is_empty());
        assert!(result.standards.is_empty());
        assert_eq!(result.retrieval_summary.total_components, 0);
    }

    #[test]
    fn domain_context_matches_detected_domain() {
        let e = engine();
        let result = e.retrieve(&context(
            "CAN bus wiring",
            IntentKind::CircuitAnalysis,
            DomainKind::Automotive,
        ));
        assert_eq!(result.domain_context.domain, DomainKind::Automotive);
        assert!(!result.domain_context.key_considerations.is_empty());
    }
}
