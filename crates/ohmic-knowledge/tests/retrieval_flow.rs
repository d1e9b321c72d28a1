// SPDX-FileCopyrightText: 2026 Ohmic Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! End-to-end flow: analyze a query, then retrieve knowledge for it.

use std::sync::Arc;

use ohmic_analysis::{AnalyzeOptions, QueryAnalyzer, Taxonomy};
use ohmic_config::OhmicConfig;
use ohmic_core::{DomainKind, ExpertiseLevel, IntentKind, ModelTier};
use ohmic_knowledge::builtin::{builtin_components, builtin_standards};
use ohmic_knowledge::{ComponentCatalog, RetrievalContext, RetrievalEngine, StandardsCatalog};

fn analyzer() -> QueryAnalyzer {
    QueryAnalyzer::new(
        Arc::new(Taxonomy::builtin().unwrap()),
        &OhmicConfig::default(),
    )
}

fn engine() -> RetrievalEngine {
    RetrievalEngine::new(
        ComponentCatalog::new(builtin_components()).unwrap(),
        StandardsCatalog::new(builtin_standards()).unwrap(),
        OhmicConfig::default().knowledge,
    )
    .unwrap()
}

fn context_for(query: &str, expertise: ExpertiseLevel) -> RetrievalContext {
    let analysis = analyzer()
        .analyze(
            query,
            &AnalyzeOptions {
                expertise,
                ..Default::default()
            },
        )
        .unwrap();
    RetrievalContext {
        query: query.to_string(),
        primary_intent: analysis.classification.primary_intent.intent,
        primary_domain: analysis.classification.primary_domain.domain,
        complexity_score: analysis.complexity.final_score,
        user_expertise: expertise,
    }
}

#[test]
fn expert_automotive_design_flow() {
    let query = "Design automotive buck converter with thermal analysis, EMI optimization, \
                 efficiency calculation, AEC-Q100 qualified";
    let analysis = analyzer()
        .analyze(
            query,
            &AnalyzeOptions {
                expertise: ExpertiseLevel::Expert,
                ..Default::default()
            },
        )
        .unwrap();
    assert_eq!(analysis.classification.primary_domain.domain, DomainKind::Automotive);
    assert!(analysis.complexity.final_score >= 0.8);
    assert_eq!(analysis.routing.tier, ModelTier::Highest);

    let result = engine().retrieve(&context_for(query, ExpertiseLevel::Expert));
    assert!(result.components.len() <= 10);
    // The automotive domain rule contributes AEC-Q100 parts.
    assert!(result
        .components
        .iter()
        .any(|c| c.component.compliance.iter().any(|t| t.to_string() == "AEC-Q100")));
    // Automotive standards come along.
    assert!(result.standards.iter().any(|s| s.standard.code == "AEC-Q100"));
    assert_eq!(result.domain_context.domain, DomainKind::Automotive);
}

#[test]
fn simple_pinout_flow_stays_lightweight() {
    let query = "What is the pinout of 555 timer IC?";
    let analysis = analyzer().analyze(query, &AnalyzeOptions::default()).unwrap();
    assert!(analysis.complexity.final_score < 0.4);
    assert_eq!(analysis.routing.tier, ModelTier::Lightweight);
    assert_eq!(
        analysis.classification.primary_intent.intent,
        IntentKind::EducationalContent
    );
}

#[test]
fn cross_domain_compliance_flow_has_no_duplicate_standards() {
    let query = "Check AEC-Q100 automotive qualification and IEC 60601 medical leakage \
                 current compliance for this amplifier";
    let result = engine().retrieve(&context_for(query, ExpertiseLevel::Senior));
    let mut ids: Vec<&str> = result.standards.iter().map(|s| s.standard.id.as_str()).collect();
    let before = ids.len();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), before, "no standard may appear twice");
    // Both compliance regimes are represented.
    assert!(result.standards.iter().any(|s| s.standard.code == "AEC-Q100"));
    assert!(result.standards.iter().any(|s| s.standard.code == "IEC 60601"));
}

#[test]
fn retrieval_summary_counts_are_consistent() {
    let result = engine().retrieve(&context_for(
        "Recommend a low power microcontroller for a battery powered sensor node",
        ExpertiseLevel::Intermediate,
    ));
    assert_eq!(result.retrieval_summary.total_components, result.components.len());
    assert_eq!(result.retrieval_summary.total_standards, result.standards.len());
    assert!((0.0..=1.0).contains(&result.retrieval_summary.confidence));
}
