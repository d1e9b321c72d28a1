// SPDX-FileCopyrightText: 2026 Ohmic Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `ohmic analyze` command implementation.
//!
//! Runs the full analysis pipeline on one query and prints the result
//! as JSON, optionally enriched with retrieved knowledge.

use ohmic_analysis::AnalyzeOptions;
use ohmic_core::{DomainKind, ExpertiseLevel, OhmicError};
use ohmic_knowledge::RetrievalContext;
use serde::Serialize;

use crate::service::OhmicService;

/// Combined output of one analyze invocation.
#[derive(Serialize)]
struct AnalyzeOutput {
    analysis: ohmic_analysis::AnalysisResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    knowledge: Option<ohmic_knowledge::KnowledgeResult>,
}

/// Run the analyze command and print JSON to stdout.
pub fn run_analyze(
    service: &OhmicService,
    query: &str,
    expertise: ExpertiseLevel,
    preferred_domain: Option<DomainKind>,
    multi_intent: bool,
    with_knowledge: bool,
) -> Result<(), OhmicError> {
    let options = AnalyzeOptions {
        enable_multi_intent: multi_intent,
        preferred_domain,
        expertise,
    };
    let analysis = service.analyzer().analyze(query, &options)?;

    let knowledge = with_knowledge.then(|| {
        let context = RetrievalContext {
            query: query.to_string(),
            primary_intent: analysis.classification.primary_intent.intent,
            primary_domain: analysis.classification.primary_domain.domain,
            complexity_score: analysis.complexity.final_score,
            user_expertise: expertise,
        };
        service.engine().retrieve(&context)
    });

    let output = AnalyzeOutput {
        analysis,
        knowledge,
    };
    let json = serde_json::to_string_pretty(&output)
        .map_err(|e| OhmicError::Internal(format!("result serialization failed: {e}")))?;
    println!("{json}");
    Ok(())
}
