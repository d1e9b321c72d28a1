// SPDX-FileCopyrightText: 2026 Ohmic Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration data model.
//!
//! Every field carries a serde default so a missing section or key falls
//! back to the compiled defaults; `deny_unknown_fields` turns typos into
//! load-time diagnostics instead of silently ignored keys.

use serde::{Deserialize, Serialize};

/// Root configuration for the Ohmic engine.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(deny_unknown_fields)]
pub struct OhmicConfig {
    /// Query analysis settings.
    #[serde(default)]
    pub analysis: AnalysisConfig,

    /// Model routing thresholds and target identifiers.
    #[serde(default)]
    pub routing: RoutingConfig,

    /// Knowledge retrieval limits and strategy toggles.
    #[serde(default)]
    pub knowledge: KnowledgeConfig,
}

/// Query analysis settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AnalysisConfig {
    /// Fraction of the primary intent's confidence a secondary intent
    /// must reach to be reported in multi-intent mode.
    #[serde(default = "default_multi_intent_ratio")]
    pub multi_intent_ratio: f64,

    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            multi_intent_ratio: default_multi_intent_ratio(),
            log_level: default_log_level(),
        }
    }
}

fn default_multi_intent_ratio() -> f64 {
    0.5
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Model routing thresholds and the four downstream target identifiers.
///
/// Thresholds are evaluated strictly highest-first; `mid_threshold` and
/// `high_threshold` bands overlap on paper and the evaluation order is
/// the disambiguation rule.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RoutingConfig {
    /// Force all queries to a specific model identifier, bypassing
    /// classification. Must name one of the four configured targets.
    #[serde(default)]
    pub force_model: Option<String>,

    /// Identifier of the highest-capability model (complexity >= highest_threshold).
    #[serde(default = "default_highest_model")]
    pub highest_model: String,

    /// Identifier of the high-capability model.
    #[serde(default = "default_high_model")]
    pub high_model: String,

    /// Identifier of the mid-capability model.
    #[serde(default = "default_mid_model")]
    pub mid_model: String,

    /// Identifier of the lightweight model (everything below mid_threshold).
    #[serde(default = "default_lightweight_model")]
    pub lightweight_model: String,

    /// Lower complexity bound of the highest tier.
    #[serde(default = "default_highest_threshold")]
    pub highest_threshold: f64,

    /// Lower complexity bound of the high tier.
    #[serde(default = "default_high_threshold")]
    pub high_threshold: f64,

    /// Lower complexity bound of the mid tier.
    #[serde(default = "default_mid_threshold")]
    pub mid_threshold: f64,

    /// Scores within this distance below a threshold escalate to the
    /// more capable tier (conservative boundary policy).
    #[serde(default = "default_boundary_margin")]
    pub boundary_margin: f64,
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            force_model: None,
            highest_model: default_highest_model(),
            high_model: default_high_model(),
            mid_model: default_mid_model(),
            lightweight_model: default_lightweight_model(),
            highest_threshold: default_highest_threshold(),
            high_threshold: default_high_threshold(),
            mid_threshold: default_mid_threshold(),
            boundary_margin: default_boundary_margin(),
        }
    }
}

fn default_highest_model() -> String {
    "claude_sonnet_4".to_string()
}

fn default_high_model() -> String {
    "grok_2".to_string()
}

fn default_mid_model() -> String {
    "gpt_4o".to_string()
}

fn default_lightweight_model() -> String {
    "gpt_4o_mini".to_string()
}

fn default_highest_threshold() -> f64 {
    0.8
}

fn default_high_threshold() -> f64 {
    0.6
}

fn default_mid_threshold() -> f64 {
    0.4
}

fn default_boundary_margin() -> f64 {
    0.05
}

/// Knowledge retrieval limits and strategy toggles.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct KnowledgeConfig {
    /// Enable the semantic retrieval strategy. Availability is still
    /// checked once at engine construction; disabling here skips the
    /// index build entirely.
    #[serde(default = "default_semantic_search")]
    pub semantic_search: bool,

    /// Candidate count requested from the semantic index.
    #[serde(default = "default_semantic_top_n")]
    pub semantic_top_n: usize,

    /// Minimum cosine similarity for a semantic candidate.
    #[serde(default = "default_similarity_threshold")]
    pub similarity_threshold: f64,

    /// Upper bound on ranked components in a retrieval result.
    #[serde(default = "default_component_limit")]
    pub component_limit: usize,

    /// Candidates pulled per inferred category by the intent strategy.
    #[serde(default = "default_intent_per_category")]
    pub intent_per_category: usize,

    /// Candidates pulled by the compliance-filtered intent strategy.
    #[serde(default = "default_compliance_limit")]
    pub compliance_limit: usize,

    /// Candidates pulled per rule by the domain-specific strategy.
    #[serde(default = "default_domain_limit")]
    pub domain_limit: usize,
}

impl Default for KnowledgeConfig {
    fn default() -> Self {
        Self {
            semantic_search: default_semantic_search(),
            semantic_top_n: default_semantic_top_n(),
            similarity_threshold: default_similarity_threshold(),
            component_limit: default_component_limit(),
            intent_per_category: default_intent_per_category(),
            compliance_limit: default_compliance_limit(),
            domain_limit: default_domain_limit(),
        }
    }
}

fn default_semantic_search() -> bool {
    true
}

fn default_semantic_top_n() -> usize {
    8
}

fn default_similarity_threshold() -> f64 {
    0.1
}

fn default_component_limit() -> usize {
    10
}

fn default_intent_per_category() -> usize {
    3
}

fn default_compliance_limit() -> usize {
    5
}

fn default_domain_limit() -> usize {
    4
}
