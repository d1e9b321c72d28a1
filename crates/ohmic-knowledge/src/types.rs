// SPDX-FileCopyrightText: 2026 Ohmic Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain types for knowledge retrieval.
//!
//! Component and standard records are externally owned, read-only
//! reference data; the engine only reads and ranks them. Everything the
//! engine produces per call ([`KnowledgeResult`] and its parts) is
//! ephemeral and never cached across calls.

use ohmic_core::{DomainKind, ExpertiseLevel, IntentKind};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// Compliance and qualification tags carried by components and matched
/// by retrieval rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum ComplianceTag {
    #[strum(serialize = "AEC-Q100")]
    #[serde(rename = "AEC-Q100")]
    AecQ100,
    #[strum(serialize = "ISO 26262")]
    #[serde(rename = "ISO 26262")]
    Iso26262,
    #[strum(serialize = "IEC 60601")]
    #[serde(rename = "IEC 60601")]
    Iec60601,
    #[strum(serialize = "CISPR 25")]
    #[serde(rename = "CISPR 25")]
    Cispr25,
    #[strum(serialize = "IEC 61508")]
    #[serde(rename = "IEC 61508")]
    Iec61508,
    #[strum(serialize = "FCC Part 15")]
    #[serde(rename = "FCC Part 15")]
    FccPart15,
}

/// Coarse component categories the catalog is queryable by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, Serialize, Deserialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ComponentCategory {
    Microcontroller,
    PowerManagement,
    Sensor,
    AnalogIc,
    Interface,
    Discrete,
}

/// One read-only component reference record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentRecord {
    /// Unique identifier; dedup key across retrieval strategies.
    pub id: String,
    pub part_number: String,
    pub name: String,
    pub manufacturer: String,
    pub category: ComponentCategory,
    pub description: String,
    /// Operating voltage range in volts (min, max), when specified.
    pub voltage_range: Option<(f64, f64)>,
    /// Operating temperature range in °C (min, max), when specified.
    pub temp_range: Option<(f64, f64)>,
    pub compliance: Vec<ComplianceTag>,
}

impl ComponentRecord {
    /// Whether the record carries the given compliance tag.
    pub fn has_compliance(&self, tag: ComplianceTag) -> bool {
        self.compliance.contains(&tag)
    }
}

/// One requirement clause within a standard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandardRequirement {
    pub id: String,
    pub clause: String,
    pub text: String,
}

/// One read-only compliance standard record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandardRecord {
    pub id: String,
    /// Canonical code as written in queries, e.g. "AEC-Q100".
    pub code: String,
    pub name: String,
    /// Domain this standard governs.
    pub domain: DomainKind,
    pub description: String,
    pub requirements: Vec<StandardRequirement>,
}

/// How a candidate entered the result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum RetrievalMethod {
    SemanticSearch,
    IntentBased,
    ComplianceBased,
    DomainSpecific,
    DomainBased,
    QueryBased,
}

/// Context handed from the query analyzer to the retrieval engine.
#[derive(Debug, Clone)]
pub struct RetrievalContext {
    pub query: String,
    pub primary_intent: IntentKind,
    pub primary_domain: DomainKind,
    pub complexity_score: f64,
    pub user_expertise: ExpertiseLevel,
}

/// One ranked component candidate.
#[derive(Debug, Clone, Serialize)]
pub struct ComponentMatch {
    pub component: ComponentRecord,
    pub similarity_score: f64,
    pub retrieval_method: RetrievalMethod,
    pub relevance_factors: Vec<String>,
}

/// One ranked standard candidate.
#[derive(Debug, Clone, Serialize)]
pub struct StandardMatch {
    pub standard: StandardRecord,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specific_requirement: Option<StandardRequirement>,
    pub relevance_score: f64,
    pub retrieval_method: RetrievalMethod,
}

/// Contextual summary of the detected domain.
#[derive(Debug, Clone, Serialize)]
pub struct DomainContext {
    pub domain: DomainKind,
    pub scope: String,
    pub expertise_areas: Vec<String>,
    pub complexity_weight: f64,
    pub typical_components: Vec<String>,
    pub key_considerations: Vec<String>,
}

/// Counts and confidence for one retrieval call.
#[derive(Debug, Clone, Serialize)]
pub struct RetrievalSummary {
    pub total_components: usize,
    pub total_standards: usize,
    pub retrieval_methods: Vec<RetrievalMethod>,
    pub confidence: f64,
}

/// Consolidated knowledge retrieval result.
#[derive(Debug, Clone, Serialize)]
pub struct KnowledgeResult {
    pub components: Vec<ComponentMatch>,
    pub standards: Vec<StandardMatch>,
    pub domain_context: DomainContext,
    pub retrieval_summary: RetrievalSummary,
}
