// SPDX-FileCopyrightText: 2026 Ohmic Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Vocabulary types shared across the Ohmic workspace.
//!
//! These enums are the fixed taxonomies of the system: intent categories,
//! hardware domains, user expertise levels, and model capability tiers.
//! They serialize as snake_case strings, which is also the form used in
//! configuration files and caller-facing JSON.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// The category of hardware-engineering task a query represents.
///
/// Twelve fixed categories. The declaration order here is load-bearing:
/// it is the deterministic tie-break order for intent classification.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum IntentKind {
    CircuitAnalysis,
    ComponentSelection,
    ComplianceChecking,
    CostOptimization,
    Troubleshooting,
    DesignValidation,
    EducationalContent,
    SupplyChainAnalysis,
    ThermalAnalysis,
    TestingValidation,
    PerformanceOptimization,
    QualityAssurance,
}

/// The hardware-engineering subfield a query pertains to.
///
/// Eight detectable domains plus `General`, the fallback when no domain
/// keywords match. `General` is never keyword-scored; it only appears as
/// the default. Declaration order is the domain tie-break order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum DomainKind {
    Automotive,
    Medical,
    PowerElectronics,
    AnalogRf,
    DigitalDesign,
    EmbeddedHardware,
    IndustrialControl,
    Consumer,
    General,
}

impl DomainKind {
    /// Whether this is the fallback domain rather than a detected one.
    pub fn is_general(&self) -> bool {
        matches!(self, DomainKind::General)
    }
}

/// Self-reported technical expertise of the user issuing the query.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize, Default,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ExpertiseLevel {
    Beginner,
    #[default]
    Intermediate,
    Senior,
    Expert,
}

/// Capability tier of a downstream response-generation model.
///
/// Ordered least-capable first so that `Ord` comparisons answer
/// "is this tier more capable?" directly.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    EnumString,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ModelTier {
    Lightweight,
    Mid,
    High,
    Highest,
}
