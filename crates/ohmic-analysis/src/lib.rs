// SPDX-FileCopyrightText: 2026 Ohmic Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Query analysis for the Ohmic engine.
//!
//! This crate provides:
//! - [`KeywordSet`]/[`IndicatorSet`]: compiled match structures, built
//!   once at startup and validated so matching cannot fail at runtime
//! - [`Taxonomy`]: the static intent/domain/complexity-factor tables
//! - [`IntentClassifier`]: confidence-ranked intent classification
//! - [`ComplexityScorer`]: six-factor weighted complexity scoring
//! - [`QueryAnalyzer`]: the orchestrator composing classification,
//!   domain detection, complexity scoring, and model routing
//!
//! All scoring is synchronous, allocation-light, and deterministic;
//! shared state is read-only after construction.

pub mod analyzer;
pub mod complexity;
pub mod intent;
pub mod matcher;
pub mod scorer;
pub mod taxonomy;

pub use analyzer::{
    AnalysisMetadata, AnalysisResult, AnalyzeOptions, Classification, DomainScore,
    IntentCombination, IntentScore, QueryAnalyzer,
};
pub use complexity::{ComplexityBreakdown, ComplexityScorer, FactorScores};
pub use intent::IntentClassifier;
pub use matcher::{IndicatorSet, KeywordSet};
pub use taxonomy::Taxonomy;
