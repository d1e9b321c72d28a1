// SPDX-FileCopyrightText: 2026 Ohmic Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Knowledge retrieval for the Ohmic engine.
//!
//! Given an analyzed query (intent, domain, complexity), the
//! [`RetrievalEngine`] runs three independent component strategies
//! against read-only reference catalogs, deduplicates and ranks the
//! candidates, retrieves applicable compliance standards, and reports a
//! confidence-scored [`KnowledgeResult`]. The optional semantic strategy
//! degrades gracefully: availability is decided once at construction and
//! retrieval never fails because of it.

pub mod builtin;
pub mod catalog;
pub mod constraints;
pub mod domains;
pub mod engine;
pub mod semantic;
pub mod types;

pub use catalog::{ComponentCatalog, StandardsCatalog};
pub use constraints::{ConstraintExtractor, QueryConstraints};
pub use engine::RetrievalEngine;
pub use semantic::SemanticIndex;
pub use types::{
    ComplianceTag, ComponentCategory, ComponentMatch, ComponentRecord, DomainContext,
    KnowledgeResult, RetrievalContext, RetrievalMethod, RetrievalSummary, StandardMatch,
    StandardRecord, StandardRequirement,
};
