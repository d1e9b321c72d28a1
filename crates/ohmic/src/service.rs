// SPDX-FileCopyrightText: 2026 Ohmic Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Composition root.
//!
//! The service is constructed explicitly once at process start from a
//! validated configuration and injected into commands. All contained
//! state is immutable after construction, so one instance serves
//! concurrent callers without locking.

use std::sync::Arc;

use ohmic_analysis::{QueryAnalyzer, Taxonomy};
use ohmic_config::OhmicConfig;
use ohmic_core::OhmicError;
use ohmic_knowledge::builtin::{builtin_components, builtin_standards};
use ohmic_knowledge::{ComponentCatalog, RetrievalEngine, StandardsCatalog};

/// The assembled analysis and retrieval service.
pub struct OhmicService {
    analyzer: QueryAnalyzer,
    engine: RetrievalEngine,
}

impl OhmicService {
    /// Build the service over the builtin reference catalogs.
    pub fn from_config(config: &OhmicConfig) -> Result<Self, OhmicError> {
        let taxonomy = Arc::new(Taxonomy::builtin()?);
        let analyzer = QueryAnalyzer::new(taxonomy, config);
        let engine = RetrievalEngine::new(
            ComponentCatalog::new(builtin_components())?,
            StandardsCatalog::new(builtin_standards())?,
            config.knowledge.clone(),
        )?;
        Ok(Self { analyzer, engine })
    }

    /// The query analyzer.
    pub fn analyzer(&self) -> &QueryAnalyzer {
        &self.analyzer
    }

    /// The knowledge retrieval engine.
    pub fn engine(&self) -> &RetrievalEngine {
        &self.engine
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_builds_from_default_config() {
        let service = OhmicService::from_config(&OhmicConfig::default()).unwrap();
        assert!(service.engine().semantic_available());
    }
}
