// SPDX-FileCopyrightText: 2026 Ohmic Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Read-only reference catalogs.
//!
//! The catalogs wrap externally supplied component and standards
//! collections. They are immutable after construction and safe to share
//! across concurrent retrieval calls; the engine never mutates or
//! persists them.

use std::collections::HashSet;

use ohmic_core::{DomainKind, OhmicError};

use crate::types::{ComplianceTag, ComponentCategory, ComponentRecord, StandardRecord,
    StandardRequirement};

/// Immutable component reference collection.
pub struct ComponentCatalog {
    components: Vec<ComponentRecord>,
}

impl ComponentCatalog {
    /// Wrap a component collection, validating id uniqueness.
    ///
    /// Duplicate ids would make strategy deduplication ambiguous, so
    /// they are rejected at construction.
    pub fn new(components: Vec<ComponentRecord>) -> Result<Self, OhmicError> {
        let mut seen = HashSet::new();
        for component in &components {
            if !seen.insert(component.id.as_str()) {
                return Err(OhmicError::Config(format!(
                    "duplicate component id `{}` in reference catalog",
                    component.id
                )));
            }
        }
        Ok(Self { components })
    }

    /// Look up a component by id.
    pub fn get(&self, id: &str) -> Option<&ComponentRecord> {
        self.components.iter().find(|c| c.id == id)
    }

    /// All components of a category, in catalog order.
    pub fn by_category(&self, category: ComponentCategory) -> Vec<&ComponentRecord> {
        self.components.iter().filter(|c| c.category == category).collect()
    }

    /// Components carrying at least one of the requested tags.
    pub fn with_any_compliance(&self, tags: &[ComplianceTag]) -> Vec<&ComponentRecord> {
        self.components
            .iter()
            .filter(|c| tags.iter().any(|tag| c.has_compliance(*tag)))
            .collect()
    }

    /// Components carrying a specific tag.
    pub fn with_compliance(&self, tag: ComplianceTag) -> Vec<&ComponentRecord> {
        self.components.iter().filter(|c| c.has_compliance(tag)).collect()
    }

    /// Iterate all components.
    pub fn iter(&self) -> impl Iterator<Item = &ComponentRecord> {
        self.components.iter()
    }

    /// Number of components in the catalog.
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}

/// Immutable standards reference collection.
pub struct StandardsCatalog {
    standards: Vec<StandardRecord>,
}

impl StandardsCatalog {
    /// Wrap a standards collection, validating id uniqueness.
    pub fn new(standards: Vec<StandardRecord>) -> Result<Self, OhmicError> {
        let mut seen = HashSet::new();
        for standard in &standards {
            if !seen.insert(standard.id.as_str()) {
                return Err(OhmicError::Config(format!(
                    "duplicate standard id `{}` in reference catalog",
                    standard.id
                )));
            }
        }
        Ok(Self { standards })
    }

    /// All standards governing a domain, in catalog order.
    pub fn by_domain(&self, domain: DomainKind) -> Vec<&StandardRecord> {
        self.standards.iter().filter(|s| s.domain == domain).collect()
    }

    /// Search requirement texts for overlap with the query.
    ///
    /// A requirement matches when it shares at least one significant
    /// token (length >= 4) with the query; results are ordered by shared
    /// token count descending, then catalog order.
    pub fn search_requirements(
        &self,
        query: &str,
    ) -> Vec<(&StandardRecord, &StandardRequirement)> {
        let tokens: Vec<String> = query
            .to_lowercase()
            .split(|c: char| !c.is_alphanumeric())
            .filter(|t| t.len() >= 4)
            .map(str::to_string)
            .collect();
        if tokens.is_empty() {
            return Vec::new();
        }

        let mut hits: Vec<(usize, &StandardRecord, &StandardRequirement)> = Vec::new();
        for standard in &self.standards {
            for requirement in &standard.requirements {
                let text = requirement.text.to_lowercase();
                let shared = tokens.iter().filter(|t| text.contains(t.as_str())).count();
                if shared > 0 {
                    hits.push((shared, standard, requirement));
                }
            }
        }
        hits.sort_by(|a, b| b.0.cmp(&a.0));
        hits.into_iter().map(|(_, s, r)| (s, r)).collect()
    }

    /// Iterate all standards.
    pub fn iter(&self) -> impl Iterator<Item = &StandardRecord> {
        self.standards.iter()
    }

    /// Number of standards in the catalog.
    pub fn len(&self) -> usize {
        self.standards.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.standards.is_empty()
    }
}
