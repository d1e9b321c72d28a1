// SPDX-FileCopyrightText: 2026 Ohmic Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Optional lexical similarity index over component descriptions.
//!
//! Builds token-frequency vectors per component and ranks candidates by
//! cosine similarity against the query vector. Availability is decided
//! once at engine construction -- the index exists or it does not -- and
//! the strategy dispatcher consumes that explicit flag; retrieval never
//! discovers the capability mid-call.

use std::collections::HashMap;

use crate::catalog::ComponentCatalog;
use crate::constraints::QueryConstraints;
use crate::types::ComponentRecord;

/// A scored candidate from the index: (component id, similarity).
pub type SimilarityHit = (String, f64);

/// Token-frequency vectors over component descriptions.
pub struct SemanticIndex {
    vocabulary: HashMap<String, usize>,
    /// Sparse vectors in catalog order: (component id, term counts).
    vectors: Vec<(String, HashMap<usize, f64>)>,
}

impl SemanticIndex {
    /// Build an index from the catalog's descriptions.
    ///
    /// Returns `None` when the catalog carries no usable description
    /// text; the caller records the capability as unavailable and the
    /// remaining strategies carry retrieval on their own.
    pub fn build(catalog: &ComponentCatalog) -> Option<Self> {
        let mut vocabulary: HashMap<String, usize> = HashMap::new();
        let mut vectors = Vec::new();

        for component in catalog.iter() {
            let text = format!(
                "{} {} {} {}",
                component.part_number, component.name, component.manufacturer,
                component.description
            );
            let tokens = tokenize(&text);
            if tokens.is_empty() {
                continue;
            }
            let mut counts: HashMap<usize, f64> = HashMap::new();
            for token in tokens {
                let next_id = vocabulary.len();
                let id = *vocabulary.entry(token).or_insert(next_id);
                *counts.entry(id).or_insert(0.0) += 1.0;
            }
            vectors.push((component.id.clone(), counts));
        }

        if vectors.is_empty() {
            return None;
        }

        Some(Self {
            vocabulary,
            vectors,
        })
    }

    /// Rank components by cosine similarity to the query.
    ///
    /// Results are sorted descending, filtered by `threshold`, and
    /// capped at `top_n`. Ties resolve in catalog order (stable sort).
    pub fn search(&self, query: &str, top_n: usize, threshold: f64) -> Vec<SimilarityHit> {
        let tokens = tokenize(query);
        if tokens.is_empty() {
            return Vec::new();
        }

        let mut query_vector: HashMap<usize, f64> = HashMap::new();
        for token in tokens {
            if let Some(&id) = self.vocabulary.get(&token) {
                *query_vector.entry(id).or_insert(0.0) += 1.0;
            }
        }
        if query_vector.is_empty() {
            return Vec::new();
        }

        let mut hits: Vec<SimilarityHit> = self
            .vectors
            .iter()
            .filter_map(|(id, vector)| {
                let similarity = sparse_cosine_similarity(&query_vector, vector);
                (similarity >= threshold).then(|| (id.clone(), similarity))
            })
            .collect();

        hits.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        hits.truncate(top_n);
        hits
    }

    /// Rank components, then drop candidates violating the extracted
    /// constraints (voltage/temperature containment, compliance tags).
    pub fn search_with_constraints(
        &self,
        query: &str,
        constraints: &QueryConstraints,
        catalog: &ComponentCatalog,
        top_n: usize,
        threshold: f64,
    ) -> Vec<SimilarityHit> {
        // Over-fetch before filtering so constraint-heavy queries still
        // fill their candidate budget.
        self.search(query, top_n * 2, threshold)
            .into_iter()
            .filter(|(id, _)| {
                catalog
                    .get(id)
                    .is_some_and(|component| satisfies_constraints(component, constraints))
            })
            .take(top_n)
            .collect()
    }
}

/// Whether a component satisfies every extracted constraint.
fn satisfies_constraints(component: &ComponentRecord, constraints: &QueryConstraints) -> bool {
    if let Some((min, max)) = constraints.voltage_range {
        match component.voltage_range {
            Some((lo, hi)) if lo <= min && hi >= max => {}
            _ => return false,
        }
    }
    if let Some((min, max)) = constraints.temp_range {
        match component.temp_range {
            Some((lo, hi)) if lo <= min && hi >= max => {}
            _ => return false,
        }
    }
    constraints
        .compliance
        .iter()
        .all(|tag| component.has_compliance(*tag))
}

/// Cosine similarity between two sparse term-count vectors.
fn sparse_cosine_similarity(a: &HashMap<usize, f64>, b: &HashMap<usize, f64>) -> f64 {
    let dot: f64 = a
        .iter()
        .filter_map(|(id, weight)| b.get(id).map(|other| weight * other))
        .sum();
    if dot == 0.0 {
        return 0.0;
    }
    let norm_a: f64 = a.values().map(|w| w * w).sum::<f64>().sqrt();
    let norm_b: f64 = b.values().map(|w| w * w).sum::<f64>().sqrt();
    dot / (norm_a * norm_b)
}

/// Lowercased alphanumeric tokens of length >= 2.
fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| t.len() >= 2)
        .map(str::to_string)
        .collect()
}
