// SPDX-FileCopyrightText: 2026 Ohmic Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Validates semantic constraints serde attributes cannot express:
//! threshold ordering, probability ranges, non-zero limits, and that a
//! forced model names one of the four configured targets.

use crate::diagnostic::ConfigError;
use crate::model::OhmicConfig;

/// Validate a deserialized configuration for semantic correctness.
///
/// Returns `Ok(())` if all validations pass, or `Err(Vec<ConfigError>)`
/// with all collected validation errors (does not fail fast).
pub fn validate_config(config: &OhmicConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    let r = &config.routing;

    // Thresholds must sit strictly inside (0, 1) and strictly descend.
    for (name, value) in [
        ("routing.highest_threshold", r.highest_threshold),
        ("routing.high_threshold", r.high_threshold),
        ("routing.mid_threshold", r.mid_threshold),
    ] {
        if !(0.0 < value && value < 1.0) {
            errors.push(ConfigError::Validation {
                message: format!("{name} must be in (0, 1), got {value}"),
            });
        }
    }

    if !(r.highest_threshold > r.high_threshold && r.high_threshold > r.mid_threshold) {
        errors.push(ConfigError::Validation {
            message: format!(
                "routing thresholds must strictly descend (highest > high > mid), got {} / {} / {}",
                r.highest_threshold, r.high_threshold, r.mid_threshold
            ),
        });
    }

    if !(0.0..=0.1).contains(&r.boundary_margin) {
        errors.push(ConfigError::Validation {
            message: format!(
                "routing.boundary_margin must be in [0, 0.1], got {}",
                r.boundary_margin
            ),
        });
    }

    // Model identifiers must be non-empty and pairwise distinct.
    let models = [
        ("routing.highest_model", r.highest_model.as_str()),
        ("routing.high_model", r.high_model.as_str()),
        ("routing.mid_model", r.mid_model.as_str()),
        ("routing.lightweight_model", r.lightweight_model.as_str()),
    ];
    for (name, id) in models {
        if id.trim().is_empty() {
            errors.push(ConfigError::Validation {
                message: format!("{name} must not be empty"),
            });
        }
    }
    for i in 0..models.len() {
        for j in (i + 1)..models.len() {
            if !models[i].1.is_empty() && models[i].1 == models[j].1 {
                errors.push(ConfigError::Validation {
                    message: format!(
                        "{} and {} must name distinct models, both are `{}`",
                        models[i].0, models[j].0, models[i].1
                    ),
                });
            }
        }
    }

    // A forced model must resolve to one of the four targets; anything
    // else would surface as an unsupported-model error on every query.
    if let Some(ref forced) = r.force_model
        && !models.iter().any(|(_, id)| id == forced)
    {
        errors.push(ConfigError::Validation {
            message: format!(
                "routing.force_model `{forced}` is not one of the configured targets"
            ),
        });
    }

    if !(config.analysis.multi_intent_ratio > 0.0 && config.analysis.multi_intent_ratio <= 1.0) {
        errors.push(ConfigError::Validation {
            message: format!(
                "analysis.multi_intent_ratio must be in (0, 1], got {}",
                config.analysis.multi_intent_ratio
            ),
        });
    }

    let k = &config.knowledge;
    for (name, value) in [
        ("knowledge.component_limit", k.component_limit),
        ("knowledge.semantic_top_n", k.semantic_top_n),
        ("knowledge.intent_per_category", k.intent_per_category),
        ("knowledge.compliance_limit", k.compliance_limit),
        ("knowledge.domain_limit", k.domain_limit),
    ] {
        if value == 0 {
            errors.push(ConfigError::Validation {
                message: format!("{name} must be non-zero"),
            });
        }
    }

    if !(0.0..=1.0).contains(&k.similarity_threshold) {
        errors.push(ConfigError::Validation {
            message: format!(
                "knowledge.similarity_threshold must be in [0, 1], got {}",
                k.similarity_threshold
            ),
        });
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}
