// SPDX-FileCopyrightText: 2026 Ohmic Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `ohmic models` and `ohmic categories` command implementations.
//!
//! Listings of the routing targets and the classification taxonomy, for
//! callers that want to inspect the reference configuration.

use ohmic_core::{ModelTier, OhmicError};
use serde::Serialize;
use serde_json::json;

use crate::service::OhmicService;

/// One routing target in the models listing.
#[derive(Serialize)]
struct ModelInfo {
    model: String,
    tier: ModelTier,
    complexity_band: String,
}

/// Print the configured models and their complexity bands.
pub fn run_models(service: &OhmicService, config: &ohmic_config::RoutingConfig) -> Result<(), OhmicError> {
    let router = service.analyzer().router();
    let bands = [
        (ModelTier::Highest, format!(">= {:.1}", config.highest_threshold)),
        (
            ModelTier::High,
            format!("{:.1} - {:.1}", config.high_threshold, config.highest_threshold),
        ),
        (
            ModelTier::Mid,
            format!("{:.1} - {:.1}", config.mid_threshold, config.high_threshold),
        ),
        (ModelTier::Lightweight, format!("< {:.1}", config.mid_threshold)),
    ];

    let models: Vec<ModelInfo> = bands
        .into_iter()
        .map(|(tier, complexity_band)| ModelInfo {
            model: router.model_for_tier(tier).to_string(),
            tier,
            complexity_band,
        })
        .collect();

    let json = serde_json::to_string_pretty(&json!({
        "available_models": models,
        "boundary_margin": config.boundary_margin,
    }))
    .map_err(|e| OhmicError::Internal(format!("listing serialization failed: {e}")))?;
    println!("{json}");
    Ok(())
}

/// Print the intent categories and hardware domains.
pub fn run_categories(service: &OhmicService) -> Result<(), OhmicError> {
    let taxonomy = service.analyzer().taxonomy();

    let intents: Vec<_> = taxonomy
        .intents
        .iter()
        .map(|def| {
            json!({
                "intent": def.kind,
                "description": def.description,
                "base_complexity": def.multiplier,
            })
        })
        .collect();

    let domains: Vec<_> = taxonomy
        .domains
        .iter()
        .map(|def| {
            json!({
                "domain": def.kind,
                "description": def.description,
            })
        })
        .collect();

    let json = serde_json::to_string_pretty(&json!({
        "intent_categories": intents,
        "hardware_domains": domains,
    }))
    .map_err(|e| OhmicError::Internal(format!("listing serialization failed: {e}")))?;
    println!("{json}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ohmic_config::OhmicConfig;

    #[test]
    fn listings_render_without_error() {
        let config = OhmicConfig::default();
        let service = OhmicService::from_config(&config).unwrap();
        run_models(&service, &config.routing).unwrap();
        run_categories(&service).unwrap();
    }
}
