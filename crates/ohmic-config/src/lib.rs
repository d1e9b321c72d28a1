// SPDX-FileCopyrightText: 2026 Ohmic Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration system for the Ohmic query analysis engine.
//!
//! Layered loading via Figment (compiled defaults, system and user TOML
//! files, local `ohmic.toml`, `OHMIC_*` environment overrides), rich
//! miette diagnostics for malformed files, and a post-deserialization
//! validation pass that collects every semantic error before startup
//! proceeds. A configuration that fails validation is fatal: the process
//! must not start with broken routing thresholds or retrieval limits.

pub mod diagnostic;
pub mod loader;
pub mod model;
pub mod validation;

pub use diagnostic::{ConfigError, render_errors};
pub use loader::{load_config, load_config_from_str};
pub use model::{AnalysisConfig, KnowledgeConfig, OhmicConfig, RoutingConfig};
pub use validation::validate_config;

/// Load configuration from the standard hierarchy and validate it.
///
/// Returns every collected diagnostic on failure -- load errors are
/// bridged from figment, validation errors are appended -- so the caller
/// can render them all and exit.
pub fn load_and_validate() -> Result<OhmicConfig, Vec<ConfigError>> {
    let config = loader::load_config().map_err(diagnostic::figment_to_config_errors)?;
    validation::validate_config(&config)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    #[test]
    fn defaults_load_and_validate() {
        let config = super::load_and_validate().expect("default config should be valid");
        assert_eq!(config.routing.highest_model, "claude_sonnet_4");
    }
}
