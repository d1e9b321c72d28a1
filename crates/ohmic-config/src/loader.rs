// SPDX-FileCopyrightText: 2026 Ohmic Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./ohmic.toml` > `~/.config/ohmic/ohmic.toml`
//! > `/etc/ohmic/ohmic.toml` with environment variable overrides via the
//! `OHMIC_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};

use crate::model::OhmicConfig;

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/ohmic/ohmic.toml` (system-wide)
/// 3. `~/.config/ohmic/ohmic.toml` (user XDG config)
/// 4. `./ohmic.toml` (local directory)
/// 5. `OHMIC_*` environment variables
pub fn load_config() -> Result<OhmicConfig, figment::Error> {
    build_figment().extract()
}

/// Load configuration from a TOML string merged over compiled defaults.
///
/// Used for testing and explicit inline configuration.
pub fn load_config_from_str(toml_content: &str) -> Result<OhmicConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(OhmicConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<OhmicConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(OhmicConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Build the Figment used internally for config loading (exposed for diagnostic use).
pub fn build_figment() -> Figment {
    Figment::new()
        .merge(Serialized::defaults(OhmicConfig::default()))
        .merge(Toml::file("/etc/ohmic/ohmic.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("ohmic/ohmic.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("ohmic.toml"))
        .merge(env_provider())
}

/// Create the environment variable provider.
///
/// Uses `Env::map()` rather than `Env::split("_")` so section names with
/// underscores stay unambiguous: `OHMIC_ROUTING_FORCE_MODEL` must map to
/// `routing.force_model`, not `routing.force.model`.
fn env_provider() -> Env {
    Env::prefixed("OHMIC_").map(|key| {
        let key_str = key.as_str();
        let mapped = key_str
            .replacen("analysis_", "analysis.", 1)
            .replacen("routing_", "routing.", 1)
            .replacen("knowledge_", "knowledge.", 1);
        mapped.into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_string_yields_defaults() {
        let config = load_config_from_str("").unwrap();
        assert_eq!(config.routing.highest_threshold, 0.8);
        assert_eq!(config.knowledge.component_limit, 10);
    }

    #[test]
    fn toml_overrides_defaults() {
        let config = load_config_from_str(
            r#"
[knowledge]
semantic_search = false
component_limit = 5
"#,
        )
        .unwrap();
        assert!(!config.knowledge.semantic_search);
        assert_eq!(config.knowledge.component_limit, 5);
        // untouched sections keep defaults
        assert_eq!(config.routing.high_model, "grok_2");
    }

    #[test]
    fn unknown_key_fails_extraction() {
        let result = load_config_from_str(
            r#"
[routing]
highes_threshold = 0.9
"#,
        );
        assert!(result.is_err());
    }
}
