// SPDX-FileCopyrightText: 2026 Ohmic Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Ohmic query analysis engine.

use thiserror::Error;

/// The primary error type used across Ohmic analysis and retrieval operations.
///
/// Classification and complexity scoring never fail for any text input;
/// errors here are either startup-time configuration failures (fatal) or
/// narrowly scoped runtime conditions the caller can act on.
#[derive(Debug, Error)]
pub enum OhmicError {
    /// Configuration errors (malformed category tables, invalid weights,
    /// bad routing thresholds). Detected at startup; the process must not
    /// start with a broken configuration.
    #[error("configuration error: {0}")]
    Config(String),

    /// A model identifier outside the four configured routing targets was
    /// requested. Reported distinctly so callers can tell a bad selection
    /// apart from a generic failure.
    #[error("unsupported model: {model}")]
    UnsupportedModel { model: String },

    /// A single retrieval strategy failed. The retrieval engine catches
    /// this, logs it, and continues with the remaining strategies.
    #[error("retrieval strategy `{strategy}` failed: {message}")]
    Retrieval {
        strategy: &'static str,
        message: String,
    },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_model_names_the_offender() {
        let err = OhmicError::UnsupportedModel {
            model: "gpt_5_ultra".into(),
        };
        assert_eq!(err.to_string(), "unsupported model: gpt_5_ultra");
    }

    #[test]
    fn retrieval_error_names_the_strategy() {
        let err = OhmicError::Retrieval {
            strategy: "semantic",
            message: "index empty".into(),
        };
        assert!(err.to_string().contains("semantic"));
        assert!(err.to_string().contains("index empty"));
    }
}
