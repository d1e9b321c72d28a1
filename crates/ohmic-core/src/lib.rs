// SPDX-FileCopyrightText: 2026 Ohmic Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Ohmic hardware query analysis engine.
//!
//! This crate provides the error taxonomy and the shared vocabulary
//! types (intent categories, hardware domains, expertise levels, model
//! tiers) used throughout the Ohmic workspace. All reference tables and
//! scoring components build on these types.

pub mod error;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::OhmicError;
pub use types::{DomainKind, ExpertiseLevel, IntentKind, ModelTier};
