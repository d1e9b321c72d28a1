// SPDX-FileCopyrightText: 2026 Ohmic Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Model routing for the Ohmic query analysis engine.
//!
//! Maps a complexity score (plus intent/domain context) to one of four
//! downstream model identifiers using threshold rules evaluated strictly
//! highest-first, with a conservative boundary policy that escalates
//! near-threshold scores to the more capable tier.

pub mod router;

pub use router::{ModelRouter, RoutingDecision};
