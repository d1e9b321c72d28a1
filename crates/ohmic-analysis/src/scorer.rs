// SPDX-FileCopyrightText: 2026 Ohmic Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Generic keyword-density category scorer.
//!
//! Intent classification and domain detection are the same algorithm
//! over different category tables, so both run through this scorer:
//! whole-word keyword density, a flat bonus per complexity indicator
//! present, a per-category base multiplier, and a final clamp. Arg-max
//! with first-encountered tie-break keeps results deterministic for a
//! fixed table order.

use crate::matcher::{IndicatorSet, KeywordSet};

/// Score contributed per whole-word keyword match.
const KEYWORD_STEP: f64 = 0.2;

/// Flat bonus per complexity indicator present in the query.
const INDICATOR_BONUS: f64 = 0.1;

/// One scorable category: a label plus its compiled match structures.
pub struct CategoryDef<K> {
    pub kind: K,
    pub keywords: KeywordSet,
    pub indicators: IndicatorSet,
    /// Base multiplier in [0, 1] applied after keyword/indicator scoring.
    pub multiplier: f64,
    pub description: &'static str,
}

impl<K: Copy> CategoryDef<K> {
    /// Confidence of this category for `query`, in [0, 1].
    ///
    /// The keyword density saturates at 1.0 but the indicator bonus is
    /// added on top of the saturated value, so the intermediate may
    /// exceed 1.0 before the multiplier and final clamp -- this mirrors
    /// the reference scoring exactly and is deliberate.
    pub fn confidence(&self, query: &str) -> f64 {
        let mut base = (self.keywords.match_count(query) as f64 * KEYWORD_STEP).min(1.0);
        base += self.indicators.present_count(query) as f64 * INDICATOR_BONUS;
        (base * self.multiplier).clamp(0.0, 1.0)
    }
}

/// Score every category in table order.
pub fn score_all<K: Copy>(table: &[CategoryDef<K>], query: &str) -> Vec<(K, f64)> {
    table.iter().map(|def| (def.kind, def.confidence(query))).collect()
}

/// Arg-max over scores with first-encountered tie-break.
///
/// Returns `None` when every category scored zero; the caller supplies
/// its documented fallback in that case.
pub fn primary<K: Copy>(scores: &[(K, f64)]) -> Option<(K, f64)> {
    let mut best: Option<(K, f64)> = None;
    for &(kind, score) in scores {
        match best {
            Some((_, top)) if score <= top => {}
            _ if score > 0.0 => best = Some((kind, score)),
            _ => {}
        }
    }
    best
}
