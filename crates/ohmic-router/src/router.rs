// SPDX-FileCopyrightText: 2026 Ohmic Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Threshold-based model selection with boundary escalation.
//!
//! The mid band (0.4–0.7) and high band (0.6–0.8) overlap on paper;
//! strictly highest-first evaluation is the disambiguation rule and must
//! not be reordered. Scores within `boundary_margin` below a threshold
//! escalate to the more capable tier -- when uncertain, prefer the
//! costlier model.

use ohmic_config::RoutingConfig;
use ohmic_core::{DomainKind, IntentKind, ModelTier, OhmicError};
use serde::Serialize;
use tracing::{debug, info};

/// Scale applied to the threshold margin when deriving confidence.
const CONFIDENCE_SPAN: f64 = 0.45;

/// Confidence floor reported for boundary escalations and exact-threshold hits.
const CONFIDENCE_FLOOR: f64 = 0.5;

/// A routing decision for one analyzed query.
#[derive(Debug, Clone, Serialize)]
pub struct RoutingDecision {
    /// Identifier of the selected downstream model.
    pub selected_model: String,
    /// Capability tier of the selected model.
    pub tier: ModelTier,
    /// Confidence in the decision (0.5–0.95); grows with the score's
    /// margin above the selected tier's lower threshold.
    pub confidence: f64,
    /// Human-readable reason for the decision.
    pub rationale: String,
}

/// Maps complexity scores to model identifiers using configured thresholds.
pub struct ModelRouter {
    config: RoutingConfig,
}

impl ModelRouter {
    /// Create a router over a validated routing configuration.
    pub fn new(config: RoutingConfig) -> Self {
        Self { config }
    }

    /// Route a query to a model.
    ///
    /// Priority order:
    /// 1. `force_model` config override (must name a configured target)
    /// 2. Highest-first threshold evaluation with boundary escalation
    ///
    /// Only the override path can fail: an identifier outside the four
    /// configured targets surfaces as [`OhmicError::UnsupportedModel`].
    pub fn route(
        &self,
        complexity: f64,
        intent: Option<IntentKind>,
        domain: Option<DomainKind>,
    ) -> Result<RoutingDecision, OhmicError> {
        if let Some(ref forced) = self.config.force_model {
            let tier = self.resolve_tier(forced)?;
            info!(model = forced.as_str(), "routing forced by configuration");
            return Ok(RoutingDecision {
                selected_model: forced.clone(),
                tier,
                confidence: 1.0,
                rationale: "force_model configuration override".to_string(),
            });
        }

        let score = complexity.clamp(0.0, 1.0);
        let (tier, escalated) = self.select_tier(score);
        let confidence = self.decision_confidence(score, tier);
        let rationale = self.rationale(score, tier, escalated, intent, domain);

        if escalated {
            info!(
                score,
                tier = %tier,
                margin = self.config.boundary_margin,
                "boundary score escalated to more capable tier"
            );
        } else {
            debug!(score, tier = %tier, "routed by threshold");
        }

        Ok(RoutingDecision {
            selected_model: self.model_for_tier(tier).to_string(),
            tier,
            confidence,
            rationale,
        })
    }

    /// Resolve a model identifier back to its capability tier.
    ///
    /// Identifiers outside the four configured targets are reported as a
    /// distinct unsupported-model error, not a generic failure.
    pub fn resolve_tier(&self, model: &str) -> Result<ModelTier, OhmicError> {
        let c = &self.config;
        if model == c.highest_model {
            Ok(ModelTier::Highest)
        } else if model == c.high_model {
            Ok(ModelTier::High)
        } else if model == c.mid_model {
            Ok(ModelTier::Mid)
        } else if model == c.lightweight_model {
            Ok(ModelTier::Lightweight)
        } else {
            Err(OhmicError::UnsupportedModel {
                model: model.to_string(),
            })
        }
    }

    /// Configured identifier for a capability tier.
    pub fn model_for_tier(&self, tier: ModelTier) -> &str {
        match tier {
            ModelTier::Highest => &self.config.highest_model,
            ModelTier::High => &self.config.high_model,
            ModelTier::Mid => &self.config.mid_model,
            ModelTier::Lightweight => &self.config.lightweight_model,
        }
    }

    /// The (tier, lower threshold) bands in evaluation order.
    pub fn bands(&self) -> [(ModelTier, f64); 4] {
        [
            (ModelTier::Highest, self.config.highest_threshold),
            (ModelTier::High, self.config.high_threshold),
            (ModelTier::Mid, self.config.mid_threshold),
            (ModelTier::Lightweight, 0.0),
        ]
    }

    // Highest-first walk; the first band whose (possibly margin-relaxed)
    // lower bound the score clears wins.
    fn select_tier(&self, score: f64) -> (ModelTier, bool) {
        let margin = self.config.boundary_margin;
        for (tier, threshold) in self.bands() {
            if score >= threshold {
                return (tier, false);
            }
            if threshold > 0.0 && score + margin >= threshold {
                return (tier, true);
            }
        }
        (ModelTier::Lightweight, false)
    }

    // Confidence from the margin above the selected tier's lower bound,
    // normalized by the band width. Escalated scores sit below the bound
    // and report the floor.
    fn decision_confidence(&self, score: f64, tier: ModelTier) -> f64 {
        let c = &self.config;
        let (lower, upper) = match tier {
            ModelTier::Highest => (c.highest_threshold, 1.0),
            ModelTier::High => (c.high_threshold, c.highest_threshold),
            ModelTier::Mid => (c.mid_threshold, c.high_threshold),
            ModelTier::Lightweight => (0.0, c.mid_threshold),
        };
        let width = (upper - lower).max(f64::EPSILON);
        let margin = ((score - lower) / width).clamp(0.0, 1.0);
        CONFIDENCE_FLOOR + CONFIDENCE_SPAN * margin
    }

    fn rationale(
        &self,
        score: f64,
        tier: ModelTier,
        escalated: bool,
        intent: Option<IntentKind>,
        domain: Option<DomainKind>,
    ) -> String {
        let mut reason = if escalated {
            format!(
                "complexity {score:.3} within {:.2} of the {tier} tier threshold; \
                 escalating to the more capable model",
                self.config.boundary_margin
            )
        } else {
            format!("complexity {score:.3} falls in the {tier} tier band")
        };
        if let Some(intent) = intent {
            reason.push_str(&format!(" for {intent} query"));
        }
        if let Some(domain) = domain
            && !domain.is_general()
        {
            reason.push_str(&format!(" in {domain} domain"));
        }
        reason
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn router() -> ModelRouter {
        ModelRouter::new(RoutingConfig::default())
    }

    #[test]
    fn thresholds_route_to_documented_tiers() {
        let r = router();
        assert_eq!(r.route(0.95, None, None).unwrap().tier, ModelTier::Highest);
        assert_eq!(r.route(0.7, None, None).unwrap().tier, ModelTier::High);
        assert_eq!(r.route(0.5, None, None).unwrap().tier, ModelTier::Mid);
        assert_eq!(r.route(0.1, None, None).unwrap().tier, ModelTier::Lightweight);
    }

    #[test]
    fn overlap_region_resolves_highest_first() {
        // 0.65 sits in both the 0.4-0.7 and 0.6-0.8 paper bands; the
        // highest-first walk must pick the high tier, never mid.
        let r = router();
        let decision = r.route(0.65, None, None).unwrap();
        assert_eq!(decision.tier, ModelTier::High);
        assert_eq!(decision.selected_model, "grok_2");
    }

    #[test]
    fn boundary_scores_escalate_conservatively() {
        let r = router();
        // 0.78 is within 0.05 of the 0.8 threshold: prefer the costlier model.
        let decision = r.route(0.78, None, None).unwrap();
        assert_eq!(decision.tier, ModelTier::Highest);
        assert!(decision.rationale.contains("escalating"));
        assert_eq!(decision.confidence, 0.5);

        // Same policy one band down.
        assert_eq!(r.route(0.57, None, None).unwrap().tier, ModelTier::High);
        assert_eq!(r.route(0.37, None, None).unwrap().tier, ModelTier::Mid);
    }

    #[test]
    fn scores_clear_of_boundaries_do_not_escalate() {
        let r = router();
        let decision = r.route(0.70, None, None).unwrap();
        assert_eq!(decision.tier, ModelTier::High);
        assert!(!decision.rationale.contains("escalating"));
    }

    #[test]
    fn confidence_grows_with_margin() {
        let r = router();
        let low = r.route(0.61, None, None).unwrap().confidence;
        let high = r.route(0.75, None, None).unwrap().confidence;
        assert!(high > low);
        assert!((0.5..=0.95).contains(&low));
        assert!((0.5..=0.95).contains(&high));
    }

    #[test]
    fn routing_is_monotonic_in_complexity() {
        let r = router();
        let mut last = ModelTier::Lightweight;
        for step in 0..=100 {
            let score = step as f64 / 100.0;
            let tier = r.route(score, None, None).unwrap().tier;
            assert!(tier >= last, "tier dropped at score {score}");
            last = tier;
        }
    }

    #[test]
    fn force_model_overrides_classification() {
        let mut config = RoutingConfig::default();
        config.force_model = Some("gpt_4o".to_string());
        let r = ModelRouter::new(config);
        let decision = r.route(0.95, None, None).unwrap();
        assert_eq!(decision.selected_model, "gpt_4o");
        assert_eq!(decision.tier, ModelTier::Mid);
        assert_eq!(decision.confidence, 1.0);
    }

    #[test]
    fn unsupported_forced_model_is_a_distinct_error() {
        let mut config = RoutingConfig::default();
        config.force_model = Some("gpt_5_ultra".to_string());
        let r = ModelRouter::new(config);
        let err = r.route(0.5, None, None).unwrap_err();
        assert!(matches!(err, OhmicError::UnsupportedModel { model } if model == "gpt_5_ultra"));
    }

    #[test]
    fn resolve_tier_round_trips_configured_ids() {
        let r = router();
        assert_eq!(r.resolve_tier("claude_sonnet_4").unwrap(), ModelTier::Highest);
        assert_eq!(r.resolve_tier("grok_2").unwrap(), ModelTier::High);
        assert_eq!(r.resolve_tier("gpt_4o").unwrap(), ModelTier::Mid);
        assert_eq!(r.resolve_tier("gpt_4o_mini").unwrap(), ModelTier::Lightweight);
        assert!(r.resolve_tier("llama_3").is_err());
    }

    #[test]
    fn rationale_names_intent_and_domain() {
        let r = router();
        let decision = r
            .route(0.85, Some(IntentKind::ComplianceChecking), Some(DomainKind::Automotive))
            .unwrap();
        assert!(decision.rationale.contains("compliance_checking"));
        assert!(decision.rationale.contains("automotive"));
    }
}
