// SPDX-FileCopyrightText: 2026 Ohmic Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Lightweight constraint extraction from query text.
//!
//! Numeric `X to Y` ranges are recognized only when gated by a unit
//! keyword (voltage or temperature vocabulary), and compliance tags and
//! component categories are mapped through explicit ordered rule tables
//! so each mapping is unit-testable on its own.

use ohmic_core::OhmicError;
use regex::Regex;

use crate::types::{ComplianceTag, ComponentCategory};

/// Ordered (keyword set -> tag) rules for compliance extraction.
///
/// Every keyword is matched as a case-insensitive substring; a rule
/// fires when any of its keywords is present. Rules are evaluated in
/// order and each tag is emitted at most once.
pub fn compliance_rules() -> &'static [(&'static [&'static str], ComplianceTag)] {
    &[
        (&["aec-q100", "automotive"], ComplianceTag::AecQ100),
        (&["iso 26262", "functional safety"], ComplianceTag::Iso26262),
        (&["iec 60601", "medical"], ComplianceTag::Iec60601),
        (&["cispr 25", "radio disturbance"], ComplianceTag::Cispr25),
        (&["iec 61508", "sil rated"], ComplianceTag::Iec61508),
    ]
}

/// Ordered (keyword set -> category) rules for category inference.
pub fn category_rules() -> &'static [(&'static [&'static str], ComponentCategory)] {
    &[
        (
            &["microcontroller", "mcu", "processor", "cortex", "arm"],
            ComponentCategory::Microcontroller,
        ),
        (
            &["power", "voltage", "regulator", "buck", "boost", "ldo"],
            ComponentCategory::PowerManagement,
        ),
        (
            &["sensor", "temperature", "pressure", "accelerometer"],
            ComponentCategory::Sensor,
        ),
        (
            &["op-amp", "amplifier", "comparator", "reference"],
            ComponentCategory::AnalogIc,
        ),
        (
            &["transceiver", "can bus", "isolation", "interface"],
            ComponentCategory::Interface,
        ),
    ]
}

/// Constraints extracted from one query.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryConstraints {
    /// Requested operating voltage range in volts.
    pub voltage_range: Option<(f64, f64)>,
    /// Requested operating temperature range in °C.
    pub temp_range: Option<(f64, f64)>,
    /// Compliance tags the query asks for.
    pub compliance: Vec<ComplianceTag>,
}

impl QueryConstraints {
    /// Whether nothing was extracted.
    pub fn is_empty(&self) -> bool {
        self.voltage_range.is_none() && self.temp_range.is_none() && self.compliance.is_empty()
    }
}

/// Compiled extraction patterns; built once at engine construction.
pub struct ConstraintExtractor {
    voltage_range: Regex,
    temp_range: Regex,
}

impl ConstraintExtractor {
    /// Compile the range patterns.
    pub fn new() -> Result<Self, OhmicError> {
        let voltage_range = Regex::new(r"(\d+(?:\.\d+)?)\s*v?\s*to\s*(\d+(?:\.\d+)?)\s*v\b")
            .map_err(|e| OhmicError::Config(format!("voltage pattern failed to compile: {e}")))?;
        let temp_range =
            Regex::new(r"(-?\d+(?:\.\d+)?)\s*(?:°c)?\s*to\s*(-?\d+(?:\.\d+)?)\s*°?c\b")
                .map_err(|e| {
                    OhmicError::Config(format!("temperature pattern failed to compile: {e}"))
                })?;
        Ok(Self {
            voltage_range,
            temp_range,
        })
    }

    /// Extract constraints from query text.
    pub fn extract(&self, query: &str) -> QueryConstraints {
        let lower = query.to_lowercase();
        let mut constraints = QueryConstraints::default();

        // Voltage ranges only count when the query talks about voltage.
        if ["voltage", "volt", "supply"].iter().any(|kw| lower.contains(kw))
            && let Some(caps) = self.voltage_range.captures(&lower)
            && let (Ok(min), Ok(max)) = (caps[1].parse::<f64>(), caps[2].parse::<f64>())
            && min <= max
        {
            constraints.voltage_range = Some((min, max));
        }

        if ["temperature", "°c", "temp range"].iter().any(|kw| lower.contains(kw))
            && let Some(caps) = self.temp_range.captures(&lower)
            && let (Ok(min), Ok(max)) = (caps[1].parse::<f64>(), caps[2].parse::<f64>())
            && min <= max
        {
            constraints.temp_range = Some((min, max));
        }

        for (keywords, tag) in compliance_rules() {
            if keywords.iter().any(|kw| lower.contains(kw))
                && !constraints.compliance.contains(tag)
            {
                constraints.compliance.push(*tag);
            }
        }

        constraints
    }
}

/// Infer component categories from query text via the rule table.
///
/// Falls back to `microcontroller` when no rule fires, matching the
/// reference behavior for category-less selection queries.
pub fn infer_categories(query: &str) -> Vec<ComponentCategory> {
    let lower = query.to_lowercase();
    let mut categories = Vec::new();
    for (keywords, category) in category_rules() {
        if keywords.iter().any(|kw| lower.contains(kw)) && !categories.contains(category) {
            categories.push(*category);
        }
    }
    if categories.is_empty() {
        categories.push(ComponentCategory::Microcontroller);
    }
    categories
}
