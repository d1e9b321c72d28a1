// SPDX-FileCopyrightText: 2026 Ohmic Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Static reference tables: intent categories, domain detection keywords,
//! and the six weighted complexity factors.
//!
//! Tables are plain static slices compiled into [`CategoryDef`]s once at
//! startup. Construction validates everything that must hold for the
//! scorers to be total functions: non-empty deduplicated keyword sets,
//! multipliers in [0, 1], and factor weights summing to exactly 1.0.
//! A violated invariant is a fatal configuration error -- weights are
//! never silently normalized.

use ohmic_core::{DomainKind, IntentKind, OhmicError};

use crate::matcher::{IndicatorSet, KeywordSet};
use crate::scorer::CategoryDef;

/// Tolerance for the weight-sum invariant.
const WEIGHT_SUM_EPSILON: f64 = 1e-9;

/// Complexity factor identifiers, in reporting order.
pub const FACTOR_NAMES: [&str; 6] = [
    "technical_keywords_density",
    "design_constraint_count",
    "domain_specificity",
    "calculation_complexity",
    "standards_involvement",
    "multi_domain_integration",
];

// --- Intent category tables ---
// Order matches IntentKind declaration order; it is the tie-break order.

struct IntentRow {
    kind: IntentKind,
    keywords: &'static [&'static str],
    indicators: &'static [&'static str],
    base_complexity: f64,
    description: &'static str,
}

const INTENT_ROWS: &[IntentRow] = &[
    IntentRow {
        kind: IntentKind::CircuitAnalysis,
        keywords: &[
            "circuit", "analyze", "analysis", "topology", "schematic", "impedance", "gain",
            "feedback", "compensation", "transfer function", "bode", "loop", "filter", "waveform",
        ],
        indicators: &["stability", "phase margin", "transient", "frequency response", "worst-case"],
        base_complexity: 0.8,
        description: "Circuit behavior analysis and design review",
    },
    IntentRow {
        kind: IntentKind::ComponentSelection,
        keywords: &[
            "component", "select", "selection", "choose", "recommend", "recommendation",
            "alternative", "replacement", "part", "comparison", "compare", "microcontroller",
            "regulator", "mcu", "sensor", "ic",
        ],
        indicators: &["trade-off", "trade-offs", "footprint", "ecosystem", "low power"],
        base_complexity: 0.6,
        description: "Part selection, comparison, and recommendation",
    },
    IntentRow {
        kind: IntentKind::ComplianceChecking,
        keywords: &[
            "compliance", "compliant", "certification", "standard", "standards", "qualification",
            "qualified", "regulatory", "aec-q100", "iso 26262", "iec 60601", "emc", "cispr",
        ],
        indicators: &["grade 0", "asil", "functional safety", "patient isolation", "leakage current"],
        base_complexity: 0.9,
        description: "Verification against compliance and certification standards",
    },
    IntentRow {
        kind: IntentKind::CostOptimization,
        keywords: &["cost", "bom", "price", "pricing", "budget", "volume", "cheaper", "sourcing"],
        indicators: &["cost reduction", "volume pricing", "unit cost"],
        base_complexity: 0.7,
        description: "BOM cost reduction and sourcing economics",
    },
    IntentRow {
        kind: IntentKind::Troubleshooting,
        keywords: &[
            "debug", "troubleshoot", "failure", "fault", "broken", "fix", "ripple", "oscillation",
            "shutdown", "malfunction", "issue", "issues",
        ],
        indicators: &["root cause", "intermittent", "failure analysis"],
        base_complexity: 0.7,
        description: "Diagnosis of failing or misbehaving hardware",
    },
    IntentRow {
        kind: IntentKind::DesignValidation,
        keywords: &[
            "validation", "validate", "verification", "verify", "fmea", "reliability",
            "fault tree", "redundancy", "protocol", "protocols",
        ],
        indicators: &["asil", "sil", "fault tolerance", "safety-critical", "fault-tolerant"],
        base_complexity: 0.9,
        description: "Design verification and safety validation protocols",
    },
    IntentRow {
        kind: IntentKind::EducationalContent,
        keywords: &[
            "what", "explain", "how", "why", "learn", "tutorial", "basics", "fundamentals",
            "understand", "pinout", "definition", "example", "examples", "introduction",
        ],
        indicators: &["step by step", "for beginners", "practical examples"],
        base_complexity: 0.5,
        description: "Explanations, fundamentals, and learning material",
    },
    IntentRow {
        kind: IntentKind::SupplyChainAnalysis,
        keywords: &[
            "supply", "availability", "stock", "obsolescence", "lifecycle", "distributor",
            "shortage", "forecast", "lead time",
        ],
        indicators: &["end of life", "multi-source", "allocation"],
        base_complexity: 0.7,
        description: "Availability, obsolescence, and supply risk assessment",
    },
    IntentRow {
        kind: IntentKind::ThermalAnalysis,
        keywords: &[
            "thermal", "heat", "temperature", "dissipation", "junction", "heatsink", "cooling",
            "derating",
        ],
        indicators: &["thermal resistance", "ambient", "power dissipation"],
        base_complexity: 0.8,
        description: "Heat dissipation and thermal design analysis",
    },
    IntentRow {
        kind: IntentKind::TestingValidation,
        keywords: &[
            "test", "testing", "measurement", "measurements", "oscilloscope", "characterization",
            "bench", "burn-in",
        ],
        indicators: &["test coverage", "functional test", "test plan"],
        base_complexity: 0.8,
        description: "Bench testing, measurement, and characterization",
    },
    IntentRow {
        kind: IntentKind::PerformanceOptimization,
        keywords: &[
            "optimize", "optimization", "efficiency", "performance", "improve", "minimize",
            "maximize", "tuning",
        ],
        indicators: &["quiescent current", "utilization", "throughput"],
        base_complexity: 0.8,
        description: "Efficiency and performance tuning",
    },
    IntentRow {
        kind: IntentKind::QualityAssurance,
        keywords: &["quality", "defect", "inspection", "yield", "screening", "audit", "qa"],
        indicators: &["process control", "acceptance criteria"],
        base_complexity: 0.8,
        description: "Production quality and defect screening",
    },
];

// --- Domain detection tables ---
// Order matches DomainKind declaration order; it is the tie-break order.

struct DomainRow {
    kind: DomainKind,
    keywords: &'static [&'static str],
    description: &'static str,
}

const DOMAIN_ROWS: &[DomainRow] = &[
    DomainRow {
        kind: DomainKind::Automotive,
        keywords: &[
            "automotive", "aec-q100", "vehicle", "car", "ecu", "can", "powertrain", "iso 26262",
            "asil", "engine", "brake",
        ],
        description: "Vehicle electronics and automotive qualification",
    },
    DomainRow {
        kind: DomainKind::Medical,
        keywords: &[
            "medical", "patient", "iec 60601", "healthcare", "clinical", "biocompatibility",
            "defibrillation", "implantable", "sterilization",
        ],
        description: "Medical device electronics and patient safety",
    },
    DomainRow {
        kind: DomainKind::PowerElectronics,
        keywords: &[
            "power", "converter", "buck", "boost", "regulator", "ldo", "smps", "inverter",
            "mosfet", "rectifier", "switching", "psu",
        ],
        description: "Power conversion and regulation",
    },
    DomainRow {
        kind: DomainKind::AnalogRf,
        keywords: &[
            "analog", "op-amp", "amplifier", "rf", "mixer", "oscillator", "antenna", "microwave",
            "vco", "instrumentation", "precision",
        ],
        description: "Analog signal chains and RF design",
    },
    DomainRow {
        kind: DomainKind::DigitalDesign,
        keywords: &[
            "fpga", "verilog", "vhdl", "logic", "digital", "synthesis", "timing closure",
            "multilayer", "high-speed", "crosstalk",
        ],
        description: "Digital logic, FPGA, and high-speed board design",
    },
    DomainRow {
        kind: DomainKind::EmbeddedHardware,
        keywords: &[
            "embedded", "microcontroller", "mcu", "firmware", "cortex", "arm", "iot", "ble",
            "wireless", "bluetooth",
        ],
        description: "Microcontroller-centric embedded systems",
    },
    DomainRow {
        kind: DomainKind::IndustrialControl,
        keywords: &[
            "industrial", "plc", "motor", "drive", "modbus", "profibus", "ethercat", "automation",
            "scada", "three-phase",
        ],
        description: "Industrial automation and motor control",
    },
    DomainRow {
        kind: DomainKind::Consumer,
        keywords: &[
            "consumer", "wearable", "smartphone", "appliance", "portable", "gadget", "usb",
            "battery-powered",
        ],
        description: "Consumer product electronics",
    },
];

// --- Complexity factor tables ---

const TECHNICAL_KEYWORDS: &[&str] = &[
    "optimization", "analysis", "simulation", "modeling", "calculation", "algorithm",
    "mathematical", "statistical", "monte carlo", "worst-case", "sensitivity", "tolerance",
    "derating", "thermal", "emi", "emc", "signal integrity", "impedance", "transmission line",
    "high-frequency", "rf", "microcontroller", "cortex-m4", "ultra-low power", "power management",
    "embedded", "fpga", "vhdl", "verilog", "systemverilog", "synthesis", "timing closure",
    "pipeline", "cache", "three-phase", "modbus", "profibus", "ethercat", "fault-tolerant",
    "dual-redundant", "cispr 25", "powertrain", "ecu", "iec 60601", "patient isolation",
    "biocompatibility", "sterilization", "defibrillation",
];

const CONSTRAINT_KEYWORDS: &[&str] = &[
    "requirement", "requirements", "constraint", "constraints", "limit", "limits",
    "specification", "specifications", "tolerance", "range", "minimum", "maximum", "typical",
    "must", "shall", "criteria",
];

const CALCULATION_KEYWORDS: &[&str] = &[
    "calculate", "calculation", "formula", "equation", "derive", "compute", "mathematical",
    "integration", "differentiation", "transfer function", "frequency response", "gain", "phase",
    "stability", "bandwidth", "efficiency", "evaluate", "analysis", "optimization",
];

const STANDARDS_KEYWORDS: &[&str] = &[
    "aec-q100", "iso 26262", "iec 60601", "asil", "sil", "functional safety", "compliance",
    "certification", "qualification", "qualified", "standard", "regulation", "emc", "emi",
    "safety", "medical grade", "automotive grade", "cispr",
];

const INTEGRATION_KEYWORDS: &[&str] = &[
    "system", "integration", "interface", "communication", "protocol", "co-design",
    "hardware-software", "multi-domain", "cross-functional", "interdisciplinary",
];

/// Domains that demand deep specialized knowledge; queries detected in
/// one of these score the high domain-specificity value.
pub const HIGH_SPECIFICITY_DOMAINS: [DomainKind; 4] = [
    DomainKind::Automotive,
    DomainKind::Medical,
    DomainKind::AnalogRf,
    DomainKind::PowerElectronics,
];

/// The six weighted complexity factors, compiled and validated.
pub struct ComplexityFactors {
    pub technical: KeywordSet,
    pub constraints: KeywordSet,
    pub calculations: KeywordSet,
    pub standards: KeywordSet,
    pub integration: KeywordSet,
    /// Weights in [`FACTOR_NAMES`] order; sum to 1.0 by construction.
    pub weights: [f64; 6],
}

/// The full compiled taxonomy: intent table, domain table, factors.
pub struct Taxonomy {
    pub intents: Vec<CategoryDef<IntentKind>>,
    pub domains: Vec<CategoryDef<DomainKind>>,
    pub factors: ComplexityFactors,
}

impl Taxonomy {
    /// Compile the builtin reference tables.
    ///
    /// Fails fast on any violated table invariant; a process must not
    /// start with a taxonomy it cannot score against.
    pub fn builtin() -> Result<Self, OhmicError> {
        let intents = INTENT_ROWS
            .iter()
            .map(|row| {
                if !(0.0..=1.0).contains(&row.base_complexity) {
                    return Err(OhmicError::Config(format!(
                        "intent `{}` base complexity {} outside [0, 1]",
                        row.kind, row.base_complexity
                    )));
                }
                Ok(CategoryDef {
                    kind: row.kind,
                    keywords: KeywordSet::compile(row.keywords)?,
                    indicators: IndicatorSet::compile(row.indicators)?,
                    multiplier: row.base_complexity,
                    description: row.description,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let domains = DOMAIN_ROWS
            .iter()
            .map(|row| {
                Ok(CategoryDef {
                    kind: row.kind,
                    keywords: KeywordSet::compile(row.keywords)?,
                    indicators: IndicatorSet::compile(&[])?,
                    multiplier: 1.0,
                    description: row.description,
                })
            })
            .collect::<Result<Vec<_>, OhmicError>>()?;

        let weights = [0.275, 0.15, 0.225, 0.15, 0.15, 0.05];
        let sum: f64 = weights.iter().sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_EPSILON {
            return Err(OhmicError::Config(format!(
                "complexity factor weights must sum to 1.0, got {sum}"
            )));
        }

        let factors = ComplexityFactors {
            technical: KeywordSet::compile(TECHNICAL_KEYWORDS)?,
            constraints: KeywordSet::compile(CONSTRAINT_KEYWORDS)?,
            calculations: KeywordSet::compile(CALCULATION_KEYWORDS)?,
            standards: KeywordSet::compile(STANDARDS_KEYWORDS)?,
            integration: KeywordSet::compile(INTEGRATION_KEYWORDS)?,
            weights,
        };

        Ok(Self {
            intents,
            domains,
            factors,
        })
    }

    /// Description of an intent category, for caller-facing listings.
    pub fn intent_description(&self, kind: IntentKind) -> Option<&'static str> {
        self.intents.iter().find(|d| d.kind == kind).map(|d| d.description)
    }

    /// Base complexity multiplier of an intent category.
    pub fn intent_base_complexity(&self, kind: IntentKind) -> Option<f64> {
        self.intents.iter().find(|d| d.kind == kind).map(|d| d.multiplier)
    }

    /// Description of a detectable domain.
    pub fn domain_description(&self, kind: DomainKind) -> Option<&'static str> {
        self.domains.iter().find(|d| d.kind == kind).map(|d| d.description)
    }
}
