// SPDX-FileCopyrightText: 2026 Ohmic Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain profiles consumed by the retrieval engine.
//!
//! Static reference data describing each hardware domain: scope,
//! expertise areas, a complexity weight, and the typical components and
//! engineering considerations surfaced in the domain context section of
//! retrieval results.

use ohmic_core::DomainKind;

use crate::types::DomainContext;

/// Static profile of one hardware domain.
pub struct DomainProfile {
    pub kind: DomainKind,
    pub scope: &'static str,
    pub expertise_areas: &'static [&'static str],
    pub complexity_weight: f64,
    pub typical_components: &'static [&'static str],
    pub key_considerations: &'static [&'static str],
}

const PROFILES: &[DomainProfile] = &[
    DomainProfile {
        kind: DomainKind::Automotive,
        scope: "Vehicle electronics from powertrain ECUs to cabin systems",
        expertise_areas: &["AEC qualification", "functional safety", "CAN/LIN networking"],
        complexity_weight: 1.2,
        typical_components: &[
            "Buck controllers",
            "CAN transceivers",
            "Automotive MCUs",
            "Power MOSFETs",
        ],
        key_considerations: &[
            "Temperature cycling",
            "Vibration resistance",
            "EMC compliance",
            "Long-term reliability",
        ],
    },
    DomainProfile {
        kind: DomainKind::Medical,
        scope: "Medical electrical equipment and patient-connected devices",
        expertise_areas: &["electrical safety", "isolation design", "risk management"],
        complexity_weight: 1.2,
        typical_components: &[
            "Medical-grade power supplies",
            "Isolation amplifiers",
            "Low-leakage regulators",
        ],
        key_considerations: &[
            "Patient safety",
            "Leakage current limits",
            "Biocompatibility",
            "Sterilization compatibility",
        ],
    },
    DomainProfile {
        kind: DomainKind::PowerElectronics,
        scope: "Power conversion, regulation, and distribution",
        expertise_areas: &["switching topologies", "magnetics", "thermal design"],
        complexity_weight: 1.1,
        typical_components: &[
            "Switching controllers",
            "Power MOSFETs",
            "Gate drivers",
            "Current sensors",
        ],
        key_considerations: &[
            "Efficiency optimization",
            "Thermal management",
            "EMI suppression",
            "Transient response",
        ],
    },
    DomainProfile {
        kind: DomainKind::AnalogRf,
        scope: "Analog signal chains and radio-frequency front ends",
        expertise_areas: &["low-noise design", "impedance matching", "filter synthesis"],
        complexity_weight: 1.1,
        typical_components: &["Op-amps", "Filters", "VCOs", "Mixers"],
        key_considerations: &[
            "Noise performance",
            "Frequency response",
            "Distortion",
            "Matching requirements",
        ],
    },
    DomainProfile {
        kind: DomainKind::DigitalDesign,
        scope: "Digital logic, FPGA, and high-speed board design",
        expertise_areas: &["RTL design", "timing closure", "signal integrity"],
        complexity_weight: 1.0,
        typical_components: &["Microcontrollers", "FPGAs", "Logic gates", "Clock generators"],
        key_considerations: &[
            "Timing margins",
            "Crosstalk control",
            "Power distribution",
            "Clock distribution",
        ],
    },
    DomainProfile {
        kind: DomainKind::EmbeddedHardware,
        scope: "Microcontroller-centric embedded systems and IoT nodes",
        expertise_areas: &["low-power design", "wireless integration", "sensor interfacing"],
        complexity_weight: 1.0,
        typical_components: &["MCUs", "Wireless SoCs", "Sensors", "PMICs"],
        key_considerations: &[
            "Power budget",
            "Firmware constraints",
            "Antenna placement",
            "Cost targets",
        ],
    },
    DomainProfile {
        kind: DomainKind::IndustrialControl,
        scope: "Industrial automation, drives, and fieldbus systems",
        expertise_areas: &["motor control", "fieldbus protocols", "surge immunity"],
        complexity_weight: 1.1,
        typical_components: &["PLCs", "Motor drivers", "Isolated transceivers", "Contactors"],
        key_considerations: &[
            "Noise immunity",
            "Galvanic isolation",
            "Surge protection",
            "Uptime requirements",
        ],
    },
    DomainProfile {
        kind: DomainKind::Consumer,
        scope: "High-volume consumer product electronics",
        expertise_areas: &["cost engineering", "miniaturization", "regulatory approvals"],
        complexity_weight: 0.9,
        typical_components: &["SoCs", "PMICs", "USB controllers", "Audio codecs"],
        key_considerations: &["Unit cost", "Time to market", "Certification", "Availability"],
    },
    DomainProfile {
        kind: DomainKind::General,
        scope: "General hardware engineering",
        expertise_areas: &["general electronics"],
        complexity_weight: 1.0,
        typical_components: &["General purpose components"],
        key_considerations: &["General reliability", "Cost optimization", "Availability"],
    },
];

/// Profile for a domain; `General` serves as the fallback profile.
pub fn domain_profile(kind: DomainKind) -> &'static DomainProfile {
    PROFILES
        .iter()
        .find(|p| p.kind == kind)
        .unwrap_or_else(|| &PROFILES[PROFILES.len() - 1])
}

/// Materialize the caller-facing domain context for a domain.
pub fn domain_context(kind: DomainKind) -> DomainContext {
    let profile = domain_profile(kind);
    DomainContext {
        domain: profile.kind,
        scope: profile.scope.to_string(),
        expertise_areas: profile.expertise_areas.iter().map(|s| s.to_string()).collect(),
        complexity_weight: profile.complexity_weight,
        typical_components: profile
            .typical_components
            .iter()
            .map(|s| s.to_string())
            .collect(),
        key_considerations: profile
            .key_considerations
            .iter()
            .map(|s| s.to_string())
            .collect(),
    }
}
