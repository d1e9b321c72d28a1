// SPDX-FileCopyrightText: 2026 Ohmic Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Builtin seeded reference dataset.
//!
//! A small component and standards catalog used by the CLI and by
//! integration-style tests. Production deployments supply their own
//! collections; the engine treats either source the same way.

use ohmic_core::DomainKind;

use crate::types::{ComplianceTag, ComponentCategory, ComponentRecord, StandardRecord,
    StandardRequirement};

fn component(
    id: &str,
    part_number: &str,
    name: &str,
    manufacturer: &str,
    category: ComponentCategory,
    description: &str,
    voltage_range: Option<(f64, f64)>,
    temp_range: Option<(f64, f64)>,
    compliance: Vec<ComplianceTag>,
) -> ComponentRecord {
    ComponentRecord {
        id: id.to_string(),
        part_number: part_number.to_string(),
        name: name.to_string(),
        manufacturer: manufacturer.to_string(),
        category,
        description: description.to_string(),
        voltage_range,
        temp_range,
        compliance,
    }
}

/// The builtin component catalog.
pub fn builtin_components() -> Vec<ComponentRecord> {
    vec![
        component(
            "cmp-lm317",
            "LM317",
            "Adjustable linear voltage regulator",
            "Texas Instruments",
            ComponentCategory::PowerManagement,
            "Three-terminal adjustable linear voltage regulator supplying 1.5 A over a \
             1.25 V to 37 V output range",
            Some((3.0, 40.0)),
            Some((0.0, 125.0)),
            vec![],
        ),
        component(
            "cmp-tps54331",
            "TPS54331",
            "Step-down buck converter",
            "Texas Instruments",
            ComponentCategory::PowerManagement,
            "3 A step-down switching buck converter with integrated MOSFET and Eco-mode \
             light-load efficiency",
            Some((3.5, 28.0)),
            Some((-40.0, 125.0)),
            vec![],
        ),
        component(
            "cmp-ncv4274",
            "NCV4274",
            "Automotive 5 V linear regulator",
            "onsemi",
            ComponentCategory::PowerManagement,
            "Automotive-grade 400 mA low-dropout linear regulator for battery-connected \
             vehicle supplies",
            Some((4.5, 40.0)),
            Some((-40.0, 150.0)),
            vec![ComplianceTag::AecQ100],
        ),
        component(
            "cmp-stm32f407",
            "STM32F407",
            "High-performance Cortex-M4 microcontroller",
            "STMicroelectronics",
            ComponentCategory::Microcontroller,
            "ARM Cortex-M4 microcontroller with FPU, 168 MHz core, rich connectivity \
             and DSP instructions",
            Some((1.8, 3.6)),
            Some((-40.0, 85.0)),
            vec![],
        ),
        component(
            "cmp-msp430fr5969",
            "MSP430FR5969",
            "Ultra-low power FRAM microcontroller",
            "Texas Instruments",
            ComponentCategory::Microcontroller,
            "Ultra-low power microcontroller with FRAM for battery powered sensor nodes \
             and IoT applications",
            Some((1.8, 3.6)),
            Some((-40.0, 85.0)),
            vec![],
        ),
        component(
            "cmp-spc58",
            "SPC58",
            "Automotive Power Architecture MCU",
            "STMicroelectronics",
            ComponentCategory::Microcontroller,
            "Automotive microcontroller for powertrain and body ECUs with lockstep cores \
             for functional safety",
            Some((3.0, 5.5)),
            Some((-40.0, 125.0)),
            vec![ComplianceTag::AecQ100, ComplianceTag::Iso26262],
        ),
        component(
            "cmp-ad8221",
            "AD8221",
            "Precision instrumentation amplifier",
            "Analog Devices",
            ComponentCategory::AnalogIc,
            "Precision instrumentation amplifier with high CMRR for medical \
             instrumentation and patient monitoring front ends",
            Some((4.6, 36.0)),
            Some((-40.0, 85.0)),
            vec![ComplianceTag::Iec60601],
        ),
        component(
            "cmp-ada4528",
            "ADA4528-1",
            "Zero-drift operational amplifier",
            "Analog Devices",
            ComponentCategory::AnalogIc,
            "Zero-drift precision op-amp with low noise for medical sensing and \
             low-leakage patient applied parts",
            Some((2.2, 5.5)),
            Some((-40.0, 125.0)),
            vec![ComplianceTag::Iec60601],
        ),
        component(
            "cmp-bme280",
            "BME280",
            "Environmental sensor",
            "Bosch Sensortec",
            ComponentCategory::Sensor,
            "Combined temperature, pressure, and humidity sensor for consumer and \
             IoT applications",
            Some((1.7, 3.6)),
            Some((-40.0, 85.0)),
            vec![],
        ),
        component(
            "cmp-lis2dw12",
            "LIS2DW12",
            "MEMS accelerometer",
            "STMicroelectronics",
            ComponentCategory::Sensor,
            "Ultra-low power three-axis MEMS accelerometer with configurable wake-up \
             detection",
            Some((1.6, 3.6)),
            Some((-40.0, 85.0)),
            vec![],
        ),
        component(
            "cmp-tja1050",
            "TJA1050",
            "High-speed CAN transceiver",
            "NXP",
            ComponentCategory::Interface,
            "High-speed CAN transceiver for automotive vehicle networks up to 1 Mbit/s",
            Some((4.75, 5.25)),
            Some((-40.0, 150.0)),
            vec![ComplianceTag::AecQ100],
        ),
        component(
            "cmp-iso1042",
            "ISO1042",
            "Isolated CAN transceiver",
            "Texas Instruments",
            ComponentCategory::Interface,
            "Galvanically isolated CAN transceiver with 5 kVrms isolation for \
             automotive and industrial networks",
            Some((4.5, 5.5)),
            Some((-40.0, 125.0)),
            vec![ComplianceTag::AecQ100],
        ),
        component(
            "cmp-irfz44n",
            "IRFZ44N",
            "N-channel power MOSFET",
            "Infineon",
            ComponentCategory::Discrete,
            "55 V N-channel power MOSFET for switching converters and motor drives",
            None,
            Some((-55.0, 175.0)),
            vec![],
        ),
    ]
}

fn requirement(id: &str, clause: &str, text: &str) -> StandardRequirement {
    StandardRequirement {
        id: id.to_string(),
        clause: clause.to_string(),
        text: text.to_string(),
    }
}

/// The builtin standards catalog.
pub fn builtin_standards() -> Vec<StandardRecord> {
    vec![
        StandardRecord {
            id: "std-aecq100".to_string(),
            code: "AEC-Q100".to_string(),
            name: "Failure Mechanism Based Stress Test Qualification for Integrated Circuits"
                .to_string(),
            domain: DomainKind::Automotive,
            description: "Automotive IC qualification defining stress tests and \
                          temperature grades"
                .to_string(),
            requirements: vec![
                requirement(
                    "req-aecq100-grade",
                    "Grade definitions",
                    "Grade 0 devices shall operate over an ambient temperature range of \
                     -40 to +150 °C",
                ),
                requirement(
                    "req-aecq100-tc",
                    "Temperature cycling",
                    "Devices shall pass temperature cycling stress per JESD22-A104 with \
                     grade-dependent cycle counts",
                ),
                requirement(
                    "req-aecq100-htol",
                    "HTOL",
                    "High temperature operating life testing shall demonstrate failure \
                     rates within qualification limits",
                ),
            ],
        },
        StandardRecord {
            id: "std-iso26262".to_string(),
            code: "ISO 26262".to_string(),
            name: "Road Vehicles - Functional Safety".to_string(),
            domain: DomainKind::Automotive,
            description: "Functional safety lifecycle for automotive E/E systems with \
                          ASIL classification"
                .to_string(),
            requirements: vec![
                requirement(
                    "req-iso26262-asil",
                    "ASIL determination",
                    "Hazard analysis and risk assessment shall assign an ASIL from A to D \
                     to each safety goal",
                ),
                requirement(
                    "req-iso26262-metrics",
                    "Hardware metrics",
                    "Hardware architectural metrics shall meet single-point and latent \
                     fault targets for the assigned ASIL",
                ),
                requirement(
                    "req-iso26262-ftti",
                    "Fault tolerance",
                    "Safety mechanisms shall detect and react to faults within the fault \
                     tolerant time interval",
                ),
            ],
        },
        StandardRecord {
            id: "std-iec60601".to_string(),
            code: "IEC 60601".to_string(),
            name: "Medical Electrical Equipment - General Requirements for Basic Safety"
                .to_string(),
            domain: DomainKind::Medical,
            description: "Safety and essential performance requirements for medical \
                          electrical equipment"
                .to_string(),
            requirements: vec![
                requirement(
                    "req-iec60601-leakage",
                    "Leakage current",
                    "Patient leakage current shall not exceed 10 uA in normal condition \
                     for type CF applied parts",
                ),
                requirement(
                    "req-iec60601-isolation",
                    "Dielectric strength",
                    "Two means of patient protection shall withstand a 4 kV dielectric \
                     test voltage",
                ),
                requirement(
                    "req-iec60601-markings",
                    "Markings",
                    "Applied parts shall be marked with the applicable degree of \
                     protection against electric shock",
                ),
            ],
        },
        StandardRecord {
            id: "std-cispr25".to_string(),
            code: "CISPR 25".to_string(),
            name: "Radio Disturbance Characteristics for Vehicle Receivers".to_string(),
            domain: DomainKind::Automotive,
            description: "Limits and methods for protection of on-board vehicle receivers \
                          from radio disturbance"
                .to_string(),
            requirements: vec![
                requirement(
                    "req-cispr25-conducted",
                    "Conducted emissions",
                    "Conducted emissions on supply lines shall meet class-dependent limits \
                     across the protected bands",
                ),
                requirement(
                    "req-cispr25-radiated",
                    "Radiated emissions",
                    "Radiated emissions shall be measured in an ALSE absorber lined \
                     shielded enclosure",
                ),
            ],
        },
        StandardRecord {
            id: "std-iec61508".to_string(),
            code: "IEC 61508".to_string(),
            name: "Functional Safety of Electrical/Electronic Safety-related Systems"
                .to_string(),
            domain: DomainKind::IndustrialControl,
            description: "Generic functional safety standard defining safety integrity \
                          levels for industrial systems"
                .to_string(),
            requirements: vec![
                requirement(
                    "req-iec61508-sil",
                    "SIL determination",
                    "Safety functions shall be assigned a safety integrity level from \
                     SIL 1 to SIL 4",
                ),
                requirement(
                    "req-iec61508-proof",
                    "Proof testing",
                    "Proof test intervals shall maintain the average probability of \
                     failure on demand within the SIL band",
                ),
            ],
        },
    ]
}
