// SPDX-FileCopyrightText: 2026 Ohmic Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ohmic - hardware engineering query analysis and knowledge retrieval.
//!
//! This is the binary entry point. It loads and validates configuration,
//! constructs the immutable service once, and dispatches subcommands.

use clap::{Parser, Subcommand};
use ohmic_core::{DomainKind, ExpertiseLevel};
use tracing_subscriber::EnvFilter;

mod analyze;
mod info;
mod service;

use service::OhmicService;

/// Ohmic - hardware engineering query analysis and knowledge retrieval.
#[derive(Parser, Debug)]
#[command(name = "ohmic", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Analyze a hardware engineering query.
    Analyze {
        /// The query text.
        query: String,
        /// Self-reported expertise level.
        #[arg(long, default_value = "intermediate")]
        expertise: ExpertiseLevel,
        /// Preferred hardware domain, overriding detection.
        #[arg(long)]
        domain: Option<DomainKind>,
        /// Report secondary intents and the combination label.
        #[arg(long)]
        multi_intent: bool,
        /// Retrieve supporting components and standards.
        #[arg(long)]
        knowledge: bool,
    },
    /// List the configured models and their routing bands.
    Models,
    /// List the intent categories and hardware domains.
    Categories,
}

fn main() {
    let cli = Cli::parse();

    // Load and validate configuration at startup; a broken configuration
    // is fatal before any command runs.
    let config = match ohmic_config::load_and_validate() {
        Ok(config) => config,
        Err(errors) => {
            ohmic_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.analysis.log_level.clone())),
        )
        .with_writer(std::io::stderr)
        .init();

    let service = match OhmicService::from_config(&config) {
        Ok(service) => service,
        Err(error) => {
            eprintln!("ohmic: startup failed: {error}");
            std::process::exit(1);
        }
    };

    let outcome = match cli.command {
        Some(Commands::Analyze {
            query,
            expertise,
            domain,
            multi_intent,
            knowledge,
        }) => analyze::run_analyze(&service, &query, expertise, domain, multi_intent, knowledge),
        Some(Commands::Models) => info::run_models(&service, &config.routing),
        Some(Commands::Categories) => info::run_categories(&service),
        None => {
            println!("ohmic: use --help for available commands");
            Ok(())
        }
    };

    if let Err(error) = outcome {
        eprintln!("ohmic: {error}");
        std::process::exit(1);
    }
}
