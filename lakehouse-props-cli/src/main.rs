// Copyright (c) 2024-2025 Lakehouse Props Contributors
// SPDX-License-Identifier: Apache-2.0
//
//! Lakehouse Props CLI entry point

use clap::Parser;
use colored::Colorize;

mod cli;
use cli::{Cli, Commands};

fn main() {
    // Parse command line arguments first to get log level
    let cli = Cli::parse();

    let log_level = if cli.verbose {
        log::LevelFilter::Debug
    } else if let Some(level) = cli.log_level {
        level.to_level_filter()
    } else {
        // Default to Warn (can still be overridden by RUST_LOG env var)
        log::LevelFilter::Warn
    };

    env_logger::Builder::from_default_env()
        .filter_level(log_level)
        .init();

    if let Err(e) = run(cli) {
        eprintln!("{} {}", "Error:".bold().red(), e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = cli::load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Version => {
            println!("{} {}", "Lakehouse Props".bold().green(), lakehouse_props::VERSION);
            println!("Catalog property schema registry");
            Ok(())
        }

        Commands::Describe {
            namespace,
            all,
            format,
        } => cli::handle_describe(config, namespace, all, format),

        Commands::Validate { properties } => cli::handle_validate(config, properties),

        Commands::Transform { properties, format } => {
            cli::handle_transform(config, properties, format)
        }
    }
}
