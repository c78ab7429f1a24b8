//! # gencode Main Entry Point
//!
//! File: cli/src/main.rs
//!
//! ## Overview
//!
//! gencode scans a Next.js project (file layout, `package.json`, theme config
//! files) and writes `.continue/prompts/gencode.prompt`, a prompt template
//! describing the project for a code-generation assistant.
//!
//! This file handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Running the generate command and reporting errors
//!
//! ## Examples
//!
//! ```bash
//! # Scan the current directory
//! gencode
//!
//! # Scan a specific project with debug logging
//! gencode -vv ~/code/storefront
//! ```
//!
//! Processing flow:
//! 1. Parse command-line args via Clap
//! 2. Configure logging based on verbosity level (`RUST_LOG` wins if set)
//! 3. Scan the project and write the prompt
//! 4. Print any error and exit with status 1
//!
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

mod commands; // Command handlers
mod common; // Shared utilities (filesystem)
mod core; // Core infrastructure (errors, config, templating)
mod detect; // Project scanning and detection
mod prompt; // Prompt assembly

/// Defines the command-line arguments structure using Clap's derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "gencode",
    about = "Generate a code-generation prompt describing a Next.js project",
    long_about = "Scans a Next.js project's layout, package.json and theme files, then writes\n\
                  .continue/prompts/gencode.prompt describing its structure and styling.",
    version
)]
struct Cli {
    #[command(flatten)]
    generate: commands::generate::GenerateArgs,
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    if let Err(e) = commands::generate::handle_generate(cli.generate) {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}

// --- Basic Integration Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use assert_cmd::Command;
    use predicates::prelude::*;

    fn gencode_cmd() -> Command {
        Command::cargo_bin("gencode").expect("Failed to find gencode binary for testing")
    }

    #[test]
    fn test_main_help_flag() {
        gencode_cmd().arg("--help").assert().success();
    }

    #[test]
    fn test_main_version_flag() {
        gencode_cmd()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn test_cli_parses_verbosity_and_dir() {
        let cli = Cli::try_parse_from(["gencode", "-vv", "site"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(
            cli.generate.project_dir,
            Some(std::path::PathBuf::from("site"))
        );
    }
}
