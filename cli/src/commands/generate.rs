//! # gencode Generate Command
//!
//! File: cli/src/commands/generate.rs
//!
//! ## Overview
//!
//! The one thing gencode does: scan a project directory and write the prompt.
//!
//! ## Workflow
//!
//! 1. Resolve the project root (argument, or the current directory).
//! 2. Load configuration (`core::config`), including `<root>/.gencode.toml`.
//! 3. Scan: walk, classify, detect frameworks and theme files (`detect`).
//! 4. Render the prompt (`prompt`).
//! 5. Write it to the configured output path, replacing any previous prompt.
//!
//! ## Usage
//!
//! ```bash
//! # Scan the current directory
//! gencode
//!
//! # Scan another project
//! gencode ~/code/storefront
//! ```
//!
use crate::core::config;
use crate::core::error::{GencodeError, Result};
use crate::detect;
use crate::prompt;
use anyhow::Context;
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Arguments for generating a prompt.
#[derive(Parser, Debug, Default)]
pub struct GenerateArgs {
    /// Project directory to scan (defaults to the current directory).
    #[arg(value_name = "PROJECT_DIR")]
    pub project_dir: Option<PathBuf>,
}

/// Handles a gencode invocation.
pub fn handle_generate(args: GenerateArgs) -> Result<()> {
    let root = match args.project_dir {
        Some(dir) => dir,
        None => std::env::current_dir().context("Failed to get current directory")?,
    };
    debug!("Project root: {}", root.display());

    let output_path = generate_prompt(&root)?;
    println!("\n📁 Prompt saved to: {}", output_path.display());
    Ok(())
}

/// Scans `root`, renders the prompt and writes it out. Returns the output path.
pub fn generate_prompt(root: &Path) -> Result<PathBuf> {
    if !root.is_dir() {
        anyhow::bail!(GencodeError::FileSystem(format!(
            "Project path '{}' does not exist or is not a directory.",
            root.display()
        )));
    }

    let cfg = config::load_config(root)?;

    println!("🔍 Scanning Project Structure...");
    let scan = detect::scan_project(root, &cfg.walk_options(root))?;
    let document = prompt::render_prompt(&scan)?;
    debug!("Rendered prompt ({} bytes)", document.as_str().len());

    let output_path = cfg.output_path(root);
    document
        .write_to(&output_path)
        .with_context(|| format!("Failed to save prompt to '{}'", output_path.display()))?;
    info!("Prompt written to {}", output_path.display());
    Ok(output_path)
}
