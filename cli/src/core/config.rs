//! # gencode Configuration System
//!
//! File: cli/src/core/config.rs
//!
//! ## Overview
//!
//! This module implements the configuration system for gencode, handling loading,
//! merging, validation, and access to configuration data. The scanner's tunables
//! (ignored path substrings, depth limit, link policy) and the output location
//! are explicit values passed down to the code that needs them, never globals.
//!
//! ## Architecture
//!
//! Configuration sources (in order of precedence):
//! 1. Project-specific `.gencode.toml` in the scanned project root
//! 2. User-specific `<config dir>/gencode/config.toml`
//! 3. Default values defined in the code
//!
//! Loaded configuration has `~` expanded in `output.path` and is validated
//! before use. Unknown keys are rejected.
//!
//! ## Examples
//!
//! ```rust
//! let cfg = config::load_config(&project_root)?;
//! let files = walk::collect_files(&project_root, &cfg.walk_options(&project_root))?;
//! let output = cfg.output_path(&project_root);
//! ```
//!
use crate::common::fs::walk::{MatchScope, WalkOptions};
use crate::core::error::{GencodeError, Result};
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info};

/// Represents the main configuration structure, loaded from TOML files.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub scan: ScanConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Settings for the project file walk.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ScanConfig {
    /// Substrings that exclude any path containing them.
    #[serde(default = "default_ignored_paths")]
    pub ignored_paths: Vec<String>,
    /// Maximum directory depth below the project root.
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
    /// Follow symbolic links (with cycle detection).
    #[serde(default = "default_follow_links")]
    pub follow_links: bool,
    /// `full_path` (root included) or `project_relative` marker matching.
    #[serde(default)]
    pub match_scope: MatchScope,
}

/// Where the rendered prompt is written.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Relative to the project root unless absolute (may start with `~`).
    #[serde(default = "default_output_path")]
    pub path: String,
}

impl Default for ScanConfig {
    fn default() -> Self {
        ScanConfig {
            ignored_paths: default_ignored_paths(),
            max_depth: default_max_depth(),
            follow_links: default_follow_links(),
            match_scope: MatchScope::default(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            path: default_output_path(),
        }
    }
}

fn default_ignored_paths() -> Vec<String> {
    WalkOptions::default().ignored_paths
}
fn default_max_depth() -> usize {
    WalkOptions::default().max_depth
}
fn default_follow_links() -> bool {
    WalkOptions::default().follow_links
}
fn default_output_path() -> String {
    ".continue/prompts/gencode.prompt".to_string()
}

impl Config {
    /// Builds the walker options from the `[scan]` section.
    ///
    /// The output file is always skipped so a previous prompt never feeds
    /// back into the scan.
    pub fn walk_options(&self, project_root: &Path) -> WalkOptions {
        WalkOptions {
            ignored_paths: self.scan.ignored_paths.clone(),
            max_depth: self.scan.max_depth,
            follow_links: self.scan.follow_links,
            match_scope: self.scan.match_scope,
            skip_files: vec![self.output_path(project_root)],
        }
    }

    /// Resolves the output file location for a given project root.
    pub fn output_path(&self, project_root: &Path) -> PathBuf {
        let configured = PathBuf::from(&self.output.path);
        if configured.is_absolute() {
            configured
        } else {
            project_root.join(configured)
        }
    }
}

const PROJECT_CONFIG_FILENAME: &str = ".gencode.toml";

pub fn load_config(project_root: &Path) -> Result<Config> {
    let user_config = load_user_config()?;
    let project_config = load_project_config(project_root)?;
    let mut merged_config = merge_configs(user_config.unwrap_or_default(), project_config);
    expand_config_paths(&mut merged_config).context("Failed to expand paths in configuration")?;
    validate_config(&merged_config).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", merged_config);
    Ok(merged_config)
}

fn load_user_config() -> Result<Option<Config>> {
    let Some(proj_dirs) = ProjectDirs::from("com", "Gencode", "gencode") else {
        debug!("Could not determine user config directory.");
        return Ok(None);
    };
    let config_path = proj_dirs.config_dir().join("config.toml");
    if config_path.is_file() {
        info!("Loading user configuration from: {}", config_path.display());
        load_config_from_path(&config_path).map(Some)
    } else {
        debug!(
            "User configuration file not found at {}",
            config_path.display()
        );
        Ok(None)
    }
}

fn load_project_config(project_root: &Path) -> Result<Option<Config>> {
    let config_path = project_root.join(PROJECT_CONFIG_FILENAME);
    if config_path.is_file() {
        info!(
            "Loading project configuration from: {}",
            config_path.display()
        );
        load_config_from_path(&config_path).map(Some)
    } else {
        debug!("No project configuration file ({PROJECT_CONFIG_FILENAME}) in project root.");
        Ok(None)
    }
}

fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

/// Project values win wherever they differ from the built-in defaults.
fn merge_configs(user: Config, project: Option<Config>) -> Config {
    let Some(project_cfg) = project else {
        return user;
    };
    let mut merged = Config::default();
    merged.scan.ignored_paths = if project_cfg.scan.ignored_paths != default_ignored_paths() {
        project_cfg.scan.ignored_paths
    } else {
        user.scan.ignored_paths
    };
    merged.scan.max_depth = if project_cfg.scan.max_depth != default_max_depth() {
        project_cfg.scan.max_depth
    } else {
        user.scan.max_depth
    };
    merged.scan.follow_links = if project_cfg.scan.follow_links != default_follow_links() {
        project_cfg.scan.follow_links
    } else {
        user.scan.follow_links
    };
    merged.scan.match_scope = if project_cfg.scan.match_scope != MatchScope::default() {
        project_cfg.scan.match_scope
    } else {
        user.scan.match_scope
    };
    merged.output.path = if project_cfg.output.path != default_output_path() {
        project_cfg.output.path
    } else {
        user.output.path
    };
    merged
}

fn expand_config_paths(config: &mut Config) -> Result<()> {
    config.output.path = shellexpand::tilde(&config.output.path).into_owned();
    debug!("Expanded output path: {}", config.output.path);
    Ok(())
}

fn validate_config(config: &Config) -> Result<()> {
    if config.scan.ignored_paths.iter().any(|p| p.is_empty()) {
        return Err(anyhow!(GencodeError::Config(
            "scan.ignored_paths must not contain an empty string (it would exclude every file)."
                .to_string()
        )));
    }
    if config.scan.max_depth == 0 {
        return Err(anyhow!(GencodeError::Config(
            "scan.max_depth must be at least 1.".to_string()
        )));
    }
    if config.output.path.trim().is_empty() {
        return Err(anyhow!(GencodeError::Config(
            "output.path must not be empty.".to_string()
        )));
    }
    debug!("Configuration validation successful.");
    Ok(())
}
