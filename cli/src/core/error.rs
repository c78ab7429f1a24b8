//! # gencode Error Types
//!
//! File: cli/src/core/error.rs
//!
//! ## Overview
//!
//! This module defines the error types used throughout gencode. Every failure
//! is fatal for the run: errors are propagated with `?` up to `main`, which
//! prints them and exits with a non-zero status.
//!
//! ## Architecture
//!
//! The error system consists of two main components:
//! - `GencodeError`: A custom error enum using `thiserror` for specific error types
//! - `Result<T>`: A type alias for `anyhow::Result<T>` for flexible error handling
//!
//! The error types cover:
//! - Configuration errors (bad `.gencode.toml`, failed validation)
//! - Filesystem errors (missing project root, unwritable output)
//! - Directory walk errors (permissions, broken links, symlink cycles)
//! - Manifest errors (malformed `package.json`)
//! - Prompt template rendering errors
//!
//! ## Examples
//!
//! ```rust
//! // Return a specific error type
//! if !root.is_dir() {
//!     anyhow::bail!(GencodeError::FileSystem(format!(
//!         "Project path is not a directory: {}",
//!         root.display()
//!     )));
//! }
//!
//! // Add context to errors using anyhow
//! let content = fs::read_to_string(&path)
//!     .with_context(|| format!("Failed to read file: {}", path.display()))?;
//! ```
//!
use std::path::PathBuf;
use thiserror::Error;

/// Custom error type for the gencode application.
#[derive(Error, Debug)]
pub enum GencodeError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Filesystem error: {0}")]
    FileSystem(String),

    #[error("Failed to walk project directory: {source}")]
    Walk {
        #[from]
        source: walkdir::Error,
    },

    #[error("Malformed manifest '{}': {source}", path.display())]
    Manifest {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Template rendering error: {source}")]
    Template {
        #[from]
        source: tera::Error,
    },
}

/// Type alias for Result using anyhow::Error for broad compatibility.
/// Anyhow allows for easy context addition and flexible error handling.
pub type Result<T> = anyhow::Result<T>;
