//! # gencode Filesystem I/O Operations
//!
//! File: cli/src/common/fs/io.rs
//!
//! ## Overview
//!
//! Small wrappers around `std::fs` used by the scanner and the prompt writer:
//! - **`ensure_dir_exists`**: creates a directory (and parents) if missing, and
//!   rejects a path that exists but is not a directory.
//! - **`read_file_to_string`**: reads a whole file, adding the path to any error.
//! - **`write_string_to_file`**: creates the parent directory if needed, then
//!   writes the content, replacing any existing file.
//!
//! ## Usage
//!
//! ```rust
//! use crate::common::fs::io;
//!
//! let manifest = io::read_file_to_string(&root.join("package.json"))?;
//! io::write_string_to_file(&root.join(".continue/prompts/gencode.prompt"), &text)?;
//! ```
//!
use crate::core::error::{GencodeError, Result};
use anyhow::Context;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Ensures that a directory exists at the specified path, creating it and any
/// missing parents (like `mkdir -p`).
///
/// # Errors
///
/// Returns an `Err` if:
/// - The path exists but is not a directory.
/// - Creating the directory fails (e.g., due to permissions).
pub fn ensure_dir_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)
            .with_context(|| format!("Failed to create directory {}", path.display()))?;
        info!("Created directory: {}", path.display());
    } else if !path.is_dir() {
        anyhow::bail!(GencodeError::FileSystem(format!(
            "Path exists but is not a directory: {}",
            path.display()
        )));
    } else {
        debug!("Directory already exists: {}", path.display());
    }
    Ok(())
}

/// Reads the entire content of a file into a string.
///
/// # Errors
///
/// Returns an `Err` if the file cannot be found, opened, or read, with context
/// naming the file.
pub fn read_file_to_string(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read file {}", path.display()))
}

/// Writes string content to a file, overwriting it if it exists.
///
/// The parent directory is created first if it is missing.
///
/// # Errors
///
/// Returns an `Err` if the parent directory cannot be created or the write fails.
pub fn write_string_to_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        // `Path::new("file").parent()` is `Some("")`, which needs no creation.
        if !parent.as_os_str().is_empty() {
            ensure_dir_exists(parent)?;
        }
    }
    fs::write(path, content)
        .with_context(|| format!("Failed to write to file {}", path.display()))?;
    info!("Wrote content to file: {}", path.display());
    Ok(())
}
