//! # gencode Project File Walker
//!
//! File: cli/src/common/fs/walk.rs
//!
//! ## Overview
//!
//! Recursively lists the regular files of a project directory, skipping
//! tooling/build output and anything hidden.
//!
//! ## Exclusion rules
//!
//! An entry below the root is skipped (and, for directories, not descended
//! into) when any of these hold:
//! - its name starts with `.`
//! - its path contains any of the configured ignored substrings
//! - it is one of the `skip_files` (the prompt gencode itself writes)
//!
//! The substring test is plain `contains`, not a path-segment match: `dist`
//! also excludes `src/distance.ts`. By default it runs against the full path
//! as walked, root prefix included, so a project stored under `~/dist/` scans
//! empty. `MatchScope::ProjectRelative` restricts it to the part below the root.
//!
//! The root itself is never excluded by the dot rule, so a project checked
//! out inside a dot-directory still scans.
//!
//! ## Traversal
//!
//! - Symbolic links are followed by default; `walkdir` reports link cycles as
//!   errors.
//! - Descent stops at `max_depth`.
//! - Any walk error (permissions, broken link, cycle) aborts the scan.
//! - Siblings are visited in file-name order so results are deterministic.
//!
use crate::core::error::{GencodeError, Result};
use anyhow::Context;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, trace, warn};
use walkdir::{DirEntry, WalkDir};

/// Substrings excluded from every scan unless configured otherwise.
pub const DEFAULT_IGNORED_PATHS: &[&str] = &[
    "node_modules",
    ".git",
    ".next",
    "dist",
    "coverage",
    ".vscode",
];

/// Depth below the project root at which descent stops.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Which part of a path substring markers are tested against.
#[derive(Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MatchScope {
    /// The full path, project root included.
    #[default]
    FullPath,
    /// Only the part below the project root.
    ProjectRelative,
}

impl MatchScope {
    /// The string markers are matched against for `path` under `root`.
    pub fn subject(self, root: &Path, path: &Path) -> String {
        let relative = project_relative(root, path);
        match self {
            MatchScope::FullPath => format!("{}{}", root.to_string_lossy(), relative),
            MatchScope::ProjectRelative => relative,
        }
    }
}

/// Options controlling a project walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkOptions {
    pub ignored_paths: Vec<String>,
    pub max_depth: usize,
    pub follow_links: bool,
    pub match_scope: MatchScope,
    /// Exact paths left out of the result.
    pub skip_files: Vec<PathBuf>,
}

impl Default for WalkOptions {
    fn default() -> Self {
        WalkOptions {
            ignored_paths: DEFAULT_IGNORED_PATHS.iter().map(|s| s.to_string()).collect(),
            max_depth: DEFAULT_MAX_DEPTH,
            follow_links: true,
            match_scope: MatchScope::default(),
            skip_files: Vec::new(),
        }
    }
}

/// Renders `path` relative to `root` as `/a/b/c`, always with `/` separators.
///
/// Paths outside `root` are rendered in full.
pub fn project_relative(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    relative
        .components()
        .fold(String::new(), |mut acc, component| {
            acc.push('/');
            acc.push_str(&component.as_os_str().to_string_lossy());
            acc
        })
}

fn is_excluded(root: &Path, entry: &DirEntry, options: &WalkOptions) -> bool {
    if entry.depth() == 0 {
        return false;
    }
    if entry.file_name().to_string_lossy().starts_with('.') {
        return true;
    }
    if options.skip_files.iter().any(|skip| skip == entry.path()) {
        return true;
    }
    let subject = options.match_scope.subject(root, entry.path());
    options
        .ignored_paths
        .iter()
        .any(|ignored| subject.contains(ignored.as_str()))
}

/// True when a directory at the depth limit still has entries that will not be visited.
fn is_truncated(entry: &DirEntry, max_depth: usize) -> bool {
    entry.file_type().is_dir()
        && entry.depth() == max_depth
        && fs::read_dir(entry.path())
            .map(|mut entries| entries.next().is_some())
            .unwrap_or(false)
}

/// Collects every regular file under `root` that survives the exclusion rules.
///
/// # Errors
///
/// Fails on the first walk error, including a missing root.
pub fn collect_files(root: &Path, options: &WalkOptions) -> Result<Vec<PathBuf>> {
    debug!(
        "Walking '{}' (max_depth={}, follow_links={}, scope={:?}, ignored={:?})",
        root.display(),
        options.max_depth,
        options.follow_links,
        options.match_scope,
        options.ignored_paths
    );

    let walker = WalkDir::new(root)
        .follow_links(options.follow_links)
        .max_depth(options.max_depth)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| {
            let excluded = is_excluded(root, entry, options);
            if excluded {
                trace!("Excluding {}", entry.path().display());
            }
            !excluded
        });

    let mut files = Vec::new();
    for entry_result in walker {
        let entry = entry_result
            .map_err(GencodeError::from)
            .with_context(|| format!("Failed to scan project directory '{}'", root.display()))?;

        if entry.file_type().is_file() {
            files.push(entry.into_path());
        } else if is_truncated(&entry, options.max_depth) {
            warn!(
                "Depth limit {} reached at '{}'; not descending further.",
                options.max_depth,
                entry.path().display()
            );
        }
    }

    debug!("Collected {} files under '{}'", files.len(), root.display());
    Ok(files)
}
