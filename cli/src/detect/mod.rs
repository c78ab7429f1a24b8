//! # gencode Project Detection
//!
//! File: cli/src/detect/mod.rs
//!
//! ## Overview
//!
//! Everything gencode learns about a project comes from this module, computed
//! fresh from the filesystem on every run:
//!
//! - `structure`: file walk classification (pages, components, API routes, styles, language mix)
//! - `frameworks`: styling libraries declared in `package.json`
//! - `themes`: well-known theme/config files at the project root
//!
//! `scan_project` runs them in order and bundles the results into a
//! `ProjectScan` for the prompt assembler.
//!
//! ## Usage
//!
//! ```rust
//! let scan = detect::scan_project(&root, &config.walk_options(&root))?;
//! println!("TypeScript: {}", scan.structure.is_typescript());
//! ```
//!
use crate::common::fs::walk::{self, WalkOptions};
use crate::core::error::Result;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::info;

pub mod frameworks;
pub mod structure;
pub mod themes;

use frameworks::FrameworkFlags;
use structure::ProjectStructure;

/// State-management libraries found in the project.
///
/// No detector populates this yet; the prompt renders its fallback text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StateManagementFlags {
    flags: BTreeMap<String, bool>,
}

impl StateManagementFlags {
    /// Names whose flag is set, in name order.
    pub fn enabled_names(&self) -> Vec<&str> {
        self.flags
            .iter()
            .filter(|(_, set)| **set)
            .map(|(name, _)| name.as_str())
            .collect()
    }
}

/// Everything detected about one project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectScan {
    pub structure: ProjectStructure,
    pub css_frameworks: FrameworkFlags,
    pub state_management: StateManagementFlags,
    pub theme_files: Vec<String>,
}

/// Walks, classifies and inspects the project at `root`.
pub fn scan_project(root: &Path, options: &WalkOptions) -> Result<ProjectScan> {
    let files = walk::collect_files(root, options)?;
    let structure = structure::classify(root, &files, options.match_scope);
    let css_frameworks = frameworks::detect_css_frameworks(root)?;
    let theme_files = themes::detect_theme_files(root);

    info!(
        "Scanned {}: {} files, frameworks {:?}, themes {:?}",
        root.display(),
        files.len(),
        css_frameworks.enabled_names(),
        theme_files
    );

    Ok(ProjectScan {
        structure,
        css_frameworks,
        state_management: StateManagementFlags::default(),
        theme_files,
    })
}
