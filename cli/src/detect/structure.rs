//! # gencode Structure Classifier
//!
//! File: cli/src/detect/structure.rs
//!
//! ## Overview
//!
//! Sorts the walked file list into the buckets a Next.js prompt cares about:
//! pages, components, API routes and styles. Classification is by substring
//! marker (`/pages/`, `/components/`, `/pages/api/`, `/styles/`), so markers
//! nest: every API route is also a page. Markers are tested against the same
//! `MatchScope` subject the walker uses, so by default a root such as
//! `/work/pages/site` puts every file in `pages`. Bucket entries are always
//! rendered project-relative.
//!
//! The language mix is reduced to two buckets. A file ending in `.ts` counts as
//! typed source; everything else (including `.tsx`, stylesheets, markdown)
//! counts as `js`.
//!
use crate::common::fs::walk::{project_relative, MatchScope};
use serde::Serialize;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use tracing::debug;

const PAGES_MARKER: &str = "/pages/";
const COMPONENTS_MARKER: &str = "/components/";
const API_ROUTES_MARKER: &str = "/pages/api/";
const STYLES_MARKER: &str = "/styles/";

const TYPED_SOURCE_EXTENSION: &str = ".ts";

/// Source-language bucket of a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileType {
    Js,
    Ts,
}

impl FileType {
    fn of(relative_path: &str) -> Self {
        if relative_path.ends_with(TYPED_SOURCE_EXTENSION) {
            FileType::Ts
        } else {
            FileType::Js
        }
    }
}

/// The classified layout of a project. Serializes with the camelCase keys the
/// prompt's structure block shows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectStructure {
    pub file_types: BTreeSet<FileType>,
    pub pages: Vec<String>,
    pub components: Vec<String>,
    pub api_routes: Vec<String>,
    pub styles: Vec<String>,
}

impl ProjectStructure {
    pub fn is_typescript(&self) -> bool {
        self.file_types.contains(&FileType::Ts)
    }
}

/// Classifies `files` (as returned by the walker) under `root`.
pub fn classify(root: &Path, files: &[PathBuf], scope: MatchScope) -> ProjectStructure {
    let mut structure = ProjectStructure::default();

    for file in files {
        let relative = project_relative(root, file);
        let subject = scope.subject(root, file);
        structure.file_types.insert(FileType::of(&relative));

        if subject.contains(PAGES_MARKER) {
            structure.pages.push(relative.clone());
        }
        if subject.contains(COMPONENTS_MARKER) {
            structure.components.push(relative.clone());
        }
        if subject.contains(API_ROUTES_MARKER) {
            structure.api_routes.push(relative.clone());
        }
        if subject.contains(STYLES_MARKER) {
            structure.styles.push(relative);
        }
    }

    debug!(
        "Classified {} files: {} pages, {} components, {} api routes, {} styles",
        files.len(),
        structure.pages.len(),
        structure.components.len(),
        structure.api_routes.len(),
        structure.styles.len()
    );
    structure
}
