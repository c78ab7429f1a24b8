//! # gencode Theme File Detector
//!
//! File: cli/src/detect/themes.rs
//!
//! Checks the project root (non-recursively) for well-known theme and styling
//! config files. Results follow `THEME_CANDIDATES` order, not filesystem order.
//!
use std::path::Path;
use tracing::debug;

/// Candidate theme/config filenames, in reporting order.
pub const THEME_CANDIDATES: [&str; 10] = [
    "theme.ts",
    "theme.js",
    "tailwind.config.js",
    "tailwind.config.ts",
    "styled-components.ts",
    "styled-components.js",
    "chakra-ui-theme.ts",
    "chakra-ui-theme.js",
    "antd-theme.ts",
    "antd-theme.js",
];

/// Returns the candidates that exist directly under `root`.
pub fn detect_theme_files(root: &Path) -> Vec<String> {
    let found: Vec<String> = THEME_CANDIDATES
        .iter()
        .filter(|name| root.join(name).exists())
        .map(|name| name.to_string())
        .collect();
    debug!("Detected theme files: {:?}", found);
    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_candidate_order_not_creation_order() {
        let project = tempdir().unwrap();
        fs::write(project.path().join("tailwind.config.js"), "").unwrap();
        fs::write(project.path().join("theme.ts"), "").unwrap();

        assert_eq!(
            detect_theme_files(project.path()),
            vec!["theme.ts", "tailwind.config.js"]
        );
    }

    #[test]
    fn test_only_root_is_checked() {
        let project = tempdir().unwrap();
        fs::create_dir_all(project.path().join("src")).unwrap();
        fs::write(project.path().join("src/theme.ts"), "").unwrap();
        fs::write(project.path().join("my-theme.ts"), "").unwrap();

        assert!(detect_theme_files(project.path()).is_empty());
    }

    #[test]
    fn test_all_candidates() {
        let project = tempdir().unwrap();
        for name in THEME_CANDIDATES.iter().rev() {
            fs::write(project.path().join(name), "").unwrap();
        }
        assert_eq!(detect_theme_files(project.path()), THEME_CANDIDATES.to_vec());
    }
}
