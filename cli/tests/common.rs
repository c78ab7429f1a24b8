//! # gencode CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//!
//! ## Overview
//!
//! Shared helpers for the integration test files in `cli/tests/`. Each test
//! file declares `mod common;` and pulls these in.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::fs;
use std::path::Path;

/// # Get gencode Command (`gencode_cmd`)
///
/// Creates an `assert_cmd::Command` for the compiled `gencode` binary.
/// `XDG_CONFIG_HOME` points at an empty directory so a developer's own
/// `~/.config/gencode/config.toml` cannot leak into test runs.
///
/// ## Panics
/// Panics if the `gencode` binary cannot be found via `Command::cargo_bin`.
pub fn gencode_cmd(config_home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("gencode").expect("Failed to find gencode binary for testing");
    cmd.env("XDG_CONFIG_HOME", config_home).env_remove("RUST_LOG");
    cmd
}

/// Creates `relative` under `root` with `content`, making parent directories.
pub fn create_file(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create parent directory");
    }
    fs::write(path, content).expect("Failed to write test file");
}

/// Lays out a small Next.js project.
pub fn create_next_project(root: &Path) {
    create_file(root, "pages/index.tsx", "export default function Home() { return null; }");
    create_file(root, "pages/api/hello.ts", "export default function handler() {}");
    create_file(root, "components/Header.tsx", "");
    create_file(root, "styles/globals.css", "body { margin: 0; }");
    create_file(root, "node_modules/react/index.js", "");
    create_file(root, ".next/build-manifest.json", "{}");
    create_file(root, "theme.ts", "export const theme = {};");
    create_file(
        root,
        "package.json",
        r#"{
  "name": "storefront",
  "dependencies": {
    "next": "14.2.0",
    "react": "18.3.0",
    "@chakra-ui/react": "2.8.0"
  },
  "devDependencies": {
    "tailwindcss": "3.4.0"
  }
}"#,
    );
}
