//! # gencode Styling Framework Detector
//!
//! File: cli/src/detect/frameworks.rs
//!
//! ## Overview
//!
//! Reads `package.json` at the project root and flags which known styling
//! libraries appear as keys of its `dependencies` object. `devDependencies`
//! and `peerDependencies` are not consulted.
//!
//! A project without `package.json` simply has no flags set. A manifest that
//! is not valid JSON is fatal.
//!
//! ## Known libraries
//!
//! | Flag               | Package(s)                    |
//! |--------------------|-------------------------------|
//! | `tailwind`         | `tailwindcss`                 |
//! | `styledComponents` | `styled-components`           |
//! | `chakraUI`         | `@chakra-ui/react`            |
//! | `bootstrap`        | `bootstrap`                   |
//! | `mui`              | `@mui/material`               |
//! | `daisyUI`          | `daisyui`, `react-daisyui`    |
//!
use crate::common::fs::io;
use crate::core::error::{GencodeError, Result};
use serde_json::Value;
use std::collections::BTreeSet;
use std::path::Path;
use tracing::{debug, info, warn};

pub const MANIFEST_FILENAME: &str = "package.json";

/// A styling library the detector knows about, in import-priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CssFramework {
    Tailwind,
    StyledComponents,
    ChakraUi,
    Bootstrap,
    Mui,
    DaisyUi,
}

impl CssFramework {
    pub const ALL: [CssFramework; 6] = [
        CssFramework::Tailwind,
        CssFramework::StyledComponents,
        CssFramework::ChakraUi,
        CssFramework::Bootstrap,
        CssFramework::Mui,
        CssFramework::DaisyUi,
    ];

    /// Name shown in the prompt.
    pub fn flag_name(self) -> &'static str {
        match self {
            CssFramework::Tailwind => "tailwind",
            CssFramework::StyledComponents => "styledComponents",
            CssFramework::ChakraUi => "chakraUI",
            CssFramework::Bootstrap => "bootstrap",
            CssFramework::Mui => "mui",
            CssFramework::DaisyUi => "daisyUI",
        }
    }

    /// Dependency keys that mark the library as present.
    pub fn package_names(self) -> &'static [&'static str] {
        match self {
            CssFramework::Tailwind => &["tailwindcss"],
            CssFramework::StyledComponents => &["styled-components"],
            CssFramework::ChakraUi => &["@chakra-ui/react"],
            CssFramework::Bootstrap => &["bootstrap"],
            CssFramework::Mui => &["@mui/material"],
            CssFramework::DaisyUi => &["daisyui", "react-daisyui"],
        }
    }
}

/// Presence flags for every `CssFramework`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrameworkFlags {
    detected: BTreeSet<CssFramework>,
}

impl FrameworkFlags {
    pub fn is_set(&self, framework: CssFramework) -> bool {
        self.detected.contains(&framework)
    }

    pub fn set(&mut self, framework: CssFramework) {
        self.detected.insert(framework);
    }

    /// Every known framework with its flag, in priority order.
    pub fn iter(&self) -> impl Iterator<Item = (CssFramework, bool)> + '_ {
        CssFramework::ALL
            .into_iter()
            .map(move |fw| (fw, self.is_set(fw)))
    }

    /// Flag names of the detected frameworks, in priority order.
    pub fn enabled_names(&self) -> Vec<&'static str> {
        self.iter()
            .filter(|(_, set)| *set)
            .map(|(fw, _)| fw.flag_name())
            .collect()
    }
}

/// Derives flags from the text of a `package.json`.
///
/// `manifest_path` only labels errors.
pub fn flags_from_manifest(content: &str, manifest_path: &Path) -> Result<FrameworkFlags> {
    let manifest: Value =
        serde_json::from_str(content).map_err(|source| GencodeError::Manifest {
            path: manifest_path.to_path_buf(),
            source,
        })?;

    let mut flags = FrameworkFlags::default();
    let dependencies = match manifest.get("dependencies") {
        None | Some(Value::Null) => {
            debug!("Manifest has no dependencies");
            return Ok(flags);
        }
        Some(Value::Object(map)) => map,
        Some(other) => {
            warn!(
                "Ignoring non-object 'dependencies' field in {}: {}",
                manifest_path.display(),
                other
            );
            return Ok(flags);
        }
    };

    for framework in CssFramework::ALL {
        if framework
            .package_names()
            .iter()
            .any(|name| dependencies.contains_key(*name))
        {
            flags.set(framework);
        }
    }
    Ok(flags)
}

/// Reads `<root>/package.json` and flags declared styling libraries.
pub fn detect_css_frameworks(root: &Path) -> Result<FrameworkFlags> {
    let manifest_path = root.join(MANIFEST_FILENAME);
    if !manifest_path.exists() {
        info!(
            "No {} found in {}; no styling frameworks detected.",
            MANIFEST_FILENAME,
            root.display()
        );
        return Ok(FrameworkFlags::default());
    }

    let content = io::read_file_to_string(&manifest_path)?;
    let flags = flags_from_manifest(&content, &manifest_path)?;
    debug!("Detected CSS frameworks: {:?}", flags.enabled_names());
    Ok(flags)
}
