//! # gencode Prompt Assembler
//!
//! File: cli/src/prompt/mod.rs
//!
//! ## Overview
//!
//! Turns a `ProjectScan` into the prompt document consumed by the downstream
//! code-generation assistant. The layout lives in
//! `cli/templates/gencode.prompt.tera`, embedded at compile time and rendered
//! through `core::templating`.
//!
//! ## Template variables
//!
//! | Variable           | Content                                                   |
//! |--------------------|-----------------------------------------------------------|
//! | `language`         | `TypeScript` if any `.ts` file was seen, else `JavaScript` |
//! | `css_frameworks`   | detected framework flag names, priority order             |
//! | `state_management` | detected state-management names (currently always empty)  |
//! | `themes`           | theme files found at the root, candidate order            |
//! | `css_imports`      | recommended import statements, one per line                |
//! | `structure`        | `ProjectStructure` as 2-space indented JSON               |
//!
//! Each list has its own fallback wording in the template when empty.
//!
//! Rendering is deterministic: the same scan always yields the same bytes.
//!
use crate::common::fs::io;
use crate::core::error::Result;
use crate::core::templating;
use crate::detect::ProjectScan;
use anyhow::Context;
use std::path::Path;

pub mod imports;

const TEMPLATE_NAME: &str = "gencode.prompt";
const PROMPT_TEMPLATE: &str = include_str!("../../templates/gencode.prompt.tera");

/// A rendered prompt, ready to be written out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptDocument {
    text: String,
}

impl PromptDocument {
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Writes the document to `path`, creating parent directories and
    /// replacing any existing file.
    pub fn write_to(&self, path: &Path) -> Result<()> {
        io::write_string_to_file(path, &self.text)
    }
}

/// Renders the prompt for a scanned project.
pub fn render_prompt(scan: &ProjectScan) -> Result<PromptDocument> {
    let language = if scan.structure.is_typescript() {
        "TypeScript"
    } else {
        "JavaScript"
    };
    let structure = serde_json::to_string_pretty(&scan.structure)
        .context("Failed to serialize project structure")?;

    let mut context = tera::Context::new();
    context.insert("language", language);
    context.insert("css_frameworks", &scan.css_frameworks.enabled_names());
    context.insert("state_management", &scan.state_management.enabled_names());
    context.insert("themes", &scan.theme_files);
    context.insert(
        "css_imports",
        &imports::css_imports(&scan.css_frameworks).join("\n"),
    );
    context.insert("structure", &structure);

    let text = templating::render_template(TEMPLATE_NAME, PROMPT_TEMPLATE, &context)?;
    Ok(PromptDocument { text })
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use crate::detect::frameworks::{CssFramework, FrameworkFlags};
    use crate::detect::structure::{FileType, ProjectStructure};
    use crate::detect::StateManagementFlags;
    use tempfile::tempdir;

    fn empty_scan() -> ProjectScan {
        ProjectScan {
            structure: ProjectStructure::default(),
            css_frameworks: FrameworkFlags::default(),
            state_management: StateManagementFlags::default(),
            theme_files: Vec::new(),
        }
    }

    #[test]
    fn test_fallback_phrases() -> Result<()> {
        let doc = render_prompt(&empty_scan())?;
        let text = doc.as_str();

        assert!(text.starts_with("name: gencode\n"));
        assert!(text.contains("### User Input:\n{{{ input }}}\n"));
        assert!(text.contains("- **Language:** JavaScript\n"));
        assert!(text.contains("- **CSS Frameworks:** None detected\n"));
        assert!(text.contains("- **State Management:** None detected\n"));
        assert!(text.contains("- **Detected Themes:** No specific theme configuration found\n"));
        assert!(text.contains("2. Use **No specific CSS framework** for styling guidance."));
        assert!(text.contains(
            "3. Identify state management methods such as **Context API or no state management** if applicable."
        ));
        // Empty import list still leaves its own (empty) line before the blank separator.
        assert!(text.contains("### CSS Import Guidelines:\n\n\n### Project Structure:"));
        assert!(text.ends_with("no additional explanations.\n"));
        Ok(())
    }

    #[test]
    fn test_detected_values_rendered() -> Result<()> {
        let mut scan = empty_scan();
        scan.structure.file_types.insert(FileType::Ts);
        scan.structure.file_types.insert(FileType::Js);
        scan.structure.pages.push("/pages/index.tsx".to_string());
        scan.css_frameworks.set(CssFramework::Tailwind);
        scan.css_frameworks.set(CssFramework::Mui);
        scan.theme_files = vec!["theme.ts".to_string(), "tailwind.config.js".to_string()];

        let doc = render_prompt(&scan)?;
        let text = doc.as_str();

        assert!(text.contains("- **Language:** TypeScript\n"));
        assert!(text.contains("- **CSS Frameworks:** tailwind, mui\n"));
        assert!(text.contains("- **Detected Themes:** theme.ts, tailwind.config.js\n"));
        assert!(text.contains(
            "### CSS Import Guidelines:\n\
             import 'tailwindcss/tailwind.css';\n\
             import { ThemeProvider } from '@mui/material/styles';\n\n\
             ### Project Structure:"
        ));
        assert!(text.contains("2. Use **tailwind, mui** for styling guidance."));
        Ok(())
    }

    #[test]
    fn test_structure_block_is_indented_json() -> Result<()> {
        let mut scan = empty_scan();
        scan.structure.file_types.insert(FileType::Js);
        scan.structure.styles.push("/styles/globals.css".to_string());

        let doc = render_prompt(&scan)?;
        let expected = "```\n{\n  \"fileTypes\": [\n    \"js\"\n  ],\n  \"pages\": [],\n  \
                        \"components\": [],\n  \"apiRoutes\": [],\n  \"styles\": [\n    \
                        \"/styles/globals.css\"\n  ]\n}\n```";
        assert!(doc.as_str().contains(expected));
        Ok(())
    }

    #[test]
    fn test_rendering_is_deterministic() -> Result<()> {
        let mut scan = empty_scan();
        scan.css_frameworks.set(CssFramework::ChakraUi);
        assert_eq!(render_prompt(&scan)?, render_prompt(&scan)?);
        Ok(())
    }

    #[test]
    fn test_write_to_creates_parents() -> Result<()> {
        let project = tempdir()?;
        let path = project.path().join(".continue/prompts/gencode.prompt");
        let doc = render_prompt(&empty_scan())?;
        doc.write_to(&path)?;
        assert_eq!(std::fs::read_to_string(&path)?, doc.as_str());
        Ok(())
    }
}
