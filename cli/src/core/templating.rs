//! # gencode Template System
//!
//! File: cli/src/core/templating.rs
//!
//! ## Overview
//!
//! Thin wrapper around the Tera templating engine. The prompt assembler hands
//! it a template source and a `tera::Context`; it returns the rendered text or
//! a `GencodeError::Template` carrying Tera's diagnostics.
//!
//! Autoescaping is always disabled: the output is a plain-text prompt, and
//! HTML-escaping would mangle the quotes in import statements and the JSON
//! structure block.
//!
//! ## Examples
//!
//! ```rust
//! let mut context = tera::Context::new();
//! context.insert("language", "TypeScript");
//! let text = templating::render_template("gencode.prompt", "Language: {{ language }}", &context)?;
//! ```
//!
use crate::core::error::{GencodeError, Result};
use anyhow::anyhow;
use tera::Tera;
use tracing::debug;

/// Renders a single template source with the given context.
///
/// `name` only labels error messages.
pub fn render_template(name: &str, source: &str, context: &tera::Context) -> Result<String> {
    debug!("Rendering template '{}'", name);
    Tera::one_off(source, context, false).map_err(|e| {
        anyhow!(GencodeError::Template { source: e })
            .context(format!("Tera rendering failed for template '{}'", name))
    })
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_substitutes_variables() -> Result<()> {
        let mut context = tera::Context::new();
        context.insert("project_name", "storefront");
        context.insert("items", &vec!["a", "b"]);

        let rendered = render_template(
            "inline",
            "# {{ project_name }}: {{ items | join(sep=\", \") }}",
            &context,
        )?;
        assert_eq!(rendered, "# storefront: a, b");
        Ok(())
    }

    #[test]
    fn test_render_does_not_escape() -> Result<()> {
        let mut context = tera::Context::new();
        context.insert("line", "import 'x' from \"y\" <z>");
        let rendered = render_template("inline", "{{ line }}", &context)?;
        assert_eq!(rendered, "import 'x' from \"y\" <z>");
        Ok(())
    }

    #[test]
    fn test_render_raw_block_kept_verbatim() -> Result<()> {
        let rendered = render_template(
            "inline",
            "{% raw %}{{{ input }}}{% endraw %}",
            &tera::Context::new(),
        )?;
        assert_eq!(rendered, "{{{ input }}}");
        Ok(())
    }

    #[test]
    fn test_render_invalid_template_syntax() {
        let mut context = tera::Context::new();
        context.insert("name", "test");
        let result = render_template("broken.tera", "Hello {{ name", &context);
        assert!(result.is_err());
        let error_string = result.unwrap_err().to_string();
        assert!(error_string.contains("Tera rendering failed"));
        assert!(error_string.contains("broken.tera"));
    }
}
