//! Module artifact generation
//!
//! Wraps normalised Markdown content into a TypeScript module exporting a
//! single template-literal constant, with a one-line leading comment.

use crate::transforms::{escape_template_literal, normalise_document};

/// Render a module artifact from already-normalised, escaped content
///
/// The artifact is exactly one comment line followed by one exported
/// binding:
///
/// ```text
/// // {description}
/// export const {export_name} = `{content}`
/// ```
pub fn render_module(escaped_content: &str, export_name: &str, description: &str) -> String {
    format!("// {description}\nexport const {export_name} = `{escaped_content}`\n")
}

/// Convert Markdown content into a module artifact
///
/// Normalises the document (residual copyright blocks stripped, blank-line
/// runs collapsed, whole-document whitespace trimmed), escapes it for the
/// template literal, and renders the module source.
pub fn markdown_to_module(content: &str, export_name: &str, description: &str) -> String {
    let normalised = normalise_document(content);
    let escaped = escape_template_literal(&normalised);
    render_module(&escaped, export_name, description)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Parse the template-literal value back out of a generated artifact.
    fn extract_literal(artifact: &str) -> String {
        let start = artifact.find("= `").unwrap() + 3;
        let end = artifact.rfind('`').unwrap();
        artifact[start..end].replace("\\${", "${").replace("\\`", "`")
    }

    #[test]
    fn test_render_module_shape() {
        let artifact = render_module("content", "p1IndustryPrompt", "P1: 行业目标分析师提示词");
        assert_eq!(
            artifact,
            "// P1: 行业目标分析师提示词\nexport const p1IndustryPrompt = `content`\n"
        );
    }

    #[test]
    fn test_markdown_to_module_round_trip() {
        let content = "# Prompt\n\nUse `backticks` and ${placeholders} carefully.\n";
        let artifact = markdown_to_module(content, "testPrompt", "test");

        assert!(artifact.contains("\\`backticks\\`"));
        assert!(artifact.contains("\\${placeholders}"));
        assert_eq!(
            extract_literal(&artifact),
            "# Prompt\n\nUse `backticks` and ${placeholders} carefully."
        );
    }

    #[test]
    fn test_markdown_to_module_strips_residual_copyright() {
        let content = "```copyright\nAll rights reserved\n```\n\n# Prompt\n\nBody\n";
        let artifact = markdown_to_module(content, "testPrompt", "test");
        assert!(!artifact.contains("copyright"));
        assert_eq!(extract_literal(&artifact), "# Prompt\n\nBody");
    }

    #[test]
    fn test_markdown_to_module_empty_content() {
        let artifact = markdown_to_module("", "emptyPrompt", "empty");
        assert_eq!(artifact, "// empty\nexport const emptyPrompt = ``\n");
    }
}
