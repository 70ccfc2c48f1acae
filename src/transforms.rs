//! Pure text transformations
//!
//! Every function in this module is total over its input: empty content,
//! content without the target markers, and already-transformed content all
//! pass through without error. Each task composes these functions in a
//! fixed order before writing anything back to disk.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::Replacement;
use crate::constants::COPYRIGHT_FENCE;

/// Matches a fenced copyright block including its trailing newlines.
///
/// The lazy span with `(?s)` mirrors a dot-matches-newline, non-greedy
/// match so embedded newlines inside the block are consumed up to the
/// nearest closing fence.
static COPYRIGHT_BLOCK_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)```copyright\n.*?```\n*")
        .expect("Failed to compile regex pattern for COPYRIGHT_BLOCK_RE")
});

/// Matches a run of three or more consecutive newlines.
static BLANK_RUN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\n{3,}").expect("Failed to compile regex pattern for BLANK_RUN_RE")
});

/// Check whether the content contains a fenced copyright block
///
/// This is the skip rule for in-place copyright removal: the opening
/// marker being absent means there is nothing to do and no write happens.
pub fn has_copyright_block(content: &str) -> bool {
    content.contains(COPYRIGHT_FENCE)
}

/// Remove every fenced copyright block from the content
pub fn strip_copyright_blocks(content: &str) -> String {
    COPYRIGHT_BLOCK_RE.replace_all(content, "").to_string()
}

/// Collapse every run of three or more newlines to exactly two
///
/// At most one fully blank line is preserved between paragraphs. Runs
/// unconditionally after block removal, not gated by whether removal
/// occurred.
pub fn collapse_blank_lines(content: &str) -> String {
    BLANK_RUN_RE.replace_all(content, "\n\n").to_string()
}

/// Check whether any find-string of the replacement table is present
///
/// This is the skip rule for brand substitution, evaluated before any
/// replacement is applied.
pub fn has_replacement_target(content: &str, replacements: &[Replacement]) -> bool {
    replacements.iter().any(|r| content.contains(&r.find))
}

/// Apply an ordered list of literal find/replace pairs
///
/// Each pair is applied globally across the text, in table order. Order
/// matters when one find-string is a substring of another; see
/// `Settings::validate` for the construction-time check.
pub fn apply_replacements(content: &str, replacements: &[Replacement]) -> String {
    let mut result = content.to_string();
    for replacement in replacements {
        result = result.replace(&replacement.find, &replacement.replace);
    }
    result
}

/// Escape content for embedding in a TypeScript template literal
///
/// Inserts a backslash before every backtick and before every `${` so
/// that parsing the generated literal reproduces the content
/// byte-for-byte, with no premature termination or interpolation.
pub fn escape_template_literal(content: &str) -> String {
    content.replace('`', "\\`").replace("${", "\\${")
}

/// Normalise a document before module wrapping
///
/// Strips any residual copyright block, collapses blank-line runs, and
/// trims leading and trailing whitespace from the whole document.
pub fn normalise_document(content: &str) -> String {
    let stripped = strip_copyright_blocks(content);
    let collapsed = collapse_blank_lines(&stripped);
    collapsed.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn replacement(find: &str, replace: &str) -> Replacement {
        Replacement {
            find: find.to_string(),
            replace: replace.to_string(),
        }
    }

    #[test]
    fn test_strip_copyright_block() {
        let content = "```copyright\nAll rights reserved\n```\n\n# Title\n\nBody\n";
        let cleaned = strip_copyright_blocks(content);
        assert_eq!(cleaned, "# Title\n\nBody\n");
    }

    #[test]
    fn test_strip_copyright_block_consumes_embedded_newlines() {
        let content = "intro\n```copyright\nline one\n\nline two\n```\noutro\n";
        let cleaned = strip_copyright_blocks(content);
        assert_eq!(cleaned, "intro\noutro\n");
    }

    #[test]
    fn test_strip_copyright_block_is_non_greedy() {
        // Two blocks with body text between them; a greedy match would
        // swallow the text in the middle.
        let content = "```copyright\na\n```\nmiddle\n```copyright\nb\n```\nend\n";
        let cleaned = strip_copyright_blocks(content);
        assert_eq!(cleaned, "middle\nend\n");
    }

    #[test]
    fn test_strip_copyright_block_noop_without_marker() {
        let content = "# Title\n\nNo fences here.\n";
        assert_eq!(strip_copyright_blocks(content), content);
        assert!(!has_copyright_block(content));
    }

    #[test]
    fn test_strip_copyright_block_is_idempotent() {
        let content = "```copyright\nAll rights reserved\n```\n\n# Title\n";
        let once = strip_copyright_blocks(content);
        let twice = strip_copyright_blocks(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_strip_copyright_block_empty_input() {
        assert_eq!(strip_copyright_blocks(""), "");
    }

    #[test]
    fn test_collapse_blank_lines() {
        let content = "a\n\n\n\nb\n\n\nc\n\nd";
        let collapsed = collapse_blank_lines(content);
        assert_eq!(collapsed, "a\n\nb\n\nc\n\nd");
        assert!(!collapsed.contains("\n\n\n"));
    }

    #[test]
    fn test_collapse_blank_lines_is_idempotent() {
        let content = "a\n\n\n\n\nb";
        let once = collapse_blank_lines(content);
        let twice = collapse_blank_lines(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_apply_replacements_in_order() {
        let table = vec![
            replacement("记者Aim（艾米）", "小艾"),
            replacement("记者Aim", "小艾"),
        ];
        let content = "记者Aim（艾米）和记者Aim都在。";
        let replaced = apply_replacements(content, &table);
        assert_eq!(replaced, "小艾和小艾都在。");
    }

    #[test]
    fn test_apply_replacements_noop_without_target() {
        let table = vec![replacement("星盒", "IP内容工厂")];
        let content = "nothing to see here";
        assert_eq!(apply_replacements(content, &table), content);
        assert!(!has_replacement_target(content, &table));
    }

    #[test]
    fn test_apply_replacements_is_idempotent_with_disjoint_vocabulary() {
        let table = vec![
            replacement("星盒", "IP内容工厂"),
            replacement("记者Aim（艾米）", "小艾"),
            replacement("记者Aim", "小艾"),
        ];
        let content = "星盒的记者Aim（艾米）访谈";
        let once = apply_replacements(content, &table);
        let twice = apply_replacements(&once, &table);
        assert_eq!(once, twice);
        assert!(
            !has_replacement_target(&once, &table),
            "Second run should report a skip"
        );
    }

    #[test]
    fn test_escape_template_literal() {
        let content = "code `inline` and ${variable}";
        let escaped = escape_template_literal(content);
        assert_eq!(escaped, "code \\`inline\\` and \\${variable}");
    }

    #[test]
    fn test_escape_template_literal_adjacent_markers() {
        let escaped = escape_template_literal("`${x}`");
        assert_eq!(escaped, "\\`\\${x}\\`");
    }

    #[test]
    fn test_normalise_document() {
        let content = "\n\n```copyright\nAll rights reserved\n```\n# Title\n\n\n\nBody\n\n";
        let normalised = normalise_document(content);
        assert_eq!(normalised, "# Title\n\nBody");
    }
}
