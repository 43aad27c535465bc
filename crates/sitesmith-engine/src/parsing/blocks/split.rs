use std::sync::OnceLock;

use regex::Regex;

/// Splits a document into trimmed, non-empty blocks.
///
/// Two or more consecutive newlines separate blocks, however many there are.
/// A line holding only spaces or tabs is not blank and never splits a block.
pub fn markdown_to_blocks(markdown: &str) -> Vec<String> {
    static SEPARATOR_REGEX: OnceLock<Regex> = OnceLock::new();
    let separator = SEPARATOR_REGEX
        .get_or_init(|| Regex::new(r"\n{2,}").expect("Invalid block separator regex"));

    let normalized = markdown.replace("\r\n", "\n");
    separator
        .split(&normalized)
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .map(str::to_string)
        .collect()
}
