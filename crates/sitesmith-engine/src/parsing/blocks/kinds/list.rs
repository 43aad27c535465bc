use std::sync::OnceLock;

use regex::Regex;

/// Unordered list block type: every line is a `- ` item.
pub struct UnorderedList;

impl UnorderedList {
    pub const MARKER: &'static str = "- ";

    pub fn is_list(block: &str) -> bool {
        !block.is_empty() && block.lines().all(|line| line.starts_with(Self::MARKER))
    }

    /// Item text with the marker and surrounding whitespace removed.
    pub fn strip_marker(line: &str) -> Option<&str> {
        line.strip_prefix(Self::MARKER).map(str::trim)
    }
}

/// Ordered list block type: lines numbered `1. `, `2. `, ... with no gaps.
pub struct OrderedList;

impl OrderedList {
    /// Human-readable form of the marker, for error messages.
    pub const MARKER: &'static str = "<n>. ";
    /// The marker every ordered list opens with.
    pub const FIRST: &'static str = "1. ";

    /// The 1-based number of the first line that breaks the sequence, or
    /// `None` if every line carries the expected number.
    pub fn first_misnumbered_line(block: &str) -> Option<usize> {
        block
            .lines()
            .zip(1usize..)
            .find(|(line, n)| !line.starts_with(&format!("{n}. ")))
            .map(|(_, n)| n)
    }

    /// Item text with the number, `. ` and surrounding whitespace removed.
    ///
    /// Any number is accepted here; numbering order is only checked when
    /// classifying.
    pub fn strip_marker(line: &str) -> Option<&str> {
        static MARKER_REGEX: OnceLock<Regex> = OnceLock::new();
        let marker =
            MARKER_REGEX.get_or_init(|| Regex::new(r"^\d+\. ").expect("Invalid list marker regex"));
        marker.find(line).map(|m| line[m.end()..].trim())
    }
}
