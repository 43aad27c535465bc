/// Blockquote block type with owned prefix constants.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: char = '>';
    /// Prefix followed by its conventional space, stripped as one unit.
    pub const PREFIX_SPACED: &'static str = "> ";

    /// True if every line starts with `>`.
    pub fn is_quote(block: &str) -> bool {
        !block.is_empty() && block.lines().all(|line| line.starts_with(Self::PREFIX))
    }

    /// Strips `> `, else `>`. Lines without a prefix are kept as they are.
    pub fn strip_line(line: &str) -> &str {
        line.strip_prefix(Self::PREFIX_SPACED)
            .or_else(|| line.strip_prefix(Self::PREFIX))
            .unwrap_or(line)
    }

    /// Strips every line and joins them into one run of text.
    pub fn content(block: &str) -> String {
        let joined = block.lines().map(Self::strip_line).collect::<Vec<_>>().join(" ");
        joined.trim_end().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn every_line_needs_prefix() {
        assert!(BlockQuote::is_quote(">Line 1\n>Line 2\n>Line 3"));
        assert!(!BlockQuote::is_quote(">Line 1\nLine 2"));
        assert!(!BlockQuote::is_quote(""));
    }

    #[test]
    fn strip_spaced_prefix() {
        assert_eq!(BlockQuote::strip_line("> hello"), "hello");
    }

    #[test]
    fn strip_bare_prefix() {
        assert_eq!(BlockQuote::strip_line(">hello"), "hello");
    }

    #[test]
    fn strip_only_one_prefix() {
        assert_eq!(BlockQuote::strip_line(">> nested"), "> nested");
    }

    #[test]
    fn unprefixed_line_is_kept() {
        assert_eq!(BlockQuote::strip_line("no prefix"), "no prefix");
        assert_eq!(BlockQuote::strip_line(""), "");
    }

    #[test]
    fn content_joins_lines() {
        assert_eq!(
            BlockQuote::content("> This is a\n> blockquote block  "),
            "This is a blockquote block"
        );
    }
}
