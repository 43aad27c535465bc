/// Errors that abort a document conversion.
///
/// Only [`ParseError::UnclosedDelimiter`] can come out of
/// [`markdown_to_html_node`](crate::parsing::markdown_to_html_node). The other
/// variants are raised when a block converter is called directly with a block
/// that does not have the shape of its tag.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("invalid markdown, formatted section not closed: odd number of `{delimiter}` in {text:?}")]
    UnclosedDelimiter {
        delimiter: &'static str,
        text: String,
    },
    #[error("invalid heading block: {block:?}")]
    InvalidHeading { block: String },
    #[error("invalid code block, expected ``` fences: {block:?}")]
    InvalidCodeBlock { block: String },
    #[error("invalid list item, expected `{marker}` marker: {line:?}")]
    MalformedListItem { marker: &'static str, line: String },
}
