pub mod blocks;
pub mod error;
pub mod inline;

#[cfg(test)]
mod tests;

use crate::html::HtmlNode;

pub use blocks::{BlockType, block_to_block_type, block_to_html_node, markdown_to_blocks};
pub use error::ParseError;
pub use inline::{TextFragment, text_to_fragments};

/// Converts a whole markdown document into a `<div>` holding one subtree per
/// block, in document order.
///
/// # Errors
/// The first [`ParseError`] from any block aborts the conversion; no partial
/// tree is returned.
pub fn markdown_to_html_node(markdown: &str) -> Result<HtmlNode, ParseError> {
    let blocks = markdown_to_blocks(markdown);
    log::debug!("split document into {} blocks", blocks.len());

    let children = blocks
        .iter()
        .map(|block| {
            let block_type = block_to_block_type(block);
            log::trace!("{block_type:?}: {}", preview(block, 40));
            block_to_html_node(block, block_type)
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(HtmlNode::element("div", children))
}

/// Convenience: [`markdown_to_html_node`] rendered to a string.
pub fn markdown_to_html(markdown: &str) -> Result<String, ParseError> {
    Ok(markdown_to_html_node(markdown)?.to_html())
}

/// First line of `s`, truncated to at most `max` bytes with "..." suffix if needed.
fn preview(s: &str, max: usize) -> String {
    let line = s.lines().next().unwrap_or_default();
    if line.len() <= max && line.len() == s.len() {
        return line.to_string();
    }
    let mut end = max.min(line.len());
    while !line.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &line[..end])
}
