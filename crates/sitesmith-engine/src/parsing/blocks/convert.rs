use crate::html::HtmlNode;
use crate::parsing::{
    error::ParseError,
    inline::{FragmentKind, TextFragment, text_fragment_to_html_node, text_to_children},
};

use super::{
    kinds::{BlockQuote, CodeFence, Heading, OrderedList, Paragraph, UnorderedList},
    types::BlockType,
};

/// Builds the HTML subtree for one block of the given type.
pub fn block_to_html_node(block: &str, block_type: BlockType) -> Result<HtmlNode, ParseError> {
    match block_type {
        BlockType::Paragraph => paragraph_to_html_node(block),
        BlockType::Heading => heading_to_html_node(block),
        BlockType::Code => code_to_html_node(block),
        BlockType::Quote => quote_to_html_node(block),
        BlockType::UnorderedList => unordered_list_to_html_node(block),
        BlockType::OrderedList => ordered_list_to_html_node(block),
    }
}

/// `<p>` holding the block's lines joined by spaces.
pub fn paragraph_to_html_node(block: &str) -> Result<HtmlNode, ParseError> {
    let text = Paragraph::content(block);
    Ok(HtmlNode::element("p", text_to_children(&text)?))
}

/// `<h1>` to `<h6>` by the length of the `#` run.
pub fn heading_to_html_node(block: &str) -> Result<HtmlNode, ParseError> {
    let (level, text) = Heading::split(block).ok_or_else(|| ParseError::InvalidHeading {
        block: block.to_string(),
    })?;
    Ok(HtmlNode::element(format!("h{level}"), text_to_children(text)?))
}

/// `<pre><code>` holding the fenced content verbatim, trimmed.
pub fn code_to_html_node(block: &str) -> Result<HtmlNode, ParseError> {
    let inner = CodeFence::inner(block).ok_or_else(|| ParseError::InvalidCodeBlock {
        block: block.to_string(),
    })?;
    let code = text_fragment_to_html_node(TextFragment::new(inner.trim(), FragmentKind::Code));
    Ok(HtmlNode::element("pre", vec![code]))
}

/// `<blockquote>` holding the de-prefixed lines as one run of text.
pub fn quote_to_html_node(block: &str) -> Result<HtmlNode, ParseError> {
    let text = BlockQuote::content(block);
    Ok(HtmlNode::element("blockquote", text_to_children(&text)?))
}

pub fn unordered_list_to_html_node(block: &str) -> Result<HtmlNode, ParseError> {
    let items = list_items(block, UnorderedList::MARKER, UnorderedList::strip_marker)?;
    Ok(HtmlNode::element("ul", items))
}

pub fn ordered_list_to_html_node(block: &str) -> Result<HtmlNode, ParseError> {
    let items = list_items(block, OrderedList::MARKER, OrderedList::strip_marker)?;
    Ok(HtmlNode::element("ol", items))
}

/// One `<li>` per line, each tokenized on its own.
fn list_items(
    block: &str,
    marker: &'static str,
    strip_marker: fn(&str) -> Option<&str>,
) -> Result<Vec<HtmlNode>, ParseError> {
    block
        .lines()
        .map(|line| -> Result<HtmlNode, ParseError> {
            let item = strip_marker(line).ok_or_else(|| ParseError::MalformedListItem {
                marker,
                line: line.to_string(),
            })?;
            Ok(HtmlNode::element("li", text_to_children(item)?))
        })
        .collect()
}
