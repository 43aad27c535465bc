//! Markdown to HTML conversion for the sitesmith static-site generator.
//!
//! The pipeline is [`markdown_to_html_node`] (document → [`HtmlNode`] tree)
//! followed by [`HtmlNode::to_html`]. Both steps are pure and keep no state
//! between calls.

pub mod html;
pub mod parsing;

// Re-export key types for easier usage
pub use html::{Attributes, HtmlNode};
pub use parsing::{
    BlockType, ParseError, TextFragment, block_to_block_type, block_to_html_node,
    markdown_to_blocks, markdown_to_html, markdown_to_html_node, text_to_fragments,
};
pub use parsing::inline::FragmentKind;
