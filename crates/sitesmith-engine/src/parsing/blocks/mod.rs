//! # Block Parsing
//!
//! Three phases, each a pure function over strings.
//!
//! ## Parsing Phases
//!
//! 1. **Splitting** (`split`): the document is cut on blank lines into trimmed,
//!    non-empty blocks
//!
//! 2. **Classification** (`classify`): each block gets exactly one
//!    [`BlockType`] from an ordered grammar (first match wins)
//!
//! 3. **Conversion** (`convert`): each (block, type) pair becomes an
//!    [`HtmlNode`](crate::html::HtmlNode) subtree, calling the inline parser
//!    for leaf text
//!
//! ## Modules
//!
//! - **`types`**: `BlockType`
//! - **`kinds`**: Block-specific types with owned markers (Heading, CodeFence,
//!   BlockQuote, UnorderedList, OrderedList, Paragraph)
//! - **`split`**: `markdown_to_blocks`
//! - **`classify`**: `block_to_block_type`
//! - **`convert`**: `block_to_html_node` and one converter per block type
//!
//! ## Key Invariants
//!
//! - Code blocks are raw zones: their content never reaches the inline parser
//! - An ordered list with a numbering gap anywhere is a paragraph
//! - Quote lines without a prefix are kept; list lines without a marker are
//!   an error

pub mod classify;
pub mod convert;
pub mod kinds;
pub mod split;
pub mod types;

pub use classify::block_to_block_type;
pub use convert::{
    block_to_html_node, code_to_html_node, heading_to_html_node, ordered_list_to_html_node,
    paragraph_to_html_node, quote_to_html_node, unordered_list_to_html_node,
};
pub use split::markdown_to_blocks;
pub use types::BlockType;
