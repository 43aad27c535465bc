//! # Inline Parsing
//!
//! Turns a run of text into typed [`TextFragment`]s, then into HTML nodes.
//!
//! ## Architecture
//!
//! Inline parsing is separate from block parsing and runs over the leaf text
//! of paragraphs, headings, quotes and list items. Code blocks never reach it.
//!
//! Tokenizing is a fixed pipeline over a working list of fragments. Each stage
//! rewrites only the fragments that are still plain:
//!
//! 1. images `![alt](url)`
//! 2. links `[text](url)` (never a `[` right after `!`)
//! 3. `**` bold, then `_` italic, then `` ` `` code
//!
//! ## Modules
//!
//! - **`types`**: `TextFragment` and `FragmentKind`
//! - **`kinds`**: Inline-specific types with owned delimiters (Link, Image, Delimiter)
//! - **`cursor`**: `Cursor` for byte-by-byte scanning
//! - **`parser`**: `text_to_fragments()` and the `split_nodes_*` stages
//! - **`convert`**: fragment → `HtmlNode`
//!
//! ## Nesting
//!
//! There is none. Text inside a styled span, a link or an image is final.

pub mod convert;
pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod types;

pub use convert::{text_fragment_to_html_node, text_to_children};
pub use kinds::Delimiter;
pub use parser::{
    extract_markdown_images, extract_markdown_links, split_nodes_delimiter, split_nodes_image,
    split_nodes_link, text_to_fragments,
};
pub use types::{FragmentKind, TextFragment};
