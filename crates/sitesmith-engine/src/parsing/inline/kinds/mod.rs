//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters.
//!
//! ## Types
//!
//! - **`Link`**: `[anchor](url)` brackets, plus the shared bracket/paren scanner
//! - **`Image`**: the `!` prefix that turns a link form into an image
//! - **`Delimiter`**: symmetric emphasis/code markers (`**`, `_`, `` ` ``) in
//!   split order
//!
//! The parser calls these constants; it never hardcodes `[`, `![` or `**`.

pub mod delimiter;
pub mod image;
pub mod link;

pub use delimiter::Delimiter;
pub use image::Image;
pub use link::{BracketMatch, Link};
