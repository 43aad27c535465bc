//! # HTML Node Tree
//!
//! The output side of the pipeline: an owned, immutable tree of [`HtmlNode`]s
//! and a recursive renderer that turns it into markup.
//!
//! ## Node Shapes
//!
//! Every node has exactly one of three shapes, one enum variant each:
//!
//! - **`Text`**: a raw text leaf, rendered literally (no escaping)
//! - **`Element`**: a tagged container owning zero or more children
//! - **`Void`**: a tagged, self-contained element with attributes only (`img`)
//!
//! Parents own their children by value, so the tree is acyclic and can be
//! rendered any number of times from any thread.

pub mod attributes;
pub mod node;

pub use attributes::Attributes;
pub use node::HtmlNode;
