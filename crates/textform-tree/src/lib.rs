#![forbid(unsafe_code)]

//! Rich-text tree model for textform.
//!
//! # Role in textform
//! `textform-tree` owns the value type every other crate operates on: a
//! closed sum of plain-text leaves, opaque wrapper nodes, ordered sequences,
//! and the empty node. It carries no behavior beyond construction,
//! classification, and measurement.
//!
//! # Primary responsibilities
//! - **TextNode**: the immutable, value-typed tree.
//! - **Wrapper**: a wrapped subtree with the metadata a rewrite pass leaves
//!   behind (blocked flag, original match, identity key).
//! - **Merging**: coalescing consecutive leaves so sequences stay compact.
//!
//! # How it fits in the system
//! The rewrite and truncation engines (`textform-engine`) consume and produce
//! `TextNode` values; the orchestrator (`textform`) hands the final tree to a
//! caller-owned renderer. Nothing here depends on pattern matching or
//! rendering, so the model stays reusable and trivially testable.
//!
//! # Example
//! ```
//! use textform_tree::{Tag, TextNode};
//!
//! let tree = TextNode::sequence([
//!     TextNode::leaf("hello "),
//!     TextNode::wrap(Tag::new("bold"), TextNode::leaf("world")),
//! ]);
//! assert_eq!(tree.plain_text(), "hello world");
//! assert_eq!(tree.char_len(), 11);
//! ```

pub mod merge;
pub mod node;

pub use merge::{merge_adjacent_leaves, splice};
pub use node::{Identity, Leaves, Tag, TextNode, Wrapper};
