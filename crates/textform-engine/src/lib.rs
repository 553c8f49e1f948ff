#![forbid(unsafe_code)]

//! Rewrite and truncation engines for textform trees.
//!
//! # Role in textform
//! `textform-engine` holds the two recursive algorithms over
//! [`TextNode`](textform_tree::TextNode): the pattern-rewrite engine, which
//! replaces matched text spans one rule at a time, and the budget-truncation
//! engine, which cuts a tree down to a character budget.
//!
//! # Primary responsibilities
//! - **Matcher**: the span-splitting contract, with regex and literal
//!   implementations.
//! - **PatternRule**: matcher, replacer, wrap tag, and the exclusive vs.
//!   composable switch.
//! - **rewrite / rewrite_all**: one pass, or a fold over an ordered rule list.
//! - **truncate**: budget accounting with a continuation marker.
//!
//! # How it fits in the system
//! Both engines are pure functions over immutable input and keep no state.
//! The orchestrator (`textform`) validates configuration, folds the rules,
//! and runs truncation when a budget is set.
//!
//! # Example
//! ```
//! use textform_engine::{PatternRule, rewrite_all, truncate};
//! use textform_tree::TextNode;
//!
//! let rules = [PatternRule::literal("cat")
//!     .unwrap()
//!     .replace_with(|_| TextNode::leaf("dog"))];
//! let tree = rewrite_all(TextNode::leaf("the cat sat"), &rules).unwrap();
//! assert_eq!(tree.plain_text(), "the dog sat");
//!
//! let cut = truncate(&tree, 9);
//! assert_eq!(cut.node.plain_text(), "the dog...");
//! assert!(cut.exhausted());
//! ```

pub mod error;
pub mod matcher;
pub mod rewrite;
pub mod rule;
pub mod truncate;

pub use error::{BoxError, PatternError, Result, RewriteError};
pub use matcher::{LiteralMatcher, Matcher, RegexMatcher, Span, spans_from_ranges};
pub use rewrite::{rewrite, rewrite_all};
pub use rule::PatternRule;
pub use truncate::{DEFAULT_MARKER, Truncated, truncate, truncate_with_marker};
