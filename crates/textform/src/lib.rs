#![forbid(unsafe_code)]

//! textform public facade.
//!
//! Rewrites rich-text trees with an ordered list of pattern rules, then
//! optionally truncates the result to a character budget and tracks a
//! "show more / show less" toggle over it.
//!
//! # Role in textform
//! This crate is the orchestrator. It validates configuration, folds the
//! rewrite engine over the rules, runs the truncation engine when a budget
//! is set, and hands a [`Frame`] to a caller-owned [`Renderer`]. It
//! re-exports the tree and engine types so most users depend on this crate
//! alone.
//!
//! # Example
//! ```
//! use textform::prelude::*;
//!
//! let transformer = TextTransformer::builder()
//!     .rule(
//!         PatternRule::regex(r"#\w+")
//!             .unwrap()
//!             .named("hashtag")
//!             .wrap("tag"),
//!     )
//!     .budget(15)
//!     .build()
//!     .unwrap();
//!
//! let view = transformer
//!     .present(TextNode::leaf("ship it #rust #today"))
//!     .unwrap();
//! let mut renderer = SegmentRenderer::new().with_more_label("more");
//! assert_eq!(view.render(&mut renderer), ["ship it ", "#rust", " ", "...", "more"]);
//! ```

pub mod config;
pub mod error;
pub mod presentation;
pub mod render;
pub mod transformer;

pub use config::TransformConfig;
pub use error::{ConfigError, Result, TransformError};
pub use presentation::{Affordance, Disclosure, Frame, Presentation, Renderer};
pub use render::SegmentRenderer;
pub use transformer::{TextTransformer, Transformed, TransformerBuilder};

pub use textform_engine::{
    BoxError, DEFAULT_MARKER, LiteralMatcher, Matcher, PatternError, PatternRule, RegexMatcher,
    RewriteError, Span, Truncated,
};
pub use textform_tree::{Identity, Tag, TextNode, Wrapper};

/// Engine entry points for callers that drive passes themselves.
pub mod engine {
    pub use textform_engine::{
        rewrite, rewrite_all, spans_from_ranges, truncate, truncate_with_marker,
    };
    pub use textform_tree::{merge_adjacent_leaves, splice};
}

pub mod prelude {
    pub use crate::{
        Affordance, Frame, PatternRule, Presentation, Renderer, SegmentRenderer, Tag, TextNode,
        TextTransformer, TransformConfig,
    };
}
