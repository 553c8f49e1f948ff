//! Tree node types.
//!
//! A [`TextNode`] is one of four shapes. Engines match on it exhaustively, so
//! adding a shape is a compile error everywhere it needs handling.

use std::borrow::Cow;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Opaque identifier of the component that renders a [`Wrapper`].
///
/// The tree never interprets a tag; it is carried through unchanged for the
/// renderer. [`Tag::fragment`] is the transparent default.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Tag(Cow<'static, str>);

impl Tag {
    const FRAGMENT: &'static str = "fragment";

    /// Create a tag from a component name.
    #[must_use]
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    /// The transparent tag: renders its children and nothing else.
    #[must_use]
    pub const fn fragment() -> Self {
        Self(Cow::Borrowed(Self::FRAGMENT))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_fragment(&self) -> bool {
        self.0 == Self::FRAGMENT
    }
}

impl Default for Tag {
    fn default() -> Self {
        Self::fragment()
    }
}

impl From<&'static str> for Tag {
    fn from(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }
}

impl From<String> for Tag {
    fn from(name: String) -> Self {
        Self(Cow::Owned(name))
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Render-identity key of a wrapper produced by a rewrite pass.
///
/// Generated once when the wrapper is created and never recomputed. Renders
/// as `processed_blocked_<pass>_<position>` for blocked wrappers and
/// `processed_<pass>_<position>` otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Identity {
    /// Index of the rule in the ordered rule list.
    pub pass: usize,
    /// Index of the span within the leaf's span list. Empty unmatched
    /// spans are never emitted, so a match at the start of a leaf is 0.
    pub position: usize,
    /// Whether the wrapper was created blocked.
    pub blocked: bool,
}

impl Identity {
    #[must_use]
    pub const fn new(pass: usize, position: usize, blocked: bool) -> Self {
        Self {
            pass,
            position,
            blocked,
        }
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("processed")?;
        if self.blocked {
            f.write_str("_blocked")?;
        }
        write!(f, "_{}_{}", self.pass, self.position)
    }
}

/// A single wrapped subtree.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Wrapper {
    /// Component that renders this wrapper.
    pub tag: Tag,
    /// Wrapped content.
    pub children: TextNode,
    /// Source text the wrapper replaced, when a rewrite pass created it.
    pub original_match: Option<String>,
    /// Later rewrite passes treat a blocked wrapper as opaque.
    pub blocked: bool,
    /// Identity key, when a rewrite pass created it.
    pub identity: Option<Identity>,
}

impl Wrapper {
    /// A caller-supplied wrapper: never blocked, no match metadata.
    #[must_use]
    pub fn new(tag: impl Into<Tag>, children: TextNode) -> Self {
        Self {
            tag: tag.into(),
            children,
            original_match: None,
            blocked: false,
            identity: None,
        }
    }

    /// A wrapper around the replacement of `original_match`.
    ///
    /// The blocked flag is taken from `identity` so the two cannot disagree.
    #[must_use]
    pub fn replaced(
        tag: Tag,
        children: TextNode,
        original_match: impl Into<String>,
        identity: Identity,
    ) -> Self {
        Self {
            tag,
            children,
            original_match: Some(original_match.into()),
            blocked: identity.blocked,
            identity: Some(identity),
        }
    }

    /// Rebuild this wrapper around new children, keeping tag and metadata.
    #[must_use]
    pub fn with_children(self, children: TextNode) -> Self {
        Self { children, ..self }
    }

    /// Rebuild a copy of this wrapper around new children.
    #[must_use]
    pub fn cloned_with_children(&self, children: TextNode) -> Self {
        Self {
            tag: self.tag.clone(),
            children,
            original_match: self.original_match.clone(),
            blocked: self.blocked,
            identity: self.identity,
        }
    }

    /// The identity key as a string, if this wrapper has one.
    #[must_use]
    pub fn key(&self) -> Option<String> {
        self.identity.map(|identity| identity.to_string())
    }
}

/// Immutable rich-text tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TextNode {
    /// Absent content. Dropped wherever sequences are rebuilt.
    #[default]
    Empty,
    /// A plain text run.
    Leaf(String),
    /// A wrapped subtree.
    Wrapper(Box<Wrapper>),
    /// Ordered siblings.
    Sequence(Vec<TextNode>),
}

impl TextNode {
    #[must_use]
    pub fn leaf(text: impl Into<String>) -> Self {
        Self::Leaf(text.into())
    }

    /// Wrap `children` in a caller-supplied (never blocked) wrapper.
    #[must_use]
    pub fn wrap(tag: impl Into<Tag>, children: TextNode) -> Self {
        Self::Wrapper(Box::new(Wrapper::new(tag, children)))
    }

    #[must_use]
    pub fn sequence(items: impl IntoIterator<Item = TextNode>) -> Self {
        Self::Sequence(items.into_iter().collect())
    }

    /// True only for [`TextNode::Empty`]; an empty leaf is still a leaf.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    #[must_use]
    pub const fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf(_))
    }

    #[must_use]
    pub const fn is_wrapper(&self) -> bool {
        matches!(self, Self::Wrapper(_))
    }

    #[must_use]
    pub const fn is_sequence(&self) -> bool {
        matches!(self, Self::Sequence(_))
    }

    /// True for a wrapper that later rewrite passes must not enter.
    #[must_use]
    pub fn is_blocked(&self) -> bool {
        matches!(self, Self::Wrapper(wrapper) if wrapper.blocked)
    }

    #[must_use]
    pub fn as_leaf(&self) -> Option<&str> {
        match self {
            Self::Leaf(text) => Some(text),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_wrapper(&self) -> Option<&Wrapper> {
        match self {
            Self::Wrapper(wrapper) => Some(wrapper),
            _ => None,
        }
    }

    /// Leaf texts in document order.
    #[must_use]
    pub fn leaves(&self) -> Leaves<'_> {
        Leaves { stack: vec![self] }
    }

    /// Total length of all leaf text, in `char`s.
    #[must_use]
    pub fn char_len(&self) -> usize {
        self.leaves().map(|text| text.chars().count()).sum()
    }

    /// Concatenation of all leaf text.
    #[must_use]
    pub fn plain_text(&self) -> String {
        self.leaves().collect()
    }
}

impl fmt::Display for TextNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for text in self.leaves() {
            f.write_str(text)?;
        }
        Ok(())
    }
}

impl From<&str> for TextNode {
    fn from(text: &str) -> Self {
        Self::Leaf(text.to_owned())
    }
}

impl From<String> for TextNode {
    fn from(text: String) -> Self {
        Self::Leaf(text)
    }
}

impl From<Wrapper> for TextNode {
    fn from(wrapper: Wrapper) -> Self {
        Self::Wrapper(Box::new(wrapper))
    }
}

impl FromIterator<TextNode> for TextNode {
    fn from_iter<I: IntoIterator<Item = TextNode>>(iter: I) -> Self {
        Self::sequence(iter)
    }
}

/// Depth-first iterator over leaf texts. See [`TextNode::leaves`].
#[derive(Debug, Clone)]
pub struct Leaves<'a> {
    stack: Vec<&'a TextNode>,
}

impl<'a> Iterator for Leaves<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.stack.pop() {
            match node {
                TextNode::Empty => {}
                TextNode::Leaf(text) => return Some(text),
                TextNode::Wrapper(wrapper) => self.stack.push(&wrapper.children),
                TextNode::Sequence(items) => self.stack.extend(items.iter().rev()),
            }
        }
        None
    }
}
