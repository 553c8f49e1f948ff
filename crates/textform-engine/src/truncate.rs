//! Budget-truncation engine.
//!
//! Walks a tree consuming a character budget. The first leaf that does not
//! fit is cut and suffixed with a continuation marker; every sibling after
//! it is dropped. Wrappers consume nothing and are rebuilt around their
//! truncated children. Blocking is a rewrite concern and is ignored here.
//!
//! Lengths are counted in `char`s so a cut never splits a code point.

use textform_tree::TextNode;
use tracing::debug;

/// Marker appended to the leaf where the budget ran out.
pub const DEFAULT_MARKER: &str = "...";

/// Output of a truncation walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Truncated {
    pub node: TextNode,
    /// Budget minus consumed length. Zero or negative once a cut happened.
    pub remaining: isize,
}

impl Truncated {
    /// True when the budget ran out somewhere in the tree.
    #[must_use]
    pub const fn exhausted(&self) -> bool {
        self.remaining <= 0
    }
}

/// Truncate `node` to `budget` chars using [`DEFAULT_MARKER`].
#[must_use]
pub fn truncate(node: &TextNode, budget: isize) -> Truncated {
    truncate_with_marker(node, budget, DEFAULT_MARKER)
}

/// Truncate `node` to `budget` chars, appending `marker` at the cut.
#[must_use]
pub fn truncate_with_marker(node: &TextNode, budget: isize, marker: &str) -> Truncated {
    let marker = Marker {
        text: marker,
        len: signed(marker.chars().count()),
    };
    walk(node, budget, &marker)
}

struct Marker<'m> {
    text: &'m str,
    len: isize,
}

fn walk(node: &TextNode, budget: isize, marker: &Marker<'_>) -> Truncated {
    match node {
        TextNode::Empty => Truncated {
            node: TextNode::Empty,
            remaining: budget,
        },
        TextNode::Leaf(text) => truncate_leaf(text, budget, marker),
        TextNode::Wrapper(wrapper) => {
            let inner = walk(&wrapper.children, budget, marker);
            Truncated {
                node: wrapper.cloned_with_children(inner.node).into(),
                remaining: inner.remaining,
            }
        }
        TextNode::Sequence(items) => {
            let mut out = Vec::with_capacity(items.len());
            let mut remaining = budget;
            for item in items {
                if remaining <= 0 {
                    break;
                }
                let child = walk(item, remaining, marker);
                remaining = child.remaining;
                if !child.node.is_empty() {
                    out.push(child.node);
                }
            }
            Truncated {
                node: TextNode::Sequence(out),
                remaining,
            }
        }
    }
}

fn truncate_leaf(text: &str, budget: isize, marker: &Marker<'_>) -> Truncated {
    let remaining = budget.saturating_sub(signed(text.chars().count()));
    if remaining > 0 {
        return Truncated {
            node: TextNode::leaf(text),
            remaining,
        };
    }

    let keep = usize::try_from(budget.saturating_sub(marker.len)).unwrap_or(0);
    let cut = text
        .char_indices()
        .nth(keep)
        .map_or(text.len(), |(index, _)| index);
    let mut out = String::with_capacity(cut + marker.text.len());
    out.push_str(&text[..cut]);
    out.push_str(marker.text);
    debug!(budget, kept = keep, remaining, "leaf cut at budget");
    Truncated {
        node: TextNode::Leaf(out),
        remaining,
    }
}

fn signed(len: usize) -> isize {
    isize::try_from(len).unwrap_or(isize::MAX)
}
