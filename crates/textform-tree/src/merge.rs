//! Adjacent-leaf merging and one-level sequence splicing.

use crate::node::TextNode;

/// Coalesce every run of consecutive leaves into a single leaf.
///
/// Non-leaf items, [`TextNode::Empty`] included, are merge barriers and keep
/// their relative position. Linear in the number of items.
///
/// ```
/// use textform_tree::{TextNode, merge_adjacent_leaves};
///
/// let merged = merge_adjacent_leaves([
///     TextNode::leaf("a"),
///     TextNode::wrap("em", TextNode::leaf("x")),
///     TextNode::leaf("b"),
///     TextNode::leaf("c"),
/// ]);
/// assert_eq!(merged.len(), 3);
/// assert_eq!(merged[2].as_leaf(), Some("bc"));
/// ```
#[must_use]
pub fn merge_adjacent_leaves(items: impl IntoIterator<Item = TextNode>) -> Vec<TextNode> {
    let items = items.into_iter();
    let mut merged: Vec<TextNode> = Vec::with_capacity(items.size_hint().0);
    for item in items {
        if let TextNode::Leaf(text) = &item
            && let Some(TextNode::Leaf(prev)) = merged.last_mut()
        {
            prev.push_str(text);
            continue;
        }
        merged.push(item);
    }
    merged
}

/// Append `node` to `out`, dropping [`TextNode::Empty`] and splicing the
/// items of a [`TextNode::Sequence`] one level deep.
pub fn splice(out: &mut Vec<TextNode>, node: TextNode) {
    match node {
        TextNode::Empty => {}
        TextNode::Sequence(items) => out.extend(items.into_iter().filter(|item| !item.is_empty())),
        other => out.push(other),
    }
}
