//! Pattern-rewrite engine.
//!
//! Applies one [`PatternRule`] across a whole tree. Leaves are split by the
//! rule's matcher and their matched spans replaced; wrappers and sequences
//! are rebuilt around rewritten children. Blocked wrappers are returned as
//! they are, so text an exclusive rule produced is never seen by a later
//! rule.
//!
//! Adjacent leaves are merged only within the span list of a single leaf.
//! Sibling leaves contributed by different branches stay separate.

use textform_tree::{Identity, TextNode, Wrapper, merge_adjacent_leaves, splice};
use tracing::{debug_span, trace};

use crate::error::{Result, RewriteError};
use crate::matcher::Span;
use crate::rule::PatternRule;

/// Apply `rule` as pass number `pass` over `node`.
///
/// A leaf with no match is returned as the same value, without
/// reallocating its text.
pub fn rewrite(node: TextNode, rule: &PatternRule, pass: usize) -> Result<TextNode> {
    match node {
        TextNode::Empty => Ok(TextNode::Empty),
        TextNode::Leaf(text) => rewrite_leaf(text, rule, pass),
        TextNode::Wrapper(wrapper) if wrapper.blocked => Ok(TextNode::Wrapper(wrapper)),
        TextNode::Wrapper(mut wrapper) => {
            let children = std::mem::take(&mut wrapper.children);
            wrapper.children = rewrite(children, rule, pass)?;
            Ok(TextNode::Wrapper(wrapper))
        }
        TextNode::Sequence(items) => {
            let mut out = Vec::with_capacity(items.len());
            for item in items {
                if item.is_blocked() {
                    out.push(item);
                    continue;
                }
                splice(&mut out, rewrite(item, rule, pass)?);
            }
            Ok(TextNode::Sequence(out))
        }
    }
}

/// Fold [`rewrite`] over `rules` in order, numbering passes from zero.
pub fn rewrite_all<'r>(
    node: TextNode,
    rules: impl IntoIterator<Item = &'r PatternRule>,
) -> Result<TextNode> {
    let mut node = node;
    for (pass, rule) in rules.into_iter().enumerate() {
        let _span = debug_span!("rewrite_pass", pass, rule = rule.name()).entered();
        node = rewrite(node, rule, pass)?;
    }
    Ok(node)
}

fn rewrite_leaf(text: String, rule: &PatternRule, pass: usize) -> Result<TextNode> {
    let spans = rule
        .matcher()
        .split(&text)
        .map_err(|source| RewriteError::Rule {
            rule: rule.name().to_owned(),
            source,
        })?;
    check_partition(&text, &spans, rule)?;

    let matches = spans.iter().filter(|span| span.is_match).count();
    if matches == 0 {
        drop(spans);
        return Ok(TextNode::Leaf(text));
    }
    trace!(pass, spans = spans.len(), matches, "leaf matched");

    let mut parts = Vec::with_capacity(spans.len());
    for (position, span) in spans.iter().enumerate() {
        if !span.is_match {
            push_part(&mut parts, TextNode::leaf(span.text));
            continue;
        }
        let replaced = rule
            .replace(span.text)
            .map_err(|source| RewriteError::Rule {
                rule: rule.name().to_owned(),
                source,
            })?;
        if rule.emits_raw() {
            push_part(&mut parts, replaced);
        } else {
            let tag = rule.wrap_tag().cloned().unwrap_or_default();
            let identity = Identity::new(pass, position, rule.is_blocking());
            parts.push(Wrapper::replaced(tag, replaced, span.text, identity).into());
        }
    }

    let mut merged = merge_adjacent_leaves(parts);
    Ok(match merged.len() {
        0 => TextNode::Empty,
        1 => merged.swap_remove(0),
        _ => TextNode::Sequence(merged),
    })
}

/// Append `node` to the span list, flattening sequences at any depth and
/// skipping content-free parts: the empty node and empty leaves.
fn push_part(parts: &mut Vec<TextNode>, node: TextNode) {
    match node {
        TextNode::Empty => {}
        TextNode::Leaf(text) if text.is_empty() => {}
        TextNode::Sequence(items) => {
            for item in items {
                push_part(parts, item);
            }
        }
        other => parts.push(other),
    }
}

fn check_partition(text: &str, spans: &[Span<'_>], rule: &PatternRule) -> Result<()> {
    let mut covered = 0;
    for span in spans {
        if !text[covered..].starts_with(span.text) {
            return Err(partition_error(rule, covered, text.len()));
        }
        covered += span.text.len();
    }
    if covered == text.len() {
        Ok(())
    } else {
        Err(partition_error(rule, covered, text.len()))
    }
}

fn partition_error(rule: &PatternRule, covered: usize, len: usize) -> RewriteError {
    RewriteError::Partition {
        rule: rule.name().to_owned(),
        covered,
        len,
    }
}
