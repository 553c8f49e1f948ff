//! End-to-end transform scenarios.
//!
//! Each test builds a tree the way a caller would (plain text interleaved
//! with caller wrappers), runs the full pipeline, and checks the segments a
//! renderer receives.
//!
//! Run:
//!   cargo test -p textform --test scenarios

use pretty_assertions::assert_eq;
use textform::prelude::*;
use textform::{TransformError, Wrapper};

// ── Helpers ─────────────────────────────────────────────────────────────

fn leaf(text: &str) -> TextNode {
    TextNode::leaf(text)
}

fn fragment(children: TextNode) -> TextNode {
    TextNode::wrap(Tag::fragment(), children)
}

fn seq<const N: usize>(items: [TextNode; N]) -> TextNode {
    TextNode::sequence(items)
}

/// Exclusive rule replacing `pattern` with a fixed text.
fn replace(pattern: &str, with: &'static str) -> PatternRule {
    PatternRule::regex(pattern)
        .unwrap()
        .replace_with(move |_| TextNode::leaf(with))
}

fn segments(transformer: &TextTransformer, input: TextNode, more: Option<&str>) -> Vec<String> {
    let view = transformer.present(input).unwrap();
    let mut renderer = SegmentRenderer::new();
    if let Some(label) = more {
        renderer = renderer.with_more_label(label);
    }
    view.render(&mut renderer)
}

fn wrapper_keys(node: &TextNode, out: &mut Vec<String>) {
    match node {
        TextNode::Empty | TextNode::Leaf(_) => {}
        TextNode::Wrapper(wrapper) => {
            out.extend(wrapper.key());
            wrapper_keys(&wrapper.children, out);
        }
        TextNode::Sequence(items) => items.iter().for_each(|item| wrapper_keys(item, out)),
    }
}

// ═════════════════════════════════════════════════════════════════════════
// A. Two exclusive rules over a nested tree
// ═════════════════════════════════════════════════════════════════════════

#[test]
fn exclusive_rules_cascade_through_nested_wrappers() {
    let transformer = TextTransformer::builder()
        .rule(replace("toBeReplaced_1", "wasReplaced_1"))
        .rule(replace("toBeReplaced_2", "wasReplaced_2"))
        .build()
        .unwrap();
    let input = seq([
        leaf("toBeReplaced_1 untouched1"),
        fragment(seq([
            leaf("untouched2"),
            fragment(leaf("toBeReplaced_2")),
            fragment(leaf("toBeReplaced_1")),
            leaf("untouched3"),
        ])),
    ]);

    assert_eq!(
        segments(&transformer, input, None),
        [
            "wasReplaced_1",
            " untouched1",
            "untouched2",
            "wasReplaced_2",
            "wasReplaced_1",
            "untouched3",
        ]
    );
}

#[test]
fn exclusive_output_is_not_rewritten_again() {
    let transformer = TextTransformer::builder()
        .rule(replace("toBeReplaced_1", "NOT toBeReplaced_2").wrap("span"))
        .rule(replace("toBeReplaced_2", "wasReplaced_2").wrap("span"))
        .build()
        .unwrap();
    let input = leaf("toBeReplaced_1 untouchedText toBeReplaced_2");

    assert_eq!(
        segments(&transformer, input, None),
        ["NOT toBeReplaced_2", " untouchedText ", "wasReplaced_2"]
    );
}

// ═════════════════════════════════════════════════════════════════════════
// B. Composable rule output feeds a later exclusive rule
// ═════════════════════════════════════════════════════════════════════════

#[test]
fn composable_output_is_rewritten_by_later_rules() {
    let transformer = TextTransformer::builder()
        .rule(
            replace("toBeReplaced_1", "ALLOWED toBeReplaced_2")
                .allow_other_patterns(true)
                .wrap("span"),
        )
        .rule(replace("toBeReplaced_2", "wasReplaced_2").wrap("span"))
        .build()
        .unwrap();
    let input = leaf("toBeReplaced_1 untouchedText toBeReplaced_2");

    let view = transformer.present(input).unwrap();
    assert_eq!(
        view.render(&mut SegmentRenderer::new()),
        ["ALLOWED ", "wasReplaced_2", " untouchedText ", "wasReplaced_2"]
    );

    // The composable wrapper survives, unblocked, around the nested match.
    let TextNode::Sequence(items) = view.transformed().full() else {
        panic!("expected sequence");
    };
    let outer: &Wrapper = items[0].as_wrapper().unwrap();
    assert!(!outer.blocked);
    assert_eq!(outer.key().as_deref(), Some("processed_0_0"));
    assert_eq!(outer.original_match.as_deref(), Some("toBeReplaced_1"));
}

#[test]
fn raw_composable_output_merges_into_neighbouring_text() {
    let transformer = TextTransformer::builder()
        .rule(replace("toBeReplaced_1", "toBeRepl").allow_other_patterns(true))
        .rule(replace(r"\s*toBeReplaced_2", "aced_3").allow_other_patterns(true))
        .rule(replace("toBeReplaced_3", "wasReplaced_3").wrap("span"))
        .build()
        .unwrap();
    let input = leaf("toBeReplaced_1 toBeReplaced_2 untouched");

    assert_eq!(
        segments(&transformer, input, None),
        ["wasReplaced_3", " untouched"]
    );
}

#[test]
fn identity_keys_are_unique_across_passes() {
    let transformer = TextTransformer::builder()
        .rule(replace("toBeReplaced_1", "wasReplaced_1").wrap("span"))
        .rule(replace("toBeReplaced_2", "wasReplaced_2").wrap("span"))
        .build()
        .unwrap();
    let transformed = transformer
        .transform(leaf("toBeReplaced_1 toBeReplaced_2"))
        .unwrap();

    let mut keys = Vec::new();
    wrapper_keys(transformed.full(), &mut keys);
    assert_eq!(keys, ["processed_blocked_0_0", "processed_blocked_1_1"]);
    assert_eq!(
        transformed.full().leaves().collect::<Vec<_>>(),
        ["wasReplaced_1", " ", "wasReplaced_2"]
    );
}

// ═════════════════════════════════════════════════════════════════════════
// C. Budget cut inside a replacement
// ═════════════════════════════════════════════════════════════════════════

#[test]
fn budget_cuts_inside_replacement_and_offers_more() {
    let transformer = TextTransformer::builder()
        .rule(replace("toBeReplaced_1", "0123456789 invisible").wrap("span"))
        .budget(20)
        .build()
        .unwrap();
    let input = seq([
        leaf("012"),
        fragment(seq([leaf("3456789"), fragment(leaf("toBeReplaced_1"))])),
    ]);

    assert_eq!(
        segments(&transformer, input, Some("more")),
        ["012", "3456789", "0123456...", "more"]
    );
}

#[test]
fn expanding_a_cut_text_shows_everything() {
    let transformer = TextTransformer::builder()
        .rule(replace("toBeReplaced_1", "0123456789 invisible").wrap("span"))
        .budget(20)
        .build()
        .unwrap();
    let input = seq([
        leaf("012"),
        fragment(seq([leaf("3456789"), fragment(leaf("toBeReplaced_1"))])),
    ]);
    let mut view = transformer.present(input).unwrap();
    let mut renderer = SegmentRenderer::new()
        .with_more_label("more")
        .with_less_label("less");

    view.activate(Affordance::ShowMore);
    assert_eq!(
        view.render(&mut renderer),
        ["012", "3456789", "0123456789 invisible", "less"]
    );
    view.activate(Affordance::ShowLess);
    assert_eq!(
        view.render(&mut renderer),
        ["012", "3456789", "0123456...", "more"]
    );
}

// ═════════════════════════════════════════════════════════════════════════
// D. Empty nodes are suppressed
// ═════════════════════════════════════════════════════════════════════════

#[test]
fn empty_nodes_are_suppressed_under_budget() {
    let transformer = TextTransformer::builder()
        .rule(replace("toBeReplaced", "3456789").wrap("span"))
        .budget(13)
        .build()
        .unwrap();
    let input = seq([
        leaf("012"),
        fragment(TextNode::Empty),
        TextNode::Empty,
        fragment(seq([TextNode::Empty, TextNode::Empty, leaf("toBeReplaced")])),
        leaf("not visible"),
    ]);

    let view = transformer.present(input).unwrap();
    assert!(view.budget_exceeded());
    assert_eq!(
        view.render(&mut SegmentRenderer::new()),
        ["012", "3456789", "..."]
    );
    assert!(
        view.frame()
            .tree
            .leaves()
            .all(|text| !text.contains("not visible"))
    );
}

// ═════════════════════════════════════════════════════════════════════════
// Failure paths
// ═════════════════════════════════════════════════════════════════════════

#[test]
fn failing_replacer_aborts_whole_transform() {
    let transformer = TextTransformer::builder()
        .rule(replace("a", "A"))
        .rule(
            PatternRule::literal("b")
                .unwrap()
                .named("lookup")
                .try_replace_with(|_| Err::<TextNode, _>("service unavailable")),
        )
        .build()
        .unwrap();

    let err = transformer
        .transform(seq([leaf("a"), fragment(leaf("b"))]))
        .unwrap_err();
    assert!(matches!(err, TransformError::Rewrite(_)));
    assert_eq!(
        err.to_string(),
        "rule `lookup` failed: service unavailable"
    );
}
