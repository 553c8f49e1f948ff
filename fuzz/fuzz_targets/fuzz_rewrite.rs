#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use textform_engine::{PatternRule, rewrite_all};
use textform_tree::{TextNode, merge_adjacent_leaves};

#[derive(Debug, Arbitrary)]
struct Input<'a> {
    needle: &'a str,
    texts: Vec<&'a str>,
    allow_other_patterns: bool,
    wrap: bool,
}

fuzz_target!(|input: Input<'_>| {
    // Cap sizes to keep fuzzing fast.
    if input.texts.len() > 32 || input.needle.len() > 16 {
        return;
    }
    let Ok(rule) = PatternRule::literal(input.needle) else {
        return;
    };
    let rule = rule.allow_other_patterns(input.allow_other_patterns);
    let rule = if input.wrap { rule.wrap("m") } else { rule };

    let tree = TextNode::sequence(input.texts.iter().map(|text| TextNode::leaf(*text)));
    let before = tree.plain_text();

    // Identity replacement never changes the visible text.
    let rewritten = rewrite_all(tree, [&rule]).expect("literal matcher partitions its input");
    assert_eq!(rewritten.plain_text(), before, "identity rewrite changed text");

    // Merging the leaves is idempotent.
    let leaves: Vec<TextNode> = input.texts.iter().map(|text| TextNode::leaf(*text)).collect();
    let once = merge_adjacent_leaves(leaves);
    let twice = merge_adjacent_leaves(once.clone());
    assert_eq!(once, twice, "merge not idempotent");
});
