#![no_main]

use libfuzzer_sys::fuzz_target;
use textform::{DEFAULT_MARKER, TextNode};
use textform::engine::truncate;

fuzz_target!(|data: &[u8]| {
    // First byte is the budget, the rest is text split on '|' into leaves.
    let Some((&budget, rest)) = data.split_first() else {
        return;
    };
    let Ok(text) = std::str::from_utf8(rest) else {
        return;
    };
    if text.len() > 2048 {
        return;
    }
    // The orchestrator rejects a zero budget before any walk.
    if budget == 0 {
        return;
    }
    let budget = isize::from(budget);

    let tree = TextNode::sequence(text.split('|').map(|part| TextNode::wrap("p", TextNode::leaf(part))));
    let total = tree.char_len() as isize;
    let out = truncate(&tree, budget);

    assert_eq!(out.exhausted(), total >= budget, "exhaustion mismatch");
    if out.exhausted() {
        let shown = out.node.plain_text();
        assert!(shown.ends_with(DEFAULT_MARKER), "cut text lacks marker: {shown:?}");
        let kept = shown.chars().count() - DEFAULT_MARKER.chars().count();
        assert!(
            tree.plain_text().chars().take(kept).eq(shown.chars().take(kept)),
            "cut text is not a prefix"
        );
    } else {
        assert_eq!(out.node, tree, "unexhausted truncation changed the tree");
        assert_eq!(out.remaining, budget - total);
    }
});
