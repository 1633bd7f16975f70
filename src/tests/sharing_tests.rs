//! Structural sharing and ownership behavior.

use crate::{Direction, ExprRef};

#[test]
fn test_shared_child_is_stored_once() {
    let shared = ExprRef::literal("abcdefg");
    let left = ExprRef::concatenation([shared.clone(), ExprRef::symbol('x')]);
    let right = ExprRef::concatenation([ExprRef::symbol('y'), shared.clone()]);

    // Both parents hold the same node, not copies of it.
    assert_eq!(left.children()[0], right.children()[1]);
    assert_eq!(left.distinct_node_count(), 3);
    assert_eq!(right.distinct_node_count(), 3);

    // One handle here, one in each parent.
    assert_eq!(shared.handle_count(), 3);
}

#[test]
fn test_handle_count_tracks_parents() {
    let shared = ExprRef::symbol('s');
    assert_eq!(shared.handle_count(), 1);

    let parent = ExprRef::parenthesized(shared.clone());
    assert_eq!(shared.handle_count(), 2);

    drop(parent);
    assert_eq!(shared.handle_count(), 1);
}

#[test]
fn test_child_outlives_parent() {
    let shared = ExprRef::literal("xyz");
    let parent = ExprRef::concatenation([shared.clone(), shared.clone()]);
    drop(parent);
    // The child is still fully usable through the remaining handle.
    assert_eq!(shared.to_string(), "xyz");
    assert_eq!(shared.terms_count(), 3);
    assert_eq!(shared.handle_count(), 1);
}

#[test]
fn test_traversals_of_sharing_parents_are_independent() {
    let shared = ExprRef::literal("abc");
    let left = ExprRef::concatenation([shared.clone(), ExprRef::symbol('L')]);
    let right = ExprRef::concatenation([ExprRef::symbol('R'), shared.clone()]);

    let mut lc = left.begin(Direction::LeftToRight);
    let mut rc = right.begin(Direction::LeftToRight);

    // Interleaved stepping; neither cursor disturbs the other.
    assert_eq!(lc.current().as_symbol(), Some('a'));
    assert_eq!(rc.current().as_symbol(), Some('R'));
    lc.advance();
    rc.advance();
    assert_eq!(lc.current().as_symbol(), Some('b'));
    assert_eq!(rc.current().as_symbol(), Some('a'));
    lc.advance();
    lc.advance();
    assert_eq!(lc.current().as_symbol(), Some('L'));
    assert_eq!(rc.current().as_symbol(), Some('a'));
}

#[test]
fn test_sharing_scales_without_copying() {
    // Sixteen occurrences of one literal, one stored run.
    let a = ExprRef::literal("abcdefg");
    let row = ExprRef::concatenation(std::iter::repeat_n(a.clone(), 4));
    let grid = ExprRef::concatenation(std::iter::repeat_n(row.clone(), 4));

    assert_eq!(grid.terms_count(), 4 * 4 * 7);
    assert_eq!(grid.node_count(), 1 + 4 + 16);
    assert_eq!(grid.distinct_node_count(), 3);
}

#[test]
fn test_deep_concatenation_chain_drops_iteratively() {
    let mut expr = ExprRef::symbol('x');
    for _ in 0..100_000 {
        expr = ExprRef::concatenation([expr, ExprRef::symbol('y')]);
    }
    drop(expr);
}

#[test]
fn test_shared_subtree_survives_parent_drop_chain() {
    let shared = ExprRef::parenthesized(ExprRef::literal("keep"));
    let mut expr = shared.clone();
    for _ in 0..1_000 {
        expr = ExprRef::concatenation([expr, shared.clone()]);
    }
    drop(expr);
    assert_eq!(shared.handle_count(), 1);
    assert_eq!(shared.to_string(), "(keep)");
}
