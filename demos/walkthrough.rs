//! Build a small, heavily shared expression tree and enumerate it both ways.
//!
//! Run with: `cargo run --example walkthrough`

use refal_terms::{Direction, ExprRef};

fn print_expression(label: &str, expr: &ExprRef) {
    let forward: String = expr
        .terms(Direction::LeftToRight)
        .map(|t| t.to_string())
        .collect();
    let backward: String = expr
        .terms(Direction::RightToLeft)
        .map(|t| t.to_string())
        .collect();

    println!("{label} = {expr}");
    println!("  left-to-right : {forward}");
    println!("  right-to-left : {backward}");
    println!(
        "  terms: {}, nodes: {}, distinct nodes: {}",
        expr.terms_count(),
        expr.node_count(),
        expr.distinct_node_count()
    );
}

fn main() {
    let a = ExprRef::literal("abcdefg");
    let b = ExprRef::symbol('w');
    let c = ExprRef::concatenation([
        a.clone(),
        b.clone(),
        a.clone(),
        b.clone(),
        a.clone(),
        b.clone(),
    ]);
    let d = ExprRef::concatenation([
        a.clone(),
        b.clone(),
        c.clone(),
        a.clone(),
        b.clone(),
        c.clone(),
    ]);
    let grouped = ExprRef::concatenation([
        ExprRef::parenthesized(c.clone()),
        b.clone(),
        ExprRef::parenthesized(a.clone()),
    ]);

    print_expression("a", &a);
    print_expression("b", &b);
    print_expression("c", &c);
    print_expression("d", &d);
    print_expression("grouped", &grouped);
}
