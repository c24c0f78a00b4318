//! Integration tests for the whole front-end.
//!
//! These tests run source text through tokenization, parsing and lowering
//! and check the rendered output.

use std::rc::Rc;

use ifwhile::{
    ast::ast::{Expr, ExprType},
    compiler::compiler::compile,
    errors::errors::Error,
    format_error_line,
    lexer::lexer::tokenize,
    parser::parser::parse,
    Config,
};

fn run(source: &str, config: Config) -> Vec<Result<String, Error>> {
    let tokens = tokenize(source.to_string(), Some("test.kal".to_string())).unwrap();
    let (_, items) = parse(tokens, Rc::new("test.kal".to_string()), config);

    items
        .into_iter()
        .map(|item| item.map(|expr| compile(&[expr], config).remove(0)))
        .collect()
}

fn lower(source: &str) -> String {
    let mut outputs = run(source, Config::default());
    assert_eq!(outputs.len(), 1, "expected a single top-level item");
    outputs.remove(0).unwrap()
}

fn failure(source: &str) -> String {
    let mut outputs = run(source, Config::default());
    assert_eq!(outputs.len(), 1, "expected a single top-level item");
    format_error_line(&outputs.remove(0).unwrap_err())
}

#[test]
fn test_number_round_trip() {
    assert_eq!(lower("42"), "42");
    assert_eq!(lower("3.5"), "3.5");
    assert_eq!(lower("0.25"), "0.25");
}

#[test]
fn test_paren_number() {
    assert_eq!(lower("( 3 )"), "3");
}

#[test]
fn test_if_else() {
    assert_eq!(lower("if x 1 else 2"), "if(x){1}else{2}");
}

#[test]
fn test_while_block() {
    assert_eq!(lower("while x { y }"), "while(x){y}");
    assert_eq!(lower("while x { y; }"), "while(x){y}");
}

#[test]
fn test_nested_control_flow() {
    assert_eq!(
        lower("while running { if done 0 else (step) }"),
        "while(running){if(done){0}else{step}}"
    );
    assert_eq!(
        lower("if a while b { c } else while d { e }"),
        "if(a){while(b){c}}else{while(d){e}}"
    );
}

#[test]
fn test_grammar_failures() {
    assert_eq!(failure("if x 1"), "Error: expected 'else'");
    assert_eq!(failure("while x y"), "Error: expected '{' at start of block");
    assert_eq!(failure("while x { y"), "Error: expected '}' at end of block");
    assert_eq!(failure(")"), "Error: unknown token when expecting an expression");
    assert_eq!(failure("(x"), "Error: expected ')'");
}

#[test]
fn test_grouped_branch_without_calls() {
    assert_eq!(lower("if a (b) else c"), "if(a){b}else{c}");
}

#[test]
fn test_calls() {
    let calls = Config {
        call_expressions: true,
        ..Config::default()
    };
    let outputs = run("foo(1, x)", calls);
    assert_eq!(outputs[0].as_ref().unwrap(), "");

    let stitched = Config {
        call_expressions: true,
        stitch_calls: true,
    };
    let outputs = run("while go(x) { put(x, 2) }", stitched);
    assert_eq!(outputs[0].as_ref().unwrap(), "while(go(x)){put(x,2)}");
}

#[test]
fn test_definitions_lower_to_nothing() {
    let outputs = run("def twice(x) if x 2 else 0\nextern print(v)\nx", Config::default());

    let rendered: Vec<&str> = outputs.iter().map(|o| o.as_ref().unwrap().as_str()).collect();
    assert_eq!(rendered, vec!["", "", "x"]);
}

#[test]
fn test_failed_construct_is_dropped() {
    let outputs = run("if a b c; while d { e }", Config::default());

    assert_eq!(outputs.len(), 2);
    assert_eq!(outputs[0].as_ref().unwrap_err().to_string(), "expected 'else'");
    // Everything up to the `;` was dropped, the loop still comes through
    assert_eq!(outputs[1].as_ref().unwrap(), "while(d){e}");
}

#[test]
fn test_failed_construct_reports_once() {
    let outputs = run("if a b c else d", Config::default());

    assert_eq!(outputs.len(), 1);
    assert_eq!(format_error_line(outputs[0].as_ref().unwrap_err()), "Error: expected 'else'");
}

#[test]
fn test_deterministic_output() {
    let source = "if a while b { 1.5 } else (c)";
    assert_eq!(run(source, Config::default()), run(source, Config::default()));
}

#[test]
fn test_top_level_kinds() {
    let tokens = tokenize("def f() 1 extern g() 2".to_string(), None).unwrap();
    let (_, items) = parse(tokens, Rc::new("shell".to_string()), Config::default());

    let kinds: Vec<ExprType> = items
        .iter()
        .map(|item| item.as_ref().map(Expr::get_expr_type).unwrap())
        .collect();
    assert_eq!(kinds, vec![ExprType::Function, ExprType::Prototype, ExprType::Number]);
}
