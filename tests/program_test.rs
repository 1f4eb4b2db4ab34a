mod common;
use calc::lang::NumberFormat;
use calc::mach::{Engine, Program};
use common::*;

#[test]
fn test_program_tokens() {
    let e = engine("3 4.5 + π ×");
    let tokens: Vec<String> = e.program().into();
    assert_eq!(tokens, vec!["3", "4.5", "+", "π", "×"]);
}

#[test]
fn test_round_trip() {
    let mut e = engine("6 4 1 2 + − × 0.1 √ π ÷");
    let description = e.description();
    let result = e.evaluate();
    let program = e.program();
    e.set_program(&program);
    assert_eq!(e.program(), program);
    assert_eq!(e.description(), description);
    assert_eq!(e.evaluate(), result);
}

#[test]
fn test_round_trip_exact_operands() {
    let mut e = Engine::new();
    e.push_operand(1.0 / 3.0);
    e.push_operand(-1e-300);
    let program = e.program();
    e.clear();
    e.set_program(&program);
    assert_eq!(e.evaluate(), Some(-1e-300));
    e.perform_operation("×");
    assert_eq!(e.evaluate(), Some(1.0 / 3.0 * -1e-300));
}

#[test]
fn test_unknowns_skipped() {
    let mut e = Engine::new();
    e.set_program(vec!["1", "banana", "2", "", "-", "+"]);
    assert_eq!(e.program().tokens(), &["1", "2", "+"]);
    assert_eq!(e.evaluate(), Some(3.0));
}

#[test]
fn test_variables_do_not_survive() {
    let mut e = engine("x 1 +");
    let program = e.program();
    assert_eq!(program.tokens(), &["x", "1", "+"]);
    e.set_program(&program);
    assert_eq!(e.program().tokens(), &["1", "+"]);
}

#[test]
fn test_replaces_stack() {
    let mut e = engine("7 8 9");
    e.set_program(Program::new());
    assert!(e.is_empty());
    assert_eq!(e.description(), "");
}

#[test]
fn test_locale() {
    let mut e = Engine::with_format(NumberFormat::new(','));
    e.set_program(vec!["2,5", "1.5", "2", "×"]);
    assert_eq!(e.evaluate(), Some(5.0));
    assert_eq!(e.program().tokens(), &["2,5", "2", "×"]);
    assert_eq!(e.description(), "2.5 × 2");
}

#[test]
fn test_json() {
    let e = engine("10 2 ÷");
    let json = serde_json::to_string(&e.program()).unwrap();
    assert_eq!(json, r#"["10","2","÷"]"#);
    let mut other = Engine::new();
    let program: Program = serde_json::from_str(&json).unwrap();
    other.set_program(&program);
    assert_eq!(other.evaluate(), Some(5.0));
}
