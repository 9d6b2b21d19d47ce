//! Tests for infix to postfix conversion.

use mylang_compiler::token::display_tokens;
use mylang_compiler::{extract_choose, to_postfix, Lexer, Token};

fn convert(source: &str, skip_front: usize, skip_back: usize, max_assignments: usize) -> String {
    let tokens = Lexer::new(source).tokenize().unwrap();
    let output = to_postfix(&tokens, skip_front, skip_back, max_assignments).unwrap();
    display_tokens(&output)
}

fn postfix(source: &str, max_assignments: usize) -> String {
    convert(source, 0, 0, max_assignments)
}

fn fails(source: &str, max_assignments: usize) -> bool {
    let tokens = Lexer::new(source).tokenize().unwrap();
    to_postfix(&tokens, 0, 0, max_assignments).is_err()
}

#[test]
fn test_precedence() {
    assert_eq!(postfix("3 + 4 * 2", 0), "3 4 2 * +");
    assert_eq!(postfix("3 * 4 + 2", 0), "3 4 * 2 +");
    assert_eq!(postfix("a / b - c * d", 0), "v_a v_b / v_c v_d * -");
}

#[test]
fn test_left_associativity() {
    assert_eq!(postfix("8 - 3 - 2", 0), "8 3 - 2 -");
    assert_eq!(postfix("8 / 4 * 2", 0), "8 4 / 2 *");
}

#[test]
fn test_parentheses() {
    assert_eq!(postfix("(3 + 4) * 2", 0), "3 4 + 2 *");
    assert_eq!(postfix("((x))", 0), "v_x");
    assert_eq!(postfix("2 * (a - (b + 1))", 0), "2 v_a v_b 1 + - *");
}

#[test]
fn test_assignment_is_lowest() {
    assert_eq!(postfix("x = 1 + 2 * y", 1), "v_x 1 2 v_y * + =");
}

#[test]
fn test_window_strips_statement_tokens() {
    assert_eq!(convert("print ( 3 + x )", 2, 1, 0), "3 v_x +");
    assert_eq!(convert("while ( (n) ) {", 2, 2, 0), "v_n");
}

#[test]
fn test_choose_is_an_operand() {
    let tokens = Lexer::new("choose(1, 2, 3, 4) * 2").tokenize().unwrap();
    let tokens = extract_choose(&tokens).unwrap();
    let output = to_postfix(&tokens, 0, 0, 0).unwrap();
    assert_eq!(output.len(), 3);
    assert!(matches!(output[0], Token::Choose(_)));
    assert_eq!(output[2], Token::Star);
}

#[test]
fn test_trailing_operator() {
    assert!(fails("3 +", 0));
    assert!(fails("x =", 1));
}

#[test]
fn test_adjacent_operands_or_operators() {
    assert!(fails("3 4", 0));
    assert!(fails("x y + 1", 0));
    assert!(fails("3 + * 4", 0));
    assert!(fails("3 - - 4", 0));
}

#[test]
fn test_unbalanced_parentheses() {
    assert!(fails("(3 + 4", 0));
    assert!(fails("3 + 4)", 0));
    assert!(fails(") 3 (", 0));
    assert!(fails("()", 0));
    assert!(fails("3 * ()", 0));
}

#[test]
fn test_assignment_budget() {
    assert!(fails("x = 1", 0));
    assert!(fails("x = y = 1", 1));
}

#[test]
fn test_foreign_tokens() {
    assert!(fails("3 , 4", 0));
    assert!(fails("{ 3 }", 0));
    assert!(fails("print", 0));
}

#[test]
fn test_empty_window() {
    let tokens = Lexer::new("print ( )").tokenize().unwrap();
    assert!(to_postfix(&tokens, 2, 1, 0).is_err());
    assert!(to_postfix(&[], 0, 0, 0).is_err());
}
