//! Operator precedence table for expression compilation.

use crate::token::Token;

/// Operator precedence level (higher = tighter binding).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    None = 0,
    Assignment = 1,     // =
    Additive = 2,       // +, -
    Multiplicative = 3, // *, /
}

/// Get the precedence of a binary operator token.
pub fn get_precedence(token: &Token) -> Precedence {
    match token {
        Token::Equal => Precedence::Assignment,
        Token::Plus | Token::Minus => Precedence::Additive,
        Token::Star | Token::Slash => Precedence::Multiplicative,
        _ => Precedence::None,
    }
}

/// Check if an operator is right-associative.
///
/// At most one `=` is ever allowed in an expression, so this never changes
/// the conversion in practice.
pub fn is_right_associative(token: &Token) -> bool {
    matches!(token, Token::Equal)
}
