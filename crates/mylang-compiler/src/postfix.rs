//! Infix to postfix conversion of expressions.
//!
//! A shunting-yard pass over a window of a line's tokens. Structural checks
//! that would otherwise need a grammar (adjacent operands, adjacent operators,
//! `()`, unbalanced parentheses, trailing operator) are done here while
//! scanning.

use crate::error::{syntax_error, CompileResult};
use crate::precedence::{get_precedence, is_right_associative};
use crate::token::Token;

/// Convert `tokens[skip_front .. len - skip_back]` to postfix order.
///
/// `max_assignments` bounds how many `=` tokens the window may contain: 0
/// for conditions and print arguments, 1 for assignment statements.
pub fn to_postfix(
    tokens: &[Token],
    skip_front: usize,
    skip_back: usize,
    max_assignments: usize,
) -> CompileResult<Vec<Token>> {
    let end = tokens.len().saturating_sub(skip_back);
    if skip_front >= end {
        return syntax_error("empty expression");
    }
    let window = &tokens[skip_front..end];

    let mut output = Vec::with_capacity(window.len());
    let mut stack: Vec<&Token> = Vec::new();
    let mut assignments = 0;

    for (i, token) in window.iter().enumerate() {
        match window.get(i + 1) {
            None if token.is_operator() => {
                return syntax_error("expression ends with an operator");
            }
            None => {}
            Some(ahead) => {
                if token.is_operator() && ahead.is_operator() {
                    return syntax_error("two consecutive operators");
                }
                if token.is_operand() && ahead.is_operand() {
                    return syntax_error("two consecutive operands");
                }
                if *token == Token::LeftParen && *ahead == Token::RightParen {
                    return syntax_error("empty parentheses");
                }
            }
        }

        match token {
            t if t.is_operand() => output.push(t.clone()),
            Token::LeftParen => stack.push(token),
            Token::RightParen => {
                if !stack.iter().any(|t| **t == Token::LeftParen) {
                    return syntax_error("unmatched ')'");
                }
                while let Some(top) = stack.pop() {
                    if *top == Token::LeftParen {
                        break;
                    }
                    output.push(top.clone());
                }
            }
            t if t.is_operator() => {
                if *t == Token::Equal {
                    assignments += 1;
                    if assignments > max_assignments {
                        return syntax_error("assignment not allowed here");
                    }
                }
                let prec = get_precedence(t);
                while let Some(top) = stack.last() {
                    let top_prec = get_precedence(top);
                    let pops = top_prec > prec || (top_prec == prec && !is_right_associative(t));
                    if !top.is_operator() || !pops {
                        break;
                    }
                    output.push((*top).clone());
                    stack.pop();
                }
                stack.push(t);
            }
            _ => return syntax_error("token not allowed in an expression"),
        }
    }

    while let Some(top) = stack.pop() {
        if *top == Token::LeftParen {
            return syntax_error("unmatched '('");
        }
        output.push(top.clone());
    }

    Ok(output)
}
