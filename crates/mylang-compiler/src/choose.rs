//! Collapsing of `choose(...)` calls into single composite tokens.
//!
//! After this pass a line contains no `choose` keyword: every call, nested
//! ones included, is a [`Token::Choose`] holding its four argument
//! sequences. Downstream stages can then treat a call as one operand.

use crate::error::{syntax_error, CompileResult};
use crate::token::{ChooseArgs, Token, CHOOSE_ARITY};
use std::slice::Iter;

/// Return a copy of `tokens` with every `choose(...)` call collapsed.
pub fn extract_choose(tokens: &[Token]) -> CompileResult<Vec<Token>> {
    let mut output = Vec::with_capacity(tokens.len());
    let mut iter = tokens.iter();

    while let Some(token) = iter.next() {
        if *token == Token::ChooseKeyword {
            output.push(collect_call(&mut iter)?);
        } else {
            output.push(token.clone());
        }
    }

    Ok(output)
}

/// Consume one call's `( a, b, c, d )` from `iter`; the keyword itself has
/// already been taken.
fn collect_call(iter: &mut Iter<'_, Token>) -> CompileResult<Token> {
    match iter.next() {
        Some(Token::LeftParen) => {}
        _ => return syntax_error("choose must be followed by '('"),
    }

    let mut call = ChooseArgs::default();
    let mut index = 0;
    let mut depth = 1usize;

    while let Some(token) = iter.next() {
        match token {
            Token::Comma if depth == 1 => {
                index += 1;
                if index >= CHOOSE_ARITY {
                    return syntax_error("choose takes exactly four arguments");
                }
            }
            Token::ChooseKeyword => {
                let nested = collect_call(iter)?;
                call.args[index].push(nested);
            }
            Token::LeftParen => {
                depth += 1;
                call.args[index].push(Token::LeftParen);
            }
            Token::RightParen => {
                depth -= 1;
                if depth == 0 {
                    break;
                }
                call.args[index].push(Token::RightParen);
            }
            other => call.args[index].push(other.clone()),
        }
    }

    if depth != 0 {
        return syntax_error("unterminated choose call");
    }
    if call.args.iter().any(Vec::is_empty) {
        return syntax_error("empty choose argument");
    }

    Ok(Token::Choose(call))
}
