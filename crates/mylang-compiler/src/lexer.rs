//! Lexer for myLang.
//!
//! Lexing is done one source line at a time with the logos library. There is
//! no position tracking: the only location the language ever reports is the
//! line index, which the driver owns.

use crate::error::{syntax_error, CompileResult};
use crate::token::Token;
use logos::Logos;

/// Logos-based token enum for lexing.
///
/// Converted to the public [`Token`] enum after lexing, which also has
/// variants the lexer never produces.
#[derive(Logos, Debug, Clone, PartialEq)]
enum LogosToken {
    // Whitespace (skip)
    #[regex(r"[ \t\r\n\x0B\x0C]+", logos::skip)]
    Whitespace,

    // Comments run to the end of the line (skip)
    #[regex(r"#[^\n]*", logos::skip)]
    LineComment,

    // Keywords (must come before identifiers)
    #[token("if")]
    If,

    #[token("while")]
    While,

    #[token("choose")]
    Choose,

    #[token("print")]
    Print,

    #[regex(r"[A-Za-z_][A-Za-z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),

    #[regex(r"[0-9]+", |lex| lex.slice().to_string())]
    Integer(String),

    // Operators
    #[token("=")]
    Equal,

    #[token("+")]
    Plus,

    #[token("-")]
    Minus,

    #[token("*")]
    Star,

    #[token("/")]
    Slash,

    // Separators
    #[token("(")]
    LeftParen,

    #[token(")")]
    RightParen,

    #[token("{")]
    LeftBrace,

    #[token("}")]
    RightBrace,

    #[token(",")]
    Comma,
}

/// Line lexer.
pub struct Lexer<'a> {
    line: &'a str,
}

impl<'a> Lexer<'a> {
    pub fn new(line: &'a str) -> Self {
        Self { line }
    }

    /// Tokenize the whole line, failing on the first unrecognised character.
    pub fn tokenize(self) -> CompileResult<Vec<Token>> {
        let mut tokens = Vec::new();
        let mut logos_lexer = LogosToken::lexer(self.line);

        while let Some(result) = logos_lexer.next() {
            match result {
                Ok(logos_token) => tokens.push(convert_token(logos_token)),
                Err(()) => return syntax_error("unexpected character"),
            }
        }

        Ok(tokens)
    }
}

fn convert_token(logos_token: LogosToken) -> Token {
    match logos_token {
        LogosToken::If => Token::If,
        LogosToken::While => Token::While,
        LogosToken::Choose => Token::ChooseKeyword,
        LogosToken::Print => Token::Print,
        LogosToken::Identifier(name) => Token::source_variable(&name),
        LogosToken::Integer(text) => Token::Integer(text),
        LogosToken::Equal => Token::Equal,
        LogosToken::Plus => Token::Plus,
        LogosToken::Minus => Token::Minus,
        LogosToken::Star => Token::Star,
        LogosToken::Slash => Token::Slash,
        LogosToken::LeftParen => Token::LeftParen,
        LogosToken::RightParen => Token::RightParen,
        LogosToken::LeftBrace => Token::LeftBrace,
        LogosToken::RightBrace => Token::RightBrace,
        LogosToken::Comma => Token::Comma,
        LogosToken::Whitespace | LogosToken::LineComment => {
            unreachable!("Whitespace and comments should be skipped")
        }
    }
}
