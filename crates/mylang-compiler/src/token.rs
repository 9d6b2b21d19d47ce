//! Token definitions for myLang.
//!
//! Tokens are plain values compared by variant and payload. Besides what the
//! lexer produces, two variants only ever appear after later stages rewrite a
//! line: `Temp` (a compiler temporary) and `Choose` (a collapsed
//! `choose(...)` call).

use std::fmt;

/// Prefix applied to every source variable so it can never collide with a
/// compiler-generated name.
pub const VARIABLE_PREFIX: &str = "v_";

/// Number of arguments a `choose` call takes.
pub const CHOOSE_ARITY: usize = 4;

/// A myLang token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    // Keywords
    If,
    While,
    ChooseKeyword,
    Print,

    // Operators
    Equal,
    Plus,
    Minus,
    Star,
    Slash,

    // Separators
    LeftParen,
    RightParen,
    LeftBrace,
    RightBrace,
    Comma,

    /// A memory-backed variable, carrying its storage name (`v_x`, `chcond3`, ...)
    Variable(String),
    /// A compiler temporary, carrying its counter (`%t<N>`)
    Temp(u32),
    /// An integer literal, carrying its decimal text
    Integer(String),
    /// A collapsed `choose(a, b, c, d)` call
    Choose(ChooseArgs),
}

/// The four argument token sequences of a `choose` call.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ChooseArgs {
    pub args: [Vec<Token>; CHOOSE_ARITY],
}

impl Token {
    /// Build a source-variable token from an identifier as written.
    pub fn source_variable(name: &str) -> Self {
        Token::Variable(format!("{VARIABLE_PREFIX}{name}"))
    }

    /// `=`, `+`, `-`, `*` or `/`.
    pub fn is_operator(&self) -> bool {
        matches!(
            self,
            Token::Equal | Token::Plus | Token::Minus | Token::Star | Token::Slash
        )
    }

    /// Integer literal, variable or collapsed `choose`.
    pub fn is_operand(&self) -> bool {
        matches!(
            self,
            Token::Integer(_) | Token::Variable(_) | Token::Choose(_)
        )
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::If => write!(f, "if"),
            Token::While => write!(f, "while"),
            Token::ChooseKeyword => write!(f, "choose"),
            Token::Print => write!(f, "print"),
            Token::Equal => write!(f, "="),
            Token::Plus => write!(f, "+"),
            Token::Minus => write!(f, "-"),
            Token::Star => write!(f, "*"),
            Token::Slash => write!(f, "/"),
            Token::LeftParen => write!(f, "("),
            Token::RightParen => write!(f, ")"),
            Token::LeftBrace => write!(f, "{{"),
            Token::RightBrace => write!(f, "}}"),
            Token::Comma => write!(f, ","),
            Token::Variable(name) => write!(f, "{name}"),
            Token::Temp(n) => write!(f, "t{n}"),
            Token::Integer(text) => write!(f, "{text}"),
            Token::Choose(choose) => {
                write!(f, "choose(")?;
                for (i, arg) in choose.args.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write_tokens(f, arg)?;
                }
                write!(f, ")")
            }
        }
    }
}

/// Space-separated rendering of a token sequence, used in trace logs.
pub fn display_tokens(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(|t| t.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

fn write_tokens(f: &mut fmt::Formatter<'_>, tokens: &[Token]) -> fmt::Result {
    write!(f, "{}", display_tokens(tokens))
}
