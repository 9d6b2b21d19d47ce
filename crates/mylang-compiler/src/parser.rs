//! Statement parsing for myLang.
//!
//! Every line is one statement. `if`/`while` headers open a block whose
//! body lines are pulled from the same [`LineSource`] until a lone `}` line;
//! blocks cannot nest.

use crate::choose::extract_choose;
use crate::codegen::CodeGenerator;
use crate::context::CompilerContext;
use crate::error::{syntax_error, CompileResult};
use crate::ir::{Instr, IrModule, Label, LabelKind};
use crate::lexer::Lexer;
use crate::postfix::to_postfix;
use crate::source::LineSource;
use crate::token::{display_tokens, Token};
use log::{debug, trace};

/// What a parsed line turned out to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatementKind {
    Assignment,
    If,
    While,
    Print,
    Empty,
    BlockClose,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BlockKind {
    If,
    While,
}

impl BlockKind {
    fn labels(self, index: u32) -> (Label, Label, Label) {
        let (cond, body, end) = match self {
            BlockKind::If => (LabelKind::IfCond, LabelKind::IfBody, LabelKind::IfEnd),
            BlockKind::While => (
                LabelKind::WhileCond,
                LabelKind::WhileBody,
                LabelKind::WhileEnd,
            ),
        };
        (
            Label::new(cond, index),
            Label::new(body, index),
            Label::new(end, index),
        )
    }
}

/// Parses statements line by line, emitting code as it goes.
pub struct StatementParser<'a, S: LineSource + ?Sized> {
    source: &'a mut S,
    ctx: &'a mut CompilerContext,
    module: &'a mut IrModule,
    lines_read: usize,
}

impl<'a, S: LineSource + ?Sized> StatementParser<'a, S> {
    pub fn new(source: &'a mut S, ctx: &'a mut CompilerContext, module: &'a mut IrModule) -> Self {
        Self {
            source,
            ctx,
            module,
            lines_read: 0,
        }
    }

    /// Pull the next line, making it the current line of the context.
    pub fn next_line(&mut self) -> Option<String> {
        let line = self.source.next_line()?;
        self.ctx.line = self.lines_read;
        self.lines_read += 1;
        Some(line)
    }

    /// Lex, collapse `choose` calls and parse one line.
    pub fn parse_line(&mut self, line: &str) -> CompileResult<StatementKind> {
        let tokens = Lexer::new(line).tokenize()?;
        let tokens = extract_choose(&tokens)?;
        trace!("line {}: {}", self.ctx.line, display_tokens(&tokens));
        self.parse_statement(&tokens)
    }

    /// Classify a line by its leading token and parse it.
    pub fn parse_statement(&mut self, tokens: &[Token]) -> CompileResult<StatementKind> {
        let kind = match tokens.first() {
            None => StatementKind::Empty,
            Some(Token::Variable(_)) => self.parse_assignment(tokens)?,
            Some(Token::If) => self.parse_block(tokens, BlockKind::If)?,
            Some(Token::While) => self.parse_block(tokens, BlockKind::While)?,
            Some(Token::Print) => self.parse_print(tokens)?,
            Some(Token::RightBrace) => {
                if !self.ctx.block_open || tokens.len() > 1 {
                    return syntax_error("unexpected '}'");
                }
                StatementKind::BlockClose
            }
            Some(_) => return syntax_error("unexpected start of statement"),
        };
        Ok(kind)
    }

    /// `<variable> = <expr>`
    fn parse_assignment(&mut self, tokens: &[Token]) -> CompileResult<StatementKind> {
        if tokens.len() < 3 || tokens[1] != Token::Equal {
            return syntax_error("expected '=' after variable");
        }
        let postfix = to_postfix(tokens, 0, 0, 1)?;
        self.codegen().emit_assignment(&postfix)?;
        Ok(StatementKind::Assignment)
    }

    /// `print ( <expr> )`
    fn parse_print(&mut self, tokens: &[Token]) -> CompileResult<StatementKind> {
        let n = tokens.len();
        if n < 4 || tokens[1] != Token::LeftParen || tokens[n - 1] != Token::RightParen {
            return syntax_error("malformed print statement");
        }
        let postfix = to_postfix(tokens, 2, 1, 0)?;
        self.codegen().emit_print(&postfix)?;
        Ok(StatementKind::Print)
    }

    /// `if ( <expr> ) {` or `while ( <expr> ) {`, then the body up to `}`.
    fn parse_block(&mut self, tokens: &[Token], kind: BlockKind) -> CompileResult<StatementKind> {
        let n = tokens.len();
        if n < 5
            || tokens[1] != Token::LeftParen
            || tokens[n - 2] != Token::RightParen
            || tokens[n - 1] != Token::LeftBrace
        {
            return syntax_error("malformed block header");
        }
        if self.ctx.block_open {
            return syntax_error("nested blocks are not allowed");
        }

        let index = match kind {
            BlockKind::If => self.ctx.next_if(),
            BlockKind::While => self.ctx.next_while(),
        };
        let (cond, body, end) = kind.labels(index);

        self.module.emit(Instr::Jump { target: cond });
        self.module.emit(Instr::Label(cond));
        let postfix = to_postfix(tokens, 2, 2, 0)?;
        self.codegen().emit_condition(&postfix, body, end)?;
        self.module.emit(Instr::Label(body));

        self.ctx.block_open = true;
        debug!("line {}: opened {:?} block #{}", self.ctx.line, kind, index);

        loop {
            let Some(line) = self.next_line() else {
                return syntax_error("input ended inside a block");
            };
            if self.parse_line(&line)? == StatementKind::BlockClose {
                break;
            }
        }

        self.ctx.block_open = false;
        debug!("line {}: closed {:?} block #{}", self.ctx.line, kind, index);

        let back_edge = match kind {
            BlockKind::If => end,
            BlockKind::While => cond,
        };
        self.module.emit(Instr::Jump { target: back_edge });
        self.module.emit(Instr::Label(end));

        Ok(match kind {
            BlockKind::If => StatementKind::If,
            BlockKind::While => StatementKind::While,
        })
    }

    fn codegen(&mut self) -> CodeGenerator<'_> {
        CodeGenerator::new(self.ctx, self.module)
    }
}
