//! Translation driver
//!
//! Pulls lines until the source is exhausted or the first error, then hands
//! back either the finished module or the failing line.

use crate::context::CompilerContext;
use crate::error::CompileResult;
use crate::ir::{ErrorReport, IrModule};
use crate::parser::StatementParser;
use crate::source::{LineSource, SourceLines};
use log::debug;
use std::fmt;
use std::io::{self, Write};

/// Outcome of one translation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Translation {
    /// Every line parsed; the accumulated module
    Compiled(IrModule),
    /// The first syntax error, at the zero-based index of the line being
    /// processed when it was detected
    Failed { line: usize },
}

impl Translation {
    pub fn is_compiled(&self) -> bool {
        matches!(self, Translation::Compiled(_))
    }

    /// Render the final program text into `out`.
    pub fn write_to<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "{}", self)
    }
}

impl fmt::Display for Translation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Translation::Compiled(module) => write!(f, "{}", module),
            Translation::Failed { line } => write!(f, "{}", ErrorReport { line: *line }),
        }
    }
}

/// Translate everything `source` yields.
pub fn translate<S: LineSource + ?Sized>(source: &mut S) -> Translation {
    let mut ctx = CompilerContext::new();
    let mut module = IrModule::new();

    let result = {
        let mut parser = StatementParser::new(source, &mut ctx, &mut module);
        parse_all(&mut parser)
    };

    match result {
        Ok(()) => Translation::Compiled(module),
        Err(err) => {
            debug!("line {}: {}", ctx.line, err);
            Translation::Failed { line: ctx.line }
        }
    }
}

fn parse_all<S: LineSource + ?Sized>(parser: &mut StatementParser<'_, S>) -> CompileResult<()> {
    while let Some(line) = parser.next_line() {
        parser.parse_line(&line)?;
    }
    Ok(())
}

/// Translate a whole source text to the final program text.
pub fn compile_source(text: &str) -> String {
    translate(&mut SourceLines::new(text)).to_string()
}
