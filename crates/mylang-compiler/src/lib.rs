//! myLang Compiler - Script to LLVM IR Translation
//!
//! A single-pass, line-streaming translator. Each line goes through:
//! - `lexer`: the line's tokens
//! - `choose`: `choose(...)` calls collapsed into single operands
//! - `parser`: statement classification, with block bodies read inline
//! - `postfix` and `codegen`: expressions to three-address IR
//!
//! The `driver` ties these together and produces the final program text.

pub mod choose;
pub mod codegen;
pub mod context;
pub mod driver;
pub mod error;
pub mod ir;
pub mod lexer;
pub mod parser;
pub mod postfix;
pub mod precedence;
pub mod source;
pub mod token;

pub use choose::extract_choose;
pub use codegen::{CodeGenerator, Operand};
pub use context::CompilerContext;
pub use driver::{compile_source, translate, Translation};
pub use error::{CompileResult, SyntaxError};
pub use ir::IrModule;
pub use lexer::Lexer;
pub use parser::{StatementKind, StatementParser};
pub use postfix::to_postfix;
pub use source::{LineSource, ReaderLines, SourceLines};
pub use token::{ChooseArgs, Token};
