//! Compilation errors
//!
//! The language has exactly one error kind. The `reason` is never part of the
//! emitted program; it only shows up in debug logs.

use thiserror::Error;

pub type CompileResult<T> = Result<T, SyntaxError>;

/// A syntax error detected by any stage of the pipeline.
///
/// The line number is not stored here: it is the ambient line index of the
/// compiler context at the moment the error reaches the driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("syntax error: {reason}")]
pub struct SyntaxError {
    pub reason: &'static str,
}

impl SyntaxError {
    pub fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

/// Shorthand for `Err(SyntaxError::new(reason))`.
pub fn syntax_error<T>(reason: &'static str) -> CompileResult<T> {
    Err(SyntaxError::new(reason))
}
