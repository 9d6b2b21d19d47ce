//! Per-run compiler state.

use crate::ir::TempId;
use rustc_hash::FxHashSet;

/// Mutable state shared by every stage of one translation run.
///
/// All counters only ever grow, which is what keeps generated names and
/// labels unique within a run.
#[derive(Debug, Default)]
pub struct CompilerContext {
    temp_count: u32,
    if_count: u32,
    while_count: u32,
    choose_count: u32,
    /// Storage names of variables that already have an `alloca`
    declared: FxHashSet<String>,
    /// Set while an `if`/`while` body is being read
    pub block_open: bool,
    /// Zero-based index of the line being processed
    pub line: usize,
}

impl CompilerContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a fresh temporary.
    pub fn next_temp(&mut self) -> TempId {
        self.temp_count += 1;
        TempId(self.temp_count)
    }

    pub fn next_if(&mut self) -> u32 {
        self.if_count += 1;
        self.if_count
    }

    pub fn next_while(&mut self) -> u32 {
        self.while_count += 1;
        self.while_count
    }

    pub fn next_choose(&mut self) -> u32 {
        self.choose_count += 1;
        self.choose_count
    }

    /// Record `name` as declared; returns `false` if it already was.
    pub fn mark_declared(&mut self, name: &str) -> bool {
        if self.declared.contains(name) {
            return false;
        }
        self.declared.insert(name.to_string())
    }

    pub fn is_declared(&self, name: &str) -> bool {
        self.declared.contains(name)
    }
}
