//! IR Module
//!
//! The three instruction sections a translation accumulates.

use super::instr::Instr;
use super::value::{Slot, Value};

/// Accumulated output of one translation run.
///
/// Declarations and initializations are collected apart from the body, so a
/// variable first seen deep inside a loop is still allocated up front.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IrModule {
    pub declarations: Vec<Instr>,
    pub initializations: Vec<Instr>,
    pub body: Vec<Instr>,
}

impl IrModule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate `slot` and zero it. Callers guarantee each slot is declared once.
    pub fn declare(&mut self, slot: Slot) {
        self.declarations.push(Instr::Alloca { slot: slot.clone() });
        self.initializations.push(Instr::Store {
            value: Value::Const("0".to_string()),
            slot,
        });
    }

    /// Append an instruction to the body.
    pub fn emit(&mut self, instr: Instr) {
        self.body.push(instr);
    }
}
