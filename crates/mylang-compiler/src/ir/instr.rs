//! IR Instructions
//!
//! Three-address instructions over `i32`, rendered in the textual LLVM
//! dialect the downstream backend reads.

use super::value::{Label, Slot, TempId, Value};
use std::fmt;

/// Arithmetic operator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    SDiv,
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BinaryOp::Add => write!(f, "add"),
            BinaryOp::Sub => write!(f, "sub"),
            BinaryOp::Mul => write!(f, "mul"),
            BinaryOp::SDiv => write!(f, "sdiv"),
        }
    }
}

/// Comparison against zero
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    Ne,
    Eq,
    Sgt,
}

impl fmt::Display for CompareOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompareOp::Ne => write!(f, "ne"),
            CompareOp::Eq => write!(f, "eq"),
            CompareOp::Sgt => write!(f, "sgt"),
        }
    }
}

/// IR instruction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Instr {
    /// slot = alloca i32
    Alloca { slot: Slot },

    /// store value into slot
    Store { value: Value, slot: Slot },

    /// dest = load slot
    Load { dest: TempId, slot: Slot },

    /// dest = left op right
    Binary {
        dest: TempId,
        op: BinaryOp,
        left: Value,
        right: Value,
    },

    /// dest = icmp op value, 0
    CompareZero {
        dest: TempId,
        op: CompareOp,
        value: Value,
    },

    /// Two-way branch on an `i1` temporary
    Branch {
        cond: TempId,
        then_label: Label,
        else_label: Label,
    },

    /// Unconditional branch
    Jump { target: Label },

    /// Start of a basic block
    Label(Label),

    /// printf("%d\n", value)
    Print { value: Value },
}

impl Instr {
    /// Whether this instruction ends a basic block.
    pub fn is_terminator(&self) -> bool {
        matches!(self, Instr::Branch { .. } | Instr::Jump { .. })
    }
}

impl fmt::Display for Instr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Instr::Alloca { slot } => write!(f, "\t{} = alloca i32", slot),
            Instr::Store { value, slot } => write!(f, "\tstore i32 {}, i32* {}", value, slot),
            Instr::Load { dest, slot } => write!(f, "\t{} = load i32* {}", dest, slot),
            Instr::Binary {
                dest,
                op,
                left,
                right,
            } => write!(f, "\t{} = {} i32 {}, {}", dest, op, left, right),
            Instr::CompareZero { dest, op, value } => {
                write!(f, "\t{} = icmp {} i32 {}, 0", dest, op, value)
            }
            Instr::Branch {
                cond,
                then_label,
                else_label,
            } => write!(
                f,
                "\tbr i1 {}, label %{}, label %{}",
                cond, then_label, else_label
            ),
            Instr::Jump { target } => write!(f, "\tbr label %{}", target),
            Instr::Label(label) => write!(f, "{}:", label),
            Instr::Print { value } => write!(
                f,
                "\tcall i32 (i8*, ...)* @printf(i8* getelementptr ([4 x i8]* @print.str, i32 0, i32 0), i32 {} )",
                value
            ),
        }
    }
}
