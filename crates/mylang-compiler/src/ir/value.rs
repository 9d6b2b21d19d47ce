//! IR Values and Labels
//!
//! Defines the operand and label types used in IR instructions.

use std::fmt;

/// Temporary register identifier (`%t<N>`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TempId(pub u32);

impl fmt::Display for TempId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "%t{}", self.0)
    }
}

/// An `i32` operand: either an immediate or a temporary
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// Integer literal, kept as written
    Const(String),
    /// Temporary register
    Temp(TempId),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Const(text) => write!(f, "{}", text),
            Value::Temp(id) => write!(f, "{}", id),
        }
    }
}

/// Stack slot of a memory variable (`%v_x`, `%chcond1`, ...)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Slot(pub String);

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "%{}", self.0)
    }
}

/// Family a basic-block label belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LabelKind {
    IfCond,
    IfBody,
    IfEnd,
    WhileCond,
    WhileBody,
    WhileEnd,
    ChooseEqual,
    ChooseNotEqual,
    ChoosePositive,
    ChooseNegative,
    ChooseEnd,
}

impl LabelKind {
    fn prefix(self) -> &'static str {
        match self {
            LabelKind::IfCond => "ifcond",
            LabelKind::IfBody => "ifbody",
            LabelKind::IfEnd => "ifend",
            LabelKind::WhileCond => "whcond",
            LabelKind::WhileBody => "whbody",
            LabelKind::WhileEnd => "whend",
            LabelKind::ChooseEqual => "cheq",
            LabelKind::ChooseNotEqual => "chne",
            LabelKind::ChoosePositive => "chsgt",
            LabelKind::ChooseNegative => "chslt",
            LabelKind::ChooseEnd => "chend",
        }
    }
}

/// A basic-block label, unique per (kind, index)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Label {
    pub kind: LabelKind,
    pub index: u32,
}

impl Label {
    pub fn new(kind: LabelKind, index: u32) -> Self {
        Self { kind, index }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.kind.prefix(), self.index)
    }
}
