//! Intermediate Representation
//!
//! Typed instructions, the per-run module that collects them, and printing
//! of the final program text.

pub mod instr;
pub mod module;
pub mod pretty;
pub mod value;

pub use instr::{BinaryOp, CompareOp, Instr};
pub use module::IrModule;
pub use pretty::ErrorReport;
pub use value::{Label, LabelKind, Slot, TempId, Value};
