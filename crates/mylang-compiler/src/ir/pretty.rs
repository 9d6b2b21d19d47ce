//! Printing of complete programs
//!
//! Both the translated program and the error-report program share the same
//! module header and a single `main` function.

use super::instr::Instr;
use super::module::IrModule;
use std::fmt;

const MODULE_ID: &str = "; ModuleID = 'mylang2ir'";
const PRINTF_DECL: &str = "declare i32 @printf(i8*, ...)";
const PRINT_FORMAT: &str = r#"@print.str = constant [4 x i8] c"%d\0A\00""#;
const ERROR_FORMAT: &str = r#"@print.str = constant [23 x i8] c"Line %d: syntax error\0A\00""#;

fn write_header(f: &mut fmt::Formatter<'_>, format_string: &str) -> fmt::Result {
    writeln!(f, "{}", MODULE_ID)?;
    writeln!(f, "{}", PRINTF_DECL)?;
    writeln!(f, "{}", format_string)?;
    writeln!(f)?;
    writeln!(f, "define i32 @main() {{")
}

fn write_footer(f: &mut fmt::Formatter<'_>) -> fmt::Result {
    writeln!(f, "\tret i32 0")?;
    writeln!(f, "}}")
}

fn write_section(f: &mut fmt::Formatter<'_>, section: &[Instr]) -> fmt::Result {
    if section.is_empty() {
        return Ok(());
    }
    for instr in section {
        writeln!(f, "{}", instr)?;
    }
    writeln!(f)
}

impl fmt::Display for IrModule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_header(f, PRINT_FORMAT)?;
        write_section(f, &self.declarations)?;
        write_section(f, &self.initializations)?;

        for instr in &self.body {
            writeln!(f, "{}", instr)?;
            if instr.is_terminator() {
                writeln!(f)?;
            }
        }

        write_footer(f)
    }
}

/// The program printed in place of the translation when it fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorReport {
    /// Zero-based index of the line being processed at the failure
    pub line: usize,
}

impl fmt::Display for ErrorReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_header(f, ERROR_FORMAT)?;
        writeln!(
            f,
            "\tcall i32 (i8*, ...)* @printf(i8* getelementptr ([23 x i8]* @print.str, i32 0, i32 0), i32 {} )",
            self.line
        )?;
        write_footer(f)
    }
}
