//! Code generation from postfix expressions.
//!
//! Walks a postfix token sequence on an operand stack, appending instructions
//! to the body of the current [`IrModule`]. Memory variables are loaded into
//! a fresh temporary right before an operator consumes them; the target of
//! an assignment is the one operand that stays in memory.

use crate::context::CompilerContext;
use crate::error::{syntax_error, CompileResult};
use crate::ir::{BinaryOp, CompareOp, Instr, IrModule, Label, LabelKind, Slot, TempId, Value};
use crate::postfix::to_postfix;
use crate::token::{ChooseArgs, Token};
use log::trace;

const CHOOSE_RESULT_PREFIX: &str = "choosevar";
const CHOOSE_CONDITION_PREFIX: &str = "chcond";

/// An entry of the evaluation stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operand {
    /// Immediate integer
    Const(String),
    /// Already-loaded value
    Temp(TempId),
    /// Memory variable, by storage name
    Var(String),
}

/// Emits instructions for expressions, conditions and prints.
pub struct CodeGenerator<'a> {
    ctx: &'a mut CompilerContext,
    module: &'a mut IrModule,
}

impl<'a> CodeGenerator<'a> {
    pub fn new(ctx: &'a mut CompilerContext, module: &'a mut IrModule) -> Self {
        Self { ctx, module }
    }

    /// Evaluate `postfix`, returning its result, or `None` if it was an
    /// assignment.
    pub fn emit_expression(&mut self, postfix: &[Token]) -> CompileResult<Option<Operand>> {
        let mut operands: Vec<Operand> = Vec::new();
        let mut iter = postfix.iter();

        while let Some(token) = iter.next() {
            match token {
                Token::Integer(text) => operands.push(Operand::Const(text.clone())),
                Token::Temp(id) => operands.push(Operand::Temp(TempId(*id))),
                Token::Variable(name) => {
                    self.declare_variable(name);
                    operands.push(Operand::Var(name.clone()));
                }
                Token::Choose(call) => {
                    let result = self.emit_choose(call)?;
                    operands.push(result);
                }
                Token::Equal => {
                    let (left, right) = pop_pair(&mut operands)?;
                    let Operand::Var(target) = left else {
                        return syntax_error("assignment target is not a variable");
                    };
                    let value = self.load(right);
                    self.module.emit(Instr::Store {
                        value,
                        slot: Slot(target),
                    });
                    if iter.next().is_some() || !operands.is_empty() {
                        return syntax_error("assignment must be the whole expression");
                    }
                    return Ok(None);
                }
                other => {
                    let op = binary_op(other)?;
                    let (left, right) = pop_pair(&mut operands)?;
                    let left = self.load(left);
                    let right = self.load(right);
                    let dest = self.ctx.next_temp();
                    self.module.emit(Instr::Binary {
                        dest,
                        op,
                        left,
                        right,
                    });
                    operands.push(Operand::Temp(dest));
                }
            }
        }

        match operands.pop() {
            Some(result) if operands.is_empty() => Ok(Some(result)),
            _ => syntax_error("malformed expression"),
        }
    }

    /// Evaluate a postfix assignment.
    pub fn emit_assignment(&mut self, postfix: &[Token]) -> CompileResult<()> {
        match self.emit_expression(postfix)? {
            None => Ok(()),
            Some(_) => syntax_error("expected an assignment"),
        }
    }

    /// Evaluate a condition and branch to `body` when it is non-zero, to
    /// `end` otherwise.
    pub fn emit_condition(
        &mut self,
        postfix: &[Token],
        body: Label,
        end: Label,
    ) -> CompileResult<()> {
        let value = self.emit_value(postfix)?;
        let cond = self.ctx.next_temp();
        self.module.emit(Instr::CompareZero {
            dest: cond,
            op: CompareOp::Ne,
            value,
        });
        self.module.emit(Instr::Branch {
            cond,
            then_label: body,
            else_label: end,
        });
        Ok(())
    }

    /// Evaluate an expression and print it.
    pub fn emit_print(&mut self, postfix: &[Token]) -> CompileResult<()> {
        let value = self.emit_value(postfix)?;
        self.module.emit(Instr::Print { value });
        Ok(())
    }

    fn emit_value(&mut self, postfix: &[Token]) -> CompileResult<Value> {
        match self.emit_expression(postfix)? {
            Some(result) => Ok(self.load(result)),
            None => syntax_error("expected a value"),
        }
    }

    /// Lower `choose(a, b, c, d)` to a diamond writing into a hidden result
    /// variable, which is returned as the call's operand.
    fn emit_choose(&mut self, call: &ChooseArgs) -> CompileResult<Operand> {
        let index = self.ctx.next_choose();
        let result = format!("{CHOOSE_RESULT_PREFIX}{index}");
        let condition = format!("{CHOOSE_CONDITION_PREFIX}{index}");
        self.declare_variable(&result);
        self.declare_variable(&condition);
        trace!("choose #{index}: {}", Token::Choose(call.clone()));

        // Every argument becomes `holder = arg`; all four are checked before
        // anything is emitted.
        let mut programs = Vec::with_capacity(call.args.len());
        for (i, arg) in call.args.iter().enumerate() {
            let target = if i == 0 { &condition } else { &result };
            let mut tokens = Vec::with_capacity(arg.len() + 2);
            tokens.push(Token::Variable(target.clone()));
            tokens.push(Token::Equal);
            tokens.extend(arg.iter().cloned());
            programs.push(to_postfix(&tokens, 0, 0, 1)?);
        }

        let label = |kind| Label::new(kind, index);
        let end = label(LabelKind::ChooseEnd);

        self.emit_assignment(&programs[0])?;
        self.emit_condition_test(
            &condition,
            CompareOp::Eq,
            label(LabelKind::ChooseEqual),
            label(LabelKind::ChooseNotEqual),
        );

        self.module.emit(Instr::Label(label(LabelKind::ChooseEqual)));
        self.emit_assignment(&programs[1])?;
        self.module.emit(Instr::Jump { target: end });

        self.module.emit(Instr::Label(label(LabelKind::ChooseNotEqual)));
        self.emit_condition_test(
            &condition,
            CompareOp::Sgt,
            label(LabelKind::ChoosePositive),
            label(LabelKind::ChooseNegative),
        );

        self.module.emit(Instr::Label(label(LabelKind::ChoosePositive)));
        self.emit_assignment(&programs[2])?;
        self.module.emit(Instr::Jump { target: end });

        self.module.emit(Instr::Label(label(LabelKind::ChooseNegative)));
        self.emit_assignment(&programs[3])?;
        self.module.emit(Instr::Jump { target: end });

        self.module.emit(Instr::Label(end));
        Ok(Operand::Var(result))
    }

    /// Reload `variable`, compare it with zero and branch.
    fn emit_condition_test(
        &mut self,
        variable: &str,
        op: CompareOp,
        then_label: Label,
        else_label: Label,
    ) {
        let value = self.load(Operand::Var(variable.to_string()));
        let cond = self.ctx.next_temp();
        self.module.emit(Instr::CompareZero {
            dest: cond,
            op,
            value,
        });
        self.module.emit(Instr::Branch {
            cond,
            then_label,
            else_label,
        });
    }

    fn declare_variable(&mut self, name: &str) {
        if self.ctx.mark_declared(name) {
            self.module.declare(Slot(name.to_string()));
        }
    }

    /// Turn an operand into an instruction operand, loading memory variables.
    fn load(&mut self, operand: Operand) -> Value {
        match operand {
            Operand::Const(text) => Value::Const(text),
            Operand::Temp(id) => Value::Temp(id),
            Operand::Var(name) => {
                let dest = self.ctx.next_temp();
                self.module.emit(Instr::Load {
                    dest,
                    slot: Slot(name),
                });
                Value::Temp(dest)
            }
        }
    }
}

/// Pop the right then the left operand of a binary operator.
fn pop_pair(operands: &mut Vec<Operand>) -> CompileResult<(Operand, Operand)> {
    match (operands.pop(), operands.pop()) {
        (Some(right), Some(left)) => Ok((left, right)),
        _ => syntax_error("operator is missing an operand"),
    }
}

fn binary_op(token: &Token) -> CompileResult<BinaryOp> {
    match token {
        Token::Plus => Ok(BinaryOp::Add),
        Token::Minus => Ok(BinaryOp::Sub),
        Token::Star => Ok(BinaryOp::Mul),
        Token::Slash => Ok(BinaryOp::SDiv),
        _ => syntax_error("token not allowed in an expression"),
    }
}
