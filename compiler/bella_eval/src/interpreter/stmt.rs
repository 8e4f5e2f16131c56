//! Statement execution.

use std::rc::Rc;

use bella_ir::{Block, Stmt};

use super::Interpreter;
use crate::environment::BindingError;
use crate::stack::ensure_sufficient_stack;
use crate::{EvalResult, Value};

impl Interpreter<'_> {
    /// Run each statement in order. A block opens no scope of its own.
    pub(crate) fn exec_block(&mut self, block: &Block) -> EvalResult<()> {
        for stmt in &block.statements {
            self.exec_stmt(stmt)?;
        }
        Ok(())
    }

    pub(crate) fn exec_stmt(&mut self, stmt: &Stmt) -> EvalResult<()> {
        ensure_sufficient_stack(|| self.exec_stmt_inner(stmt))
    }

    fn exec_stmt_inner(&mut self, stmt: &Stmt) -> EvalResult<()> {
        match stmt {
            Stmt::Block(block) => self.exec_block(block),
            Stmt::VariableDeclaration { name, initializer } => {
                // The name is checked before the initializer runs.
                if self.env.is_bound(*name) {
                    return Err(self.binding_error(BindingError::Duplicate, *name));
                }
                let value = self.eval_expr(initializer)?;
                self.env
                    .declare(*name, value)
                    .map_err(|error| self.binding_error(error, *name))
            }
            Stmt::Assignment { target, source } => {
                if !self.env.is_bound(*target) {
                    return Err(self.binding_error(BindingError::Unbound, *target));
                }
                let value = self.eval_expr(source)?;
                self.env
                    .assign(*target, value)
                    .map_err(|error| self.binding_error(error, *target))
            }
            Stmt::Print(expression) => {
                let value = self.eval_expr(expression)?;
                tracing::trace!(%value, "print");
                self.print_handler.print_value(&value);
                self.output.push(value);
                Ok(())
            }
            Stmt::While { condition, body } => {
                let mut iterations: u64 = 0;
                while self.eval_expr(condition)?.truthy() {
                    self.exec_block(body)?;
                    iterations += 1;
                }
                tracing::debug!(iterations, "while loop finished");
                Ok(())
            }
            Stmt::FunctionDeclaration(decl) => self
                .env
                .declare(decl.name, Value::function(Rc::clone(decl)))
                .map_err(|error| self.binding_error(error, decl.name)),
        }
    }
}
