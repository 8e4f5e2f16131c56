//! Expression evaluation.

use bella_ir::Expr;

use super::Interpreter;
use crate::errors::{cannot_subscript, index_out_of_range, non_number_index};
use crate::operators::evaluate_binary;
use crate::stack::ensure_sufficient_stack;
use crate::unary_operators::evaluate_unary;
use crate::{EvalResult, Value};

impl Interpreter<'_> {
    /// Evaluate an expression against the current environment.
    pub(crate) fn eval_expr(&mut self, expr: &Expr) -> EvalResult {
        ensure_sufficient_stack(|| self.eval_expr_inner(expr))
    }

    fn eval_expr_inner(&mut self, expr: &Expr) -> EvalResult {
        match expr {
            Expr::Numeral(n) => Ok(Value::Number(*n)),
            Expr::Bool(b) => Ok(Value::Bool(*b)),
            Expr::Identifier(name) => self.lookup(*name),
            Expr::Binary { op, left, right } => {
                let left = self.eval_expr(left)?;
                let right = self.eval_expr(right)?;
                evaluate_binary(left, right, *op)
            }
            Expr::Unary { op, operand } => {
                let value = self.eval_expr(operand)?;
                evaluate_unary(&value, *op)
            }
            Expr::Conditional {
                test,
                consequent,
                alternate,
            } => {
                if self.eval_expr(test)?.truthy() {
                    self.eval_expr(consequent)
                } else {
                    self.eval_expr(alternate)
                }
            }
            Expr::Call { callee, args } => self.eval_call(*callee, args),
            Expr::Array(elements) => {
                let values = self.eval_args(elements)?;
                Ok(Value::array(values))
            }
            Expr::Subscript { array, index } => {
                let array = self.eval_expr(array)?;
                let index = self.eval_expr(index)?;
                subscript(&array, &index)
            }
        }
    }

    /// Evaluate expressions left to right, stopping at the first failure.
    pub(crate) fn eval_args(&mut self, args: &[Expr]) -> EvalResult<Vec<Value>> {
        args.iter().map(|arg| self.eval_expr(arg)).collect()
    }
}

/// `array[index]`.
///
/// The index is truncated toward zero. Nested arrays come back aliased, not
/// copied.
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "index is range-checked against the length before the cast"
)]
pub(crate) fn subscript(array: &Value, index: &Value) -> EvalResult {
    let Value::Array(elements) = array else {
        return Err(cannot_subscript(array.type_name()));
    };
    let Value::Number(raw) = index else {
        return Err(non_number_index(index.type_name()));
    };

    let len = elements.len();
    let position = raw.trunc();
    if !position.is_finite() || position < 0.0 || position >= len as f64 {
        return Err(index_out_of_range(*raw, len));
    }
    elements
        .get(position as usize)
        .ok_or_else(|| index_out_of_range(*raw, len))
}
