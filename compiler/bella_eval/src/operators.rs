//! Binary operator implementations for the evaluator.
//!
//! Both operands are always evaluated before dispatch, including for `&&`
//! and `||`. The operator set is fixed, so dispatch is a plain match.

use bella_ir::BinaryOp;

use crate::errors::{arithmetic_on_non_number, ordering_on_non_number};
use crate::{EvalResult, Value};

#[inline]
fn arithmetic(op: BinaryOp, left: &Value, right: &Value, f: fn(f64, f64) -> f64) -> EvalResult {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => Ok(Value::Number(f(*a, *b))),
        _ => Err(arithmetic_on_non_number(
            op,
            left.type_name(),
            right.type_name(),
        )),
    }
}

#[inline]
fn ordering(op: BinaryOp, left: &Value, right: &Value, f: fn(f64, f64) -> bool) -> EvalResult {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => Ok(Value::Bool(f(*a, *b))),
        _ => Err(ordering_on_non_number(
            op,
            left.type_name(),
            right.type_name(),
        )),
    }
}

/// Evaluate a binary operation on two already-evaluated operands.
///
/// - Arithmetic (`+ - * / % **`) and ordering (`< <= >= >`) require two
///   numbers and follow IEEE-754 double semantics; `%` is the truncating
///   remainder and `**` is `powf`.
/// - `==` / `!=` accept any pair and use structural equality.
/// - `&&` / `||` accept any pair and return one of their operands.
pub fn evaluate_binary(left: Value, right: Value, op: BinaryOp) -> EvalResult {
    match op {
        BinaryOp::Add => arithmetic(op, &left, &right, |a, b| a + b),
        BinaryOp::Sub => arithmetic(op, &left, &right, |a, b| a - b),
        BinaryOp::Mul => arithmetic(op, &left, &right, |a, b| a * b),
        BinaryOp::Div => arithmetic(op, &left, &right, |a, b| a / b),
        BinaryOp::Mod => arithmetic(op, &left, &right, |a, b| a % b),
        BinaryOp::Pow => arithmetic(op, &left, &right, f64::powf),

        BinaryOp::Lt => ordering(op, &left, &right, |a, b| a < b),
        BinaryOp::LtEq => ordering(op, &left, &right, |a, b| a <= b),
        BinaryOp::GtEq => ordering(op, &left, &right, |a, b| a >= b),
        BinaryOp::Gt => ordering(op, &left, &right, |a, b| a > b),

        BinaryOp::Eq => Ok(Value::Bool(left == right)),
        BinaryOp::NotEq => Ok(Value::Bool(left != right)),

        BinaryOp::And => Ok(if left.truthy() { right } else { left }),
        BinaryOp::Or => Ok(if left.truthy() { left } else { right }),
    }
}
