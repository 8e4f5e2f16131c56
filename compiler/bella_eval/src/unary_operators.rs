//! Unary operator implementations for the evaluator.

use bella_ir::UnaryOp;

use crate::errors::negation_of_non_number;
use crate::{EvalResult, Value};

/// Evaluate a unary operation on an already-evaluated operand.
///
/// `-` requires a number; `!` negates the operand's truthiness and accepts
/// any value.
pub fn evaluate_unary(value: &Value, op: UnaryOp) -> EvalResult {
    match op {
        UnaryOp::Neg => match value {
            Value::Number(n) => Ok(Value::Number(-n)),
            _ => Err(negation_of_non_number(value.type_name())),
        },
        UnaryOp::Not => Ok(Value::Bool(!value.truthy())),
    }
}
