//! Tests for unary operator implementations.

use crate::unary_operators::evaluate_unary;
use crate::{EvalError, Value};
use bella_ir::UnaryOp;
use pretty_assertions::assert_eq;

#[test]
fn test_negation() {
    assert_eq!(
        evaluate_unary(&Value::Number(5.0), UnaryOp::Neg).unwrap(),
        Value::Number(-5.0)
    );
    assert_eq!(
        evaluate_unary(&Value::Number(-2.5), UnaryOp::Neg).unwrap(),
        Value::Number(2.5)
    );
}

#[test]
fn test_negation_of_non_number() {
    assert!(matches!(
        evaluate_unary(&Value::Bool(true), UnaryOp::Neg),
        Err(EvalError::TypeError { .. })
    ));
    assert!(evaluate_unary(&Value::array(vec![]), UnaryOp::Neg).is_err());
}

#[test]
fn test_not_uses_truthiness() {
    assert_eq!(
        evaluate_unary(&Value::Bool(true), UnaryOp::Not).unwrap(),
        Value::Bool(false)
    );
    assert_eq!(
        evaluate_unary(&Value::Number(0.0), UnaryOp::Not).unwrap(),
        Value::Bool(true)
    );
    assert_eq!(
        evaluate_unary(&Value::Number(f64::NAN), UnaryOp::Not).unwrap(),
        Value::Bool(true)
    );
    assert_eq!(
        evaluate_unary(&Value::Number(3.0), UnaryOp::Not).unwrap(),
        Value::Bool(false)
    );
    assert_eq!(
        evaluate_unary(&Value::array(vec![]), UnaryOp::Not).unwrap(),
        Value::Bool(false)
    );
}
