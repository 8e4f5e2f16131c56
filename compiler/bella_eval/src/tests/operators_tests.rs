//! Tests for binary operator implementations.

use crate::operators::evaluate_binary;
use crate::{EvalError, Value};
use bella_ir::BinaryOp;
use pretty_assertions::assert_eq;

fn n(x: f64) -> Value {
    Value::Number(x)
}

fn b(x: bool) -> Value {
    Value::Bool(x)
}

#[test]
fn test_arithmetic() {
    assert_eq!(evaluate_binary(n(2.0), n(3.0), BinaryOp::Add).unwrap(), n(5.0));
    assert_eq!(evaluate_binary(n(5.0), n(3.0), BinaryOp::Sub).unwrap(), n(2.0));
    assert_eq!(evaluate_binary(n(2.0), n(3.0), BinaryOp::Mul).unwrap(), n(6.0));
    assert_eq!(evaluate_binary(n(7.0), n(2.0), BinaryOp::Div).unwrap(), n(3.5));
    assert_eq!(evaluate_binary(n(7.0), n(2.0), BinaryOp::Mod).unwrap(), n(1.0));
    assert_eq!(evaluate_binary(n(2.0), n(10.0), BinaryOp::Pow).unwrap(), n(1024.0));
}

#[test]
fn test_ieee_edge_cases() {
    assert_eq!(
        evaluate_binary(n(1.0), n(0.0), BinaryOp::Div).unwrap(),
        n(f64::INFINITY)
    );
    assert_eq!(
        evaluate_binary(n(-1.0), n(0.0), BinaryOp::Div).unwrap(),
        n(f64::NEG_INFINITY)
    );
    assert!(evaluate_binary(n(0.0), n(0.0), BinaryOp::Div)
        .unwrap()
        .as_number()
        .unwrap()
        .is_nan());
    assert!(evaluate_binary(n(1.0), n(0.0), BinaryOp::Mod)
        .unwrap()
        .as_number()
        .unwrap()
        .is_nan());
}

#[test]
fn test_mod_keeps_dividend_sign() {
    assert_eq!(evaluate_binary(n(-7.0), n(3.0), BinaryOp::Mod).unwrap(), n(-1.0));
    assert_eq!(evaluate_binary(n(7.5), n(2.0), BinaryOp::Mod).unwrap(), n(1.5));
}

#[test]
fn test_arithmetic_on_non_number() {
    let err = evaluate_binary(n(1.0), b(true), BinaryOp::Add).unwrap_err();
    assert!(matches!(&err, EvalError::TypeError { message } if message.contains("arithmetic on non-number")));
    assert!(evaluate_binary(Value::array(vec![]), n(1.0), BinaryOp::Mul).is_err());
}

#[test]
fn test_ordering() {
    assert_eq!(evaluate_binary(n(1.0), n(2.0), BinaryOp::Lt).unwrap(), b(true));
    assert_eq!(evaluate_binary(n(2.0), n(2.0), BinaryOp::LtEq).unwrap(), b(true));
    assert_eq!(evaluate_binary(n(2.0), n(3.0), BinaryOp::GtEq).unwrap(), b(false));
    assert_eq!(evaluate_binary(n(3.0), n(2.0), BinaryOp::Gt).unwrap(), b(true));
    assert_eq!(
        evaluate_binary(n(f64::NAN), n(1.0), BinaryOp::Lt).unwrap(),
        b(false)
    );
}

#[test]
fn test_ordering_on_non_number() {
    assert!(matches!(
        evaluate_binary(b(true), b(false), BinaryOp::Lt),
        Err(EvalError::TypeError { .. })
    ));
}

#[test]
fn test_equality() {
    assert_eq!(evaluate_binary(n(1.0), n(1.0), BinaryOp::Eq).unwrap(), b(true));
    assert_eq!(evaluate_binary(n(1.0), b(true), BinaryOp::Eq).unwrap(), b(false));
    assert_eq!(evaluate_binary(n(1.0), b(true), BinaryOp::NotEq).unwrap(), b(true));
    assert_eq!(
        evaluate_binary(n(f64::NAN), n(f64::NAN), BinaryOp::Eq).unwrap(),
        b(false)
    );
    assert_eq!(
        evaluate_binary(
            Value::array(vec![n(1.0), b(false)]),
            Value::array(vec![n(1.0), b(false)]),
            BinaryOp::Eq
        )
        .unwrap(),
        b(true)
    );
}

#[test]
fn test_logical_returns_deciding_operand() {
    assert_eq!(evaluate_binary(b(true), b(false), BinaryOp::And).unwrap(), b(false));
    assert_eq!(evaluate_binary(b(false), n(5.0), BinaryOp::And).unwrap(), b(false));
    assert_eq!(evaluate_binary(n(2.0), n(5.0), BinaryOp::And).unwrap(), n(5.0));
    assert_eq!(evaluate_binary(n(0.0), n(5.0), BinaryOp::Or).unwrap(), n(5.0));
    assert_eq!(evaluate_binary(n(3.0), n(5.0), BinaryOp::Or).unwrap(), n(3.0));
    assert_eq!(evaluate_binary(b(false), b(false), BinaryOp::Or).unwrap(), b(false));
}
