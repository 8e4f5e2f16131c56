//! Evaluation errors.
//!
//! Every failure is fatal to the current run: it unwinds through the
//! evaluator as an `Err` and nothing inside the evaluator recovers from it.
//! Construct errors through the factory functions below so the messages stay
//! in one place.

use bella_ir::BinaryOp;
use thiserror::Error;

use crate::Value;

/// Result of evaluation.
pub type EvalResult<T = Value> = Result<T, EvalError>;

/// A runtime failure.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum EvalError {
    /// Declaring a name that is already bound.
    #[error("variable already declared: {name}")]
    DuplicateDeclaration { name: String },

    /// Reading, assigning to, or calling a name that is not bound.
    #[error("unknown variable: {name}")]
    UnboundVariable { name: String },

    /// Calling a bound value that is neither a built-in nor a user function.
    #[error("{name} is not callable: it is a {type_name}")]
    NotCallable {
        name: String,
        type_name: &'static str,
    },

    /// Calling a function with the wrong number of arguments.
    #[error("{name} expects {expected} argument(s), got {got}")]
    ArityMismatch {
        name: String,
        expected: usize,
        got: usize,
    },

    /// An operator or built-in applied to a value of the wrong kind.
    #[error("type error: {message}")]
    TypeError { message: String },

    /// A subscript outside `[0, len)`.
    #[error("index {index} out of range for array of length {len}")]
    IndexOutOfRange { index: f64, len: usize },
}

/// A failed run, together with everything printed before the failure.
#[derive(Clone, Debug, PartialEq, Error)]
#[error("{error}")]
pub struct RunFailure {
    pub error: EvalError,
    pub output: Vec<Value>,
}

// Binding errors

pub fn duplicate_declaration(name: &str) -> EvalError {
    EvalError::DuplicateDeclaration {
        name: name.to_owned(),
    }
}

pub fn undefined_variable(name: &str) -> EvalError {
    EvalError::UnboundVariable {
        name: name.to_owned(),
    }
}

// Call errors

pub fn not_callable(name: &str, type_name: &'static str) -> EvalError {
    EvalError::NotCallable {
        name: name.to_owned(),
        type_name,
    }
}

pub fn arity_mismatch(name: &str, expected: usize, got: usize) -> EvalError {
    EvalError::ArityMismatch {
        name: name.to_owned(),
        expected,
        got,
    }
}

/// A built-in that takes a fixed number of arguments got a different count.
pub fn builtin_arity(name: &'static str, expected: usize, got: usize) -> EvalError {
    arity_mismatch(name, expected, got)
}

pub fn builtin_expects_number(name: &'static str, got: &'static str) -> EvalError {
    EvalError::TypeError {
        message: format!("{name} expects number arguments, got {got}"),
    }
}

// Operator errors

pub fn arithmetic_on_non_number(op: BinaryOp, left: &'static str, right: &'static str) -> EvalError {
    EvalError::TypeError {
        message: format!(
            "arithmetic on non-number: cannot apply `{}` to {left} and {right}",
            op.as_symbol()
        ),
    }
}

pub fn ordering_on_non_number(op: BinaryOp, left: &'static str, right: &'static str) -> EvalError {
    EvalError::TypeError {
        message: format!(
            "comparison on non-number: cannot apply `{}` to {left} and {right}",
            op.as_symbol()
        ),
    }
}

pub fn negation_of_non_number(got: &'static str) -> EvalError {
    EvalError::TypeError {
        message: format!("cannot negate {got}"),
    }
}

// Subscript errors

pub fn cannot_subscript(got: &'static str) -> EvalError {
    EvalError::TypeError {
        message: format!("cannot subscript {got}"),
    }
}

pub fn non_number_index(got: &'static str) -> EvalError {
    EvalError::TypeError {
        message: format!("array index must be a number, got {got}"),
    }
}

pub fn index_out_of_range(index: f64, len: usize) -> EvalError {
    EvalError::IndexOutOfRange { index, len }
}
