//! The built-in table installed before every run.
//!
//! Built-ins are plain host functions over already-evaluated arguments.
//! They check their own arity and argument kinds; the call dispatcher does
//! not.

use crate::errors::{builtin_arity, builtin_expects_number};
use crate::value::BuiltinFn;
use crate::{EvalResult, Value};

/// Ordered name to value table.
///
/// Mostly host functions, but plain values (such as `π`) are allowed too.
#[derive(Clone, Debug, Default)]
pub struct BuiltinTable {
    entries: Vec<(&'static str, Value)>,
}

impl BuiltinTable {
    /// An empty table.
    pub fn empty() -> Self {
        BuiltinTable::default()
    }

    /// `sin`, `cos`, `hypot`, `sqrt`, `exp`, `ln` and `π`.
    pub fn standard() -> Self {
        let mut table = BuiltinTable::empty();
        table.insert_fn("sin", builtin_sin);
        table.insert_fn("cos", builtin_cos);
        table.insert_fn("hypot", builtin_hypot);
        table.insert_fn("sqrt", builtin_sqrt);
        table.insert_fn("exp", builtin_exp);
        table.insert_fn("ln", builtin_ln);
        table.insert("π", Value::Number(std::f64::consts::PI));
        table
    }

    /// Bind `name` to `value`, replacing an existing entry of the same name.
    pub fn insert(&mut self, name: &'static str, value: Value) {
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Bind `name` to a host function.
    pub fn insert_fn(&mut self, name: &'static str, func: BuiltinFn) {
        self.insert(name, Value::builtin(name, func));
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &Value)> {
        self.entries.iter().map(|(name, value)| (*name, value))
    }
}

/// Extract the single number argument of a unary built-in.
fn single_number(name: &'static str, args: &[Value]) -> EvalResult<f64> {
    match args {
        [Value::Number(n)] => Ok(*n),
        [other] => Err(builtin_expects_number(name, other.type_name())),
        _ => Err(builtin_arity(name, 1, args.len())),
    }
}

pub fn builtin_sin(args: &[Value]) -> EvalResult {
    single_number("sin", args).map(|x| Value::Number(x.sin()))
}

pub fn builtin_cos(args: &[Value]) -> EvalResult {
    single_number("cos", args).map(|x| Value::Number(x.cos()))
}

pub fn builtin_sqrt(args: &[Value]) -> EvalResult {
    single_number("sqrt", args).map(|x| Value::Number(x.sqrt()))
}

pub fn builtin_exp(args: &[Value]) -> EvalResult {
    single_number("exp", args).map(|x| Value::Number(x.exp()))
}

/// Natural logarithm.
pub fn builtin_ln(args: &[Value]) -> EvalResult {
    single_number("ln", args).map(|x| Value::Number(x.ln()))
}

/// Square root of the sum of squares of any number of arguments.
///
/// No arguments yields `0`.
pub fn builtin_hypot(args: &[Value]) -> EvalResult {
    args.iter().try_fold(Value::Number(0.0), |acc, arg| match (acc, arg) {
        (Value::Number(acc), Value::Number(x)) => Ok(Value::Number(acc.hypot(*x))),
        (_, other) => Err(builtin_expects_number("hypot", other.type_name())),
    })
}
