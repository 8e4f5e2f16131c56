//! Runtime values for the Bella interpreter.
//!
//! `Value` is a closed sum type; every operator and the call dispatcher
//! pattern-match on it directly. Heap-backed variants (arrays, callables) are
//! reference counted, so cloning a `Value` never deep-copies an array and a
//! function value shares its declaration with the syntax tree.
//!
//! # Equality
//!
//! - Numbers compare with IEEE `==` (`NaN != NaN`).
//! - Arrays compare structurally: same length, element-wise equal.
//! - Callables compare by identity: only two reads of the same binding are
//!   equal.
//! - Values of different kinds are never equal.

use std::fmt;
use std::rc::Rc;

use bella_ir::{Expr, FunctionDecl, Name};

use crate::EvalResult;

/// Host function signature for built-ins.
///
/// Built-ins receive their already-evaluated arguments and validate the
/// count and kinds themselves.
pub type BuiltinFn = fn(&[Value]) -> EvalResult;

/// Runtime value in the Bella interpreter.
#[derive(Clone, Debug)]
pub enum Value {
    /// Double-precision number.
    Number(f64),
    /// Boolean value.
    Bool(bool),
    /// Shared, mutable array.
    Array(ArrayValue),
    /// Host-provided function.
    Builtin(BuiltinFunction),
    /// Function created by a `function` declaration.
    Function(FunctionValue),
}

// Factory Methods

impl Value {
    /// Create a new array owning `elements`.
    pub fn array(elements: Vec<Value>) -> Self {
        Value::Array(ArrayValue::new(elements))
    }

    pub fn builtin(name: &'static str, func: BuiltinFn) -> Self {
        Value::Builtin(BuiltinFunction::new(name, func))
    }

    pub fn function(decl: Rc<FunctionDecl>) -> Self {
        Value::Function(FunctionValue::new(decl))
    }
}

// Inspection

impl Value {
    /// Kind name used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Number(_) => "number",
            Value::Bool(_) => "boolean",
            Value::Array(_) => "array",
            Value::Builtin(_) => "builtin",
            Value::Function(_) => "function",
        }
    }

    pub fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    pub fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    pub fn is_builtin(&self) -> bool {
        matches!(self, Value::Builtin(_))
    }

    pub fn is_function(&self) -> bool {
        matches!(self, Value::Function(_))
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&ArrayValue> {
        match self {
            Value::Array(a) => Some(a),
            _ => None,
        }
    }

    /// Truthiness used by `!`, `&&`, `||`, `while` and conditionals.
    ///
    /// Booleans are themselves; a number is falsy only when it is zero or
    /// NaN; arrays and callables are always truthy.
    pub fn truthy(&self) -> bool {
        match self {
            Value::Bool(b) => *b,
            Value::Number(n) => *n != 0.0 && !n.is_nan(),
            Value::Array(_) | Value::Builtin(_) | Value::Function(_) => true,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => a == b,
            (Value::Builtin(a), Value::Builtin(b)) => a.ptr_eq(b),
            (Value::Function(a), Value::Function(b)) => a.ptr_eq(b),
            _ => false,
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<Vec<Value>> for Value {
    fn from(elements: Vec<Value>) -> Self {
        Value::array(elements)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => fmt_number(*n, f),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Array(a) => {
                write!(f, "[")?;
                for (i, element) in a.elements().iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{element}")?;
                }
                write!(f, "]")
            }
            Value::Builtin(b) => write!(f, "<builtin {}>", b.name()),
            Value::Function(_) => write!(f, "<function>"),
        }
    }
}

/// Render a number the way the language prints it.
///
/// Integral values have no fractional part and zero has no sign. Magnitudes
/// of `1e21` and above or below `1e-6` switch to exponent form with an
/// explicit exponent sign (`1e+21`, `1.5e-7`). Non-finite values use their
/// long names.
fn fmt_number(n: f64, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    /// Magnitudes at or above this are printed in exponent form.
    const EXPONENT_ABOVE: f64 = 1e21;
    /// Magnitudes below this are printed in exponent form.
    const EXPONENT_BELOW: f64 = 1e-6;

    if n.is_nan() {
        write!(f, "NaN")
    } else if n.is_infinite() {
        write!(f, "{}Infinity", if n < 0.0 { "-" } else { "" })
    } else if n == 0.0 {
        write!(f, "0")
    } else if n.abs() >= EXPONENT_ABOVE || n.abs() < EXPONENT_BELOW {
        let text = format!("{n:e}");
        match text.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                write!(f, "{mantissa}e+{exponent}")
            }
            _ => write!(f, "{text}"),
        }
    } else {
        write!(f, "{n}")
    }
}

/// Shared, immutable array storage.
///
/// Cloning an `ArrayValue` aliases the same storage.
#[derive(Clone)]
pub struct ArrayValue(Rc<[Value]>);

impl ArrayValue {
    fn new(elements: Vec<Value>) -> Self {
        ArrayValue(Rc::from(elements))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Element at `index`; nested arrays are returned by reference.
    pub fn get(&self, index: usize) -> Option<Value> {
        self.0.get(index).cloned()
    }

    pub fn elements(&self) -> &[Value] {
        &self.0
    }

    /// Whether both handles point at the same storage.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl PartialEq for ArrayValue {
    fn eq(&self, other: &Self) -> bool {
        // No identity shortcut: an aliased array holding NaN is not equal to
        // itself.
        self.0.len() == other.0.len() && self.0.iter().zip(other.0.iter()).all(|(x, y)| x == y)
    }
}

impl fmt::Debug for ArrayValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}

struct BuiltinInner {
    name: &'static str,
    func: BuiltinFn,
}

/// A host function bound under a fixed name.
#[derive(Clone)]
pub struct BuiltinFunction(Rc<BuiltinInner>);

impl BuiltinFunction {
    pub fn new(name: &'static str, func: BuiltinFn) -> Self {
        BuiltinFunction(Rc::new(BuiltinInner { name, func }))
    }

    pub fn name(&self) -> &'static str {
        self.0.name
    }

    /// Invoke the host function.
    pub fn call(&self, args: &[Value]) -> EvalResult {
        (self.0.func)(args)
    }

    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for BuiltinFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<builtin {}>", self.0.name)
    }
}

/// A user-defined function.
///
/// Holds the declaration by reference; no environment is captured; the
/// body runs against the caller's bindings at call time.
#[derive(Clone)]
pub struct FunctionValue(Rc<FunctionDecl>);

impl FunctionValue {
    pub fn new(decl: Rc<FunctionDecl>) -> Self {
        FunctionValue(decl)
    }

    pub fn params(&self) -> &[Name] {
        &self.0.params
    }

    pub fn arity(&self) -> usize {
        self.0.params.len()
    }

    pub fn body(&self) -> &Expr {
        &self.0.body
    }

    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for FunctionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<function {:?}/{}>", self.0.name, self.0.params.len())
    }
}
