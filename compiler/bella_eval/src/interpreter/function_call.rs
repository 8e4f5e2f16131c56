//! Call dispatch for the Interpreter.

use bella_ir::{Expr, Name};

use super::Interpreter;
use crate::errors::{arity_mismatch, not_callable};
use crate::{EvalResult, FunctionValue, Value};

impl Interpreter<'_> {
    /// Evaluate `callee(args...)`.
    ///
    /// Built-ins get their evaluated arguments and check them themselves.
    /// User-defined functions are arity-checked before any argument runs.
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(callee = self.interner.lookup(callee), args = args.len())
    )]
    pub(crate) fn eval_call(&mut self, callee: Name, args: &[Expr]) -> EvalResult {
        match self.lookup(callee)? {
            Value::Builtin(builtin) => {
                let values = self.eval_args(args)?;
                builtin.call(&values)
            }
            Value::Function(function) => self.call_function(callee, &function, args),
            other => Err(not_callable(
                self.interner.lookup(callee),
                other.type_name(),
            )),
        }
    }

    /// Arguments are evaluated in the caller's environment; the body sees the
    /// caller's bindings plus the parameters.
    fn call_function(&mut self, callee: Name, function: &FunctionValue, args: &[Expr]) -> EvalResult {
        if args.len() != function.arity() {
            return Err(arity_mismatch(
                self.interner.lookup(callee),
                function.arity(),
                args.len(),
            ));
        }
        let values = self.eval_args(args)?;

        self.with_call_frame(|frame| {
            for (&param, value) in function.params().iter().zip(values) {
                frame.env.bind_parameter(param, value);
            }
            frame.eval_expr(function.body())
        })
    }
}
