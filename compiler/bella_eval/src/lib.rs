//! Bella Eval - tree-walking evaluator for Bella programs.
//!
//! # Architecture
//!
//! - `Value`: closed sum of numbers, booleans, shared arrays and callables
//! - `Environment`: global bindings plus a stack of call frames
//! - `evaluate_binary` / `evaluate_unary`: direct enum-based operator dispatch
//! - `BuiltinTable`: host functions installed before every run
//! - `Interpreter`: statement executor, expression evaluator and call dispatch
//!
//! Running a program yields the ordered values it printed:
//!
//! ```text
//! let output = bella_eval::interpret(&program, &interner)?;
//! ```

mod builtins;
mod environment;
pub mod errors;
pub mod interpreter;
mod operators;
mod print_handler;
mod stack;
mod unary_operators;
mod value;

pub use builtins::{
    builtin_cos, builtin_exp, builtin_hypot, builtin_ln, builtin_sin, builtin_sqrt, BuiltinTable,
};
pub use environment::{BindingError, Environment, Snapshot};
pub use errors::{EvalError, EvalResult, RunFailure};
pub use interpreter::{CallFrameGuard, Interpreter, InterpreterBuilder};
pub use operators::evaluate_binary;
pub use print_handler::{
    buffer_handler, silent_handler, stdout_handler, BufferPrintHandler, PrintHandlerImpl,
    SharedPrintHandler, StdoutPrintHandler,
};
pub use stack::ensure_sufficient_stack;
pub use unary_operators::evaluate_unary;
pub use value::{ArrayValue, BuiltinFn, BuiltinFunction, FunctionValue, Value};

use std::sync::Once;

use bella_ir::{Program, StringInterner};

static TRACING_INIT: Once = Once::new();

/// Install a hierarchical tracing subscriber.
///
/// Does nothing unless `RUST_LOG` is set. Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    tracing_tree::HierarchicalLayer::new(2)
                        .with_targets(true)
                        .with_bracketed_fields(true),
                )
                .with(filter)
                .init();
        }
    });
}

/// Run `program` once with the standard built-ins and return what it printed.
///
/// On failure the values printed before the error are returned alongside it.
pub fn interpret(program: &Program, interner: &StringInterner) -> Result<Vec<Value>, RunFailure> {
    let mut interpreter = Interpreter::new(interner);
    match interpreter.interpret(program) {
        Ok(()) => Ok(interpreter.take_output()),
        Err(error) => Err(RunFailure {
            error,
            output: interpreter.take_output(),
        }),
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
