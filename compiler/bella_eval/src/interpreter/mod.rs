//! Tree-walking interpreter for Bella.
//!
//! Statements run against a single [`Environment`] per run. Expressions are
//! evaluated strictly left to right; only the conditional expression skips
//! work. User-defined calls run in a call frame pushed on top of the
//! caller's live bindings and dropped on every exit path (see
//! [`scope_guard`]).
//!
//! - `stmt` - blocks, declarations, assignment, print, while
//! - `expr` - per-kind expression rules and subscripting
//! - `function_call` - the call dispatch state machine

mod builder;
mod expr;
mod function_call;
mod scope_guard;
mod stmt;

pub use builder::InterpreterBuilder;
pub use scope_guard::CallFrameGuard;

use bella_ir::{Name, Program, StringInterner};

use crate::builtins::BuiltinTable;
use crate::environment::BindingError;
use crate::errors::{duplicate_declaration, undefined_variable};
use crate::{Environment, EvalError, EvalResult, SharedPrintHandler, Value};

/// Runs programs and records what they print.
///
/// One interpreter may run many programs in turn; every run starts from a
/// fresh environment and an empty output sequence.
pub struct Interpreter<'a> {
    interner: &'a StringInterner,
    builtins: BuiltinTable,
    print_handler: SharedPrintHandler,
    pub(crate) env: Environment,
    output: Vec<Value>,
}

impl<'a> Interpreter<'a> {
    /// Interpreter with the standard built-ins and a silent print handler.
    pub fn new(interner: &'a StringInterner) -> Self {
        InterpreterBuilder::new(interner).build()
    }

    /// Execute `program` from a fresh environment.
    ///
    /// Values printed before a failure stay in [`output`](Self::output).
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn interpret(&mut self, program: &Program) -> EvalResult<()> {
        self.output.clear();
        self.env = self.fresh_environment();

        let result = self.exec_block(&program.body);
        match &result {
            Ok(()) => tracing::debug!(printed = self.output.len(), "run finished"),
            Err(error) => {
                tracing::debug!(%error, printed = self.output.len(), "run failed");
            }
        }
        result
    }

    /// Values printed by the most recent run, in order.
    pub fn output(&self) -> &[Value] {
        &self.output
    }

    /// Move the printed values out, leaving the sequence empty.
    pub fn take_output(&mut self) -> Vec<Value> {
        std::mem::take(&mut self.output)
    }

    /// Environment of the most recent run.
    pub fn env(&self) -> &Environment {
        &self.env
    }

    pub fn print_handler(&self) -> &SharedPrintHandler {
        &self.print_handler
    }

    fn fresh_environment(&self) -> Environment {
        let mut env = Environment::new();
        for (name, value) in self.builtins.iter() {
            env.define_global(self.interner.intern(name), value.clone());
        }
        env
    }

    /// Attach the identifier text to an environment failure.
    fn binding_error(&self, error: BindingError, name: Name) -> EvalError {
        let text = self.interner.lookup(name);
        match error {
            BindingError::Duplicate => duplicate_declaration(text),
            BindingError::Unbound => undefined_variable(text),
        }
    }

    fn lookup(&self, name: Name) -> EvalResult {
        self.env
            .lookup(name)
            .cloned()
            .map_err(|error| self.binding_error(error, name))
    }
}
