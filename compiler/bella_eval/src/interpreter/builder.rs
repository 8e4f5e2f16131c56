//! `InterpreterBuilder` for creating Interpreter instances with various configurations.

use bella_ir::StringInterner;

use super::Interpreter;
use crate::builtins::BuiltinTable;
use crate::value::BuiltinFn;
use crate::{silent_handler, Environment, SharedPrintHandler, Value};

/// Builder for creating Interpreter instances.
///
/// Defaults: the standard built-in table and a silent print handler
/// (printed values are only recorded in the output sequence).
pub struct InterpreterBuilder<'a> {
    interner: &'a StringInterner,
    builtins: BuiltinTable,
    print_handler: Option<SharedPrintHandler>,
}

impl<'a> InterpreterBuilder<'a> {
    pub fn new(interner: &'a StringInterner) -> Self {
        Self {
            interner,
            builtins: BuiltinTable::standard(),
            print_handler: None,
        }
    }

    /// Where rendered print lines go in addition to the output sequence.
    #[must_use]
    pub fn print_handler(mut self, handler: SharedPrintHandler) -> Self {
        self.print_handler = Some(handler);
        self
    }

    /// Register an extra host function, replacing any entry of the same name.
    #[must_use]
    pub fn builtin(mut self, name: &'static str, func: BuiltinFn) -> Self {
        self.builtins.insert_fn(name, func);
        self
    }

    /// Register an extra pre-bound value such as a constant.
    #[must_use]
    pub fn constant(mut self, name: &'static str, value: Value) -> Self {
        self.builtins.insert(name, value);
        self
    }

    /// Start from an empty built-in table.
    ///
    /// Entries registered before this call are dropped too.
    #[must_use]
    pub fn without_standard_builtins(mut self) -> Self {
        self.builtins = BuiltinTable::empty();
        self
    }

    pub fn build(self) -> Interpreter<'a> {
        Interpreter {
            interner: self.interner,
            builtins: self.builtins,
            print_handler: self.print_handler.unwrap_or_else(silent_handler),
            env: Environment::new(),
            output: Vec::new(),
        }
    }
}
