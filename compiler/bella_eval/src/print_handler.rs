//! Where `print` statements go.
//!
//! Every printed value is recorded in the interpreter's output sequence
//! regardless of handler. The handler only decides whether the rendered line
//! also reaches a terminal or a capture buffer:
//! - Silent: nothing beyond the recorded output (default)
//! - Stdout: one line per printed value
//! - Buffer: captured text for tests and embedders

use parking_lot::Mutex;

use crate::Value;

/// Writes each printed value to stdout.
#[derive(Default)]
pub struct StdoutPrintHandler;

impl StdoutPrintHandler {
    pub fn println(&self, msg: &str) {
        println!("{msg}");
    }
}

/// Captures printed lines into a buffer.
#[derive(Default)]
pub struct BufferPrintHandler {
    buffer: Mutex<String>,
}

impl BufferPrintHandler {
    pub fn new() -> Self {
        BufferPrintHandler::default()
    }

    pub fn println(&self, msg: &str) {
        let mut buf = self.buffer.lock();
        buf.push_str(msg);
        buf.push('\n');
    }

    /// All captured output so far.
    pub fn get_output(&self) -> String {
        self.buffer.lock().clone()
    }

    pub fn clear(&self) {
        self.buffer.lock().clear();
    }
}

/// Print handler implementation using enum dispatch.
pub enum PrintHandlerImpl {
    Stdout(StdoutPrintHandler),
    Buffer(BufferPrintHandler),
    /// Discards rendered output.
    Silent,
}

impl PrintHandlerImpl {
    /// Render `value` and emit it as one line.
    pub fn print_value(&self, value: &Value) {
        match self {
            Self::Stdout(h) => h.println(&value.to_string()),
            Self::Buffer(h) => h.println(&value.to_string()),
            Self::Silent => {}
        }
    }

    /// Captured text. Empty for handlers that don't capture.
    pub fn get_output(&self) -> String {
        match self {
            Self::Buffer(h) => h.get_output(),
            Self::Stdout(_) | Self::Silent => String::new(),
        }
    }

    pub fn clear(&self) {
        if let Self::Buffer(h) = self {
            h.clear();
        }
    }
}

/// Shared print handler that can be passed around.
#[expect(
    clippy::disallowed_types,
    reason = "Arc lets one handler outlive and be shared across interpreters"
)]
pub type SharedPrintHandler = std::sync::Arc<PrintHandlerImpl>;

#[expect(
    clippy::disallowed_types,
    reason = "Arc required for SharedPrintHandler"
)]
pub fn stdout_handler() -> SharedPrintHandler {
    std::sync::Arc::new(PrintHandlerImpl::Stdout(StdoutPrintHandler))
}

#[expect(
    clippy::disallowed_types,
    reason = "Arc required for SharedPrintHandler"
)]
pub fn buffer_handler() -> SharedPrintHandler {
    std::sync::Arc::new(PrintHandlerImpl::Buffer(BufferPrintHandler::new()))
}

/// Handler that records values but renders nothing.
#[expect(
    clippy::disallowed_types,
    reason = "Arc required for SharedPrintHandler"
)]
pub fn silent_handler() -> SharedPrintHandler {
    std::sync::Arc::new(PrintHandlerImpl::Silent)
}
