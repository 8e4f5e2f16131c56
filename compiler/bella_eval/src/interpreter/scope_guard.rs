//! RAII call frames for user-defined calls.
//!
//! [`CallFrameGuard`] pushes an overlay frame on top of the caller's live
//! bindings and restores the environment snapshot when dropped, including
//! during unwinding. The guard holds `&mut Interpreter` and derefs to it, so
//! the body is evaluated through the guard itself.
//!
//! ```text
//! self.with_call_frame(|frame| {
//!     frame.env.bind_parameter(param, value);
//!     frame.eval_expr(body)
//! })
//! ```

use std::ops::{Deref, DerefMut};

use super::Interpreter;
use crate::environment::Snapshot;

/// Guard that drops a call frame on scope exit.
///
/// Bindings made while the guard is alive, including writes to names that
/// live in outer frames, vanish when it is dropped.
pub struct CallFrameGuard<'guard, 'interp> {
    interpreter: &'guard mut Interpreter<'interp>,
    snapshot: Snapshot,
}

impl Drop for CallFrameGuard<'_, '_> {
    fn drop(&mut self) {
        self.interpreter.env.restore(self.snapshot);
    }
}

impl<'interp> Deref for CallFrameGuard<'_, 'interp> {
    type Target = Interpreter<'interp>;

    fn deref(&self) -> &Self::Target {
        self.interpreter
    }
}

impl DerefMut for CallFrameGuard<'_, '_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.interpreter
    }
}

impl<'a> Interpreter<'a> {
    /// Push a call frame that is dropped together with the returned guard.
    pub fn call_frame(&mut self) -> CallFrameGuard<'_, 'a> {
        let snapshot = self.env.snapshot();
        CallFrameGuard {
            interpreter: self,
            snapshot,
        }
    }

    /// Run `f` inside a fresh call frame.
    pub fn with_call_frame<T, F>(&mut self, f: F) -> T
    where
        F: FnOnce(&mut CallFrameGuard<'_, 'a>) -> T,
    {
        let mut frame = self.call_frame();
        f(&mut frame)
    }
}
