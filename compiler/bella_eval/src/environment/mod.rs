//! Environment for variable bindings in the interpreter.
//!
//! One environment lives for exactly one run. It is a stack of frames: the
//! bottom frame holds the built-ins and every top-level binding, and each
//! user-defined call pushes an overlay frame for its parameters.
//!
//! A call must observe the caller's bindings as if it were handed a full
//! copy of them, and nothing it does may survive the return. Overlays give
//! that without copying: reads fall through to outer frames, writes always
//! land in the top frame (shadowing outer bindings), and restoring a
//! [`Snapshot`] drops every frame pushed after it.

use rustc_hash::FxHashMap;

use bella_ir::Name;

use crate::Value;

/// Error returned by environment operations.
///
/// Carries no name; the interpreter attaches the identifier text when it
/// turns this into an [`EvalError`](crate::EvalError).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BindingError {
    /// Name is already bound.
    Duplicate,
    /// Name is not bound in any frame.
    Unbound,
}

/// Opaque marker returned by [`Environment::snapshot`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[must_use = "a snapshot must be restored to drop the call frame"]
pub struct Snapshot {
    overlays: usize,
}

type Frame = FxHashMap<Name, Value>;

/// Binding store for one program execution.
#[derive(Debug, Default)]
pub struct Environment {
    /// Built-ins and top-level bindings.
    global: Frame,
    /// Call frames, innermost last.
    overlays: Vec<Frame>,
}

impl Environment {
    /// Create an empty environment.
    pub fn new() -> Self {
        Environment::default()
    }

    /// Number of frames, including the global one.
    pub fn depth(&self) -> usize {
        self.overlays.len() + 1
    }

    #[inline]
    fn top_mut(&mut self) -> &mut Frame {
        match self.overlays.last_mut() {
            Some(frame) => frame,
            None => &mut self.global,
        }
    }

    #[inline]
    fn frames(&self) -> impl Iterator<Item = &Frame> {
        self.overlays.iter().rev().chain(std::iter::once(&self.global))
    }

    /// Whether `name` is visible from the current frame.
    pub fn is_bound(&self, name: Name) -> bool {
        self.frames().any(|frame| frame.contains_key(&name))
    }

    /// Look up a variable, innermost frame first.
    #[inline]
    pub fn lookup(&self, name: Name) -> Result<&Value, BindingError> {
        self.frames()
            .find_map(|frame| frame.get(&name))
            .ok_or(BindingError::Unbound)
    }

    /// Bind a new name in the current frame.
    ///
    /// Fails if the name is visible anywhere, including outer frames.
    pub fn declare(&mut self, name: Name, value: Value) -> Result<(), BindingError> {
        if self.is_bound(name) {
            return Err(BindingError::Duplicate);
        }
        self.top_mut().insert(name, value);
        Ok(())
    }

    /// Overwrite an existing binding.
    ///
    /// The write goes to the current frame; if the name lives in an outer
    /// frame it is shadowed there until the frame is dropped.
    pub fn assign(&mut self, name: Name, value: Value) -> Result<(), BindingError> {
        if !self.is_bound(name) {
            return Err(BindingError::Unbound);
        }
        self.top_mut().insert(name, value);
        Ok(())
    }

    /// Bind a call parameter in the current frame, shadowing any outer
    /// binding with the same name.
    pub fn bind_parameter(&mut self, name: Name, value: Value) {
        self.top_mut().insert(name, value);
    }

    /// Bind a name in the global frame unconditionally.
    ///
    /// Used to install the built-in table before a run.
    pub fn define_global(&mut self, name: Name, value: Value) {
        self.global.insert(name, value);
    }

    /// Push an empty call frame and return a marker for [`restore`](Self::restore).
    pub fn snapshot(&mut self) -> Snapshot {
        let snapshot = Snapshot {
            overlays: self.overlays.len(),
        };
        self.overlays.push(Frame::default());
        snapshot
    }

    /// Drop every frame pushed since `snapshot` was taken.
    pub fn restore(&mut self, snapshot: Snapshot) {
        self.overlays.truncate(snapshot.overlays);
    }
}
