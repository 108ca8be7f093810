//! Simulated call stack
//!
//! - [`CallStack`]: frames, innermost last
//! - [`StackFrame`]: one function's activation record with its locals in
//!   declaration order
//!
//! Frames get simulated addresses growing downward from
//! [`STACK_ADDRESS_START`], as the stack does on real hardware.

use crate::constants::STACK_ADDRESS_START;

/// Bytes of simulated stack each frame occupies in the drawing
const FRAME_SPAN: u64 = 0x20;

/// A named local variable
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalVar {
    pub name: String,
    pub value: i64,
}

/// Stack frame for a function call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackFrame {
    pub function_name: String,
    pub locals: Vec<LocalVar>,
    /// Set once the call has computed its result and is about to return
    pub return_value: Option<i64>,
    pub address: u64,
}

impl StackFrame {
    pub fn new(function_name: impl Into<String>, address: u64) -> Self {
        StackFrame {
            function_name: function_name.into(),
            locals: Vec::new(),
            return_value: None,
            address,
        }
    }

    /// Declare or update a local; new names keep declaration order
    pub fn set_local(&mut self, name: &str, value: i64) {
        match self.locals.iter_mut().find(|v| v.name == name) {
            Some(var) => var.value = value,
            None => self.locals.push(LocalVar {
                name: name.to_string(),
                value,
            }),
        }
    }

    pub fn get_local(&self, name: &str) -> Option<i64> {
        self.locals.iter().find(|v| v.name == name).map(|v| v.value)
    }
}

/// The call stack
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallStack {
    frames: Vec<StackFrame>,
}

impl CallStack {
    pub fn new() -> Self {
        CallStack { frames: Vec::new() }
    }

    /// Push a new stack frame
    pub fn push_frame(&mut self, function_name: impl Into<String>) -> &mut StackFrame {
        let address = STACK_ADDRESS_START - FRAME_SPAN * self.frames.len() as u64;
        self.frames.push(StackFrame::new(function_name, address));
        let top = self.frames.len() - 1;
        &mut self.frames[top]
    }

    /// Pop the top stack frame
    pub fn pop_frame(&mut self) -> Option<StackFrame> {
        self.frames.pop()
    }

    /// Get the current (top) frame
    pub fn current_frame(&self) -> Option<&StackFrame> {
        self.frames.last()
    }

    /// Get a mutable reference to the current frame
    pub fn current_frame_mut(&mut self) -> Option<&mut StackFrame> {
        self.frames.last_mut()
    }

    /// Get all frames, outermost first
    pub fn frames(&self) -> &[StackFrame] {
        &self.frames
    }

    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Drop every frame
    pub fn clear(&mut self) {
        self.frames.clear();
    }
}
