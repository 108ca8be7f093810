//! Call stack trace of a recursive factorial
//!
//! ```c
//! int factorial(int n) {
//!     if (n <= 1) return 1;
//!     return n * factorial(n - 1);
//! }
//! ```
//!
//! The trace pushes one frame per call on the way down, then pops them one by one on
//! the way up, each frame showing the value it returns.

use crate::memory::stack::CallStack;
use crate::stepper::Step;

/// Call stack snapshot for the recursion widget
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallFrame {
    pub stack: CallStack,
    pub note: String,
}

impl Step for CallFrame {
    fn log_line(&self) -> Option<&str> {
        Some(&self.note)
    }
}

/// Trace of `factorial(n)` called from `main`
pub fn factorial_trace(n: u32) -> Vec<CallFrame> {
    let mut stack = CallStack::new();
    let mut frames = Vec::new();

    stack.push_frame("main");
    frames.push(CallFrame {
        stack: stack.clone(),
        note: format!("main calls factorial({})", n),
    });

    // Descend
    let mut k = n;
    loop {
        stack.push_frame("factorial").set_local("n", k as i64);
        let note = if k <= 1 {
            format!("factorial({}) hits the base case", k)
        } else {
            format!("factorial({}) calls factorial({})", k, k - 1)
        };
        frames.push(CallFrame {
            stack: stack.clone(),
            note,
        });
        if k <= 1 {
            break;
        }
        k -= 1;
    }

    // Unwind
    let mut result: i64 = 1;
    while stack.depth() > 1 {
        let Some(top) = stack.current_frame_mut() else {
            break;
        };
        let n_here = top.get_local("n").unwrap_or(1);
        result = if n_here <= 1 {
            1
        } else {
            result.saturating_mul(n_here)
        };
        top.return_value = Some(result);
        frames.push(CallFrame {
            stack: stack.clone(),
            note: format!("factorial({}) returns {}", n_here, result),
        });
        stack.pop_frame();
    }

    if let Some(main) = stack.current_frame_mut() {
        main.set_local("result", result);
    }
    frames.push(CallFrame {
        stack,
        note: format!("main receives {}", result),
    });

    frames
}
