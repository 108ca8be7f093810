//! # Introduction
//!
//! clecture hosts the interactive widgets of an introductory C course in the
//! terminal: a `printf`/`scanf` emulator, code walk-throughs, array algorithm
//! visualizers, a recursion call stack, a simulated heap and a struct padding
//! explorer. The terminal UI is built with [ratatui](https://docs.rs/ratatui).
//!
//! ## Components
//!
//! ```text
//! input events → App → widget state ─┬─ format      (pure)
//!                                     ├─ visualizer  (pure, produces traces)
//!                                     ├─ stepper     (cursor + timer)
//!                                     └─ memory      (simulated heap/stack/layout)
//!                  panes ← widget state
//! ```
//!
//! 1. [`format`]: C `printf`/`scanf` emulation: width, precision, justification.
//! 2. [`visualizer`]: linear/binary search, bubble sort, insert/delete with shift and
//!    recursive factorial as deterministic step-by-step traces.
//! 3. [`stepper`]: clamped or cyclic cursor over stages, with a cancellable timer
//!    for playback.
//! 4. [`memory`]: simulated heap blocks, call stack frames and struct layout.
//! 5. [`ui`]: ratatui-based TUI; not part of the stable library API.
//!
//! Every widget owns its own state. The only background work is the playback timer,
//! which is stopped whenever its widget pauses, resets or is dropped.

pub mod config;
pub mod constants;
pub mod errors;
pub mod format;
pub mod logging;
pub mod memory;
pub mod stepper;
pub mod ui;
pub mod visualizer;
