//! Simulated memory for the pointer, heap and struct lectures
//!
//! Nothing here touches real memory; it is bookkeeping drawn as boxes:
//! - [`heap`]: sized, tagged blocks created by `malloc`/`realloc` and removed by `free`
//! - [`stack`]: call stack frames with named locals
//! - [`layout`]: struct and union byte layout with C alignment rules
//!
//! # Type Sizes
//!
//! Sizes follow a typical 64-bit platform:
//! - `char`: 1 byte
//! - `short`: 2 bytes
//! - `int`, `float`: 4 bytes
//! - `long`, `double`, pointers: 8 bytes
//!
//! Every scalar is aligned to its own size.

pub mod heap;
pub mod layout;
pub mod stack;

pub use heap::{BlockId, Heap};
pub use layout::{struct_layout, union_layout, CType, Field, Layout};
pub use stack::CallStack;
