// Constants for the lecture widgets

use std::time::Duration;

/// Maximum number of heap blocks the heap widget can lay out on screen
pub const HEAP_DISPLAY_CAP: usize = 8;

/// Simulated address of the first heap block
/// Heap addresses start at 0x1000 so they read like real pointers in the UI
pub const HEAP_ADDRESS_START: u64 = 0x0000_1000;

/// Simulated address of the first stack frame
pub const STACK_ADDRESS_START: u64 = 0x7ffe_0000;

/// Default precision of the float formatting widget (`%.2f`)
pub const WIDGET_FLOAT_PRECISION: usize = 2;

/// Default precision of a parsed `%f` directive without an explicit precision
pub const C_FLOAT_PRECISION: usize = 6;

// Timer cadences. Every widget has its own; they are not derived from each other.

/// Variable lifecycle demo (Empty -> Declared -> Initialized -> Reassigned)
pub const LIFECYCLE_CADENCE: Duration = Duration::from_millis(1200);

/// Dangling pointer demo
pub const DANGLING_CADENCE: Duration = Duration::from_millis(2000);

/// Pointer indirection demo (cyclic)
pub const INDIRECTION_CADENCE: Duration = Duration::from_millis(2500);

/// Nested loop simulator
pub const NESTED_LOOP_CADENCE: Duration = Duration::from_millis(800);

/// Bubble sort visualizer
pub const SORT_CADENCE: Duration = Duration::from_millis(600);

/// Linear and binary search visualizers
pub const SEARCH_CADENCE: Duration = Duration::from_millis(800);

/// Insert/delete with shift visualizers
pub const SHIFT_CADENCE: Duration = Duration::from_millis(800);

/// Recursion call-stack animation
pub const RECURSION_CADENCE: Duration = Duration::from_millis(1200);

/// Seed array of the sorting visualizer
pub const SORT_SEED: [i64; 6] = [45, 12, 89, 23, 7, 34];

/// Seed array of the search and shift visualizers
pub const SEARCH_SEED: [i64; 6] = [12, 45, 7, 23, 89, 34];
