//! Per-widget state owned by the application
//!
//! Each widget owns its state exclusively; nothing is shared between tabs. The
//! render functions in [`panes`](super::panes) only read these structs.

use crate::config::{Settings, WidgetKind};
use crate::constants::{
    HEAP_DISPLAY_CAP, RECURSION_CADENCE, SEARCH_CADENCE, SEARCH_SEED, SHIFT_CADENCE,
    SORT_CADENCE, SORT_SEED, WIDGET_FLOAT_PRECISION,
};
use crate::errors::MemoryError;
use crate::format::scanf::{scan, ScanResult};
use crate::format::{format_value, printf, FormatKind, FormatSpec, Formatted, RawValue};
use crate::memory::heap::{BlockId, Heap, Realloc};
use crate::memory::layout::{struct_layout, union_layout, CType, Field, Layout};
use crate::stepper::animated::AnimatedStepper;
use crate::stepper::lessons::{Lesson, Stage};
use crate::stepper::{StepMode, Stepper};
use crate::visualizer::recursion::{factorial_trace, CallFrame};
use crate::visualizer::search::{binary_search, linear_search};
use crate::visualizer::shift::{delete_with_shift, insert_with_shift};
use crate::visualizer::sort::bubble_sort;
use crate::visualizer::{Frame, Outcome, Trace};

fn timer_id(kind: WidgetKind) -> u64 {
    kind.index() as u64
}

/// printf width/precision playground
#[derive(Debug, Clone)]
pub struct FormatWidget {
    pub input: String,
    pub spec: FormatSpec,
}

impl FormatWidget {
    pub fn new() -> Self {
        FormatWidget {
            input: "3.14159".to_string(),
            spec: FormatSpec::float().with_width(8),
        }
    }

    pub fn output(&self) -> Formatted {
        format_value(&RawValue::Text(self.input.clone()), &self.spec)
    }

    /// The directive inside a full call, e.g. `printf("|%8.2f|", x)` -> `|    3.14|`
    pub fn call_preview(&self) -> (String, String) {
        let template = format!("|{}|", self.spec.directive());
        let code = format!("printf(\"{}\\n\", {});", template, self.input);
        let printed = printf::render(&template, &[RawValue::Text(self.input.clone())]);
        (code, printed)
    }

    pub fn widen(&mut self) {
        self.spec.width = (self.spec.width + 1).min(40);
    }

    pub fn narrow(&mut self) {
        self.spec.width = self.spec.width.saturating_sub(1);
    }

    pub fn more_precision(&mut self) {
        self.spec.precision = Some(self.spec.precision.map_or(0, |p| (p + 1).min(12)));
    }

    /// Floats bottom out at `.0`; strings drop the precision entirely below `.0`
    pub fn less_precision(&mut self) {
        self.spec.precision = match (self.spec.kind, self.spec.precision) {
            (FormatKind::Float, p) => Some(p.unwrap_or(0).saturating_sub(1)),
            (_, Some(0)) | (_, None) => None,
            (_, Some(p)) => Some(p - 1),
        };
    }

    pub fn toggle_left(&mut self) {
        self.spec.left_justify = !self.spec.left_justify;
    }

    pub fn cycle_kind(&mut self) {
        self.spec.kind = self.spec.kind.next();
        if self.spec.kind == FormatKind::Float && self.spec.precision.is_none() {
            self.spec.precision = Some(WIDGET_FLOAT_PRECISION);
        }
    }

    pub fn push(&mut self, c: char) {
        if self.input.chars().count() < 24 {
            self.input.push(c);
        }
    }

    pub fn backspace(&mut self) {
        self.input.pop();
    }

    pub fn reset(&mut self) {
        *self = FormatWidget::new();
    }
}

impl Default for FormatWidget {
    fn default() -> Self {
        Self::new()
    }
}

/// scanf input playground
#[derive(Debug, Clone)]
pub struct ScanfWidget {
    pub preset: usize,
    pub input: String,
}

impl ScanfWidget {
    /// Template and a sample line for each preset
    pub const PRESETS: [(&'static str, &'static str); 4] = [
        ("%d %f", "42 3.5"),
        ("%d,%d", "10,20"),
        ("%s %d", "Alice 20"),
        ("%3d%c", "12345x"),
    ];

    pub fn new() -> Self {
        ScanfWidget {
            preset: 0,
            input: Self::PRESETS[0].1.to_string(),
        }
    }

    pub fn template(&self) -> &'static str {
        Self::PRESETS[self.preset].0
    }

    pub fn result(&self) -> ScanResult {
        scan(self.template(), &self.input)
    }

    pub fn next_preset(&mut self) {
        self.preset = (self.preset + 1) % Self::PRESETS.len();
        self.input = Self::PRESETS[self.preset].1.to_string();
    }

    pub fn push(&mut self, c: char) {
        if self.input.chars().count() < 40 {
            self.input.push(c);
        }
    }

    pub fn backspace(&mut self) {
        self.input.pop();
    }
}

impl Default for ScanfWidget {
    fn default() -> Self {
        Self::new()
    }
}

/// A code walk-through demo
#[derive(Debug)]
pub struct LessonWidget {
    pub title: &'static str,
    pub stepper: AnimatedStepper<Stage>,
}

impl LessonWidget {
    pub fn new(kind: WidgetKind, lesson: Lesson, settings: &Settings) -> Self {
        LessonWidget {
            title: lesson.title,
            stepper: AnimatedStepper::new(
                timer_id(kind),
                Stepper::new(lesson.stages, lesson.mode),
                settings.cadence(lesson.cadence),
            ),
        }
    }
}

/// Which array algorithm a widget runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrayDemo {
    LinearSearch,
    BinarySearch,
    BubbleSort,
    Insert,
    Delete,
}

impl ArrayDemo {
    pub fn title(self) -> &'static str {
        match self {
            ArrayDemo::LinearSearch => "Linear search",
            ArrayDemo::BinarySearch => "Binary search",
            ArrayDemo::BubbleSort => "Bubble sort",
            ArrayDemo::Insert => "Insert with shift",
            ArrayDemo::Delete => "Delete with shift",
        }
    }
}

/// An algorithm visualizer over a seed array
#[derive(Debug)]
pub struct ArrayWidget {
    pub demo: ArrayDemo,
    /// Search target, or position for insert/delete
    pub param: i64,
    /// Value inserted by the insert demo
    pub value: i64,
    pub stepper: AnimatedStepper<Frame>,
    pub outcome: Outcome,
}

impl ArrayWidget {
    pub fn new(kind: WidgetKind, demo: ArrayDemo, settings: &Settings) -> Self {
        let (param, cadence) = match demo {
            ArrayDemo::LinearSearch | ArrayDemo::BinarySearch => (23, SEARCH_CADENCE),
            ArrayDemo::BubbleSort => (0, SORT_CADENCE),
            ArrayDemo::Insert | ArrayDemo::Delete => (2, SHIFT_CADENCE),
        };
        let mut widget = ArrayWidget {
            demo,
            param,
            value: 99,
            stepper: AnimatedStepper::new(
                timer_id(kind),
                Stepper::new(Vec::new(), StepMode::Clamped),
                settings.cadence(cadence),
            ),
            outcome: Outcome::Sorted,
        };
        widget.rerun();
        widget
    }

    /// Array the demo starts from
    pub fn seed(&self) -> Vec<i64> {
        match self.demo {
            ArrayDemo::BubbleSort => SORT_SEED.to_vec(),
            ArrayDemo::BinarySearch => {
                let mut sorted = SEARCH_SEED.to_vec();
                sorted.sort_unstable();
                sorted
            }
            _ => SEARCH_SEED.to_vec(),
        }
    }

    /// Recompute the trace from the seed and current parameters
    pub fn rerun(&mut self) {
        let seed = self.seed();
        let trace: Trace = match self.demo {
            ArrayDemo::LinearSearch => linear_search(&seed, self.param),
            ArrayDemo::BinarySearch => binary_search(&seed, self.param),
            ArrayDemo::BubbleSort => bubble_sort(&seed),
            // Negative positions are as invalid as ones past the end
            ArrayDemo::Insert => {
                insert_with_shift(&seed, position(self.param, seed.len()), self.value)
            }
            ArrayDemo::Delete => delete_with_shift(&seed, position(self.param, seed.len())),
        };
        self.outcome = trace.outcome;
        self.stepper.replace_stages(trace.frames);
    }

    /// Adjust the parameter by `delta` and rerun
    pub fn adjust(&mut self, delta: i64) {
        if self.demo == ArrayDemo::BubbleSort {
            return;
        }
        self.param = self.param.saturating_add(delta);
        self.rerun();
    }

    /// Switch between linear and binary search
    pub fn toggle_search(&mut self) {
        self.demo = match self.demo {
            ArrayDemo::LinearSearch => ArrayDemo::BinarySearch,
            ArrayDemo::BinarySearch => ArrayDemo::LinearSearch,
            other => other,
        };
        self.rerun();
    }

    /// The outcome message once the last frame is on screen
    pub fn visible_outcome(&self) -> Option<String> {
        let stepper = self.stepper.stepper();
        if stepper.is_empty() || stepper.is_at_end() {
            Some(self.outcome.message())
        } else {
            None
        }
    }
}

fn position(param: i64, len: usize) -> usize {
    usize::try_from(param).unwrap_or(len + 1)
}

/// Factorial call stack demo
#[derive(Debug)]
pub struct RecursionWidget {
    pub n: u32,
    pub stepper: AnimatedStepper<CallFrame>,
}

impl RecursionWidget {
    pub fn new(settings: &Settings) -> Self {
        let n = 4;
        RecursionWidget {
            n,
            stepper: AnimatedStepper::new(
                timer_id(WidgetKind::Recursion),
                Stepper::new(factorial_trace(n), StepMode::Clamped),
                settings.cadence(RECURSION_CADENCE),
            ),
        }
    }

    pub fn adjust(&mut self, delta: i32) {
        self.n = (self.n as i32 + delta).clamp(0, 8) as u32;
        self.stepper.replace_stages(factorial_trace(self.n));
    }
}

/// malloc/free/realloc playground
#[derive(Debug, Clone)]
pub struct HeapWidget {
    pub heap: Heap,
    pub selected: usize,
    pub request_size: usize,
    pub last_freed: Option<BlockId>,
    pub message: String,
}

impl HeapWidget {
    const SIZES: [usize; 5] = [4, 8, 12, 16, 32];

    pub fn new() -> Self {
        HeapWidget {
            heap: Heap::new(HEAP_DISPLAY_CAP),
            selected: 0,
            request_size: 4,
            last_freed: None,
            message: "Press a to malloc".to_string(),
        }
    }

    pub fn selected_id(&self) -> Option<BlockId> {
        self.heap.blocks().get(self.selected).map(|b| b.id)
    }

    pub fn cycle_size(&mut self) {
        let next = Self::SIZES
            .iter()
            .position(|&s| s == self.request_size)
            .map_or(0, |i| (i + 1) % Self::SIZES.len());
        self.request_size = Self::SIZES[next];
    }

    pub fn allocate(&mut self) {
        self.message = match self.heap.allocate(self.request_size) {
            Ok(id) => format!("malloc({}) -> block {}", self.request_size, id),
            Err(MemoryError::DisplayCapReached { cap }) => {
                format!("malloc refused: only {} blocks fit on screen", cap)
            }
            Err(e) => format!("malloc failed: {}", e),
        };
    }

    pub fn free_selected(&mut self) {
        let Some(id) = self.selected_id() else {
            self.message = "Nothing to free".to_string();
            return;
        };
        self.heap.free(id);
        self.last_freed = Some(id);
        self.selected = self.selected.min(self.heap.len().saturating_sub(1));
        self.message = format!("free({}) released the block", id);
    }

    /// Free the most recently freed block again to show that nothing happens
    pub fn free_again(&mut self) {
        let Some(id) = self.last_freed else {
            self.message = "No block has been freed yet".to_string();
            return;
        };
        self.message = if self.heap.free(id) {
            format!("free({}) released the block", id)
        } else {
            format!("free({}) again: invalid identifier, nothing changed", id)
        };
    }

    /// Double the selected block's size
    pub fn grow_selected(&mut self) {
        let Some(block) = self.selected_id().and_then(|id| self.heap.get(id)).cloned() else {
            self.message = "Nothing to realloc".to_string();
            return;
        };
        let new_size = block.size * 2;
        self.message = match self.heap.realloc(block.id, new_size) {
            Ok(Realloc::InPlace { id }) => {
                format!("realloc({}, {}) grew in place", id, new_size)
            }
            Ok(Realloc::Moved { from, to }) => {
                format!("realloc({}, {}): no room, moved to {}", from, new_size, to)
            }
            Err(e) => format!("realloc failed: {}", e),
        };
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.heap.len() {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn reset(&mut self) {
        self.heap.reset();
        self.selected = 0;
        self.last_freed = None;
        self.message = "Heap cleared".to_string();
    }
}

impl Default for HeapWidget {
    fn default() -> Self {
        Self::new()
    }
}

/// Struct padding explorer
#[derive(Debug, Clone, Default)]
pub struct LayoutWidget {
    pub preset: usize,
}

/// A named declaration shown by the layout widget
#[derive(Debug, Clone)]
pub struct LayoutPreset {
    pub declaration: &'static str,
    pub fields: Vec<Field>,
    pub is_union: bool,
}

impl LayoutWidget {
    pub fn presets() -> Vec<LayoutPreset> {
        vec![
            LayoutPreset {
                declaration: "struct Student",
                fields: vec![
                    Field::new("grade", CType::Char),
                    Field::new("id", CType::Int),
                    Field::new("initial", CType::Char),
                ],
                is_union: false,
            },
            LayoutPreset {
                declaration: "struct Student (reordered)",
                fields: vec![
                    Field::new("id", CType::Int),
                    Field::new("grade", CType::Char),
                    Field::new("initial", CType::Char),
                ],
                is_union: false,
            },
            LayoutPreset {
                declaration: "struct Account",
                fields: vec![
                    Field::new("name", CType::Array(Box::new(CType::Char), 10)),
                    Field::new("balance", CType::Double),
                    Field::new("next", CType::Pointer),
                ],
                is_union: false,
            },
            LayoutPreset {
                declaration: "union Data",
                fields: vec![
                    Field::new("i", CType::Int),
                    Field::new("f", CType::Float),
                    Field::new("str", CType::Array(Box::new(CType::Char), 20)),
                ],
                is_union: true,
            },
        ]
    }

    pub fn current(&self) -> (LayoutPreset, Layout) {
        let presets = Self::presets();
        let preset = presets[self.preset % presets.len()].clone();
        let layout = if preset.is_union {
            union_layout(&preset.fields)
        } else {
            struct_layout(&preset.fields)
        };
        (preset, layout)
    }

    pub fn next(&mut self) {
        self.preset = (self.preset + 1) % Self::presets().len();
    }

    pub fn prev(&mut self) {
        let count = Self::presets().len();
        self.preset = (self.preset + count - 1) % count;
    }
}
