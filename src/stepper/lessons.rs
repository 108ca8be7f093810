//! Stage tables of the built-in lecture demos

use super::{Step, StepMode};
use crate::constants::{
    DANGLING_CADENCE, INDIRECTION_CADENCE, LIFECYCLE_CADENCE, NESTED_LOOP_CADENCE,
};
use std::time::Duration;

/// One named stage of a code walk-through
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stage {
    pub name: String,
    /// Code line highlighted at this stage
    pub code: String,
    /// Value shown in the variable box, if any
    pub value: Option<String>,
    /// Output or explanation appended to the log when reached
    pub note: Option<String>,
}

impl Stage {
    fn new(name: &str, code: &str) -> Self {
        Stage {
            name: name.to_string(),
            code: code.to_string(),
            value: None,
            note: None,
        }
    }

    fn value(mut self, value: &str) -> Self {
        self.value = Some(value.to_string());
        self
    }

    fn note(mut self, note: &str) -> Self {
        self.note = Some(note.to_string());
        self
    }
}

impl Step for Stage {
    fn log_line(&self) -> Option<&str> {
        self.note.as_deref()
    }
}

/// A demo: its stages, how it loops, and how fast it plays
#[derive(Debug, Clone)]
pub struct Lesson {
    pub title: &'static str,
    pub stages: Vec<Stage>,
    pub mode: StepMode,
    pub cadence: Duration,
}

/// `Empty -> Declared -> Initialized -> Reassigned`
pub fn variable_lifecycle() -> Lesson {
    Lesson {
        title: "Variable lifecycle",
        stages: vec![
            Stage::new("Empty", "// no variable yet"),
            Stage::new("Declared", "int age;")
                .value("?")
                .note("age is declared: 4 bytes reserved, contents are garbage"),
            Stage::new("Initialized", "int age = 20;")
                .value("20")
                .note("age is initialized with 20"),
            Stage::new("Reassigned", "age = 21;")
                .value("21")
                .note("age is reassigned; the old value 20 is overwritten"),
        ],
        mode: StepMode::Clamped,
        cadence: LIFECYCLE_CADENCE,
    }
}

/// `malloc` -> write -> `free` -> dangling -> `NULL`
pub fn dangling_pointer() -> Lesson {
    Lesson {
        title: "Dangling pointer",
        stages: vec![
            Stage::new("Allocated", "int *p = malloc(sizeof(int));")
                .value("p -> [ ? ]")
                .note("p points to a fresh 4-byte heap block"),
            Stage::new("Written", "*p = 42;")
                .value("p -> [ 42 ]")
                .note("the block now holds 42"),
            Stage::new("Freed", "free(p);")
                .value("p -> [ freed ]")
                .note("the block is returned to the allocator, p still holds its address"),
            Stage::new("Dangling", "printf(\"%d\", *p);")
                .value("p -> [ ??? ]")
                .note("reading through p is undefined behaviour"),
            Stage::new("Nulled", "p = NULL;")
                .value("p -> NULL")
                .note("p = NULL makes the mistake detectable"),
        ],
        mode: StepMode::Clamped,
        cadence: DANGLING_CADENCE,
    }
}

/// `x`, `p = &x`, `pp = &p`, `**pp = 20`, then around again
pub fn indirection() -> Lesson {
    Lesson {
        title: "Pointer indirection",
        stages: vec![
            Stage::new("Value", "int x = 10;").value("x = 10"),
            Stage::new("Pointer", "int *p = &x;").value("p -> x = 10"),
            Stage::new("Pointer to pointer", "int **pp = &p;").value("pp -> p -> x = 10"),
            Stage::new("Write through pp", "**pp = 20;").value("pp -> p -> x = 20"),
        ],
        mode: StepMode::Cyclic,
        cadence: INDIRECTION_CADENCE,
    }
}

/// Triangle of stars printed by two nested `for` loops over `rows` rows
pub fn nested_loop(rows: usize) -> Lesson {
    let mut stages = vec![Stage::new(
        "Start",
        "for (int i = 0; i < rows; i++)",
    )];

    for i in 0..rows {
        for j in 0..=i {
            let last = j == i;
            let mut stage = Stage::new(
                &format!("i = {}, j = {}", i, j),
                "    for (int j = 0; j <= i; j++) printf(\"*\");",
            )
            .value(&format!("i = {}, j = {}", i, j));
            if last {
                // One log line per finished row
                stage = stage.note(&"*".repeat(i + 1));
            }
            stages.push(stage);
        }
    }

    Lesson {
        title: "Nested loops",
        stages,
        mode: StepMode::Clamped,
        cadence: NESTED_LOOP_CADENCE,
    }
}
