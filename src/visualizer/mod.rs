//! Step-by-step traces of the array lectures' algorithms
//!
//! Each algorithm runs to completion up front and returns a [`Trace`]: every
//! primitive step as a [`Frame`] (a full array snapshot with one [`Role`] per
//! element) plus the final [`Outcome`]. Traces are plain data, so a widget can
//! replay them through a [`Stepper`](crate::stepper::Stepper) and re-run them at
//! will. Identical input always yields the identical trace.
//!
//! - [`search`]: linear search, binary search
//! - [`sort`]: bubble sort
//! - [`shift`]: insertion and deletion with shifting
//! - [`recursion`]: factorial call stack

pub mod recursion;
pub mod search;
pub mod shift;
pub mod sort;

use crate::stepper::Step;
use std::fmt;

/// What an element is doing in one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Role {
    #[default]
    Unvisited,
    Comparing,
    Swapping,
    Sorted,
    Found,
    /// Outside the remaining binary search range
    Discarded,
    /// Just moved by a shift
    Shifting,
    /// Just written by an insertion
    Placed,
}

/// One array element in a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub value: i64,
    pub role: Role,
}

/// One snapshot of the working array
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub cells: Vec<Cell>,
    /// Caption shown under the array
    pub note: String,
}

impl Frame {
    /// Snapshot `values`, every element `Unvisited`
    pub fn plain(values: &[i64], note: impl Into<String>) -> Self {
        Frame {
            cells: values
                .iter()
                .map(|&value| Cell {
                    value,
                    role: Role::Unvisited,
                })
                .collect(),
            note: note.into(),
        }
    }

    /// Set the role of element `index` (ignored when out of range)
    pub fn with_role(mut self, index: usize, role: Role) -> Self {
        if let Some(cell) = self.cells.get_mut(index) {
            cell.role = role;
        }
        self
    }

    pub fn values(&self) -> Vec<i64> {
        self.cells.iter().map(|c| c.value).collect()
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.cells.iter().any(|c| c.role == role)
    }

    /// Indices of the elements carrying `role`
    pub fn indices_with(&self, role: Role) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.role == role)
            .map(|(i, _)| i)
            .collect()
    }
}

impl Step for Frame {
    fn log_line(&self) -> Option<&str> {
        if self.note.is_empty() {
            None
        } else {
            Some(&self.note)
        }
    }
}

/// How a run ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Found { index: usize },
    NotFound,
    Sorted,
    Inserted { index: usize },
    Deleted { index: usize, value: i64 },
    /// The requested index was outside the array; no steps were produced
    InvalidPosition { index: usize, len: usize },
}

impl Outcome {
    /// Message shown in the widget once the run has finished
    pub fn message(&self) -> String {
        match self {
            Outcome::Found { index } => format!("Found at index {}", index),
            Outcome::NotFound => "Not found".to_string(),
            Outcome::Sorted => "Sorted".to_string(),
            Outcome::Inserted { index } => format!("Inserted at index {}", index),
            Outcome::Deleted { index, value } => {
                format!("Deleted {} from index {}", value, index)
            }
            Outcome::InvalidPosition { .. } => "Invalid Position!".to_string(),
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

/// A finished run: every frame in order, then the outcome
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trace {
    pub frames: Vec<Frame>,
    pub outcome: Outcome,
}

impl Trace {
    pub fn last_frame(&self) -> Option<&Frame> {
        self.frames.last()
    }

    /// Number of frames in which some element carries `role`
    pub fn frames_with(&self, role: Role) -> usize {
        self.frames.iter().filter(|f| f.has_role(role)).count()
    }
}
