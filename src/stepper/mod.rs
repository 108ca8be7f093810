//! Stepper/timeline engine
//!
//! A [`Stepper`] walks a cursor through a fixed, ordered list of stages. Every
//! animated widget is one: the variable lifecycle demo steps through named code
//! stages, the algorithm visualizers step through [`Frame`]s of a trace.
//!
//! - [`timer`]: cancellable recurring ticker driving timed playback
//! - [`animated`]: a stepper paired with its ticker
//! - [`lessons`]: built-in stage tables for the lecture demos
//!
//! Navigation never fails. Moving before the first stage or past the last one is
//! clamped; cyclic steppers wrap from the last stage back to stage 0.
//!
//! [`Frame`]: crate::visualizer::Frame

pub mod animated;
pub mod lessons;
pub mod timer;

/// How the stepper behaves when advanced on its last stage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepMode {
    /// Stay on the last stage
    Clamped,
    /// Wrap back to stage 0
    Cyclic,
}

/// A stage that may contribute a line to the widget's log
pub trait Step {
    /// Line shown in the log once this stage has been reached
    fn log_line(&self) -> Option<&str> {
        None
    }
}

/// Cursor over an ordered list of stages
#[derive(Debug, Clone)]
pub struct Stepper<S> {
    stages: Vec<S>,
    cursor: usize,
    mode: StepMode,
}

impl<S> Stepper<S> {
    pub fn new(stages: Vec<S>, mode: StepMode) -> Self {
        Stepper {
            stages,
            cursor: 0,
            mode,
        }
    }

    /// Move forward one stage; returns whether the cursor moved
    pub fn advance(&mut self) -> bool {
        if self.stages.is_empty() {
            return false;
        }
        if self.cursor + 1 < self.stages.len() {
            self.cursor += 1;
            return true;
        }
        match self.mode {
            StepMode::Clamped => false,
            StepMode::Cyclic if self.stages.len() > 1 => {
                self.cursor = 0;
                true
            }
            StepMode::Cyclic => false,
        }
    }

    /// Move back one stage, clamped at stage 0; returns whether the cursor moved
    pub fn retreat(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        true
    }

    /// Return to stage 0
    pub fn reset(&mut self) {
        self.cursor = 0;
    }

    /// Jump to the last stage
    pub fn jump_to_end(&mut self) {
        self.cursor = self.stages.len().saturating_sub(1);
    }

    /// Jump to `index`, clamped into range
    pub fn jump_to(&mut self, index: usize) {
        self.cursor = index.min(self.stages.len().saturating_sub(1));
    }

    /// Replace the stage list (e.g. a re-run visualizer) and return to stage 0
    pub fn replace_stages(&mut self, stages: Vec<S>) {
        self.stages = stages;
        self.cursor = 0;
    }

    pub fn current(&self) -> Option<&S> {
        self.stages.get(self.cursor)
    }

    pub fn position(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    pub fn is_at_start(&self) -> bool {
        self.cursor == 0
    }

    pub fn is_at_end(&self) -> bool {
        self.cursor + 1 >= self.stages.len()
    }

    pub fn mode(&self) -> StepMode {
        self.mode
    }

    pub fn stages(&self) -> &[S] {
        &self.stages
    }
}

impl<S: Step> Stepper<S> {
    /// Log lines of every stage reached so far, oldest first
    ///
    /// Derived from the cursor, so a reset (or a wrap) clears it.
    pub fn log(&self) -> Vec<&str> {
        self.stages
            .iter()
            .take(self.cursor + 1)
            .filter_map(Step::log_line)
            .collect()
    }
}
