//! A stepper that can play itself on a timer

use super::timer::{Tick, Ticker, TimerId};
use super::{StepMode, Stepper};
use std::sync::mpsc::Sender;
use std::time::Duration;

/// Stepper plus the ticker currently driving it
///
/// Every time playback stops (pause, reset, manual step, new stages) the ticker is
/// stopped and the generation is bumped, so a tick that was already queued when the
/// ticker stopped is recognised as stale and ignored by [`AnimatedStepper::tick`].
/// Dropping the stepper stops its ticker.
#[derive(Debug)]
pub struct AnimatedStepper<S> {
    stepper: Stepper<S>,
    id: TimerId,
    cadence: Duration,
    generation: u64,
    ticker: Option<Ticker>,
}

impl<S> AnimatedStepper<S> {
    pub fn new(id: TimerId, stepper: Stepper<S>, cadence: Duration) -> Self {
        AnimatedStepper {
            stepper,
            id,
            cadence,
            generation: 0,
            ticker: None,
        }
    }

    /// Start timed playback; ticks are delivered on `sender`
    ///
    /// A clamped stepper sitting on its last stage starts over from stage 0.
    pub fn play(&mut self, sender: &Sender<Tick>) {
        if self.ticker.is_some() || self.stepper.len() < 2 {
            return;
        }
        if self.stepper.mode() == StepMode::Clamped && self.stepper.is_at_end() {
            self.stepper.reset();
        }
        self.generation += 1;
        self.ticker = Some(Ticker::start(
            self.id,
            self.generation,
            self.cadence,
            sender.clone(),
        ));
    }

    /// Stop timed playback, keeping the current stage
    pub fn pause(&mut self) {
        if let Some(ticker) = self.ticker.take() {
            ticker.stop();
        }
        self.generation += 1;
    }

    /// Toggle between [`play`](Self::play) and [`pause`](Self::pause)
    pub fn toggle(&mut self, sender: &Sender<Tick>) {
        if self.is_playing() {
            self.pause();
        } else {
            self.play(sender);
        }
    }

    /// Handle a timer firing; returns whether the stage changed
    ///
    /// Ticks from another widget or an older generation are dropped. Playback of a
    /// clamped stepper stops once the last stage is reached.
    pub fn tick(&mut self, tick: Tick) -> bool {
        if tick.source != self.id || tick.generation != self.generation || self.ticker.is_none() {
            tracing::trace!(
                source = tick.source,
                generation = tick.generation,
                current = self.generation,
                "dropping stale tick"
            );
            return false;
        }

        let moved = self.stepper.advance();
        if self.stepper.mode() == StepMode::Clamped && self.stepper.is_at_end() {
            self.pause();
        }
        moved
    }

    /// Manual step forward; stops playback
    pub fn advance(&mut self) -> bool {
        self.pause();
        self.stepper.advance()
    }

    /// Manual step back; stops playback
    pub fn retreat(&mut self) -> bool {
        self.pause();
        self.stepper.retreat()
    }

    /// Stop playback, then return to stage 0
    pub fn reset(&mut self) {
        self.pause();
        self.stepper.reset();
        tracing::debug!(id = self.id, "stepper reset");
    }

    /// Stop playback, then jump to the last stage
    pub fn jump_to_end(&mut self) {
        self.pause();
        self.stepper.jump_to_end();
    }

    /// Stop playback and load a new stage list
    pub fn replace_stages(&mut self, stages: Vec<S>) {
        self.pause();
        self.stepper.replace_stages(stages);
    }

    pub fn is_playing(&self) -> bool {
        self.ticker.is_some()
    }

    pub fn stepper(&self) -> &Stepper<S> {
        &self.stepper
    }

    pub fn id(&self) -> TimerId {
        self.id
    }

    pub fn cadence(&self) -> Duration {
        self.cadence
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}
