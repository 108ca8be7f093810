//! Cancellable recurring timer
//!
//! A [`Ticker`] runs on its own thread and sends a [`Tick`] through a channel every
//! interval until it is stopped. Stopping is guaranteed: [`Ticker::stop`] and
//! `Drop` both signal the thread and join it, so no tick is produced by a ticker
//! after it has been stopped or dropped. Ticks already sitting in the channel are
//! told apart by their generation (see [`AnimatedStepper`]).
//!
//! [`AnimatedStepper`]: super::animated::AnimatedStepper

use std::sync::mpsc::Sender;
use std::sync::{Arc, Condvar, Mutex};
use std::thread;
use std::time::{Duration, Instant};

/// Identifies which widget a timer belongs to
pub type TimerId = u64;

/// One timer firing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick {
    pub source: TimerId,
    pub generation: u64,
}

type Flag = Arc<(Mutex<bool>, Condvar)>;

/// Receiving side of the stop flag, owned by the timer thread
#[derive(Clone)]
struct StopSignal {
    inner: Flag,
}

impl StopSignal {
    fn is_stopped(&self) -> bool {
        let (lock, _) = &*self.inner;
        // A poisoned flag counts as stopped
        lock.lock().map(|stopped| *stopped).unwrap_or(true)
    }

    /// Wait for the stop flag or the timeout; returns `true` if stopped
    fn wait_timeout(&self, duration: Duration) -> bool {
        let (lock, cvar) = &*self.inner;
        let Ok(mut stopped) = lock.lock() else {
            return true;
        };
        let start = Instant::now();

        loop {
            if *stopped {
                return true;
            }
            let elapsed = start.elapsed();
            if elapsed >= duration {
                return false;
            }
            match cvar.wait_timeout(stopped, duration - elapsed) {
                Ok((guard, _)) => stopped = guard,
                Err(_) => return true,
            }
        }
    }
}

/// Sending side of the stop flag
struct StopTrigger {
    inner: Flag,
}

impl StopTrigger {
    fn stop(&self) {
        let (lock, cvar) = &*self.inner;
        if let Ok(mut stopped) = lock.lock() {
            *stopped = true;
        }
        cvar.notify_all();
    }
}

fn stop_pair() -> (StopSignal, StopTrigger) {
    let inner: Flag = Arc::new((Mutex::new(false), Condvar::new()));
    (
        StopSignal {
            inner: inner.clone(),
        },
        StopTrigger { inner },
    )
}

/// A running recurring timer
pub struct Ticker {
    source: TimerId,
    generation: u64,
    interval: Duration,
    trigger: StopTrigger,
    thread: Option<thread::JoinHandle<()>>,
}

impl Ticker {
    /// Start sending `Tick { source, generation }` on `sender` every `interval`
    ///
    /// The thread also exits on its own once the receiver is gone.
    pub fn start(source: TimerId, generation: u64, interval: Duration, sender: Sender<Tick>) -> Self {
        let (signal, trigger) = stop_pair();
        let tick = Tick { source, generation };

        let thread = thread::spawn(move || loop {
            if signal.wait_timeout(interval) {
                break;
            }
            if signal.is_stopped() || sender.send(tick).is_err() {
                break;
            }
        });

        tracing::debug!(source, generation, interval_ms = interval.as_millis() as u64, "ticker started");

        Ticker {
            source,
            generation,
            interval,
            trigger,
            thread: Some(thread),
        }
    }

    /// Stop the timer and wait for its thread to finish
    pub fn stop(mut self) {
        self.shutdown();
    }

    pub fn source(&self) -> TimerId {
        self.source
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    fn shutdown(&mut self) {
        self.trigger.stop();
        if let Some(handle) = self.thread.take() {
            let _ = handle.join();
            tracing::debug!(source = self.source, generation = self.generation, "ticker stopped");
        }
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.shutdown();
    }
}

impl std::fmt::Debug for Ticker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Ticker")
            .field("source", &self.source)
            .field("generation", &self.generation)
            .field("interval", &self.interval)
            .field("running", &self.thread.is_some())
            .finish()
    }
}
