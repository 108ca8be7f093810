// Tests for the stepper engine and its playback timer

use clecture::stepper::animated::AnimatedStepper;
use clecture::stepper::lessons::{dangling_pointer, indirection, nested_loop, variable_lifecycle};
use clecture::stepper::timer::{Tick, Ticker};
use clecture::stepper::{StepMode, Stepper};
use std::sync::mpsc;
use std::time::Duration;

const WAIT: Duration = Duration::from_secs(2);

#[test]
fn test_clamped_navigation() {
    let lesson = variable_lifecycle();
    let mut stepper = Stepper::new(lesson.stages, lesson.mode);

    assert!(!stepper.retreat(), "retreat at stage 0 must be a no-op");
    assert_eq!(stepper.position(), 0);

    while stepper.advance() {}
    assert_eq!(stepper.position(), 3);
    assert!(stepper.is_at_end());
    assert!(!stepper.advance());
    assert_eq!(stepper.current().map(|s| s.name.as_str()), Some("Reassigned"));

    assert!(stepper.retreat());
    assert_eq!(stepper.position(), 2);
}

#[test]
fn test_cyclic_wraps_to_start() {
    let lesson = indirection();
    assert_eq!(lesson.mode, StepMode::Cyclic);
    let mut stepper = Stepper::new(lesson.stages, lesson.mode);

    for _ in 0..3 {
        assert!(stepper.advance());
    }
    assert!(stepper.is_at_end());
    assert!(stepper.advance());
    assert_eq!(stepper.position(), 0);
}

#[test]
fn test_reset_is_idempotent() {
    let lesson = variable_lifecycle();
    let mut stepper = Stepper::new(lesson.stages, lesson.mode);
    stepper.advance();
    stepper.advance();
    assert_eq!(stepper.log().len(), 2);

    stepper.reset();
    let position_once = stepper.position();
    let log_once: Vec<String> = stepper.log().iter().map(|s| s.to_string()).collect();

    stepper.reset();
    assert_eq!(stepper.position(), position_once);
    assert_eq!(stepper.position(), 0);
    assert_eq!(stepper.log(), log_once);
    assert!(stepper.log().is_empty());
}

#[test]
fn test_empty_stepper() {
    let mut stepper: Stepper<clecture::visualizer::Frame> = Stepper::new(Vec::new(), StepMode::Clamped);
    assert!(!stepper.advance());
    assert!(!stepper.retreat());
    assert!(stepper.current().is_none());
    stepper.jump_to_end();
    assert_eq!(stepper.position(), 0);
}

#[test]
fn test_jump_to_is_clamped() {
    let lesson = dangling_pointer();
    let mut stepper = Stepper::new(lesson.stages, lesson.mode);
    stepper.jump_to(100);
    assert_eq!(stepper.position(), 4);
    assert_eq!(stepper.current().map(|s| s.code.as_str()), Some("p = NULL;"));
}

#[test]
fn test_nested_loop_log() {
    let lesson = nested_loop(3);
    // Start stage plus 1 + 2 + 3 inner iterations
    assert_eq!(lesson.stages.len(), 7);

    let mut stepper = Stepper::new(lesson.stages, lesson.mode);
    stepper.jump_to_end();
    assert_eq!(stepper.log(), vec!["*", "**", "***"]);
}

#[test]
fn test_ticker_stop_is_final() {
    let (tx, rx) = mpsc::channel();
    let ticker = Ticker::start(7, 1, Duration::from_millis(5), tx.clone());

    let tick = rx.recv_timeout(WAIT).expect("ticker should fire");
    assert_eq!(tick, Tick { source: 7, generation: 1 });

    ticker.stop();
    while rx.try_recv().is_ok() {}
    assert!(rx.recv_timeout(Duration::from_millis(50)).is_err());
}

#[test]
fn test_ticker_drop_cancels() {
    let (tx, rx) = mpsc::channel();
    {
        let _ticker = Ticker::start(1, 1, Duration::from_millis(5), tx);
        rx.recv_timeout(WAIT).expect("ticker should fire");
    }
    // Dropping joined the thread, so its sender is gone too
    while rx.try_recv().is_ok() {}
    assert!(rx.recv().is_err());
}

#[test]
fn test_animated_plays_to_end_and_stops() {
    let (tx, rx) = mpsc::channel();
    let lesson = variable_lifecycle();
    let mut animated = AnimatedStepper::new(
        3,
        Stepper::new(lesson.stages, lesson.mode),
        Duration::from_millis(5),
    );

    animated.play(&tx);
    assert!(animated.is_playing());
    while animated.is_playing() {
        let tick = rx.recv_timeout(WAIT).expect("ticker should fire");
        animated.tick(tick);
    }
    assert!(animated.stepper().is_at_end());

    // Playing again from the end starts over
    animated.play(&tx);
    assert_eq!(animated.stepper().position(), 0);
    animated.pause();
    assert!(!animated.is_playing());
}

#[test]
fn test_reset_drops_stale_ticks() {
    let (tx, rx) = mpsc::channel();
    let lesson = dangling_pointer();
    let mut animated = AnimatedStepper::new(
        4,
        Stepper::new(lesson.stages, lesson.mode),
        Duration::from_millis(5),
    );

    animated.play(&tx);
    let tick = rx.recv_timeout(WAIT).expect("ticker should fire");
    assert!(animated.tick(tick));
    assert_eq!(animated.stepper().position(), 1);

    animated.reset();
    assert!(!animated.is_playing());
    assert_eq!(animated.stepper().position(), 0);

    // A tick queued before the reset must not revive the old run
    assert!(!animated.tick(tick));
    while let Ok(late) = rx.try_recv() {
        assert!(!animated.tick(late));
    }
    assert_eq!(animated.stepper().position(), 0);
}

#[test]
fn test_ticks_for_other_widgets_are_ignored() {
    let lesson = variable_lifecycle();
    let mut animated = AnimatedStepper::new(
        5,
        Stepper::new(lesson.stages, lesson.mode),
        Duration::from_millis(5),
    );
    let (tx, _rx) = mpsc::channel();
    animated.play(&tx);

    let foreign = Tick {
        source: 6,
        generation: animated.generation(),
    };
    assert!(!animated.tick(foreign));
    assert_eq!(animated.stepper().position(), 0);
}

#[test]
fn test_cyclic_playback_keeps_running() {
    let (tx, rx) = mpsc::channel();
    let lesson = indirection();
    let mut animated = AnimatedStepper::new(
        2,
        Stepper::new(lesson.stages, lesson.mode),
        Duration::from_millis(5),
    );

    animated.play(&tx);
    for _ in 0..5 {
        let tick = rx.recv_timeout(WAIT).expect("ticker should fire");
        animated.tick(tick);
    }
    assert!(animated.is_playing());
    // Five steps around a four-stage cycle
    assert_eq!(animated.stepper().position(), 1);
}

#[test]
fn test_manual_step_pauses_playback() {
    let (tx, _rx) = mpsc::channel();
    let lesson = variable_lifecycle();
    let mut animated = AnimatedStepper::new(
        8,
        Stepper::new(lesson.stages, lesson.mode),
        Duration::from_millis(50),
    );

    animated.play(&tx);
    assert!(animated.advance());
    assert!(!animated.is_playing());
    assert_eq!(animated.stepper().position(), 1);
}
