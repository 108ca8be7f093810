// Tests for the application key handling and configuration

use clap::Parser;
use clecture::config::{Cli, Settings, WidgetKind};
use clecture::ui::App;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::time::Duration;

fn press(app: &mut App, code: KeyCode) {
    app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
}

fn app_on(widget: WidgetKind) -> App {
    let settings = Settings {
        initial_widget: widget,
        ..Settings::default()
    };
    App::new(&settings)
}

#[test]
fn test_tab_cycles_widgets() {
    let mut app = App::new(&Settings::default());
    assert_eq!(app.current, WidgetKind::Format);

    press(&mut app, KeyCode::Tab);
    assert_eq!(app.current, WidgetKind::Scanf);

    press(&mut app, KeyCode::BackTab);
    press(&mut app, KeyCode::BackTab);
    assert_eq!(app.current, WidgetKind::Layout);
}

#[test]
fn test_switching_tabs_stops_playback() {
    let mut app = app_on(WidgetKind::Lifecycle);
    press(&mut app, KeyCode::Char(' '));
    assert!(app.progress().is_some_and(|p| p.is_playing));

    press(&mut app, KeyCode::Tab);
    let lesson = &app.lessons[&WidgetKind::Lifecycle];
    assert!(!lesson.stepper.is_playing());
}

#[test]
fn test_enter_jumps_to_end_and_shows_outcome() {
    let mut app = app_on(WidgetKind::Search);
    let widget = &app.arrays[&WidgetKind::Search];
    assert!(widget.visible_outcome().is_none());

    press(&mut app, KeyCode::Enter);
    let widget = &app.arrays[&WidgetKind::Search];
    assert!(widget.stepper.stepper().is_at_end());
    assert_eq!(widget.visible_outcome().as_deref(), Some("Found at index 3"));
}

#[test]
fn test_invalid_insert_position_reports_immediately() {
    let mut app = app_on(WidgetKind::Insert);
    for _ in 0..5 {
        press(&mut app, KeyCode::Up);
    }
    let widget = &app.arrays[&WidgetKind::Insert];
    assert_eq!(widget.param, 7);
    assert_eq!(widget.visible_outcome().as_deref(), Some("Invalid Position!"));
}

#[test]
fn test_stepper_keys() {
    let mut app = app_on(WidgetKind::Dangling);
    press(&mut app, KeyCode::Right);
    press(&mut app, KeyCode::Right);
    assert_eq!(app.progress().map(|p| p.position), Some(2));

    press(&mut app, KeyCode::Left);
    assert_eq!(app.progress().map(|p| p.position), Some(1));

    press(&mut app, KeyCode::Char('r'));
    assert_eq!(app.progress().map(|p| p.position), Some(0));
    assert_eq!(app.status_message, "Reset");
}

#[test]
fn test_heap_keys() {
    let mut app = app_on(WidgetKind::Heap);
    press(&mut app, KeyCode::Char('a'));
    press(&mut app, KeyCode::Char('a'));
    assert_eq!(app.heap.heap.len(), 2);

    press(&mut app, KeyCode::Char('f'));
    assert_eq!(app.heap.heap.len(), 1);

    press(&mut app, KeyCode::Char('x'));
    assert_eq!(app.heap.heap.len(), 1);
    assert!(app.status_message.contains("invalid identifier"));
}

#[test]
fn test_format_keys_update_directive() {
    let mut app = App::new(&Settings::default());
    press(&mut app, KeyCode::F(2));
    assert_eq!(app.format.output().text, "3.14    ");
    assert_eq!(app.status_message, "directive %-8.2f");
}

#[test]
fn test_escape_quits() {
    let mut app = App::new(&Settings::default());
    press(&mut app, KeyCode::Esc);
    assert!(app.should_quit);
}

#[test]
fn test_cli_settings() {
    let cli = Cli::try_parse_from(["clecture", "--widget", "heap", "--tick-ms", "100"])
        .expect("valid arguments");
    let settings = Settings::from(cli);

    assert_eq!(settings.initial_widget, WidgetKind::Heap);
    assert_eq!(
        settings.cadence(Duration::from_millis(800)),
        Duration::from_millis(100)
    );

    let zero = Settings::from(Cli::try_parse_from(["clecture", "--tick-ms", "0"]).expect("valid"));
    assert_eq!(
        zero.cadence(Duration::from_millis(800)),
        Duration::from_millis(800)
    );
}
