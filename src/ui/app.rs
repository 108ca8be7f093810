//! Main TUI application state and logic

use super::widgets::{
    ArrayDemo, ArrayWidget, FormatWidget, HeapWidget, LayoutWidget, LessonWidget,
    RecursionWidget, ScanfWidget,
};
use crate::config::{Settings, WidgetKind};
use crate::stepper::lessons;
use crate::stepper::timer::Tick;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use rustc_hash::FxHashMap;
use std::io;
use std::sync::mpsc::{self, Receiver, Sender};
use std::time::Duration;

/// Position and playback state shown in the status bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub position: usize,
    pub total: usize,
    pub is_playing: bool,
}

/// The main application state
pub struct App {
    /// Currently shown widget
    pub current: WidgetKind,

    pub format: FormatWidget,
    pub scanf: ScanfWidget,
    pub lessons: FxHashMap<WidgetKind, LessonWidget>,
    pub arrays: FxHashMap<WidgetKind, ArrayWidget>,
    pub recursion: RecursionWidget,
    pub heap: HeapWidget,
    pub layout: LayoutWidget,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    tick_sender: Sender<Tick>,
    tick_receiver: Receiver<Tick>,
}

impl App {
    /// Create the app with every widget in its initial state
    pub fn new(settings: &Settings) -> Self {
        let (tick_sender, tick_receiver) = mpsc::channel();

        let mut lesson_widgets = FxHashMap::default();
        for (kind, lesson) in [
            (WidgetKind::Lifecycle, lessons::variable_lifecycle()),
            (WidgetKind::Dangling, lessons::dangling_pointer()),
            (WidgetKind::Indirection, lessons::indirection()),
            (WidgetKind::NestedLoop, lessons::nested_loop(4)),
        ] {
            lesson_widgets.insert(kind, LessonWidget::new(kind, lesson, settings));
        }

        let mut array_widgets = FxHashMap::default();
        for (kind, demo) in [
            (WidgetKind::Search, ArrayDemo::LinearSearch),
            (WidgetKind::Sort, ArrayDemo::BubbleSort),
            (WidgetKind::Insert, ArrayDemo::Insert),
            (WidgetKind::Delete, ArrayDemo::Delete),
        ] {
            array_widgets.insert(kind, ArrayWidget::new(kind, demo, settings));
        }

        App {
            current: settings.initial_widget,
            format: FormatWidget::new(),
            scanf: ScanfWidget::new(),
            lessons: lesson_widgets,
            arrays: array_widgets,
            recursion: RecursionWidget::new(settings),
            heap: HeapWidget::new(),
            layout: LayoutWidget::default(),
            should_quit: false,
            status_message: String::from("Ready!"),
            tick_sender,
            tick_receiver,
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.drain_ticks();

            // Poll with a timeout so timer ticks get drawn promptly
            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        self.stop_all();
        Ok(())
    }

    /// Deliver every pending timer tick to its widget
    pub fn drain_ticks(&mut self) {
        while let Ok(tick) = self.tick_receiver.try_recv() {
            self.dispatch_tick(tick);
        }
    }

    fn dispatch_tick(&mut self, tick: Tick) {
        let Some(&kind) = WidgetKind::ALL.get(tick.source as usize) else {
            return;
        };
        if let Some(widget) = self.lessons.get_mut(&kind) {
            widget.stepper.tick(tick);
        } else if let Some(widget) = self.arrays.get_mut(&kind) {
            widget.stepper.tick(tick);
        } else if kind == WidgetKind::Recursion {
            self.recursion.stepper.tick(tick);
        }
    }

    /// Stop every running timer
    pub fn stop_all(&mut self) {
        for widget in self.lessons.values_mut() {
            widget.stepper.pause();
        }
        for widget in self.arrays.values_mut() {
            widget.stepper.pause();
        }
        self.recursion.stepper.pause();
    }

    /// Step position of the current widget, if it is a stepped one
    pub fn progress(&self) -> Option<Progress> {
        let (position, total, is_playing) = if let Some(w) = self.lessons.get(&self.current) {
            (
                w.stepper.stepper().position(),
                w.stepper.stepper().len(),
                w.stepper.is_playing(),
            )
        } else if let Some(w) = self.arrays.get(&self.current) {
            (
                w.stepper.stepper().position(),
                w.stepper.stepper().len(),
                w.stepper.is_playing(),
            )
        } else if self.current == WidgetKind::Recursion {
            (
                self.recursion.stepper.stepper().position(),
                self.recursion.stepper.stepper().len(),
                self.recursion.stepper.is_playing(),
            )
        } else {
            return None;
        };
        Some(Progress {
            position,
            total,
            is_playing,
        })
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Tab bar, widget, status bar
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(size);

        super::panes::render_tabs(frame, chunks[0], self.current);

        let area = chunks[1];
        match self.current {
            WidgetKind::Format => super::panes::render_format_pane(frame, area, &self.format),
            WidgetKind::Scanf => super::panes::render_scanf_pane(frame, area, &self.scanf),
            WidgetKind::Recursion => {
                super::panes::render_recursion_pane(frame, area, &self.recursion)
            }
            WidgetKind::Heap => super::panes::render_heap_pane(frame, area, &self.heap),
            WidgetKind::Layout => super::panes::render_layout_pane(frame, area, &self.layout),
            kind => {
                if let Some(widget) = self.lessons.get(&kind) {
                    super::panes::render_lesson_pane(frame, area, widget);
                } else if let Some(widget) = self.arrays.get(&kind) {
                    super::panes::render_array_pane(frame, area, widget);
                }
            }
        }

        super::panes::render_status_bar(
            frame,
            chunks[2],
            &self.status_message,
            self.progress(),
            self.current,
        );
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        // Keys common to every widget
        match key.code {
            KeyCode::Esc => {
                self.should_quit = true;
                return;
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
                return;
            }
            KeyCode::Tab => {
                self.switch_to(self.current.index() + 1);
                return;
            }
            KeyCode::BackTab => {
                self.switch_to(self.current.index() + WidgetKind::ALL.len() - 1);
                return;
            }
            _ => {}
        }

        match self.current {
            WidgetKind::Format => self.handle_format_key(key),
            WidgetKind::Scanf => self.handle_scanf_key(key),
            WidgetKind::Heap => self.handle_heap_key(key),
            WidgetKind::Layout => self.handle_layout_key(key),
            _ => self.handle_stepper_key(key),
        }
    }

    /// Leaving a tab stops its animation, as the widget is no longer on screen
    fn switch_to(&mut self, index: usize) {
        self.stop_all();
        self.current = WidgetKind::ALL[index % WidgetKind::ALL.len()];
        self.status_message = format!("{} widget", self.current.title());
    }

    fn handle_format_key(&mut self, key: KeyEvent) {
        let widget = &mut self.format;
        match key.code {
            KeyCode::Up => widget.widen(),
            KeyCode::Down => widget.narrow(),
            KeyCode::Right => widget.more_precision(),
            KeyCode::Left => widget.less_precision(),
            KeyCode::F(1) => widget.cycle_kind(),
            KeyCode::F(2) => widget.toggle_left(),
            KeyCode::F(5) => widget.reset(),
            KeyCode::Backspace => widget.backspace(),
            KeyCode::Char(c) => widget.push(c),
            _ => return,
        }
        self.status_message = format!("directive {}", self.format.spec.directive());
    }

    fn handle_scanf_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::F(1) => self.scanf.next_preset(),
            KeyCode::Backspace => self.scanf.backspace(),
            KeyCode::Char(c) => self.scanf.push(c),
            _ => return,
        }
        self.status_message = format!("scanf returned {}", self.scanf.result().assigned());
    }

    fn handle_heap_key(&mut self, key: KeyEvent) {
        let widget = &mut self.heap;
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('a') => widget.allocate(),
            KeyCode::Char('f') => widget.free_selected(),
            KeyCode::Char('x') => widget.free_again(),
            KeyCode::Char('r') => widget.grow_selected(),
            KeyCode::Char('s') => widget.cycle_size(),
            KeyCode::Char('c') | KeyCode::Backspace => widget.reset(),
            KeyCode::Down => widget.select_next(),
            KeyCode::Up => widget.select_prev(),
            _ => {}
        }
        self.status_message = self.heap.message.clone();
    }

    fn handle_layout_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Down | KeyCode::Right => self.layout.next(),
            KeyCode::Up | KeyCode::Left => self.layout.prev(),
            _ => {}
        }
    }

    fn handle_stepper_key(&mut self, key: KeyEvent) {
        let sender = self.tick_sender.clone();
        let kind = self.current;

        if key.code == KeyCode::Char('q') {
            self.should_quit = true;
            return;
        }

        // Parameter keys only exist on the array and recursion widgets
        match key.code {
            KeyCode::Up | KeyCode::Down => {
                let delta = if key.code == KeyCode::Up { 1 } else { -1 };
                if let Some(widget) = self.arrays.get_mut(&kind) {
                    widget.adjust(delta);
                    self.status_message = format!("{}: parameter {}", widget.demo.title(), widget.param);
                } else if kind == WidgetKind::Recursion {
                    self.recursion.adjust(delta as i32);
                    self.status_message = format!("factorial({})", self.recursion.n);
                }
                return;
            }
            KeyCode::Char('b') => {
                if let Some(widget) = self.arrays.get_mut(&kind) {
                    widget.toggle_search();
                    self.status_message = widget.demo.title().to_string();
                }
                return;
            }
            _ => {}
        }

        let message = if let Some(widget) = self.lessons.get_mut(&kind) {
            drive(&mut widget.stepper, key.code, &sender)
        } else if let Some(widget) = self.arrays.get_mut(&kind) {
            drive(&mut widget.stepper, key.code, &sender)
        } else if kind == WidgetKind::Recursion {
            drive(&mut self.recursion.stepper, key.code, &sender)
        } else {
            None
        };

        if let Some(message) = message {
            self.status_message = message;
        }
    }
}

/// Apply a navigation key to an animated stepper; returns the status message
fn drive<S>(
    stepper: &mut crate::stepper::animated::AnimatedStepper<S>,
    code: KeyCode,
    sender: &Sender<Tick>,
) -> Option<String> {
    let message = match code {
        KeyCode::Right => {
            if stepper.advance() {
                "Stepped forward"
            } else {
                "Already at the last step"
            }
        }
        KeyCode::Left => {
            if stepper.retreat() {
                "Stepped backward"
            } else {
                "Already at the first step"
            }
        }
        KeyCode::Char(' ') => {
            stepper.toggle(sender);
            if stepper.is_playing() {
                "Playing..."
            } else {
                "Paused"
            }
        }
        KeyCode::Enter => {
            stepper.jump_to_end();
            "Jumped to end"
        }
        KeyCode::Backspace | KeyCode::Char('r') => {
            stepper.reset();
            "Reset"
        }
        _ => return None,
    };
    Some(message.to_string())
}
