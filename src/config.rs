//! Command-line configuration for the terminal binary

use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::time::Duration;

/// The widgets hosted by the terminal application, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum WidgetKind {
    Format,
    Scanf,
    Lifecycle,
    Dangling,
    Indirection,
    NestedLoop,
    Search,
    Sort,
    Insert,
    Delete,
    Recursion,
    Heap,
    Layout,
}

impl WidgetKind {
    pub const ALL: [WidgetKind; 13] = [
        WidgetKind::Format,
        WidgetKind::Scanf,
        WidgetKind::Lifecycle,
        WidgetKind::Dangling,
        WidgetKind::Indirection,
        WidgetKind::NestedLoop,
        WidgetKind::Search,
        WidgetKind::Sort,
        WidgetKind::Insert,
        WidgetKind::Delete,
        WidgetKind::Recursion,
        WidgetKind::Heap,
        WidgetKind::Layout,
    ];

    /// Short label used in the tab bar
    pub fn title(self) -> &'static str {
        match self {
            WidgetKind::Format => "printf",
            WidgetKind::Scanf => "scanf",
            WidgetKind::Lifecycle => "Variables",
            WidgetKind::Dangling => "Dangling",
            WidgetKind::Indirection => "Indirection",
            WidgetKind::NestedLoop => "Loops",
            WidgetKind::Search => "Search",
            WidgetKind::Sort => "Sort",
            WidgetKind::Insert => "Insert",
            WidgetKind::Delete => "Delete",
            WidgetKind::Recursion => "Recursion",
            WidgetKind::Heap => "Heap",
            WidgetKind::Layout => "Struct",
        }
    }

    /// Position in [`WidgetKind::ALL`]
    pub fn index(self) -> usize {
        WidgetKind::ALL
            .iter()
            .position(|&k| k == self)
            .unwrap_or(0)
    }
}

/// Interactive C lecture widgets in the terminal
#[derive(Debug, Parser)]
#[command(name = "clecture", version, about)]
pub struct Cli {
    /// Widget shown on start-up
    #[arg(short, long, value_enum, default_value_t = WidgetKind::Format)]
    pub widget: WidgetKind,

    /// File receiving log output
    #[arg(long, default_value = "clecture.log")]
    pub log_file: PathBuf,

    /// Log filter (EnvFilter syntax); falls back to RUST_LOG
    #[arg(long)]
    pub log_level: Option<String>,

    /// Override every animation cadence with one interval in milliseconds
    #[arg(long)]
    pub tick_ms: Option<u64>,
}

/// Resolved settings handed to the application
#[derive(Debug, Clone)]
pub struct Settings {
    pub initial_widget: WidgetKind,
    pub log_file: PathBuf,
    pub log_level: Option<String>,
    pub cadence_override: Option<Duration>,
}

impl Settings {
    /// The cadence a widget should use: the override if one was given, else its own
    pub fn cadence(&self, widget_default: Duration) -> Duration {
        self.cadence_override.unwrap_or(widget_default)
    }
}

impl From<Cli> for Settings {
    fn from(cli: Cli) -> Self {
        Settings {
            initial_widget: cli.widget,
            log_file: cli.log_file,
            log_level: cli.log_level,
            // A zero interval would spin the ticker thread
            cadence_override: cli
                .tick_ms
                .filter(|&ms| ms > 0)
                .map(Duration::from_millis),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            initial_widget: WidgetKind::Format,
            log_file: PathBuf::from("clecture.log"),
            log_level: None,
            cadence_override: None,
        }
    }
}
