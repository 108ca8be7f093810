//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into four layers:
//!
//! - **[`app`]**: application state, keyboard event loop, tab switching, timer tick dispatch
//! - **[`widgets`]**: per-widget state (format inputs, steppers, heap, layout preset)
//! - **[`panes`]**: stateless render functions, one per widget, plus tabs and status bar
//! - **[`theme`]**: color palette and the variant table every pane draws with
//!
//! The entry point for consumers is [`App`]: construct it with [`Settings`] and call
//! [`App::run`] to start the event loop.
//!
//! [`Settings`]: crate::config::Settings
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod theme;
pub mod widgets;

pub use app::App;
