//! TUI pane rendering modules
//!
//! Every widget is drawn by a stateless `render_*` function that only reads the
//! widget's state.
//!
//! # Pane Modules
//!
//! - [`format`]: printf and scanf playgrounds
//! - [`lesson`]: code walk-through demos (lifecycle, pointers, loops)
//! - [`array`]: algorithm visualizers and the recursion call stack
//! - [`memory`]: heap blocks and struct layout
//! - [`status`]: tab bar and status bar

pub mod array;
pub mod format;
pub mod lesson;
pub mod memory;
pub mod status;

pub use array::{render_array_pane, render_recursion_pane};
pub use format::{render_format_pane, render_scanf_pane};
pub use lesson::render_lesson_pane;
pub use memory::{render_heap_pane, render_layout_pane};
pub use status::{render_status_bar, render_tabs};

use super::theme::{border_style, DEFAULT_THEME};
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders},
};

/// Bordered pane block with a title
pub(crate) fn pane_block(title: &str) -> Block<'static> {
    Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(border_style(true))
}

/// Dimmed key hint line shown at the bottom of a pane
pub(crate) fn hint_line(hints: &[(&str, &str)]) -> Line<'static> {
    let mut spans = Vec::new();
    for (key, desc) in hints {
        spans.push(Span::styled(
            format!(" {} ", key),
            Style::default()
                .fg(DEFAULT_THEME.primary)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(
            format!("{}  ", desc),
            Style::default().fg(DEFAULT_THEME.comment),
        ));
    }
    Line::from(spans)
}
