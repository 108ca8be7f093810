//! Code walk-through pane

use super::{hint_line, pane_block};
use crate::ui::theme::{Variant, DEFAULT_THEME};
use crate::ui::widgets::LessonWidget;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// Render a lesson: code with the current line highlighted, the variable box, the log
pub fn render_lesson_pane(frame: &mut Frame, area: Rect, widget: &LessonWidget) {
    let outer = pane_block(widget.title);
    let inner = outer.inner(area);
    frame.render_widget(outer, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(4),
            Constraint::Length(3),
            Constraint::Length(6),
            Constraint::Length(1),
        ])
        .split(inner);

    let stepper = widget.stepper.stepper();
    let position = stepper.position();

    // Code listing; identical consecutive lines (loop bodies) are shown once
    let mut items: Vec<ListItem> = Vec::new();
    let mut last_code: Option<&str> = None;
    let current_code = stepper.current().map(|s| s.code.as_str());
    for stage in stepper.stages() {
        if last_code == Some(stage.code.as_str()) {
            continue;
        }
        last_code = Some(stage.code.as_str());
        let is_current = current_code == Some(stage.code.as_str());
        let style = if is_current {
            Style::default()
                .bg(DEFAULT_THEME.current_line_bg)
                .fg(DEFAULT_THEME.fg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(DEFAULT_THEME.comment)
        };
        let marker = if is_current { "▶ " } else { "  " };
        items.push(ListItem::new(Line::from(vec![
            Span::styled(marker, Style::default().fg(DEFAULT_THEME.secondary)),
            Span::styled(stage.code.clone(), style),
        ])));
    }
    frame.render_widget(List::new(items), rows[0]);

    // Variable box
    let (name, value) = stepper
        .current()
        .map(|s| (s.name.clone(), s.value.clone().unwrap_or_else(|| "—".to_string())))
        .unwrap_or_default();
    let value_box = Paragraph::new(Line::from(vec![
        Span::styled(format!("{}  ", name), Variant::Info.style()),
        Span::styled(value, Variant::Accent.style()),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(DEFAULT_THEME.border_normal))
            .title(format!(" stage {}/{} ", position + 1, stepper.len())),
    );
    frame.render_widget(value_box, rows[1]);

    // Log, newest at the bottom
    let log = stepper.log();
    let visible = rows[2].height.saturating_sub(2) as usize;
    let log_items: Vec<ListItem> = log
        .iter()
        .skip(log.len().saturating_sub(visible))
        .map(|line| ListItem::new(*line).style(Style::default().fg(DEFAULT_THEME.fg)))
        .collect();
    let log_list = List::new(log_items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(DEFAULT_THEME.border_normal))
            .title(" log "),
    );
    frame.render_widget(log_list, rows[2]);

    frame.render_widget(
        Paragraph::new(hint_line(&[
            ("←/→", "step"),
            ("⎵", "play"),
            ("↵", "end"),
            ("r", "reset"),
        ])),
        rows[3],
    );
}
