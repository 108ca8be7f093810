//! Tab bar and status bar rendering

use crate::config::WidgetKind;
use crate::ui::app::Progress;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

/// Render the widget tabs at the top
pub fn render_tabs(frame: &mut Frame, area: Rect, current: WidgetKind) {
    let titles: Vec<&str> = WidgetKind::ALL.iter().map(|k| k.title()).collect();
    let tabs = Tabs::new(titles)
        .select(current.index())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(DEFAULT_THEME.border_normal))
                .title(" C lectures "),
        )
        .style(Style::default().fg(DEFAULT_THEME.comment))
        .highlight_style(
            Style::default()
                .fg(DEFAULT_THEME.border_focused)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(tabs, area);
}

fn bar(fg: Color) -> Style {
    Style::default().bg(DEFAULT_THEME.current_line_bg).fg(fg)
}

/// Black bold text on a colored background
fn badge(text: String, bg: Color) -> Span<'static> {
    Span::styled(
        text,
        Style::default()
            .bg(bg)
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD),
    )
}

/// Render the status bar at the bottom
///
/// Stepped widgets show their position and a playback badge; the others show their
/// title in the same slot.
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    message: &str,
    progress: Option<Progress>,
    current: WidgetKind,
) {
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let position = match progress {
        Some(p) if p.total > 0 => format!(" Step {}/{} ", p.position + 1, p.total),
        Some(_) => " Step -/- ".to_string(),
        None => format!(" {} ", current.title()),
    };
    let left = Line::from(vec![
        badge(position, DEFAULT_THEME.primary),
        Span::styled(" | ", bar(DEFAULT_THEME.comment)),
        Span::styled(format!(" {} ", message), bar(DEFAULT_THEME.fg)),
    ]);
    frame.render_widget(
        Paragraph::new(left)
            .style(bar(DEFAULT_THEME.fg))
            .alignment(Alignment::Left),
        halves[0],
    );

    let key = Style::default().bg(DEFAULT_THEME.comment).fg(Color::Black);
    let mut right = vec![
        Span::styled(" ⇥ ", key),
        Span::styled(" widget ", bar(DEFAULT_THEME.fg)),
        Span::styled("│ ", bar(DEFAULT_THEME.comment)),
        Span::styled(" esc ", key),
        Span::styled(" quit ", bar(DEFAULT_THEME.fg)),
    ];

    let state = progress.and_then(|p| {
        if p.is_playing {
            Some((" ▶ PLAYING ", DEFAULT_THEME.secondary))
        } else if p.total > 0 && p.position + 1 >= p.total {
            Some((" END ", DEFAULT_THEME.error))
        } else if p.position == 0 {
            Some((" START ", DEFAULT_THEME.success))
        } else {
            None
        }
    });
    if let Some((text, color)) = state {
        right.push(Span::styled("│", bar(DEFAULT_THEME.comment)));
        right.push(badge(text.to_string(), color));
    }

    frame.render_widget(
        Paragraph::new(Line::from(right))
            .style(bar(DEFAULT_THEME.fg))
            .alignment(Alignment::Right),
        halves[1],
    );
}
