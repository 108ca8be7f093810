//! printf and scanf playground panes

use super::{hint_line, pane_block};
use crate::format::scanf::ScanStatus;
use crate::format::{FormatKind, RawValue};
use crate::ui::theme::{Variant, DEFAULT_THEME};
use crate::ui::widgets::{FormatWidget, ScanfWidget};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

/// Render the printf playground
pub fn render_format_pane(frame: &mut Frame, area: Rect, widget: &FormatWidget) {
    let output = widget.output();
    let (code, printed) = widget.call_preview();
    let spec = &widget.spec;

    let label = Style::default().fg(DEFAULT_THEME.comment);
    let kind = match spec.kind {
        FormatKind::Integer => "integer (%d)",
        FormatKind::Float => "float (%f)",
        FormatKind::String => "string (%s)",
    };
    let precision = match spec.precision {
        Some(p) if spec.kind != FormatKind::Integer => p.to_string(),
        Some(_) => "ignored for integers".to_string(),
        None => "none".to_string(),
    };

    // Dots make the padding visible
    let visible: String = output
        .text
        .chars()
        .map(|c| if c == ' ' { '·' } else { c })
        .collect();

    let lines = vec![
        Line::from(vec![
            Span::styled("value      ", label),
            Span::styled(
                format!("{}▏", widget.input),
                Style::default().fg(DEFAULT_THEME.string),
            ),
        ]),
        Line::from(vec![
            Span::styled("kind       ", label),
            Span::styled(kind, Style::default().fg(DEFAULT_THEME.type_name)),
        ]),
        Line::from(vec![
            Span::styled("width      ", label),
            Span::styled(spec.width.to_string(), Style::default().fg(DEFAULT_THEME.number)),
        ]),
        Line::from(vec![
            Span::styled("precision  ", label),
            Span::styled(precision, Style::default().fg(DEFAULT_THEME.number)),
        ]),
        Line::from(vec![
            Span::styled("justify    ", label),
            Span::raw(if spec.left_justify { "left (-)" } else { "right" }),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("directive  ", label),
            Span::styled(output.directive.clone(), Variant::Info.style()),
        ]),
        Line::from(vec![
            Span::styled("output     ", label),
            Span::styled(format!("[{}]", visible), Variant::Success.style()),
            Span::styled(
                format!("  {} chars", output.text.chars().count()),
                label,
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled(code, Style::default().fg(DEFAULT_THEME.function))),
        Line::from(Span::styled(
            printed,
            Style::default().fg(DEFAULT_THEME.fg).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        hint_line(&[
            ("type", "value"),
            ("↑/↓", "width"),
            ("←/→", "precision"),
            ("F1", "kind"),
            ("F2", "justify"),
            ("F5", "reset"),
        ]),
    ];

    let paragraph = Paragraph::new(lines)
        .block(pane_block("printf"))
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

/// Render the scanf playground
pub fn render_scanf_pane(frame: &mut Frame, area: Rect, widget: &ScanfWidget) {
    let result = widget.result();
    let label = Style::default().fg(DEFAULT_THEME.comment);

    let mut lines = vec![
        Line::from(vec![
            Span::styled("call       ", label),
            Span::styled(
                format!("scanf(\"{}\", ...);", widget.template()),
                Style::default().fg(DEFAULT_THEME.function),
            ),
        ]),
        Line::from(vec![
            Span::styled("input      ", label),
            Span::styled(
                format!("{}▏", widget.input),
                Style::default().fg(DEFAULT_THEME.string),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("returns    ", label),
            Span::styled(result.assigned().to_string(), Variant::Info.style()),
        ]),
    ];

    for (i, value) in result.values.iter().enumerate() {
        let (ty, text) = match value {
            RawValue::Int(n) => ("int", n.to_string()),
            RawValue::Float(f) => ("float", format!("{:.6}", f)),
            RawValue::Text(s) => ("char[]", format!("\"{}\"", s)),
        };
        lines.push(Line::from(vec![
            Span::styled(format!("  arg {}    ", i + 1), label),
            Span::styled(format!("{:<7}", ty), Style::default().fg(DEFAULT_THEME.type_name)),
            Span::styled(text, Variant::Success.style()),
        ]));
    }

    let status = match result.status {
        ScanStatus::Complete => Span::styled("all conversions matched", Variant::Success.style()),
        ScanStatus::MatchingFailure { position } => Span::styled(
            format!("stopped: input does not match at column {}", position + 1),
            Variant::Danger.style(),
        ),
        ScanStatus::InputExhausted => {
            Span::styled("stopped: input ended early", Variant::Warning.style())
        }
    };
    lines.push(Line::from(""));
    lines.push(Line::from(status));
    lines.push(Line::from(""));
    lines.push(hint_line(&[("type", "input"), ("F1", "next template")]));

    let paragraph = Paragraph::new(lines)
        .block(pane_block("scanf"))
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}
