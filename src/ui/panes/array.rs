//! Algorithm visualizer and recursion panes

use super::{hint_line, pane_block};
use crate::ui::theme::{role_variant, Variant, DEFAULT_THEME};
use crate::ui::widgets::{ArrayDemo, ArrayWidget, RecursionWidget};
use crate::visualizer::{Frame as TraceFrame, Outcome};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

const CELL_WIDTH: usize = 6;

/// Render an array visualizer
pub fn render_array_pane(frame: &mut Frame, area: Rect, widget: &ArrayWidget) {
    let stepper = widget.stepper.stepper();
    let label = Style::default().fg(DEFAULT_THEME.comment);

    let seed = widget.seed();
    let parameter = match widget.demo {
        ArrayDemo::LinearSearch | ArrayDemo::BinarySearch => format!("target = {}", widget.param),
        ArrayDemo::BubbleSort => String::new(),
        ArrayDemo::Insert => format!("pos = {}, value = {}", widget.param, widget.value),
        ArrayDemo::Delete => format!("pos = {}", widget.param),
    };

    let mut lines = vec![
        Line::from(vec![
            Span::styled("arr[] = ", label),
            Span::styled(format!("{:?}", seed), Style::default().fg(DEFAULT_THEME.number)),
            Span::styled(format!("   {}", parameter), Variant::Info.style()),
        ]),
        Line::from(""),
    ];

    match stepper.current() {
        Some(current) => {
            lines.push(cells_line(current));
            lines.push(index_line(current.cells.len()));
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                current.note.clone(),
                Style::default().fg(DEFAULT_THEME.fg),
            )));
        }
        None => {
            lines.push(Line::from(Span::styled("(no steps)", label)));
        }
    }

    lines.push(Line::from(""));
    if let Some(message) = widget.visible_outcome() {
        let variant = match widget.outcome {
            Outcome::InvalidPosition { .. } => Variant::Danger,
            Outcome::NotFound => Variant::Warning,
            _ => Variant::Success,
        };
        lines.push(Line::from(Span::styled(message, variant.style())));
    } else {
        lines.push(Line::from(Span::styled(
            format!("step {}/{}", stepper.position() + 1, stepper.len()),
            label,
        )));
    }

    lines.push(Line::from(""));
    let mut hints = vec![("←/→", "step"), ("⎵", "play"), ("↵", "end"), ("r", "reset")];
    match widget.demo {
        ArrayDemo::LinearSearch | ArrayDemo::BinarySearch => {
            hints.push(("↑/↓", "target"));
            hints.push(("b", "linear/binary"));
        }
        ArrayDemo::Insert | ArrayDemo::Delete => hints.push(("↑/↓", "position")),
        ArrayDemo::BubbleSort => {}
    }
    lines.push(hint_line(&hints));

    let paragraph = Paragraph::new(lines)
        .block(pane_block(widget.demo.title()))
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

/// One boxed, colored cell per element
fn cells_line(current: &TraceFrame) -> Line<'static> {
    let spans: Vec<Span> = current
        .cells
        .iter()
        .map(|cell| {
            Span::styled(
                format!("[{:^w$}]", cell.value, w = CELL_WIDTH - 2),
                role_variant(cell.role).style(),
            )
        })
        .collect();
    Line::from(spans)
}

fn index_line(len: usize) -> Line<'static> {
    let text: String = (0..len)
        .map(|i| format!("{:^w$}", i, w = CELL_WIDTH))
        .collect();
    Line::from(Span::styled(text, Style::default().fg(DEFAULT_THEME.comment)))
}

/// Render the factorial call stack, innermost frame on top
pub fn render_recursion_pane(frame: &mut Frame, area: Rect, widget: &RecursionWidget) {
    let stepper = widget.stepper.stepper();
    let label = Style::default().fg(DEFAULT_THEME.comment);

    let mut lines = vec![
        Line::from(Span::styled(
            format!("int result = factorial({});", widget.n),
            Style::default().fg(DEFAULT_THEME.function),
        )),
        Line::from(""),
    ];

    if let Some(current) = stepper.current() {
        let depth = current.stack.depth();
        for (i, stack_frame) in current.stack.frames().iter().enumerate().rev() {
            let is_top = i + 1 == depth;
            let name_style = if is_top {
                Style::default()
                    .fg(DEFAULT_THEME.function)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(DEFAULT_THEME.comment)
            };
            let locals: Vec<String> = stack_frame
                .locals
                .iter()
                .map(|v| format!("{} = {}", v.name, v.value))
                .collect();

            let mut spans = vec![
                Span::styled(format!("0x{:08x} ", stack_frame.address), label),
                Span::styled(format!("{:<10}", stack_frame.function_name), name_style),
                Span::styled(locals.join(", "), Style::default().fg(DEFAULT_THEME.number)),
            ];
            if let Some(value) = stack_frame.return_value {
                spans.push(Span::styled(
                    format!("  → returns {}", value),
                    Variant::Accent.style(),
                ));
            }
            lines.push(Line::from(spans));
        }
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            current.note.clone(),
            Style::default().fg(DEFAULT_THEME.fg),
        )));
    }

    lines.push(Line::from(Span::styled(
        format!("step {}/{}", stepper.position() + 1, stepper.len()),
        label,
    )));
    lines.push(Line::from(""));
    lines.push(hint_line(&[
        ("←/→", "step"),
        ("⎵", "play"),
        ("↵", "end"),
        ("r", "reset"),
        ("↑/↓", "n"),
    ]));

    let paragraph = Paragraph::new(lines)
        .block(pane_block("Recursion"))
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}
