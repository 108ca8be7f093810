//! Heap and struct layout panes
//!
//! The heap pane draws every live block and the gaps between them, in address
//! order, with the selected block marked. The layout pane draws the byte grid of a
//! struct or union with padding bytes shown separately.

use super::{hint_line, pane_block};
use crate::memory::layout::ByteUse;
use crate::ui::theme::{Variant, DEFAULT_THEME};
use crate::ui::widgets::{HeapWidget, LayoutWidget};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

/// Render the heap playground
pub fn render_heap_pane(frame: &mut Frame, area: Rect, widget: &HeapWidget) {
    let heap = &widget.heap;
    let label = Style::default().fg(DEFAULT_THEME.comment);
    let selected = widget.selected_id();

    let mut lines = vec![
        Line::from(vec![
            Span::styled("blocks ", label),
            Span::styled(
                format!("{}/{}", heap.len(), heap.cap()),
                Style::default().fg(DEFAULT_THEME.number),
            ),
            Span::styled("   in use ", label),
            Span::styled(
                format!("{} bytes", heap.total_bytes()),
                Style::default().fg(DEFAULT_THEME.number),
            ),
            Span::styled("   next malloc ", label),
            Span::styled(
                format!("{} bytes", widget.request_size),
                Variant::Info.style(),
            ),
        ]),
        Line::from(""),
    ];

    let segments = heap.segments();
    if segments.is_empty() {
        lines.push(Line::from(Span::styled("(no allocations)", label)));
    }

    for segment in segments {
        let addr = Span::styled(format!("0x{:08x} ", segment.address), label);
        match segment.id.and_then(|id| heap.get(id)) {
            Some(block) if segment.occupied => {
                let is_selected = Some(block.id) == selected;
                let marker = if is_selected { "▶ " } else { "  " };
                let body = Style::default()
                    .fg(DEFAULT_THEME.success)
                    .add_modifier(if is_selected {
                        Modifier::BOLD | Modifier::REVERSED
                    } else {
                        Modifier::empty()
                    });
                lines.push(Line::from(vec![
                    Span::styled(marker, Style::default().fg(DEFAULT_THEME.secondary)),
                    addr,
                    Span::styled(
                        format!("[{} {:>3} B {}]", block.id, block.size, block.tag),
                        body,
                    ),
                ]));
            }
            _ => {
                lines.push(Line::from(vec![
                    Span::raw("  "),
                    addr,
                    Span::styled(format!("[ free {:>3} B ]", segment.size), Variant::Muted.style()),
                ]));
            }
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        widget.message.clone(),
        Style::default().fg(DEFAULT_THEME.fg),
    )));
    lines.push(Line::from(""));
    lines.push(hint_line(&[
        ("a", "malloc"),
        ("s", "size"),
        ("f", "free"),
        ("x", "free again"),
        ("r", "realloc x2"),
        ("↑/↓", "select"),
        ("c", "clear"),
    ]));

    let paragraph = Paragraph::new(lines)
        .block(pane_block("Heap"))
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

/// Palette cycled through for the members of a layout
const FIELD_VARIANTS: [Variant; 4] = [
    Variant::Info,
    Variant::Success,
    Variant::Accent,
    Variant::Warning,
];

/// Render the struct layout explorer
pub fn render_layout_pane(frame: &mut Frame, area: Rect, widget: &LayoutWidget) {
    let (preset, layout) = widget.current();
    let label = Style::default().fg(DEFAULT_THEME.comment);

    let mut lines = vec![Line::from(Span::styled(
        format!("{} {{", preset.declaration),
        Style::default().fg(DEFAULT_THEME.type_name),
    ))];
    for (i, field) in layout.fields.iter().enumerate() {
        let variant = FIELD_VARIANTS[i % FIELD_VARIANTS.len()];
        lines.push(Line::from(vec![
            Span::styled(format!("    {} {};", field.ty, field.name), variant.style()),
            Span::styled(
                format!(
                    "   offset {:>2}, size {:>2}, padding before {}",
                    field.offset, field.size, field.padding_before
                ),
                label,
            ),
        ]));
    }
    lines.push(Line::from(Span::styled(
        "};",
        Style::default().fg(DEFAULT_THEME.type_name),
    )));
    lines.push(Line::from(""));

    // Byte grid, 8 bytes per row
    let bytes = layout.byte_map();
    for (row, chunk) in bytes.chunks(8).enumerate() {
        let mut spans = vec![Span::styled(format!("{:>3} ", row * 8), label)];
        for byte in chunk {
            let span = match byte {
                ByteUse::Field(i) => {
                    let name = &layout.fields[*i].name;
                    let initial = name.chars().next().unwrap_or('?');
                    Span::styled(
                        format!("[{}]", initial),
                        FIELD_VARIANTS[i % FIELD_VARIANTS.len()].style(),
                    )
                }
                ByteUse::Padding => Span::styled("[·]", Variant::Muted.style()),
            };
            spans.push(span);
        }
        lines.push(Line::from(spans));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("sizeof = ", label),
        Span::styled(layout.size.to_string(), Variant::Info.style()),
        Span::styled("   alignment = ", label),
        Span::styled(layout.align.to_string(), Style::default().fg(DEFAULT_THEME.number)),
        Span::styled("   padding = ", label),
        Span::styled(layout.padding().to_string(), Variant::Danger.style()),
    ]));
    lines.push(Line::from(""));
    lines.push(hint_line(&[("↑/↓", "declaration")]));

    let paragraph = Paragraph::new(lines)
        .block(pane_block("Struct layout"))
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}
