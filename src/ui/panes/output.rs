//! Output pane rendering

use crate::memory::output::value_to_char;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Padding, Paragraph},
    Frame,
};

/// Build the rows shown in the output pane: the character view first, then
/// each emitted decimal, then the memory dump once the run has halted.
fn output_lines<'a>(values: &[i32], memory_dump: Option<&[i32]>) -> Vec<Line<'a>> {
    let mut lines = Vec::new();

    let text: String = values
        .iter()
        .map(|&v| match value_to_char(v) {
            '\n' => '⏎',
            c if c.is_control() => '·',
            c => c,
        })
        .collect();
    lines.push(Line::from(vec![
        Span::styled("text ", Style::default().fg(DEFAULT_THEME.comment)),
        Span::styled(text, Style::default().fg(DEFAULT_THEME.io)),
    ]));

    for value in values {
        lines.push(Line::styled(
            value.to_string(),
            Style::default().fg(DEFAULT_THEME.fg),
        ));
    }

    if let Some(dump) = memory_dump {
        // Trailing zero cells are summarized rather than listed
        let used = dump.iter().rposition(|&v| v != 0).map_or(0, |i| i + 1);
        lines.push(Line::styled(
            "Memory:",
            Style::default()
                .fg(DEFAULT_THEME.halt)
                .add_modifier(Modifier::BOLD),
        ));
        let cells: Vec<String> = dump[..used].iter().map(|v| v.to_string()).collect();
        let mut summary = cells.join("; ");
        if used < dump.len() {
            if !summary.is_empty() {
                summary.push_str("; ");
            }
            summary.push_str(&format!("0 × {}", dump.len() - used));
        }
        lines.push(Line::styled(summary, Style::default().fg(DEFAULT_THEME.fg)));
    }

    lines
}

/// Render the output pane
pub fn render_output_pane(
    frame: &mut Frame,
    area: Rect,
    values: &[i32],
    memory_dump: Option<&[i32]>,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let block = Block::default()
        .title(" Output ")
        .borders(Borders::ALL)
        .border_style(border_style);

    if values.is_empty() && memory_dump.is_none() {
        let paragraph = Paragraph::new("(no output)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let block = block.padding(Padding::new(1, 0, 0, 0));
    let all_items: Vec<ListItem> = output_lines(values, memory_dump)
        .into_iter()
        .map(ListItem::new)
        .collect();

    let total_items = all_items.len();
    let visible_height = area.height.saturating_sub(2).max(1) as usize; // Account for borders, min 1

    // Clamp scroll offset only if content exceeds visible area
    if total_items > visible_height {
        let max_scroll = total_items - visible_height;
        *scroll_offset = (*scroll_offset).min(max_scroll);
    } else {
        *scroll_offset = 0;
    }

    let visible_items: Vec<ListItem> = all_items
        .into_iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .collect();

    frame.render_widget(List::new(visible_items).block(block), area);
}
