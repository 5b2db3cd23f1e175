//! Tape pane rendering
//!
//! One row per cell: index, decimal value, and the printable character the
//! value encodes. The cell under the data pointer is marked and kept in view
//! while stepping; manual scrolling moves the window freely until the pointer
//! would leave it.

use crate::memory::output::value_to_char;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

/// Printable form of a cell value, if it has one
fn printable(value: i32) -> Option<char> {
    let c = value_to_char(value);
    (c != char::REPLACEMENT_CHARACTER && !c.is_control()).then_some(c)
}

/// Adjust `offset` so `pointer` is inside a window of `height` rows
fn follow_pointer(offset: usize, pointer: usize, height: usize, total: usize) -> usize {
    let mut offset = offset;
    if pointer < offset {
        offset = pointer;
    } else if pointer >= offset + height {
        offset = pointer + 1 - height;
    }
    offset.min(total.saturating_sub(height))
}

/// Render the tape pane
pub fn render_tape_pane(
    frame: &mut Frame,
    area: Rect,
    cells: &[i32],
    data_pointer: usize,
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
        .title(format!(" Tape ({} cells) ", cells.len()))
        .borders(Borders::ALL)
        .border_style(border_style);

    let visible_height = area.height.saturating_sub(2).max(1) as usize;
    *scroll_offset = follow_pointer(*scroll_offset, data_pointer, visible_height, cells.len());

    let items: Vec<ListItem> = cells
        .iter()
        .enumerate()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(|(idx, &value)| {
            let is_pointer = idx == data_pointer;

            let marker = if is_pointer {
                Span::styled(
                    "▶ ",
                    Style::default()
                        .fg(DEFAULT_THEME.pointer_cell)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                Span::raw("  ")
            };

            let index_style = if is_pointer {
                Style::default()
                    .fg(DEFAULT_THEME.pointer_cell)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(DEFAULT_THEME.comment)
            };

            let value_style = match (is_pointer, value) {
                (true, _) => Style::default()
                    .bg(DEFAULT_THEME.pointer_cell)
                    .fg(Color::Black)
                    .add_modifier(Modifier::BOLD),
                (false, 0) => Style::default().fg(DEFAULT_THEME.comment),
                (false, _) => Style::default().fg(DEFAULT_THEME.fg),
            };

            let mut spans = vec![
                marker,
                Span::styled(format!("{:>5} ", idx), index_style),
                Span::styled(format!(" {:>11} ", value), value_style),
            ];

            if let Some(c) = printable(value).filter(|_| value != 0) {
                spans.push(Span::styled(
                    format!(" '{}'", c),
                    Style::default().fg(DEFAULT_THEME.io),
                ));
            }

            ListItem::new(Line::from(spans))
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_follow_pointer() {
        // already visible
        assert_eq!(follow_pointer(0, 3, 10, 100), 0);
        // below the window
        assert_eq!(follow_pointer(0, 15, 10, 100), 6);
        // above the window
        assert_eq!(follow_pointer(20, 5, 10, 100), 5);
        // never past the last page
        assert_eq!(follow_pointer(95, 99, 10, 100), 90);
    }

    #[test]
    fn test_printable() {
        assert_eq!(printable(65), Some('A'));
        assert_eq!(printable(10), None);
        assert_eq!(printable(-3), None);
    }
}
