//! Input queue pane rendering

use crate::memory::output::value_to_char;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// Render the input queue, dimming values `,` has already consumed
pub fn render_input_pane(
    frame: &mut Frame,
    area: Rect,
    values: &[i32],
    cursor: usize,
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
        .title(format!(" Input ({}/{}) ", cursor, values.len()))
        .borders(Borders::ALL)
        .border_style(border_style);

    if values.is_empty() {
        let paragraph = Paragraph::new("(no input)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let visible_height = area.height.saturating_sub(2).max(1) as usize;
    let max_scroll = values.len().saturating_sub(visible_height);
    *scroll_offset = (*scroll_offset).min(max_scroll);

    let items: Vec<ListItem> = values
        .iter()
        .enumerate()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(|(idx, &value)| {
            let style = if idx < cursor {
                Style::default()
                    .fg(DEFAULT_THEME.comment)
                    .add_modifier(Modifier::CROSSED_OUT)
            } else if idx == cursor {
                Style::default()
                    .fg(DEFAULT_THEME.success)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(DEFAULT_THEME.fg)
            };

            let marker = if idx == cursor { "▶ " } else { "  " };
            let c = value_to_char(value);
            let shown = if c.is_control() || c == char::REPLACEMENT_CHARACTER {
                String::new()
            } else {
                format!(" '{}'", c)
            };

            ListItem::new(Line::from(vec![
                Span::styled(marker, style),
                Span::styled(format!("{:>11}", value), style),
                Span::styled(shown, Style::default().fg(DEFAULT_THEME.comment)),
            ]))
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}
