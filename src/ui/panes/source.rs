//! Source pane rendering with command highlighting
//!
//! This module renders the program text with each command class colored,
//! the line of the current command highlighted, and the current command
//! itself shown as a block cursor.
//!
//! # Features
//!
//! - Command coloring (pointer moves, arithmetic, loops, I/O, halt)
//! - Full-line `#` comments dimmed
//! - Current line highlighting, red when the run failed there
//! - Scroll state that keeps the current line at a fixed row while stepping

use crate::parser::program::SourceLocation;
use crate::parser::source::COMMENT_MARKER;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

fn command_style(c: char) -> Style {
    match c {
        '>' | '<' => Style::default().fg(DEFAULT_THEME.movement),
        '+' | '-' => Style::default().fg(DEFAULT_THEME.arithmetic),
        '[' | ']' => Style::default()
            .fg(DEFAULT_THEME.primary)
            .add_modifier(Modifier::BOLD),
        ',' | '.' => Style::default().fg(DEFAULT_THEME.io),
        '$' => Style::default()
            .fg(DEFAULT_THEME.halt)
            .add_modifier(Modifier::BOLD),
        _ => Style::default().fg(DEFAULT_THEME.comment),
    }
}

/// Color one source line; `cursor_column` marks the current command (1-based)
fn highlight_line(line: &str, cursor_column: Option<usize>) -> Vec<Span<'_>> {
    if line.starts_with(COMMENT_MARKER) {
        return vec![Span::styled(
            line,
            Style::default()
                .fg(DEFAULT_THEME.comment)
                .add_modifier(Modifier::ITALIC),
        )];
    }

    line.chars()
        .enumerate()
        .map(|(i, c)| {
            let mut style = command_style(c);
            if cursor_column == Some(i + 1) {
                style = style
                    .bg(DEFAULT_THEME.secondary)
                    .fg(Color::Black)
                    .add_modifier(Modifier::BOLD);
            }
            Span::styled(c.to_string(), style)
        })
        .collect()
}

/// Scroll state for the source pane
#[derive(Debug, Default)]
pub struct SourceScrollState {
    pub offset: usize,
    pub target_line_row: Option<usize>,
}

/// Render the source pane
pub fn render_source_pane(
    frame: &mut Frame,
    area: Rect,
    source_code: &str,
    current: Option<SourceLocation>,
    is_error: bool,
    is_focused: bool,
    scroll_state: &mut SourceScrollState,
) {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let block = Block::default()
        .title(" Program ")
        .borders(Borders::ALL)
        .border_style(border_style);

    let lines: Vec<&str> = source_code.lines().collect();
    let total_lines = lines.len();
    let current_line = current.map_or(0, |loc| loc.line);

    let visible_height = area.height.saturating_sub(2).max(1) as usize; // Account for borders (2), min 1

    // Start with the current line centered
    let target_row = scroll_state
        .target_line_row
        .unwrap_or(visible_height / 2)
        .min(visible_height.saturating_sub(1));
    scroll_state.target_line_row = Some(target_row);

    // Keep the current line at the target visual row
    if current_line > 0 && current_line <= total_lines {
        scroll_state.offset = (current_line - 1).saturating_sub(target_row);

        if total_lines > visible_height {
            let max_scroll = total_lines - visible_height;
            scroll_state.offset = scroll_state.offset.min(max_scroll);
        } else {
            scroll_state.offset = 0;
        }
    }

    let visible_lines: Vec<Line> = lines
        .iter()
        .enumerate()
        .skip(scroll_state.offset)
        .take(visible_height)
        .map(|(idx, line)| {
            let line_num = idx + 1;
            let is_current = line_num == current_line;
            let line_num_str = format!("{:4} ", line_num);

            let num_style = if is_current && is_error {
                Style::default()
                    .fg(DEFAULT_THEME.error)
                    .add_modifier(Modifier::BOLD)
            } else if is_current {
                Style::default()
                    .fg(DEFAULT_THEME.secondary)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(DEFAULT_THEME.comment) // Line numbers
            };

            let cursor = current.filter(|_| is_current).map(|loc| loc.column);
            let mut spans = highlight_line(line, cursor);

            if is_current {
                let line_bg = if is_error {
                    DEFAULT_THEME.error
                } else {
                    DEFAULT_THEME.current_line_bg
                };
                for span in &mut spans {
                    if span.style.bg.is_none() {
                        span.style = span.style.bg(line_bg);
                    }
                }
            }

            let mut final_spans = vec![Span::styled(line_num_str, num_style)];
            final_spans.extend(spans);

            Line::from(final_spans)
        })
        .collect();

    let paragraph = Paragraph::new(visible_lines).block(block);
    frame.render_widget(paragraph, area);
}
