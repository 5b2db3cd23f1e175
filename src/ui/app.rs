//! Main TUI application state and logic

use crate::interpreter::history::{RunOutcome, Timeline};
use crate::parser::program::SourceLocation;
use crate::ui::panes::{self, SourceScrollState, StatusBadge};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

/// Delay between steps in auto-play mode
const PLAY_INTERVAL: Duration = Duration::from_millis(100);

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Source,
    Tape,
    Output,
    Input,
}

impl FocusedPane {
    /// Move focus to the next pane (clockwise: source -> output -> tape -> input)
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Source => FocusedPane::Output,
            FocusedPane::Output => FocusedPane::Tape,
            FocusedPane::Tape => FocusedPane::Input,
            FocusedPane::Input => FocusedPane::Source,
        }
    }

    /// Move focus to the previous pane (counter-clockwise)
    pub fn prev(self) -> Self {
        match self {
            FocusedPane::Source => FocusedPane::Input,
            FocusedPane::Output => FocusedPane::Source,
            FocusedPane::Tape => FocusedPane::Output,
            FocusedPane::Input => FocusedPane::Tape,
        }
    }
}

/// The main application state
pub struct App {
    /// The recorded run being browsed
    pub timeline: Timeline,

    /// The program text shown in the source pane
    pub source_code: String,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    /// Per-pane scroll offsets
    pub source_scroll: SourceScrollState,
    pub tape_scroll: usize,
    pub output_scroll: usize,
    pub input_scroll: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Whether auto-play mode is active
    pub is_playing: bool,

    /// Last time a step was taken in play mode
    pub last_play_time: Instant,
}

impl App {
    /// Create a new app browsing the given timeline
    pub fn new(timeline: Timeline) -> Self {
        let source_code = if timeline.program().source().is_empty() {
            timeline.program().command_string()
        } else {
            timeline.program().source().to_string()
        };

        let status_message = match timeline.outcome() {
            RunOutcome::Halted => format!(
                "Ready! Program halted after {} steps",
                timeline.len().saturating_sub(1)
            ),
            RunOutcome::Failed(err) => format!("Ready! Program failed: {}", err),
            RunOutcome::Truncated(err) => format!("Ready! History truncated: {}", err),
        };

        App {
            timeline,
            source_code,
            focused_pane: FocusedPane::Source,
            source_scroll: SourceScrollState::default(),
            tape_scroll: 0,
            output_scroll: 0,
            input_scroll: 0,
            should_quit: false,
            status_message,
            is_playing: false,
            last_play_time: Instant::now(),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if self.is_playing && self.last_play_time.elapsed() >= PLAY_INTERVAL {
                if self.timeline.step_forward().is_ok() {
                    self.output_scroll = usize::MAX;
                } else {
                    self.is_playing = false;
                    self.status_message = "Playback complete".to_string();
                }
                self.last_play_time = Instant::now();
            }

            // Poll with a timeout so auto-play keeps moving
            if event::poll(Duration::from_millis(20))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Source location of the command at the cursor
    fn current_location(&self) -> Option<SourceLocation> {
        let snapshot = self.timeline.current()?;
        self.timeline.program().location(snapshot.program_pointer)
    }

    fn is_at_failure(&self) -> bool {
        self.timeline.is_at_end() && matches!(self.timeline.outcome(), RunOutcome::Failed(_))
    }

    fn badge(&self) -> StatusBadge {
        if self.is_playing {
            return StatusBadge::Playing;
        }
        if self.timeline.is_at_end() {
            return match self.timeline.outcome() {
                RunOutcome::Halted => StatusBadge::Halted,
                RunOutcome::Failed(_) => StatusBadge::Error,
                RunOutcome::Truncated(_) => StatusBadge::Truncated,
            };
        }
        if self.timeline.position() == 0 {
            StatusBadge::Start
        } else {
            StatusBadge::None
        }
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // 4 panes in 2 columns, plus status bar at bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(main_chunks[0]);

        // Left column: Source (top) | Output (bottom)
        let left_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
            .split(columns[0]);

        // Right column: Tape (top) | Input (bottom)
        let right_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
            .split(columns[1]);

        let location = self.current_location();
        let is_error = self.is_at_failure();
        let badge = self.badge();

        panes::render_source_pane(
            frame,
            left_rows[0],
            &self.source_code,
            location,
            is_error,
            self.focused_pane == FocusedPane::Source,
            &mut self.source_scroll,
        );

        panes::render_output_pane(
            frame,
            left_rows[1],
            self.timeline.output_values(),
            self.timeline.memory_dump(),
            self.focused_pane == FocusedPane::Output,
            &mut self.output_scroll,
        );

        if let Some(snapshot) = self.timeline.current() {
            panes::render_tape_pane(
                frame,
                right_rows[0],
                &snapshot.cells,
                snapshot.data_pointer,
                self.focused_pane == FocusedPane::Tape,
                &mut self.tape_scroll,
            );

            panes::render_input_pane(
                frame,
                right_rows[1],
                self.timeline.input(),
                snapshot.input_cursor,
                self.focused_pane == FocusedPane::Input,
                &mut self.input_scroll,
            );
        }

        panes::render_status_bar(
            frame,
            main_chunks[1],
            &self.status_message,
            self.timeline.position(),
            self.timeline.len(),
            badge,
        );
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            // Number keys step forward N times directly
            KeyCode::Char(c @ '1'..='9') => {
                self.is_playing = false;
                let n = c.to_digit(10).unwrap_or(1);
                let mut stepped = 0;
                for _ in 0..n {
                    if self.timeline.step_forward().is_err() {
                        break;
                    }
                    stepped += 1;
                }
                self.status_message = format!("Stepped forward {} step(s)", stepped);
                self.output_scroll = usize::MAX;
            }
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::BackTab => {
                self.focused_pane = self.focused_pane.prev();
            }
            KeyCode::Left => {
                self.is_playing = false;
                self.step_backward();
            }
            KeyCode::Right => {
                self.is_playing = false;
                self.step_forward();
            }
            KeyCode::Up => match self.focused_pane {
                FocusedPane::Source => {
                    // Scrolling up makes the current line move down visually
                    if let Some(row) = self.source_scroll.target_line_row {
                        self.source_scroll.target_line_row = Some(row.saturating_add(1));
                    }
                }
                FocusedPane::Tape => {
                    self.tape_scroll = self.tape_scroll.saturating_sub(1);
                }
                FocusedPane::Output => {
                    self.output_scroll = self.output_scroll.saturating_sub(1);
                }
                FocusedPane::Input => {
                    self.input_scroll = self.input_scroll.saturating_sub(1);
                }
            },
            KeyCode::Down => match self.focused_pane {
                FocusedPane::Source => {
                    // Scrolling down makes the current line move up visually
                    if let Some(row) = self.source_scroll.target_line_row {
                        self.source_scroll.target_line_row = Some(row.saturating_sub(1));
                    }
                }
                FocusedPane::Tape => {
                    self.tape_scroll = self.tape_scroll.saturating_add(1);
                }
                FocusedPane::Output => {
                    self.output_scroll = self.output_scroll.saturating_add(1);
                }
                FocusedPane::Input => {
                    self.input_scroll = self.input_scroll.saturating_add(1);
                }
            },
            KeyCode::Char(' ') => {
                self.is_playing = !self.is_playing;
                if self.is_playing {
                    self.last_play_time = Instant::now()
                        .checked_sub(PLAY_INTERVAL)
                        .unwrap_or_else(Instant::now);
                    self.status_message = "Playing...".to_string();
                } else {
                    self.status_message = "Paused".to_string();
                }
            }
            KeyCode::Enter => {
                self.is_playing = false;
                self.timeline.jump_to_end();
                self.status_message = match self.timeline.outcome() {
                    RunOutcome::Halted => "Jumped to end".to_string(),
                    RunOutcome::Failed(err) | RunOutcome::Truncated(err) => err.to_string(),
                };
                self.output_scroll = usize::MAX;
            }
            KeyCode::Backspace => {
                self.is_playing = false;
                self.timeline.rewind_to_start();
                self.status_message = "Jumped to start".to_string();
                self.output_scroll = 0;
            }
            _ => {}
        }
    }

    /// Step forward in execution
    fn step_forward(&mut self) {
        match self.timeline.step_forward() {
            Ok(()) => {
                self.status_message = "Stepped forward".to_string();
                // Auto-scroll output to bottom
                self.output_scroll = usize::MAX;
            }
            Err(message) => {
                self.status_message = format!("Cannot step forward: {}", message);
            }
        }
    }

    /// Step backward in execution
    fn step_backward(&mut self) {
        match self.timeline.step_backward() {
            Ok(()) => {
                self.status_message = "Stepped backward".to_string();
                self.output_scroll = usize::MAX;
            }
            Err(message) => {
                self.status_message = format!("Cannot step backward: {}", message);
            }
        }
    }
}
