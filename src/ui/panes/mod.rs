//! TUI pane rendering modules
//!
//! Each pane is a stateless render function that takes the data it shows
//! plus a mutable scroll offset owned by the app.
//!
//! # Pane Modules
//!
//! - [`source`]: Program text with the current command highlighted
//! - [`tape`]: Tape cells around the data pointer
//! - [`output`]: Emitted values, their character view, and the memory dump
//! - [`input`]: The input queue with consumed values dimmed
//! - [`status`]: Status bar with keybindings and execution state

pub mod input;
pub mod output;
pub mod source;
pub mod status;
pub mod tape;

// Re-export render functions for convenience
pub use input::render_input_pane;
pub use output::render_output_pane;
pub use source::{render_source_pane, SourceScrollState};
pub use status::{render_status_bar, StatusBadge};
pub use tape::render_tape_pane;
