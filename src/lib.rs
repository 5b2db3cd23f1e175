//! # Introduction
//!
//! tapemachine runs programs for a small tape machine: eight commands that
//! move a data pointer over a bounded array of integer cells, adjust cells,
//! loop, read and write, plus `$`, which dumps the tape and halts. Runs can
//! also be recorded and stepped through backward and forward in a terminal
//! UI built with [ratatui](https://docs.rs/ratatui).
//!
//! ## Execution pipeline
//!
//! ```text
//! Source → Normalizer → Program → Bracket Matcher → Machine → OutputLog
//!                                                      ↑
//!                                   Input text → InputQueue
//! ```
//!
//! 1. [`parser`] — normalizes program text, validates brackets and the halt
//!    marker, and builds the jump table.
//! 2. [`memory`] — the tape, the input queue and the output log.
//! 3. [`interpreter`] — the [`interpreter::engine::Machine`], run
//!    configuration, errors and recorded history.
//! 4. [`snapshot`] — per-step snapshots kept under a memory budget.
//! 5. [`ui`] — ratatui-based debugger; not part of the stable library API.
//!
//! ## Embedding
//!
//! ```
//! use tapemachine::{run_source, MachineConfig};
//!
//! let output = run_source(">,.$", Some("2"), &MachineConfig::default()).unwrap();
//! assert_eq!(output.values(), &[2]);
//! assert_eq!(output.memory_dump().unwrap()[1], 2);
//! ```

pub mod interpreter;
pub mod logging;
pub mod memory;
pub mod parser;
pub mod snapshot;
pub mod ui;

pub use interpreter::config::{CellArithmetic, MachineConfig};
pub use interpreter::engine::{Machine, MachineState, StepOutcome};
pub use interpreter::errors::RunError;
pub use memory::input::{load_input, InputMode, InputQueue};
pub use memory::output::OutputLog;
pub use parser::program::Program;
pub use parser::source::load_program;

/// Run program text against optional input text in one call.
///
/// Program text is normalized line by line (comments and blank lines
/// dropped); input text is parsed according to `config.input_mode`.
pub fn run_source(
    program: &str,
    input: Option<&str>,
    config: &MachineConfig,
) -> Result<OutputLog, RunError> {
    let program = Program::from_source(program);
    let input = InputQueue::from_optional(input, config.input_mode)?;
    Machine::new(program, input, config)?.execute()
}
