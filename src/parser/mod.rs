//! Program loading and validation
//!
//! This module turns raw program text into something the engine can run:
//! - [`source`]: Normalization (lines → command stream) and file loading
//! - [`program`]: The decoded [`program::Program`] with per-command locations
//! - [`jumps`]: Bracket validation and the loop [`jumps::JumpTable`]
//!
//! # Command Set
//!
//! ```text
//! >  <   move the data pointer
//! +  -   adjust the current cell
//! [  ]   loop while the current cell is non-zero
//! ,  .   read input / emit output
//! $      dump the tape and halt
//! ```
//!
//! Every other character is a no-op.

pub mod jumps;
pub mod program;
pub mod source;
