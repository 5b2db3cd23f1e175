//! Memory model for the tape machine
//!
//! This module provides the data the engine reads and writes:
//! - [`tape`]: Fixed-capacity cell tape with a bounds-checked data pointer
//! - [`input`]: The input queue consumed by `,`
//! - [`output`]: The output log produced by `.` and `$`
//!
//! # Cell Values
//!
//! Cells are 32-bit signed integers. By default `+` and `-` wrap with two's
//! complement semantics; byte mode keeps every cell in `0..=255`. The data
//! pointer never wraps: leaving `[0, capacity)` is a run error.

pub mod input;
pub mod output;
pub mod tape;
