//! Tape machine execution engine
//!
//! This module provides the core execution logic:
//! - [`engine`]: The [`engine::Machine`] and its fetch-decode-execute loop
//! - [`errors`]: The tagged [`errors::RunError`]
//! - [`config`]: Tape capacity, cell arithmetic and input settings
//! - [`history`]: Recorded runs for stepping backward and forward
//!
//! # Execution Model
//!
//! The machine reads the command at the program pointer, applies it, and
//! advances. Loop commands move the program pointer through the jump table
//! built during validation. The only successful exit is `$`, which records a
//! dump of every cell.

pub mod config;
pub mod constants;
pub mod engine;
pub mod errors;
pub mod history;
