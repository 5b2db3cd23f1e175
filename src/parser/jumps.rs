//! Bracket matching and program validation
//!
//! Validation runs two checks before any jump table is built:
//!
//! 1. **Balance**: a counter incremented on `[` and decremented on `]` must
//!    end at exactly zero.
//! 2. **Termination**: the program must contain at least one `$`.
//!
//! The jump table itself is built with a single left-to-right scan and a
//! stack of pending loop-open positions. Pairing by stack is the only
//! strategy that reconstructs arbitrary nesting; recording opens and closes
//! in two separate lists does not.

use super::program::{Command, Program};
use crate::interpreter::errors::RunError;
use rustc_hash::FxHashMap;

/// Balance counter over the program: `[` counts +1, `]` counts -1
pub fn bracket_balance(program: &Program) -> isize {
    program.commands().iter().fold(0, |count, cmd| match cmd {
        Command::LoopOpen => count + 1,
        Command::LoopClose => count - 1,
        _ => count,
    })
}

/// Check 1: the balance counter must return to zero
pub fn check_balance(program: &Program) -> Result<(), RunError> {
    if bracket_balance(program) == 0 {
        Ok(())
    } else {
        Err(RunError::UnbalancedBrackets { position: None })
    }
}

/// Check 2: at least one halt marker must be present
pub fn check_terminator(program: &Program) -> Result<(), RunError> {
    if program.commands().contains(&Command::Halt) {
        Ok(())
    } else {
        Err(RunError::MissingTerminator)
    }
}

/// Bidirectional pairing of loop-open and loop-close positions
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JumpTable {
    open_to_close: FxHashMap<usize, usize>,
    close_to_open: FxHashMap<usize, usize>,
}

impl JumpTable {
    /// Pair every `[` with its `]` using a last-in-first-out stack.
    ///
    /// A `]` with no pending `[` (as in `][`, which passes the counter check)
    /// and any `[` left open are both reported as unbalanced.
    pub fn build(program: &Program) -> Result<Self, RunError> {
        let mut table = JumpTable::default();
        let mut pending: Vec<usize> = Vec::new();

        for (index, cmd) in program.commands().iter().enumerate() {
            match cmd {
                Command::LoopOpen => pending.push(index),
                Command::LoopClose => {
                    let open = pending.pop().ok_or(RunError::UnbalancedBrackets {
                        position: Some(index),
                    })?;
                    table.open_to_close.insert(open, index);
                    table.close_to_open.insert(index, open);
                }
                _ => {}
            }
        }

        if let Some(&unclosed) = pending.last() {
            return Err(RunError::UnbalancedBrackets {
                position: Some(unclosed),
            });
        }

        Ok(table)
    }

    /// Matching loop-close for a loop-open position
    pub fn close_for(&self, open: usize) -> Option<usize> {
        self.open_to_close.get(&open).copied()
    }

    /// Matching loop-open for a loop-close position
    pub fn open_for(&self, close: usize) -> Option<usize> {
        self.close_to_open.get(&close).copied()
    }

    /// Partner of any bracket position, whichever side it is on
    pub fn partner(&self, position: usize) -> Option<usize> {
        self.close_for(position).or_else(|| self.open_for(position))
    }

    /// All (open, close) pairs sorted by open position
    pub fn pairs(&self) -> Vec<(usize, usize)> {
        let mut pairs: Vec<(usize, usize)> =
            self.open_to_close.iter().map(|(&o, &c)| (o, c)).collect();
        pairs.sort_unstable();
        pairs
    }

    pub fn len(&self) -> usize {
        self.open_to_close.len()
    }

    pub fn is_empty(&self) -> bool {
        self.open_to_close.is_empty()
    }
}

/// Run both checks in order, then build the jump table.
pub fn validate(program: &Program) -> Result<JumpTable, RunError> {
    check_balance(program)?;
    check_terminator(program)?;
    let table = JumpTable::build(program)?;

    tracing::debug!(
        commands = program.len(),
        loops = table.len(),
        "program validated"
    );

    Ok(table)
}
