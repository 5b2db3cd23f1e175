//! Error types for loading, validating and running programs
//!
//! This module defines [`RunError`], the single tagged failure returned to
//! callers. Load and validation errors are detected before any command runs;
//! runtime errors stop the engine at the offending instruction.
//!
//! Reading past the end of the input queue is deliberately not an error.

use crate::parser::program::SourceLocation;
use std::fmt;

/// Every failure a run can report
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunError {
    /// Program or input text could not be read
    SourceUnavailable { path: String, message: String },

    /// Output file could not be written
    OutputUnavailable { path: String, message: String },

    /// `[` and `]` do not pair up. `position` is the first offending bracket
    /// when the stack-based pairing found it, `None` when only the balance
    /// counter failed.
    UnbalancedBrackets { position: Option<usize> },

    /// No `$` anywhere in the program
    MissingTerminator,

    /// Input line rejected by the numeric-only input mode
    MalformedInputLine { line: usize, text: String },

    /// `>` moved the data pointer past the end of the tape
    DataPointerOverflow {
        position: usize,
        location: SourceLocation,
        capacity: usize,
    },

    /// `<` moved the data pointer below zero
    DataPointerUnderflow {
        position: usize,
        location: SourceLocation,
    },

    /// The program pointer left the program without reaching `$`
    UnexpectedEnd { position: usize },

    /// A tape needs at least one cell
    InvalidTapeCapacity,

    /// Traced run exhausted its snapshot budget
    SnapshotLimitExceeded { current: usize, limit: usize },
}

impl RunError {
    pub fn location(&self) -> Option<&SourceLocation> {
        match self {
            RunError::DataPointerOverflow { location, .. } => Some(location),
            RunError::DataPointerUnderflow { location, .. } => Some(location),
            RunError::SourceUnavailable { .. }
            | RunError::OutputUnavailable { .. }
            | RunError::UnbalancedBrackets { .. }
            | RunError::MissingTerminator
            | RunError::MalformedInputLine { .. }
            | RunError::UnexpectedEnd { .. }
            | RunError::InvalidTapeCapacity
            | RunError::SnapshotLimitExceeded { .. } => None,
        }
    }

    /// Whether the error was raised by a running program rather than while
    /// preparing one
    pub fn is_runtime(&self) -> bool {
        matches!(
            self,
            RunError::DataPointerOverflow { .. }
                | RunError::DataPointerUnderflow { .. }
                | RunError::UnexpectedEnd { .. }
        )
    }
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunError::SourceUnavailable { path, message } => {
                write!(f, "Cannot read '{}': {}", path, message)
            }
            RunError::OutputUnavailable { path, message } => {
                write!(f, "Cannot write '{}': {}", path, message)
            }
            RunError::UnbalancedBrackets { position } => match position {
                Some(pos) => write!(f, "Unpaired bracket at command {}", pos),
                None => write!(f, "The program has at least one unpaired [ or ]"),
            },
            RunError::MissingTerminator => {
                write!(f, "The program has no $ halt marker")
            }
            RunError::MalformedInputLine { line, text } => {
                write!(f, "Input line {} is not an integer: '{}'", line, text)
            }
            RunError::DataPointerOverflow {
                position,
                location,
                capacity,
            } => {
                write!(
                    f,
                    "Data pointer moved past the last cell (capacity {}) at command {} ({})",
                    capacity, position, location
                )
            }
            RunError::DataPointerUnderflow { position, location } => {
                write!(
                    f,
                    "Data pointer moved below cell 0 at command {} ({})",
                    position, location
                )
            }
            RunError::UnexpectedEnd { position } => {
                write!(
                    f,
                    "Program pointer ran off the end at {} without reaching $",
                    position
                )
            }
            RunError::InvalidTapeCapacity => {
                write!(f, "Tape capacity must be at least 1")
            }
            RunError::SnapshotLimitExceeded { current, limit } => {
                write!(
                    f,
                    "Snapshot memory limit exceeded: {} bytes used, limit is {}",
                    current, limit
                )
            }
        }
    }
}

impl std::error::Error for RunError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_runtime_errors_carry_kind() {
        let underflow = RunError::DataPointerUnderflow {
            position: 0,
            location: SourceLocation::new(2, 1),
        };
        assert!(underflow.is_runtime());
        assert_eq!(underflow.location(), Some(&SourceLocation::new(2, 1)));

        assert!(RunError::UnexpectedEnd { position: 3 }.is_runtime());
        assert!(!RunError::MissingTerminator.is_runtime());
        assert!(!RunError::OutputUnavailable {
            path: "out.txt".to_string(),
            message: "denied".to_string(),
        }
        .is_runtime());
    }
}
