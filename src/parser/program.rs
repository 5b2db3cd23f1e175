//! Program representation
//!
//! A [`Program`] is the normalized command stream together with the source
//! location every command came from. Commands are decoded once into the
//! closed [`Command`] enum so the engine can match them exhaustively.

use std::fmt;

/// Source location of a command in the original program text (1-based)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SourceLocation {
    pub line: usize,
    pub column: usize,
}

impl SourceLocation {
    pub fn new(line: usize, column: usize) -> Self {
        SourceLocation { line, column }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// A single decoded command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// `>` move the data pointer right
    Right,
    /// `<` move the data pointer left
    Left,
    /// `+` increment the current cell
    Increment,
    /// `-` decrement the current cell
    Decrement,
    /// `[` loop open
    LoopOpen,
    /// `]` loop close
    LoopClose,
    /// `,` read from the input queue
    Read,
    /// `.` emit the current cell
    Write,
    /// `$` dump memory and halt
    Halt,
    /// Any other character
    NoOp(char),
}

impl Command {
    pub fn from_char(c: char) -> Self {
        match c {
            '>' => Command::Right,
            '<' => Command::Left,
            '+' => Command::Increment,
            '-' => Command::Decrement,
            '[' => Command::LoopOpen,
            ']' => Command::LoopClose,
            ',' => Command::Read,
            '.' => Command::Write,
            '$' => Command::Halt,
            other => Command::NoOp(other),
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Command::Right => '>',
            Command::Left => '<',
            Command::Increment => '+',
            Command::Decrement => '-',
            Command::LoopOpen => '[',
            Command::LoopClose => ']',
            Command::Read => ',',
            Command::Write => '.',
            Command::Halt => '$',
            Command::NoOp(c) => c,
        }
    }
}

/// A normalized program: commands in execution order plus their origins
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    commands: Vec<Command>,
    locations: Vec<SourceLocation>,
    source: String,
}

impl Program {
    /// Build a program from raw source text.
    ///
    /// Blank lines and lines starting with `#` are dropped, the remaining
    /// lines are trimmed and concatenated without separators.
    pub fn from_source(source: &str) -> Self {
        let mut commands = Vec::new();
        let mut locations = Vec::new();

        for (c, location) in super::source::command_chars(source) {
            commands.push(Command::from_char(c));
            locations.push(location);
        }

        Program {
            commands,
            locations,
            source: source.to_string(),
        }
    }

    /// Build a program from an already-normalized command string.
    ///
    /// Command `i` is located at line 1, column `i + 1`.
    pub fn from_commands(commands: &str) -> Self {
        let (commands, locations): (Vec<Command>, Vec<SourceLocation>) = commands
            .chars()
            .enumerate()
            .map(|(i, c)| (Command::from_char(c), SourceLocation::new(1, i + 1)))
            .unzip();

        Program {
            commands,
            locations,
            source: String::new(),
        }
    }

    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    pub fn get(&self, index: usize) -> Option<Command> {
        self.commands.get(index).copied()
    }

    pub fn location(&self, index: usize) -> Option<SourceLocation> {
        self.locations.get(index).copied()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// The raw text the program was built from (empty for `from_commands`)
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The normalized command string
    pub fn command_string(&self) -> String {
        self.commands.iter().map(|c| c.as_char()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_decoding() {
        let decoded: Vec<Command> = "><+-[],.$x".chars().map(Command::from_char).collect();
        assert_eq!(
            decoded,
            vec![
                Command::Right,
                Command::Left,
                Command::Increment,
                Command::Decrement,
                Command::LoopOpen,
                Command::LoopClose,
                Command::Read,
                Command::Write,
                Command::Halt,
                Command::NoOp('x'),
            ]
        );
    }

    #[test]
    fn test_from_source_tracks_locations() {
        let program = Program::from_source("# header\n\n  +>\n.$\n");

        assert_eq!(program.command_string(), "+>.$");
        assert_eq!(program.location(0), Some(SourceLocation::new(3, 3)));
        assert_eq!(program.location(1), Some(SourceLocation::new(3, 4)));
        assert_eq!(program.location(2), Some(SourceLocation::new(4, 1)));
        assert_eq!(program.location(4), None);
    }

    #[test]
    fn test_from_commands_single_line() {
        let program = Program::from_commands("<$");
        assert_eq!(program.len(), 2);
        assert_eq!(program.get(1), Some(Command::Halt));
        assert_eq!(program.location(1), Some(SourceLocation::new(1, 2)));
        assert!(program.source().is_empty());
    }
}
