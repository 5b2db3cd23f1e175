//! Source normalization
//!
//! Program text is line based. A line that is empty or whose first character
//! is the comment marker contributes nothing; every other line is trimmed and
//! appended to the command stream with no separator, so commands on
//! consecutive lines become adjacent.

use super::program::{Program, SourceLocation};
use crate::interpreter::errors::RunError;
use std::fs;
use std::path::Path;

/// Marker that turns a whole line into a comment
pub const COMMENT_MARKER: char = '#';

fn is_skipped(line: &str) -> bool {
    line.is_empty() || line.starts_with(COMMENT_MARKER)
}

/// Concatenate the meaningful lines of `lines` into a single command string.
pub fn normalize<'a, I>(lines: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    lines
        .into_iter()
        .filter(|line| !is_skipped(line))
        .map(str::trim)
        .collect()
}

/// Walk the command characters of `source`, yielding each with its location.
pub(crate) fn command_chars(source: &str) -> impl Iterator<Item = (char, SourceLocation)> + '_ {
    source
        .lines()
        .enumerate()
        .filter(|(_, line)| !is_skipped(line))
        .flat_map(|(line_idx, line)| {
            let leading = line.chars().take_while(|c| c.is_whitespace()).count();
            line.trim()
                .chars()
                .enumerate()
                .map(move |(i, c)| (c, SourceLocation::new(line_idx + 1, leading + i + 1)))
        })
}

/// Read a text source fully into memory.
///
/// The file handle is released before this returns.
pub fn read_source(path: &Path) -> Result<String, RunError> {
    fs::read_to_string(path).map_err(|e| RunError::SourceUnavailable {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

/// Read and normalize a program file.
pub fn load_program(path: &Path) -> Result<Program, RunError> {
    let text = read_source(path)?;
    let program = Program::from_source(&text);
    tracing::debug!(
        path = %path.display(),
        commands = program.len(),
        "loaded program"
    );
    Ok(program)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_drops_comments_and_blanks() {
        let lines = ["# hello world", "", "++>", "   ", "  [-]  ", "#.", "$"];
        assert_eq!(normalize(lines), "++>[-]$");
    }

    #[test]
    fn test_normalize_indented_marker_is_not_comment() {
        // Only a marker in the very first column comments a line out
        assert_eq!(normalize([" # +", "$"]), "# +$");
    }

    #[test]
    fn test_normalize_empty() {
        assert_eq!(normalize(Vec::<&str>::new()), "");
    }

    #[test]
    fn test_program_matches_normalize() {
        let text = "#c\n+ +\r\n\n.$";
        let program = Program::from_source(text);
        assert_eq!(program.command_string(), normalize(text.lines()));
    }

    #[test]
    fn test_missing_file_is_source_unavailable() {
        let err = load_program(Path::new("does/not/exist.bf")).unwrap_err();
        assert!(matches!(err, RunError::SourceUnavailable { .. }));
    }
}
