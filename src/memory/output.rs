//! Output log
//!
//! Collects the values emitted by `.` and, once the program halts, a dump of
//! every tape cell. Two views are available at any time: a decimal listing
//! and the emitted values read back as characters.

use crate::interpreter::errors::RunError;
use std::fmt;
use std::fs;
use std::path::Path;

/// Append-only record of what a run produced
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputLog {
    values: Vec<i32>,
    memory_dump: Option<Vec<i32>>,
}

impl OutputLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn emit(&mut self, value: i32) {
        self.values.push(value);
    }

    pub fn record_dump(&mut self, cells: &[i32]) {
        self.memory_dump = Some(cells.to_vec());
    }

    pub fn values(&self) -> &[i32] {
        &self.values
    }

    pub fn memory_dump(&self) -> Option<&[i32]> {
        self.memory_dump.as_deref()
    }

    /// Emitted values as newline-separated decimals, then the memory dump
    pub fn render_decimal(&self) -> String {
        let mut out = String::new();
        for value in &self.values {
            out.push_str(&value.to_string());
            out.push('\n');
        }
        if let Some(dump) = &self.memory_dump {
            out.push_str("Memory:\n");
            let cells: Vec<String> = dump.iter().map(|v| v.to_string()).collect();
            out.push_str(&cells.join("; "));
            out.push('\n');
        }
        out
    }

    /// Emitted values as a string, one code point per value.
    ///
    /// Values that are not valid Unicode scalar values become U+FFFD.
    pub fn render_text(&self) -> String {
        self.values.iter().map(|&v| value_to_char(v)).collect()
    }

    /// Write the decimal rendering to `path`, replacing any existing file
    pub fn write_to(&self, path: &Path) -> Result<(), RunError> {
        fs::write(path, self.render_decimal()).map_err(|e| RunError::OutputUnavailable {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        tracing::debug!(path = %path.display(), values = self.values.len(), "output written");
        Ok(())
    }
}

pub fn value_to_char(value: i32) -> char {
    u32::try_from(value)
        .ok()
        .and_then(char::from_u32)
        .unwrap_or(char::REPLACEMENT_CHARACTER)
}

impl fmt::Display for OutputLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_decimal())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decimal_view() {
        let mut log = OutputLog::new();
        log.emit(72);
        log.emit(-1);
        assert_eq!(log.render_decimal(), "72\n-1\n");

        log.record_dump(&[0, 2, 0]);
        assert_eq!(log.render_decimal(), "72\n-1\nMemory:\n0; 2; 0\n");
    }

    #[test]
    fn test_text_view_ignores_dump() {
        let mut log = OutputLog::new();
        for c in "ok!".chars() {
            log.emit(c as i32);
        }
        log.record_dump(&[65, 66]);
        assert_eq!(log.render_text(), "ok!");
    }

    #[test]
    fn test_write_to_file() {
        let path = std::env::temp_dir().join(format!("tapemachine-out-{}.txt", std::process::id()));
        let mut log = OutputLog::new();
        log.emit(7);
        log.record_dump(&[7, 0]);
        log.write_to(&path).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "7\nMemory:\n7; 0\n");
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_write_to_missing_directory() {
        let path = std::env::temp_dir()
            .join("tapemachine-no-such-dir")
            .join("out.txt");
        let err = OutputLog::new().write_to(&path).unwrap_err();
        assert!(matches!(err, RunError::OutputUnavailable { .. }));
    }

    #[test]
    fn test_invalid_code_points() {
        assert_eq!(value_to_char(-5), '\u{FFFD}');
        assert_eq!(value_to_char(0xD800), '\u{FFFD}');
        assert_eq!(value_to_char(0x263A), '☺');
    }
}
