//! Run configuration

use super::constants::{BYTE_CELL_MODULUS, DEFAULT_SNAPSHOT_LIMIT, DEFAULT_TAPE_CAPACITY};
use crate::memory::input::InputMode;

/// How `+` and `-` treat cell overflow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellArithmetic {
    /// 32-bit signed two's-complement wrapping
    #[default]
    Wrapping32,
    /// Cells stay in 0..=255 and wrap at either end
    Byte,
}

impl CellArithmetic {
    pub fn increment(self, value: i32) -> i32 {
        match self {
            CellArithmetic::Wrapping32 => value.wrapping_add(1),
            CellArithmetic::Byte => (value + 1).rem_euclid(BYTE_CELL_MODULUS),
        }
    }

    pub fn decrement(self, value: i32) -> i32 {
        match self {
            CellArithmetic::Wrapping32 => value.wrapping_sub(1),
            CellArithmetic::Byte => (value - 1).rem_euclid(BYTE_CELL_MODULUS),
        }
    }

    /// Bring a value read from input into the cell range
    pub fn store(self, value: i32) -> i32 {
        match self {
            CellArithmetic::Wrapping32 => value,
            CellArithmetic::Byte => value.rem_euclid(BYTE_CELL_MODULUS),
        }
    }
}

/// Settings for a single run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MachineConfig {
    pub tape_capacity: usize,
    pub cell_arithmetic: CellArithmetic,
    pub input_mode: InputMode,
    /// Byte budget for snapshots in traced runs
    pub snapshot_limit: usize,
}

impl Default for MachineConfig {
    fn default() -> Self {
        MachineConfig {
            tape_capacity: DEFAULT_TAPE_CAPACITY,
            cell_arithmetic: CellArithmetic::default(),
            input_mode: InputMode::default(),
            snapshot_limit: DEFAULT_SNAPSHOT_LIMIT,
        }
    }
}

impl MachineConfig {
    pub fn with_tape_capacity(mut self, capacity: usize) -> Self {
        self.tape_capacity = capacity;
        self
    }

    pub fn with_cell_arithmetic(mut self, arithmetic: CellArithmetic) -> Self {
        self.cell_arithmetic = arithmetic;
        self
    }

    pub fn with_input_mode(mut self, mode: InputMode) -> Self {
        self.input_mode = mode;
        self
    }

    pub fn with_snapshot_limit(mut self, limit: usize) -> Self {
        self.snapshot_limit = limit;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = MachineConfig::default();
        assert_eq!(config.tape_capacity, 1000);
        assert_eq!(config.cell_arithmetic, CellArithmetic::Wrapping32);
        assert_eq!(config.input_mode, InputMode::Lenient);
    }

    #[test]
    fn test_wrapping32_does_not_panic() {
        assert_eq!(CellArithmetic::Wrapping32.increment(i32::MAX), i32::MIN);
        assert_eq!(CellArithmetic::Wrapping32.decrement(i32::MIN), i32::MAX);
        assert_eq!(CellArithmetic::Wrapping32.decrement(0), -1);
    }

    #[test]
    fn test_byte_wraps_both_ways() {
        assert_eq!(CellArithmetic::Byte.increment(255), 0);
        assert_eq!(CellArithmetic::Byte.decrement(0), 255);
        assert_eq!(CellArithmetic::Byte.store(-1), 255);
        assert_eq!(CellArithmetic::Byte.store(300), 44);
    }
}
