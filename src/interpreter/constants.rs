// Constants for the tape machine

/// Number of cells on a freshly created tape
pub const DEFAULT_TAPE_CAPACITY: usize = 1000;

/// Snapshot budget for traced runs (256 MB)
pub const DEFAULT_SNAPSHOT_LIMIT: usize = 256 * 1024 * 1024;

/// Modulus applied to cells in byte mode
pub const BYTE_CELL_MODULUS: i32 = 256;
