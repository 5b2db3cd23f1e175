//! The bounded cell tape and its data pointer

/// Outcome of a failed pointer move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerFault {
    Overflow,
    Underflow,
}

/// Fixed-size, zero-initialized sequence of integer cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tape {
    cells: Vec<i32>,
    pointer: usize,
}

impl Tape {
    /// Create a tape of `capacity` zeroed cells. `capacity` must be non-zero.
    pub fn new(capacity: usize) -> Self {
        Tape {
            cells: vec![0; capacity],
            pointer: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.cells.len()
    }

    pub fn pointer(&self) -> usize {
        self.pointer
    }

    /// Move one cell right. The pointer is left untouched on failure.
    pub fn move_right(&mut self) -> Result<(), PointerFault> {
        if self.pointer + 1 >= self.cells.len() {
            return Err(PointerFault::Overflow);
        }
        self.pointer += 1;
        Ok(())
    }

    /// Move one cell left. The pointer is left untouched on failure.
    pub fn move_left(&mut self) -> Result<(), PointerFault> {
        self.pointer = self.pointer.checked_sub(1).ok_or(PointerFault::Underflow)?;
        Ok(())
    }

    pub fn current(&self) -> i32 {
        self.cells[self.pointer]
    }

    pub fn set_current(&mut self, value: i32) {
        self.cells[self.pointer] = value;
    }

    pub fn cells(&self) -> &[i32] {
        &self.cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds() {
        let mut tape = Tape::new(2);
        assert_eq!(tape.move_left(), Err(PointerFault::Underflow));
        assert_eq!(tape.pointer(), 0);
        assert_eq!(tape.move_right(), Ok(()));
        assert_eq!(tape.move_right(), Err(PointerFault::Overflow));
        assert_eq!(tape.pointer(), 1);
    }

    #[test]
    fn test_cells() {
        let mut tape = Tape::new(4);
        tape.move_right().unwrap();
        tape.set_current(7);
        assert_eq!(tape.current(), 7);
        assert_eq!(tape.cells(), &[0, 7, 0, 0]);
    }
}
