// Execution engine for the tape machine

use crate::interpreter::config::{CellArithmetic, MachineConfig};
use crate::interpreter::errors::RunError;
use crate::memory::{
    input::InputQueue,
    output::OutputLog,
    tape::{PointerFault, Tape},
};
use crate::parser::jumps::{validate, JumpTable};
use crate::parser::program::{Command, Program, SourceLocation};
use crate::snapshot::Snapshot;

/// Lifecycle of a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MachineState {
    Running,
    Halted,
    Failed(RunError),
}

/// Result of a single successful step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// More commands to run
    Continue,
    /// `$` was reached
    Halted,
}

/// The machine that executes one validated program
#[derive(Debug)]
pub struct Machine {
    /// Decoded program
    program: Program,

    /// Loop pairing built during validation
    jumps: JumpTable,

    /// Cells and data pointer
    tape: Tape,

    /// Values available to `,`
    input: InputQueue,

    /// Values written by `.` and the final dump
    output: OutputLog,

    /// Index of the next command
    program_pointer: usize,

    /// Overflow policy for `+` / `-`
    arithmetic: CellArithmetic,

    state: MachineState,

    /// Number of commands executed
    steps: u64,
}

impl Machine {
    /// Validate `program` and prepare a fresh machine.
    ///
    /// Fails before anything runs if the tape capacity is zero, the brackets
    /// do not pair up, or the program has no `$`.
    pub fn new(
        program: Program,
        input: InputQueue,
        config: &MachineConfig,
    ) -> Result<Self, RunError> {
        if config.tape_capacity == 0 {
            return Err(RunError::InvalidTapeCapacity);
        }

        let jumps = validate(&program)?;

        Ok(Machine {
            program,
            jumps,
            tape: Tape::new(config.tape_capacity),
            input,
            output: OutputLog::new(),
            program_pointer: 0,
            arithmetic: config.cell_arithmetic,
            state: MachineState::Running,
            steps: 0,
        })
    }

    /// Execute one command.
    ///
    /// Once the machine has halted this keeps returning `Ok(Halted)`; once it
    /// has failed it keeps returning the same error.
    pub fn step(&mut self) -> Result<StepOutcome, RunError> {
        match &self.state {
            MachineState::Halted => return Ok(StepOutcome::Halted),
            MachineState::Failed(err) => return Err(err.clone()),
            MachineState::Running => {}
        }

        match self.execute_command() {
            Ok(outcome) => {
                self.steps += 1;
                if outcome == StepOutcome::Halted {
                    self.state = MachineState::Halted;
                }
                Ok(outcome)
            }
            Err(err) => {
                self.state = MachineState::Failed(err.clone());
                Err(err)
            }
        }
    }

    /// Run until `$` or the first error.
    ///
    /// A guest program that never reaches `$` keeps this running forever.
    pub fn run(&mut self) -> Result<(), RunError> {
        let result = loop {
            match self.step() {
                Ok(StepOutcome::Continue) => {}
                Ok(StepOutcome::Halted) => break Ok(()),
                Err(err) => break Err(err),
            }
        };

        match &result {
            Ok(()) => tracing::debug!(
                steps = self.steps,
                emitted = self.output.values().len(),
                "program halted"
            ),
            Err(err) => tracing::debug!(steps = self.steps, %err, "program failed"),
        }

        result
    }

    /// Run to completion and hand back the output log
    pub fn execute(mut self) -> Result<OutputLog, RunError> {
        self.run()?;
        Ok(self.output)
    }

    fn execute_command(&mut self) -> Result<StepOutcome, RunError> {
        let pp = self.program_pointer;
        let command = self
            .program
            .get(pp)
            .ok_or(RunError::UnexpectedEnd { position: pp })?;

        match command {
            Command::Right => {
                self.tape
                    .move_right()
                    .map_err(|fault| self.pointer_error(fault, pp))?;
                self.program_pointer += 1;
            }
            Command::Left => {
                self.tape
                    .move_left()
                    .map_err(|fault| self.pointer_error(fault, pp))?;
                self.program_pointer += 1;
            }
            Command::Increment => {
                let value = self.arithmetic.increment(self.tape.current());
                self.tape.set_current(value);
                self.program_pointer += 1;
            }
            Command::Decrement => {
                let value = self.arithmetic.decrement(self.tape.current());
                self.tape.set_current(value);
                self.program_pointer += 1;
            }
            Command::LoopOpen => {
                if self.tape.current() == 0 {
                    self.program_pointer = self.partner(pp)? + 1;
                } else {
                    self.program_pointer += 1;
                }
            }
            Command::LoopClose => {
                if self.tape.current() != 0 {
                    self.program_pointer = self.partner(pp)?;
                } else {
                    self.program_pointer += 1;
                }
            }
            Command::Read => {
                // Exhausted input leaves the cell alone: `,` doubles as a comment character
                if let Some(value) = self.input.next_value() {
                    self.tape.set_current(self.arithmetic.store(value));
                }
                self.program_pointer += 1;
            }
            Command::Write => {
                self.output.emit(self.tape.current());
                self.program_pointer += 1;
            }
            Command::Halt => {
                self.output.record_dump(self.tape.cells());
                return Ok(StepOutcome::Halted);
            }
            Command::NoOp(_) => {
                self.program_pointer += 1;
            }
        }

        Ok(StepOutcome::Continue)
    }

    fn partner(&self, position: usize) -> Result<usize, RunError> {
        self.jumps
            .partner(position)
            .ok_or(RunError::UnbalancedBrackets {
                position: Some(position),
            })
    }

    fn pointer_error(&self, fault: PointerFault, position: usize) -> RunError {
        let location = self
            .program
            .location(position)
            .unwrap_or(SourceLocation::new(1, position + 1));

        match fault {
            PointerFault::Overflow => RunError::DataPointerOverflow {
                position,
                location,
                capacity: self.tape.capacity(),
            },
            PointerFault::Underflow => RunError::DataPointerUnderflow { position, location },
        }
    }

    /// Capture the current state for the execution history
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            cells: self.tape.cells().to_vec(),
            data_pointer: self.tape.pointer(),
            program_pointer: self.program_pointer,
            input_cursor: self.input.cursor(),
            output_len: self.output.values().len(),
            step: self.steps,
            halted: self.state == MachineState::Halted,
        }
    }

    // ========== Getter methods ==========

    pub fn program(&self) -> &Program {
        &self.program
    }

    pub fn jumps(&self) -> &JumpTable {
        &self.jumps
    }

    pub fn tape(&self) -> &Tape {
        &self.tape
    }

    pub fn input(&self) -> &InputQueue {
        &self.input
    }

    pub fn output(&self) -> &OutputLog {
        &self.output
    }

    pub fn program_pointer(&self) -> usize {
        self.program_pointer
    }

    pub fn data_pointer(&self) -> usize {
        self.tape.pointer()
    }

    pub fn state(&self) -> &MachineState {
        &self.state
    }

    pub fn steps(&self) -> u64 {
        self.steps
    }

    pub fn into_output(self) -> OutputLog {
        self.output
    }
}
