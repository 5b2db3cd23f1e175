//! Recorded execution history for time-travel stepping
//!
//! [`Timeline::record`] runs a machine to the end, snapshotting the initial
//! state and the state after every command. Navigation afterwards only moves
//! a cursor over the recorded snapshots; nothing is re-executed.
//!
//! Recording stops at halt, at the first runtime error, or when the snapshot
//! budget runs out. The latter is what bounds a guest program that loops
//! forever.

use crate::interpreter::engine::{Machine, MachineState};
use crate::interpreter::errors::RunError;
use crate::memory::output::OutputLog;
use crate::parser::program::Program;
use crate::snapshot::{Snapshot, SnapshotManager};

/// How a recorded run ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    Halted,
    Failed(RunError),
    /// The snapshot budget ran out before the program finished
    Truncated(RunError),
}

/// A fully recorded run with a navigation cursor
#[derive(Debug)]
pub struct Timeline {
    program: Program,
    input: Vec<i32>,
    snapshots: SnapshotManager,
    /// Output as of the last recorded snapshot
    output: OutputLog,
    outcome: RunOutcome,
    position: usize,
}

impl Timeline {
    /// Run `machine` to the end, keeping at most `snapshot_limit` bytes of
    /// history.
    pub fn record(mut machine: Machine, snapshot_limit: usize) -> Self {
        let mut snapshots = SnapshotManager::new(snapshot_limit);

        let outcome = loop {
            if let Err(err) = snapshots.push(machine.snapshot()) {
                tracing::warn!(steps = machine.steps(), %err, "history truncated");
                break RunOutcome::Truncated(err);
            }

            match machine.state() {
                MachineState::Halted => break RunOutcome::Halted,
                MachineState::Failed(err) => break RunOutcome::Failed(err.clone()),
                MachineState::Running => {}
            }

            let pp = machine.program_pointer();
            if let Err(err) = machine.step() {
                tracing::trace!(pp, %err, "step failed");
            }
        };

        tracing::debug!(
            snapshots = snapshots.len(),
            bytes = snapshots.memory_usage(),
            "run recorded"
        );

        let input = machine.input().values().to_vec();
        let program = machine.program().clone();

        Timeline {
            program,
            input,
            snapshots,
            output: machine.into_output(),
            outcome,
            position: 0,
        }
    }

    /// Snapshot at the cursor
    pub fn current(&self) -> Option<&Snapshot> {
        self.snapshots.get(self.position)
    }

    /// Move one snapshot forward
    pub fn step_forward(&mut self) -> Result<(), String> {
        if self.position + 1 >= self.snapshots.len() {
            return Err("No more snapshots available (execution finished)".to_string());
        }
        self.position += 1;
        Ok(())
    }

    /// Move one snapshot backward
    pub fn step_backward(&mut self) -> Result<(), String> {
        if self.position == 0 {
            return Err("Already at the beginning of execution".to_string());
        }
        self.position -= 1;
        Ok(())
    }

    pub fn rewind_to_start(&mut self) {
        self.position = 0;
    }

    pub fn jump_to_end(&mut self) {
        self.position = self.snapshots.len().saturating_sub(1);
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn is_at_end(&self) -> bool {
        self.position + 1 >= self.snapshots.len()
    }

    pub fn outcome(&self) -> &RunOutcome {
        &self.outcome
    }

    pub fn program(&self) -> &Program {
        &self.program
    }

    pub fn input(&self) -> &[i32] {
        &self.input
    }

    /// Values emitted up to the cursor
    pub fn output_values(&self) -> &[i32] {
        let len = self.current().map_or(0, |s| s.output_len);
        &self.output.values()[..len]
    }

    /// Memory dump, visible only once the cursor reaches the halt
    pub fn memory_dump(&self) -> Option<&[i32]> {
        match self.current() {
            Some(snapshot) if snapshot.halted => self.output.memory_dump(),
            _ => None,
        }
    }

    /// The final output of the recorded run
    pub fn final_output(&self) -> &OutputLog {
        &self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::config::MachineConfig;
    use crate::memory::input::InputQueue;

    fn record(src: &str, input: Vec<i32>, limit: usize) -> Timeline {
        let config = MachineConfig::default().with_tape_capacity(4);
        let machine =
            Machine::new(Program::from_commands(src), InputQueue::new(input), &config).unwrap();
        Timeline::record(machine, limit)
    }

    #[test]
    fn test_one_snapshot_per_step() {
        let timeline = record("+.$", vec![], usize::MAX);
        // initial + three steps
        assert_eq!(timeline.len(), 4);
        assert_eq!(timeline.outcome(), &RunOutcome::Halted);
    }

    #[test]
    fn test_navigation() {
        let mut timeline = record(",.$", vec![3], usize::MAX);
        assert_eq!(timeline.position(), 0);
        assert!(timeline.step_backward().is_err());

        timeline.step_forward().unwrap();
        assert_eq!(timeline.current().unwrap().cells[0], 3);
        assert!(timeline.output_values().is_empty());

        timeline.step_forward().unwrap();
        assert_eq!(timeline.output_values(), &[3]);
        assert!(timeline.memory_dump().is_none());

        timeline.jump_to_end();
        assert!(timeline.is_at_end());
        assert!(timeline.step_forward().is_err());
        assert_eq!(timeline.memory_dump(), Some(&[3, 0, 0, 0][..]));

        timeline.rewind_to_start();
        assert_eq!(timeline.current().unwrap().step, 0);
    }

    #[test]
    fn test_failure_recorded() {
        let timeline = record("+<$", vec![], usize::MAX);
        assert!(matches!(
            timeline.outcome(),
            RunOutcome::Failed(RunError::DataPointerUnderflow { position: 1, .. })
        ));
        // initial, after '+', failed state
        assert_eq!(timeline.len(), 3);
    }

    #[test]
    fn test_infinite_loop_truncated() {
        let timeline = record("+[]$", vec![], 64 * 1024);
        assert!(matches!(
            timeline.outcome(),
            RunOutcome::Truncated(RunError::SnapshotLimitExceeded { .. })
        ));
        assert!(timeline.len() > 10);
    }
}
