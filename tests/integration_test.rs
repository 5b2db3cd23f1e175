// Integration tests for the tape machine

use std::path::Path;
use tapemachine::interpreter::history::{RunOutcome, Timeline};
use tapemachine::{
    load_input, load_program, run_source, InputMode, InputQueue, Machine, MachineConfig,
    Program, RunError,
};

fn run_commands(commands: &str, input: Vec<i32>, capacity: usize) -> Result<Vec<i32>, RunError> {
    let config = MachineConfig::default().with_tape_capacity(capacity);
    let machine = Machine::new(
        Program::from_commands(commands),
        InputQueue::new(input),
        &config,
    )?;
    Ok(machine.execute()?.values().to_vec())
}

#[test]
fn test_read_write_round_trip() {
    let config = MachineConfig::default().with_tape_capacity(2);
    let machine = Machine::new(
        Program::from_commands(">,.$"),
        InputQueue::new(vec![2]),
        &config,
    )
    .expect("Validation failed");

    let output = machine.execute().expect("Execution failed");

    assert_eq!(output.values(), &[2]);
    assert_eq!(output.memory_dump(), Some(&[0, 2][..]));
}

#[test]
fn test_round_trip_default_tape() {
    let output = run_source(">,.$", Some("2"), &MachineConfig::default()).unwrap();
    let dump = output.memory_dump().unwrap();

    assert_eq!(dump.len(), 1000);
    assert_eq!(dump[1], 2);
    assert!(dump.iter().enumerate().all(|(i, &v)| i == 1 || v == 0));
}

#[test]
fn test_unbalanced_close() {
    let err = run_commands("]$", vec![], 10).unwrap_err();
    assert!(matches!(err, RunError::UnbalancedBrackets { .. }));
}

#[test]
fn test_missing_terminator() {
    let err = run_commands(">", vec![], 10).unwrap_err();
    assert_eq!(err, RunError::MissingTerminator);
}

#[test]
fn test_underflow_at_start() {
    let err = run_commands("<$", vec![], 10).unwrap_err();
    assert!(matches!(
        err,
        RunError::DataPointerUnderflow { position: 0, .. }
    ));
}

#[test]
fn test_overflow_reports_location() {
    let source = "# walk off the end\n>>\n  >$\n";
    let config = MachineConfig::default().with_tape_capacity(3);
    let err = run_source(source, None, &config).unwrap_err();

    match err {
        RunError::DataPointerOverflow {
            position,
            location,
            capacity,
        } => {
            assert_eq!(position, 2);
            assert_eq!((location.line, location.column), (3, 3));
            assert_eq!(capacity, 3);
        }
        other => panic!("Expected overflow, got {:?}", other),
    }
}

#[test]
fn test_exhausted_input_leaves_cell() {
    let output = run_source("+++,.$", None, &MachineConfig::default()).unwrap();
    assert_eq!(output.values(), &[3]);
}

#[test]
fn test_clear_loop_always_ends_at_zero() {
    for start in [1, 2, 7, 100, 1234] {
        let config = MachineConfig::default().with_tape_capacity(1);
        let mut machine = Machine::new(
            Program::from_commands(",[-]$"),
            InputQueue::new(vec![start]),
            &config,
        )
        .unwrap();
        machine.run().unwrap();
        assert_eq!(machine.tape().cells(), &[0], "start value {}", start);
    }
}

#[test]
fn test_nested_loops_multiply() {
    // 3 * 4 into cell 2
    let values = run_commands("+++[>++++[>+<-]<-]>>.$", vec![], 3).unwrap();
    assert_eq!(values, vec![12]);
}

#[test]
fn test_text_input_and_text_output() {
    let output = run_source(",[.,]$", Some("Hi\n0"), &MachineConfig::default()).unwrap();
    assert_eq!(output.values(), &[72, 105]);
    assert_eq!(output.render_text(), "Hi");
}

#[test]
fn test_numeric_only_input_rejects_text() {
    let config = MachineConfig::default().with_input_mode(InputMode::NumericOnly);
    let err = run_source(",.$", Some("12\nabc"), &config).unwrap_err();
    assert_eq!(
        err,
        RunError::MalformedInputLine {
            line: 2,
            text: "abc".to_string()
        }
    );
}

#[test]
fn test_decimal_rendering() {
    let config = MachineConfig::default().with_tape_capacity(3);
    let output = run_source("++.>+.$", None, &config).unwrap();
    assert_eq!(output.render_decimal(), "2\n1\nMemory:\n2; 1; 0\n");
}

#[test]
fn test_hello_demo() {
    let program = load_program(Path::new("demos/hello.bf")).expect("Failed to read demo");
    let machine = Machine::new(program, InputQueue::empty(), &MachineConfig::default())
        .expect("Validation failed");
    let output = machine.execute().expect("Execution failed");

    assert_eq!(output.render_text(), "Hello World!\n");
}

#[test]
fn test_add_demo() {
    let program = load_program(Path::new("demos/add.bf")).unwrap();
    let input = load_input(Path::new("demos/add.in"), InputMode::NumericOnly).unwrap();
    let output = Machine::new(program, input, &MachineConfig::default())
        .unwrap()
        .execute()
        .unwrap();

    assert_eq!(output.values(), &[7]);
}

#[test]
fn test_echo_demo() {
    let program = load_program(Path::new("demos/echo.bf")).unwrap();
    let input = load_input(Path::new("demos/echo.in"), InputMode::Lenient).unwrap();
    let output = Machine::new(program, input, &MachineConfig::default())
        .unwrap()
        .execute()
        .unwrap();

    assert_eq!(output.render_text(), "Hi");
}

#[test]
fn test_missing_input_file() {
    let err = load_input(Path::new("demos/nope.in"), InputMode::Lenient).unwrap_err();
    assert!(matches!(err, RunError::SourceUnavailable { .. }));
}

#[test]
fn test_add_demo_written_to_output_file() {
    let program = load_program(Path::new("demos/add.bf")).unwrap();
    let input = load_input(Path::new("demos/add.in"), InputMode::Lenient).unwrap();
    let config = MachineConfig::default().with_tape_capacity(2);
    let output = Machine::new(program, input, &config).unwrap().execute().unwrap();

    let path = std::env::temp_dir().join(format!("tapemachine-add-{}.out", std::process::id()));
    output.write_to(&path).unwrap();
    let written = std::fs::read_to_string(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(written, "7\nMemory:\n7; 0\n");
}

#[test]
fn test_partial_output_survives_runtime_error() {
    let config = MachineConfig::default().with_tape_capacity(1);
    let mut machine = Machine::new(
        Program::from_source("+++.\n>$\n"),
        InputQueue::empty(),
        &config,
    )
    .unwrap();

    let err = machine.run().unwrap_err();
    assert!(err.is_runtime());
    assert_eq!(machine.into_output().render_decimal(), "3\n");
}

#[test]
fn test_timeline_matches_plain_run() {
    let program = load_program(Path::new("demos/hello.bf")).unwrap();
    let machine = Machine::new(program, InputQueue::empty(), &MachineConfig::default()).unwrap();
    let mut timeline = Timeline::record(machine, 256 * 1024 * 1024);

    assert_eq!(timeline.outcome(), &RunOutcome::Halted);
    timeline.jump_to_end();
    assert_eq!(timeline.final_output().render_text(), "Hello World!\n");
    assert_eq!(timeline.output_values().len(), 13);
    assert!(timeline.memory_dump().is_some());
}
