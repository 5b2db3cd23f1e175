// tapemachine: tape-machine interpreter with a time-travel debugger

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use tapemachine::interpreter::constants::DEFAULT_TAPE_CAPACITY;
use tapemachine::interpreter::history::Timeline;
use tapemachine::ui::App;
use tapemachine::{
    load_input, load_program, logging, CellArithmetic, InputMode, InputQueue, Machine,
    MachineConfig, RunError,
};

#[derive(Parser)]
#[command(
    name = "tapemachine",
    version,
    about = "Run tape-machine programs, or step through them in a terminal debugger"
)]
struct Cli {
    /// Program file. Lines starting with `#` are comments.
    program: PathBuf,

    /// Input file: one integer or one line of text per line.
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Also write the decimal output to this file.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Number of tape cells.
    #[arg(short, long, default_value_t = DEFAULT_TAPE_CAPACITY)]
    capacity: usize,

    /// Keep cells in 0..=255, wrapping on overflow.
    #[arg(long)]
    byte_cells: bool,

    /// Reject input lines that are not integers.
    #[arg(long)]
    numeric_input: bool,

    /// Also print the output as text.
    #[arg(long)]
    text: bool,

    /// Record the run and open the step-through debugger.
    #[arg(long)]
    tui: bool,

    /// Snapshot memory budget for --tui, in megabytes.
    #[arg(long, default_value_t = 256)]
    snapshot_limit_mb: usize,
}

impl Cli {
    fn config(&self) -> MachineConfig {
        let arithmetic = if self.byte_cells {
            CellArithmetic::Byte
        } else {
            CellArithmetic::Wrapping32
        };
        let input_mode = if self.numeric_input {
            InputMode::NumericOnly
        } else {
            InputMode::Lenient
        };

        MachineConfig::default()
            .with_tape_capacity(self.capacity)
            .with_cell_arithmetic(arithmetic)
            .with_input_mode(input_mode)
            .with_snapshot_limit(self.snapshot_limit_mb.saturating_mul(1024 * 1024))
    }
}

fn main() -> ExitCode {
    logging::init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match err.downcast_ref::<RunError>() {
                Some(run_err) if run_err.is_runtime() => eprintln!("Program failed: {}", run_err),
                _ => eprintln!("Error: {}", err),
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = cli.config();

    let program = load_program(&cli.program)?;
    let input = match &cli.input {
        Some(path) => load_input(path, config.input_mode)?,
        None => InputQueue::empty(),
    };

    let mut machine = Machine::new(program, input, &config)?;

    if cli.tui {
        return run_tui(machine, &config);
    }

    // Values emitted before a runtime failure are still reported
    let result = machine.run();
    let output = machine.into_output();
    print!("{}", output.render_decimal());
    if cli.text {
        println!("{}", output.render_text());
    }
    if let Some(path) = &cli.output {
        output.write_to(path)?;
    }
    result?;
    Ok(())
}

fn run_tui(machine: Machine, config: &MachineConfig) -> Result<(), Box<dyn std::error::Error>> {
    eprintln!("Recording execution...");
    let timeline = Timeline::record(machine, config.snapshot_limit);
    eprintln!("Recorded {} snapshots.", timeline.len());

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(timeline);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res?;
    report_outcome(&app.timeline);
    Ok(())
}

/// After leaving the debugger, say how the recorded run ended
fn report_outcome(timeline: &Timeline) {
    use tapemachine::interpreter::history::RunOutcome;

    match timeline.outcome() {
        RunOutcome::Halted => eprintln!("Program successfully ended."),
        RunOutcome::Failed(err) => eprintln!("Program failed: {}", err),
        RunOutcome::Truncated(RunError::SnapshotLimitExceeded { limit, .. }) => eprintln!(
            "History stopped at the {} byte snapshot limit; the program did not finish.",
            limit
        ),
        RunOutcome::Truncated(err) => eprintln!("History stopped: {}", err),
    }
}
