//! Out-of-order core simulator CLI.
//!
//! Loads a JSON program (`["addi x1, x0, 5", ...]`), runs it to completion and
//! writes the per-cycle state snapshots as JSON. It performs:
//! 1. **Configuration:** Built-in defaults, optionally overridden by a JSON config
//!    file and then by command-line flags.
//! 2. **Run:** Cycle-by-cycle simulation until the pipeline drains or the cycle cap hits.
//! 3. **Output:** Snapshot trace (always written), optional statistics report.
//!
//! Exit status: 0 when the pipeline drained, 2 when the cycle cap aborted the run
//! (the trace is still written), 1 on any input, configuration or output error.

use std::path::PathBuf;
use std::{fs, process};

use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use ooosim_core::Simulator;
use ooosim_core::common::error::SimError;
use ooosim_core::config::Config;
use ooosim_core::sim::loader;

/// Exit status for a run aborted by the cycle cap.
const EXIT_CYCLE_LIMIT: i32 = 2;

#[derive(Parser, Debug)]
#[command(
    name = "sim",
    author,
    version,
    about = "Cycle-accurate out-of-order core simulator",
    long_about = "Run an instruction stream through the out-of-order core model and dump the \
                  processor state after every cycle.\n\nExamples:\n  sim program.json trace.json\n  \
                  sim program.json trace.json --stats --cycle-limit 5000\n  \
                  sim program.json trace.json --fault-pc 3 -v"
)]
struct Cli {
    /// JSON array of instructions to simulate.
    input: PathBuf,

    /// Where to write the JSON snapshot trace.
    output: PathBuf,

    /// JSON configuration file (every field optional).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the cycle safety cap.
    #[arg(long)]
    cycle_limit: Option<u64>,

    /// Raise an exception when the instruction at this PC issues (repeatable).
    #[arg(long = "fault-pc")]
    fault_pcs: Vec<usize>,

    /// Print the statistics report after the run.
    #[arg(long)]
    stats: bool,

    /// Per-stage tracing to stderr (-v debug, -vv trace). `RUST_LOG` overrides.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(()) => {}
        Err(e @ SimError::CycleLimit { .. }) => {
            error!("{e}");
            eprintln!("[!] {e}");
            process::exit(EXIT_CYCLE_LIMIT);
        }
        Err(e) => {
            error!("{e}");
            eprintln!("[!] FATAL: {e}");
            process::exit(1);
        }
    }
}

/// Installs the stderr subscriber; `RUST_LOG` wins over `-v`.
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Builds the configuration: defaults, then the config file, then flags.
fn build_config(cli: &Cli) -> Result<Config, SimError> {
    let mut config = match &cli.config {
        Some(path) => Config::from_json(&fs::read_to_string(path)?)?,
        None => Config::default(),
    };
    if let Some(limit) = cli.cycle_limit {
        config.general.cycle_limit = limit;
    }
    config.general.fault_pcs.extend(cli.fault_pcs.iter().copied());
    config.validate()?;
    Ok(config)
}

/// Loads, simulates and writes the trace. The trace is written before the
/// outcome is checked so an aborted run can still be inspected.
fn run(cli: &Cli) -> Result<(), SimError> {
    let config = build_config(cli)?;
    let program = loader::load_program(&cli.input)?;

    let mut sim = Simulator::new(program, &config)?;
    let trace = sim.run();
    trace.save(&cli.output)?;

    if cli.stats {
        trace.stats.print();
    }
    trace.check_outcome()
}
