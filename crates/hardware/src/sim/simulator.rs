//! Simulator: owns the processor state, the program and the cycle engine.
//!
//! The simulator is the single owner of [`ProcessorState`]; each cycle lends it
//! to the pipeline by exclusive reference. [`Simulator::run`] records a snapshot
//! before cycle 0 and after every cycle until the pipeline drains or the cycle
//! cap is hit.

use tracing::{debug, info, warn};

use crate::common::error::{ConfigError, SimError};
use crate::config::Config;
use crate::core::ProcessorState;
use crate::core::pipeline::engine::{CycleReport, Pipeline};
use crate::isa::Instruction;
use crate::sim::loader;
use crate::sim::trace::{Outcome, Trace};
use crate::stats::SimStats;

/// Top-level simulator: processor state + program + pipeline.
#[derive(Clone, Debug)]
pub struct Simulator {
    state: ProcessorState,
    program: Vec<Instruction>,
    pipeline: Pipeline,
    stats: SimStats,
    cycle_limit: u64,
}

impl Simulator {
    /// Creates a simulator for `program` in the reset state.
    ///
    /// # Errors
    ///
    /// Returns the [`ConfigError`] if `config` fails validation.
    pub fn new(program: Vec<Instruction>, config: &Config) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            state: ProcessorState::new(&config.pipeline),
            program,
            pipeline: Pipeline::new(config),
            stats: SimStats::default(),
            cycle_limit: config.general.cycle_limit,
        })
    }

    /// Decodes assembly lines and creates a simulator for them.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Load`] for a malformed line and [`SimError::Config`]
    /// for an invalid configuration.
    pub fn from_source<S: AsRef<str>>(lines: &[S], config: &Config) -> Result<Self, SimError> {
        let program = loader::decode_program(lines)?;
        Ok(Self::new(program, config)?)
    }

    /// Current processor state.
    pub const fn state(&self) -> &ProcessorState {
        &self.state
    }

    /// Mutable processor state, for setting up scenarios.
    pub const fn state_mut(&mut self) -> &mut ProcessorState {
        &mut self.state
    }

    /// The instruction stream.
    pub fn program(&self) -> &[Instruction] {
        &self.program
    }

    /// Counters accumulated so far.
    pub const fn stats(&self) -> &SimStats {
        &self.stats
    }

    /// Whether the run is complete: every instruction fetched, the decode
    /// buffer and active list empty, and no exception waiting for recovery.
    pub fn is_finished(&self) -> bool {
        self.state.pc >= self.program.len()
            && self.state.decoded_pcs.is_empty()
            && self.state.active_list.is_empty()
            && !self.state.exception
    }

    /// Advances the simulation by one clock cycle.
    pub fn tick(&mut self) -> CycleReport {
        let report = self.pipeline.tick(&mut self.state, &self.program);
        self.state.clock_cycle += 1;
        self.stats.record(&report, &self.state);
        debug!(
            "cycle {}: {:?} fetched={} dispatch={:?} issued={} committed={}",
            self.state.clock_cycle,
            report.kind,
            report.fetched,
            report.dispatch,
            report.issued,
            report.committed
        );
        report
    }

    /// Runs until the pipeline drains or the cycle cap is reached.
    ///
    /// The termination test happens before each cycle, so an empty program
    /// yields exactly one snapshot (the reset state).
    pub fn run(&mut self) -> Trace {
        let mut snapshots = vec![self.state.clone()];

        let outcome = loop {
            if self.is_finished() {
                break Outcome::Drained;
            }
            if self.state.clock_cycle >= self.cycle_limit {
                warn!(
                    "cycle limit {} reached with {} instructions in flight",
                    self.cycle_limit,
                    self.state.active_list.len()
                );
                break Outcome::CycleLimitReached {
                    limit: self.cycle_limit,
                };
            }
            let _report = self.tick();
            snapshots.push(self.state.clone());
        };

        info!(
            "run finished after {} cycles ({:?}), {} committed, ipc {:.3}",
            self.state.clock_cycle,
            outcome,
            self.stats.instructions_committed,
            self.stats.ipc()
        );

        Trace {
            snapshots,
            outcome,
            stats: self.stats.clone(),
        }
    }
}
