//! Cycle engine: one clock of the whole core.
//!
//! A cycle runs exactly one of two paths:
//! 1. **Recovery:** when commit latched an exception on the previous cycle.
//! 2. **Pipeline:** Fetch&Decode, Rename&Dispatch, Issue, Commit, in that fixed
//!    order. Each stage sees every state change made by the stages before it in
//!    the same cycle.

use crate::config::Config;
use crate::core::ProcessorState;
use crate::core::pipeline::backend::{commit_stage, exception_recovery, issue_stage};
use crate::core::pipeline::frontend::{DispatchOutcome, fetch_stage, rename_stage};
use crate::isa::Instruction;

/// Which path a cycle took.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CycleKind {
    /// The four pipeline stages ran.
    Pipeline,
    /// Exception recovery ran instead of the pipeline.
    Recovery,
}

/// What happened during one cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CycleReport {
    /// Path taken.
    pub kind: CycleKind,
    /// Instructions moved into the decode buffer.
    pub fetched: usize,
    /// Rename/dispatch result.
    pub dispatch: DispatchOutcome,
    /// Instructions issued.
    pub issued: usize,
    /// Instructions retired.
    pub committed: usize,
    /// Instructions squashed by recovery.
    pub squashed: usize,
}

impl CycleReport {
    const fn recovery(squashed: usize) -> Self {
        Self {
            kind: CycleKind::Recovery,
            fetched: 0,
            dispatch: DispatchOutcome::Idle,
            issued: 0,
            committed: 0,
            squashed,
        }
    }
}

/// Stage widths and exception parameters for the cycle engine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pipeline {
    fetch_width: usize,
    issue_width: usize,
    commit_width: usize,
    handler_pc: usize,
    fault_pcs: Vec<usize>,
}

impl Pipeline {
    /// Builds the engine from a configuration.
    pub fn new(config: &Config) -> Self {
        Self {
            fetch_width: config.pipeline.fetch_width,
            issue_width: config.pipeline.issue_width,
            commit_width: config.pipeline.commit_width,
            handler_pc: config.general.handler_pc,
            fault_pcs: config.general.fault_pcs.clone(),
        }
    }

    /// Runs one cycle against `state`. Does not advance the cycle counter.
    pub fn tick(&self, state: &mut ProcessorState, program: &[Instruction]) -> CycleReport {
        if state.exception {
            return CycleReport::recovery(exception_recovery(state, self.handler_pc));
        }

        let fetched = fetch_stage(state, program.len(), self.fetch_width);
        let dispatch = rename_stage(state, program);
        let issued = issue_stage(state, self.issue_width, &self.fault_pcs);
        let committed = commit_stage(state, self.commit_width);

        CycleReport {
            kind: CycleKind::Pipeline,
            fetched,
            dispatch,
            issued,
            committed,
            squashed: 0,
        }
    }
}
