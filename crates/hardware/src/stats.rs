//! Simulation statistics collection and reporting.
//!
//! This module tracks performance metrics for a run. It provides:
//! 1. **Cycle and IPC:** Total cycles, committed instructions and derived IPC/CPI.
//! 2. **Throughput:** Fetched, dispatched and issued instruction counts.
//! 3. **Stalls:** Dispatch stalls broken down by the resource that ran out.
//! 4. **Exceptions:** Exceptions taken, recovery cycles and squashed instructions.
//! 5. **Occupancy:** Peak active list and integer queue fill.

use serde::Serialize;

use crate::core::ProcessorState;
use crate::core::pipeline::engine::{CycleKind, CycleReport};
use crate::core::pipeline::frontend::{DispatchOutcome, StallReason};

/// Simulation statistics structure tracking all performance metrics.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SimStats {
    /// Total simulated cycles.
    pub cycles: u64,
    /// Cycles spent in exception recovery.
    pub recovery_cycles: u64,
    /// Instructions moved into the decode buffer.
    pub instructions_fetched: u64,
    /// Instructions renamed and dispatched.
    pub instructions_dispatched: u64,
    /// Instructions issued from the integer queue.
    pub instructions_issued: u64,
    /// Instructions retired.
    pub instructions_committed: u64,

    /// Dispatch batches held back by an empty free list.
    pub stalls_free_list: u64,
    /// Dispatch batches held back by a full active list.
    pub stalls_active_list: u64,
    /// Dispatch batches held back by a full integer queue.
    pub stalls_integer_queue: u64,

    /// Exceptions taken (recovery cycles run).
    pub exceptions_taken: u64,
    /// In-flight instructions discarded by recovery.
    pub instructions_squashed: u64,

    /// Largest active list occupancy seen at the end of a cycle.
    pub peak_active_list: usize,
    /// Largest integer queue occupancy seen at the end of a cycle.
    pub peak_integer_queue: usize,
}

impl SimStats {
    /// Folds one cycle's report and the resulting state into the counters.
    pub fn record(&mut self, report: &CycleReport, state: &ProcessorState) {
        self.cycles += 1;
        self.instructions_fetched += report.fetched as u64;
        self.instructions_issued += report.issued as u64;
        self.instructions_committed += report.committed as u64;
        self.instructions_squashed += report.squashed as u64;

        match report.dispatch {
            DispatchOutcome::Idle => {}
            DispatchOutcome::Dispatched(n) => self.instructions_dispatched += n as u64,
            DispatchOutcome::Stalled(StallReason::FreeList) => self.stalls_free_list += 1,
            DispatchOutcome::Stalled(StallReason::ActiveList) => self.stalls_active_list += 1,
            DispatchOutcome::Stalled(StallReason::IntegerQueue) => {
                self.stalls_integer_queue += 1;
            }
        }

        if report.kind == CycleKind::Recovery {
            self.recovery_cycles += 1;
            self.exceptions_taken += 1;
        }

        self.peak_active_list = self.peak_active_list.max(state.active_list.len());
        self.peak_integer_queue = self.peak_integer_queue.max(state.integer_queue.len());
    }

    /// Total dispatch stall cycles.
    pub const fn dispatch_stalls(&self) -> u64 {
        self.stalls_free_list + self.stalls_active_list + self.stalls_integer_queue
    }

    /// Committed instructions per cycle.
    pub fn ipc(&self) -> f64 {
        if self.cycles == 0 {
            0.0
        } else {
            self.instructions_committed as f64 / self.cycles as f64
        }
    }

    /// Cycles per committed instruction.
    pub fn cpi(&self) -> f64 {
        if self.instructions_committed == 0 {
            0.0
        } else {
            self.cycles as f64 / self.instructions_committed as f64
        }
    }

    /// Prints the statistics report to stdout.
    pub fn print(&self) {
        let cyc = self.cycles.max(1) as f64;
        println!("\n==========================================================");
        println!("OUT-OF-ORDER CORE SIMULATION STATISTICS");
        println!("==========================================================");
        println!("sim_cycles               {}", self.cycles);
        println!("sim_insts                {}", self.instructions_committed);
        println!("sim_ipc                  {:.4}", self.ipc());
        println!("sim_cpi                  {:.4}", self.cpi());
        println!("----------------------------------------------------------");
        println!("PIPELINE THROUGHPUT");
        println!("  fetched                {}", self.instructions_fetched);
        println!("  dispatched             {}", self.instructions_dispatched);
        println!("  issued                 {}", self.instructions_issued);
        println!("  committed              {}", self.instructions_committed);
        println!("----------------------------------------------------------");
        println!("DISPATCH STALLS");
        println!(
            "  stalls.free_list       {} ({:.2}%)",
            self.stalls_free_list,
            (self.stalls_free_list as f64 / cyc) * 100.0
        );
        println!(
            "  stalls.active_list     {} ({:.2}%)",
            self.stalls_active_list,
            (self.stalls_active_list as f64 / cyc) * 100.0
        );
        println!(
            "  stalls.integer_queue   {} ({:.2}%)",
            self.stalls_integer_queue,
            (self.stalls_integer_queue as f64 / cyc) * 100.0
        );
        println!("----------------------------------------------------------");
        println!("EXCEPTIONS");
        println!("  exceptions.taken       {}", self.exceptions_taken);
        println!("  recovery_cycles        {}", self.recovery_cycles);
        println!("  squashed               {}", self.instructions_squashed);
        println!("----------------------------------------------------------");
        println!("OCCUPANCY");
        println!("  peak.active_list       {}", self.peak_active_list);
        println!("  peak.integer_queue     {}", self.peak_integer_queue);
        println!("==========================================================");
    }
}
