//! Processor state.
//!
//! Everything the pipeline stages read and write lives in one
//! [`ProcessorState`], owned by the simulator and lent to each stage by
//! exclusive reference. A clone of it is the per-cycle snapshot; its serde
//! form is the trace format.

use serde::Serialize;

use crate::common::constants::ARCH_REGS;
use crate::common::reg::RegisterFile;
use crate::config::PipelineConfig;
use crate::core::pipeline::free_list::FreeList;
use crate::core::pipeline::issue_queue::IntegerQueue;
use crate::core::pipeline::map_table::RegisterMapTable;
use crate::core::pipeline::rob::ActiveList;
use crate::core::pipeline::scoreboard::BusyTable;

/// Full microarchitectural state of the core.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ProcessorState {
    /// Next instruction index to fetch.
    #[serde(rename = "PC")]
    pub pc: usize,
    /// Physical register values.
    #[serde(rename = "PhysicalRegisterFile")]
    pub register_file: RegisterFile,
    /// Fetched PCs awaiting rename/dispatch, in program order.
    #[serde(rename = "DecodedPCs")]
    pub decoded_pcs: Vec<usize>,
    /// Exception latched by commit; recovery runs next cycle.
    #[serde(rename = "Exception")]
    pub exception: bool,
    /// PC of the instruction that raised the latched exception.
    #[serde(rename = "ExceptionPC")]
    pub exception_pc: usize,
    /// Architectural → physical mapping.
    #[serde(rename = "RegisterMapTable")]
    pub map_table: RegisterMapTable,
    /// Unallocated physical registers.
    #[serde(rename = "FreeList")]
    pub free_list: FreeList,
    /// Physical register busy flags.
    #[serde(rename = "BusyBitTable")]
    pub busy_table: BusyTable,
    /// In-flight instructions in program order.
    #[serde(rename = "ActiveList")]
    pub active_list: ActiveList,
    /// Dispatched instructions awaiting issue.
    #[serde(rename = "IntegerQueue")]
    pub integer_queue: IntegerQueue,
    /// Cycles simulated so far.
    #[serde(rename = "ClockCycle")]
    pub clock_cycle: u64,
}

impl ProcessorState {
    /// Creates the reset state: identity mapping for `x0`..`x31`, every
    /// remaining physical register free, nothing busy or in flight.
    pub fn new(pipeline: &PipelineConfig) -> Self {
        Self {
            pc: 0,
            register_file: RegisterFile::new(pipeline.phys_regs),
            decoded_pcs: Vec::with_capacity(pipeline.fetch_width),
            exception: false,
            exception_pc: 0,
            map_table: RegisterMapTable::new(ARCH_REGS),
            free_list: FreeList::new(ARCH_REGS, pipeline.phys_regs),
            busy_table: BusyTable::new(pipeline.phys_regs),
            active_list: ActiveList::new(pipeline.active_list_size),
            integer_queue: IntegerQueue::new(pipeline.integer_queue_size),
            clock_cycle: 0,
        }
    }

    /// Number of physical registers.
    #[inline]
    pub fn phys_regs(&self) -> usize {
        self.register_file.len()
    }

    /// Latches an exception raised by the instruction at `pc`.
    pub fn raise_exception(&mut self, pc: usize) {
        self.exception = true;
        self.exception_pc = pc;
    }
}

impl Default for ProcessorState {
    fn default() -> Self {
        Self::new(&PipelineConfig::default())
    }
}
