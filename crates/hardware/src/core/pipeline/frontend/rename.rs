//! Rename&Dispatch Stage: register renaming, active list and integer queue allocation.
//!
//! This stage consumes the whole decode buffer or nothing. Before touching any
//! state it checks that the free list, the active list and the integer queue can
//! each absorb the entire batch; if any check fails the batch waits for the next
//! cycle. Otherwise, for every instruction in program order:
//! 1. Resolve the source operands against the current map table and busy flags.
//! 2. Pop a physical register, remembering the destination's previous mapping.
//! 3. Append the active list entry and the integer queue entry.
//! 4. Mark the new destination busy.
//!
//! Sources are resolved BEFORE the destination is remapped, so an instruction
//! reading its own destination (e.g. `addi x5, x5, 1`) waits on the previous
//! producer, not on itself.

use tracing::{debug, trace};

use crate::core::ProcessorState;
use crate::core::pipeline::issue_queue::{IntegerQueueEntry, Operand};
use crate::core::pipeline::rob::ActiveListEntry;
use crate::isa::{Instruction, OperandB};

/// Which capacity check held back a dispatch batch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StallReason {
    /// Not enough free physical registers.
    FreeList,
    /// Not enough active list slots.
    ActiveList,
    /// Not enough integer queue slots.
    IntegerQueue,
}

/// Result of one rename/dispatch cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// The decode buffer was empty.
    Idle,
    /// The whole batch of this many instructions was dispatched.
    Dispatched(usize),
    /// Nothing was dispatched; the batch stays in the decode buffer.
    Stalled(StallReason),
}

/// Executes the rename/dispatch stage over the decode buffer.
///
/// # Panics
///
/// Panics if a buffered PC is outside `program`; fetch only ever buffers
/// indices into the stream.
pub fn rename_stage(state: &mut ProcessorState, program: &[Instruction]) -> DispatchOutcome {
    let batch = state.decoded_pcs.len();
    if batch == 0 {
        return DispatchOutcome::Idle;
    }

    if let Some(reason) = capacity_check(state, batch) {
        debug!(
            "RN  stall: {:?} (batch={} free={} al={} iq={})",
            reason,
            batch,
            state.free_list.len(),
            state.active_list.len(),
            state.integer_queue.len()
        );
        return DispatchOutcome::Stalled(reason);
    }

    let pcs = std::mem::take(&mut state.decoded_pcs);
    for &pc in &pcs {
        dispatch_one(state, pc, &program[pc]);
    }
    // Hand the emptied buffer back to keep its allocation.
    state.decoded_pcs = pcs;
    state.decoded_pcs.clear();

    DispatchOutcome::Dispatched(batch)
}

/// Returns the first resource that cannot take `batch` more instructions.
fn capacity_check(state: &ProcessorState, batch: usize) -> Option<StallReason> {
    if state.free_list.len() < batch {
        Some(StallReason::FreeList)
    } else if state.active_list.free_slots() < batch {
        Some(StallReason::ActiveList)
    } else if state.integer_queue.free_slots() < batch {
        Some(StallReason::IntegerQueue)
    } else {
        None
    }
}

/// Renames and dispatches one instruction. Capacity has already been checked.
fn dispatch_one(state: &mut ProcessorState, pc: usize, inst: &Instruction) {
    let op_a = Operand::from_register(
        state.map_table.get(inst.rs1),
        &state.busy_table,
        &state.register_file,
    );
    let op_b = match inst.op_b {
        OperandB::Imm(imm) => Operand::immediate(imm),
        OperandB::Reg(rs2) => Operand::from_register(
            state.map_table.get(rs2),
            &state.busy_table,
            &state.register_file,
        ),
    };

    let Some(new_preg) = state.free_list.allocate() else {
        unreachable!("free list checked before dispatch");
    };
    let old_preg = state.map_table.remap(inst.rd, new_preg);

    let allocated = state
        .active_list
        .allocate(ActiveListEntry::new(inst.rd, old_preg, pc));
    let queued = state.integer_queue.push(IntegerQueueEntry {
        dest_reg: new_preg,
        op_a,
        op_b,
        opcode: inst.opcode,
        pc,
    });
    debug_assert!(allocated && queued, "capacity checked before dispatch");

    state.busy_table.set_busy(new_preg);

    trace!(
        "RN  pc={} {} x{}: p{} -> p{}",
        pc, inst.opcode, inst.rd, old_preg, new_preg
    );
}
