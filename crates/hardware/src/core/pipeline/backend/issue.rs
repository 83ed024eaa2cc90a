//! Issue Stage: wakeup, select, and completion.
//!
//! Each cycle the integer queue first re-derives operand readiness from the
//! busy table (wakeup), then up to `width` entries with both operands ready are
//! selected, oldest PC first. Issue, execution and write-back collapse into one
//! event with no latency: the destination's busy flag is cleared and the
//! matching active list entry is marked done. No value is computed.
//!
//! An instruction whose PC appears in `fault_pcs` completes with its exception
//! flag set instead; commit will take the exception when it reaches the head.

use tracing::trace;

use crate::core::ProcessorState;

/// Executes the issue stage. Returns the number of instructions issued.
pub fn issue_stage(state: &mut ProcessorState, width: usize, fault_pcs: &[usize]) -> usize {
    state
        .integer_queue
        .wake_up(&state.busy_table, &state.register_file);

    let selected = state.integer_queue.select(width);
    for entry in &selected {
        state.busy_table.clear(entry.dest_reg);
        if fault_pcs.contains(&entry.pc) {
            state.active_list.fault(entry.pc);
            trace!("IS  pc={} p{} * EXCEPTION", entry.pc, entry.dest_reg);
        } else {
            state.active_list.complete(entry.pc);
            trace!("IS  pc={} p{} {}", entry.pc, entry.dest_reg, entry.opcode);
        }
    }
    selected.len()
}
