//! Commit Stage: retire instructions from the active list head.
//!
//! Retires up to `width` done instructions per cycle, strictly in program order:
//! the first entry that is not done ends retirement for the cycle, even if
//! younger entries behind it have completed. For each retired instruction:
//! 1. Return its old destination register to the free list.
//! 2. Clear that register's busy flag.
//! 3. If it carries an exception, latch it and stop retiring.

use tracing::{debug, trace};

use crate::core::ProcessorState;

/// Executes the commit stage. Returns the number of instructions retired.
pub fn commit_stage(state: &mut ProcessorState, width: usize) -> usize {
    let mut retired = 0;

    while retired < width {
        let Some(entry) = state.active_list.commit_head() else {
            break; // empty, or head not done yet
        };
        retired += 1;

        state.free_list.release(entry.old_dest);
        state.busy_table.clear(entry.old_dest);

        if entry.exception {
            debug!("CM  pc={} * EXCEPTION latched", entry.pc);
            state.raise_exception(entry.pc);
            break;
        }

        trace!(
            "CM  pc={} x{} frees p{}",
            entry.pc, entry.logical_dest, entry.old_dest
        );
    }

    retired
}
