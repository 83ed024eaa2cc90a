//! Exception Recovery: full pipeline flush and rename rollback.
//!
//! Runs in place of the four pipeline stages for exactly one cycle once commit
//! has latched an exception. The active list is unwound from its youngest entry
//! to its oldest, so a register renamed several times in flight ends up mapped
//! to the physical register it had before the oldest of those renames. Every
//! register an unwound instruction had allocated goes back to the front of the
//! free list with its busy flag cleared. Integer queue entries and the decode
//! buffer are discarded and the front end restarts at the handler address.

use tracing::{debug, trace};

use crate::core::ProcessorState;

/// Executes exception recovery. Returns the number of instructions squashed.
pub fn exception_recovery(state: &mut ProcessorState, handler_pc: usize) -> usize {
    let mut squashed = 0;

    while let Some(entry) = state.active_list.pop_youngest() {
        let released = state.map_table.remap(entry.logical_dest, entry.old_dest);
        state.free_list.restore(released);
        state.busy_table.clear(released);
        squashed += 1;
        trace!(
            "EX  pc={} x{}: p{} -> p{}",
            entry.pc, entry.logical_dest, released, entry.old_dest
        );
    }

    state.integer_queue.flush();
    state.decoded_pcs.clear();

    debug!(
        "EX  recovered from exception at pc={}, squashed {} (handler={:#x})",
        state.exception_pc, squashed, handler_pc
    );
    state.pc = handler_pc;
    state.exception = false;

    squashed
}
