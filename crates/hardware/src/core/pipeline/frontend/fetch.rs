//! Fetch&Decode Stage.
//!
//! Appends the PCs of not-yet-fetched instructions to the decode buffer, in
//! program order, and advances the PC past them. The stage is purely
//! positional with no hazard checks. It tops the decode buffer up to `width`
//! entries: behind a batch that failed to dispatch it fetches only into the
//! remaining room, so a stalled batch never grows past what one dispatch can
//! take.

use tracing::trace;

use crate::core::ProcessorState;

/// Executes the fetch stage. Returns the number of instructions fetched.
pub fn fetch_stage(state: &mut ProcessorState, program_len: usize, width: usize) -> usize {
    let room = width.saturating_sub(state.decoded_pcs.len());
    let count = program_len.saturating_sub(state.pc).min(room);
    for _ in 0..count {
        trace!("IF  pc={}", state.pc);
        state.decoded_pcs.push(state.pc);
        state.pc += 1;
    }
    count
}
