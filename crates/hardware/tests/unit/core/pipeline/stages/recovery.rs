//! Exception Recovery Unit Tests.
//!
//! Verifies that `exception_recovery` correctly performs:
//!   1. Youngest-first rename rollback of every in-flight instruction
//!   2. Return of rolled-back registers to the front of the free list
//!   3. Flush of the integer queue and decode buffer
//!   4. Redirect to the handler and clearing of the exception flag

use ooosim_core::common::EXCEPTION_HANDLER_PC;
use ooosim_core::core::ProcessorState;
use ooosim_core::core::pipeline::backend::{commit_stage, exception_recovery};
use ooosim_core::core::pipeline::frontend::{fetch_stage, rename_stage};
use pretty_assertions::assert_eq;

use crate::common::harness::program;

#[test]
fn rolls_back_to_reset_state() {
    let prog = program(&[
        "addi x1, x0, 1",
        "addi x1, x1, 1",
        "addi x1, x1, 1",
        "add x2, x1, x1",
        "addi x3, x0, 1",
        "addi x4, x0, 1",
    ]);
    let mut state = ProcessorState::default();
    let _fetched = fetch_stage(&mut state, prog.len(), 4);
    let _outcome = rename_stage(&mut state, &prog);
    let _fetched = fetch_stage(&mut state, prog.len(), 4);
    state.raise_exception(0);

    assert_eq!(exception_recovery(&mut state, EXCEPTION_HANDLER_PC), 4);

    let mut expected = ProcessorState::default();
    expected.pc = EXCEPTION_HANDLER_PC;
    assert_eq!(state, expected);
}

#[test]
fn rolled_back_registers_go_to_front_in_allocation_order() {
    let prog = program(&["addi x1, x0, 1", "addi x2, x0, 2", "addi x3, x0, 3"]);
    let mut state = ProcessorState::default();
    let _fetched = fetch_stage(&mut state, prog.len(), 4);
    let _outcome = rename_stage(&mut state, &prog);

    // Retire the first instruction so only x2 and x3 are unwound.
    state.active_list.complete(0);
    assert_eq!(commit_stage(&mut state, 4), 1);
    state.raise_exception(1);

    assert_eq!(exception_recovery(&mut state, 0x40), 2);

    let free: Vec<_> = state.free_list.iter().collect();
    assert_eq!(&free[..3], &[33, 34, 35]);
    assert_eq!(free.last(), Some(&1));
    assert_eq!(state.map_table.get(1), 32, "committed rename survives");
    assert_eq!(state.map_table.get(2), 2);
    assert_eq!(state.map_table.get(3), 3);
    assert!(!state.busy_table.is_busy(33));
    assert!(!state.busy_table.is_busy(34));
    assert_eq!(state.pc, 0x40);
    assert!(!state.exception);
    assert_eq!(state.exception_pc, 1, "exception pc is kept for inspection");
}

#[test]
fn recovery_with_empty_active_list() {
    let mut state = ProcessorState::default();
    state.raise_exception(3);
    assert_eq!(exception_recovery(&mut state, EXCEPTION_HANDLER_PC), 0);
    assert_eq!(state.pc, EXCEPTION_HANDLER_PC);
    assert!(state.integer_queue.is_empty());
    assert!(!state.exception);
}
