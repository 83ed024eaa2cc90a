use ooosim_core::core::ProcessorState;

/// Every physical register is in exactly one of: free list, map table, or the
/// old destination of an in-flight active list entry.
pub fn assert_register_accounting(state: &ProcessorState) {
    let mut owners = vec![0usize; state.phys_regs()];
    for preg in state.free_list.iter() {
        owners[preg] += 1;
    }
    for preg in state.map_table.iter() {
        owners[preg] += 1;
    }
    for entry in state.active_list.iter() {
        owners[entry.old_dest] += 1;
    }
    for (preg, count) in owners.iter().enumerate() {
        assert_eq!(
            *count, 1,
            "cycle {}: p{} is owned {} times",
            state.clock_cycle, preg, count
        );
    }
}

/// Active list and integer queue stay within their capacities.
pub fn assert_capacity(state: &ProcessorState) {
    assert!(
        state.active_list.len() <= state.active_list.capacity(),
        "cycle {}: active list holds {}",
        state.clock_cycle,
        state.active_list.len()
    );
    assert!(
        state.integer_queue.len() <= state.integer_queue.capacity(),
        "cycle {}: integer queue holds {}",
        state.clock_cycle,
        state.integer_queue.len()
    );
}

/// Entries that left the active list between two snapshots form a prefix of the
/// earlier list (in-order commit), unless recovery emptied it.
pub fn assert_in_order_retirement(prev: &ProcessorState, next: &ProcessorState) {
    let prev_pcs: Vec<usize> = prev.active_list.iter().map(|e| e.pc).collect();
    let survivors: Vec<usize> = next
        .active_list
        .iter()
        .map(|e| e.pc)
        .filter(|pc| prev_pcs.contains(pc))
        .collect();
    let removed = prev_pcs.len() - survivors.len();
    assert_eq!(
        &prev_pcs[removed..],
        survivors.as_slice(),
        "cycle {}: retirement skipped an older instruction",
        next.clock_cycle
    );
}

/// After a pipeline cycle the decode buffer is either empty (batch dispatched)
/// or the old batch plus everything fetched behind it (batch stalled whole).
pub fn assert_dispatch_atomic(prev: &ProcessorState, next: &ProcessorState) {
    if next.decoded_pcs.is_empty() || prev.exception {
        return;
    }
    let fetched = next.pc.saturating_sub(prev.pc);
    assert!(
        next.decoded_pcs.starts_with(&prev.decoded_pcs),
        "cycle {}: part of a stalled batch was dispatched",
        next.clock_cycle
    );
    assert_eq!(
        next.decoded_pcs.len(),
        prev.decoded_pcs.len() + fetched,
        "cycle {}: decode buffer lost instructions",
        next.clock_cycle
    );
}

/// Runs every per-snapshot and per-transition check over a trace.
pub fn assert_trace_invariants(snapshots: &[ProcessorState]) {
    for state in snapshots {
        assert_register_accounting(state);
        assert_capacity(state);
    }
    for pair in snapshots.windows(2) {
        assert_in_order_retirement(&pair[0], &pair[1]);
        assert_dispatch_atomic(&pair[0], &pair[1]);
    }
}
