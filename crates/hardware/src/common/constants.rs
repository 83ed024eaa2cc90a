//! Global Core Constants.
//!
//! This module defines the fixed parameters of the modelled core. It includes:
//! 1. **Register Constants:** Architectural and physical register counts.
//! 2. **Structure Sizes:** Active list and integer queue capacities.
//! 3. **Bandwidth:** Fetch, issue and commit widths.
//! 4. **Simulation Constants:** Exception handler address and the cycle safety cap.

/// Number of architectural integer registers (`x0`..`x31`).
pub const ARCH_REGS: usize = 32;

/// Number of physical registers backing the architectural state.
pub const PHYS_REGS: usize = 64;

/// Capacity of the active list (reorder buffer).
pub const ACTIVE_LIST_SIZE: usize = 32;

/// Capacity of the integer queue (reservation stations).
pub const INTEGER_QUEUE_SIZE: usize = 32;

/// Instructions fetched into the decode buffer per cycle.
pub const FETCH_WIDTH: usize = 4;

/// Instructions selected from the integer queue per cycle.
pub const ISSUE_WIDTH: usize = 4;

/// Instructions retired from the active list head per cycle.
pub const COMMIT_WIDTH: usize = 4;

/// PC the front end is redirected to after an exception is recovered.
pub const EXCEPTION_HANDLER_PC: usize = 0x10000;

/// Default number of cycles after which a run is aborted.
pub const DEFAULT_CYCLE_LIMIT: u64 = 1000;
