//! Out-of-order pipeline implementation.
//!
//! This module contains the renaming, scheduling and retirement structures and
//! the stages that operate on them. It includes the following components:
//! 1. **Structures:** Free list, register map table, busy table, active list and integer queue.
//! 2. **Frontend:** Fetch&Decode and Rename&Dispatch.
//! 3. **Backend:** Issue, Commit and Exception Recovery.
//! 4. **Engine:** The per-cycle sequencing of the stages.

/// Backend stages (issue, commit, exception recovery).
pub mod backend;

/// Per-cycle stage sequencing.
pub mod engine;

/// Physical register free list.
pub mod free_list;

/// Frontend stages (fetch, rename/dispatch).
pub mod frontend;

/// Integer queue (reservation stations).
pub mod issue_queue;

/// Architectural to physical register map table.
pub mod map_table;

/// Active list (reorder buffer).
pub mod rob;

/// Physical register busy flags.
pub mod scoreboard;

pub use engine::{CycleKind, CycleReport, Pipeline};
