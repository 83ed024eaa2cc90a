//! Out-of-order core simulator library.
//!
//! This crate implements a cycle-accurate model of an out-of-order superscalar
//! execution core with the following:
//! 1. **Core:** Processor state, register renaming (map table, free list, busy flags),
//!    active list, integer queue, and the Fetch&Decode, Rename&Dispatch, Issue and
//!    Commit stages with exception recovery.
//! 2. **ISA:** Typed records and a text decoder for a small arithmetic instruction set.
//! 3. **Simulation:** Program loader, cycle driver, per-cycle snapshot trace and statistics.
//!
//! The model tracks operand readiness, not computed values.

/// Common types and constants (register counts, capacities, errors, register file).
pub mod common;
/// Simulator configuration (defaults, pipeline sizing, validation).
pub mod config;
/// Processor core (state model and pipeline).
pub mod core;
/// Instruction set (opcodes, instruction records, text decoder).
pub mod isa;
/// Program loader, cycle driver and snapshot trace.
pub mod sim;
/// Simulation statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Full microarchitectural state; one clone per snapshot.
pub use crate::core::ProcessorState;
/// Cycle driver; construct with `Simulator::new` or `Simulator::from_source`.
pub use crate::sim::Simulator;
