//! Core processor implementation.
//!
//! This module contains the processor state model and the out-of-order
//! pipeline that advances it one clock cycle at a time.

/// Out-of-order pipeline (structures, stages, cycle engine).
pub mod pipeline;

/// Processor state owned by the simulator and lent to each stage.
pub mod state;

pub use self::state::ProcessorState;
