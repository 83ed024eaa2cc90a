//! Simulation driver and program/trace I/O.
//!
//! Provides the cycle-driving [`Simulator`], the program loader that validates
//! instruction text before it reaches the core, and the snapshot trace.

/// Program file loading and validation.
pub mod loader;
/// Cycle driver.
pub mod simulator;
/// Snapshot trace and run outcome.
pub mod trace;

pub use simulator::Simulator;
pub use trace::{Outcome, Trace};
