//! Common utilities and types used throughout the simulator.
//!
//! This module provides the building blocks shared by every part of the core:
//! 1. **Constants:** Register counts, structure capacities, widths and the handler address.
//! 2. **Error Handling:** Decode, load, configuration and simulation error types.
//! 3. **Register Storage:** The physical register file.

/// Common constants used throughout the simulator.
pub mod constants;

/// Error types for decoding, loading, configuration and simulation.
pub mod error;

/// Physical register file implementation.
pub mod reg;

pub use constants::{ACTIVE_LIST_SIZE, ARCH_REGS, EXCEPTION_HANDLER_PC, PHYS_REGS};
pub use error::{ConfigError, DecodeError, LoadError, SimError};
pub use reg::RegisterFile;
