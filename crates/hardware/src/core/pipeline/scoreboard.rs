//! Busy-bit table for physical register readiness.
//!
//! One flag per physical register: set when rename allocates the register as a
//! destination, cleared when the producing instruction issues (or the register
//! is reclaimed by commit or recovery). Issue re-reads these flags every cycle
//! to wake up waiting operands.

use serde::Serialize;

/// Busy flags indexed by physical register id.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct BusyTable {
    busy: Vec<bool>,
}

impl BusyTable {
    /// Creates a table with every register ready.
    pub fn new(phys_regs: usize) -> Self {
        Self {
            busy: vec![false; phys_regs],
        }
    }

    /// Whether `preg`'s value has not been produced yet.
    #[inline]
    pub fn is_busy(&self, preg: usize) -> bool {
        self.busy[preg]
    }

    /// Marks `preg` as awaiting its producer.
    #[inline]
    pub fn set_busy(&mut self, preg: usize) {
        self.busy[preg] = true;
    }

    /// Marks `preg` as holding a produced value.
    #[inline]
    pub fn clear(&mut self, preg: usize) {
        self.busy[preg] = false;
    }

    /// Number of busy registers.
    pub fn count_busy(&self) -> usize {
        self.busy.iter().filter(|&&b| b).count()
    }

    /// Number of tracked registers.
    #[inline]
    pub fn len(&self) -> usize {
        self.busy.len()
    }

    /// Returns true if the table tracks no registers.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.busy.is_empty()
    }
}
