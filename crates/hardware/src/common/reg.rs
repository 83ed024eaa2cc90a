//! Physical Register File.
//!
//! Value storage behind the renamed register namespace. The model tracks operand
//! readiness rather than computed results, so no stage writes a produced value
//! here; the slots only supply the values captured by dispatch and issue.

use serde::Serialize;

/// Physical register file: one value slot per physical register.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RegisterFile {
    values: Vec<i64>,
}

impl RegisterFile {
    /// Creates a register file with `size` slots, all zero.
    pub fn new(size: usize) -> Self {
        Self {
            values: vec![0; size],
        }
    }

    /// Reads the value held by physical register `preg`.
    ///
    /// # Panics
    ///
    /// Panics if `preg` is outside the register file.
    #[inline]
    pub fn read(&self, preg: usize) -> i64 {
        self.values[preg]
    }

    /// Number of slots in the register file.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if the register file has no slots.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
