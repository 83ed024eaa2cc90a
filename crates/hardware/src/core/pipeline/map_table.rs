//! Register map table.
//!
//! Maps each architectural register to the physical register holding its
//! latest (speculative) value. Starts as the identity mapping over the low half
//! of the physical register space.

use serde::Serialize;

/// Architectural → physical register mapping.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RegisterMapTable {
    map: Vec<usize>,
}

impl RegisterMapTable {
    /// Creates the identity mapping for `arch_regs` registers.
    pub fn new(arch_regs: usize) -> Self {
        Self {
            map: (0..arch_regs).collect(),
        }
    }

    /// Physical register currently mapped to `areg`.
    #[inline]
    pub fn get(&self, areg: usize) -> usize {
        self.map[areg]
    }

    /// Maps `areg` to `preg`, returning the previous mapping.
    #[inline]
    pub fn remap(&mut self, areg: usize, preg: usize) -> usize {
        std::mem::replace(&mut self.map[areg], preg)
    }

    /// Iterates over mappings in architectural register order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.map.iter().copied()
    }

    /// Number of architectural registers.
    #[inline]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns true if there are no architectural registers.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
