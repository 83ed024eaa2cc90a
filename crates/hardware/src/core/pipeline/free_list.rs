//! Physical register free list.
//!
//! An ordered pool of physical registers that are neither mapped nor held as
//! the old destination of an in-flight instruction. Rename allocates from the
//! front (oldest free first), commit returns registers to the back, and
//! exception recovery pushes rolled-back registers onto the front.

use std::collections::VecDeque;

use serde::Serialize;

/// FIFO pool of free physical register ids.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FreeList {
    regs: VecDeque<usize>,
}

impl FreeList {
    /// Creates a free list holding `first..end` in ascending order.
    pub fn new(first: usize, end: usize) -> Self {
        Self {
            regs: (first..end).collect(),
        }
    }

    /// Number of free registers.
    #[inline]
    pub fn len(&self) -> usize {
        self.regs.len()
    }

    /// Returns true if no register is free.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.regs.is_empty()
    }

    /// Takes the oldest free register.
    pub fn allocate(&mut self) -> Option<usize> {
        self.regs.pop_front()
    }

    /// Returns a register reclaimed at commit (to the back).
    pub fn release(&mut self, preg: usize) {
        self.regs.push_back(preg);
    }

    /// Returns a register undone by recovery (to the front).
    pub fn restore(&mut self, preg: usize) {
        self.regs.push_front(preg);
    }

    /// Whether `preg` is currently free.
    pub fn contains(&self, preg: usize) -> bool {
        self.regs.contains(&preg)
    }

    /// Iterates from the next register to be allocated to the last.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.regs.iter().copied()
    }
}
