//! Integer queue (reservation stations).
//!
//! Holds dispatched instructions until both source operands are ready. Each
//! operand carries a readiness flag, the physical register tag it waits on and
//! its value once resolved. Readiness is re-derived from the busy table at the
//! start of every issue cycle, so an operand wakes up as soon as its producer
//! has issued.

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::common::reg::RegisterFile;
use crate::core::pipeline::scoreboard::BusyTable;
use crate::isa::Opcode;

/// One source operand of a queued instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Operand {
    /// Value is available.
    pub ready: bool,
    /// Physical register the value comes from (`None` for immediates).
    pub tag: Option<usize>,
    /// Resolved value, `None` while waiting.
    pub value: Option<i64>,
}

impl Operand {
    /// An immediate operand: always ready, no tag.
    pub const fn immediate(value: i64) -> Self {
        Self {
            ready: true,
            tag: None,
            value: Some(value),
        }
    }

    /// Resolves a register operand against the current busy flags.
    pub fn from_register(preg: usize, busy: &BusyTable, regs: &RegisterFile) -> Self {
        let mut op = Self {
            ready: false,
            tag: Some(preg),
            value: None,
        };
        op.wake(busy, regs);
        op
    }

    /// Re-checks a waiting operand's producer; captures the value once ready.
    pub fn wake(&mut self, busy: &BusyTable, regs: &RegisterFile) {
        if self.ready {
            return;
        }
        if let Some(preg) = self.tag
            && !busy.is_busy(preg)
        {
            self.ready = true;
            self.value = Some(regs.read(preg));
        }
    }
}

/// An instruction waiting in the integer queue.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IntegerQueueEntry {
    /// Destination physical register.
    pub dest_reg: usize,
    /// Operand A.
    pub op_a: Operand,
    /// Operand B (register or immediate).
    pub op_b: Operand,
    /// Operation.
    pub opcode: Opcode,
    /// Program counter of the instruction.
    pub pc: usize,
}

impl IntegerQueueEntry {
    /// Both operands are ready.
    #[inline]
    pub const fn is_ready(&self) -> bool {
        self.op_a.ready && self.op_b.ready
    }
}

impl Serialize for IntegerQueueEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("IntegerQueueEntry", 9)?;
        s.serialize_field("DestRegister", &self.dest_reg)?;
        s.serialize_field("OpAIsReady", &self.op_a.ready)?;
        s.serialize_field("OpARegTag", &self.op_a.tag)?;
        s.serialize_field("OpAValue", &self.op_a.value)?;
        s.serialize_field("OpBIsReady", &self.op_b.ready)?;
        s.serialize_field("OpBRegTag", &self.op_b.tag)?;
        s.serialize_field("OpBValue", &self.op_b.value)?;
        s.serialize_field("OpCode", &self.opcode)?;
        s.serialize_field("PC", &self.pc)?;
        s.end()
    }
}

/// Bounded, unordered pool of instructions awaiting issue.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IntegerQueue {
    entries: Vec<IntegerQueueEntry>,
    capacity: usize,
}

impl Serialize for IntegerQueue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(&self.entries)
    }
}

impl IntegerQueue {
    /// Creates an empty queue with the given capacity.
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Returns the capacity.
    #[inline]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of waiting instructions.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing is waiting.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of free slots.
    #[inline]
    pub fn free_slots(&self) -> usize {
        self.capacity.saturating_sub(self.entries.len())
    }

    /// Inserts an entry. Returns `false` if the queue is full.
    pub fn push(&mut self, entry: IntegerQueueEntry) -> bool {
        if self.entries.len() >= self.capacity {
            return false;
        }
        self.entries.push(entry);
        true
    }

    /// Re-derives every operand's readiness from the busy table.
    pub fn wake_up(&mut self, busy: &BusyTable, regs: &RegisterFile) {
        for entry in &mut self.entries {
            entry.op_a.wake(busy, regs);
            entry.op_b.wake(busy, regs);
        }
    }

    /// Removes and returns up to `width` ready entries, oldest PC first.
    pub fn select(&mut self, width: usize) -> Vec<IntegerQueueEntry> {
        let mut ready_pcs: Vec<usize> = self
            .entries
            .iter()
            .filter(|e| e.is_ready())
            .map(|e| e.pc)
            .collect();
        ready_pcs.sort_unstable();
        ready_pcs.truncate(width);

        let mut selected = Vec::with_capacity(ready_pcs.len());
        let mut kept = Vec::with_capacity(self.entries.len());
        for entry in self.entries.drain(..) {
            if ready_pcs.contains(&entry.pc) {
                selected.push(entry);
            } else {
                kept.push(entry);
            }
        }
        self.entries = kept;
        selected.sort_unstable_by_key(|e| e.pc);
        selected
    }

    /// Drops every entry.
    pub fn flush(&mut self) {
        self.entries.clear();
    }

    /// Iterates over waiting entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &IntegerQueueEntry> + '_ {
        self.entries.iter()
    }
}
