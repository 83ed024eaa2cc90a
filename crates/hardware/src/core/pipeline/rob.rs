//! Active List (reorder buffer) for in-order commit.
//!
//! The active list tracks every dispatched, uncommitted instruction in program
//! order. It provides:
//! 1. **Allocation:** Appends an entry at dispatch, bounded by its capacity.
//! 2. **Completion:** Marks an instruction done (or faulted) when it issues.
//! 3. **In-order Commit:** Retires instructions from the head in program order.
//! 4. **Rollback:** Yields entries youngest-first so recovery can undo renames.

use std::collections::VecDeque;

use serde::{Serialize, Serializer};

/// A single entry in the active list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ActiveListEntry {
    /// The instruction has issued and its result is (logically) available.
    #[serde(rename = "Done")]
    pub done: bool,
    /// The instruction raised an exception; taken when it reaches the head.
    #[serde(rename = "Exception")]
    pub exception: bool,
    /// Destination architectural register.
    #[serde(rename = "LogicalDestination")]
    pub logical_dest: usize,
    /// Physical register previously mapped to the destination.
    #[serde(rename = "OldDestination")]
    pub old_dest: usize,
    /// Program counter of the instruction.
    #[serde(rename = "PC")]
    pub pc: usize,
}

impl ActiveListEntry {
    /// Creates a freshly dispatched entry (not done, no exception).
    pub const fn new(logical_dest: usize, old_dest: usize, pc: usize) -> Self {
        Self {
            done: false,
            exception: false,
            logical_dest,
            old_dest,
            pc,
        }
    }
}

/// Active list: bounded program-order queue of in-flight instructions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActiveList {
    entries: VecDeque<ActiveListEntry>,
    capacity: usize,
}

impl Serialize for ActiveList {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(&self.entries)
    }
}

impl ActiveList {
    /// Creates an empty active list with the given capacity.
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Returns the capacity.
    #[inline]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the number of in-flight entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing is in flight.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns true if no entry can be allocated.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.entries.len() >= self.capacity
    }

    /// Returns the number of free slots.
    #[inline]
    pub fn free_slots(&self) -> usize {
        self.capacity.saturating_sub(self.entries.len())
    }

    /// Appends an entry at the tail. Returns `false` (and drops nothing) if full.
    pub fn allocate(&mut self, entry: ActiveListEntry) -> bool {
        if self.is_full() {
            return false;
        }
        self.entries.push_back(entry);
        true
    }

    /// Marks the entry dispatched from `pc` as done.
    pub fn complete(&mut self, pc: usize) {
        if let Some(entry) = self.find_entry_mut(pc) {
            entry.done = true;
        }
    }

    /// Marks the entry dispatched from `pc` as done with a latched exception.
    pub fn fault(&mut self, pc: usize) {
        if let Some(entry) = self.find_entry_mut(pc) {
            entry.done = true;
            entry.exception = true;
        }
    }

    /// Returns the head (oldest) entry, if any.
    pub fn peek_head(&self) -> Option<&ActiveListEntry> {
        self.entries.front()
    }

    /// Retires the head entry if it is done.
    ///
    /// Returns `None` when the list is empty or the head has not completed,
    /// so a younger completed instruction can never retire past it.
    pub fn commit_head(&mut self) -> Option<ActiveListEntry> {
        if self.entries.front().is_some_and(|head| head.done) {
            self.entries.pop_front()
        } else {
            None
        }
    }

    /// Removes and returns the youngest entry.
    pub fn pop_youngest(&mut self) -> Option<ActiveListEntry> {
        self.entries.pop_back()
    }

    /// Iterates over entries from oldest to youngest.
    pub fn iter(&self) -> impl Iterator<Item = &ActiveListEntry> + '_ {
        self.entries.iter()
    }

    fn find_entry_mut(&mut self, pc: usize) -> Option<&mut ActiveListEntry> {
        self.entries.iter_mut().find(|e| e.pc == pc)
    }
}
