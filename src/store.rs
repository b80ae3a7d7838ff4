//! Message store: fixed-size array of slots.
//!
//! The slot array is allocated once at queue creation and never
//! reallocated. Ordering strategies mutate it through `Store` directly;
//! they own the `fill`/`head`/`tail` bookkeeping.

use crate::message::Slot;

pub(crate) struct Store {
    slots: Vec<Slot>,
    msgsize: usize,
}

impl Store {
    pub(crate) fn new(maxmsg: usize, msgsize: usize) -> Self {
        Self {
            slots: (0..maxmsg).map(|_| Slot::new(msgsize)).collect(),
            msgsize,
        }
    }

    pub(crate) fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub(crate) fn msgsize(&self) -> usize {
        self.msgsize
    }

    pub(crate) fn slot(&self, i: usize) -> &Slot {
        &self.slots[i]
    }

    pub(crate) fn slot_mut(&mut self, i: usize) -> &mut Slot {
        &mut self.slots[i]
    }

    /// Exchanges the two slots' contents (records, not bytes). Swapping a
    /// slot with itself is a defined no-op, though not a zero-cost one:
    /// it still runs the underlying swap.
    pub(crate) fn swap(&mut self, i: usize, j: usize) {
        self.slots.swap(i, j);
    }

    /// Rotates `slots[start..=end]` right by one slot record: the slot at
    /// `end` moves to `start`, and everything in between shifts up by
    /// one. Used to make room at `start` without ever copying payload
    /// bytes through a temporary; each slot still owns exactly one
    /// buffer afterwards because the rotation moves whole records.
    pub(crate) fn rotate_right_one(&mut self, start: usize, end: usize) {
        self.slots[start..=end].rotate_right(1);
    }
}
