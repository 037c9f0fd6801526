//! Fallible pending-work containers.
//!
//! Every growth goes through `try_reserve` so that running out of memory
//! surfaces as [`SettleError::AllocationFailed`] instead of aborting.
//! Buffers are plain owned collections: dropping them on any exit path
//! releases everything.

use std::cmp::Reverse;
use std::collections::BinaryHeap;
use talus_core::{Priority, SettleError};

fn alloc_failed(requested: usize) -> SettleError {
    SettleError::AllocationFailed { requested }
}

/// Unordered list of cells to examine in the next round. Duplicates allowed.
#[derive(Debug, Default)]
pub(crate) struct Worklist {
    items: Vec<Priority>,
}

impl Worklist {
    pub(crate) fn with_capacity(capacity: usize) -> Result<Self, SettleError> {
        let mut items = Vec::new();
        items
            .try_reserve_exact(capacity)
            .map_err(|_| alloc_failed(capacity))?;
        Ok(Self { items })
    }

    pub(crate) fn push(&mut self, p: Priority) -> Result<(), SettleError> {
        if self.items.len() == self.items.capacity() {
            self.items.try_reserve(1).map_err(|_| alloc_failed(1))?;
        }
        self.items.push(p);
        Ok(())
    }

    pub(crate) fn len(&self) -> usize {
        self.items.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// One round of work: the round's worklist sorted by priority, merged on
/// the fly with cells activated while the round runs.
///
/// Activated cells always sort after the cell being processed, so they
/// are still ahead of the cursor and belong to this round.
#[derive(Debug)]
pub(crate) struct RoundQueue {
    sorted: Vec<Priority>,
    cursor: usize,
    activated: BinaryHeap<Reverse<Priority>>,
}

impl RoundQueue {
    pub(crate) fn new(worklist: Worklist) -> Self {
        let mut sorted = worklist.items;
        sorted.sort_unstable();
        Self {
            sorted,
            cursor: 0,
            activated: BinaryHeap::new(),
        }
    }

    /// Entries not yet popped.
    pub(crate) fn len(&self) -> usize {
        self.sorted.len() - self.cursor + self.activated.len()
    }

    pub(crate) fn push(&mut self, p: Priority) -> Result<(), SettleError> {
        if self.activated.len() == self.activated.capacity() {
            self.activated.try_reserve(1).map_err(|_| alloc_failed(1))?;
        }
        self.activated.push(Reverse(p));
        Ok(())
    }

    /// Next entry in ascending priority.
    pub(crate) fn pop(&mut self) -> Option<Priority> {
        let next_sorted = self.sorted.get(self.cursor).copied();
        match (next_sorted, self.activated.peek()) {
            (Some(s), Some(&Reverse(a))) if a < s => {
                self.activated.pop();
                Some(a)
            }
            (Some(s), _) => {
                self.cursor += 1;
                Some(s)
            }
            (None, Some(_)) => self.activated.pop().map(|Reverse(a)| a),
            (None, None) => None,
        }
    }
}

/// Global min-priority queue for the event-driven settler. Duplicates
/// allowed.
#[derive(Debug, Default)]
pub(crate) struct PendingQueue {
    heap: BinaryHeap<Reverse<Priority>>,
}

impl PendingQueue {
    pub(crate) fn with_capacity(capacity: usize) -> Result<Self, SettleError> {
        let mut heap = BinaryHeap::new();
        heap.try_reserve_exact(capacity)
            .map_err(|_| alloc_failed(capacity))?;
        Ok(Self { heap })
    }

    pub(crate) fn push(&mut self, p: Priority) -> Result<(), SettleError> {
        if self.heap.len() == self.heap.capacity() {
            self.heap.try_reserve(1).map_err(|_| alloc_failed(1))?;
        }
        self.heap.push(Reverse(p));
        Ok(())
    }

    pub(crate) fn pop(&mut self) -> Option<Priority> {
        self.heap.pop().map(|Reverse(p)| p)
    }

    pub(crate) fn len(&self) -> usize {
        self.heap.len()
    }
}
