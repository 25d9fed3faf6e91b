//! Bounded linear undo/redo history of board snapshots.

use crate::board::Board;
use crate::placement::PlacementIds;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Default number of snapshots kept.
pub const DEFAULT_HISTORY_CAPACITY: usize = 50;

/// An owned copy of the board and the placement counter.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub board: Board,
    pub placement_ids: PlacementIds,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct History {
    snapshots: VecDeque<Snapshot>,
    index: usize,
    capacity: usize,
}

impl History {
    /// Starts a history whose only entry is `initial`, with the cursor on it.
    #[must_use]
    pub fn new(initial: Snapshot, capacity: usize) -> Self {
        let mut snapshots = VecDeque::with_capacity(capacity.max(1));
        snapshots.push_back(initial);
        Self {
            snapshots,
            index: 0,
            capacity: capacity.max(1),
        }
    }

    /// Records `snapshot` after the cursor. Any redo branch is dropped, and the
    /// oldest entry is evicted once the history is over capacity.
    pub fn save(&mut self, snapshot: Snapshot) {
        self.snapshots.truncate(self.index + 1);
        self.snapshots.push_back(snapshot);
        self.index += 1;

        if self.snapshots.len() > self.capacity {
            self.snapshots.pop_front();
            self.index -= 1;
        }
    }

    /// Steps back one snapshot. `None` at the first entry.
    pub fn undo(&mut self) -> Option<&Snapshot> {
        if !self.can_undo() {
            return None;
        }
        self.index -= 1;
        self.snapshots.get(self.index)
    }

    /// Steps forward one snapshot. `None` at the last entry.
    pub fn redo(&mut self) -> Option<&Snapshot> {
        if !self.can_redo() {
            return None;
        }
        self.index += 1;
        self.snapshots.get(self.index)
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.index > 0
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.index + 1 < self.snapshots.len()
    }

    #[must_use]
    pub fn current(&self) -> Option<&Snapshot> {
        self.snapshots.get(self.index)
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snap(counter: u64) -> Snapshot {
        let mut placement_ids = PlacementIds::new();
        for _ in 0..counter {
            placement_ids.allocate();
        }
        Snapshot {
            board: Board::new(),
            placement_ids,
        }
    }

    #[test]
    fn test_undo_redo_walk() {
        let mut history = History::new(snap(0), 10);
        history.save(snap(1));
        history.save(snap(2));

        assert_eq!(history.undo().unwrap().placement_ids.peek(), 1);
        assert_eq!(history.undo().unwrap().placement_ids.peek(), 0);
        assert!(history.undo().is_none());
        assert_eq!(history.redo().unwrap().placement_ids.peek(), 1);
        assert_eq!(history.redo().unwrap().placement_ids.peek(), 2);
        assert!(history.redo().is_none());
    }

    #[test]
    fn test_save_discards_redo_branch() {
        let mut history = History::new(snap(0), 10);
        history.save(snap(1));
        history.save(snap(2));
        history.undo();
        history.undo();
        history.save(snap(7));
        assert_eq!(history.len(), 2);
        assert!(!history.can_redo());
        assert_eq!(history.current().unwrap().placement_ids.peek(), 7);
    }

    #[test]
    fn test_capacity_evicts_oldest() {
        let mut history = History::new(snap(0), 3);
        for i in 1..=5 {
            history.save(snap(i));
            assert!(history.len() <= 3);
        }
        assert_eq!(history.index(), 2);
        assert_eq!(history.current().unwrap().placement_ids.peek(), 5);
        history.undo();
        history.undo();
        assert!(!history.can_undo());
        assert_eq!(history.current().unwrap().placement_ids.peek(), 3);
    }
}
