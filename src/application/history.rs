use std::collections::VecDeque;

use crate::domain::Grid;

/// A recorded board and the generation it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub generation: u64,
    pub grid: Grid,
}

/// Stack of grid snapshots backing undo.
///
/// The bottom entry is the state recorded at initialization and is never
/// evicted or popped; every later entry is the grid as it stood right before a
/// step. Undo pops the top and restores whatever is then on top.
#[derive(Debug, Clone)]
pub struct History {
    entries: VecDeque<Snapshot>,
    limit: Option<usize>,
}

impl History {
    /// Start a history whose only entry is `initial` at generation 0.
    /// `limit` bounds the entries kept above the bottom one; `None` keeps them all.
    pub fn new(initial: Grid, limit: Option<usize>) -> Self {
        let mut entries = VecDeque::new();
        entries.push_back(Snapshot {
            generation: 0,
            grid: initial,
        });
        Self { entries, limit }
    }

    /// Drop everything and start over from `initial`.
    pub fn restart(&mut self, initial: Grid) {
        self.entries.clear();
        self.entries.push_back(Snapshot {
            generation: 0,
            grid: initial,
        });
    }

    /// Record a snapshot. Past the limit the oldest entry above the bottom is evicted.
    pub fn push(&mut self, generation: u64, grid: Grid) {
        self.entries.push_back(Snapshot { generation, grid });
        if let Some(limit) = self.limit {
            while self.entries.len() > limit + 1 {
                self.entries.remove(1);
            }
        }
    }

    /// Discard the most recent entry and return the new top.
    /// Returns `None`, leaving the stack alone, when only the bottom entry remains.
    pub fn pop(&mut self) -> Option<&Snapshot> {
        if self.entries.len() > 1 {
            self.entries.pop_back();
            self.entries.back()
        } else {
            None
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Number of undo operations that would currently take effect.
    pub fn undoable(&self) -> usize {
        self.entries.len() - 1
    }
}
