//! A bounded log of completed calculations.

use std::collections::VecDeque;

use serde::Serialize;

/// Most entries the log keeps; the oldest entry is evicted first.
pub(crate) const HISTORY_CAPACITY: usize = 100;

/// Accumulates the textual records of completed calculations, oldest
/// first, never holding more than [`HISTORY_CAPACITY`] of them.
#[derive(Debug, Default, Serialize)]
pub(crate) struct HistoryLog {
    entries: VecDeque<String>,
}

impl HistoryLog {
    pub(crate) fn record(&mut self, entry: String) {
        if self.entries.len() == HISTORY_CAPACITY {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    /// The most recent `limit` records, most recent first.
    pub(crate) fn most_recent(&self, limit: usize) -> Vec<String> {
        self.entries.iter().rev().take(limit).cloned().collect()
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }
}
