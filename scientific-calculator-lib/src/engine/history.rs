use std::collections::VecDeque;

/// How many calculations are remembered before the oldest is evicted.
pub const MAX_HISTORY: usize = 20;

/// A single completed calculation. Entries are never mutated once recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub id: u64,
    pub expression: String,
    pub result: String,
}

/// An append-only, capacity-bounded list of completed calculations,
/// newest first.
#[derive(Debug, Default)]
pub struct History {
    entries: VecDeque<HistoryEntry>,
    next_id: u64,
}

impl History {
    pub fn new() -> History {
        History::default()
    }

    /// Records a completed calculation, evicting the oldest entry once the
    /// capacity is exceeded.
    ///
    /// # Arguments
    ///
    /// * `expression`: The expression that was evaluated.
    /// * `result`: The formatted result it produced.
    ///
    /// returns: The entry that was recorded.
    pub fn record(&mut self, expression: String, result: String) -> &HistoryEntry {
        let entry = HistoryEntry {
            id: self.next_id,
            expression,
            result,
        };
        self.next_id += 1;
        self.entries.push_front(entry);
        self.entries.truncate(MAX_HISTORY);
        &self.entries[0]
    }

    /// The recorded entries, newest first.
    pub fn entries(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
