use crate::data::model::Table;

/// Undo log of principal-table snapshots, most recent last.
///
/// A snapshot is pushed right before a deletion mutates principal and popped
/// by a single undo step. Entries are owned copies, never views of the live
/// table.
#[derive(Debug, Clone, Default)]
pub struct HistoryStack {
    entries: Vec<Table>,
}

impl HistoryStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, snapshot: Table) {
        self.entries.push(snapshot);
    }

    /// Most recent snapshot, or `None` when there is nothing to undo.
    pub fn pop(&mut self) -> Option<Table> {
        self.entries.pop()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
