use crate::{LogAdapter, LogEntry};

/// Buffers entries in memory, in write order. Mostly useful in tests and
/// anywhere a caller wants to inspect what would have been persisted.
#[derive(Default)]
pub struct MemoryAdapter {
    entries: Vec<LogEntry>,
}

impl MemoryAdapter {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl LogAdapter for MemoryAdapter {
    fn write(&mut self, entry: &LogEntry) -> bool {
        self.entries.push(entry.clone());
        true
    }
}
