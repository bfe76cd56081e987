//! Circular Buffer
//!
//! Shared, bounded store of the most recent records.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::record::LogRecord;

/// Cheap to clone; clones share the same records
#[derive(Debug, Clone)]
pub struct LogBuffer {
    records: Arc<Mutex<VecDeque<LogRecord>>>,
    capacity: usize,
}

impl LogBuffer {
    /// A capacity of zero is bumped to one
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            records: Arc::new(Mutex::new(VecDeque::with_capacity(capacity))),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Append, evicting the oldest record when full
    pub fn push(&self, record: LogRecord) {
        let mut records = self.lock();
        if records.len() == self.capacity {
            records.pop_front();
        }
        records.push_back(record);
    }

    /// Oldest first
    pub fn records(&self) -> Vec<LogRecord> {
        self.lock().iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    // a panic while holding the lock leaves the deque intact
    fn lock(&self) -> MutexGuard<'_, VecDeque<LogRecord>> {
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use tracing::Level;

    fn record(message: &str) -> LogRecord {
        LogRecord {
            timestamp: Utc::now(),
            level: Level::INFO,
            target: "test".to_string(),
            message: message.to_string(),
            fields: Vec::new(),
        }
    }

    #[test]
    fn test_evicts_oldest() {
        let buffer = LogBuffer::new(2);
        buffer.push(record("a"));
        buffer.push(record("b"));
        buffer.push(record("c"));

        let messages: Vec<_> = buffer.records().into_iter().map(|r| r.message).collect();
        assert_eq!(messages, vec!["b", "c"]);
    }

    #[test]
    fn test_clones_share_records() {
        let buffer = LogBuffer::new(0);
        assert_eq!(buffer.capacity(), 1);

        let other = buffer.clone();
        other.push(record("shared"));
        assert_eq!(buffer.len(), 1);

        buffer.clear();
        assert!(other.is_empty());
    }
}
