//! Recently uploaded file URLs
//!
//! `RecencyCache` keeps the last `capacity` records in newest-first order.
//! Writers take an exclusive lock; readers share a read lock and always get an
//! owned copy back, so nothing a caller does with a snapshot can reach the
//! cache and later writes never show up in an earlier snapshot.
//!
//! The cache is volatile. It is built once in the process entry point and
//! handed to consumers behind an `Arc<dyn UploadHistory>`.

use std::collections::VecDeque;
use std::num::NonZeroUsize;

use parking_lot::RwLock;
use thiserror::Error;

/// History construction errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HistoryError {
    #[error("history capacity must be greater than zero")]
    ZeroCapacity,
}

/// Read/write contract the HTTP layer uses to record and list uploads.
pub trait UploadHistory: Send + Sync {
    /// Record a URL as the most recent upload.
    fn add(&self, record: String);

    /// Owned snapshot of the retained records, newest first.
    fn recent(&self) -> Vec<String>;

    /// The most recent record, if any.
    fn latest(&self) -> Option<String>;

    /// Number of retained records.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Fixed-capacity, newest-first list of records.
#[derive(Debug)]
pub struct RecencyCache {
    capacity: NonZeroUsize,
    records: RwLock<VecDeque<String>>,
}

impl RecencyCache {
    /// Create an empty cache holding at most `capacity` records.
    pub fn new(capacity: NonZeroUsize) -> Self {
        Self {
            capacity,
            records: RwLock::new(VecDeque::with_capacity(capacity.get() + 1)),
        }
    }

    /// Create an empty cache from an unchecked capacity.
    ///
    /// Returns [`HistoryError::ZeroCapacity`] when `capacity` is 0.
    pub fn with_capacity(capacity: usize) -> Result<Self, HistoryError> {
        NonZeroUsize::new(capacity)
            .map(Self::new)
            .ok_or(HistoryError::ZeroCapacity)
    }

    pub fn capacity(&self) -> usize {
        self.capacity.get()
    }

    /// Prepend `record`, then drop the oldest records beyond capacity.
    ///
    /// The record is inserted before truncating, so the newest record is
    /// never the one evicted.
    pub fn add(&self, record: impl Into<String>) {
        let mut records = self.records.write();
        records.push_front(record.into());
        records.truncate(self.capacity.get());
    }

    /// Owned copy of the current records, newest first.
    pub fn recent(&self) -> Vec<String> {
        self.records.read().iter().cloned().collect()
    }

    pub fn latest(&self) -> Option<String> {
        self.records.read().front().cloned()
    }

    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }
}

impl UploadHistory for RecencyCache {
    fn add(&self, record: String) {
        RecencyCache::add(self, record);
    }

    fn recent(&self) -> Vec<String> {
        RecencyCache::recent(self)
    }

    fn latest(&self) -> Option<String> {
        RecencyCache::latest(self)
    }

    fn len(&self) -> usize {
        RecencyCache::len(self)
    }
}
