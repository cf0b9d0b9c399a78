//! Activity Log
//!
//! Bounded, most-recent-first sequence of feed entries. Appending past
//! capacity drops the oldest entry. Entries are never edited.

use crate::config::DEFAULT_ACTIVITY_CAPACITY;
use crate::types::Activity;
use std::collections::VecDeque;

/// Bounded activity feed
#[derive(Debug, Clone)]
pub struct ActivityLog {
    entries: VecDeque<Activity>,
    capacity: usize,
}

impl ActivityLog {
    /// Create empty log with capacity (clamped to at least 1)
    #[inline]
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    /// Create log seeded with entries already in most-recent-first order
    ///
    /// Seeds beyond capacity are dropped from the tail.
    #[must_use]
    pub fn seeded(capacity: usize, seed: Vec<Activity>) -> Self {
        let mut log = Self::new(capacity);
        log.entries.extend(seed);
        log.entries.truncate(log.capacity);
        log
    }

    /// Insert at the head; returns the evicted tail entry, if any
    pub fn append(&mut self, entry: Activity) -> Option<Activity> {
        tracing::debug!("Activity {}: {}", entry.id, entry.headline());
        self.entries.push_front(entry);
        if self.entries.len() > self.capacity {
            self.entries.pop_back()
        } else {
            None
        }
    }

    /// Most recent entry
    #[inline]
    #[must_use]
    pub fn latest(&self) -> Option<&Activity> {
        self.entries.front()
    }

    /// Entries, most recent first
    pub fn iter(&self) -> impl Iterator<Item = &Activity> + '_ {
        self.entries.iter()
    }

    /// Owned copy of the entries, most recent first
    #[must_use]
    pub fn snapshot(&self) -> Vec<Activity> {
        self.entries.iter().cloned().collect()
    }

    /// Current length
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the log is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Maximum length
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for ActivityLog {
    fn default() -> Self {
        Self::new(DEFAULT_ACTIVITY_CAPACITY)
    }
}
