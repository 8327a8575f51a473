// File: ./src/client/cache.rs
// In-memory memo of sub-list lookups, scoped to one client instance.
//
// Nothing is written to disk and entries are never invalidated, so a client
// should not outlive a single run.
use moka::sync::Cache;
use std::collections::HashMap;

pub const DEFAULT_CACHE_CAPACITY: u64 = 100;

type SublistIds = HashMap<String, String>;

/// Bounded cache of board id -> (sub-list name -> sub-list id).
#[derive(Debug, Clone)]
pub struct SublistCache {
    capacity: u64,
    entries: Cache<String, SublistIds>,
}

impl Default for SublistCache {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_CAPACITY)
    }
}

impl SublistCache {
    pub fn new(capacity: u64) -> Self {
        Self {
            capacity,
            entries: Cache::builder().max_capacity(capacity).build(),
        }
    }

    pub fn capacity(&self) -> u64 {
        self.capacity
    }

    pub fn len(&self) -> u64 {
        // Eviction bookkeeping is deferred; settle it before counting.
        self.entries.run_pending_tasks();
        self.entries.entry_count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn get(&self, board_id: &str) -> Option<SublistIds> {
        self.entries.get(board_id)
    }

    pub fn insert(&self, board_id: &str, sublists: SublistIds) {
        if self.capacity == 0 {
            return;
        }
        self.entries.insert(board_id.to_string(), sublists);
    }

    pub fn clear(&self) {
        self.entries.invalidate_all();
    }
}
