use std::collections::HashMap;

use parking_lot::Mutex;

use crate::application::ports::ResponseCache;
use crate::domain::CacheKey;

/// Capacity value that disables read counting.
pub const UNLIMITED_USES: i64 = -1;

struct CacheEntry {
    value: Vec<u8>,
    uses: i64,
}

/// Cache whose entries are evicted after a fixed number of reads.
///
/// Every successful `get` counts as a use. Once the use count exceeds
/// `max_uses` the entry is dropped and that same read reports a miss, so a
/// capacity of `N` serves `N` hits and a capacity of `0` never hits.
/// `UNLIMITED_USES` keeps entries until they are overwritten.
pub struct BoundedUseCache {
    entries: Mutex<HashMap<CacheKey, CacheEntry>>,
    max_uses: i64,
}

impl BoundedUseCache {
    pub fn new(max_uses: i64) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            max_uses,
        }
    }

    pub fn max_uses(&self) -> i64 {
        self.max_uses
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}

impl ResponseCache for BoundedUseCache {
    fn get(&self, key: &CacheKey) -> Option<Vec<u8>> {
        let mut entries = self.entries.lock();
        let entry = entries.get_mut(key)?;

        if self.max_uses != UNLIMITED_USES {
            entry.uses += 1;
            if entry.uses > self.max_uses {
                entries.remove(key);
                tracing::debug!(key = %key, max_uses = self.max_uses, "Cache entry used up");
                return None;
            }
        }

        Some(entry.value.clone())
    }

    fn set(&self, key: CacheKey, value: Vec<u8>) {
        self.entries
            .lock()
            .insert(key, CacheEntry { value, uses: 0 });
    }
}
