use crate::domain::CacheKey;

/// Store for serialized responses that evicts entries by read count.
pub trait ResponseCache: Send + Sync {
    fn get(&self, key: &CacheKey) -> Option<Vec<u8>>;

    fn set(&self, key: CacheKey, value: Vec<u8>);
}
