use std::collections::VecDeque;
use tracing::debug;

/// A small bounded cache with least-recently-used eviction.
///
/// Holds provider results (schema documents, repository listings)
/// between pipeline steps. The store is a handful of slots, so recency
/// is tracked by position: hits move to the back of the deque,
/// evictions pop the front.
pub struct LruCache<K, V> {
    capacity: usize,
    label: String,
    entries: VecDeque<(K, V)>,
}

impl<K: Eq, V> LruCache<K, V> {
    /// Creates a cache holding at most `capacity` entries (clamped to
    /// at least 1). The label identifies the instance in log output.
    pub fn new(capacity: usize, label: impl Into<String>) -> Self {
        LruCache {
            capacity: capacity.max(1),
            label: label.into(),
            entries: VecDeque::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, key: &K) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    /// Returns the cached value for `key`, promoting the entry to
    /// most-recently-used.
    pub fn get(&mut self, key: &K) -> Option<&V> {
        let idx = self.entries.iter().position(|(k, _)| k == key)?;
        let entry = self.entries.remove(idx)?;
        self.entries.push_back(entry);
        self.entries.back().map(|(_, v)| v)
    }

    /// Stores `value` under `key`, evicting the least-recently-used
    /// entry when the cache is full. Returns the evicted entry, if any.
    /// Replacing an existing key never evicts.
    pub fn insert(&mut self, key: K, value: V) -> Option<(K, V)> {
        let mut evicted = None;
        if let Some(idx) = self.entries.iter().position(|(k, _)| *k == key) {
            self.entries.remove(idx);
        } else if self.entries.len() >= self.capacity {
            evicted = self.entries.pop_front();
            if evicted.is_some() {
                debug!("cache {}: evicting least recently used entry", self.label);
            }
        }
        self.entries.push_back((key, value));
        evicted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_miss_and_hit() {
        let mut cache: LruCache<&str, u32> = LruCache::new(4, "test");
        assert!(cache.get(&"a").is_none());

        cache.insert("a", 1);
        assert_eq!(cache.get(&"a"), Some(&1));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_eviction_order() {
        let mut cache = LruCache::new(2, "test");
        cache.insert("a", 1);
        cache.insert("b", 2);

        let evicted = cache.insert("c", 3);
        assert_eq!(evicted, Some(("a", 1)));
        assert!(!cache.contains(&"a"));
        assert!(cache.contains(&"b"));
        assert!(cache.contains(&"c"));
    }

    #[test]
    fn test_get_promotes_entry() {
        let mut cache = LruCache::new(2, "test");
        cache.insert("a", 1);
        cache.insert("b", 2);

        // Touch "a" so "b" becomes the eviction candidate
        assert_eq!(cache.get(&"a"), Some(&1));
        let evicted = cache.insert("c", 3);
        assert_eq!(evicted, Some(("b", 2)));
        assert!(cache.contains(&"a"));
    }

    #[test]
    fn test_replace_does_not_evict() {
        let mut cache = LruCache::new(2, "test");
        cache.insert("a", 1);
        cache.insert("b", 2);

        assert_eq!(cache.insert("a", 10), None);
        assert_eq!(cache.len(), 2);
        assert_eq!(cache.get(&"a"), Some(&10));
    }

    #[test]
    fn test_zero_capacity_clamps_to_one() {
        let mut cache = LruCache::new(0, "test");
        cache.insert("a", 1);
        assert_eq!(cache.get(&"a"), Some(&1));

        let evicted = cache.insert("b", 2);
        assert_eq!(evicted, Some(("a", 1)));
        assert_eq!(cache.len(), 1);
    }
}
