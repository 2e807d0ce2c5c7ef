//! A bounded least-recently-used cache tagged with a generation.
//!
//! Owners bump a generation counter when cached data goes stale and pass it
//! to [`LruCache::sync`] before use. A cache that sees a newer generation
//! empties itself.

use std::{
    collections::{BTreeMap, HashMap},
    hash::Hash,
};

/// Bounded LRU cache.
#[derive(Debug, Clone)]
pub struct LruCache<K, V> {
    /// Maximum number of entries.
    capacity: usize,
    /// Entries with their last-use tick.
    entries: HashMap<K, (V, u64)>,
    /// Keys ordered by last use.
    order: BTreeMap<u64, K>,
    /// Monotonic use counter.
    tick: u64,
    /// Generation the contents belong to.
    generation: u64,
}

impl<K: Hash + Eq + Clone, V> LruCache<K, V> {
    /// Construct an empty cache. A capacity of zero stores nothing.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: HashMap::new(),
            order: BTreeMap::new(),
            tick: 0,
            generation: 0,
        }
    }

    /// Empty the cache if `generation` differs from the one it was filled in.
    pub fn sync(&mut self, generation: u64) {
        if generation != self.generation {
            tracing::trace!("cache generation {} -> {}", self.generation, generation);
            self.clear();
            self.generation = generation;
        }
    }

    /// Next use tick.
    fn bump(&mut self) -> u64 {
        self.tick += 1;
        self.tick
    }

    /// Look up a value, marking it as most recently used.
    pub fn get(&mut self, key: &K) -> Option<&V> {
        let tick = self.bump();
        let (_, used) = self.entries.get_mut(key)?;
        let old = std::mem::replace(used, tick);
        if let Some(k) = self.order.remove(&old) {
            self.order.insert(tick, k);
        }
        self.entries.get(key).map(|(v, _)| v)
    }

    /// Insert a value, evicting the least recently used entry when full.
    pub fn insert(&mut self, key: K, value: V) {
        if self.capacity == 0 {
            return;
        }
        let tick = self.bump();
        if let Some((_, old)) = self.entries.remove(&key) {
            self.order.remove(&old);
        } else if self.entries.len() >= self.capacity
            && let Some((_, oldest)) = self.order.pop_first()
        {
            self.entries.remove(&oldest);
        }
        self.order.insert(tick, key.clone());
        self.entries.insert(key, (value, tick));
    }

    /// Does the cache hold `key`? Does not affect recency.
    pub fn contains(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    /// Remove everything.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Is the cache empty?
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Maximum number of entries.
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evicts_least_recent() {
        let mut c = LruCache::new(2);
        c.insert("a", 1);
        c.insert("b", 2);
        assert_eq!(c.get(&"a"), Some(&1));
        c.insert("c", 3);
        assert!(c.contains(&"a"));
        assert!(!c.contains(&"b"));
        assert!(c.contains(&"c"));
        c.insert("a", 10);
        assert_eq!(c.len(), 2);
        assert_eq!(c.get(&"a"), Some(&10));
    }

    #[test]
    fn generations() {
        let mut c = LruCache::new(4);
        c.sync(0);
        c.insert(1, "x");
        c.sync(0);
        assert_eq!(c.len(), 1);
        c.sync(1);
        assert!(c.is_empty());
        assert_eq!(c.capacity(), 4);

        let mut z: LruCache<u8, u8> = LruCache::new(0);
        z.insert(1, 1);
        assert!(z.is_empty());
    }
}
