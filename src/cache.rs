use std::hash::Hash;

use hashbrown::HashMap;
use log::warn;

/// Store for already solved subproblems, keyed by content.
///
/// The same shape as the 'cached' crate's structure
/// <https://github.com/jaemk/cached/blob/master/src/stores.rs>
/// but using <https://github.com/Amanieu/hashbrown>
/// instead of the default `HashMap` for speeding up.
/// A stored value is final: there is no eviction,
/// the store only grows for the process lifetime.
#[derive(Debug, Default)]
pub struct GrowableCache<K, V>
where
    K: Eq + Hash,
{
    store: HashMap<K, V>,
    soft_limit: usize,
    hits: u32,
    misses: u32,
}

impl<K: Hash + Eq, V> GrowableCache<K, V> {
    pub fn with_capacity(size: usize) -> Self {
        Self {
            store: HashMap::with_capacity(size),
            soft_limit: size * 10,
            hits: 0,
            misses: 0,
        }
    }

    pub fn get(&mut self, key: &K) -> Option<&V> {
        if let Some(value) = self.store.get(key) {
            self.hits += 1;
            Some(value)
        } else {
            self.misses += 1;
            None
        }
    }

    pub fn put(&mut self, key: K, value: V) {
        if self.soft_limit > 0 && self.store.len() == self.soft_limit {
            warn!("The cache has grown past {} entries.", self.soft_limit);
        }
        let _ = self.store.insert(key, value);
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    pub fn hits(&self) -> u32 {
        self.hits
    }

    pub fn misses(&self) -> u32 {
        self.misses
    }

    /// Forgets every stored result. Only useful when reusing
    /// one store across unrelated batches of problems.
    pub fn clear(&mut self) {
        self.store.clear();
        self.hits = 0;
        self.misses = 0;
    }

    /// (number of entries, hits, hit rate)
    pub fn info(&self) -> (usize, u32, f32) {
        if self.is_empty() {
            return (0, 0, 0.0);
        }

        let hit_rate = if self.hits == 0 {
            0.0
        } else {
            self.hits as f32 / (self.hits + self.misses) as f32
        };

        (self.len(), self.hits, hit_rate)
    }
}
