//! Hash-bucketed multi-map preserving key insertion order.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use sequery_core::config::EngineConfig;
use sequery_core::equality::EqualityComparer;

use crate::sequence::{AsSequence, Sequence};

/// Ordered multi-map keyed by equality hash.
///
/// Keys keep first-seen insertion order; each key's values keep add order.
/// Two keys are the same key exactly when their hashes collide under the
/// configured comparer.
pub struct Lookup<K, V> {
    eq: Box<dyn EqualityComparer<K>>,
    keys: Vec<K>,
    buckets: HashMap<u64, Vec<V>>,
}

impl<K, V> Lookup<K, V> {
    pub fn new(eq: impl EqualityComparer<K> + 'static) -> Self {
        Self::with_config(&EngineConfig::default(), eq)
    }

    pub fn with_config(config: &EngineConfig, eq: impl EqualityComparer<K> + 'static) -> Self {
        Self {
            eq: Box::new(eq),
            keys: Vec::with_capacity(config.bucket_capacity),
            buckets: HashMap::with_capacity(config.bucket_capacity),
        }
    }

    /// Add a value under a key. The first add of a hash records the key;
    /// later adds under a colliding key only extend that bucket.
    pub fn add(&mut self, key: K, value: V) {
        let hash = self.eq.hash(&key);

        match self.buckets.entry(hash) {
            Entry::Vacant(slot) => {
                self.keys.push(key);
                slot.insert(vec![value]);
            }
            Entry::Occupied(mut slot) => slot.get_mut().push(value),
        }
    }

    /// Drop a key and its bucket. Returns whether the key was present.
    pub fn remove(&mut self, key: &K) -> bool {
        let hash = self.eq.hash(key);

        if self.buckets.remove(&hash).is_none() {
            return false;
        }

        if let Some(index) = self.keys.iter().position(|k| self.eq.hash(k) == hash) {
            self.keys.remove(index);
        }

        true
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

impl<K, V: Clone + 'static> Lookup<K, V> {
    /// The values under a key, as a snapshot taken at call time. An absent
    /// key yields an empty sequence, never an error.
    pub fn get(&self, key: &K) -> Sequence<V> {
        let hash = self.eq.hash(key);

        match self.buckets.get(&hash) {
            Some(bucket) => Sequence::from_vec(bucket.clone()),
            None => Sequence::empty(),
        }
    }
}

impl<K: Clone + 'static, V> Lookup<K, V> {
    /// The keys in first-seen order.
    pub fn keys(&self) -> Sequence<K> {
        Sequence::from_vec(self.keys.clone())
    }
}

/// One key's values inside a lookup.
#[derive(Debug, Clone)]
pub struct Grouping<K, V> {
    key: K,
    values: Vec<V>,
}

impl<K, V> Grouping<K, V> {
    pub fn key(&self) -> &K {
        &self.key
    }

    pub fn values(&self) -> &[V] {
        &self.values
    }
}

impl<K, V: Clone + 'static> AsSequence for Grouping<K, V> {
    type Item = V;

    fn sequence(&self) -> Sequence<V> {
        Sequence::from_vec(self.values.clone())
    }
}

impl<K: Clone + 'static, V: Clone + 'static> AsSequence for Lookup<K, V> {
    type Item = Grouping<K, V>;

    /// A snapshot of the groupings in key insertion order.
    fn sequence(&self) -> Sequence<Grouping<K, V>> {
        let groups = self
            .keys
            .iter()
            .map(|key| Grouping {
                key: key.clone(),
                values: self
                    .buckets
                    .get(&self.eq.hash(key))
                    .cloned()
                    .unwrap_or_default(),
            })
            .collect();

        Sequence::from_vec(groups)
    }
}
