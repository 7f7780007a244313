//! Hash-keyed map preserving key insertion order, one value per key.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use sequery_core::config::EngineConfig;
use sequery_core::equality::EqualityComparer;
use sequery_core::error::{Error, Result};

use crate::sequence::{AsSequence, Sequence};

/// Ordered single-value map keyed by equality hash.
///
/// `get` answers `None` for an unknown key; adding a key whose hash is
/// already present fails with `DuplicateKey`.
pub struct Dictionary<K, V> {
    eq: Box<dyn EqualityComparer<K>>,
    keys: Vec<K>,
    slots: HashMap<u64, V>,
}

impl<K: std::fmt::Debug, V: std::fmt::Debug> std::fmt::Debug for Dictionary<K, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dictionary")
            .field("keys", &self.keys)
            .field("slots", &self.slots)
            .finish()
    }
}

impl<K, V> Dictionary<K, V> {
    pub fn new(eq: impl EqualityComparer<K> + 'static) -> Self {
        Self::with_config(&EngineConfig::default(), eq)
    }

    pub fn with_config(config: &EngineConfig, eq: impl EqualityComparer<K> + 'static) -> Self {
        Self {
            eq: Box::new(eq),
            keys: Vec::with_capacity(config.bucket_capacity),
            slots: HashMap::with_capacity(config.bucket_capacity),
        }
    }

    pub fn add(&mut self, key: K, value: V) -> Result<()> {
        let hash = self.eq.hash(&key);

        match self.slots.entry(hash) {
            Entry::Occupied(_) => Err(Error::DuplicateKey(format!("hash {:#x}", hash))),
            Entry::Vacant(slot) => {
                slot.insert(value);
                self.keys.push(key);
                Ok(())
            }
        }
    }

    /// Drop a key and its value. Returns whether the key was present.
    pub fn remove(&mut self, key: &K) -> bool {
        let hash = self.eq.hash(key);

        if self.slots.remove(&hash).is_none() {
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

impl<K, V: Clone> Dictionary<K, V> {
    /// The value under a key, or `None` when the key is unknown.
    pub fn get(&self, key: &K) -> Option<V> {
        self.slots.get(&self.eq.hash(key)).cloned()
    }
}

impl<K: Clone + 'static, V> Dictionary<K, V> {
    /// The keys in insertion order.
    pub fn keys(&self) -> Sequence<K> {
        Sequence::from_vec(self.keys.clone())
    }
}

impl<K: Clone + 'static, V: Clone + 'static> AsSequence for Dictionary<K, V> {
    type Item = (K, V);

    /// A snapshot of the entries in key insertion order.
    fn sequence(&self) -> Sequence<(K, V)> {
        let pairs = self
            .keys
            .iter()
            .filter_map(|key| {
                let value = self.slots.get(&self.eq.hash(key))?;
                Some((key.clone(), value.clone()))
            })
            .collect();

        Sequence::from_vec(pairs)
    }
}
