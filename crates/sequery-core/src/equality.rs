//! Pluggable equivalence used by every set-like and keyed operator.
//!
//! Equality here is hash equality: two elements are equal exactly when their
//! 64-bit hashes collide under the configured comparer. A comparer that
//! collides distinct values will silently merge them in distinct, union,
//! intersect, except, grouping, joins, and the keyed containers.

use std::hash::{BuildHasher, BuildHasherDefault, Hash, Hasher};

use serde::Serialize;

use crate::hash::content_hash64;

/// Hash and equivalence pair. The provided `equals` is hash equality.
pub trait EqualityComparer<T> {
    fn hash(&self, value: &T) -> u64;

    fn equals(&self, a: &T, b: &T) -> bool {
        self.hash(a) == self.hash(b)
    }
}

impl<T, E: EqualityComparer<T> + ?Sized> EqualityComparer<T> for Box<E> {
    fn hash(&self, value: &T) -> u64 {
        (**self).hash(value)
    }

    fn equals(&self, a: &T, b: &T) -> bool {
        (**self).equals(a, b)
    }
}

/// Default comparer: a deterministic 64-bit hash of `T`'s `Hash` encoding.
#[derive(Debug, Default, Clone, Copy)]
pub struct HashEq;

impl<T: Hash> EqualityComparer<T> for HashEq {
    fn hash(&self, value: &T) -> u64 {
        // Fixed-state hasher: hashes must be stable within a process, since
        // the consuming set operators probe across separate traversals.
        let mut hasher = BuildHasherDefault::<ahash::AHasher>::default().build_hasher();
        value.hash(&mut hasher);
        hasher.finish()
    }
}

/// Content comparer: hashes the serialized encoding of a value.
#[derive(Debug, Default, Clone, Copy)]
pub struct ContentEq;

impl<T: Serialize> EqualityComparer<T> for ContentEq {
    fn hash(&self, value: &T) -> u64 {
        // Values that fail to serialize all collapse into one hash class,
        // the same hazard class as any other colliding comparer.
        content_hash64(value).unwrap_or(0)
    }
}

/// Caller-supplied hash function.
pub struct FnEq<T> {
    hash: Box<dyn Fn(&T) -> u64>,
}

impl<T> FnEq<T> {
    pub fn new(hash: impl Fn(&T) -> u64 + 'static) -> Self {
        Self {
            hash: Box::new(hash),
        }
    }
}

impl<T> EqualityComparer<T> for FnEq<T> {
    fn hash(&self, value: &T) -> u64 {
        (self.hash)(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_hash_is_stable_across_calls() {
        let eq = HashEq;
        assert_eq!(
            EqualityComparer::<i64>::hash(&eq, &42),
            EqualityComparer::<i64>::hash(&eq, &42)
        );
        assert!(eq.equals(&"abc", &"abc"));
        assert!(!eq.equals(&"abc", &"abd"));
    }

    #[test]
    fn content_comparer_equates_equal_encodings() {
        let eq = ContentEq;
        assert!(eq.equals(&vec![1, 2, 3], &vec![1, 2, 3]));
        assert!(!eq.equals(&vec![1, 2, 3], &vec![3, 2, 1]));
    }

    #[test]
    fn degenerate_comparer_collides_everything() {
        let eq = FnEq::new(|_: &i32| 7);
        assert!(eq.equals(&1, &2));
    }
}
