//! Terminal operators. Every one of these drains a fresh traversal: the
//! shared cursor is reset first, which any other holder of the same handle
//! will observe.

use std::hash::Hash;

use sequery_core::equality::{EqualityComparer, HashEq};
use sequery_core::error::{Error, Result};

use crate::dictionary::Dictionary;
use crate::lookup::Lookup;
use crate::sequence::Sequence;

impl<T: Clone + 'static> Sequence<T> {
    /// The number of elements.
    pub fn count(&self) -> Result<usize> {
        let cursor = self.cursor();
        let mut cursor = cursor.borrow_mut();
        cursor.reset();

        let mut count = 0;
        while cursor.move_next()? {
            count += 1;
        }

        Ok(count)
    }

    /// Materialize into a vector, in sequence order.
    pub fn to_vec(&self) -> Result<Vec<T>> {
        let cursor = self.cursor();
        let mut cursor = cursor.borrow_mut();
        cursor.reset();

        let mut items = Vec::new();
        while cursor.move_next()? {
            items.push(cursor.current()?);
        }

        Ok(items)
    }

    /// Run a closure over every element.
    pub fn for_each(&self, mut f: impl FnMut(&T)) -> Result<()> {
        let cursor = self.cursor();
        let mut cursor = cursor.borrow_mut();
        cursor.reset();

        while cursor.move_next()? {
            f(&cursor.current()?);
        }

        Ok(())
    }

    /// Seedless left fold: the first element seeds the fold. Fails with
    /// `EmptySequence` when there is nothing to seed it with.
    pub fn aggregate(&self, mut accumulator: impl FnMut(T, &T) -> T) -> Result<T> {
        let cursor = self.cursor();
        let mut cursor = cursor.borrow_mut();
        cursor.reset();

        if !cursor.move_next()? {
            return Err(Error::EmptySequence("aggregate without a seed"));
        }

        let mut acc = cursor.current()?;
        while cursor.move_next()? {
            acc = accumulator(acc, &cursor.current()?);
        }

        Ok(acc)
    }

    /// Left fold from an explicit seed.
    pub fn aggregate_seeded<A>(
        &self,
        seed: A,
        mut accumulator: impl FnMut(A, &T) -> A,
    ) -> Result<A> {
        let cursor = self.cursor();
        let mut cursor = cursor.borrow_mut();
        cursor.reset();

        let mut acc = seed;
        while cursor.move_next()? {
            acc = accumulator(acc, &cursor.current()?);
        }

        Ok(acc)
    }

    /// Seedless fold followed by a result projection.
    pub fn aggregate_with<R>(
        &self,
        accumulator: impl FnMut(T, &T) -> T,
        result: impl FnOnce(T) -> R,
    ) -> Result<R> {
        Ok(result(self.aggregate(accumulator)?))
    }

    /// Seeded fold followed by a result projection.
    pub fn aggregate_seeded_with<A, R>(
        &self,
        seed: A,
        accumulator: impl FnMut(A, &T) -> A,
        result: impl FnOnce(A) -> R,
    ) -> Result<R> {
        Ok(result(self.aggregate_seeded(seed, accumulator)?))
    }

    /// The first element, or `None` on an empty sequence.
    pub fn first_or_default(&self) -> Result<Option<T>> {
        self.first_or_default_by(|_| true)
    }

    /// The first matching element, routed through `filter`.
    pub fn first_or_default_by(
        &self,
        predicate: impl FnMut(&T) -> bool + 'static,
    ) -> Result<Option<T>> {
        let matches = self.filter(predicate);
        let cursor = matches.cursor();
        let mut cursor = cursor.borrow_mut();
        cursor.reset();

        if cursor.move_next()? {
            Ok(Some(cursor.current()?))
        } else {
            Ok(None)
        }
    }

    pub fn first(&self) -> Result<T> {
        self.first_by(|_| true)
    }

    pub fn first_by(&self, predicate: impl FnMut(&T) -> bool + 'static) -> Result<T> {
        self.first_or_default_by(predicate)?
            .ok_or(Error::EmptySequence("first"))
    }

    /// The last element observed, or `None` on an empty sequence.
    pub fn last_or_default(&self) -> Result<Option<T>> {
        self.last_or_default_by(|_| true)
    }

    pub fn last_or_default_by(
        &self,
        predicate: impl FnMut(&T) -> bool + 'static,
    ) -> Result<Option<T>> {
        let mut last = None;
        self.filter(predicate).for_each(|element| {
            last = Some(element.clone());
        })?;

        Ok(last)
    }

    pub fn last(&self) -> Result<T> {
        self.last_by(|_| true)
    }

    pub fn last_by(&self, predicate: impl FnMut(&T) -> bool + 'static) -> Result<T> {
        self.last_or_default_by(predicate)?
            .ok_or(Error::EmptySequence("last"))
    }

    pub fn single(&self) -> Result<T> {
        self.single_by(|_| true)
    }

    /// Exactly one matching element: `EmptySequence` on zero matches,
    /// `MultipleMatches` beyond one.
    pub fn single_by(&self, predicate: impl FnMut(&T) -> bool + 'static) -> Result<T> {
        let matches = self.filter(predicate);
        let cursor = matches.cursor();
        let mut cursor = cursor.borrow_mut();
        cursor.reset();

        if !cursor.move_next()? {
            return Err(Error::EmptySequence("single"));
        }
        let result = cursor.current()?;

        if cursor.move_next()? {
            return Err(Error::MultipleMatches("single"));
        }

        Ok(result)
    }

    pub fn single_or_default(&self) -> Result<Option<T>> {
        self.single_or_default_by(|_| true)
    }

    /// `None` both on zero matches and beyond one match.
    pub fn single_or_default_by(
        &self,
        predicate: impl FnMut(&T) -> bool + 'static,
    ) -> Result<Option<T>> {
        let matches = self.filter(predicate);
        let cursor = matches.cursor();
        let mut cursor = cursor.borrow_mut();
        cursor.reset();

        if !cursor.move_next()? {
            return Ok(None);
        }
        let result = cursor.current()?;

        if cursor.move_next()? {
            return Ok(None);
        }

        Ok(Some(result))
    }

    /// Whether the sequence has any element at all.
    pub fn any(&self) -> Result<bool> {
        Ok(self.first_or_default()?.is_some())
    }

    pub fn any_by(&self, predicate: impl FnMut(&T) -> bool + 'static) -> Result<bool> {
        Ok(self.first_or_default_by(predicate)?.is_some())
    }

    /// Whether every element matches: no element fails the predicate.
    pub fn all(&self, mut predicate: impl FnMut(&T) -> bool + 'static) -> Result<bool> {
        Ok(!self.any_by(move |element| !predicate(element))?)
    }

    /// Whether some element is equal (by hash) to the probe.
    pub fn contains(&self, element: &T) -> Result<bool>
    where
        T: Hash,
    {
        self.contains_with(element, HashEq)
    }

    pub fn contains_with(
        &self,
        element: &T,
        eq: impl EqualityComparer<T> + 'static,
    ) -> Result<bool> {
        let probe = element.clone();
        self.any_by(move |candidate| eq.equals(&probe, candidate))
    }

    /// Equal length and pairwise hash equality in order.
    pub fn sequence_equal(&self, other: &Sequence<T>) -> Result<bool>
    where
        T: Hash,
    {
        self.sequence_equal_with(other, HashEq)
    }

    pub fn sequence_equal_with(
        &self,
        other: &Sequence<T>,
        eq: impl EqualityComparer<T>,
    ) -> Result<bool> {
        let first = self.cursor();
        let second = other.cursor();
        first.borrow_mut().reset();
        second.borrow_mut().reset();

        // borrows are scoped per step so a sequence compared against its
        // own handle interleaves instead of panicking
        loop {
            if !first.borrow_mut().move_next()? {
                break;
            }
            if !second.borrow_mut().move_next()? {
                return Ok(false);
            }

            let a = first.borrow().current()?;
            let b = second.borrow().current()?;
            if !eq.equals(&a, &b) {
                return Ok(false);
            }
        }

        let second_exhausted = !second.borrow_mut().move_next()?;
        Ok(second_exhausted)
    }

    /// Group into a lookup keyed by the projection's hash.
    pub fn to_lookup<K>(&self, key: impl Fn(&T) -> K) -> Result<Lookup<K, T>>
    where
        K: Hash + 'static,
    {
        self.to_lookup_with(key, |element: &T| element.clone(), HashEq)
    }

    /// Group with a separate element projection.
    pub fn to_lookup_select<K, E>(
        &self,
        key: impl Fn(&T) -> K,
        element: impl Fn(&T) -> E,
    ) -> Result<Lookup<K, E>>
    where
        K: Hash + 'static,
    {
        self.to_lookup_with(key, element, HashEq)
    }

    pub fn to_lookup_with<K, E>(
        &self,
        key: impl Fn(&T) -> K,
        element: impl Fn(&T) -> E,
        eq: impl EqualityComparer<K> + 'static,
    ) -> Result<Lookup<K, E>> {
        let mut lookup = Lookup::new(eq);
        self.for_each(|e| lookup.add(key(e), element(e)))?;

        #[cfg(feature = "tracing")]
        tracing::trace!(keys = lookup.len(), "built lookup");

        Ok(lookup)
    }

    /// Alias of `to_lookup`: grouping materializes the lookup.
    pub fn group_by<K>(&self, key: impl Fn(&T) -> K) -> Result<Lookup<K, T>>
    where
        K: Hash + 'static,
    {
        self.to_lookup(key)
    }

    pub fn group_by_with<K>(
        &self,
        key: impl Fn(&T) -> K,
        eq: impl EqualityComparer<K> + 'static,
    ) -> Result<Lookup<K, T>> {
        self.to_lookup_with(key, |element: &T| element.clone(), eq)
    }

    /// Materialize into a dictionary; a duplicate key hash fails the whole
    /// conversion.
    pub fn to_dictionary<K>(&self, key: impl Fn(&T) -> K) -> Result<Dictionary<K, T>>
    where
        K: Hash + 'static,
    {
        self.to_dictionary_with(key, |element: &T| element.clone(), HashEq)
    }

    pub fn to_dictionary_select<K, E>(
        &self,
        key: impl Fn(&T) -> K,
        element: impl Fn(&T) -> E,
    ) -> Result<Dictionary<K, E>>
    where
        K: Hash + 'static,
    {
        self.to_dictionary_with(key, element, HashEq)
    }

    pub fn to_dictionary_with<K, E>(
        &self,
        key: impl Fn(&T) -> K,
        element: impl Fn(&T) -> E,
        eq: impl EqualityComparer<K> + 'static,
    ) -> Result<Dictionary<K, E>> {
        let mut dictionary = Dictionary::new(eq);

        let cursor = self.cursor();
        let mut cursor = cursor.borrow_mut();
        cursor.reset();
        while cursor.move_next()? {
            let e = cursor.current()?;
            dictionary.add(key(&e), element(&e))?;
        }

        Ok(dictionary)
    }
}
