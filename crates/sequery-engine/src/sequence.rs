//! The sequence facade: a cheaply clonable handle to exactly one cursor.

use std::cell::RefCell;
use std::hash::Hash;
use std::rc::Rc;

use sequery_core::compare::{Comparer, KeyComparer, Natural, Reverse};
use sequery_core::equality::{EqualityComparer, HashEq};
use sequery_core::error::Result;

use crate::ops::concat::ConcatEnumerator;
use crate::ops::distinct::DistinctEnumerator;
use crate::ops::filter::FilterEnumerator;
use crate::ops::flatten::FlattenEnumerator;
use crate::ops::join::{GroupJoinEnumerator, JoinEnumerator};
use crate::ops::partition::{SkipWhileEnumerator, TakeWhileEnumerator};
use crate::ops::project::ProjectEnumerator;
use crate::ops::setops::{ExceptEnumerator, IntersectEnumerator};
use crate::ops::zip::ZipEnumerator;
use crate::ordered::OrderedSequence;
use crate::traits::{Cursor, Enumerator};

/// A logical, possibly infinite, ordered collection of elements.
///
/// A `Sequence` wraps exactly one cursor: cloning the handle, or asking for
/// the cursor repeatedly, always yields the same object. Re-iterating
/// without a `reset` resumes wherever the cursor left off (typically
/// exhausted), and two holders of one handle observe each other's cursor
/// movement. The engine is single-threaded and single-consumer by contract.
pub struct Sequence<T> {
    cursor: Cursor<T>,
}

impl<T> Clone for Sequence<T> {
    fn clone(&self) -> Self {
        Self {
            cursor: Rc::clone(&self.cursor),
        }
    }
}

impl<T> std::fmt::Debug for Sequence<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Sequence").finish_non_exhaustive()
    }
}

/// Uniform entry into the operator vocabulary: anything that can present
/// itself as a sequence. Sequences hand out their own shared cursor;
/// containers snapshot their contents at call time.
pub trait AsSequence {
    type Item;

    fn sequence(&self) -> Sequence<Self::Item>;
}

impl<T: 'static> AsSequence for Sequence<T> {
    type Item = T;

    fn sequence(&self) -> Sequence<T> {
        self.clone()
    }
}

impl<T: 'static> Sequence<T> {
    /// Wrap a caller-supplied cursor.
    pub fn new(enumerator: impl Enumerator<Item = T> + 'static) -> Self {
        Self {
            cursor: Rc::new(RefCell::new(enumerator)),
        }
    }

    /// The shared cursor. Every call returns the same object.
    pub fn cursor(&self) -> Cursor<T> {
        Rc::clone(&self.cursor)
    }
}

impl<T: Clone + 'static> Sequence<T> {
    /// Elements satisfying the predicate, in source order.
    pub fn filter(&self, mut predicate: impl FnMut(&T) -> bool + 'static) -> Sequence<T> {
        self.filter_indexed(move |element, _| predicate(element))
    }

    /// Elements satisfying the predicate. The index counts attempted
    /// positions, not yielded elements, and rewinds on `reset`.
    pub fn filter_indexed(
        &self,
        predicate: impl FnMut(&T, usize) -> bool + 'static,
    ) -> Sequence<T> {
        Sequence::new(FilterEnumerator::new(self.cursor(), Box::new(predicate)))
    }

    /// Projects every element, preserving order and cardinality.
    pub fn select<U: Clone + 'static>(
        &self,
        mut projection: impl FnMut(&T) -> U + 'static,
    ) -> Sequence<U> {
        self.select_indexed(move |element, _| projection(element))
    }

    pub fn select_indexed<U: Clone + 'static>(
        &self,
        projection: impl FnMut(&T, usize) -> U + 'static,
    ) -> Sequence<U> {
        Sequence::new(ProjectEnumerator::new(self.cursor(), Box::new(projection)))
    }

    /// Opens a nested sequence per element and fully drains it before
    /// advancing upstream. Empty nested sequences are skipped.
    pub fn select_many<U: Clone + 'static>(
        &self,
        projection: impl FnMut(&T, usize) -> Sequence<U> + 'static,
    ) -> Sequence<U> {
        self.select_many_with(projection, |_, inner: &U| inner.clone())
    }

    /// `select_many` with a result projection over the outer/inner pair.
    pub fn select_many_with<U: Clone + 'static, R: Clone + 'static>(
        &self,
        projection: impl FnMut(&T, usize) -> Sequence<U> + 'static,
        result: impl FnMut(&T, &U) -> R + 'static,
    ) -> Sequence<R> {
        Sequence::new(FlattenEnumerator::new(
            self.cursor(),
            Box::new(projection),
            Box::new(result),
        ))
    }

    /// This sequence's elements, then the other's.
    pub fn concat(&self, other: &Sequence<T>) -> Sequence<T> {
        Sequence::new(ConcatEnumerator::new(self.cursor(), other.cursor()))
    }

    /// First-seen element per equality hash, in source order.
    pub fn distinct(&self) -> Sequence<T>
    where
        T: Hash,
    {
        self.distinct_with(HashEq)
    }

    pub fn distinct_with(&self, eq: impl EqualityComparer<T> + 'static) -> Sequence<T> {
        Sequence::new(DistinctEnumerator::new(self.cursor(), Box::new(eq)))
    }

    /// Concatenation then distinct. Deliberately not optimized further.
    pub fn union(&self, other: &Sequence<T>) -> Sequence<T>
    where
        T: Hash,
    {
        self.union_with(other, HashEq)
    }

    pub fn union_with(
        &self,
        other: &Sequence<T>,
        eq: impl EqualityComparer<T> + 'static,
    ) -> Sequence<T> {
        self.concat(other).distinct_with(eq)
    }

    /// Elements whose hash appears in `other`. The probe set is built from
    /// a fresh traversal of `other` at construction, and every matched hash
    /// is consumed, so duplicates only match up to `other`'s multiplicity.
    pub fn intersect(&self, other: &Sequence<T>) -> Result<Sequence<T>>
    where
        T: Hash,
    {
        self.intersect_with(other, HashEq)
    }

    pub fn intersect_with(
        &self,
        other: &Sequence<T>,
        eq: impl EqualityComparer<T> + 'static,
    ) -> Result<Sequence<T>> {
        Ok(Sequence::new(IntersectEnumerator::new(
            self.cursor(),
            other.cursor(),
            Box::new(eq),
        )?))
    }

    /// Elements whose hash does not appear in `other`. An excluded hash is
    /// deleted once it has suppressed its first occurrence, so exact
    /// duplicates beyond the first come through.
    pub fn except(&self, other: &Sequence<T>) -> Result<Sequence<T>>
    where
        T: Hash,
    {
        self.except_with(other, HashEq)
    }

    pub fn except_with(
        &self,
        other: &Sequence<T>,
        eq: impl EqualityComparer<T> + 'static,
    ) -> Result<Sequence<T>> {
        Ok(Sequence::new(ExceptEnumerator::new(
            self.cursor(),
            other.cursor(),
            Box::new(eq),
        )?))
    }

    /// Yields while the predicate holds; the first failure is terminal and
    /// the cursor never resumes.
    pub fn take_while(&self, predicate: impl FnMut(&T) -> bool + 'static) -> Sequence<T> {
        Sequence::new(TakeWhileEnumerator::new(self.cursor(), Box::new(predicate)))
    }

    /// Skips the leading run of matching elements, then yields everything
    /// after, including later matches.
    pub fn skip_while(&self, predicate: impl FnMut(&T) -> bool + 'static) -> Sequence<T> {
        Sequence::new(SkipWhileEnumerator::new(self.cursor(), Box::new(predicate)))
    }

    /// The first `amount` positions, as an index predicate over `filter`.
    pub fn take(&self, amount: usize) -> Sequence<T> {
        self.filter_indexed(move |_, index| index < amount)
    }

    /// Everything after the first `amount` positions.
    pub fn skip(&self, amount: usize) -> Sequence<T> {
        self.filter_indexed(move |_, index| index >= amount)
    }

    /// Lockstep pairing; stops at the shorter source. The first source is
    /// polled first and the second is left untouched once it is exhausted.
    pub fn zip<U: Clone + 'static, R: Clone + 'static>(
        &self,
        other: &Sequence<U>,
        result: impl FnMut(&T, &U) -> R + 'static,
    ) -> Sequence<R> {
        Sequence::new(ZipEnumerator::new(
            self.cursor(),
            other.cursor(),
            Box::new(result),
        ))
    }

    /// Inner join: a lookup is built over `inner` at construction, and each
    /// outer element drains all inner values sharing its key's hash. Outer
    /// elements without a match produce no row.
    pub fn join<V, K, R>(
        &self,
        inner: &Sequence<V>,
        outer_key: impl Fn(&T) -> K + 'static,
        inner_key: impl Fn(&V) -> K + 'static,
        result: impl FnMut(&T, &V) -> R + 'static,
    ) -> Result<Sequence<R>>
    where
        V: Clone + 'static,
        K: Hash + Clone + 'static,
        R: Clone + 'static,
    {
        self.join_with(inner, outer_key, inner_key, result, HashEq)
    }

    pub fn join_with<V, K, R>(
        &self,
        inner: &Sequence<V>,
        outer_key: impl Fn(&T) -> K + 'static,
        inner_key: impl Fn(&V) -> K + 'static,
        result: impl FnMut(&T, &V) -> R + 'static,
        eq: impl EqualityComparer<K> + 'static,
    ) -> Result<Sequence<R>>
    where
        V: Clone + 'static,
        K: Clone + 'static,
        R: Clone + 'static,
    {
        let lookup = inner.to_lookup_with(inner_key, |element: &V| element.clone(), eq)?;
        Ok(Sequence::new(JoinEnumerator::new(
            self.cursor(),
            lookup,
            Box::new(outer_key),
            Box::new(result),
        )))
    }

    /// Left-outer-group join: exactly one row per outer element, carrying
    /// the (possibly empty) sequence of matching inner values.
    pub fn group_join<V, K, R>(
        &self,
        inner: &Sequence<V>,
        outer_key: impl Fn(&T) -> K + 'static,
        inner_key: impl Fn(&V) -> K + 'static,
        result: impl FnMut(&T, Sequence<V>) -> R + 'static,
    ) -> Result<Sequence<R>>
    where
        V: Clone + 'static,
        K: Hash + Clone + 'static,
        R: Clone + 'static,
    {
        self.group_join_with(inner, outer_key, inner_key, result, HashEq)
    }

    pub fn group_join_with<V, K, R>(
        &self,
        inner: &Sequence<V>,
        outer_key: impl Fn(&T) -> K + 'static,
        inner_key: impl Fn(&V) -> K + 'static,
        result: impl FnMut(&T, Sequence<V>) -> R + 'static,
        eq: impl EqualityComparer<K> + 'static,
    ) -> Result<Sequence<R>>
    where
        V: Clone + 'static,
        K: Clone + 'static,
        R: Clone + 'static,
    {
        let lookup = inner.to_lookup_with(inner_key, |element: &V| element.clone(), eq)?;
        Ok(Sequence::new(GroupJoinEnumerator::new(
            self.cursor(),
            lookup,
            Box::new(outer_key),
            Box::new(result),
        )))
    }

    /// Ascending natural order.
    pub fn order(&self) -> OrderedSequence<T>
    where
        T: Ord,
    {
        OrderedSequence::new(self.cursor(), Box::new(Natural))
    }

    /// Ascending order by a projected key.
    pub fn order_by<K: Ord + 'static>(
        &self,
        projection: impl Fn(&T) -> K + 'static,
    ) -> OrderedSequence<T> {
        self.order_by_with(projection, Natural)
    }

    pub fn order_by_with<K: 'static>(
        &self,
        projection: impl Fn(&T) -> K + 'static,
        comparer: impl Comparer<K> + 'static,
    ) -> OrderedSequence<T> {
        OrderedSequence::new(
            self.cursor(),
            Box::new(KeyComparer::new(projection, comparer)),
        )
    }

    /// Descending natural order.
    pub fn order_descending(&self) -> OrderedSequence<T>
    where
        T: Ord,
    {
        OrderedSequence::new(self.cursor(), Box::new(Reverse::new(Natural)))
    }

    pub fn order_by_descending<K: Ord + 'static>(
        &self,
        projection: impl Fn(&T) -> K + 'static,
    ) -> OrderedSequence<T> {
        self.order_by_descending_with(projection, Natural)
    }

    pub fn order_by_descending_with<K: 'static>(
        &self,
        projection: impl Fn(&T) -> K + 'static,
        comparer: impl Comparer<K> + 'static,
    ) -> OrderedSequence<T> {
        OrderedSequence::new(
            self.cursor(),
            Box::new(Reverse::new(KeyComparer::new(projection, comparer))),
        )
    }

    /// Descending order by original position (paired in explicitly, since
    /// key projections never see the enumeration index), not an O(n)
    /// reversal.
    pub fn reverse(&self) -> Sequence<T> {
        self.select_indexed(|element, index| (index, element.clone()))
            .order_by_descending(|pair: &(usize, T)| pair.0)
            .sequence()
            .select(|pair| pair.1.clone())
    }
}
