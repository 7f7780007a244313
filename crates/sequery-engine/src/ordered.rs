//! Ordered sequences: a sequence plus a replaceable comparer.

use std::cell::RefCell;
use std::cmp::Ordering;
use std::ops::Deref;
use std::rc::Rc;

use sequery_core::compare::{Chain, Comparer, FnComparer, KeyComparer, Natural};

use crate::ops::order::OrderEnumerator;
use crate::sequence::{AsSequence, Sequence};
use crate::traits::Cursor;

/// A sequence ordered by a comparer that `then_by` may still extend.
///
/// The comparer lives in a shared cell read by the ordering cursor on every
/// advance, so appending a tie-break affects any traversal that has not
/// yet drained. Clones share both the cursor and the comparer cell.
pub struct OrderedSequence<T> {
    sequence: Sequence<T>,
    comparer: Rc<RefCell<Box<dyn Comparer<T>>>>,
}

impl<T> Clone for OrderedSequence<T> {
    fn clone(&self) -> Self {
        Self {
            sequence: self.sequence.clone(),
            comparer: Rc::clone(&self.comparer),
        }
    }
}

impl<T: Clone + 'static> OrderedSequence<T> {
    pub(crate) fn new(source: Cursor<T>, comparer: Box<dyn Comparer<T>>) -> Self {
        let cell = Rc::new(RefCell::new(comparer));
        let sequence = Sequence::new(OrderEnumerator::new(source, Rc::clone(&cell)));

        Self {
            sequence,
            comparer: cell,
        }
    }

    /// Append a secondary tie-break: the current comparer stays primary and
    /// the projected comparer decides its ties.
    pub fn then_by<K: Ord + 'static>(
        &self,
        projection: impl Fn(&T) -> K + 'static,
    ) -> OrderedSequence<T> {
        self.then_by_with(projection, Natural)
    }

    pub fn then_by_with<K: 'static>(
        &self,
        projection: impl Fn(&T) -> K + 'static,
        comparer: impl Comparer<K> + 'static,
    ) -> OrderedSequence<T> {
        let secondary = KeyComparer::new(projection, comparer);

        let primary = {
            let mut slot = self.comparer.borrow_mut();
            std::mem::replace(
                &mut *slot,
                Box::new(FnComparer::new(|_: &T, _: &T| Ordering::Equal)),
            )
        };

        *self.comparer.borrow_mut() = Box::new(Chain::new(primary, secondary));
        self.clone()
    }
}

impl<T> Deref for OrderedSequence<T> {
    type Target = Sequence<T>;

    fn deref(&self) -> &Sequence<T> {
        &self.sequence
    }
}

impl<T: 'static> AsSequence for OrderedSequence<T> {
    type Item = T;

    fn sequence(&self) -> Sequence<T> {
        self.sequence.clone()
    }
}
