//! First-seen-per-hash cursor.
//!
//! The seen set accumulates monotonically over the cursor's lifetime:
//! `reset` rewinds the source but keeps the set, so a second pass yields
//! nothing already seen.

use std::collections::HashSet;

use sequery_core::prelude::{EqualityComparer, Result};

use crate::traits::{Cursor, Enumerator};

pub struct DistinctEnumerator<T> {
    source: Cursor<T>,
    eq: Box<dyn EqualityComparer<T>>,
    seen: HashSet<u64>,
}

impl<T> DistinctEnumerator<T> {
    pub fn new(source: Cursor<T>, eq: Box<dyn EqualityComparer<T>>) -> Self {
        Self {
            source,
            eq,
            seen: HashSet::new(),
        }
    }
}

impl<T: Clone> Enumerator for DistinctEnumerator<T> {
    type Item = T;

    fn reset(&mut self) {
        self.source.borrow_mut().reset();
    }

    fn move_next(&mut self) -> Result<bool> {
        let mut source = self.source.borrow_mut();

        loop {
            if !source.move_next()? {
                return Ok(false);
            }

            let hash = self.eq.hash(&source.current()?);
            if self.seen.insert(hash) {
                return Ok(true);
            }
        }
    }

    fn current(&self) -> Result<T> {
        self.source.borrow().current()
    }
}
