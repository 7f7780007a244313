//! Intersect and except over a construction-time probe set.
//!
//! Both drain the second source once, eagerly, into a set of hashes.
//! `reset` rewinds only the first source; the probe set is not rebuilt, so
//! whatever it has consumed stays consumed.

use std::collections::HashSet;

use sequery_core::prelude::{EqualityComparer, Result};

use crate::traits::{Cursor, Enumerator};

fn collect_hashes<T: Clone>(
    source: &Cursor<T>,
    eq: &dyn EqualityComparer<T>,
) -> Result<HashSet<u64>> {
    let mut hashes = HashSet::new();

    let mut cursor = source.borrow_mut();
    cursor.reset();
    while cursor.move_next()? {
        hashes.insert(eq.hash(&cursor.current()?));
    }

    #[cfg(feature = "tracing")]
    tracing::trace!(hashes = hashes.len(), "built probe set");

    Ok(hashes)
}

/// Yields first-source elements whose hash is in the probe set, consuming
/// each matched hash so duplicates only match up to the second source's
/// multiplicity.
pub struct IntersectEnumerator<T> {
    source: Cursor<T>,
    eq: Box<dyn EqualityComparer<T>>,
    probe: HashSet<u64>,
}

impl<T: Clone> IntersectEnumerator<T> {
    pub fn new(
        first: Cursor<T>,
        second: Cursor<T>,
        eq: Box<dyn EqualityComparer<T>>,
    ) -> Result<Self> {
        let probe = collect_hashes(&second, eq.as_ref())?;

        Ok(Self {
            source: first,
            eq,
            probe,
        })
    }
}

impl<T: Clone> Enumerator for IntersectEnumerator<T> {
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
            if self.probe.remove(&hash) {
                return Ok(true);
            }
        }
    }

    fn current(&self) -> Result<T> {
        self.source.borrow().current()
    }
}

/// Yields first-source elements whose hash is absent from the probe set.
/// An excluded hash is deleted once it has suppressed its first
/// occurrence, so exact duplicates beyond the first come through.
pub struct ExceptEnumerator<T> {
    source: Cursor<T>,
    eq: Box<dyn EqualityComparer<T>>,
    excluded: HashSet<u64>,
}

impl<T: Clone> ExceptEnumerator<T> {
    pub fn new(
        first: Cursor<T>,
        second: Cursor<T>,
        eq: Box<dyn EqualityComparer<T>>,
    ) -> Result<Self> {
        let excluded = collect_hashes(&second, eq.as_ref())?;

        Ok(Self {
            source: first,
            eq,
            excluded,
        })
    }
}

impl<T: Clone> Enumerator for ExceptEnumerator<T> {
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
            if self.excluded.remove(&hash) {
                // one-shot exclusion: this hash no longer suppresses
                continue;
            }

            return Ok(true);
        }
    }

    fn current(&self) -> Result<T> {
        self.source.borrow().current()
    }
}
