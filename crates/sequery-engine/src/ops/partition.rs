//! Prefix partitioning: take-while and skip-while. Both probe the element
//! only, never an index.

use sequery_core::prelude::{Error, Result};

use crate::traits::{Cursor, Enumerator};

/// Yields while the predicate holds. The first failure is terminal: the
/// cursor stays exhausted even if later elements would match again.
pub struct TakeWhileEnumerator<T> {
    source: Cursor<T>,
    predicate: Box<dyn FnMut(&T) -> bool>,
    done: bool,
}

impl<T> TakeWhileEnumerator<T> {
    pub fn new(source: Cursor<T>, predicate: Box<dyn FnMut(&T) -> bool>) -> Self {
        Self {
            source,
            predicate,
            done: false,
        }
    }
}

impl<T: Clone> Enumerator for TakeWhileEnumerator<T> {
    type Item = T;

    fn reset(&mut self) {
        self.done = false;
        self.source.borrow_mut().reset();
    }

    fn move_next(&mut self) -> Result<bool> {
        if self.done {
            return Ok(false);
        }

        let mut source = self.source.borrow_mut();
        if source.move_next()? {
            let element = source.current()?;
            if (self.predicate)(&element) {
                return Ok(true);
            }
        }

        self.done = true;
        Ok(false)
    }

    fn current(&self) -> Result<T> {
        if self.done {
            // the source may still be positioned on the failing element
            return Err(Error::InvalidState("cursor exhausted"));
        }

        self.source.borrow().current()
    }
}

/// Skips the leading run of matching elements, then yields everything
/// after it, including elements the predicate would match again.
pub struct SkipWhileEnumerator<T> {
    source: Cursor<T>,
    predicate: Box<dyn FnMut(&T) -> bool>,
    skipping: bool,
}

impl<T> SkipWhileEnumerator<T> {
    pub fn new(source: Cursor<T>, predicate: Box<dyn FnMut(&T) -> bool>) -> Self {
        Self {
            source,
            predicate,
            skipping: true,
        }
    }
}

impl<T: Clone> Enumerator for SkipWhileEnumerator<T> {
    type Item = T;

    fn reset(&mut self) {
        self.skipping = true;
        self.source.borrow_mut().reset();
    }

    fn move_next(&mut self) -> Result<bool> {
        let mut source = self.source.borrow_mut();

        loop {
            if !source.move_next()? {
                return Ok(false);
            }

            if !self.skipping {
                return Ok(true);
            }

            let element = source.current()?;
            if !(self.predicate)(&element) {
                self.skipping = false;
                return Ok(true);
            }
        }
    }

    fn current(&self) -> Result<T> {
        self.source.borrow().current()
    }
}
