//! Predicate cursor. `take` and `skip` are index predicates over this
//! cursor, so the index must count attempted positions, not yields.

use sequery_core::prelude::Result;

use crate::traits::{Cursor, Enumerator};

pub struct FilterEnumerator<T> {
    source: Cursor<T>,
    predicate: Box<dyn FnMut(&T, usize) -> bool>,
    index: usize,
}

impl<T> FilterEnumerator<T> {
    pub fn new(source: Cursor<T>, predicate: Box<dyn FnMut(&T, usize) -> bool>) -> Self {
        Self {
            source,
            predicate,
            index: 0,
        }
    }
}

impl<T: Clone> Enumerator for FilterEnumerator<T> {
    type Item = T;

    fn reset(&mut self) {
        self.index = 0;
        self.source.borrow_mut().reset();
    }

    fn move_next(&mut self) -> Result<bool> {
        let mut source = self.source.borrow_mut();

        loop {
            if !source.move_next()? {
                return Ok(false);
            }

            let element = source.current()?;
            let index = self.index;
            self.index += 1;

            if (self.predicate)(&element, index) {
                return Ok(true);
            }
        }
    }

    fn current(&self) -> Result<T> {
        self.source.borrow().current()
    }
}
