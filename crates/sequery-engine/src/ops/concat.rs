//! Two-phase concatenation: the first source runs to exhaustion, then the
//! second.

use sequery_core::prelude::Result;

use crate::traits::{Cursor, Enumerator};

pub struct ConcatEnumerator<T> {
    first: Cursor<T>,
    second: Cursor<T>,
    in_second: bool,
}

impl<T> ConcatEnumerator<T> {
    pub fn new(first: Cursor<T>, second: Cursor<T>) -> Self {
        Self {
            first,
            second,
            in_second: false,
        }
    }
}

impl<T: Clone> Enumerator for ConcatEnumerator<T> {
    type Item = T;

    fn reset(&mut self) {
        self.in_second = false;
        self.first.borrow_mut().reset();
        self.second.borrow_mut().reset();
    }

    fn move_next(&mut self) -> Result<bool> {
        if !self.in_second {
            if self.first.borrow_mut().move_next()? {
                return Ok(true);
            }
            self.in_second = true;
        }

        self.second.borrow_mut().move_next()
    }

    fn current(&self) -> Result<T> {
        if self.in_second {
            self.second.borrow().current()
        } else {
            self.first.borrow().current()
        }
    }
}
