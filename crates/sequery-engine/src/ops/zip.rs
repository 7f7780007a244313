//! Lockstep pairing of two sources.
//!
//! The first source is polled first, so once it is exhausted the second is
//! never advanced. The paired result is computed on advance and cached.

use sequery_core::prelude::Result;

use crate::traits::{Cursor, Enumerator, State};

pub struct ZipEnumerator<T, U, R> {
    first: Cursor<T>,
    second: Cursor<U>,
    result: Box<dyn FnMut(&T, &U) -> R>,
    state: State<R>,
}

impl<T, U, R> ZipEnumerator<T, U, R> {
    pub fn new(first: Cursor<T>, second: Cursor<U>, result: Box<dyn FnMut(&T, &U) -> R>) -> Self {
        Self {
            first,
            second,
            result,
            state: State::NotStarted,
        }
    }
}

impl<T: Clone, U: Clone, R: Clone> Enumerator for ZipEnumerator<T, U, R> {
    type Item = R;

    fn reset(&mut self) {
        self.state = State::NotStarted;
        self.first.borrow_mut().reset();
        self.second.borrow_mut().reset();
    }

    fn move_next(&mut self) -> Result<bool> {
        if !self.first.borrow_mut().move_next()? {
            self.state = State::Done;
            return Ok(false);
        }
        if !self.second.borrow_mut().move_next()? {
            self.state = State::Done;
            return Ok(false);
        }

        let a = self.first.borrow().current()?;
        let b = self.second.borrow().current()?;
        self.state = State::At((self.result)(&a, &b));
        Ok(true)
    }

    fn current(&self) -> Result<R> {
        self.state.current()
    }
}
