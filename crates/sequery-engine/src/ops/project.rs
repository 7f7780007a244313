//! Projection cursor. The projected value is computed when the cursor
//! advances and cached for `current`.

use sequery_core::prelude::Result;

use crate::traits::{Cursor, Enumerator, State};

pub struct ProjectEnumerator<T, U> {
    source: Cursor<T>,
    projection: Box<dyn FnMut(&T, usize) -> U>,
    index: usize,
    state: State<U>,
}

impl<T, U> ProjectEnumerator<T, U> {
    pub fn new(source: Cursor<T>, projection: Box<dyn FnMut(&T, usize) -> U>) -> Self {
        Self {
            source,
            projection,
            index: 0,
            state: State::NotStarted,
        }
    }
}

impl<T: Clone, U: Clone> Enumerator for ProjectEnumerator<T, U> {
    type Item = U;

    fn reset(&mut self) {
        self.index = 0;
        self.state = State::NotStarted;
        self.source.borrow_mut().reset();
    }

    fn move_next(&mut self) -> Result<bool> {
        let mut source = self.source.borrow_mut();

        if source.move_next()? {
            let element = source.current()?;
            let index = self.index;
            self.index += 1;
            self.state = State::At((self.projection)(&element, index));
            Ok(true)
        } else {
            self.state = State::Done;
            Ok(false)
        }
    }

    fn current(&self) -> Result<U> {
        self.state.current()
    }
}
