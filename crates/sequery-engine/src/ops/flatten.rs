//! Nested-sequence drain: one nested sequence per upstream element, fully
//! drained before the upstream advances. Empty nested sequences are
//! skipped, and the index counts upstream elements consumed.

use sequery_core::prelude::Result;

use crate::sequence::Sequence;
use crate::traits::{Cursor, Enumerator, State};

pub struct FlattenEnumerator<T, U, R> {
    source: Cursor<T>,
    projection: Box<dyn FnMut(&T, usize) -> Sequence<U>>,
    result: Box<dyn FnMut(&T, &U) -> R>,
    // the upstream element currently being flattened, with its cursor
    active: Option<(T, Cursor<U>)>,
    index: usize,
    state: State<R>,
}

impl<T, U, R> FlattenEnumerator<T, U, R> {
    pub fn new(
        source: Cursor<T>,
        projection: Box<dyn FnMut(&T, usize) -> Sequence<U>>,
        result: Box<dyn FnMut(&T, &U) -> R>,
    ) -> Self {
        Self {
            source,
            projection,
            result,
            active: None,
            index: 0,
            state: State::NotStarted,
        }
    }
}

impl<T: Clone + 'static, U: Clone + 'static, R: Clone> Enumerator for FlattenEnumerator<T, U, R> {
    type Item = R;

    fn reset(&mut self) {
        self.active = None;
        self.index = 0;
        self.state = State::NotStarted;
        self.source.borrow_mut().reset();
    }

    fn move_next(&mut self) -> Result<bool> {
        loop {
            if let Some((outer, inner)) = &self.active {
                if inner.borrow_mut().move_next()? {
                    let value = inner.borrow().current()?;
                    self.state = State::At((self.result)(outer, &value));
                    return Ok(true);
                }
            }

            let mut source = self.source.borrow_mut();
            if !source.move_next()? {
                self.active = None;
                self.state = State::Done;
                return Ok(false);
            }

            let outer = source.current()?;
            drop(source);

            let index = self.index;
            self.index += 1;
            let nested = (self.projection)(&outer, index);
            self.active = Some((outer, nested.cursor()));
        }
    }

    fn current(&self) -> Result<R> {
        self.state.current()
    }
}
