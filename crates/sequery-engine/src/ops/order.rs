//! Ordering cursor: materialize the source, then repeatedly extract the
//! minimum remaining element under the comparer.
//!
//! The comparer cell is shared and replaceable: a `then_by` chained after
//! construction must take effect on the very next advance, so every scan
//! reads the comparer as currently configured. `reset` drops the working
//! buffer and defers the source rewind to the next materialization.

use std::cell::RefCell;
use std::cmp::Ordering;
use std::rc::Rc;

use sequery_core::prelude::{Comparer, Result};

use crate::traits::{Cursor, Enumerator, State};

pub struct OrderEnumerator<T> {
    source: Cursor<T>,
    comparer: Rc<RefCell<Box<dyn Comparer<T>>>>,
    // remaining working buffer; None until materialized
    buffer: Option<Vec<T>>,
    rewind_on_fill: bool,
    state: State<T>,
}

impl<T> OrderEnumerator<T> {
    pub fn new(source: Cursor<T>, comparer: Rc<RefCell<Box<dyn Comparer<T>>>>) -> Self {
        Self {
            source,
            comparer,
            buffer: None,
            rewind_on_fill: false,
            state: State::NotStarted,
        }
    }
}

impl<T: Clone> OrderEnumerator<T> {
    fn collect_source(&mut self) -> Result<Vec<T>> {
        let mut source = self.source.borrow_mut();
        if self.rewind_on_fill {
            source.reset();
        }

        let mut rows = Vec::new();
        while source.move_next()? {
            rows.push(source.current()?);
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(rows = rows.len(), "materialized ordering buffer");

        Ok(rows)
    }
}

impl<T: Clone> Enumerator for OrderEnumerator<T> {
    type Item = T;

    fn reset(&mut self) {
        self.buffer = None;
        self.rewind_on_fill = true;
        self.state = State::NotStarted;
    }

    fn move_next(&mut self) -> Result<bool> {
        if self.buffer.is_none() {
            let rows = self.collect_source()?;
            self.buffer = Some(rows);
        }

        let buffer = match self.buffer.as_mut() {
            Some(rows) => rows,
            None => return Ok(false),
        };

        if buffer.is_empty() {
            self.state = State::Done;
            return Ok(false);
        }

        // scan for the minimum under the comparer as configured right now;
        // the first minimal element wins a tie
        let comparer = self.comparer.borrow();
        let mut min_index = 0;
        for i in 1..buffer.len() {
            if comparer.compare(&buffer[i], &buffer[min_index]) == Ordering::Less {
                min_index = i;
            }
        }
        drop(comparer);

        let element = buffer.remove(min_index);
        self.state = State::At(element);
        Ok(true)
    }

    fn current(&self) -> Result<T> {
        self.state.current()
    }
}
