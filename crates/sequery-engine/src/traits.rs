//! The cursor contract every combinator implements.
//!
//! A cursor has three states: not started, positioned on an element, and
//! exhausted. `move_next` advances one element, and a `false` result is
//! terminal until `reset`. Upstream cursors are captured once at
//! construction; `reset` must propagate to them rather than re-fetch.

use std::cell::RefCell;
use std::rc::Rc;

use sequery_core::error::{Error, Result};

/// Suspend/resume cursor over a sequence of elements.
pub trait Enumerator {
    type Item;

    /// Return to the not-started state, rewinding owned upstream cursors.
    fn reset(&mut self);

    /// Advance one element. `false` means exhausted and stays `false`
    /// until `reset`.
    fn move_next(&mut self) -> Result<bool>;

    /// The element under the cursor. Fails with `InvalidState` before the
    /// first `move_next` and after exhaustion.
    fn current(&self) -> Result<Self::Item>;
}

/// Shared handle to a cursor. Clones refer to the same cursor object.
pub type Cursor<T> = Rc<RefCell<dyn Enumerator<Item = T>>>;

/// Position tracker for cursors that cache a computed element.
#[derive(Debug, Clone)]
pub enum State<T> {
    NotStarted,
    At(T),
    Done,
}

impl<T: Clone> State<T> {
    pub fn current(&self) -> Result<T> {
        match self {
            State::At(value) => Ok(value.clone()),
            State::NotStarted => Err(Error::InvalidState("cursor not started")),
            State::Done => Err(Error::InvalidState("cursor exhausted")),
        }
    }
}

