//! Hash joins over an eagerly built lookup.
//!
//! Both cursors are handed the lookup already built from the inner source;
//! `reset` therefore rewinds only the outer cursor, and the lookup keeps
//! whatever the inner source held at construction time.

use sequery_core::prelude::Result;

use crate::lookup::Lookup;
use crate::sequence::Sequence;
use crate::traits::{Cursor, Enumerator, State};

/// Inner join: every outer element drains all inner values sharing its
/// key's hash; outer elements without a match produce no row.
pub struct JoinEnumerator<T, V, K, R> {
    outer: Cursor<T>,
    lookup: Lookup<K, V>,
    outer_key: Box<dyn Fn(&T) -> K>,
    result: Box<dyn FnMut(&T, &V) -> R>,
    // the outer element currently being matched, with its match cursor
    active: Option<(T, Cursor<V>)>,
    state: State<R>,
}

impl<T, V, K, R> JoinEnumerator<T, V, K, R> {
    pub fn new(
        outer: Cursor<T>,
        lookup: Lookup<K, V>,
        outer_key: Box<dyn Fn(&T) -> K>,
        result: Box<dyn FnMut(&T, &V) -> R>,
    ) -> Self {
        Self {
            outer,
            lookup,
            outer_key,
            result,
            active: None,
            state: State::NotStarted,
        }
    }
}

impl<T, V, K, R> Enumerator for JoinEnumerator<T, V, K, R>
where
    T: Clone + 'static,
    V: Clone + 'static,
    R: Clone,
{
    type Item = R;

    fn reset(&mut self) {
        self.active = None;
        self.state = State::NotStarted;
        self.outer.borrow_mut().reset();
    }

    fn move_next(&mut self) -> Result<bool> {
        loop {
            if let Some((element, matches)) = &self.active {
                if matches.borrow_mut().move_next()? {
                    let value = matches.borrow().current()?;
                    self.state = State::At((self.result)(element, &value));
                    return Ok(true);
                }
            }

            let mut outer = self.outer.borrow_mut();
            if !outer.move_next()? {
                self.active = None;
                self.state = State::Done;
                return Ok(false);
            }

            let element = outer.current()?;
            drop(outer);

            let key = (self.outer_key)(&element);
            let matches = self.lookup.get(&key);
            self.active = Some((element, matches.cursor()));
        }
    }

    fn current(&self) -> Result<R> {
        self.state.current()
    }
}

/// Left-outer-group join: exactly one row per outer element, carrying the
/// (possibly empty) sequence of matching inner values.
pub struct GroupJoinEnumerator<T, V, K, R> {
    outer: Cursor<T>,
    lookup: Lookup<K, V>,
    outer_key: Box<dyn Fn(&T) -> K>,
    result: Box<dyn FnMut(&T, Sequence<V>) -> R>,
    state: State<R>,
}

impl<T, V, K, R> GroupJoinEnumerator<T, V, K, R> {
    pub fn new(
        outer: Cursor<T>,
        lookup: Lookup<K, V>,
        outer_key: Box<dyn Fn(&T) -> K>,
        result: Box<dyn FnMut(&T, Sequence<V>) -> R>,
    ) -> Self {
        Self {
            outer,
            lookup,
            outer_key,
            result,
            state: State::NotStarted,
        }
    }
}

impl<T, V, K, R> Enumerator for GroupJoinEnumerator<T, V, K, R>
where
    T: Clone + 'static,
    V: Clone + 'static,
    R: Clone,
{
    type Item = R;

    fn reset(&mut self) {
        self.state = State::NotStarted;
        self.outer.borrow_mut().reset();
    }

    fn move_next(&mut self) -> Result<bool> {
        let mut outer = self.outer.borrow_mut();
        if !outer.move_next()? {
            self.state = State::Done;
            return Ok(false);
        }

        let element = outer.current()?;
        drop(outer);

        let key = (self.outer_key)(&element);
        let matches = self.lookup.get(&key);
        self.state = State::At((self.result)(&element, matches));
        Ok(true)
    }

    fn current(&self) -> Result<R> {
        self.state.current()
    }
}
