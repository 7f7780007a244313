//! Pure sequence sources: empty, range, repeat, and vector-backed cursors.
//!
//! Counts are signed so the negative-count contract stays expressible;
//! bounds are validated at construction, not at first advance.

use std::marker::PhantomData;

use sequery_core::error::{Error, Result};

use crate::sequence::Sequence;
use crate::traits::Enumerator;

/// Cursor over nothing at all.
pub struct EmptyEnumerator<T> {
    marker: PhantomData<T>,
}

impl<T> EmptyEnumerator<T> {
    pub fn new() -> Self {
        Self {
            marker: PhantomData,
        }
    }
}

impl<T> Default for EmptyEnumerator<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Enumerator for EmptyEnumerator<T> {
    type Item = T;

    fn reset(&mut self) {}

    fn move_next(&mut self) -> Result<bool> {
        Ok(false)
    }

    fn current(&self) -> Result<T> {
        Err(Error::InvalidState("empty sequence"))
    }
}

/// Arithmetic progression of `count` consecutive integers from `start`.
pub struct RangeEnumerator {
    start: i64,
    count: i64,
    // -1 before the first advance; clamps at `count` once exhausted
    offset: i64,
}

impl RangeEnumerator {
    pub fn new(start: i64, count: i64) -> Result<Self> {
        if count < 0 {
            return Err(Error::Range(format!("negative count: {}", count)));
        }
        if count > 0 && start.checked_add(count - 1).is_none() {
            return Err(Error::Range(format!(
                "range from {} with count {} overflows i64",
                start, count
            )));
        }

        Ok(Self {
            start,
            count,
            offset: -1,
        })
    }
}

impl Enumerator for RangeEnumerator {
    type Item = i64;

    fn reset(&mut self) {
        self.offset = -1;
    }

    fn move_next(&mut self) -> Result<bool> {
        if self.offset < self.count {
            self.offset += 1;
        }
        Ok(self.offset < self.count)
    }

    fn current(&self) -> Result<i64> {
        if self.offset < 0 {
            Err(Error::InvalidState("cursor not started"))
        } else if self.offset >= self.count {
            Err(Error::InvalidState("cursor exhausted"))
        } else {
            Ok(self.start + self.offset)
        }
    }
}

/// The same element, `count` times.
pub struct RepeatEnumerator<T> {
    element: T,
    count: i64,
    offset: i64,
}

impl<T> RepeatEnumerator<T> {
    pub fn new(element: T, count: i64) -> Result<Self> {
        if count < 0 {
            return Err(Error::Range(format!("negative count: {}", count)));
        }

        Ok(Self {
            element,
            count,
            offset: -1,
        })
    }
}

impl<T: Clone> Enumerator for RepeatEnumerator<T> {
    type Item = T;

    fn reset(&mut self) {
        self.offset = -1;
    }

    fn move_next(&mut self) -> Result<bool> {
        if self.offset < self.count {
            self.offset += 1;
        }
        Ok(self.offset < self.count)
    }

    fn current(&self) -> Result<T> {
        if self.offset < 0 {
            Err(Error::InvalidState("cursor not started"))
        } else if self.offset >= self.count {
            Err(Error::InvalidState("cursor exhausted"))
        } else {
            Ok(self.element.clone())
        }
    }
}

/// Cursor over an owned vector.
pub struct VecEnumerator<T> {
    items: Vec<T>,
    // None before the first advance; an index past the end means exhausted
    position: Option<usize>,
}

impl<T> VecEnumerator<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items,
            position: None,
        }
    }
}

impl<T: Clone> Enumerator for VecEnumerator<T> {
    type Item = T;

    fn reset(&mut self) {
        self.position = None;
    }

    fn move_next(&mut self) -> Result<bool> {
        let next = self.position.map_or(0, |p| p.saturating_add(1));
        self.position = Some(next.min(self.items.len()));
        Ok(next < self.items.len())
    }

    fn current(&self) -> Result<T> {
        match self.position {
            Some(p) if p < self.items.len() => Ok(self.items[p].clone()),
            Some(_) => Err(Error::InvalidState("cursor exhausted")),
            None => Err(Error::InvalidState("cursor not started")),
        }
    }
}

impl<T: Clone + 'static> Sequence<T> {
    /// A sequence with no elements.
    pub fn empty() -> Self {
        Sequence::new(EmptyEnumerator::new())
    }

    /// A sequence over an owned vector.
    pub fn from_vec(items: Vec<T>) -> Self {
        Sequence::new(VecEnumerator::new(items))
    }

    /// The same element `count` times. Fails on a negative count.
    pub fn repeat(element: T, count: i64) -> Result<Self> {
        Ok(Sequence::new(RepeatEnumerator::new(element, count)?))
    }
}

impl Sequence<i64> {
    /// `count` consecutive integers starting at `start`. Fails on a
    /// negative count or when the last value would overflow `i64`.
    pub fn range(start: i64, count: i64) -> Result<Self> {
        Ok(Sequence::new(RangeEnumerator::new(start, count)?))
    }
}

impl<T: Clone + 'static> From<Vec<T>> for Sequence<T> {
    fn from(items: Vec<T>) -> Self {
        Sequence::from_vec(items)
    }
}
