use crate::buffered::Buffered;
use crate::cursor::{Cursor, SizedCursor};
use crate::pull::{Pull, SizedPull};

/// Producer yielding at most `n` values from its upstream
#[derive(Debug, Clone)]
pub struct Take<C> {
    upstream: C,
    remaining: usize,
}

impl<C: Cursor> Take<C> {
    pub fn new(upstream: C, n: usize) -> Self {
        Take {
            upstream,
            remaining: n,
        }
    }
}

impl<C: Cursor> Pull for Take<C> {
    type Item = C::Item;
    type Collection = C::Collection;

    fn pull(&mut self) -> Option<C::Item> {
        if self.remaining == 0 {
            return None;
        }
        let value = self.upstream.pull()?;
        self.remaining -= 1;
        Some(value)
    }
}

impl<C: SizedCursor> SizedPull for Take<C> {
    fn remaining_count(&self) -> usize {
        self.remaining.min(self.upstream.remaining_count())
    }
}

/// Extension trait to add take method to all cursors
pub trait TakeExt: Cursor {
    /// Yield the first `n` values, then report exhaustion
    fn take(self, n: usize) -> Buffered<Take<Self>> {
        Buffered::new(Take::new(self, n))
    }
}

impl<C: Cursor> TakeExt for C {}
