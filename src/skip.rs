use crate::buffered::Buffered;
use crate::cursor::{Cursor, SizedCursor};
use crate::pull::{Pull, SizedPull};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SkipState {
    /// Nothing pulled yet, `remaining` values still to discard
    Pending { remaining: usize },
    Passthrough,
}

/// Producer discarding the first `n` values of its upstream
///
/// Discarding happens on the first pull only. The first pull returns the
/// value right after the `n` discarded ones; from then on values are
/// forwarded unchanged.
#[derive(Debug, Clone)]
pub struct Skip<C> {
    upstream: C,
    state: SkipState,
}

impl<C: Cursor> Skip<C> {
    pub fn new(upstream: C, n: usize) -> Self {
        Skip {
            upstream,
            state: SkipState::Pending { remaining: n },
        }
    }
}

impl<C: Cursor> Pull for Skip<C> {
    type Item = C::Item;
    type Collection = C::Collection;

    fn pull(&mut self) -> Option<C::Item> {
        match self.state {
            SkipState::Pending { remaining } => {
                self.state = SkipState::Passthrough;
                log::trace!("skipping {} values", remaining);
                self.upstream.nth(remaining)
            }
            SkipState::Passthrough => self.upstream.pull(),
        }
    }
}

impl<C: SizedCursor> SizedPull for Skip<C> {
    fn remaining_count(&self) -> usize {
        let upstream = self.upstream.remaining_count();
        match self.state {
            SkipState::Pending { remaining } => upstream.saturating_sub(remaining),
            SkipState::Passthrough => upstream,
        }
    }
}

/// Extension trait to add skip method to all cursors
pub trait SkipExt: Cursor {
    /// Discard exactly `n` values before yielding the rest
    fn skip(self, n: usize) -> Buffered<Skip<Self>> {
        Buffered::new(Skip::new(self, n))
    }
}

impl<C: Cursor> SkipExt for C {}
