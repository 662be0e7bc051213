use crate::buffered::Buffered;
use crate::cursor::Cursor;
use crate::pull::Pull;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SkipWhileState {
    Skipping,
    Passthrough,
}

/// Producer discarding upstream values while a predicate holds
///
/// Skipping ends permanently at the first value failing the predicate, which
/// is returned. Later values are forwarded whether they match or not.
#[derive(Debug, Clone)]
pub struct SkipWhile<C, F> {
    upstream: C,
    predicate: F,
    state: SkipWhileState,
}

impl<C, F> SkipWhile<C, F>
where
    C: Cursor,
    F: FnMut(&C::Item) -> bool,
{
    pub fn new(upstream: C, predicate: F) -> Self {
        Self {
            upstream,
            predicate,
            state: SkipWhileState::Skipping,
        }
    }
}

impl<C, F> Pull for SkipWhile<C, F>
where
    C: Cursor,
    F: FnMut(&C::Item) -> bool,
{
    type Item = C::Item;
    type Collection = C::Collection;

    fn pull(&mut self) -> Option<C::Item> {
        if self.state == SkipWhileState::Passthrough {
            return self.upstream.pull();
        }

        self.state = SkipWhileState::Passthrough;
        let mut skipped = 0usize;
        loop {
            match self.upstream.pull() {
                Some(value) if (self.predicate)(&value) => skipped += 1,
                value => {
                    log::trace!("skip_while discarded {} values", skipped);
                    return value;
                }
            }
        }
    }
}

/// Extension trait to add skip_while method to all cursors
pub trait SkipWhileExt: Cursor {
    fn skip_while<F>(self, predicate: F) -> Buffered<SkipWhile<Self, F>>
    where
        F: FnMut(&Self::Item) -> bool,
    {
        Buffered::new(SkipWhile::new(self, predicate))
    }
}

impl<C: Cursor> SkipWhileExt for C {}
