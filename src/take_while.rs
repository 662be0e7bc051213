use crate::buffered::Buffered;
use crate::cursor::Cursor;
use crate::pull::Pull;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TakeWhileState {
    Active,
    Closed,
}

/// Producer yielding upstream values while a predicate holds
///
/// The first value failing the predicate closes the producer for good; that
/// value is left unconsumed in the upstream's lookahead.
#[derive(Debug, Clone)]
pub struct TakeWhile<C, F> {
    upstream: C,
    predicate: F,
    state: TakeWhileState,
}

impl<C, F> TakeWhile<C, F>
where
    C: Cursor,
    F: FnMut(&C::Item) -> bool,
{
    pub fn new(upstream: C, predicate: F) -> Self {
        Self {
            upstream,
            predicate,
            state: TakeWhileState::Active,
        }
    }

    /// Whether a value has failed the predicate or upstream ran out
    pub fn is_closed(&self) -> bool {
        self.state == TakeWhileState::Closed
    }
}

impl<C, F> Pull for TakeWhile<C, F>
where
    C: Cursor,
    F: FnMut(&C::Item) -> bool,
{
    type Item = C::Item;
    type Collection = C::Collection;

    fn pull(&mut self) -> Option<C::Item> {
        if self.state == TakeWhileState::Closed {
            return None;
        }

        let keep = match self.upstream.peek() {
            Some(value) => (self.predicate)(value),
            None => false,
        };

        if keep {
            self.upstream.pull()
        } else {
            self.state = TakeWhileState::Closed;
            None
        }
    }
}

/// Extension trait to add take_while method to all cursors
pub trait TakeWhileExt: Cursor {
    fn take_while<F>(self, predicate: F) -> Buffered<TakeWhile<Self, F>>
    where
        F: FnMut(&Self::Item) -> bool,
    {
        Buffered::new(TakeWhile::new(self, predicate))
    }
}

impl<C: Cursor> TakeWhileExt for C {}
