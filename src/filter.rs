use crate::buffered::Buffered;
use crate::cursor::Cursor;
use crate::derive::{Derivation, Derived};

/// Derivation that only lets through values matching a predicate
///
/// Pulls from the progenitor until a value matches or it runs out. With an
/// endless progenitor and no matching value this never returns.
#[derive(Debug, Clone)]
pub struct Filter<F> {
    predicate: F,
}

impl<F> Filter<F> {
    pub fn new(predicate: F) -> Self {
        Self { predicate }
    }
}

impl<C, F> Derivation<C> for Filter<F>
where
    C: Cursor,
    F: FnMut(&C::Item) -> bool,
{
    type Item = C::Item;
    type Collection = C::Collection;

    fn pull(&mut self, progenitor: &mut C) -> Option<C::Item> {
        loop {
            let value = progenitor.pull()?;
            if (self.predicate)(&value) {
                return Some(value);
            }
        }
    }
}

/// Extension trait to add filter method to all cursors
pub trait FilterExt: Cursor {
    fn filter<F>(self, predicate: F) -> Buffered<Derived<Self, Filter<F>>>
    where
        F: FnMut(&Self::Item) -> bool,
    {
        Buffered::new(Derived::new(self, Filter::new(predicate)))
    }
}

impl<C: Cursor> FilterExt for C {}
