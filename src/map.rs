use crate::buffered::Buffered;
use crate::cursor::{Cursor, SizedCursor};
use crate::derive::{Derivation, Derived, SizedDerivation};

/// Derivation that transforms each value with a mapping function
#[derive(Debug, Clone)]
pub struct Map<F> {
    mapper: F,
}

impl<F> Map<F> {
    pub fn new(mapper: F) -> Self {
        Map { mapper }
    }
}

impl<C, F, U> Derivation<C> for Map<F>
where
    C: Cursor,
    F: FnMut(C::Item) -> U,
{
    type Item = U;
    type Collection = Vec<U>;

    fn pull(&mut self, progenitor: &mut C) -> Option<U> {
        progenitor.pull().map(&mut self.mapper)
    }
}

impl<C, F, U> SizedDerivation<C> for Map<F>
where
    C: SizedCursor,
    F: FnMut(C::Item) -> U,
{
    fn remaining_count(&self, progenitor: &C) -> usize {
        progenitor.remaining_count()
    }
}

/// Extension trait to add .map() method support for cursors
pub trait MapExt: Cursor {
    fn map<F, U>(self, mapper: F) -> Buffered<Derived<Self, Map<F>>>
    where
        F: FnMut(Self::Item) -> U,
    {
        Buffered::new(Derived::new(self, Map::new(mapper)))
    }
}

/// Implement MapExt for all cursors
impl<C: Cursor> MapExt for C {}
