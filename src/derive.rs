//! Deriving new cursors from existing ones
//!
//! A derived cursor owns a *progenitor* cursor and overrides only how the
//! next value is produced. Everything else (`peek`, draining, and every
//! combinator) comes from the shared [`Cursor`] surface, so a derivation is
//! usually a one-line pull function.

use crate::buffered::Buffered;
use crate::cursor::{Cursor, SizedCursor};
use crate::pull::{Pull, SizedPull};

/// The overriding pull of a derived cursor
pub trait Derivation<C: Cursor> {
    /// The type of values the derived cursor yields
    type Item;

    /// What draining the derived cursor builds
    type Collection: Default + Extend<Self::Item>;

    /// Produce the next value by pulling from the progenitor
    fn pull(&mut self, progenitor: &mut C) -> Option<Self::Item>;
}

/// A derivation whose remaining count follows from its progenitor's
pub trait SizedDerivation<C: SizedCursor>: Derivation<C> {
    fn remaining_count(&self, progenitor: &C) -> usize;
}

/// Producer that pulls through a [`Derivation`] from its progenitor
#[derive(Debug, Clone)]
pub struct Derived<C, D> {
    progenitor: C,
    derivation: D,
}

impl<C, D> Derived<C, D>
where
    C: Cursor,
    D: Derivation<C>,
{
    pub fn new(progenitor: C, derivation: D) -> Self {
        Derived {
            progenitor,
            derivation,
        }
    }

    pub fn progenitor(&self) -> &C {
        &self.progenitor
    }
}

impl<C, D> Pull for Derived<C, D>
where
    C: Cursor,
    D: Derivation<C>,
{
    type Item = D::Item;
    type Collection = D::Collection;

    fn pull(&mut self) -> Option<Self::Item> {
        self.derivation.pull(&mut self.progenitor)
    }
}

impl<C, D> SizedPull for Derived<C, D>
where
    C: SizedCursor,
    D: SizedDerivation<C>,
{
    fn remaining_count(&self) -> usize {
        self.derivation.remaining_count(&self.progenitor)
    }
}

/// Pull function yielding the progenitor's item type
///
/// Keeps the progenitor's collection, so a character cursor still drains
/// into a `String`.
#[derive(Debug, Clone)]
pub struct Inherit<F> {
    pull_fn: F,
}

impl<C, F> Derivation<C> for Inherit<F>
where
    C: Cursor,
    F: FnMut(&mut C) -> Option<C::Item>,
{
    type Item = C::Item;
    type Collection = C::Collection;

    fn pull(&mut self, progenitor: &mut C) -> Option<C::Item> {
        (self.pull_fn)(progenitor)
    }
}

/// Pull function yielding a new item type, draining into a `Vec`
#[derive(Debug, Clone)]
pub struct Reset<F> {
    pull_fn: F,
}

impl<C, F, U> Derivation<C> for Reset<F>
where
    C: Cursor,
    F: FnMut(&mut C) -> Option<U>,
{
    type Item = U;
    type Collection = Vec<U>;

    fn pull(&mut self, progenitor: &mut C) -> Option<U> {
        (self.pull_fn)(progenitor)
    }
}

/// Derive a cursor from `progenitor` whose values come from `pull_fn`
///
/// The derived cursor yields the progenitor's item type and drains into the
/// progenitor's collection.
pub fn derive<C, F>(progenitor: C, pull_fn: F) -> Buffered<Derived<C, Inherit<F>>>
where
    C: Cursor,
    F: FnMut(&mut C) -> Option<C::Item>,
{
    Buffered::new(Derived::new(progenitor, Inherit { pull_fn }))
}

/// Derive a cursor from `progenitor` yielding whatever `pull_fn` produces
///
/// Since the item type may differ from the progenitor's, draining always
/// builds a `Vec`.
pub fn derive_into<C, F, U>(progenitor: C, pull_fn: F) -> Buffered<Derived<C, Reset<F>>>
where
    C: Cursor,
    F: FnMut(&mut C) -> Option<U>,
{
    Buffered::new(Derived::new(progenitor, Reset { pull_fn }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::{from_sequence, from_string};
    use crate::take::TakeExt;

    #[test]
    fn test_derive_overrides_pull_only() {
        // Yield every other value
        let mut cursor = derive(from_sequence([1, 2, 3, 4, 5]), |up| {
            let value = up.pull();
            up.pull();
            value
        });

        assert_eq!(cursor.peek(), Some(&1));
        assert_eq!(cursor.pull(), Some(1));
        assert_eq!(cursor.by_ref().take(1).drain_to_collection(), vec![3]);
        assert_eq!(cursor.drain_to_collection(), vec![5]);
    }

    #[test]
    fn test_derive_keeps_string_drain() {
        let cursor = derive(from_string("hello"), |up| up.pull().map(|c| c.to_ascii_uppercase()));
        let drained: String = cursor.drain_to_collection();
        assert_eq!(drained, "HELLO");
    }

    #[test]
    fn test_derive_into_pairs() {
        let cursor = derive_into(from_sequence([1, 2, 3, 4, 5]), |up| {
            let first = up.pull()?;
            Some((first, up.pull()))
        });

        assert_eq!(
            cursor.drain_to_collection(),
            vec![(1, Some(2)), (3, Some(4)), (5, None)]
        );
    }

    #[test]
    fn test_derive_into_resets_string_drain() {
        let cursor = derive_into(from_string("ab"), |up| up.pull().map(u32::from));
        assert_eq!(cursor.drain_to_collection(), vec![97, 98]);
    }

    #[test]
    fn test_progenitor_is_reachable() {
        let mut cursor = derive(from_sequence([1, 2, 3]), |up| up.pull());
        cursor.pull();
        assert_eq!(cursor.inner().progenitor().remaining_count(), 2);
    }
}
