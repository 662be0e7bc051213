/// Generic cursor trait for lazy pull-based sequences
///
/// A cursor hands out values one at a time on demand. Every combinator in this
/// crate consumes a `Cursor` and produces a new one, so any cursor gains the
/// full surface (`map`, `filter`, `take`, `skip`, `chunks`, ...) through the
/// extension traits without implementing them itself.
///
/// The contract every implementation upholds:
/// - once `pull` returns `None`, every later call returns `None`
/// - `peek` returns the value the next `pull` will return
pub trait Cursor: Sized {
    /// The type of values this cursor yields
    type Item;

    /// The container `drain_to_collection` builds
    type Collection: Default + Extend<Self::Item>;

    /// Take the next value, or `None` if the cursor is exhausted
    fn pull(&mut self) -> Option<Self::Item>;

    /// Look at the next value without consuming it
    ///
    /// Note that peeking does advance the underlying producer; the value is
    /// held back until the next `pull`.
    fn peek(&mut self) -> Option<&Self::Item>;

    /// Whether this cursor has already reported exhaustion
    fn is_exhausted(&self) -> bool;

    /// Consume the cursor and gather every remaining value in order
    ///
    /// Builds `Vec<Item>` for most cursors. Cursors over characters build a
    /// `String` instead.
    fn drain_to_collection(self) -> Self::Collection {
        self.collect_into()
    }

    /// Consume the cursor and gather every remaining value into `K`
    fn collect_into<K>(mut self) -> K
    where
        K: Default + Extend<Self::Item>,
    {
        let mut collection = K::default();
        while let Some(value) = self.pull() {
            collection.extend(Some(value));
        }
        collection
    }

    /// Consume `n + 1` values and return the last one
    ///
    /// `nth(0)` is the same as `pull()`. Returns `None` if the cursor runs out
    /// first.
    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        for _ in 0..n {
            self.pull()?;
        }
        self.pull()
    }

    /// Borrow the cursor so an adapter can use it without taking ownership
    fn by_ref(&mut self) -> &mut Self {
        self
    }
}

/// A cursor that knows exactly how many values it has left
pub trait SizedCursor: Cursor {
    /// Number of values still to be pulled, including a peeked one
    fn remaining_count(&self) -> usize;

    /// Check whether every value has been pulled
    fn is_empty(&self) -> bool {
        self.remaining_count() == 0
    }
}

impl<C: Cursor> Cursor for &mut C {
    type Item = C::Item;
    type Collection = C::Collection;

    fn pull(&mut self) -> Option<Self::Item> {
        (**self).pull()
    }

    fn peek(&mut self) -> Option<&Self::Item> {
        (**self).peek()
    }

    fn is_exhausted(&self) -> bool {
        (**self).is_exhausted()
    }
}

impl<C: SizedCursor> SizedCursor for &mut C {
    fn remaining_count(&self) -> usize {
        (**self).remaining_count()
    }
}
