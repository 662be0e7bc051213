use std::fmt;
use std::iter::FusedIterator;

use crate::cursor::{Cursor, SizedCursor};
use crate::pull::{Pull, SizedPull};

/// The cursor every raw producer is wrapped in
///
/// `Buffered` owns a [`Pull`] and is the only thing callers ever pull from.
/// It caches exhaustion, so a producer that reported `None` is never called
/// again, and holds the single lookahead slot used by `peek`.
#[derive(Debug, Clone)]
pub struct Buffered<P: Pull> {
    inner: P,
    exhausted: bool,
    lookahead: Option<P::Item>,
}

impl<P: Pull> Buffered<P> {
    pub fn new(inner: P) -> Self {
        Buffered {
            inner,
            exhausted: false,
            lookahead: None,
        }
    }

    /// Access the wrapped producer
    pub fn inner(&self) -> &P {
        &self.inner
    }

    fn pull_inner(&mut self) -> Option<P::Item> {
        if self.exhausted {
            return None;
        }

        let value = self.inner.pull();
        if value.is_none() {
            log::trace!("cursor exhausted");
            self.exhausted = true;
        }
        value
    }
}

impl<P: Pull> Cursor for Buffered<P> {
    type Item = P::Item;
    type Collection = P::Collection;

    fn pull(&mut self) -> Option<Self::Item> {
        match self.lookahead.take() {
            Some(value) => Some(value),
            None => self.pull_inner(),
        }
    }

    fn peek(&mut self) -> Option<&Self::Item> {
        if self.lookahead.is_none() {
            self.lookahead = self.pull_inner();
        }
        self.lookahead.as_ref()
    }

    fn is_exhausted(&self) -> bool {
        self.exhausted && self.lookahead.is_none()
    }
}

impl<P: SizedPull> SizedCursor for Buffered<P> {
    fn remaining_count(&self) -> usize {
        let pending = usize::from(self.lookahead.is_some());
        if self.exhausted {
            pending
        } else {
            self.inner.remaining_count() + pending
        }
    }
}

impl<P: Pull> IntoIterator for Buffered<P> {
    type Item = P::Item;
    type IntoIter = IntoIter<P>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { cursor: self }
    }
}

/// Standard iterator over the values of a [`Buffered`] cursor
pub struct IntoIter<P: Pull> {
    cursor: Buffered<P>,
}

impl<P: Pull> fmt::Debug for IntoIter<P>
where
    Buffered<P>: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntoIter")
            .field("cursor", &self.cursor)
            .finish()
    }
}

impl<P: Pull> Clone for IntoIter<P>
where
    Buffered<P>: Clone,
{
    fn clone(&self) -> Self {
        IntoIter {
            cursor: self.cursor.clone(),
        }
    }
}

impl<P: Pull> IntoIter<P> {
    /// Turn the iterator back into the cursor it came from
    pub fn into_cursor(self) -> Buffered<P> {
        self.cursor
    }
}

impl<P: Pull> Iterator for IntoIter<P> {
    type Item = P::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.cursor.pull()
    }
}

impl<P: Pull> FusedIterator for IntoIter<P> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::from_sequence;

    /// Producer that yields again after reporting `None`
    struct Flicker {
        calls: usize,
    }

    impl Pull for Flicker {
        type Item = usize;
        type Collection = Vec<usize>;

        fn pull(&mut self) -> Option<usize> {
            self.calls += 1;
            if self.calls % 2 == 0 {
                None
            } else {
                Some(self.calls)
            }
        }
    }

    #[test]
    fn test_exhaustion_is_sticky() {
        let mut cursor = Buffered::new(Flicker { calls: 0 });

        assert_eq!(cursor.pull(), Some(1));
        assert_eq!(cursor.pull(), None);
        assert!(cursor.is_exhausted());

        // The producer would yield 3 next, but is never asked again
        assert_eq!(cursor.pull(), None);
        assert_eq!(cursor.peek(), None);
        assert_eq!(cursor.inner().calls, 2);
    }

    #[test]
    fn test_peek_twice_then_pull() {
        let mut cursor = from_sequence([7, 8, 9]);

        assert_eq!(cursor.peek(), Some(&7));
        assert_eq!(cursor.peek(), Some(&7));
        assert_eq!(cursor.pull(), Some(7));
        assert_eq!(cursor.pull(), Some(8));
    }

    #[test]
    fn test_peek_counts_towards_remaining() {
        let mut cursor = from_sequence([1, 2, 3]);

        assert_eq!(cursor.remaining_count(), 3);
        cursor.peek();
        assert_eq!(cursor.remaining_count(), 3);
        cursor.pull();
        assert_eq!(cursor.remaining_count(), 2);
    }

    #[test]
    fn test_peek_last_value_is_not_exhausted() {
        let mut cursor = from_sequence(["only"]);

        assert_eq!(cursor.peek(), Some(&"only"));
        assert!(!cursor.is_exhausted());
        assert_eq!(cursor.pull(), Some("only"));

        assert_eq!(cursor.peek(), None);
        assert!(cursor.is_exhausted());
        assert!(cursor.is_empty());
    }

    #[test]
    fn test_drain_then_stays_exhausted() {
        let mut cursor = from_sequence(vec![1, 2, 3]);
        let drained: Vec<i32> = cursor.by_ref().drain_to_collection();

        assert_eq!(drained, vec![1, 2, 3]);
        assert!(cursor.is_empty());
        for _ in 0..3 {
            assert_eq!(cursor.pull(), None);
        }
    }

    #[test]
    fn test_into_iter() {
        let cursor = from_sequence([1, 2, 3]);
        let mut iter = cursor.into_iter();

        assert_eq!(iter.next(), Some(1));

        let doubled: Vec<i32> = iter.map(|x| x * 2).collect();
        assert_eq!(doubled, vec![4, 6]);
    }

    #[test]
    fn test_back_into_cursor() {
        let mut iter = from_sequence([1, 2, 3]).into_iter();
        iter.next();

        let cursor = iter.into_cursor();
        assert_eq!(cursor.remaining_count(), 2);
    }

    #[test]
    fn test_into_iter_clone_is_independent() {
        let mut iter = from_sequence([1, 2, 3]).into_iter();
        iter.next();

        let copy = iter.clone();
        assert_eq!(iter.next(), Some(2));
        assert_eq!(copy.collect::<Vec<i32>>(), vec![2, 3]);
        assert!(format!("{:?}", iter).starts_with("IntoIter"));
    }

    #[test]
    fn test_for_loop() {
        let mut total = 0;
        for value in from_sequence([1, 2, 3, 4]) {
            total += value;
        }
        assert_eq!(total, 10);
    }
}
