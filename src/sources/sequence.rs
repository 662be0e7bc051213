use std::marker::PhantomData;

use crate::buffered::Buffered;
use crate::pull::{Pull, SizedPull};

/// Producer over an indexable, length-bearing sequence
///
/// Works with anything that views as a slice: borrowed slices, arrays,
/// `Vec`s, boxed slices. Values are cloned out in order.
#[derive(Debug, Clone)]
pub struct Sequence<S, T> {
    data: S,
    offset: usize,
    _element: PhantomData<fn() -> T>,
}

impl<S, T> Sequence<S, T>
where
    S: AsRef<[T]>,
    T: Clone,
{
    pub fn new(data: S) -> Self {
        Sequence {
            data,
            offset: 0,
            _element: PhantomData,
        }
    }

    /// Index of the next value in the underlying sequence
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// The whole underlying sequence, including values already pulled
    pub fn source(&self) -> &[T] {
        self.data.as_ref()
    }
}

impl<S, T> Pull for Sequence<S, T>
where
    S: AsRef<[T]>,
    T: Clone,
{
    type Item = T;
    type Collection = Vec<T>;

    fn pull(&mut self) -> Option<T> {
        let value = self.data.as_ref().get(self.offset)?.clone();
        self.offset += 1;
        Some(value)
    }
}

impl<S, T> SizedPull for Sequence<S, T>
where
    S: AsRef<[T]>,
    T: Clone,
{
    fn remaining_count(&self) -> usize {
        self.data.as_ref().len() - self.offset
    }
}

/// Create a sized cursor over the values of `data`
pub fn from_sequence<S, T>(data: S) -> Buffered<Sequence<S, T>>
where
    S: AsRef<[T]>,
    T: Clone,
{
    Buffered::new(Sequence::new(data))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::{Cursor, SizedCursor};

    #[test]
    fn test_borrowed_slice() {
        let data = [1u32, 2, 3];
        let mut cursor = from_sequence(&data[..]);

        assert_eq!(cursor.remaining_count(), 3);
        assert_eq!(cursor.pull(), Some(1));
        assert_eq!(cursor.inner().offset(), 1);
        assert_eq!(cursor.inner().source(), &[1, 2, 3]);
        assert_eq!(cursor.remaining_count(), 2);
    }

    #[test]
    fn test_owned_vec() {
        let words = vec!["a".to_string(), "b".to_string()];
        let cursor = from_sequence(words);
        assert_eq!(cursor.drain_to_collection(), vec!["a", "b"]);
    }

    #[test]
    fn test_empty_sequence() {
        let data: [u8; 0] = [];
        let mut cursor = from_sequence(data);

        assert!(cursor.is_empty());
        assert_eq!(cursor.peek(), None);
        assert_eq!(cursor.pull(), None);
        assert_eq!(cursor.inner().offset(), 0);
    }

    #[test]
    fn test_offset_stops_at_length() {
        let mut cursor = from_sequence([5, 6]);
        while cursor.pull().is_some() {}

        assert_eq!(cursor.pull(), None);
        assert_eq!(cursor.inner().offset(), 2);
        assert_eq!(cursor.remaining_count(), 0);
    }
}
