pub mod from_fn;
pub mod sequence;
pub mod text;

pub use from_fn::{FromFn, from_fn};
pub use sequence::{Sequence, from_sequence};
pub use text::{Text, from_string, from_utf8};

use crate::buffered::Buffered;

/// Conversion into a cursor
///
/// Strings become character cursors; slices, arrays and `Vec`s become
/// sized cursors over their elements.
pub trait IntoCursor {
    type Producer: crate::pull::Pull;

    fn into_cursor(self) -> Buffered<Self::Producer>;
}

impl<'a> IntoCursor for &'a str {
    type Producer = Text<'a>;

    fn into_cursor(self) -> Buffered<Text<'a>> {
        from_string(self)
    }
}

impl<'a> IntoCursor for &'a String {
    type Producer = Text<'a>;

    fn into_cursor(self) -> Buffered<Text<'a>> {
        from_string(self)
    }
}

impl<'a, T: Clone> IntoCursor for &'a [T] {
    type Producer = Sequence<&'a [T], T>;

    fn into_cursor(self) -> Buffered<Self::Producer> {
        from_sequence(self)
    }
}

impl<T: Clone> IntoCursor for Vec<T> {
    type Producer = Sequence<Vec<T>, T>;

    fn into_cursor(self) -> Buffered<Self::Producer> {
        from_sequence(self)
    }
}

impl<T: Clone, const N: usize> IntoCursor for [T; N] {
    type Producer = Sequence<[T; N], T>;

    fn into_cursor(self) -> Buffered<Self::Producer> {
        from_sequence(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::{Cursor, SizedCursor};

    #[test]
    fn test_str_into_cursor() {
        let cursor = "abc".into_cursor();
        assert_eq!(cursor.remaining_count(), 3);
        assert_eq!(cursor.drain_to_collection(), "abc");
    }

    #[test]
    fn test_owned_string_by_reference() {
        let text = String::from("xy");
        let mut cursor = (&text).into_cursor();
        assert_eq!(cursor.pull(), Some('x'));
    }

    #[test]
    fn test_slice_vec_and_array() {
        let data = [1, 2];
        assert_eq!(data[..].into_cursor().drain_to_collection(), vec![1, 2]);
        assert_eq!(vec![3, 4].into_cursor().drain_to_collection(), vec![3, 4]);
        assert_eq!([5, 6].into_cursor().drain_to_collection(), vec![5, 6]);
    }
}
