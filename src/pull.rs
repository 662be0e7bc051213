/// Raw producer of values
///
/// A `Pull` implementation carries only the logic of producing the next value.
/// It is never handed to callers directly: wrapping it in a
/// [`Buffered`](crate::Buffered) adds exhaustion stickiness and lookahead, and
/// through the [`Cursor`](crate::Cursor) trait the whole combinator surface.
pub trait Pull {
    /// The type of values this producer yields
    type Item;

    /// What draining the resulting cursor builds
    ///
    /// Producers yielding the same items as their upstream forward the
    /// upstream's collection; producers changing the item type pick their own.
    type Collection: Default + Extend<Self::Item>;

    /// Produce the next value, or `None` once there is nothing left
    ///
    /// Implementations may return values again after a `None`; the wrapping
    /// cursor never calls them past the first `None`.
    fn pull(&mut self) -> Option<Self::Item>;
}

/// Raw producer that knows how many values it has left
pub trait SizedPull: Pull {
    /// Exact number of values `pull` will still produce
    fn remaining_count(&self) -> usize;
}
