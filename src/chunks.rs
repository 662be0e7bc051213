use crate::buffered::Buffered;
use crate::cursor::{Cursor, SizedCursor};
use crate::derive::{Derivation, Derived, SizedDerivation};
use crate::error::{MAX_CHUNK_SIZE, PullcombError, Result};
use crate::take::TakeExt;

/// Derivation grouping consecutive values into `Vec`s of a fixed size
///
/// The last group is shorter when the progenitor runs out mid-group.
/// Draining always builds `Vec<Vec<_>>`, even over a character cursor.
#[derive(Debug, Clone, Copy)]
pub struct Chunks {
    size: usize,
}

impl Chunks {
    pub fn new(size: usize) -> Result<Self> {
        if !(1..=MAX_CHUNK_SIZE).contains(&size) {
            log::debug!("rejecting chunk size {}", size);
            return Err(PullcombError::InvalidChunkSize { size });
        }
        Ok(Chunks { size })
    }

    pub fn size(&self) -> usize {
        self.size
    }
}

impl<C: Cursor> Derivation<C> for Chunks {
    type Item = Vec<C::Item>;
    type Collection = Vec<Vec<C::Item>>;

    fn pull(&mut self, progenitor: &mut C) -> Option<Vec<C::Item>> {
        let chunk: Vec<C::Item> = progenitor.by_ref().take(self.size).collect_into();
        if chunk.is_empty() { None } else { Some(chunk) }
    }
}

impl<C: SizedCursor> SizedDerivation<C> for Chunks {
    fn remaining_count(&self, progenitor: &C) -> usize {
        progenitor.remaining_count().div_ceil(self.size)
    }
}

/// Extension trait to add chunks method to all cursors
pub trait ChunksExt: Cursor {
    /// Group values `size` at a time
    ///
    /// Fails without pulling anything unless `1 <= size <= 0xFFFF_FFFF`.
    fn chunks(self, size: usize) -> Result<Buffered<Derived<Self, Chunks>>> {
        let chunks = Chunks::new(size)?;
        Ok(Buffered::new(Derived::new(self, chunks)))
    }
}

impl<C: Cursor> ChunksExt for C {}
