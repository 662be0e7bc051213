//! # PullComb - Lazy Cursor Combinator Library
//!
//! PullComb provides lazy, pull-based cursors: producers that hand out one
//! value at a time on demand, and combinators that build new cursors from
//! existing ones without materializing anything in between.
//!
//! - **Implement one method**: a producer only implements [`Pull`]; wrapping
//!   it in [`Buffered`] gives it the whole [`Cursor`] surface
//! - **Sticky exhaustion**: once a cursor returns `None` it keeps doing so
//! - **One-slot lookahead**: `peek` at the next value without consuming it
//! - **Sized cursors**: sources and most adapters know their remaining count
//! - **Text**: character cursors drain into a `String`
//!
//! ```rust
//! use pullcomb::{ChunksExt, Cursor, FilterExt, IntoCursor, MapExt, TakeExt};
//!
//! let vowels = "hello".into_cursor().filter(|c| "aeiou".contains(*c));
//! assert_eq!(vowels.drain_to_collection(), "eo");
//!
//! let groups = [1, 2, 3, 4, 5].into_cursor().map(|x| x * 10).take(4).chunks(3)?;
//! assert_eq!(groups.drain_to_collection(), vec![vec![10, 20, 30], vec![40]]);
//! # Ok::<(), pullcomb::PullcombError>(())
//! ```

pub mod buffered;
pub mod chunks;
pub mod cursor;
pub mod derive;
pub mod error;
pub mod filter;
pub mod map;
pub mod pull;
pub mod skip;
pub mod skip_while;
pub mod sources;
pub mod take;
pub mod take_while;

pub use buffered::{Buffered, IntoIter};
pub use chunks::{Chunks, ChunksExt};
pub use cursor::{Cursor, SizedCursor};
pub use derive::{Derivation, Derived, SizedDerivation, derive, derive_into};
pub use error::{MAX_CHUNK_SIZE, PullcombError, Result};
pub use filter::{Filter, FilterExt};
pub use map::{Map, MapExt};
pub use pull::{Pull, SizedPull};
pub use skip::{Skip, SkipExt};
pub use skip_while::{SkipWhile, SkipWhileExt};
pub use sources::{IntoCursor, from_fn, from_sequence, from_string, from_utf8};
pub use take::{Take, TakeExt};
pub use take_while::{TakeWhile, TakeWhileExt};
