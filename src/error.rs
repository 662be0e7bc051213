use std::str::Utf8Error;

use thiserror::Error;

/// Largest accepted chunk size, the largest value representable by a `u32`
pub const MAX_CHUNK_SIZE: usize = u32::MAX as usize;

pub type Result<T> = std::result::Result<T, PullcombError>;

/// Errors raised when a cursor is constructed from invalid input
///
/// All of these are reported by the constructor itself. No cursor is
/// returned and nothing is pulled from any upstream.
#[derive(Error, Debug)]
pub enum PullcombError {
    #[error("chunk size {size} does not satisfy [0 < n < 4,294,967,296]")]
    InvalidChunkSize { size: usize },
    #[error("'{input}' is not a string")]
    NotAString {
        input: String,
        #[source]
        source: Utf8Error,
    },
}

impl PullcombError {
    pub(crate) fn not_a_string(bytes: &[u8], source: Utf8Error) -> Self {
        PullcombError::NotAString {
            input: String::from_utf8_lossy(bytes).into_owned(),
            source,
        }
    }
}
