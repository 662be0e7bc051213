use std::str::Chars;

use crate::buffered::Buffered;
use crate::error::{PullcombError, Result};
use crate::pull::{Pull, SizedPull};

/// Producer over the characters of a string
///
/// Draining a text cursor concatenates into a `String` rather than building
/// a `Vec<char>`, and so does draining any item-preserving adapter on top of
/// it (`filter`, `take`, `skip`, ...).
#[derive(Debug, Clone)]
pub struct Text<'a> {
    chars: Chars<'a>,
    remaining: usize,
}

impl<'a> Text<'a> {
    pub fn new(text: &'a str) -> Self {
        Text {
            chars: text.chars(),
            remaining: text.chars().count(),
        }
    }

    /// The part of the string not yet pulled
    pub fn as_str(&self) -> &'a str {
        self.chars.as_str()
    }
}

impl Pull for Text<'_> {
    type Item = char;
    type Collection = String;

    fn pull(&mut self) -> Option<char> {
        let ch = self.chars.next()?;
        self.remaining -= 1;
        Some(ch)
    }
}

impl SizedPull for Text<'_> {
    fn remaining_count(&self) -> usize {
        self.remaining
    }
}

/// Create a sized cursor over the characters of `text`
pub fn from_string(text: &str) -> Buffered<Text<'_>> {
    Buffered::new(Text::new(text))
}

/// Create a character cursor from raw bytes
///
/// Fails before anything is pulled if `bytes` is not valid UTF-8.
pub fn from_utf8(bytes: &[u8]) -> Result<Buffered<Text<'_>>> {
    let text = std::str::from_utf8(bytes).map_err(|source| {
        log::debug!("rejecting non UTF-8 input of {} bytes", bytes.len());
        PullcombError::not_a_string(bytes, source)
    })?;
    Ok(from_string(text))
}
