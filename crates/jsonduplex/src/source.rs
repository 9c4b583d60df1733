//! Character sources feeding the lexer.

use crate::error::SourceError;

/// A blocking source of Unicode scalar values.
///
/// The lexer owns the cursor of whatever source it is given; `next_char`
/// returns `Ok(None)` once the source is exhausted and keeps returning
/// `Ok(None)` thereafter. Reads may block until a character is available.
pub trait CharSource {
    /// Pulls the next character.
    fn next_char(&mut self) -> Result<Option<char>, SourceError>;
}

/// Reads characters from an in-memory string slice.
#[derive(Debug)]
pub struct StrSource<'a> {
    chars: core::str::Chars<'a>,
}

impl<'a> StrSource<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            chars: text.chars(),
        }
    }
}

impl<'a> From<&'a str> for StrSource<'a> {
    fn from(text: &'a str) -> Self {
        Self::new(text)
    }
}

impl CharSource for StrSource<'_> {
    fn next_char(&mut self) -> Result<Option<char>, SourceError> {
        Ok(self.chars.next())
    }
}

/// Decodes UTF-8 text from a blocking byte reader.
///
/// Bytes are buffered in chunks and decoded incrementally, so a multi-byte
/// sequence split across two reads decodes correctly. Malformed input fails
/// with [`SourceError::InvalidUtf8`]. Input in any other charset can be
/// handled by wrapping an external decoder in a [`CharSource`] instead.
#[cfg(feature = "std")]
pub struct Utf8Source<R> {
    inner: R,
    buf: alloc::vec::Vec<u8>,
    start: usize,
    end: usize,
    eof: bool,
}

#[cfg(feature = "std")]
impl<R: std::io::Read> Utf8Source<R> {
    const CHUNK: usize = 8 * 1024;

    pub fn new(inner: R) -> Self {
        Self {
            inner,
            buf: alloc::vec![0; Self::CHUNK],
            start: 0,
            end: 0,
            eof: false,
        }
    }

    /// Returns the wrapped reader.
    pub fn into_inner(self) -> R {
        self.inner
    }

    fn fill(&mut self) -> Result<(), SourceError> {
        // Move any partial sequence to the front before refilling.
        if self.start > 0 {
            self.buf.copy_within(self.start..self.end, 0);
            self.end -= self.start;
            self.start = 0;
        }
        let n = self.inner.read(&mut self.buf[self.end..])?;
        if n == 0 {
            self.eof = true;
        }
        self.end += n;
        Ok(())
    }
}

#[cfg(feature = "std")]
impl<R: std::io::Read> CharSource for Utf8Source<R> {
    fn next_char(&mut self) -> Result<Option<char>, SourceError> {
        loop {
            match bstr::decode_utf8(&self.buf[self.start..self.end]) {
                (Some(ch), size) => {
                    self.start += size;
                    return Ok(Some(ch));
                }
                (None, 0) => {
                    if self.eof {
                        return Ok(None);
                    }
                    self.fill()?;
                }
                (None, size) => {
                    // A truncated sequence at the end of the buffer may
                    // complete on the next read; anything else is invalid.
                    if self.start + size == self.end && !self.eof {
                        self.fill()?;
                    } else {
                        return Err(SourceError::InvalidUtf8);
                    }
                }
            }
        }
    }
}
