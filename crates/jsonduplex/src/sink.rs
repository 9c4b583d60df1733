//! Character sinks receiving writer output.

use core::fmt;

use crate::error::SinkError;

/// A blocking sink for JSON text.
///
/// Writes may buffer; `flush` pushes anything buffered through to the final
/// destination. The writer never closes a sink, it only stops using it.
pub trait CharSink {
    /// Appends `text` to the output.
    fn write_text(&mut self, text: &str) -> Result<(), SinkError>;

    /// Pushes buffered output through to the destination.
    fn flush(&mut self) -> Result<(), SinkError> {
        Ok(())
    }
}

impl CharSink for alloc::string::String {
    fn write_text(&mut self, text: &str) -> Result<(), SinkError> {
        self.push_str(text);
        Ok(())
    }
}

/// Adapts any [`fmt::Write`] into a [`CharSink`].
#[derive(Debug)]
pub struct FmtSink<W> {
    inner: W,
}

impl<W: fmt::Write> FmtSink<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    /// Returns the wrapped writer.
    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: fmt::Write> CharSink for FmtSink<W> {
    fn write_text(&mut self, text: &str) -> Result<(), SinkError> {
        self.inner.write_str(text)?;
        Ok(())
    }
}

/// Encodes JSON text as UTF-8 into a blocking byte writer.
#[cfg(feature = "std")]
pub struct Utf8Sink<W> {
    inner: W,
}

#[cfg(feature = "std")]
impl<W: std::io::Write> Utf8Sink<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    /// Returns the wrapped writer.
    pub fn into_inner(self) -> W {
        self.inner
    }
}

#[cfg(feature = "std")]
impl<W: std::io::Write> CharSink for Utf8Sink<W> {
    fn write_text(&mut self, text: &str) -> Result<(), SinkError> {
        self.inner.write_all(text.as_bytes())?;
        Ok(())
    }

    fn flush(&mut self) -> Result<(), SinkError> {
        self.inner.flush()?;
        Ok(())
    }
}
