//! Error types shared by the lexer and the two grammar engines.

use alloc::string::String;
use core::fmt;

use thiserror::Error;

/// Which token the lexer was inside when the input ran out.
///
/// Selects the exact wording of the end-of-stream diagnostic; `Stream` is
/// used by the grammar engines when the input ends between tokens while a
/// container is still open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EofContext {
    Stream,
    String,
    Number,
    True,
    False,
    Null,
}

impl fmt::Display for EofContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Stream => "stream",
            Self::String => "string",
            Self::Number => "number",
            Self::True => "true token",
            Self::False => "false token",
            Self::Null => "null token",
        })
    }
}

/// The set of tokens that would have been legal at the position where a
/// grammar error was raised.
///
/// Each variant renders as the space-joined token set in canonical order,
/// which is the payload of the `"Expecting …"` message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    /// Start of the top-level value.
    Document,
    /// Any value token.
    Value,
    /// Any value token, or the end of the enclosing array.
    ValueOrArrayEnd,
    /// An object key, or the end of the enclosing object.
    KeyOrObjectEnd,
    /// An object key.
    Key,
    /// The colon between a key and its value.
    Colon,
    /// A comma, or the end of the enclosing object.
    CommaOrObjectEnd,
    /// A comma, or the end of the enclosing array.
    CommaOrArrayEnd,
    /// End of input after the top-level value.
    Eof,
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Document => "{ [",
            Self::Value => "{ [ STRING NUMBER true false null",
            Self::ValueOrArrayEnd => "] { [ STRING NUMBER true false null",
            Self::KeyOrObjectEnd => "} STRING",
            Self::Key => "STRING",
            Self::Colon => ":",
            Self::CommaOrObjectEnd => ", }",
            Self::CommaOrArrayEnd => ", ]",
            Self::Eof => "EOF",
        })
    }
}

/// Errors raised while reading or writing a JSON stream.
///
/// Grammar and lexical errors leave the engine in a well-defined state; the
/// same state machine keeps answering afterwards. `Source`/`Sink` wrap
/// failures of the underlying character transport.
#[derive(Debug, Error)]
pub enum JsonError {
    /// A token arrived (or a write was attempted) that is illegal in the
    /// current grammar state.
    #[error("Expecting {0}")]
    Unexpected(Expected),
    /// The input ended inside a token, or inside an open container.
    #[error("Unexpected EOF while reading JSON {0}")]
    UnexpectedEof(EofContext),
    #[error("JSON keys have to be unique. The key '{0}' already exists")]
    DuplicateKey(String),
    /// The single top-level value is complete; nothing is left to read.
    #[error("No more JSON tokens available")]
    NoMoreTokens,
    #[error("JSON reader have been closed")]
    ReaderClosed,
    /// The writer was closed.
    #[error("JSON processing finished")]
    ProcessingFinished,
    #[error("invalid character '{ch}' at {line}:{column}")]
    InvalidCharacter { ch: char, line: usize, column: usize },
    #[error("invalid escape sequence '\\{ch}' at {line}:{column}")]
    InvalidEscape { ch: char, line: usize, column: usize },
    #[error("invalid unicode escape sequence at character: '{0}'")]
    InvalidUnicodeEscapeChar(char),
    #[error("invalid unicode escape sequence \\u{0:04x}")]
    InvalidUnicodeEscape(u32),
    #[error("unpaired surrogate \\u{0:04x} in string escape")]
    UnpairedSurrogate(u32),
    /// NaN and the infinities have no JSON representation.
    #[error("non-finite numbers have no JSON representation")]
    NonFiniteNumber,
    /// Raw number text that does not match the JSON number grammar.
    #[error("invalid JSON number literal '{0}'")]
    InvalidNumberLiteral(String),
    #[error(transparent)]
    Source(#[from] SourceError),
    #[error(transparent)]
    Sink(#[from] SinkError),
}

/// Failure of a [`CharSource`](crate::CharSource).
#[derive(Debug, Error)]
pub enum SourceError {
    /// The byte stream is not valid UTF-8.
    #[error("invalid UTF-8 in JSON input")]
    InvalidUtf8,
    /// The underlying byte stream failed.
    #[cfg(feature = "std")]
    #[error("failed to read JSON input: {0}")]
    Io(#[from] std::io::Error),
}

/// Failure of a [`CharSink`](crate::CharSink).
#[derive(Debug, Error)]
pub enum SinkError {
    /// The underlying formatter rejected the write.
    #[error("failed to write JSON output")]
    Fmt(#[from] fmt::Error),
    /// The underlying byte stream failed.
    #[cfg(feature = "std")]
    #[error("failed to write JSON output: {0}")]
    Io(#[from] std::io::Error),
}
