//! The pull-based JSON reader.

use alloc::string::String;
use core::num::{ParseFloatError, ParseIntError};
use core::str::FromStr;

use bigdecimal::BigDecimal;
use num_bigint::BigInt;

use crate::{
    error::{EofContext, JsonError},
    grammar::Grammar,
    lexer::Lexer,
    source::{CharSource, StrSource},
    token::{Token, TokenKind},
};

/// Classification of the reader's current position in the event stream.
///
/// Object keys surface as ordinary [`Event::String`] events; colons and
/// commas never surface at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    ObjectStart,
    ObjectEnd,
    ArrayStart,
    ArrayEnd,
    String,
    Number,
    Boolean,
    Null,
}

/// A pull-based reader over a single JSON document.
///
/// [`next`](JsonReader::next) advances to the next event; the classifier and
/// getter methods inspect the current one. Exactly one top-level value is
/// accepted — a scalar, or one balanced object or array — after which the
/// stream is finished and only [`close`](JsonReader::close) remains useful.
///
/// ```
/// use jsonduplex::{Event, JsonReader};
///
/// let mut reader = JsonReader::from_text(r#"[1, "two"]"#);
/// assert_eq!(reader.next()?, Event::ArrayStart);
/// assert_eq!(reader.next()?, Event::Number);
/// assert_eq!(reader.get_int(), Ok(1));
/// assert_eq!(reader.next()?, Event::String);
/// assert_eq!(reader.get_string(), "two");
/// assert_eq!(reader.next()?, Event::ArrayEnd);
/// assert!(!reader.has_next());
/// # Ok::<(), jsonduplex::JsonError>(())
/// ```
pub struct JsonReader<S> {
    lexer: Lexer<S>,
    grammar: Grammar,
    current: Option<Event>,
    /// Decoded text of the current string event, or the exact source text of
    /// the current number event.
    text: String,
    boolean: bool,
    closed: bool,
}

impl<'a> JsonReader<StrSource<'a>> {
    /// Reads from an in-memory string.
    #[must_use]
    pub fn from_text(text: &'a str) -> Self {
        Self::new(StrSource::new(text))
    }
}

#[cfg(feature = "std")]
impl<R: std::io::Read> JsonReader<crate::source::Utf8Source<R>> {
    /// Reads UTF-8 text from a blocking byte reader.
    pub fn from_reader(reader: R) -> Self {
        Self::new(crate::source::Utf8Source::new(reader))
    }
}

impl<S: CharSource> JsonReader<S> {
    pub fn new(source: S) -> Self {
        Self {
            lexer: Lexer::new(source),
            grammar: Grammar::new(),
            current: None,
            text: String::new(),
            boolean: false,
            closed: false,
        }
    }

    /// True while the stream can still produce events.
    #[must_use]
    pub fn has_next(&self) -> bool {
        !self.closed && !self.grammar.is_finished()
    }

    /// Advances to the next event.
    ///
    /// Colon and comma tokens are validated and consumed here without
    /// surfacing. Fails with the grammar's `"Expecting …"` diagnostic on an
    /// out-of-place token, with `"No more JSON tokens available"` once the
    /// top-level value is complete, and with `"JSON reader have been
    /// closed"` after [`close`](JsonReader::close).
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Result<Event, JsonError> {
        if self.closed {
            return Err(JsonError::ReaderClosed);
        }
        if self.grammar.is_finished() {
            return Err(JsonError::NoMoreTokens);
        }
        loop {
            let event = match self.lexer.next_token()? {
                Token::Eof => return Err(JsonError::UnexpectedEof(EofContext::Stream)),
                Token::Colon => {
                    self.grammar.advance(TokenKind::Colon, None)?;
                    continue;
                }
                Token::Comma => {
                    self.grammar.advance(TokenKind::Comma, None)?;
                    continue;
                }
                Token::ObjectStart => {
                    self.grammar.advance(TokenKind::ObjectStart, None)?;
                    Event::ObjectStart
                }
                Token::ObjectEnd => {
                    self.grammar.advance(TokenKind::ObjectEnd, None)?;
                    Event::ObjectEnd
                }
                Token::ArrayStart => {
                    self.grammar.advance(TokenKind::ArrayStart, None)?;
                    Event::ArrayStart
                }
                Token::ArrayEnd => {
                    self.grammar.advance(TokenKind::ArrayEnd, None)?;
                    Event::ArrayEnd
                }
                Token::String(text) => {
                    self.grammar.advance(TokenKind::String, Some(&text))?;
                    self.text = text;
                    Event::String
                }
                Token::Number(text) => {
                    self.grammar.advance(TokenKind::Number, None)?;
                    self.text = text;
                    Event::Number
                }
                Token::True => {
                    self.grammar.advance(TokenKind::True, None)?;
                    self.boolean = true;
                    Event::Boolean
                }
                Token::False => {
                    self.grammar.advance(TokenKind::False, None)?;
                    self.boolean = false;
                    Event::Boolean
                }
                Token::Null => {
                    self.grammar.advance(TokenKind::Null, None)?;
                    Event::Null
                }
            };
            self.current = Some(event);
            return Ok(event);
        }
    }

    /// The current event, if [`next`](JsonReader::next) produced one.
    #[must_use]
    pub fn event(&self) -> Option<Event> {
        self.current
    }

    #[must_use]
    pub fn is_object_start(&self) -> bool {
        self.current == Some(Event::ObjectStart)
    }

    #[must_use]
    pub fn is_object_end(&self) -> bool {
        self.current == Some(Event::ObjectEnd)
    }

    #[must_use]
    pub fn is_array_start(&self) -> bool {
        self.current == Some(Event::ArrayStart)
    }

    #[must_use]
    pub fn is_array_end(&self) -> bool {
        self.current == Some(Event::ArrayEnd)
    }

    #[must_use]
    pub fn is_string(&self) -> bool {
        self.current == Some(Event::String)
    }

    #[must_use]
    pub fn is_number(&self) -> bool {
        self.current == Some(Event::Number)
    }

    #[must_use]
    pub fn is_boolean(&self) -> bool {
        self.current == Some(Event::Boolean)
    }

    #[must_use]
    pub fn is_null(&self) -> bool {
        self.current == Some(Event::Null)
    }

    // Getter misuse is a caller bug, not a parse error.
    fn ensure(&self, event: Event, kind_name: &str) {
        assert!(!self.closed, "JSON reader have been closed");
        assert!(
            self.current == Some(event),
            "Current event isn't {kind_name}"
        );
    }

    /// Decoded text of the current string event.
    ///
    /// # Panics
    ///
    /// If the current event is not [`Event::String`], or the reader is
    /// closed.
    #[must_use]
    pub fn get_string(&self) -> &str {
        self.ensure(Event::String, "string");
        &self.text
    }

    /// Exact source text of the current number event.
    ///
    /// # Panics
    ///
    /// If the current event is not [`Event::Number`], or the reader is
    /// closed.
    #[must_use]
    pub fn number_text(&self) -> &str {
        self.ensure(Event::Number, "number");
        &self.text
    }

    /// Value of the current boolean event.
    ///
    /// # Panics
    ///
    /// If the current event is not [`Event::Boolean`], or the reader is
    /// closed.
    #[must_use]
    pub fn get_boolean(&self) -> bool {
        self.ensure(Event::Boolean, "boolean");
        self.boolean
    }

    fn parse_number<T: FromStr>(&self) -> Result<T, T::Err> {
        self.ensure(Event::Number, "number");
        self.text.parse()
    }

    /// Parses the current number as `i8`.
    ///
    /// Out-of-range or fractional text fails with the standard integer
    /// parse error. Panics if the current event is not a number.
    pub fn get_byte(&self) -> Result<i8, ParseIntError> {
        self.parse_number()
    }

    /// Parses the current number as `i16`.
    pub fn get_short(&self) -> Result<i16, ParseIntError> {
        self.parse_number()
    }

    /// Parses the current number as `i32`.
    pub fn get_int(&self) -> Result<i32, ParseIntError> {
        self.parse_number()
    }

    /// Parses the current number as `i64`.
    pub fn get_long(&self) -> Result<i64, ParseIntError> {
        self.parse_number()
    }

    /// Parses the current number as `f32`; values beyond the range collapse
    /// to the infinities, as the standard parser does.
    pub fn get_float(&self) -> Result<f32, ParseFloatError> {
        self.parse_number()
    }

    /// Parses the current number as `f64`.
    pub fn get_double(&self) -> Result<f64, ParseFloatError> {
        self.parse_number()
    }

    /// Parses the current number as an arbitrary-precision integer.
    pub fn get_big_integer(&self) -> Result<BigInt, num_bigint::ParseBigIntError> {
        self.parse_number()
    }

    /// Parses the current number as an arbitrary-precision decimal; exponent
    /// and sign are honored, precision is never truncated.
    pub fn get_big_decimal(&self) -> Result<BigDecimal, bigdecimal::ParseBigDecimalError> {
        self.parse_number()
    }

    /// Releases the reader. Terminal: afterwards every classifier returns
    /// `false`, [`next`](JsonReader::next) fails, and getters panic. The
    /// underlying source is not touched.
    pub fn close(&mut self) {
        self.closed = true;
        self.current = None;
        self.text.clear();
    }
}
