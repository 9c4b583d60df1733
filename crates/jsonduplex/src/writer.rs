//! The push-based JSON writer.

use alloc::string::ToString;

use bigdecimal::BigDecimal;
use num_bigint::BigInt;

use crate::{
    error::JsonError,
    escape,
    grammar::Grammar,
    number,
    sink::CharSink,
    token::TokenKind,
};

/// A push-based writer producing a single JSON document.
///
/// The writer mirrors the reader's grammar: every call is validated against
/// the same state machine before any text reaches the sink, so a rejected
/// call leaves the output untouched. Separators are written explicitly —
/// [`write_comma`](JsonWriter::write_comma) between elements and members,
/// [`write_colon`](JsonWriter::write_colon) after each key — and a string
/// written where the grammar expects a key is the key. Calls return the
/// writer again for chaining.
///
/// ```
/// use jsonduplex::JsonWriter;
///
/// let mut writer = JsonWriter::new(String::new());
/// writer
///     .write_array_start()?
///     .write_int(1)?
///     .write_comma()?
///     .write_string("two")?
///     .write_array_end()?
///     .flush()?;
/// assert_eq!(writer.into_inner(), r#"[1,"two"]"#);
/// # Ok::<(), jsonduplex::JsonError>(())
/// ```
#[derive(Debug)]
pub struct JsonWriter<W> {
    sink: W,
    grammar: Grammar,
    closed: bool,
}

impl<W: CharSink> JsonWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            sink,
            grammar: Grammar::new(),
            closed: false,
        }
    }

    fn advance(&mut self, kind: TokenKind, text: Option<&str>) -> Result<(), JsonError> {
        if self.closed {
            // A closed writer still reports the grammar error for a call
            // that would have been illegal anyway on an unfinished document.
            if !self.grammar.is_finished() {
                self.grammar.check(kind)?;
            }
            return Err(JsonError::ProcessingFinished);
        }
        self.grammar.advance(kind, text)
    }

    /// Opens an object.
    pub fn write_object_start(&mut self) -> Result<&mut Self, JsonError> {
        self.advance(TokenKind::ObjectStart, None)?;
        self.sink.write_text("{")?;
        Ok(self)
    }

    /// Closes the innermost object.
    pub fn write_object_end(&mut self) -> Result<&mut Self, JsonError> {
        self.advance(TokenKind::ObjectEnd, None)?;
        self.sink.write_text("}")?;
        Ok(self)
    }

    /// Opens an array.
    pub fn write_array_start(&mut self) -> Result<&mut Self, JsonError> {
        self.advance(TokenKind::ArrayStart, None)?;
        self.sink.write_text("[")?;
        Ok(self)
    }

    /// Closes the innermost array.
    pub fn write_array_end(&mut self) -> Result<&mut Self, JsonError> {
        self.advance(TokenKind::ArrayEnd, None)?;
        self.sink.write_text("]")?;
        Ok(self)
    }

    /// Writes the colon between an object key and its value.
    pub fn write_colon(&mut self) -> Result<&mut Self, JsonError> {
        self.advance(TokenKind::Colon, None)?;
        self.sink.write_text(":")?;
        Ok(self)
    }

    /// Writes the comma between array elements or object members.
    pub fn write_comma(&mut self) -> Result<&mut Self, JsonError> {
        self.advance(TokenKind::Comma, None)?;
        self.sink.write_text(",")?;
        Ok(self)
    }

    /// Writes a `null` value.
    pub fn write_null(&mut self) -> Result<&mut Self, JsonError> {
        self.advance(TokenKind::Null, None)?;
        self.sink.write_text("null")?;
        Ok(self)
    }

    /// Writes a boolean value.
    pub fn write_boolean(&mut self, value: bool) -> Result<&mut Self, JsonError> {
        let (kind, text) = if value {
            (TokenKind::True, "true")
        } else {
            (TokenKind::False, "false")
        };
        self.advance(kind, None)?;
        self.sink.write_text(text)?;
        Ok(self)
    }

    /// Writes a string — an object key when the grammar expects one, a value
    /// otherwise. Duplicate keys within one object are rejected before
    /// anything is emitted.
    pub fn write_string(&mut self, value: &str) -> Result<&mut Self, JsonError> {
        self.advance(TokenKind::String, Some(value))?;
        escape::encode_into(value, &mut self.sink)?;
        Ok(self)
    }

    /// Writes an `i8` value.
    pub fn write_byte(&mut self, value: i8) -> Result<&mut Self, JsonError> {
        self.write_raw_number(&value.to_string())
    }

    /// Writes an `i16` value.
    pub fn write_short(&mut self, value: i16) -> Result<&mut Self, JsonError> {
        self.write_raw_number(&value.to_string())
    }

    /// Writes an `i32` value.
    pub fn write_int(&mut self, value: i32) -> Result<&mut Self, JsonError> {
        self.write_raw_number(&value.to_string())
    }

    /// Writes an `i64` value.
    pub fn write_long(&mut self, value: i64) -> Result<&mut Self, JsonError> {
        self.write_raw_number(&value.to_string())
    }

    /// Writes an `f32` value; integral values keep a fractional part
    /// (`2.0`). Non-finite values fail before any output.
    pub fn write_float(&mut self, value: f32) -> Result<&mut Self, JsonError> {
        let text = number::format_f32(value)?;
        self.write_raw_number(&text)
    }

    /// Writes an `f64` value; integral values keep a fractional part.
    pub fn write_double(&mut self, value: f64) -> Result<&mut Self, JsonError> {
        let text = number::format_f64(value)?;
        self.write_raw_number(&text)
    }

    /// Writes an arbitrary-precision integer, digits preserved exactly.
    pub fn write_big_integer(&mut self, value: &BigInt) -> Result<&mut Self, JsonError> {
        self.write_raw_number(&value.to_string())
    }

    /// Writes an arbitrary-precision decimal, precision preserved exactly.
    pub fn write_big_decimal(&mut self, value: &BigDecimal) -> Result<&mut Self, JsonError> {
        self.write_number_text(&value.to_string())
    }

    /// Writes pre-rendered number text after validating it against the JSON
    /// number grammar. The escape hatch for callers that track numbers as
    /// exact text.
    pub fn write_number_text(&mut self, text: &str) -> Result<&mut Self, JsonError> {
        if !number::is_number_text(text) {
            return Err(JsonError::InvalidNumberLiteral(text.to_string()));
        }
        self.write_raw_number(text)
    }

    fn write_raw_number(&mut self, text: &str) -> Result<&mut Self, JsonError> {
        self.advance(TokenKind::Number, None)?;
        self.sink.write_text(text)?;
        Ok(self)
    }

    /// Pushes buffered output to the sink without touching grammar state.
    pub fn flush(&mut self) -> Result<&mut Self, JsonError> {
        self.sink.flush()?;
        Ok(self)
    }

    /// True once the single top-level value is complete.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.grammar.is_finished()
    }

    /// Releases the writer. Terminal: subsequent writes fail with
    /// `"JSON processing finished"` (or the pending grammar error on an
    /// unfinished document). The sink itself is left open.
    pub fn close(&mut self) {
        self.closed = true;
    }

    /// Consumes the writer and returns the sink.
    pub fn into_inner(self) -> W {
        self.sink
    }
}
