//! An in-memory JSON document model built on top of the reader and writer.
//!
//! [`Value`] is a closed union over the six JSON value kinds. Parsing pulls
//! reader events recursively; serialization pushes the matching writer calls
//! back out, so the grammar engines see every tree exactly the way they see
//! a stream. Numbers are retained as exact text, never folded into a machine
//! float.

use alloc::{
    collections::BTreeMap,
    string::{String, ToString},
    vec::Vec,
};
use core::{fmt, str::FromStr};

use crate::{
    error::JsonError,
    number,
    reader::{Event, JsonReader},
    sink::CharSink,
    source::CharSource,
    writer::JsonWriter,
};

/// An object: member values keyed by member name, iterated in ascending key
/// order.
pub type Map = BTreeMap<String, Value>;
/// An array of values in insertion order.
pub type Array = Vec<Value>;

/// A JSON value as defined by [RFC 8259], with numbers of unbounded
/// precision kept as text.
///
/// ```
/// use jsonduplex::Value;
///
/// let value: Value = r#"{"b": [1, 2], "a": null}"#.parse()?;
/// // Objects serialize in ascending key order.
/// assert_eq!(value.to_string(), r#"{"a":null,"b":[1,2]}"#);
/// # Ok::<(), jsonduplex::JsonError>(())
/// ```
///
/// [RFC 8259]: https://datatracker.ietf.org/doc/html/rfc8259
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Null,
    Boolean(bool),
    /// Number text exactly as read or formatted.
    Number(String),
    String(String),
    Array(Array),
    Object(Map),
}

impl Default for Value {
    fn default() -> Self {
        Self::Null
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<Array> for Value {
    fn from(v: Array) -> Self {
        Self::Array(v)
    }
}

impl From<Map> for Value {
    fn from(v: Map) -> Self {
        Self::Object(v)
    }
}

macro_rules! impl_from_int_for_value {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(v: $t) -> Self {
                    Value::Number(v.to_string())
                }
            }
        )*
    };
}

impl_from_int_for_value!(i8, i16, i32, i64, u8, u16, u32, u64);

impl Value {
    /// Builds a number value from a finite float, formatted canonically.
    pub fn from_f64(v: f64) -> Result<Self, JsonError> {
        Ok(Self::Number(number::format_f64(v)?))
    }

    /// Returns `true` if the value is [`Null`].
    ///
    /// [`Null`]: Value::Null
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns `true` if the value is an [`Object`].
    ///
    /// [`Object`]: Value::Object
    #[must_use]
    pub fn is_object(&self) -> bool {
        matches!(self, Self::Object(..))
    }

    /// Returns `true` if the value is an [`Array`].
    ///
    /// [`Array`]: Value::Array
    #[must_use]
    pub fn is_array(&self) -> bool {
        matches!(self, Self::Array(..))
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// The exact number text, if the value is a number.
    #[must_use]
    pub fn number_text(&self) -> Option<&str> {
        match self {
            Self::Number(text) => Some(text),
            _ => None,
        }
    }

    /// Reads one complete value by pulling reader events.
    pub fn read_from<S: CharSource>(reader: &mut JsonReader<S>) -> Result<Self, JsonError> {
        let event = reader.next()?;
        Self::from_event(reader, event)
    }

    fn from_event<S: CharSource>(
        reader: &mut JsonReader<S>,
        event: Event,
    ) -> Result<Self, JsonError> {
        Ok(match event {
            Event::Null => Self::Null,
            Event::Boolean => Self::Boolean(reader.get_boolean()),
            Event::Number => Self::Number(reader.number_text().to_string()),
            Event::String => Self::String(reader.get_string().to_string()),
            Event::ArrayStart => {
                let mut items = Array::new();
                loop {
                    let event = reader.next()?;
                    if event == Event::ArrayEnd {
                        break;
                    }
                    items.push(Self::from_event(reader, event)?);
                }
                Self::Array(items)
            }
            Event::ObjectStart => {
                let mut members = Map::new();
                loop {
                    match reader.next()? {
                        Event::ObjectEnd => break,
                        Event::String => {
                            let key = reader.get_string().to_string();
                            let event = reader.next()?;
                            members.insert(key, Self::from_event(reader, event)?);
                        }
                        _ => unreachable!("object keys are always string events"),
                    }
                }
                Self::Object(members)
            }
            Event::ObjectEnd | Event::ArrayEnd => {
                unreachable!("container ends are consumed by their loops")
            }
        })
    }

    /// Serializes into `writer`, bracketing each container's children with
    /// the matching start/end calls and explicit separators.
    pub fn write_to<W: CharSink>(&self, writer: &mut JsonWriter<W>) -> Result<(), JsonError> {
        match self {
            Self::Null => writer.write_null()?,
            Self::Boolean(b) => writer.write_boolean(*b)?,
            Self::Number(text) => writer.write_number_text(text)?,
            Self::String(s) => writer.write_string(s)?,
            Self::Array(items) => {
                writer.write_array_start()?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        writer.write_comma()?;
                    }
                    item.write_to(writer)?;
                }
                writer.write_array_end()?
            }
            Self::Object(members) => {
                writer.write_object_start()?;
                for (i, (key, value)) in members.iter().enumerate() {
                    if i > 0 {
                        writer.write_comma()?;
                    }
                    writer.write_string(key)?.write_colon()?;
                    value.write_to(writer)?;
                }
                writer.write_object_end()?
            }
        };
        Ok(())
    }

    /// Renders the value as JSON text.
    ///
    /// Fails only if a [`Value::Number`] holds text that is not a valid JSON
    /// number literal.
    pub fn to_json(&self) -> Result<String, JsonError> {
        let mut writer = JsonWriter::new(String::new());
        self.write_to(&mut writer)?;
        writer.flush()?;
        Ok(writer.into_inner())
    }
}

impl FromStr for Value {
    type Err = JsonError;

    /// Parses a complete JSON document.
    ///
    /// A bare top-level number must be followed by a whitespace character —
    /// number tokens are only finished by the delimiter after them.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut reader = JsonReader::from_text(s);
        let value = Self::read_from(&mut reader)?;
        reader.close();
        Ok(value)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_json() {
            Ok(text) => f.write_str(&text),
            Err(_) => Err(fmt::Error),
        }
    }
}
