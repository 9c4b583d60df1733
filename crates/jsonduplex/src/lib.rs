//! A streaming JSON reader and writer.
//!
//! The crate is built around two mirrored grammar engines sharing one state
//! machine: [`JsonReader`] pulls events out of a character source, and
//! [`JsonWriter`] pushes grammar-checked tokens into a character sink. Both
//! validate strict JSON syntax as they go, keep number literals as exact
//! text so arbitrary precision is never lost, and reject duplicate object
//! keys per object.
//!
//! ```
//! use jsonduplex::{Event, JsonReader, JsonWriter};
//!
//! let mut writer = JsonWriter::new(String::new());
//! writer
//!     .write_object_start()?
//!     .write_string("kind")?
//!     .write_colon()?
//!     .write_string("demo")?
//!     .write_comma()?
//!     .write_string("size")?
//!     .write_colon()?
//!     .write_int(2)?
//!     .write_object_end()?
//!     .flush()?;
//! let text = writer.into_inner();
//! assert_eq!(text, r#"{"kind":"demo","size":2}"#);
//!
//! let mut reader = JsonReader::from_text(&text);
//! assert_eq!(reader.next()?, Event::ObjectStart);
//! assert_eq!(reader.next()?, Event::String);
//! assert_eq!(reader.get_string(), "kind");
//! # Ok::<(), jsonduplex::JsonError>(())
//! ```

#![no_std]
extern crate alloc;

#[cfg(any(test, feature = "std"))]
extern crate std;

mod error;
mod escape;
mod grammar;
mod lexer;
mod number;
mod reader;
mod sink;
mod source;
mod token;
mod value;
mod writer;

#[cfg(test)]
mod tests;

pub use error::{EofContext, Expected, JsonError, SinkError, SourceError};
pub use reader::{Event, JsonReader};
#[cfg(feature = "std")]
pub use sink::Utf8Sink;
pub use sink::{CharSink, FmtSink};
#[cfg(feature = "std")]
pub use source::Utf8Source;
pub use source::{CharSource, StrSource};
pub use value::{Array, Map, Value};
pub use writer::JsonWriter;
