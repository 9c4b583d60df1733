//! Canonical JSON number text for the built-in numeric types.

use alloc::string::{String, ToString};

use crate::error::JsonError;

/// Formats a finite `f64` as JSON number text.
///
/// Integral values keep an explicit fractional part (`0.0`, never `0`) so
/// the text stays recognizable as a floating-point quantity.
pub(crate) fn format_f64(value: f64) -> Result<String, JsonError> {
    if !value.is_finite() {
        return Err(JsonError::NonFiniteNumber);
    }
    Ok(with_fraction(value.to_string()))
}

/// `f32` counterpart of [`format_f64`].
pub(crate) fn format_f32(value: f32) -> Result<String, JsonError> {
    if !value.is_finite() {
        return Err(JsonError::NonFiniteNumber);
    }
    Ok(with_fraction(value.to_string()))
}

fn with_fraction(mut text: String) -> String {
    if !text.contains(['.', 'e', 'E']) {
        text.push_str(".0");
    }
    text
}

/// Validates `text` against the JSON number grammar
/// `-? digit+ ( . digit+ )? ( [eE] [+-]? digit+ )?`.
pub(crate) fn is_number_text(text: &str) -> bool {
    let mut rest = text.as_bytes();
    if let [b'-', tail @ ..] = rest {
        rest = tail;
    }
    let Some(tail) = eat_digits(rest) else {
        return false;
    };
    rest = tail;
    if let [b'.', tail @ ..] = rest {
        let Some(tail) = eat_digits(tail) else {
            return false;
        };
        rest = tail;
    }
    if let [b'e' | b'E', tail @ ..] = rest {
        let tail = match tail {
            [b'+' | b'-', t @ ..] => t,
            t => t,
        };
        let Some(tail) = eat_digits(tail) else {
            return false;
        };
        rest = tail;
    }
    rest.is_empty()
}

fn eat_digits(bytes: &[u8]) -> Option<&[u8]> {
    let end = bytes
        .iter()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(bytes.len());
    if end == 0 { None } else { Some(&bytes[end..]) }
}

#[cfg(test)]
mod tests {
    use super::{format_f32, format_f64, is_number_text};
    use crate::error::JsonError;

    #[test]
    fn floats_always_carry_a_fraction() {
        assert_eq!(format_f64(0.0).unwrap(), "0.0");
        assert_eq!(format_f64(-2.0).unwrap(), "-2.0");
        assert_eq!(format_f64(1.5).unwrap(), "1.5");
        assert_eq!(format_f32(0.0).unwrap(), "0.0");
        assert_eq!(format_f32(3.25).unwrap(), "3.25");
    }

    #[test]
    fn non_finite_floats_are_rejected() {
        for value in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(matches!(
                format_f64(value),
                Err(JsonError::NonFiniteNumber)
            ));
        }
        assert!(format_f32(f32::NAN).is_err());
    }

    #[test]
    fn number_grammar_accepts_the_usual_shapes() {
        for text in ["0", "-0", "12", "-3.5", "1e3", "1E+3", "2.5e-10", "007"] {
            assert!(is_number_text(text), "{text}");
        }
    }

    #[test]
    fn number_grammar_rejects_malformed_text() {
        for text in ["", "-", ".", "1.", ".5", "1e", "1e+", "+1", "0x10", "1.2.3", "1 "] {
            assert!(!is_number_text(text), "{text}");
        }
    }
}
