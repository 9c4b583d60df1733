//! Character-level tokenizer for JSON text.
//!
//! The lexer pulls from a [`CharSource`] and produces one [`Token`] per
//! call, skipping insignificant whitespace between tokens. It decodes string
//! escapes, keeps number literals as exact text, and reports which token it
//! was inside when the input runs out. It has no knowledge of grammar
//! legality; out-of-place tokens are the grammar engine's problem.

use alloc::string::String;

use crate::{
    error::{EofContext, JsonError},
    escape,
    source::CharSource,
    token::Token,
};

pub(crate) struct Lexer<S> {
    source: S,
    peeked: Option<char>,
    line: usize,
    column: usize,
}

impl<S: CharSource> Lexer<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            peeked: None,
            line: 1,
            column: 0,
        }
    }

    fn peek(&mut self) -> Result<Option<char>, JsonError> {
        if self.peeked.is_none() {
            self.peeked = self.source.next_char()?;
        }
        Ok(self.peeked)
    }

    fn bump(&mut self) -> Result<Option<char>, JsonError> {
        let ch = match self.peeked.take() {
            Some(ch) => Some(ch),
            None => self.source.next_char()?,
        };
        if let Some(ch) = ch {
            if ch == '\n' {
                self.line += 1;
                self.column = 0;
            } else {
                self.column += 1;
            }
        }
        Ok(ch)
    }

    fn invalid(&self, ch: char) -> JsonError {
        JsonError::InvalidCharacter {
            ch,
            line: self.line,
            column: self.column,
        }
    }

    /// Produces the next token, or [`Token::Eof`] once the source drains
    /// outside of any token.
    pub fn next_token(&mut self) -> Result<Token, JsonError> {
        loop {
            let Some(ch) = self.bump()? else {
                return Ok(Token::Eof);
            };
            if matches!(ch, ' ' | '\t' | '\r' | '\n') {
                continue;
            }
            return match ch {
                '{' => Ok(Token::ObjectStart),
                '}' => Ok(Token::ObjectEnd),
                '[' => Ok(Token::ArrayStart),
                ']' => Ok(Token::ArrayEnd),
                ':' => Ok(Token::Colon),
                ',' => Ok(Token::Comma),
                '"' => self.read_string(),
                '-' | '0'..='9' => self.read_number(ch),
                't' => self.read_keyword("rue", EofContext::True, Token::True),
                'f' => self.read_keyword("alse", EofContext::False, Token::False),
                'n' => self.read_keyword("ull", EofContext::Null, Token::Null),
                _ => Err(self.invalid(ch)),
            };
        }
    }

    fn read_keyword(
        &mut self,
        rest: &str,
        ctx: EofContext,
        token: Token,
    ) -> Result<Token, JsonError> {
        for expected in rest.chars() {
            match self.bump()? {
                Some(ch) if ch == expected => {}
                Some(ch) => return Err(self.invalid(ch)),
                None => return Err(JsonError::UnexpectedEof(ctx)),
            }
        }
        Ok(token)
    }

    /// Scans `-? digit+ ( . digit+ )? ( [eE] [+-]? digit+ )?`, returning the
    /// exact source text. A number token is only finished by the delimiter
    /// character after it (which stays unconsumed), so running out of input
    /// anywhere in the scan is an error — including right after a complete
    /// run of digits.
    fn read_number(&mut self, first: char) -> Result<Token, JsonError> {
        let mut text = String::new();
        text.push(first);
        if first == '-' {
            self.expect_digit(&mut text)?;
        }
        self.read_digits(&mut text)?;
        if self.peek_in_number()? == '.' {
            text.push('.');
            self.bump()?;
            self.expect_digit(&mut text)?;
            self.read_digits(&mut text)?;
        }
        if matches!(self.peek_in_number()?, 'e' | 'E') {
            let Some(marker) = self.bump()? else {
                return Err(JsonError::UnexpectedEof(EofContext::Number));
            };
            text.push(marker);
            let sign = self.peek_in_number()?;
            if sign == '+' || sign == '-' {
                text.push(sign);
                self.bump()?;
            }
            self.expect_digit(&mut text)?;
            self.read_digits(&mut text)?;
        }
        Ok(Token::Number(text))
    }

    fn peek_in_number(&mut self) -> Result<char, JsonError> {
        self.peek()?
            .ok_or(JsonError::UnexpectedEof(EofContext::Number))
    }

    fn expect_digit(&mut self, text: &mut String) -> Result<(), JsonError> {
        match self.bump()? {
            Some(ch) if ch.is_ascii_digit() => {
                text.push(ch);
                Ok(())
            }
            Some(ch) => Err(self.invalid(ch)),
            None => Err(JsonError::UnexpectedEof(EofContext::Number)),
        }
    }

    fn read_digits(&mut self, text: &mut String) -> Result<(), JsonError> {
        while self.peek_in_number()?.is_ascii_digit() {
            let Some(ch) = self.bump()? else {
                return Err(JsonError::UnexpectedEof(EofContext::Number));
            };
            text.push(ch);
        }
        Ok(())
    }

    fn read_string(&mut self) -> Result<Token, JsonError> {
        let mut text = String::new();
        loop {
            let Some(ch) = self.bump()? else {
                return Err(JsonError::UnexpectedEof(EofContext::String));
            };
            match ch {
                '"' => return Ok(Token::String(text)),
                '\\' => text.push(self.read_escape()?),
                ch if (ch as u32) < 0x20 => return Err(self.invalid(ch)),
                ch => text.push(ch),
            }
        }
    }

    fn read_escape(&mut self) -> Result<char, JsonError> {
        let Some(ch) = self.bump()? else {
            return Err(JsonError::UnexpectedEof(EofContext::String));
        };
        if let Some(decoded) = escape::named_escape(ch) {
            return Ok(decoded);
        }
        if ch != 'u' {
            return Err(JsonError::InvalidEscape {
                ch,
                line: self.line,
                column: self.column,
            });
        }
        let unit = self.read_hex_unit()?;
        match unit {
            // A high surrogate must be followed by an escaped low surrogate;
            // the pair decodes to a single scalar value.
            0xD800..=0xDBFF => {
                match self.bump()? {
                    Some('\\') => {}
                    Some(_) => return Err(JsonError::UnpairedSurrogate(unit)),
                    None => return Err(JsonError::UnexpectedEof(EofContext::String)),
                }
                match self.bump()? {
                    Some('u') => {}
                    Some(_) => return Err(JsonError::UnpairedSurrogate(unit)),
                    None => return Err(JsonError::UnexpectedEof(EofContext::String)),
                }
                let low = self.read_hex_unit()?;
                if !(0xDC00..=0xDFFF).contains(&low) {
                    return Err(JsonError::UnpairedSurrogate(unit));
                }
                escape::combine_surrogates(unit, low)
                    .ok_or(JsonError::InvalidUnicodeEscape(low))
            }
            0xDC00..=0xDFFF => Err(JsonError::UnpairedSurrogate(unit)),
            _ => char::from_u32(unit).ok_or(JsonError::InvalidUnicodeEscape(unit)),
        }
    }

    fn read_hex_unit(&mut self) -> Result<u32, JsonError> {
        let mut acc = 0;
        for _ in 0..4 {
            let Some(ch) = self.bump()? else {
                return Err(JsonError::UnexpectedEof(EofContext::String));
            };
            let Some(digit) = escape::hex_digit(ch) else {
                return Err(JsonError::InvalidUnicodeEscapeChar(ch));
            };
            acc = (acc << 4) | digit;
        }
        Ok(acc)
    }
}
