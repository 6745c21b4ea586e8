//! Reader for literal values typed on a command line.
//!
//! Supports the literal forms the variation fixtures use: integers,
//! floats (`.5`, `12.3456789000E-10`), case-insensitive `true`, `false` and
//! `null`, the pseudo-literal `unset`, quoted strings, and `array(...)` /
//! `[...]` with optional `key => value` entries.

use thiserror::Error;

use crate::container::{ArrayKey, Container};
use crate::value::Value;

/// Error produced for malformed literal input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LiteralError {
    /// Input ended in the middle of a literal
    #[error("unexpected end of input")]
    UnexpectedEnd,
    /// A character that cannot start or continue a literal
    #[error("unexpected '{ch}' at offset {offset}")]
    UnexpectedChar {
        /// The offending character
        ch: char,
        /// Character offset into the input
        offset: usize,
    },
    /// A numeral that does not parse
    #[error("invalid number '{0}'")]
    InvalidNumber(String),
    /// A bare word that is not a known keyword
    #[error("unknown word '{0}'")]
    UnknownWord(String),
    /// A value that cannot be used as a container key
    #[error("illegal key of type {0}")]
    InvalidKey(&'static str),
    /// An unkeyed element after the key `i64::MAX`
    #[error("cannot add element: the next element is already occupied")]
    NextElementOccupied,
    /// Input continues after a complete literal
    #[error("trailing input at offset {0}")]
    TrailingInput(usize),
}

/// Parse a single literal value.
///
/// # Examples
///
/// ```
/// use core_types::{parse_literal, Value};
///
/// assert_eq!(parse_literal("TRUE").unwrap(), Value::Bool(true));
/// assert_eq!(parse_literal(".5").unwrap(), Value::Float(0.5));
/// assert_eq!(parse_literal("'string'").unwrap(), Value::string("string"));
/// assert_eq!(parse_literal("array(1, 2)").unwrap().as_array().unwrap().len(), 2);
/// ```
pub fn parse_literal(input: &str) -> Result<Value, LiteralError> {
    let mut reader = Reader {
        chars: input.chars().collect(),
        pos: 0,
    };
    let value = reader.value()?;
    reader.skip_ws();
    if reader.pos < reader.chars.len() {
        return Err(LiteralError::TrailingInput(reader.pos));
    }
    Ok(value)
}

struct Reader {
    chars: Vec<char>,
    pos: usize,
}

impl Reader {
    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn bump(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += 1;
        Some(ch)
    }

    fn skip_ws(&mut self) {
        while matches!(self.peek(), Some(c) if c.is_whitespace()) {
            self.pos += 1;
        }
    }

    fn expect(&mut self, want: char) -> Result<(), LiteralError> {
        self.skip_ws();
        match self.bump() {
            Some(c) if c == want => Ok(()),
            Some(c) => Err(LiteralError::UnexpectedChar {
                ch: c,
                offset: self.pos - 1,
            }),
            None => Err(LiteralError::UnexpectedEnd),
        }
    }

    fn value(&mut self) -> Result<Value, LiteralError> {
        self.skip_ws();
        match self.peek() {
            None => Err(LiteralError::UnexpectedEnd),
            Some('\'') => self.single_quoted(),
            Some('"') => self.double_quoted(),
            Some('[') => {
                self.pos += 1;
                self.entries(']')
            }
            Some(c) if c.is_ascii_digit() || matches!(c, '-' | '+' | '.') => self.number(),
            Some(c) if c.is_ascii_alphabetic() || c == '_' => self.word(),
            Some(c) => Err(LiteralError::UnexpectedChar {
                ch: c,
                offset: self.pos,
            }),
        }
    }

    fn word(&mut self) -> Result<Value, LiteralError> {
        let start = self.pos;
        while matches!(self.peek(), Some(c) if c.is_ascii_alphanumeric() || c == '_') {
            self.pos += 1;
        }
        let word: String = self.chars[start..self.pos].iter().collect();
        match word.to_ascii_lowercase().as_str() {
            "true" => Ok(Value::Bool(true)),
            "false" => Ok(Value::Bool(false)),
            "null" => Ok(Value::Null),
            "unset" => Ok(Value::Undefined),
            "array" => {
                self.expect('(')?;
                self.entries(')')
            }
            _ => Err(LiteralError::UnknownWord(word)),
        }
    }

    fn number(&mut self) -> Result<Value, LiteralError> {
        let start = self.pos;
        if matches!(self.peek(), Some('-' | '+')) {
            self.pos += 1;
        }
        let mut is_float = false;
        while let Some(c) = self.peek() {
            match c {
                '0'..='9' => self.pos += 1,
                '.' => {
                    is_float = true;
                    self.pos += 1;
                }
                'e' | 'E' => {
                    is_float = true;
                    self.pos += 1;
                    if matches!(self.peek(), Some('-' | '+')) {
                        self.pos += 1;
                    }
                }
                _ => break,
            }
        }
        let text: String = self.chars[start..self.pos].iter().collect();
        if !is_float {
            if let Ok(n) = text.parse::<i64>() {
                return Ok(Value::Int(n));
            }
        }
        // Integer overflow falls back to float, as the runtime does.
        text.parse::<f64>()
            .map(Value::Float)
            .map_err(|_| LiteralError::InvalidNumber(text))
    }

    fn single_quoted(&mut self) -> Result<Value, LiteralError> {
        self.pos += 1;
        let mut out = String::new();
        loop {
            match self.bump().ok_or(LiteralError::UnexpectedEnd)? {
                '\'' => return Ok(Value::String(out)),
                '\\' if matches!(self.peek(), Some('\'' | '\\')) => {
                    out.push(self.bump().ok_or(LiteralError::UnexpectedEnd)?);
                }
                c => out.push(c),
            }
        }
    }

    fn double_quoted(&mut self) -> Result<Value, LiteralError> {
        self.pos += 1;
        let mut out = String::new();
        loop {
            match self.bump().ok_or(LiteralError::UnexpectedEnd)? {
                '"' => return Ok(Value::String(out)),
                '\\' => match self.bump().ok_or(LiteralError::UnexpectedEnd)? {
                    'n' => out.push('\n'),
                    't' => out.push('\t'),
                    'r' => out.push('\r'),
                    '\\' => out.push('\\'),
                    '"' => out.push('"'),
                    '$' => out.push('$'),
                    other => {
                        out.push('\\');
                        out.push(other);
                    }
                },
                c => out.push(c),
            }
        }
    }

    fn entries(&mut self, close: char) -> Result<Value, LiteralError> {
        let mut container = Container::new();
        loop {
            self.skip_ws();
            if self.peek() == Some(close) {
                self.pos += 1;
                return Ok(Value::Array(container));
            }
            let first = self.value()?;
            self.skip_ws();
            if self.peek() == Some('=') {
                self.expect('=')?;
                self.expect('>')?;
                let key = to_key(first)?;
                let value = self.value()?;
                container.insert(key, value);
            } else if !container.push(first) {
                return Err(LiteralError::NextElementOccupied);
            }
            self.skip_ws();
            match self.bump() {
                Some(',') => continue,
                Some(c) if c == close => return Ok(Value::Array(container)),
                Some(c) => {
                    return Err(LiteralError::UnexpectedChar {
                        ch: c,
                        offset: self.pos - 1,
                    })
                }
                None => return Err(LiteralError::UnexpectedEnd),
            }
        }
    }
}

fn to_key(value: Value) -> Result<ArrayKey, LiteralError> {
    match value {
        Value::Int(n) => Ok(ArrayKey::Int(n)),
        Value::String(s) => Ok(ArrayKey::from_str_key(&s)),
        Value::Bool(b) => Ok(ArrayKey::Int(b as i64)),
        Value::Float(f) => Ok(ArrayKey::Int(f as i64)),
        Value::Null | Value::Undefined => Ok(ArrayKey::Str(String::new())),
        Value::Array(_) => Err(LiteralError::InvalidKey("array")),
        Value::Object(_) => Err(LiteralError::InvalidKey("object")),
        Value::Resource(_) => Err(LiteralError::InvalidKey("resource")),
    }
}
