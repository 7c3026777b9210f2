//! Typed field values with bare-token type inference.
//!
//! A [`Value`] is a closed sum type: its tag is fixed at construction and
//! rendering to text never changes it. Bare (unquoted) tokens go through the
//! inference ladder in [`Value::parse`]; quoted tokens bypass it entirely via
//! [`Value::from_quoted`].

use crate::error::ParseErrorKind;
use std::fmt;

/// One field's typed content.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// 64-bit signed integer (digit-only tokens, no sign).
    Integer(i64),
    /// 64-bit float (decimal or exponential notation, signs allowed).
    Float(f64),
    /// Boolean (`true`/`false` literals, or the implicit flag-field value).
    Bool(bool),
    /// UTF-8 text, arbitrary length.
    String(String),
}

impl Value {
    /// Classify a bare token. First matching rule wins:
    ///
    /// 1. non-empty, every char an ASCII decimal digit → [`Value::Integer`];
    ///    overflow of the i64 range is a fatal error for the token
    /// 2. parses as `f64` → [`Value::Float`] (covers `-1`, `3.14`, `1e3`)
    /// 3. parses as `bool` → [`Value::Bool`]
    /// 4. anything else → [`Value::String`], verbatim
    ///
    /// The empty token is `String("")`, not an error.
    pub fn parse(raw: &str) -> Result<Value, ParseErrorKind> {
        if raw.is_empty() {
            return Ok(Value::String(String::new()));
        }
        if raw.chars().all(|c| c.is_ascii_digit()) {
            return raw
                .parse::<i64>()
                .map(Value::Integer)
                .map_err(|_| ParseErrorKind::IntegerOverflow(raw.to_string()));
        }
        if let Ok(f) = raw.parse::<f64>() {
            return Ok(Value::Float(f));
        }
        if let Ok(b) = raw.parse::<bool>() {
            return Ok(Value::Bool(b));
        }
        Ok(Value::String(raw.to_string()))
    }

    /// Wrap a quoted token verbatim. Quoted values never undergo type
    /// inference, even when their content looks numeric: `key="123"` is
    /// `String("123")` while `key=123` is `Integer(123)`.
    pub fn from_quoted(raw: impl Into<String>) -> Value {
        Value::String(raw.into())
    }
}

/// Canonical text rendering: integers as plain decimal (no grouping), floats
/// as Rust's shortest round-trip decimal text, booleans as `true`/`false`,
/// strings verbatim.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(n) => write!(f, "{n}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::String(s) => f.write_str(s),
        }
    }
}
