//! Character-level logfmt parser.
//!
//! The parser scans the whole input buffer with an explicit cursor, one
//! character at a time, and produces the full record sequence or a single
//! [`ParseError`] — never both. All records accumulated before a failure are
//! discarded (all-or-nothing per document, not per line).
//!
//! Grammar, line-oriented:
//!
//! ```text
//! document := { line }
//! line     := { field } ("\r"? "\n" | EOF)
//! field    := WS* key [ "=" value ] WS*
//! key      := 1*( any char except '=', ' ', '\r', '\n', EOF )
//! value    := quoted | bare
//! quoted   := '"' *( '\' '"' | any char except '"' ) '"'
//! bare     := 1*( any char except ' ', '\r', '\n', EOF )
//! ```
//!
//! A key with no `=` is a flag field and gets the value `Bool(true)`. Inside
//! quotes only the closing quote is escapable; a backslash before anything
//! else is fatal. Runs of blank (or spaces-only) lines produce no records.

use crate::error::{ParseError, ParseErrorKind};
use crate::record::Record;
use crate::value::Value;

/// Parse a complete logfmt document into its record sequence.
///
/// Convenience wrapper over [`Parser`]; one call, one fresh parser.
///
/// # Example
/// ```
/// use relog_core::{parse, Value};
///
/// let records = parse("level=info count=3\ndebug\n").unwrap();
/// assert_eq!(records.len(), 2);
/// assert_eq!(records[0].get("count"), Some(&Value::Integer(3)));
/// assert_eq!(records[1].get("debug"), Some(&Value::Bool(true)));
/// ```
pub fn parse(input: &str) -> Result<Vec<Record>, ParseError> {
    Parser::new(input).parse()
}

/// Cursor state over one immutable input buffer.
///
/// A parser is single-use: [`Parser::parse`] consumes it, so a fresh parser
/// must be constructed per input.
pub struct Parser {
    chars: Vec<char>,
    pos: usize,
    row: usize,
    col: usize,
}

impl Parser {
    /// Create a parser over the entire source text.
    pub fn new(input: &str) -> Parser {
        Parser {
            chars: input.chars().collect(),
            pos: 0,
            row: 1,
            col: 1,
        }
    }

    /// Scan the whole buffer into records, stopping at the first fatal
    /// condition with its row and column.
    pub fn parse(mut self) -> Result<Vec<Record>, ParseError> {
        let mut records = Vec::new();
        self.eat_line_breaks();
        while self.current().is_some() {
            let record = self.parse_line()?;
            if !record.is_empty() {
                records.push(record);
            }
            self.eat_line_breaks();
        }
        Ok(records)
    }

    /// One line's fields, up to (but not consuming) the terminating newline.
    fn parse_line(&mut self) -> Result<Record, ParseError> {
        let mut record = Record::new();
        loop {
            self.eat_spaces();
            match self.current() {
                None | Some('\n') => break,
                Some('\r') => {
                    self.bump();
                }
                Some(_) => {
                    let key = self.read_key();
                    let value = if self.current() == Some('=') {
                        self.bump();
                        self.read_value()?
                    } else {
                        // Flag-style field: no '=' means Bool(true).
                        Value::Bool(true)
                    };
                    record.insert(key, value);
                }
            }
        }
        Ok(record)
    }

    fn read_value(&mut self) -> Result<Value, ParseError> {
        if self.current() == Some('"') {
            self.bump();
            let text = self.read_quoted()?;
            Ok(Value::from_quoted(text))
        } else {
            let token = self.read_bare();
            Value::parse(&token).map_err(|kind| self.fail(kind))
        }
    }

    /// Quoted section body, cursor already past the opening quote. Consumes
    /// the closing quote. A literal newline inside the quotes is allowed.
    fn read_quoted(&mut self) -> Result<String, ParseError> {
        let mut text = String::new();
        loop {
            match self.current() {
                None => return Err(self.fail(ParseErrorKind::UnterminatedQuote)),
                Some('"') => {
                    self.bump();
                    return Ok(text);
                }
                Some('\\') => {
                    self.bump();
                    match self.current() {
                        Some('"') => {
                            text.push('"');
                            self.bump();
                        }
                        Some(c) => return Err(self.fail(ParseErrorKind::InvalidEscape(c))),
                        None => return Err(self.fail(ParseErrorKind::UnterminatedQuote)),
                    }
                }
                Some(c) => {
                    text.push(c);
                    self.bump();
                }
            }
        }
    }

    fn read_key(&mut self) -> String {
        self.read_until(|c| matches!(c, '=' | ' ' | '\r' | '\n'))
    }

    fn read_bare(&mut self) -> String {
        self.read_until(|c| matches!(c, ' ' | '\r' | '\n'))
    }

    fn read_until(&mut self, is_terminator: impl Fn(char) -> bool) -> String {
        let mut text = String::new();
        while let Some(c) = self.current() {
            if is_terminator(c) {
                break;
            }
            text.push(c);
            self.bump();
        }
        text
    }

    fn eat_spaces(&mut self) {
        while self.current() == Some(' ') {
            self.bump();
        }
    }

    /// Consume a run of `\r?\n` line breaks (and stray `\r`s) between
    /// records without producing empty ones.
    fn eat_line_breaks(&mut self) {
        while matches!(self.current(), Some('\n' | '\r')) {
            self.bump();
        }
    }

    fn current(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    /// Advance one char, keeping row/column in step. Row counts every
    /// consumed newline, including newlines inside quoted values.
    fn bump(&mut self) {
        if let Some(c) = self.current() {
            self.pos += 1;
            if c == '\n' {
                self.row += 1;
                self.col = 1;
            } else {
                self.col += 1;
            }
        }
    }

    fn fail(&self, kind: ParseErrorKind) -> ParseError {
        ParseError {
            row: self.row,
            col: self.col,
            kind,
        }
    }
}
