//! # relog-core
//!
//! Parser and re-formatter for **logfmt**-style logs: line-oriented
//! `key=value` records with optional quoted values. Each parsed record is an
//! insertion-ordered map of typed values that can be re-rendered through a
//! small template language — `{name}` / `{name:spec}` placeholders where the
//! spec is a case transform plus an optional truncation length.
//!
//! ## Quick start
//!
//! ```rust
//! use relog_core::{parse, DEFAULT_TEMPLATE};
//!
//! let input = "level=info msg=\"hello world\" time=2024-01-01T10:00:00.000Z\n";
//! let records = parse(input).unwrap();
//!
//! let line = records[0].render(DEFAULT_TEMPLATE, None).unwrap();
//! assert_eq!(line, "2024-01-01T10:00:00.00 [I] hello world");
//! ```
//!
//! ## Modules
//!
//! - [`parser`] — character-level scanner, text buffer → `Vec<Record>`
//! - [`record`] — ordered records and template rendering
//! - [`value`] — typed field values and bare-token type inference
//! - [`format`] — `[transform][length]` field format specifiers
//! - [`error`] — parse and format error types

pub mod error;
pub mod format;
pub mod parser;
pub mod record;
pub mod value;

pub use error::{FormatError, ParseError, ParseErrorKind};
pub use format::{FieldFormat, Transform, DEFAULT_TEMPLATE};
pub use parser::{parse, Parser};
pub use record::Record;
pub use value::Value;
