//! Error types for logfmt parsing and template rendering.

use thiserror::Error;

/// Terminal outcome of a failed parse attempt.
///
/// Carries the 1-based row and column at the point of failure. Parsing is
/// all-or-nothing: when a `ParseError` is returned, no records are.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("parse error at row {row}, column {col}: {kind}")]
pub struct ParseError {
    /// 1-based row (newlines consumed so far, plus one).
    pub row: usize,
    /// 1-based offset within the current row.
    pub col: usize,
    /// The underlying scan-level violation.
    pub kind: ParseErrorKind,
}

/// The scan-level contract violations a parse can fail with.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// Backslash followed by anything other than the section terminator.
    #[error("invalid escaped character '{0}'")]
    InvalidEscape(char),

    /// The buffer ended before a quoted value's closing quote.
    #[error("unterminated quoted value")]
    UnterminatedQuote,

    /// A digit-only token that does not fit in a 64-bit signed integer.
    #[error("integer literal '{0}' is out of range")]
    IntegerOverflow(String),
}

/// Errors raised while applying a template's format specifiers.
///
/// Surfaced per render call so the caller can skip the record or abort the
/// batch; never allowed to abort a batch silently.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// The transform character was not one of `C`, `L`, `U`.
    #[error("the '{0}' format specifier is not supported")]
    UnsupportedSpecifier(String),
}
