//! Per-field format specifiers: `[transform][length]`.
//!
//! A specifier is one case-insensitive transform character followed by an
//! optional signed truncation length, e.g. `C22` (copy, first 22 chars),
//! `U1` (first char, uppercased), `L-4` (last 4 chars, lowercased).
//!
//! The order of operations is fixed: truncate first, then apply the case
//! transform to the truncated text. `U1` on `"info"` is `"I"`.

use crate::error::FormatError;

/// Template consumed when none is configured.
pub const DEFAULT_TEMPLATE: &str = "{time:C22} [{level:U1}] {msg}";

/// Case transform applied to a field's (possibly truncated) text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transform {
    /// `C` — copy through unchanged.
    Copy,
    /// `L` — force lowercase.
    Lower,
    /// `U` — force uppercase.
    Upper,
}

/// A parsed `[transform][length]` specifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldFormat {
    transform: Transform,
    length: i64,
}

impl FieldFormat {
    /// Parse a specifier string. The first character selects the transform
    /// (case-insensitively); any other character is an error. The remainder,
    /// if it parses as a signed integer, is the truncation length — a
    /// malformed remainder is ignored and only the transform applies.
    pub fn parse(spec: &str) -> Result<FieldFormat, FormatError> {
        let mut chars = spec.chars();
        let transform = match chars.next() {
            Some('c' | 'C') => Transform::Copy,
            Some('l' | 'L') => Transform::Lower,
            Some('u' | 'U') => Transform::Upper,
            _ => return Err(FormatError::UnsupportedSpecifier(spec.to_string())),
        };
        let length = chars.as_str().parse::<i64>().unwrap_or(0);
        Ok(FieldFormat { transform, length })
    }

    /// Truncate, then case-transform.
    pub fn apply(&self, text: &str) -> String {
        let truncated = self.truncate(text);
        match self.transform {
            Transform::Copy => truncated,
            Transform::Lower => truncated.to_lowercase(),
            Transform::Upper => truncated.to_uppercase(),
        }
    }

    /// Truncation is character-based and never pads: positive N keeps the
    /// first N chars, negative N keeps the last |N|, and a length of 0 or
    /// |N| >= len leaves the text unchanged.
    fn truncate(&self, text: &str) -> String {
        if self.length == 0 {
            return text.to_string();
        }
        let len = text.chars().count();
        let keep = self.length.unsigned_abs() as usize;
        if keep >= len {
            return text.to_string();
        }
        if self.length > 0 {
            text.chars().take(keep).collect()
        } else {
            text.chars().skip(len - keep).collect()
        }
    }
}
